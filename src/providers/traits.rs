use crate::food::image::EncodedImage;
use crate::food::models::AnalysisResult;
use async_trait::async_trait;
use thiserror::Error;

/// What the user handed in for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisInput {
    Text(String),
    Image { data: String, media_type: String },
}

impl From<&EncodedImage> for AnalysisInput {
    fn from(image: &EncodedImage) -> Self {
        AnalysisInput::Image {
            data: image.data.clone(),
            media_type: image.media_type.clone(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("analysis failed: request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("analysis failed: request timed out")]
    Timeout,
    #[error("analysis failed: status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("analysis failed: service error: {0}")]
    Service(String),
    #[error("analysis failed: empty response")]
    EmptyResponse,
    #[error("analysis failed: malformed response: {0}")]
    MalformedResponse(String),
}

#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    async fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisResult, AnalysisError>;

    fn get_model_info(&self) -> String;

    fn get_system_instruction(&self) -> String;
}
