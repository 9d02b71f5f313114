use crate::config::ProviderConfig;
use crate::food::models::AnalysisResult;
use crate::personality::AssistantPersona;
use crate::providers::traits::{AnalysisError, AnalysisInput, AnalysisProvider};
use crate::providers::utils::{candidate_text, parse_analysis, response_schema};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

const IMAGE_PROMPT: &str = "Identify the food in this image and provide nutritional data.";

#[derive(Clone)]
pub struct GeminiProvider {
    config: ProviderConfig,
    system_instruction: String,
    client: Client,
}

impl GeminiProvider {
    pub fn new(config: ProviderConfig, persona: &AssistantPersona) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            system_instruction: persona.generate_system_instruction(),
            config,
            client,
        })
    }

    fn build_request(&self, input: &AnalysisInput) -> Value {
        let parts = match input {
            AnalysisInput::Text(description) => json!([
                { "text": format!("Analyze this meal: {}", description) }
            ]),
            AnalysisInput::Image { data, media_type } => json!([
                { "inlineData": { "mimeType": media_type, "data": data } },
                { "text": IMAGE_PROMPT }
            ]),
        };

        let mut generation_config = json!({
            "responseMimeType": "application/json",
            "responseSchema": response_schema(),
        });
        if let Some(temperature) = self.config.temperature {
            generation_config["temperature"] = json!(temperature);
        }

        json!({
            "systemInstruction": { "parts": [{ "text": self.system_instruction }] },
            "contents": [{ "role": "user", "parts": parts }],
            "generationConfig": generation_config,
        })
    }
}

#[async_trait]
impl AnalysisProvider for GeminiProvider {
    async fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisResult, AnalysisError> {
        let response = self
            .client
            .post(self.config.endpoint())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&self.build_request(input))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;
        if !status.is_success() {
            return Err(AnalysisError::Status {
                status: status.as_u16(),
                body,
            });
        }
        if body.trim().is_empty() {
            return Err(AnalysisError::EmptyResponse);
        }

        let response_json: Value = serde_json::from_str(&body)
            .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;

        if let Some(error) = response_json.get("error") {
            return Err(AnalysisError::Service(error.to_string()));
        }

        let text = candidate_text(&response_json).ok_or(AnalysisError::EmptyResponse)?;
        log::debug!("Analysis response from {}: {}", self.config.model, text);
        parse_analysis(&text)
    }

    fn get_model_info(&self) -> String {
        self.config.model.clone()
    }

    fn get_system_instruction(&self) -> String {
        self.system_instruction.clone()
    }
}

/// The client timeout covers the whole exchange, so it can fire while the body
/// is still streaming as well as before the headers arrive.
fn transport_error(e: reqwest::Error) -> AnalysisError {
    if e.is_timeout() {
        AnalysisError::Timeout
    } else {
        AnalysisError::Request(e)
    }
}
