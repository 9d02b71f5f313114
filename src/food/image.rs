use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::ImageFormat;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is empty", .0.display())]
    Empty(PathBuf),
    #[error(
        "{} is not a supported image file (use PNG, JPEG, GIF, WebP, BMP, TIFF, ICO or AVIF; HEIC/HEIF photos must be converted first)",
        .0.display()
    )]
    NotAnImage(PathBuf),
}

/// A photo encoded for both display and the outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub media_type: String,
    /// Standard base64 of the raw file bytes.
    pub data: String,
}

impl EncodedImage {
    pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ImageError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|source| ImageError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes).map_err(|e| match e {
            ImageError::Empty(_) => ImageError::Empty(path.to_path_buf()),
            _ => ImageError::NotAnImage(path.to_path_buf()),
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ImageError> {
        if bytes.is_empty() {
            return Err(ImageError::Empty(PathBuf::new()));
        }
        let media_type = image::guess_format(bytes)
            .ok()
            .and_then(media_type_for)
            .ok_or_else(|| ImageError::NotAnImage(PathBuf::new()))?;

        Ok(Self {
            media_type: media_type.to_string(),
            data: STANDARD.encode(bytes),
        })
    }

    /// Self-contained `data:` URL stored on the log entry.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.data)
    }

    /// Approximate size of the decoded payload in bytes.
    pub fn byte_len(&self) -> usize {
        self.data.len() / 4 * 3
    }
}

fn media_type_for(format: ImageFormat) -> Option<&'static str> {
    match format {
        ImageFormat::Png => Some("image/png"),
        ImageFormat::Jpeg => Some("image/jpeg"),
        ImageFormat::Gif => Some("image/gif"),
        ImageFormat::WebP => Some("image/webp"),
        ImageFormat::Bmp => Some("image/bmp"),
        ImageFormat::Tiff => Some("image/tiff"),
        ImageFormat::Ico => Some("image/x-icon"),
        ImageFormat::Avif => Some("image/avif"),
        _ => None,
    }
}
