//! Card photos as handed to a recognizer.
//!
//! This type never decodes the bytes. The media type is guessed from the file
//! extension and labels the data URL sent to vision endpoints.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bytes::Bytes;

/// An opaque card photo plus its media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    bytes: Bytes,
    media_type: &'static str,
}

impl CardImage {
    pub fn new(bytes: impl Into<Bytes>, media_type: &'static str) -> Self {
        Self {
            bytes: bytes.into(),
            media_type,
        }
    }

    /// Read an image file; the media type comes from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        Ok(Self::new(bytes, media_type_for(path)))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn media_type(&self) -> &'static str {
        self.media_type
    }

    /// `data:` URL with the image base64-encoded, as vision endpoints expect.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, STANDARD.encode(&self.bytes))
    }
}

fn media_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("txt") => "text/plain",
        _ => "image/png",
    }
}
