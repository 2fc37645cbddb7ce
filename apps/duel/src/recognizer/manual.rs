use async_trait::async_trait;

use super::{CardImage, CardRecognizer, RecognizerError};
use crate::domain::{parse_card_label, CardValue};

/// Treats the image bytes as a UTF-8 label such as `"K"` or `"queen"`.
pub struct ManualRecognizer;

impl ManualRecognizer {
    pub const NAME: &'static str = "ManualRecognizer";

    /// Wrap a typed label so it can go through the same path as a photo.
    pub fn image_for(label: &str) -> CardImage {
        CardImage::new(label.as_bytes().to_vec(), "text/plain")
    }
}

#[async_trait]
impl CardRecognizer for ManualRecognizer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn recognize(&self, image: &CardImage) -> Result<CardValue, RecognizerError> {
        let text = String::from_utf8_lossy(image.bytes());
        parse_card_label(&text).map_err(|_| RecognizerError::Unrecognized(text.trim().to_string()))
    }
}
