//! Selectable model catalogs.
//!
//! Each hosted model is addressed by an id plus a deployment tag. The
//! catalogs are fixed; asking for an unknown id yields the default entry.

use serde::Serialize;
use tracing::warn;

/// A concrete model deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelChoice {
    pub id: String,
    pub tag: String,
}

/// Fixed id-to-tag table; the first entry is the default.
#[derive(Debug, Clone, Copy)]
pub struct ModelCatalog {
    pub kind: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

/// Language models that can drive the opponent.
pub const LLM_MODELS: ModelCatalog = ModelCatalog {
    kind: "llm",
    entries: &[("DeepSeek-R1-Distill-Qwen-32B", "dev"), ("QwQ-32B", "poker")],
};

/// Vision models that can recognize photographed cards.
pub const VLM_MODELS: ModelCatalog = ModelCatalog {
    kind: "vlm",
    entries: &[("gemma-3-27b-it", "dev")],
};

impl ModelCatalog {
    pub fn ids(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(id, _)| *id)
    }

    pub fn default_choice(&self) -> ModelChoice {
        let (id, tag) = self.entries[0];
        ModelChoice {
            id: id.to_string(),
            tag: tag.to_string(),
        }
    }

    pub fn find(&self, id: &str) -> Option<ModelChoice> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(id, tag)| ModelChoice {
                id: id.to_string(),
                tag: tag.to_string(),
            })
    }

    /// Catalog entry for `id`, or the default when `id` is unknown.
    pub fn select(&self, id: &str) -> ModelChoice {
        self.find(id).unwrap_or_else(|| {
            let fallback = self.default_choice();
            warn!(
                kind = self.kind,
                requested = %id,
                using = %fallback.id,
                "Unknown model id, using catalog default"
            );
            fallback
        })
    }
}
