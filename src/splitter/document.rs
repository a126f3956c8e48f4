use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A chunk of text ready for indexing or embedding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// The text content of this chunk
    pub content: String,
    /// Arbitrary metadata attached to the chunk
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

impl Document {
    /// Create a document with empty metadata
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            metadata: HashMap::new(),
        }
    }
}
