//! Configuration types for building sequences

use serde::{Deserialize, Serialize};

use crate::metadata::SequenceMetadata;

/// Settings a [`crate::Streamifier`] starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamifierConfig {
    #[serde(default)]
    pub parallel: bool,
    #[serde(default = "default_metadata")]
    pub metadata: SequenceMetadata,
}

fn default_metadata() -> SequenceMetadata {
    SequenceMetadata::ordered()
}

impl Default for StreamifierConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            metadata: default_metadata(),
        }
    }
}
