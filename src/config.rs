//! Options for codecs and multi-graph operations.

use serde::{Deserialize, Serialize};

/// Serialization options shared by every codec.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    /// Declare every integer column as `INT`, even when the value needs
    /// `BIGINT`. Gephi only understands `INT`.
    #[serde(alias = "gephi")]
    pub compat_int: bool,
}

impl CodecOptions {
    /// Options for files meant to be opened in Gephi.
    pub fn gephi() -> Self {
        Self { compat_int: true }
    }
}

/// Options for [`crate::algebra`] folds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlgebraOptions {
    /// Before combining, drop every node/edge attribute that is not present
    /// on the first node/edge of every operand.
    pub same_fields: bool,
}

impl AlgebraOptions {
    pub fn same_fields() -> Self {
        Self { same_fields: true }
    }
}
