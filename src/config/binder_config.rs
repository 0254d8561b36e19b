use serde::{Deserialize, Serialize};

use crate::{binder::BinderError, config::IdentifierCase};

/// Binder configuration.
///
/// - `identifier_case` controls how aliases and column names are matched.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BinderConfig {
    /// Matching policy for aliases and column names
    pub identifier_case: IdentifierCase,
}

impl BinderConfig {
    /// Create default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience: exact-match identifiers.
    pub fn case_sensitive() -> Self {
        Self { identifier_case: IdentifierCase::Sensitive }
    }

    /// Convenience: ASCII case-insensitive identifiers.
    pub fn case_insensitive() -> Self {
        Self { identifier_case: IdentifierCase::Insensitive }
    }

    /// Load from a JSON document such as `{"identifier_case": "insensitive"}`.
    /// Missing keys fall back to defaults.
    pub fn from_json(text: &str) -> Result<Self, BinderError> {
        serde_json::from_str(text).map_err(|err| BinderError::InvalidConfig(err.to_string()))
    }
}
