use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// How aliases and column names are compared during resolution.
///
/// - `Sensitive`: names must match byte for byte (default).
/// - `Insensitive`: ASCII case is ignored; declared spelling is preserved in
///   every bound reference.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierCase {
    #[default]
    Sensitive,
    Insensitive,
}

impl IdentifierCase {
    /// Key under which a name is stored in lookup maps.
    pub fn normalize<'a>(&self, name: &'a str) -> Cow<'a, str> {
        match self {
            IdentifierCase::Sensitive => Cow::Borrowed(name),
            IdentifierCase::Insensitive => Cow::Owned(name.to_ascii_lowercase()),
        }
    }

    pub fn matches(&self, a: &str, b: &str) -> bool {
        match self {
            IdentifierCase::Sensitive => a == b,
            IdentifierCase::Insensitive => a.eq_ignore_ascii_case(b),
        }
    }
}
