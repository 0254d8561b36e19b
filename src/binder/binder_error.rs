use thiserror::Error;

/// Query errors raised while resolving names. Every variant rejects the
/// whole statement; there is no partial bind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BinderError {
    #[error("Binding alias must not be empty")]
    EmptyAlias,

    #[error("Duplicate alias \"{0}\" in query")]
    DuplicateAlias(String),

    #[error("Referenced table \"{0}\" not found in FROM clause")]
    UnknownAlias(String),

    #[error("Referenced column \"{name}\" not found{}", candidates_hint(.candidates))]
    UnknownColumn { name: String, candidates: Vec<String> },

    #[error("Ambiguous reference to column name \"{name}\" (found in: {})", .aliases.join(", "))]
    AmbiguousColumn { name: String, aliases: Vec<String> },

    #[error("Table \"{0}\" does not exist")]
    UnknownTable(String),

    #[error("Table function \"{0}\" does not exist")]
    UnknownTableFunction(String),

    #[error("Binding \"{alias}\" declares {names} column names but {types} types")]
    ColumnCountMismatch { alias: String, names: usize, types: usize },

    #[error("Invalid binder config: {0}")]
    InvalidConfig(String),
}

fn candidates_hint(candidates: &[String]) -> String {
    if candidates.is_empty() {
        String::new()
    } else {
        format!("; candidates: {}", candidates.join(", "))
    }
}
