use std::fmt;

/// An unresolved column reference as written in the query.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum ColumnRef {
    Name { name: String },
    Qualified { table: String, name: String },
}

impl ColumnRef {
    pub fn name(name: impl Into<String>) -> Self {
        ColumnRef::Name { name: name.into() }
    }

    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> Self {
        ColumnRef::Qualified { table: table.into(), name: name.into() }
    }

    /// Split a dotted reference (`col` or `alias.col`). Returns `None` for
    /// empty parts or more than one qualifier.
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.split('.');
        let first = parts.next()?;
        let result = match (parts.next(), parts.next()) {
            (None, _) if !first.is_empty() => ColumnRef::name(first),
            (Some(second), None) if !first.is_empty() && !second.is_empty() => ColumnRef::qualified(first, second),
            _ => return None,
        };
        Some(result)
    }

    pub fn column_name(&self) -> &str {
        match self {
            ColumnRef::Name { name } | ColumnRef::Qualified { name, .. } => name,
        }
    }

    pub fn table(&self) -> Option<&str> {
        match self {
            ColumnRef::Name { .. } => None,
            ColumnRef::Qualified { table, .. } => Some(table),
        }
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnRef::Name { name } => write!(f, "{}", name),
            ColumnRef::Qualified { table, name } => write!(f, "{}.{}", table, name),
        }
    }
}

impl fmt::Debug for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnRef::Name { .. } => write!(f, "ColumnRef::Name({})", self),
            ColumnRef::Qualified { .. } => write!(f, "ColumnRef::Qualified({})", self),
        }
    }
}
