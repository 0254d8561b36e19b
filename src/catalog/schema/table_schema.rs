use indexmap::IndexMap;

use crate::{catalog::{ColumnInfo, SqlType}, config::IdentifierCase};

/// Declared columns of a table or of a table function's result.
///
/// The `columns` map keeps declaration order, which is the order `*`
/// expands to and the position every bound reference carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSchema {
    /// Map of column name -> column metadata
    pub columns: IndexMap<String, ColumnInfo>,
}

impl TableSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schema from `(name, type)` pairs; every column is nullable.
    pub fn from_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = (S, SqlType)>,
        S: Into<String>,
    {
        let mut schema = Self::new();
        for (name, ty) in columns {
            schema.columns.insert(name.into(), ColumnInfo::new(ty));
        }
        schema
    }

    /// Builder-style insertion keeping declaration order.
    pub fn with_column(mut self, name: impl Into<String>, info: ColumnInfo) -> Self {
        self.columns.insert(name.into(), info);
        self
    }

    /// Exact-name lookup.
    pub fn get(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns.get(name)
    }

    /// Every column matching `name` under the given identifier policy, in
    /// declaration order. More than one hit means the name is ambiguous.
    pub fn positions_of(&self, name: &str, case: IdentifierCase) -> Vec<usize> {
        self.columns.keys()
            .enumerate()
            .filter(|(_, col_name)| case.matches(col_name, name))
            .map(|(pos, _)| pos)
            .collect()
    }

    pub fn column_at(&self, pos: usize) -> Option<(&str, &ColumnInfo)> {
        self.columns.get_index(pos).map(|(name, info)| (name.as_str(), info))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Names of the columns a `*` would produce.
    pub fn visible_names(&self) -> Vec<String> {
        self.columns.iter()
            .filter(|(_, info)| !info.hidden)
            .map(|(name, _)| name.clone())
            .collect()
    }
}
