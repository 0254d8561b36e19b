use crate::catalog::TableSchema;

/// A physical table as registered in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCatalogEntry {
    pub name: String,
    pub schema: TableSchema,
}

impl TableCatalogEntry {
    pub fn new(name: impl Into<String>, schema: TableSchema) -> Self {
        Self { name: name.into(), schema }
    }
}

/// A table-producing function; `schema` describes the columns it returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFunctionCatalogEntry {
    pub name: String,
    pub schema: TableSchema,
}

impl TableFunctionCatalogEntry {
    pub fn new(name: impl Into<String>, schema: TableSchema) -> Self {
        Self { name: name.into(), schema }
    }
}
