use std::{collections::HashMap, sync::Arc};

use crate::catalog::{TableCatalogEntry, TableFunctionCatalogEntry, TableSchema};

pub trait CatalogProvider {
    /// Physical table registered under `name`, if any.
    fn table(&self, name: &str) -> Option<Arc<TableCatalogEntry>>;

    /// Table-producing function registered under `name`, if any.
    fn table_function(&self, name: &str) -> Option<Arc<TableFunctionCatalogEntry>>;
}

/// In-memory catalog of tables and table functions.
///
/// Entries are handed out behind `Arc` so a binder keeps one immutable view
/// of each table for the whole statement.
#[derive(Debug, Default)]
pub struct Catalog {
    tables: HashMap<String, Arc<TableCatalogEntry>>,
    functions: HashMap<String, Arc<TableFunctionCatalogEntry>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_table(&mut self, name: &str, schema: TableSchema) -> Arc<TableCatalogEntry> {
        let entry = Arc::new(TableCatalogEntry::new(name, schema));
        self.tables.insert(name.to_string(), Arc::clone(&entry));
        entry
    }

    pub fn create_table_function(&mut self, name: &str, schema: TableSchema) -> Arc<TableFunctionCatalogEntry> {
        let entry = Arc::new(TableFunctionCatalogEntry::new(name, schema));
        self.functions.insert(name.to_string(), Arc::clone(&entry));
        entry
    }

    pub fn list_tables(&self) -> Vec<String> {
        self.tables.keys().cloned().collect::<Vec<_>>()
    }
}

impl CatalogProvider for Catalog {
    fn table(&self, name: &str) -> Option<Arc<TableCatalogEntry>> {
        self.tables.get(name).map(Arc::clone)
    }

    fn table_function(&self, name: &str) -> Option<Arc<TableFunctionCatalogEntry>> {
        self.functions.get(name).map(Arc::clone)
    }
}
