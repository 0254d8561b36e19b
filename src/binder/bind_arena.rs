use std::sync::Arc;

use crate::{binder::ExpandedColumn, catalog::{SqlType, TableCatalogEntry, TableFunctionCatalogEntry, TableSchema}};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableRefId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryNodeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableFunctionId(usize);

/// A base table bound in a FROM clause.
#[derive(Debug, Clone)]
pub struct BoundBaseTableRef {
    pub table: Arc<TableCatalogEntry>,
}

/// The finalized output of a bound subquery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundQueryNode {
    pub names: Vec<String>,
    pub types: Vec<SqlType>,
    pub nullable: Vec<bool>,
}

impl BoundQueryNode {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = (S, SqlType)>,
        S: Into<String>,
    {
        let mut node = Self::default();
        for (name, ty) in columns {
            node.names.push(name.into());
            node.types.push(ty);
            node.nullable.push(true);
        }
        node
    }

    /// Output of `SELECT <expanded columns>`: one column per entry, named
    /// after the source column.
    pub fn from_columns(columns: &[ExpandedColumn]) -> Self {
        let mut node = Self::default();
        for expanded in columns {
            node.names.push(expanded.column.name.clone());
            node.types.push(expanded.column.ty);
            node.nullable.push(expanded.column.nullable);
        }
        node
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A table function call bound in a FROM clause.
#[derive(Debug, Clone)]
pub struct BoundTableFunction {
    pub function: Arc<TableFunctionCatalogEntry>,
}

impl BoundTableFunction {
    pub fn schema(&self) -> &TableSchema {
        &self.function.schema
    }
}

/// Owns every bound FROM item of one statement.
///
/// Bindings keep only the typed ids handed out here, so the arena must
/// outlive every scope built from it. Ids are never reused; an id from a
/// different arena is a programming error and panics on access.
#[derive(Debug, Default)]
pub struct BindArena {
    tables: Vec<BoundBaseTableRef>,
    query_nodes: Vec<BoundQueryNode>,
    functions: Vec<BoundTableFunction>,
}

impl BindArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_table(&mut self, table: Arc<TableCatalogEntry>) -> TableRefId {
        self.tables.push(BoundBaseTableRef { table });
        TableRefId(self.tables.len() - 1)
    }

    pub fn add_query_node(&mut self, node: BoundQueryNode) -> QueryNodeId {
        self.query_nodes.push(node);
        QueryNodeId(self.query_nodes.len() - 1)
    }

    pub fn add_table_function(&mut self, function: Arc<TableFunctionCatalogEntry>) -> TableFunctionId {
        self.functions.push(BoundTableFunction { function });
        TableFunctionId(self.functions.len() - 1)
    }

    pub fn table(&self, id: TableRefId) -> &BoundBaseTableRef {
        &self.tables[id.0]
    }

    pub fn query_node(&self, id: QueryNodeId) -> &BoundQueryNode {
        &self.query_nodes[id.0]
    }

    pub fn table_function(&self, id: TableFunctionId) -> &BoundTableFunction {
        &self.functions[id.0]
    }
}
