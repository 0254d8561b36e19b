use std::fmt;

use crate::{binder::ColumnRef, catalog::SqlType};

/// Scope-assigned identifier tagging every column produced by one binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BindingIndex(pub usize);

impl fmt::Display for BindingIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// `(binding index, column position)`: what later planning stages use to
/// route physical column access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnBinding {
    pub table_index: BindingIndex,
    pub column_index: usize,
}

impl ColumnBinding {
    pub fn new(table_index: BindingIndex, column_index: usize) -> Self {
        Self { table_index, column_index }
    }
}

/// A resolved column reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundColumnRef {
    pub binding: ColumnBinding,
    /// column name as declared by the source
    pub name: String,
    pub ty: SqlType,
    pub nullable: bool,
    /// number of enclosing query scopes traversed to find the column
    pub depth: usize,
}

impl BoundColumnRef {
    pub fn is_correlated(&self) -> bool {
        self.depth > 0
    }
}

/// One entry of a `*` expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedColumn {
    /// `alias.column`
    pub name: ColumnRef,
    pub column: BoundColumnRef,
}
