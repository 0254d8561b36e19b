use tracing::trace;

use crate::{
    binder::{
        BindArena, BinderError, BindingIndex, BoundColumnRef, ColumnBinding, ColumnRef, ExpandedColumn,
        GenericBinding, SubqueryBinding, TableBinding, TableFunctionBinding,
    },
    catalog::SqlType,
    config::IdentifierCase,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingKind {
    Table,
    Subquery,
    TableFunction,
    Generic,
}

/// A column as exposed by one binding source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceColumn {
    pub position: usize,
    pub name: String,
    pub ty: SqlType,
    pub nullable: bool,
}

/// Outcome of a name lookup inside a single binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnLookup {
    Found(SourceColumn),
    /// The source declares the name at more than one position.
    Duplicate(Vec<usize>),
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingSource {
    Table(TableBinding),
    Subquery(SubqueryBinding),
    TableFunction(TableFunctionBinding),
    Generic(GenericBinding),
}

/// A named, indexed source of columns visible in one query scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub alias: String,
    pub index: BindingIndex,
    pub source: BindingSource,
    case: IdentifierCase,
}

impl Binding {
    pub fn new(alias: impl Into<String>, index: BindingIndex, source: BindingSource, case: IdentifierCase) -> Self {
        Self { alias: alias.into(), index, source, case }
    }

    pub fn kind(&self) -> BindingKind {
        match self.source {
            BindingSource::Table(_) => BindingKind::Table,
            BindingSource::Subquery(_) => BindingKind::Subquery,
            BindingSource::TableFunction(_) => BindingKind::TableFunction,
            BindingSource::Generic(_) => BindingKind::Generic,
        }
    }

    pub fn lookup(&self, arena: &BindArena, name: &str) -> ColumnLookup {
        if name.is_empty() {
            return ColumnLookup::Missing;
        }
        match &self.source {
            BindingSource::Table(table) => table.lookup(arena, name, self.case),
            BindingSource::Subquery(subquery) => subquery.lookup(arena, name),
            BindingSource::TableFunction(function) => function.lookup(arena, name),
            BindingSource::Generic(generic) => generic.lookup(name),
        }
    }

    /// Membership test. Never fails; a name declared twice still counts.
    pub fn has_column(&self, arena: &BindArena, name: &str) -> bool {
        !matches!(self.lookup(arena, name), ColumnLookup::Missing)
    }

    /// Resolve `name` at the depth supplied by the caller.
    pub fn resolve(&self, arena: &BindArena, name: &str, depth: usize) -> Result<BoundColumnRef, BinderError> {
        match self.lookup(arena, name) {
            ColumnLookup::Found(column) => {
                trace!(alias = %self.alias, column = %column.name, position = column.position, depth, "resolved column");
                Ok(self.bound(column, depth))
            }
            ColumnLookup::Duplicate(_) => Err(BinderError::AmbiguousColumn {
                name: name.to_string(),
                aliases: vec![self.alias.clone()],
            }),
            ColumnLookup::Missing => Err(BinderError::UnknownColumn {
                name: ColumnRef::qualified(self.alias.as_str(), name).to_string(),
                candidates: self.candidates(arena),
            }),
        }
    }

    /// Append one qualified reference per selectable column, in column order.
    pub fn expand_columns(&self, arena: &BindArena, target: &mut Vec<ExpandedColumn>) {
        for column in self.columns(arena) {
            target.push(ExpandedColumn {
                name: ColumnRef::qualified(self.alias.as_str(), column.name.as_str()),
                column: self.bound(column, 0),
            });
        }
    }

    /// `alias.column` for every selectable column, used in diagnostics.
    pub fn candidates(&self, arena: &BindArena) -> Vec<String> {
        self.columns(arena).into_iter()
            .map(|column| ColumnRef::qualified(self.alias.as_str(), column.name).to_string())
            .collect()
    }

    fn columns(&self, arena: &BindArena) -> Vec<SourceColumn> {
        match &self.source {
            BindingSource::Table(table) => table.columns(arena),
            BindingSource::Subquery(subquery) => subquery.columns(arena),
            BindingSource::TableFunction(function) => function.columns(arena),
            BindingSource::Generic(generic) => generic.columns(),
        }
    }

    fn bound(&self, column: SourceColumn, depth: usize) -> BoundColumnRef {
        BoundColumnRef {
            binding: ColumnBinding::new(self.index, column.position),
            name: column.name,
            ty: column.ty,
            nullable: column.nullable,
            depth,
        }
    }
}
