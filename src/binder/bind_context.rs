use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, trace};

use crate::{
    binder::{
        BindArena, BinderError, Binding, BindingIndex, BindingSource, BoundColumnRef, ColumnRef, ExpandedColumn,
        GenericBinding, QueryNodeId, SubqueryBinding, TableBinding, TableFunctionBinding, TableFunctionId, TableRefId,
    },
    catalog::SqlType,
    config::{BinderConfig, IdentifierCase},
};

/// The bindings visible in one query block, keyed by alias.
///
/// Insertion order is declaration order: it drives unqualified lookup
/// diagnostics and `*` expansion. Depth is not tracked here; callers pass
/// the depth of the lookup they are performing.
#[derive(Debug, Clone)]
pub struct BindContext {
    /// normalized alias -> binding
    bindings: IndexMap<String, Binding>,
    next_index: usize,
    case: IdentifierCase,
}

impl BindContext {
    pub fn new(config: &BinderConfig) -> Self {
        Self::starting_at(config, BindingIndex(0))
    }

    /// A context whose first binding gets `first` as its index.
    pub fn starting_at(config: &BinderConfig, first: BindingIndex) -> Self {
        Self {
            bindings: IndexMap::new(),
            next_index: first.0,
            case: config.identifier_case,
        }
    }

    /// Index the next added binding will receive.
    pub fn next_index(&self) -> BindingIndex {
        BindingIndex(self.next_index)
    }

    /// Skip past indexes handed out by a nested scope.
    pub(crate) fn advance_index_to(&mut self, next: BindingIndex) {
        self.next_index = self.next_index.max(next.0);
    }

    pub fn identifier_case(&self) -> IdentifierCase {
        self.case
    }

    pub fn add_binding(&mut self, alias: &str, source: BindingSource) -> Result<BindingIndex, BinderError> {
        self.check_alias(alias)?;

        let index = BindingIndex(self.next_index);
        debug_assert!(
            self.bindings.values().all(|b| b.index != index),
            "binding index {} assigned twice",
            index
        );
        self.next_index += 1;

        let binding = Binding::new(alias, index, source, self.case);
        debug!(alias, %index, kind = ?binding.kind(), "added binding");
        self.bindings.insert(self.case.normalize(alias).into_owned(), binding);
        Ok(index)
    }

    pub fn add_table(&mut self, alias: &str, table: TableRefId) -> Result<BindingIndex, BinderError> {
        self.add_binding(alias, BindingSource::Table(TableBinding::new(table)))
    }

    pub fn add_subquery(&mut self, arena: &BindArena, alias: &str, node: QueryNodeId) -> Result<BindingIndex, BinderError> {
        self.check_alias(alias)?;
        let source = SubqueryBinding::new(arena, alias, node, self.case)?;
        if source.names.has_duplicates() {
            debug!(alias, "subquery exposes duplicate column names");
        }
        self.add_binding(alias, BindingSource::Subquery(source))
    }

    pub fn add_table_function(&mut self, arena: &BindArena, alias: &str, function: TableFunctionId) -> Result<BindingIndex, BinderError> {
        let source = TableFunctionBinding::new(arena, function, self.case);
        self.add_binding(alias, BindingSource::TableFunction(source))
    }

    pub fn add_generic(&mut self, alias: &str, types: Vec<SqlType>, names: Vec<String>) -> Result<BindingIndex, BinderError> {
        self.check_alias(alias)?;
        let source = GenericBinding::new(alias, types, names, self.case)?;
        self.add_binding(alias, BindingSource::Generic(source))
    }

    pub fn add_values(&mut self, alias: &str, names: Vec<String>, rows: &[Vec<Value>]) -> Result<BindingIndex, BinderError> {
        self.check_alias(alias)?;
        let source = GenericBinding::from_values(alias, names, rows, self.case)?;
        self.add_binding(alias, BindingSource::Generic(source))
    }

    pub fn get_binding(&self, alias: &str) -> Option<&Binding> {
        self.bindings.get(&*self.case.normalize(alias))
    }

    pub fn bindings(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.values()
    }

    /// Aliases as declared, in declaration order.
    pub fn aliases(&self) -> Vec<&str> {
        self.bindings.values().map(|b| b.alias.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Resolve a column reference against this scope only.
    pub fn bind(&self, arena: &BindArena, column: &ColumnRef, depth: usize) -> Result<BoundColumnRef, BinderError> {
        trace!(%column, depth, "binding column");
        match column {
            ColumnRef::Qualified { table, name } => {
                let binding = self.get_binding(table)
                    .ok_or_else(|| BinderError::UnknownAlias(table.clone()))?;
                binding.resolve(arena, name, depth)
            }
            ColumnRef::Name { name } => {
                let matches: Vec<&Binding> = self.bindings.values()
                    .filter(|binding| binding.has_column(arena, name))
                    .collect();
                match matches.as_slice() {
                    [] => Err(BinderError::UnknownColumn {
                        name: name.clone(),
                        candidates: self.bindings.values().flat_map(|b| b.candidates(arena)).collect(),
                    }),
                    [binding] => binding.resolve(arena, name, depth),
                    _ => Err(BinderError::AmbiguousColumn {
                        name: name.clone(),
                        aliases: matches.iter().map(|b| b.alias.clone()).collect(),
                    }),
                }
            }
        }
    }

    /// `SELECT *`: every binding's columns, bindings in declaration order.
    pub fn generate_all_column_expressions(&self, arena: &BindArena) -> Vec<ExpandedColumn> {
        let mut result = Vec::new();
        for binding in self.bindings.values() {
            binding.expand_columns(arena, &mut result);
        }
        result
    }

    /// `SELECT alias.*`
    pub fn generate_column_expressions(&self, arena: &BindArena, alias: &str) -> Result<Vec<ExpandedColumn>, BinderError> {
        let binding = self.get_binding(alias)
            .ok_or_else(|| BinderError::UnknownAlias(alias.to_string()))?;
        let mut result = Vec::new();
        binding.expand_columns(arena, &mut result);
        Ok(result)
    }

    /// Expand `*` (`None`) or `alias.*` (`Some(alias)`).
    pub fn expand_star(&self, arena: &BindArena, alias: Option<&str>) -> Result<Vec<ExpandedColumn>, BinderError> {
        match alias {
            Some(alias) => self.generate_column_expressions(arena, alias),
            None => Ok(self.generate_all_column_expressions(arena)),
        }
    }

    fn check_alias(&self, alias: &str) -> Result<(), BinderError> {
        if alias.is_empty() {
            return Err(BinderError::EmptyAlias);
        }
        if self.get_binding(alias).is_some() {
            return Err(BinderError::DuplicateAlias(alias.to_string()));
        }
        Ok(())
    }
}
