use serde_json::Value;
use tracing::debug;

use crate::{
    binder::{
        BindArena, BindContext, BinderError, BindingIndex, BoundColumnRef, BoundQueryNode, ColumnRef, ExpandedColumn,
        QueryScope, ScopeStack,
    },
    catalog::{CatalogProvider, SqlType},
    config::BinderConfig,
};

/// Binds the FROM items and column references of one statement.
///
/// Owns the arena of bound FROM items and the stack of query scopes, so
/// everything a binding points at lives as long as the binder.
pub struct Binder<'a> {
    catalog: &'a dyn CatalogProvider,
    config: BinderConfig,
    arena: BindArena,
    scopes: ScopeStack,
}

impl<'a> Binder<'a> {
    pub fn new(catalog: &'a dyn CatalogProvider, config: BinderConfig) -> Self {
        Self {
            catalog,
            config,
            arena: BindArena::new(),
            scopes: ScopeStack::new(config),
        }
    }

    pub fn config(&self) -> &BinderConfig {
        &self.config
    }

    pub fn arena(&self) -> &BindArena {
        &self.arena
    }

    pub fn scopes(&self) -> &ScopeStack {
        &self.scopes
    }

    /// Bindings of the innermost query block.
    pub fn context(&self) -> &BindContext {
        self.scopes.current()
    }

    /// `FROM name [AS alias]`
    pub fn bind_base_table(&mut self, name: &str, alias: Option<&str>) -> Result<BindingIndex, BinderError> {
        let table = self.catalog.table(name)
            .ok_or_else(|| BinderError::UnknownTable(name.to_string()))?;
        let alias = alias.unwrap_or(name);
        let id = self.arena.add_table(table);
        self.scopes.current_mut().add_table(alias, id)
    }

    /// `FROM (subquery) AS alias`; `node` is the already bound subquery output.
    pub fn bind_subquery(&mut self, alias: &str, node: BoundQueryNode) -> Result<BindingIndex, BinderError> {
        let id = self.arena.add_query_node(node);
        self.scopes.current_mut().add_subquery(&self.arena, alias, id)
    }

    /// `FROM function(...) [AS alias]`
    pub fn bind_table_function(&mut self, name: &str, alias: Option<&str>) -> Result<BindingIndex, BinderError> {
        let function = self.catalog.table_function(name)
            .ok_or_else(|| BinderError::UnknownTableFunction(name.to_string()))?;
        let alias = alias.unwrap_or(name);
        let id = self.arena.add_table_function(function);
        self.scopes.current_mut().add_table_function(&self.arena, alias, id)
    }

    pub fn bind_generic(&mut self, alias: &str, types: Vec<SqlType>, names: Vec<String>) -> Result<BindingIndex, BinderError> {
        self.scopes.current_mut().add_generic(alias, types, names)
    }

    /// `(VALUES ...) AS alias(names)`
    pub fn bind_values(&mut self, alias: &str, names: Vec<String>, rows: &[Vec<Value>]) -> Result<BindingIndex, BinderError> {
        self.scopes.current_mut().add_values(alias, names, rows)
    }

    /// Resolve a column reference from the innermost query block outward.
    pub fn bind_column(&mut self, column: &ColumnRef) -> Result<BoundColumnRef, BinderError> {
        self.scopes.resolve_across_scopes(&self.arena, column, 0)
    }

    /// `*` or `alias.*` over the innermost query block.
    pub fn expand_star(&self, alias: Option<&str>) -> Result<Vec<ExpandedColumn>, BinderError> {
        self.scopes.current().expand_star(&self.arena, alias)
    }

    pub fn enter_subquery(&mut self) {
        self.scopes.push_scope();
    }

    /// Finish the innermost subquery; `None` when already at the statement root.
    pub fn leave_subquery(&mut self) -> Option<QueryScope> {
        let scope = self.scopes.pop_scope()?;
        if scope.is_correlated() {
            debug!(aliases = ?scope.context.aliases(), "subquery is correlated");
        }
        Some(scope)
    }
}
