use tracing::debug;

use crate::{
    binder::{BindArena, BindContext, BinderError, BoundColumnRef, ColumnRef},
    config::BinderConfig,
};

/// One query block being bound: its bindings plus every outer column its
/// expressions reached.
#[derive(Debug, Clone)]
pub struct QueryScope {
    pub context: BindContext,
    /// Distinct outer columns referenced from inside this block, in first
    /// reference order, with depth measured from this block.
    pub correlated: Vec<BoundColumnRef>,
}

impl QueryScope {
    fn new(context: BindContext) -> Self {
        Self { context, correlated: Vec::new() }
    }

    pub fn is_correlated(&self) -> bool {
        !self.correlated.is_empty()
    }

    fn record_correlated(&mut self, column: BoundColumnRef) {
        let seen = self.correlated.iter()
            .any(|c| c.binding == column.binding && c.depth == column.depth);
        if !seen {
            self.correlated.push(column);
        }
    }
}

/// Nested query scopes of one statement, innermost last.
///
/// The root scope is created with the stack and is never popped. Binding
/// indexes keep increasing across pushes and pops, so no two bindings of
/// the statement share one.
#[derive(Debug, Clone)]
pub struct ScopeStack {
    scopes: Vec<QueryScope>,
    config: BinderConfig,
}

impl ScopeStack {
    pub fn new(config: BinderConfig) -> Self {
        Self {
            scopes: vec![QueryScope::new(BindContext::new(&config))],
            config,
        }
    }

    /// Enter a subquery.
    pub fn push_scope(&mut self) -> &mut BindContext {
        let first = self.current().next_index();
        self.scopes.push(QueryScope::new(BindContext::starting_at(&self.config, first)));
        debug!(depth = self.depth(), "entered query scope");
        &mut self.innermost_mut().context
    }

    /// Leave the innermost subquery. Returns `None` at the root.
    pub fn pop_scope(&mut self) -> Option<QueryScope> {
        if self.scopes.len() == 1 {
            return None;
        }
        let scope = self.scopes.pop()?;
        let next = scope.context.next_index();
        self.innermost_mut().context.advance_index_to(next);
        debug!(depth = self.depth(), correlated = scope.correlated.len(), "left query scope");
        Some(scope)
    }

    pub fn current(&self) -> &BindContext {
        &self.innermost().context
    }

    pub fn current_mut(&mut self) -> &mut BindContext {
        &mut self.innermost_mut().context
    }

    pub fn current_scope(&self) -> &QueryScope {
        self.innermost()
    }

    /// Number of enclosing scopes around the innermost one.
    pub fn depth(&self) -> usize {
        self.scopes.len() - 1
    }

    /// Resolve `column` starting at the innermost scope with `start_depth`,
    /// moving outward one level (and one depth) at a time.
    ///
    /// Only "not here" failures (`UnknownColumn`, `UnknownAlias`) escalate;
    /// any other error stops the walk. When every scope misses, the
    /// innermost scope's error is returned. A hit above the innermost scope
    /// is recorded as correlated, once, in every scope it was reached through.
    pub fn resolve_across_scopes(&mut self, arena: &BindArena, column: &ColumnRef, start_depth: usize) -> Result<BoundColumnRef, BinderError> {
        let mut first_miss = None;
        let mut found = None;
        for (level, scope) in self.scopes.iter().rev().enumerate() {
            match scope.context.bind(arena, column, start_depth + level) {
                Ok(bound) => {
                    found = Some((level, bound));
                    break;
                }
                Err(err @ (BinderError::UnknownColumn { .. } | BinderError::UnknownAlias(_))) => {
                    first_miss.get_or_insert(err);
                }
                Err(err) => return Err(err),
            }
        }

        let (level, bound) = match found {
            Some(found) => found,
            None => {
                return Err(first_miss.unwrap_or_else(|| BinderError::UnknownColumn {
                    name: column.to_string(),
                    candidates: vec![],
                }));
            }
        };

        if bound.is_correlated() {
            debug!(%column, depth = bound.depth, "correlated column reference");
            let innermost = self.scopes.len() - 1;
            for l in 0..level {
                let mut outer = bound.clone();
                outer.depth = bound.depth - l;
                self.scopes[innermost - l].record_correlated(outer);
            }
        }
        Ok(bound)
    }

    fn innermost(&self) -> &QueryScope {
        // root scope is never popped
        &self.scopes[self.scopes.len() - 1]
    }

    fn innermost_mut(&mut self) -> &mut QueryScope {
        let last = self.scopes.len() - 1;
        &mut self.scopes[last]
    }
}
