use crate::{
    binder::{BindArena, BinderError, ColumnLookup, NameMap, QueryNodeId, SourceColumn},
    config::IdentifierCase,
};

/// Binding to a derived table. The subquery is fully bound before this is
/// built, so its output names are final and copied verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubqueryBinding {
    pub node: QueryNodeId,
    pub names: NameMap,
}

impl SubqueryBinding {
    /// Fails with `ColumnCountMismatch` unless the node carries one type and
    /// one nullability flag per output name.
    pub fn new(arena: &BindArena, alias: &str, node: QueryNodeId, case: IdentifierCase) -> Result<Self, BinderError> {
        let output = arena.query_node(node);
        let columns = output.names.len();
        if output.types.len() != columns || output.nullable.len() != columns {
            return Err(BinderError::ColumnCountMismatch {
                alias: alias.to_string(),
                names: columns,
                types: output.types.len().min(output.nullable.len()),
            });
        }
        Ok(Self { node, names: NameMap::new(output.names.clone(), case) })
    }

    pub fn lookup(&self, arena: &BindArena, name: &str) -> ColumnLookup {
        match self.names.lookup(name) {
            [] => ColumnLookup::Missing,
            [position] => ColumnLookup::Found(self.column_at(arena, *position)),
            many => ColumnLookup::Duplicate(many.to_vec()),
        }
    }

    pub fn columns(&self, arena: &BindArena) -> Vec<SourceColumn> {
        (0..self.names.len()).map(|pos| self.column_at(arena, pos)).collect()
    }

    fn column_at(&self, arena: &BindArena, position: usize) -> SourceColumn {
        let node = arena.query_node(self.node);
        SourceColumn {
            position,
            name: self.names.names()[position].clone(),
            ty: node.types[position],
            nullable: node.nullable[position],
        }
    }
}
