use crate::{
    binder::{BindArena, ColumnLookup, NameMap, SourceColumn, TableFunctionId},
    config::IdentifierCase,
};

/// Binding to the result of a table-producing function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFunctionBinding {
    pub function: TableFunctionId,
    pub names: NameMap,
}

impl TableFunctionBinding {
    pub fn new(arena: &BindArena, function: TableFunctionId, case: IdentifierCase) -> Self {
        let names = arena.table_function(function).schema().columns.keys().cloned().collect();
        Self { function, names: NameMap::new(names, case) }
    }

    pub fn lookup(&self, arena: &BindArena, name: &str) -> ColumnLookup {
        match self.names.lookup(name) {
            [] => ColumnLookup::Missing,
            [position] => self.column_at(arena, *position)
                .map(ColumnLookup::Found)
                .unwrap_or(ColumnLookup::Missing),
            many => ColumnLookup::Duplicate(many.to_vec()),
        }
    }

    pub fn columns(&self, arena: &BindArena) -> Vec<SourceColumn> {
        let schema = arena.table_function(self.function).schema();
        schema.columns.iter()
            .enumerate()
            .filter(|(_, (_, info))| !info.hidden)
            .filter_map(|(pos, _)| self.column_at(arena, pos))
            .collect()
    }

    fn column_at(&self, arena: &BindArena, position: usize) -> Option<SourceColumn> {
        let (name, info) = arena.table_function(self.function).schema().column_at(position)?;
        Some(SourceColumn {
            position,
            name: name.to_string(),
            ty: info.ty,
            nullable: info.nullable,
        })
    }
}
