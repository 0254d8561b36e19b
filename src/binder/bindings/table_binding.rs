use crate::{
    binder::{BindArena, ColumnLookup, SourceColumn, TableRefId},
    config::IdentifierCase,
};

/// Binding to a physical table. Columns are read from the catalog entry the
/// table ref holds, never cached here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableBinding {
    pub table: TableRefId,
}

impl TableBinding {
    pub fn new(table: TableRefId) -> Self {
        Self { table }
    }

    pub fn lookup(&self, arena: &BindArena, name: &str, case: IdentifierCase) -> ColumnLookup {
        let schema = &arena.table(self.table).table.schema;
        let positions = schema.positions_of(name, case);
        match positions.as_slice() {
            [] => ColumnLookup::Missing,
            [position] => schema.column_at(*position)
                .map(|(declared, info)| ColumnLookup::Found(SourceColumn {
                    position: *position,
                    name: declared.to_string(),
                    ty: info.ty,
                    nullable: info.nullable,
                }))
                .unwrap_or(ColumnLookup::Missing),
            _ => ColumnLookup::Duplicate(positions),
        }
    }

    /// Selectable columns in catalog order; hidden columns are skipped but
    /// keep their positions.
    pub fn columns(&self, arena: &BindArena) -> Vec<SourceColumn> {
        let schema = &arena.table(self.table).table.schema;
        schema.columns.iter()
            .enumerate()
            .filter(|(_, (_, info))| !info.hidden)
            .map(|(position, (name, info))| SourceColumn {
                position,
                name: name.clone(),
                ty: info.ty,
                nullable: info.nullable,
            })
            .collect()
    }
}
