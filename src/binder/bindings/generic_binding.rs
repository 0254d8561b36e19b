use serde_json::Value;

use crate::{
    binder::{BinderError, ColumnLookup, NameMap, SourceColumn},
    catalog::{ColumnInfo, SqlType},
    config::IdentifierCase,
};

/// Binding over an explicit `(types, names)` pair, used where no bound node
/// exists (VALUES lists, CTE placeholders).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericBinding {
    pub types: Vec<SqlType>,
    pub nullable: Vec<bool>,
    pub names: NameMap,
}

impl GenericBinding {
    pub fn new(alias: &str, types: Vec<SqlType>, names: Vec<String>, case: IdentifierCase) -> Result<Self, BinderError> {
        if types.len() != names.len() {
            return Err(BinderError::ColumnCountMismatch {
                alias: alias.to_string(),
                names: names.len(),
                types: types.len(),
            });
        }
        let nullable = vec![true; types.len()];
        Ok(Self { types, nullable, names: NameMap::new(names, case) })
    }

    /// Infer column types from literal rows, promoting across rows the way
    /// a VALUES list unifies its columns.
    pub fn from_values(alias: &str, names: Vec<String>, rows: &[Vec<Value>], case: IdentifierCase) -> Result<Self, BinderError> {
        let mut infos: Vec<Option<ColumnInfo>> = vec![None; names.len()];
        for row in rows {
            if row.len() != names.len() {
                return Err(BinderError::ColumnCountMismatch {
                    alias: alias.to_string(),
                    names: names.len(),
                    types: row.len(),
                });
            }
            for (slot, value) in infos.iter_mut().zip(row) {
                let new = ColumnInfo::infer(value);
                let merged = match slot.take() {
                    Some(old) => old.merge(&new),
                    None => new,
                };
                *slot = Some(merged);
            }
        }

        let (types, nullable) = infos.into_iter()
            .map(|info| info.map_or((SqlType::Null, true), |i| (i.ty, i.nullable)))
            .unzip();
        Ok(Self { types, nullable, names: NameMap::new(names, case) })
    }

    pub fn lookup(&self, name: &str) -> ColumnLookup {
        match self.names.lookup(name) {
            [] => ColumnLookup::Missing,
            [position] => ColumnLookup::Found(self.column_at(*position)),
            many => ColumnLookup::Duplicate(many.to_vec()),
        }
    }

    pub fn columns(&self) -> Vec<SourceColumn> {
        (0..self.names.len()).map(|pos| self.column_at(pos)).collect()
    }

    fn column_at(&self, position: usize) -> SourceColumn {
        SourceColumn {
            position,
            name: self.names.names()[position].clone(),
            ty: self.types[position],
            nullable: self.nullable[position],
        }
    }
}
