use serde_json::Value;

use crate::catalog::SqlType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnInfo {
    pub ty: SqlType,
    pub nullable: bool,
    /// Hidden columns resolve when named explicitly but are left out of `*`.
    pub hidden: bool,
}

impl ColumnInfo {
    pub fn new(ty: SqlType) -> Self {
        Self { ty, nullable: true, hidden: false }
    }

    pub fn not_null(ty: SqlType) -> Self {
        Self { ty, nullable: false, hidden: false }
    }

    pub fn hidden(ty: SqlType) -> Self {
        Self { ty, nullable: false, hidden: true }
    }

    /// Column metadata for a single literal of a VALUES row.
    pub fn infer(value: &Value) -> ColumnInfo {
        let ty = match value {
            Value::Null => SqlType::Null,
            Value::Bool(_) => SqlType::Boolean,
            Value::Number(n) if n.is_f64() => SqlType::Double,
            Value::Number(_) => SqlType::Integer,
            Value::String(_) => SqlType::Varchar,
            Value::Array(_) => SqlType::List,
            Value::Object(_) => SqlType::Struct,
        };
        ColumnInfo { ty, nullable: value.is_null(), hidden: false }
    }

    /// Fold the next row's literal into the column seen so far.
    pub fn merge(&self, new: &ColumnInfo) -> ColumnInfo {
        ColumnInfo {
            ty: self.ty.unify(new.ty),
            nullable: self.nullable || new.nullable || new.ty == SqlType::Null,
            hidden: self.hidden,
        }
    }
}
