use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared SQL type of a column as seen by the binder.
///
/// The binder never checks expressions against these types; it only carries
/// them from the source (catalog, subquery projection or explicit list) into
/// every bound column reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SqlType {
    /// Type of the `NULL` literal before any promotion
    Null,
    /// BOOLEAN
    Boolean,
    /// 64-bit integer
    Integer,
    /// Double precision float
    Double,
    /// Variable length text
    Varchar,
    /// Nested record
    Struct,
    /// Ordered list of values
    List,
}

impl SqlType {
    /// Type a literal-list column settles on when a later row disagrees with
    /// what earlier rows produced.
    ///
    /// Numbers widen to `Double`, a `Null` side takes the other side's type,
    /// and any other clash keeps `self`, the first type seen.
    pub fn unify(self, other: SqlType) -> SqlType {
        match (self, other) {
            (SqlType::Null, other) => other,
            (SqlType::Integer, SqlType::Double) | (SqlType::Double, SqlType::Integer) => SqlType::Double,
            (ty, _) => ty,
        }
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SqlType::Null => "NULL",
            SqlType::Boolean => "BOOLEAN",
            SqlType::Integer => "INTEGER",
            SqlType::Double => "DOUBLE",
            SqlType::Varchar => "VARCHAR",
            SqlType::Struct => "STRUCT",
            SqlType::List => "LIST",
        };
        write!(f, "{}", name)
    }
}
