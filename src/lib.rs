pub mod catalog;
pub use catalog::{Catalog, CatalogProvider, ColumnInfo, SqlType, TableSchema};

pub mod config;
pub use config::{BinderConfig, IdentifierCase};

pub mod binder;
pub use binder::{BindContext, Binder, BinderError, Binding, BoundColumnRef, ColumnRef, ExpandedColumn, ScopeStack};
