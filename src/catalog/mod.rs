pub mod schema;
pub use schema::*;

pub mod table_entry;
pub use table_entry::*;

pub mod memory_catalog;
pub use memory_catalog::*;
