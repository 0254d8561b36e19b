pub mod sql_type;
pub use sql_type::*;

pub mod column_info;
pub use column_info::*;

pub mod table_schema;
pub use table_schema::*;
