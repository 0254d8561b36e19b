pub mod name_map;
pub use name_map::*;

pub mod binding;
pub use binding::*;

pub mod table_binding;
pub use table_binding::*;

pub mod subquery_binding;
pub use subquery_binding::*;

pub mod table_function_binding;
pub use table_function_binding::*;

pub mod generic_binding;
pub use generic_binding::*;
