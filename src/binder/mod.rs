pub mod binder_error;
pub use binder_error::*;

pub mod column_ref;
pub use column_ref::*;

pub mod bound_column;
pub use bound_column::*;

pub mod bind_arena;
pub use bind_arena::*;

pub mod bindings;
pub use bindings::*;

pub mod bind_context;
pub use bind_context::*;

pub mod scope_stack;
pub use scope_stack::*;

pub mod statement_binder;
pub use statement_binder::*;

mod _tests;
