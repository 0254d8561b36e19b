pub mod identifier_case;
pub use identifier_case::*;

pub mod binder_config;
pub use binder_config::*;
