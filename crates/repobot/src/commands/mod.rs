//! Command handlers, one module per subcommand family.

pub mod completion;
pub mod label;
pub mod repo;
pub mod repos;
pub mod template;
