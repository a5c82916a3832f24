//! Per-repository configuration for the repobot system.
//!
//! The configuration is a JSON document keyed by organization, then by
//! repository name. Each repository entry holds free-form settings, with
//! optional `labels` and `templates` mappings. [`ConfigStore`] wraps the
//! parsed document and answers normalized lookups into it; the [`loader`]
//! module turns JSON text or files into a store.

pub mod error;
pub mod loader;
pub mod store;

pub use error::{ConfigError, Result};
pub use loader::{from_json_str, from_reader, load_config};
pub use store::{ConfigStore, RepoRef, sanitize_key};
