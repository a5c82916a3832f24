//! Normalized read access into a parsed configuration document.
//!
//! The document is a two-level mapping `org -> repo -> settings`. Settings
//! are free-form, but may carry `labels` and `templates` mappings keyed by
//! label or template name. All keys in the document are expected to have
//! been written through [`sanitize_key`], so every lookup key is sanitized
//! the same way before it is compared.
//!
//! Lookups never fail. A missing organization, repository, section or entry
//! is reported as `None`, and so is any level that is not a JSON object.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::trace;

use crate::error::{ConfigError, Result};

/// Settings key holding per-label configuration.
const LABELS_KEY: &str = "labels";

/// Settings key holding per-template configuration.
const TEMPLATES_KEY: &str = "templates";

// ---------------------------------------------------------------------------
// RepoRef
// ---------------------------------------------------------------------------

/// A configured repository, identified by organization and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoRef {
    /// Organization (or user) that owns the repository.
    pub org: String,
    /// Repository name.
    pub name: String,
}

impl RepoRef {
    /// Build a `RepoRef` from its parts, as given.
    pub fn new(org: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            org: org.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.org, self.name)
    }
}

impl FromStr for RepoRef {
    type Err = ConfigError;

    /// Parse `org/name`. Surrounding whitespace on either part is dropped;
    /// case is kept, since lookups sanitize keys anyway.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ConfigError::InvalidRepoRef {
            input: s.to_string(),
        };

        let (org, name) = s.split_once('/').ok_or_else(invalid)?;
        let (org, name) = (org.trim(), name.trim());
        if org.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }

        Ok(Self::new(org, name))
    }
}

// ---------------------------------------------------------------------------
// ConfigStore
// ---------------------------------------------------------------------------

/// Read-only accessor over a parsed configuration document.
///
/// The wrapped value is never mutated. A store built from anything other
/// than a JSON object behaves as an empty configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigStore {
    config: Value,
}

impl ConfigStore {
    /// Wrap an already-parsed configuration document.
    pub fn new(config: Value) -> Self {
        Self { config }
    }

    /// Borrow the wrapped document.
    pub fn as_value(&self) -> &Value {
        &self.config
    }

    /// Organizations whose entry is a mapping of repositories.
    fn orgs(&self) -> impl Iterator<Item = (&String, &Map<String, Value>)> {
        self.config
            .as_object()
            .into_iter()
            .flat_map(|orgs| orgs.iter())
            .filter_map(|(org, repos)| repos.as_object().map(|repos| (org, repos)))
    }

    /// List every configured repository in document order.
    pub fn list_repos(&self) -> Vec<RepoRef> {
        self.orgs()
            .flat_map(|(org, repos)| {
                repos
                    .keys()
                    .map(move |name| RepoRef::new(org.as_str(), name.as_str()))
            })
            .collect()
    }

    /// Returns `true` if no repository is configured.
    pub fn is_empty(&self) -> bool {
        self.orgs().all(|(_, repos)| repos.is_empty())
    }

    /// Get the settings for a repository.
    pub fn repo_config(&self, org: &str, name: &str) -> Option<&Value> {
        let org = sanitize_key(org);
        let name = sanitize_key(name);

        let found = self
            .config
            .as_object()
            .and_then(|orgs| orgs.get(org.as_str()))
            .and_then(Value::as_object)
            .and_then(|repos| repos.get(name.as_str()))
            .filter(|settings| !settings.is_null());

        if found.is_none() {
            trace!(org = %org, name = %name, "no config for repo");
        }
        found
    }

    /// Decode the settings for a repository into `T`.
    ///
    /// A repository without settings yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Decode`] if the settings exist but do not
    /// match the shape of `T`.
    pub fn repo_config_as<T: DeserializeOwned>(&self, org: &str, name: &str) -> Result<Option<T>> {
        self.repo_config(org, name)
            .map(|settings| {
                T::deserialize(settings).map_err(|source| ConfigError::Decode {
                    repo: RepoRef::new(sanitize_key(org), sanitize_key(name)).to_string(),
                    source,
                })
            })
            .transpose()
    }

    /// Get the settings for a single label of a repository.
    pub fn repo_label_config(&self, org: &str, name: &str, label: &str) -> Option<&Value> {
        self.section_entry(org, name, LABELS_KEY, label)
    }

    /// Get the settings for a single template of a repository.
    pub fn repo_template_config(&self, org: &str, name: &str, template: &str) -> Option<&Value> {
        self.section_entry(org, name, TEMPLATES_KEY, template)
    }

    /// Names of the labels configured for a repository, in document order.
    pub fn repo_label_names(&self, org: &str, name: &str) -> Vec<&str> {
        self.section_keys(org, name, LABELS_KEY)
    }

    /// Names of the templates configured for a repository, in document order.
    pub fn repo_template_names(&self, org: &str, name: &str) -> Vec<&str> {
        self.section_keys(org, name, TEMPLATES_KEY)
    }

    fn section(&self, org: &str, name: &str, section: &str) -> Option<&Map<String, Value>> {
        self.repo_config(org, name)?.get(section)?.as_object()
    }

    fn section_entry(&self, org: &str, name: &str, section: &str, key: &str) -> Option<&Value> {
        let key = sanitize_key(key);
        let found = self
            .section(org, name, section)?
            .get(key.as_str())
            .filter(|entry| !entry.is_null());

        if found.is_none() {
            trace!(section, key = %key, "no config entry");
        }
        found
    }

    fn section_keys(&self, org: &str, name: &str, section: &str) -> Vec<&str> {
        self.section(org, name, section)
            .map(|entries| entries.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

impl From<Value> for ConfigStore {
    fn from(config: Value) -> Self {
        Self::new(config)
    }
}

/// Normalize a configuration key: lowercase, then trim surrounding whitespace.
///
/// Keys are sanitized before they are written to the configuration, so
/// they need to be sanitized the same way when they are looked up.
pub fn sanitize_key(key: &str) -> String {
    key.to_lowercase().trim().to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
