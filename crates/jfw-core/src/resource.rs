// File: src/resource.rs
// Purpose: Message catalogs resolved by key

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Catalog key of the default `LessThan` message
pub const LESS_THAN_MESSAGE_KEY: &str = "jfw.validation.constraints.LessThan.message";

/// Catalog key of the default `Required` message
pub const REQUIRED_MESSAGE_KEY: &str = "jfw.validation.constraints.Required.message";

/// Anything that can turn a message key into display text
pub trait MessageSource: Send + Sync {
    /// Look up the text registered for `key`
    fn resolve(&self, key: &str) -> Option<String>;

    /// Look up `key`, falling back to the key itself
    ///
    /// Messages saved as literal text render unchanged through this.
    fn resolve_or_key(&self, key: &str) -> String {
        self.resolve(key).unwrap_or_else(|| key.to_string())
    }
}

impl<S: MessageSource + ?Sized> MessageSource for Arc<S> {
    fn resolve(&self, key: &str) -> Option<String> {
        (**self).resolve(key)
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read message catalog {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse message catalog {origin}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("message catalog {origin}: value of `{key}` must be a string")]
    NotText { origin: String, key: String },
}

/// Flat key -> text message table
///
/// Catalog files are TOML. Keys may be written flat (`"a.b.c" = "..."`) or
/// as nested tables; both end up as the same dotted key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    entries: HashMap<String, String>,
}

impl MessageCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the library default messages
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        catalog.insert(
            LESS_THAN_MESSAGE_KEY,
            "enter a value smaller than the compared field",
        );
        catalog.insert(REQUIRED_MESSAGE_KEY, "is required");
        catalog
    }

    /// Add or replace a single entry
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    /// Builder-style variant of [`MessageCatalog::insert`]
    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    /// Parse a catalog from TOML text; `origin` only labels errors
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, CatalogError> {
        let table: toml::Table = content.parse().map_err(|source| CatalogError::Parse {
            origin: origin.to_string(),
            source,
        })?;

        let mut catalog = Self::new();
        flatten("", &table, origin, &mut catalog.entries)?;
        Ok(catalog)
    }

    /// Load a catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_toml_str(&content, &path.display().to_string())?;
        tracing::debug!(path = %path.display(), entries = catalog.len(), "loaded message catalog");
        Ok(catalog)
    }

    /// Overlay `other` on top of this catalog; its entries win
    pub fn merge(&mut self, other: MessageCatalog) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MessageSource for MessageCatalog {
    fn resolve(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

fn flatten(
    prefix: &str,
    table: &toml::Table,
    origin: &str,
    out: &mut HashMap<String, String>,
) -> Result<(), CatalogError> {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", prefix, name)
        };

        match value {
            toml::Value::String(text) => {
                out.insert(key, text.clone());
            }
            toml::Value::Table(nested) => flatten(&key, nested, origin, out)?,
            _ => {
                return Err(CatalogError::NotText {
                    origin: origin.to_string(),
                    key,
                })
            }
        }
    }

    Ok(())
}
