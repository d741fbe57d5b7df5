// File: src/config.rs
// Purpose: Configuration parsing from jfw.toml

use crate::resource::MessageCatalog;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct JfwConfig {
    #[serde(default)]
    pub messages: MessagesConfig,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub models: Vec<ModelConfig>,

    /// Directory the config was loaded from; relative catalog paths resolve against it
    #[serde(skip)]
    pub base_dir: PathBuf,
}

/// Message catalog sources
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MessagesConfig {
    /// Catalog files, loaded in order; later files override earlier ones
    #[serde(default)]
    pub catalogs: Vec<PathBuf>,

    /// Inline entries, applied after every catalog file
    #[serde(default)]
    pub entries: BTreeMap<String, String>,
}

/// Markup settings for the message tags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_container_class")]
    pub container_class: String,

    #[serde(default = "default_element_id_suffix")]
    pub element_id_suffix: String,

    #[serde(default = "default_validation_style_class")]
    pub validation_style_class: String,

    #[serde(default = "default_error_style_class")]
    pub error_style_class: String,

    #[serde(default = "default_information_style_class")]
    pub information_style_class: String,
}

/// A record type checked by declared constraints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub name: String,

    /// Readable property names; constraints may only reference these
    #[serde(default)]
    pub properties: Vec<String>,

    #[serde(default)]
    pub constraints: Vec<ConstraintConfig>,
}

/// Declarative constraint, one `[[models.constraints]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConstraintConfig {
    LessThan {
        from: String,
        to: String,
        #[serde(default)]
        message: String,
        #[serde(default)]
        allow_same: bool,
        #[serde(default)]
        report_on: ReportOn,
    },
    Required {
        property: String,
        #[serde(default)]
        message: String,
    },
}

/// Which side of a comparison a violation is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportOn {
    From,
    #[default]
    To,
}

// Default values
fn default_container_class() -> String {
    "jfw_messages".to_string()
}

fn default_element_id_suffix() -> String {
    "_list_per_element".to_string()
}

fn default_validation_style_class() -> String {
    "jfw_val_msg_style".to_string()
}

fn default_error_style_class() -> String {
    "jfw_err_msg_style".to_string()
}

fn default_information_style_class() -> String {
    "jfw_info_msg_style".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            container_class: default_container_class(),
            element_id_suffix: default_element_id_suffix(),
            validation_style_class: default_validation_style_class(),
            error_style_class: default_error_style_class(),
            information_style_class: default_information_style_class(),
        }
    }
}

impl JfwConfig {
    /// Load configuration from jfw.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self {
                base_dir,
                ..Self::default()
            });
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let mut config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config.base_dir = base_dir;

        Ok(config)
    }

    /// Load configuration from default path (./jfw.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("jfw.toml")
    }

    /// Parse configuration text; an empty document yields the defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(toml::from_str(content)?)
    }

    /// Look up a declared model by name
    pub fn model(&self, name: &str) -> Option<&ModelConfig> {
        self.models.iter().find(|model| model.name == name)
    }

    /// Build the message catalog: library defaults, then catalog files, then inline entries
    pub fn message_catalog(&self) -> Result<MessageCatalog> {
        let mut catalog = MessageCatalog::with_defaults();

        for file in &self.messages.catalogs {
            let path = if file.is_relative() {
                self.base_dir.join(file)
            } else {
                file.clone()
            };
            catalog.merge(MessageCatalog::load(&path)?);
        }

        for (key, text) in &self.messages.entries {
            catalog.insert(key.clone(), text.clone());
        }

        Ok(catalog)
    }
}
