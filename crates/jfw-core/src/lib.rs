// File: src/lib.rs
// Purpose: Shared configuration and message plumbing for the JFW crates

//! # jfw-core
//!
//! Configuration (`jfw.toml`), message catalogs and `{placeholder}`
//! interpolation shared by `jfw-validation` and `jfw-web`.
//!
//! ```rust,ignore
//! use jfw_core::{JfwConfig, MessageSource};
//!
//! let config = JfwConfig::load_default()?;
//! let catalog = config.message_catalog()?;
//! assert_eq!(catalog.resolve_or_key("unknown.key"), "unknown.key");
//! ```

pub mod config;
pub mod interpolate;
pub mod resource;

pub use config::{ConstraintConfig, JfwConfig, MessagesConfig, ModelConfig, RenderConfig, ReportOn};
pub use interpolate::{MessageAttributes, MessageInterpolator};
pub use resource::{CatalogError, MessageCatalog, MessageSource};
