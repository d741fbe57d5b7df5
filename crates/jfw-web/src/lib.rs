// File: src/lib.rs
// Purpose: Request/flash scoped messages and the tags that render them

//! # jfw-web
//!
//! A [`MessageContext`] belongs to exactly one request. Messages saved to
//! the flash scope are handed to the next request explicitly:
//!
//! ```rust,ignore
//! use jfw_web::{MessageContext, Scope, ValidationsTag};
//!
//! // POST handler: record a failure and redirect
//! let mut ctx = MessageContext::new();
//! ctx.save_validation_message(Scope::Flash, "E-RANGE#0001", "toNumber", "LessThan", "range");
//! flash_store.put(&session_id, ctx.take_flash());
//!
//! // Next GET: promote, then render
//! let ctx = MessageContext::with_flash(flash_store.take(&session_id).unwrap_or_default());
//! let html = ValidationsTag::new(&config.render).render(&ctx, &catalog);
//! ```

pub mod context;
pub mod flash;
pub mod message;
pub mod tags;

pub use context::{MessageContext, Scope};
pub use flash::{FlashMessages, FlashStore, MemoryFlashStore};
pub use message::{ScopedMessages, ValidationMessage};
pub use tags::{MessagesTag, ValidationsTag};
