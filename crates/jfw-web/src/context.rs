// File: src/context.rs
// Purpose: Per-request message accumulator with request and flash scopes

use crate::flash::FlashMessages;
use crate::message::{ScopedMessages, ValidationMessage};
use serde::{Deserialize, Serialize};
use std::mem;

/// Lifetime window of a saved message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Visible until the current request ends
    Request,
    /// Carried over to the next request (typically across a redirect)
    Flash,
}

/// Messages accumulated while handling one request
///
/// Create one per request. It is not shared between requests and needs no
/// locking. Flash carry-over is driven by the caller through
/// [`MessageContext::with_flash`] and [`MessageContext::take_flash`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageContext {
    request: ScopedMessages,
    flash: ScopedMessages,
}

impl MessageContext {
    /// Start an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a context whose request scope holds the previous request's flash messages
    pub fn with_flash(flash: FlashMessages) -> Self {
        let promoted = flash.into_inner();
        if !promoted.is_empty() {
            tracing::debug!(entries = promoted.len(), "promoted flash messages to request scope");
        }
        Self {
            request: promoted,
            flash: ScopedMessages::default(),
        }
    }

    /// Append a validation message to `scope`
    pub fn save_validation_message(
        &mut self,
        scope: Scope,
        message_key: impl Into<String>,
        element_id: impl Into<String>,
        constraint_kind: impl Into<String>,
        model_name: impl Into<String>,
    ) {
        let message = ValidationMessage {
            message_key: message_key.into(),
            element_id: element_id.into(),
            constraint_kind: constraint_kind.into(),
            model_name: model_name.into(),
        };
        tracing::trace!(?scope, key = %message.message_key, "saved validation message");
        self.scope_mut(scope).validations.push(message);
    }

    /// Append an error message to `scope`
    pub fn save_error_message(&mut self, scope: Scope, message_key: impl Into<String>) {
        let key = message_key.into();
        tracing::trace!(?scope, %key, "saved error message");
        self.scope_mut(scope).errors.push(key);
    }

    /// Append an information message to `scope`
    pub fn save_information_message(&mut self, scope: Scope, message_key: impl Into<String>) {
        let key = message_key.into();
        tracing::trace!(?scope, %key, "saved information message");
        self.scope_mut(scope).information.push(key);
    }

    pub fn validation_messages(&self, scope: Scope) -> &[ValidationMessage] {
        &self.scope(scope).validations
    }

    pub fn error_messages(&self, scope: Scope) -> &[String] {
        &self.scope(scope).errors
    }

    pub fn information_messages(&self, scope: Scope) -> &[String] {
        &self.scope(scope).information
    }

    /// All entries of one scope
    pub fn scope(&self, scope: Scope) -> &ScopedMessages {
        match scope {
            Scope::Request => &self.request,
            Scope::Flash => &self.flash,
        }
    }

    fn scope_mut(&mut self, scope: Scope) -> &mut ScopedMessages {
        match scope {
            Scope::Request => &mut self.request,
            Scope::Flash => &mut self.flash,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.request.is_empty() && self.flash.is_empty()
    }

    /// Remove the flash scope for carry-over, leaving it empty
    pub fn take_flash(&mut self) -> FlashMessages {
        FlashMessages::from(mem::take(&mut self.flash))
    }

    /// End the request: the request scope is dropped, the flash scope returned
    pub fn into_flash(self) -> FlashMessages {
        FlashMessages::from(self.flash)
    }
}
