// File: src/tags.rs
// Purpose: HTML rendering of saved messages

use crate::context::{MessageContext, Scope};
use jfw_core::{MessageSource, RenderConfig};
use maud::html;

/// Renders the validation messages of one scope
///
/// ```text
/// <div class="jfw_messages"><p id="{id}_list_per_element" class="{model}_{kind} jfw_val_msg_style">{message}</p></div>
/// ```
///
/// Nothing is emitted for an empty scope. Error and information messages
/// are left to [`MessagesTag`].
#[derive(Debug, Clone)]
pub struct ValidationsTag<'a> {
    config: &'a RenderConfig,
    scope: Scope,
    only_message: bool,
}

impl<'a> ValidationsTag<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            scope: Scope::Request,
            only_message: false,
        }
    }

    /// Scope to render; defaults to the request scope
    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// Emit the bare message texts without markup
    pub fn only_message(mut self, only_message: bool) -> Self {
        self.only_message = only_message;
        self
    }

    pub fn render(&self, context: &MessageContext, source: &dyn MessageSource) -> String {
        let messages = context.validation_messages(self.scope);
        if messages.is_empty() {
            return String::new();
        }

        if self.only_message {
            return messages
                .iter()
                .map(|m| source.resolve_or_key(&m.message_key))
                .collect();
        }

        let markup = html! {
            div class=(self.config.container_class) {
                @for message in messages {
                    p id=(format!("{}{}", message.element_id, self.config.element_id_suffix))
                      class=(format!(
                          "{}_{} {}",
                          message.model_name, message.constraint_kind, self.config.validation_style_class
                      )) {
                        (source.resolve_or_key(&message.message_key))
                    }
                }
            }
        };
        markup.into_string()
    }
}

/// Renders the error and information messages of one scope
///
/// Errors come first, each as `<p class="{error_style_class}">`, followed by
/// information messages with `information_style_class`, all inside one
/// container.
#[derive(Debug, Clone)]
pub struct MessagesTag<'a> {
    config: &'a RenderConfig,
    scope: Scope,
    only_message: bool,
}

impl<'a> MessagesTag<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            scope: Scope::Request,
            only_message: false,
        }
    }

    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn only_message(mut self, only_message: bool) -> Self {
        self.only_message = only_message;
        self
    }

    pub fn render(&self, context: &MessageContext, source: &dyn MessageSource) -> String {
        let errors = context.error_messages(self.scope);
        let information = context.information_messages(self.scope);
        if errors.is_empty() && information.is_empty() {
            return String::new();
        }

        if self.only_message {
            return errors
                .iter()
                .chain(information)
                .map(|key| source.resolve_or_key(key))
                .collect();
        }

        let markup = html! {
            div class=(self.config.container_class) {
                @for key in errors {
                    p class=(self.config.error_style_class) { (source.resolve_or_key(key)) }
                }
                @for key in information {
                    p class=(self.config.information_style_class) { (source.resolve_or_key(key)) }
                }
            }
        };
        markup.into_string()
    }
}
