// File: src/message.rs
// Purpose: Message entries and the ordered per-scope collections holding them

use serde::{Deserialize, Serialize};

/// A validation message tied to a form element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationMessage {
    /// Catalog key or literal text
    pub message_key: String,
    /// DOM anchor of the offending element
    pub element_id: String,
    /// Constraint kind, e.g. `Required`
    pub constraint_kind: String,
    pub model_name: String,
}

/// Everything saved to one scope, in insertion order
///
/// Duplicates are kept; rendering shows entries exactly as they were saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopedMessages {
    #[serde(default)]
    pub validations: Vec<ValidationMessage>,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub information: Vec<String>,
}

impl ScopedMessages {
    pub fn is_empty(&self) -> bool {
        self.validations.is_empty() && self.errors.is_empty() && self.information.is_empty()
    }

    pub fn len(&self) -> usize {
        self.validations.len() + self.errors.len() + self.information.len()
    }

    /// Append every entry of `other`, keeping order
    pub fn extend(&mut self, other: ScopedMessages) {
        self.validations.extend(other.validations);
        self.errors.extend(other.errors);
        self.information.extend(other.information);
    }
}
