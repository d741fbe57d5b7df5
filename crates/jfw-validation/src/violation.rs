// File: src/violation.rs
// Purpose: Record of one failed constraint check

use serde::Serialize;
use std::fmt;

/// One failed constraint, attributed to a property
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Property the failure is reported on
    pub property_path: String,
    /// Interpolated message text
    pub message: String,
    /// Template the message was built from
    pub message_template: String,
    /// Constraint kind, e.g. `LessThan`
    pub constraint_kind: &'static str,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property_path, self.message)
    }
}
