// File: src/lib.rs
// Purpose: Cross-field constraint validation

//! # jfw-validation
//!
//! Constraints are registered against an explicit [`PropertyMap`] instead of
//! being discovered through reflection. Unknown property names are rejected
//! when a constraint is registered, so a misspelled declaration can never
//! pass silently.
//!
//! ```rust,ignore
//! use jfw_validation::{LessThan, PropertyMap, Validator};
//!
//! struct Range { from: Option<i64>, to: Option<i64> }
//!
//! let properties = PropertyMap::<Range>::new()
//!     .property("from", |r| r.from)
//!     .property("to", |r| r.to);
//!
//! let validator = Validator::builder(properties)
//!     .constrain(LessThan::new("from", "to"))?
//!     .build();
//!
//! let violations = validator.validate(&Range { from: Some(2), to: Some(1) })?;
//! assert_eq!(violations[0].property_path, "to");
//! ```

pub mod accessor;
pub mod constraints;
pub mod error;
pub mod record;
pub mod validator;
pub mod value;
pub mod violation;

pub use accessor::{BoxError, PropertyMap};
pub use constraints::less_than::{evaluate, Comparison, LessThan};
pub use constraints::required::Required;
pub use constraints::Constraint;
pub use error::{ConfigurationError, InvocationError, ValidationError};
pub use jfw_core::ReportOn;
pub use record::record_properties;
pub use validator::{Validator, ValidatorBuilder};
pub use value::PropertyValue;
pub use violation::Violation;
