//! Sign-up Field Validation
//!
//! Pure format validators for the six fields of the person sign-up form.
//!
//! # Overview
//!
//! - **FieldName**: the field catalogue (input name, label, placeholder, error message)
//! - **FieldValidationResult**: validity plus the field's fixed error message
//! - **rules**: one validator per field, each a pure function of the raw input
//!
//! Validators reject rather than normalize: `"30.0."` is not coerced to an
//! age, `"hello@gmail.c"` is not completed to a longer domain.
//!
//! # Example
//!
//! ```rust
//! use signup_validation::{FieldName, rules};
//!
//! assert!(rules::validate_email("pat@smith.com").is_valid());
//!
//! let result = FieldName::Age.validate("200");
//! assert_eq!(result.message(), Some("Invalid Age"));
//! ```

#![warn(missing_docs)]

pub mod field;
pub mod result;
pub mod rules;

// Re-exports
pub use field::{FieldName, UnknownField};
pub use result::FieldValidationResult;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for field validation
    pub use crate::rules::{
        validate_age, validate_email, validate_homepage, validate_name, validate_password,
        validate_phone_number,
    };
    pub use crate::{FieldName, FieldValidationResult, UnknownField};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
