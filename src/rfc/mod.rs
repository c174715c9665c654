//! RFC (Registro Federal de Contribuyentes) validation.
//!
//! # Data Flow
//! ```text
//! raw text
//!     → validator.rs (trim + uppercase, full-string pattern match)
//!     → types.rs (ValidationResult stamped with created_at)
//! ```
//!
//! Pure functions over text; the compiled pattern is the only shared value.

pub mod types;
pub mod validator;

pub use types::{
    BulkValidationRequest, BulkValidationResult, HealthStatus, ValidationRequest,
    ValidationResult,
};
pub use validator::{is_valid_rfc, normalize, validate, validate_at};
