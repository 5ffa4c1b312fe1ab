use thiserror::Error; // Import the `Error` derive macro from the `thiserror` crate

// Failures surfaced by the option store. Both variants signal caller mistakes
// rather than transient conditions, so no retry policy applies anywhere.
#[derive(Debug, Error)]
pub enum OptError {
    // A lookup under the active scope found nothing; carries the unscoped
    // (lower-cased) name and the scope so the message pinpoints both.
    #[error("attribute '{name}' is not available under the scope '{scope}'")]
    MissingAttribute { name: String, scope: String },

    // An attempt to write internal bookkeeping through the generic setter.
    #[error("'{0}' is a reserved attribute and cannot be overwritten")]
    ReservedAttribute(String),
}

// Type alias for results that use `OptError` as the error type
pub type Result<T> = std::result::Result<T, OptError>;
