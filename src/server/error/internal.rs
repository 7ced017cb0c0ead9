use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enum column holds a value the application does not know.
    ///
    /// Results in the generic process failure being returned to the client.
    #[error("Unknown value '{value}' in column {column}")]
    UnknownVariant {
        /// Column the value was read from
        column: &'static str,
        /// The stored value
        value: String,
    },
}
