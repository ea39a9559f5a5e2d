//! Error type shared by the rackcalc crates.
//!
//! The calculator itself never fails. Errors only come from turning user text
//! into numbers in strict mode, from configuration, and from I/O.

/// Error type for input handling and I/O around the calculator.
#[derive(Debug, thiserror::Error)]
pub enum RackError {
    /// A field could not be parsed as a number.
    #[error("invalid value {value:?} for {field}")]
    InvalidInput {
        /// Human-readable field label.
        field: &'static str,
        /// The rejected text.
        value: String,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Writing output or driving the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
