//! Error types for the carousel
//!
//! The public browser surface never throws: these errors are produced by
//! fallible internals and turned into console warnings at the wasm boundary.

/// Errors that can occur while setting up or driving a carousel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// The option object could not be read as a configuration
    InvalidConfig(String),

    /// A structural element of the DOM contract was not found
    MissingElement {
        /// Which part of the skeleton is missing
        role: &'static str,
    },

    /// A DOM call failed
    Dom(String),

    /// JSON serialization or deserialization failed
    Serialization(String),
}

impl CarouselError {
    /// Create a DOM error with message.
    pub fn dom(msg: impl Into<String>) -> Self {
        Self::Dom(msg.into())
    }

    /// Create a missing-element error for a skeleton role.
    pub fn missing(role: &'static str) -> Self {
        Self::MissingElement { role }
    }
}

impl std::fmt::Display for CarouselError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
            Self::MissingElement { role } => write!(f, "missing element: {}", role),
            Self::Dom(msg) => write!(f, "dom error: {}", msg),
            Self::Serialization(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for CarouselError {}

/// Result type alias for carousel operations
pub type CarouselResult<T> = Result<T, CarouselError>;
