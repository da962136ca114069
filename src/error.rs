use thiserror::Error;

/// Errors surfaced by the snapshot engine.
///
/// Invalid-argument variants signal programming errors at the call site and
/// are never retried or recovered internally. Backend variants propagate
/// unchanged from the [`Dom`](crate::Dom) capability.
#[derive(Debug, Error)]
pub enum StylesnapError {
    /// A spec was constructed with an empty name.
    #[error("Invalid name: \"{0}\"")]
    InvalidName(String),

    /// An unrecognized pseudo-element qualifier was given where only
    /// `::before` or `::after` are accepted.
    #[error("Invalid pseudo qualifier: \"{0}\"")]
    InvalidPseudo(String),

    /// A handle that does not refer to a live element was given where an
    /// element is required.
    #[error("Invalid element: \"{0}\"")]
    InvalidElement(String),

    /// Selector resolution failed (no match, ambiguous match, or any other
    /// condition the backend reports).
    #[error("Selector resolution failed: {0}")]
    Query(String),

    /// A computed-style read or child enumeration failed inside the backend.
    #[error("Style access failed: {0}")]
    StyleAccess(String),
}

impl StylesnapError {
    pub fn query(message: impl Into<String>) -> Self {
        StylesnapError::Query(message.into())
    }

    pub fn style_access(message: impl Into<String>) -> Self {
        StylesnapError::StyleAccess(message.into())
    }
}

pub type Result<T> = std::result::Result<T, StylesnapError>;
