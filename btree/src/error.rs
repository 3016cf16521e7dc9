//! Error handling and result types for BTree operations.
//!
//! Only one operation can fail from the outside: construction with a
//! minimum degree below [`crate::MIN_DEGREE`]. The remaining variants
//! surface internal-consistency violations from the validating wrappers.

/// Error type for B-tree operations.
#[derive(Debug, Clone, PartialEq)]
pub enum BTreeError {
    /// Key not found in the tree.
    KeyNotFound,
    /// Invalid minimum degree specified.
    InvalidDegree(String),
    /// Internal data structure integrity violation.
    DataIntegrityError(String),
}

impl BTreeError {
    /// Create an InvalidDegree error with context
    pub fn invalid_degree(degree: usize, min_required: usize) -> Self {
        Self::InvalidDegree(format!(
            "Minimum degree {} is invalid (minimum required: {})",
            degree, min_required
        ))
    }

    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Check if this error is a degree error
    pub fn is_degree_error(&self) -> bool {
        matches!(self, Self::InvalidDegree(_))
    }
}

impl std::fmt::Display for BTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BTreeError::KeyNotFound => write!(f, "Key not found in tree"),
            BTreeError::InvalidDegree(msg) => write!(f, "Invalid degree: {}", msg),
            BTreeError::DataIntegrityError(msg) => write!(f, "Data integrity error: {}", msg),
        }
    }
}

impl std::error::Error for BTreeError {}

/// Public result type for tree operations that may fail
pub type BTreeResult<T> = Result<T, BTreeError>;

/// Result type for tree construction
pub type InitResult<T> = Result<T, BTreeError>;

/// Result type for validating tree modification operations
pub type ModifyResult<T> = Result<T, BTreeError>;
