//! Error types shared by the library and both binaries.

use thiserror::Error;

/// Everything that can go wrong outside the (total) predicates themselves.
#[derive(Debug, Error)]
pub enum PalindromeError {
    /// The command line did not select a known approach.
    #[error("usage error: {0}")]
    Usage(String),

    /// The requested bit width cannot be iterated with the candidate type.
    #[error("bit width {width} is out of range (supported: 1..={max})")]
    WidthOutOfRange { width: u32, max: u32 },

    /// Writing the report failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PalindromeError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PalindromeError::Usage(_) => 1,
            PalindromeError::WidthOutOfRange { .. } => 2,
            PalindromeError::Io(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, PalindromeError>;
