use thiserror::Error;

/// Errors produced by this crate's ring-arithmetic, index-generation and
/// key-generation operations.
#[derive(Debug, Error)]
pub enum NtruError {
    #[error("invalid argument for {field}: {reason}")]
    InvalidArgument {
        field: &'static str,
        reason: String,
    },

    #[error("unsupported: {0}")]
    Unsupported(String),

    #[error("polynomial is not invertible in the requested ring")]
    NotInvertible,

    #[error("key generation did not converge after {attempts} attempts")]
    KeygenExhausted { attempts: u32 },

    #[error("deterministic random bit generator failed: {0}")]
    DrbgFailure(String),
}

pub type Result<T> = std::result::Result<T, NtruError>;
