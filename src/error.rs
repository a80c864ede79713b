//! Error types for configuration, cache lookup, and trace parsing.

use thiserror::Error;

/// Rejected cache configuration. Detected once, before any access is simulated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cache capacity must be positive")]
    ZeroCapacity,

    #[error("cache capacity {capacity} is not a multiple of the block size {block_size}")]
    UnalignedCapacity { capacity: u32, block_size: u32 },

    #[error("direct-mapped cache needs a power-of-two line count, got {lines}")]
    LineCountNotPowerOfTwo { lines: u32 },

    #[error("unknown cache mapping `{0}` (expected `dm` or `fa`)")]
    UnknownMapping(String),

    #[error("unknown cache organization `{0}` (expected `uc` or `sc`)")]
    UnknownOrganization(String),
}

/// Failure inside a cache store. Only reachable with a hand-built, inconsistent layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("invalid cache index {index} for a store of {lines} lines")]
    IndexOutOfRange { index: u32, lines: usize },
}

/// Malformed trace input.
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("line {line}: unknown access type `{token}`")]
    UnknownAccessKind { line: usize, token: String },

    #[error("line {line}: missing address")]
    MissingAddress { line: usize },

    #[error("line {line}: invalid hex address `{token}`")]
    InvalidAddress { line: usize, token: String },

    #[error("failed to read trace: {0}")]
    Io(#[from] std::io::Error),
}
