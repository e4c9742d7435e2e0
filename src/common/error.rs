//! Error types for leafchain.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in leafchain.
///
/// Absence of a key is never an error: `search` returns `Option` and
/// `delete` returns a boolean. The variants here cover construction-time
/// misconfiguration and harness-side report emission. Internal structural
/// violations are implementation defects and panic instead of surfacing
/// through this type.
#[derive(Debug, Error)]
pub enum Error {
    /// Tree constructed with a capacity that cannot satisfy split and merge
    /// minimums.
    #[error("invalid node capacity {0}: minimum supported capacity is 3")]
    InvalidCapacity(usize),

    /// I/O error from report emission.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error from report emission.
    #[cfg(feature = "benchmarks")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
