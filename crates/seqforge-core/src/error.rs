use thiserror::Error;

/// Opaque error produced by an external provider callback.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced while evaluating a rule tree.
///
/// Provider failures are preserved verbatim as the `source` of their
/// variant; the engine never retries or substitutes a default value.
#[derive(Debug, Error)]
pub enum Error {
    #[error("counter provider failed for key {key:?}")]
    Counter {
        key: String,
        #[source]
        source: BoxError,
    },
    #[error("environment provider failed for {name:?}")]
    Environment {
        name: String,
        #[source]
        source: BoxError,
    },
    #[error("invalid time format {format:?}")]
    TimeFormat {
        format: String,
        #[source]
        source: jiff::Error,
    },
    #[error("shared random source lock is poisoned")]
    RandomSourcePoisoned,
}
