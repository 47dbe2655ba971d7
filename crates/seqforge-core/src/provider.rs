use crate::error::BoxError;
use async_trait::async_trait;

/// External counter service consulted by counter nodes.
///
/// For a given key, sequential calls must return a non-decreasing
/// sequence whose first value is at least `min`. Atomicity, persistence
/// and concurrency safety across overlapping calls are the provider's
/// responsibility; the engine only threads the call through and
/// propagates its error unchanged.
///
/// `key` may be empty when the rule tree contributes no key fragments,
/// in which case the provider serves a single global namespace.
#[async_trait]
pub trait CounterProvider: Send + Sync {
    async fn next(&self, key: &str, min: i64, step: i64) -> Result<i64, BoxError>;
}

/// External resolver for named environment values.
///
/// Undefined names resolve to an empty string, not an error.
#[async_trait]
pub trait EnvProvider: Send + Sync {
    async fn get(&self, name: &str) -> Result<String, BoxError>;
}
