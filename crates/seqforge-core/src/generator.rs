use crate::error::Result;
use crate::session::SessionOption;
use async_trait::async_trait;

/// Trait for manufacturing serial numbers.
///
/// Implementations are synchronous-in-spirit evaluators: all waiting is
/// delegated to the external providers, and dropping the returned
/// future cancels any in-flight provider call. A generator holds no
/// per-call state and may be shared across tasks.
#[async_trait]
pub trait SerialGenerator: Send + Sync + 'static {
    /// Produces the next identifier with session mutators applied to
    /// the fresh session before evaluation.
    ///
    /// Fail-fast: the first error anywhere in the tree aborts the call;
    /// no partial output is ever returned.
    async fn next_with(&self, options: Vec<SessionOption>) -> Result<String>;

    /// Produces the next identifier with a default session.
    async fn next(&self) -> Result<String> {
        self.next_with(Vec::new()).await
    }
}
