use crate::error::Result;
use crate::session::Session;
use async_trait::async_trait;

/// One node of a rule tree.
///
/// Nodes are immutable once constructed and hold no per-call state; all
/// mutation during evaluation happens on the [`Session`]. The same node
/// instance may legally appear under several parents, which is why
/// children are held as `Arc<dyn Expr>` throughout the rule crates.
#[async_trait]
pub trait Expr: Send + Sync {
    /// Produces this node's contribution to the formatted identifier.
    ///
    /// Must be a pure function of the session plus provider responses:
    /// identical session state with deterministic providers and
    /// randomness yields identical output.
    async fn value(&self, session: &mut Session) -> Result<String>;

    /// The optional key-fragment capability.
    ///
    /// Nodes that participate in counter-key construction return
    /// `Some(self)`; the capability is fixed at construction time, so
    /// callers never need runtime downcasting to discover it.
    fn key_source(&self) -> Option<&dyn KeySource> {
        None
    }
}

/// The key-fragment capability of a node.
///
/// Invoked during a join's key-construction pass; non-empty fragments
/// are accumulated on the session, in child order, to form the
/// hierarchical counter key.
#[async_trait]
pub trait KeySource: Send + Sync {
    async fn key_fragment(&self, session: &mut Session) -> Result<String>;
}
