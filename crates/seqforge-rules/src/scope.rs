use async_trait::async_trait;
use seqforge_core::{Expr, Result, Session};
use std::sync::Arc;

/// Evaluates its child in an isolated key namespace.
///
/// The child runs against a cloned session whose key-fragment list
/// starts empty; the timestamp, random source and providers stay shared
/// with the parent. This gives a nested sequence its own counter key
/// without re-fetching the time or forking the randomness stream.
#[derive(Clone)]
pub struct Scope {
    child: Arc<dyn Expr>,
}

impl Scope {
    pub fn new(child: Arc<dyn Expr>) -> Self {
        Self { child }
    }
}

#[async_trait]
impl Expr for Scope {
    async fn value(&self, session: &mut Session) -> Result<String> {
        let mut scoped = session.scoped();
        self.child.value(&mut scoped).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::Code;
    use crate::constant::Constant;
    use crate::counter::Counter;
    use crate::generator::test_support::session_with_counter;
    use crate::join::Join;
    use crate::random::Random;
    use seqforge_core::charset;
    use seqforge_providers::MapCounter;

    #[tokio::test]
    async fn inner_counter_ignores_outer_fragments() {
        let scoped_counter = Scope::new(Arc::new(Counter::builder().min(0).build()));
        let join = Join::new(
            "",
            vec![
                Arc::new(Code::key_only(Arc::new(Constant::new("OUTER")))) as Arc<dyn Expr>,
                Arc::new(scoped_counter) as Arc<dyn Expr>,
            ],
        );
        let provider = Arc::new(MapCounter::new());
        let mut s = session_with_counter(provider.clone());

        join.value(&mut s).await.unwrap();

        // The scoped counter ran against an empty fragment list.
        assert_eq!(provider.current(""), Some(0));
        assert_eq!(provider.current("OUTER"), None);
    }

    #[tokio::test]
    async fn sibling_scopes_share_one_randomness_stream() {
        let mut s = crate::generator::test_support::session();

        let scope_a = Scope::new(Arc::new(Random::new(8, charset::DIGITS)));
        let scope_b = Scope::new(Arc::new(Random::new(8, charset::DIGITS)));
        let a = scope_a.value(&mut s).await.unwrap();
        let b = scope_b.value(&mut s).await.unwrap();

        // Independently seeded scopes would replay the same prefix of
        // the stream; a shared source keeps drawing forward instead.
        let mut replay = crate::generator::test_support::session();
        let replayed = Scope::new(Arc::new(Random::new(8, charset::DIGITS)))
            .value(&mut replay)
            .await
            .unwrap();
        assert_eq!(a, replayed);
        assert_ne!(b, replayed);
    }
}
