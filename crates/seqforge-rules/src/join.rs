use async_trait::async_trait;
use seqforge_core::{Expr, Result, Session};
use std::sync::Arc;

/// Ordered composition of child expressions.
///
/// Evaluation runs two strictly ordered passes. The key pass walks the
/// children in order and appends every non-empty key fragment to the
/// session; it completes for the whole join before any value is
/// computed, which is why a counter placed after a code sibling sees
/// that code in its key. The value pass then joins the non-empty child
/// values with the separator. The first error from either pass aborts
/// the join; the session is discarded by the caller, so no key state is
/// rolled back.
#[derive(Clone)]
pub struct Join {
    separator: String,
    children: Vec<Arc<dyn Expr>>,
}

impl Join {
    pub fn new(separator: impl Into<String>, children: Vec<Arc<dyn Expr>>) -> Self {
        Self {
            separator: separator.into(),
            children,
        }
    }

    /// Appends another child; used by builders that grow a rule
    /// incrementally.
    pub fn push(&mut self, child: Arc<dyn Expr>) {
        self.children.push(child);
    }
}

#[async_trait]
impl Expr for Join {
    async fn value(&self, session: &mut Session) -> Result<String> {
        for child in &self.children {
            if let Some(source) = child.key_source() {
                let fragment = source.key_fragment(session).await?;
                if !fragment.is_empty() {
                    session.push_key_fragment(fragment);
                }
            }
        }

        let mut parts = Vec::with_capacity(self.children.len());
        for child in &self.children {
            let value = child.value(session).await?;
            if !value.is_empty() {
                parts.push(value);
            }
        }
        Ok(parts.join(&self.separator))
    }
}
