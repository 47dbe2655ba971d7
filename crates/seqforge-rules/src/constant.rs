use async_trait::async_trait;
use seqforge_core::{Expr, Result, Session};

/// A literal fragment of the identifier. Never fails, contributes no
/// key fragment.
#[derive(Debug, Clone)]
pub struct Constant {
    literal: String,
}

impl Constant {
    pub fn new(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
        }
    }
}

#[async_trait]
impl Expr for Constant {
    async fn value(&self, _session: &mut Session) -> Result<String> {
        Ok(self.literal.clone())
    }
}
