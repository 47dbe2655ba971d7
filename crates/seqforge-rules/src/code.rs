use async_trait::async_trait;
use seqforge_core::{Expr, KeySource, Result, Session};
use std::sync::Arc;

/// Marks a wrapped expression as a business code.
///
/// Codes are how business identifiers participate in counter
/// namespacing: during a join's key pass the code contributes its
/// child's key fragment (or plain value when the child has no key
/// capability) to the session. With `key_only` set the wrapped content
/// shapes the counter key but never appears in the formatted output.
#[derive(Clone)]
pub struct Code {
    child: Arc<dyn Expr>,
    key_only: bool,
}

impl Code {
    pub fn new(child: Arc<dyn Expr>) -> Self {
        Self {
            child,
            key_only: false,
        }
    }

    pub fn key_only(child: Arc<dyn Expr>) -> Self {
        Self {
            child,
            key_only: true,
        }
    }

    /// A node wrapped around itself (possible only through
    /// `Arc::new_cyclic` misuse) would recurse forever; such a node is
    /// neutralized to empty output instead.
    fn is_self_referential(&self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.child), self as *const Self)
    }
}

#[async_trait]
impl Expr for Code {
    async fn value(&self, session: &mut Session) -> Result<String> {
        if self.is_self_referential() || self.key_only {
            return Ok(String::new());
        }
        self.child.value(session).await
    }

    fn key_source(&self) -> Option<&dyn KeySource> {
        Some(self)
    }
}

#[async_trait]
impl KeySource for Code {
    async fn key_fragment(&self, session: &mut Session) -> Result<String> {
        if self.is_self_referential() {
            return Ok(String::new());
        }
        match self.child.key_source() {
            Some(source) => source.key_fragment(session).await,
            None => self.child.value(session).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::Constant;
    use crate::generator::test_support::session;
    use crate::time::{TimeField, FMT_MONTH};

    #[tokio::test]
    async fn code_contributes_both_key_and_value() {
        let mut s = session();
        let code = Code::new(Arc::new(Constant::new("ORDER")));
        let key = code.key_source().unwrap().key_fragment(&mut s).await;
        assert_eq!(key.unwrap(), "ORDER");
        assert_eq!(code.value(&mut s).await.unwrap(), "ORDER");
    }

    #[tokio::test]
    async fn key_only_code_blanks_the_value() {
        let mut s = session();
        let code = Code::key_only(Arc::new(Constant::new("ST")));
        let key = code.key_source().unwrap().key_fragment(&mut s).await;
        assert_eq!(key.unwrap(), "ST");
        assert_eq!(code.value(&mut s).await.unwrap(), "");
    }

    #[tokio::test]
    async fn delegates_to_the_childs_own_key_capability() {
        let mut s = session();
        let time = TimeField::builder().format(FMT_MONTH).keyed(true).build();
        let code = Code::new(Arc::new(time));
        let key = code.key_source().unwrap().key_fragment(&mut s).await;
        // The child is keyed, so the fragment comes from its key format,
        // not from wrapping its displayed value.
        assert_eq!(key.unwrap(), "202311");
    }
}
