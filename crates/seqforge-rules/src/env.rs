use async_trait::async_trait;
use seqforge_core::{Expr, Result, Session};
use std::sync::Arc;
use tracing::trace;

/// Resolves a named environment value through the session's provider.
///
/// The variable name is itself an expression, so it can be assembled
/// from constants, time fields, and so on. When no environment provider
/// is configured the node yields an empty string without evaluating the
/// name sub-expression.
#[derive(Clone)]
pub struct EnvRef {
    name: Arc<dyn Expr>,
}

impl EnvRef {
    pub fn new(name: Arc<dyn Expr>) -> Self {
        Self { name }
    }
}

#[async_trait]
impl Expr for EnvRef {
    async fn value(&self, session: &mut Session) -> Result<String> {
        if !session.has_env_provider() {
            return Ok(String::new());
        }
        let name = self.name.value(session).await?;
        trace!(name = %name, "resolving environment value");
        Ok(session.resolve_env(&name).await?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::Constant;
    use crate::generator::test_support::{session, session_with_env};
    use seqforge_providers::MapEnv;

    fn node(name: &str) -> EnvRef {
        EnvRef::new(Arc::new(Constant::new(name)))
    }

    #[tokio::test]
    async fn resolves_through_the_provider() {
        let env = MapEnv::new();
        env.set("STORE_ID", "03");
        let mut s = session_with_env(env);
        assert_eq!(node("STORE_ID").value(&mut s).await.unwrap(), "03");
    }

    #[tokio::test]
    async fn undefined_name_is_empty() {
        let mut s = session_with_env(MapEnv::new());
        assert_eq!(node("MISSING").value(&mut s).await.unwrap(), "");
    }

    #[tokio::test]
    async fn no_provider_disables_the_node() {
        let mut s = session();
        assert_eq!(node("STORE_ID").value(&mut s).await.unwrap(), "");
    }
}
