use async_trait::async_trait;
use seqforge_core::{BoxError, EnvProvider};
use std::env::{self, VarError};

/// Environment provider backed by the process environment.
///
/// Unset variables resolve to an empty string; a variable that is set
/// but not valid unicode surfaces the underlying error.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl ProcessEnv {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EnvProvider for ProcessEnv {
    async fn get(&self, name: &str) -> Result<String, BoxError> {
        match env::var(name) {
            Ok(value) => Ok(value),
            Err(VarError::NotPresent) => Ok(String::new()),
            Err(err @ VarError::NotUnicode(_)) => Err(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_a_set_variable() {
        std::env::set_var("SEQFORGE_TEST_STORE", "09");
        let env = ProcessEnv::new();
        assert_eq!(env.get("SEQFORGE_TEST_STORE").await.unwrap(), "09");
        std::env::remove_var("SEQFORGE_TEST_STORE");
    }

    #[tokio::test]
    async fn unset_variable_is_empty_not_an_error() {
        let env = ProcessEnv::new();
        assert_eq!(env.get("SEQFORGE_TEST_UNSET").await.unwrap(), "");
    }
}
