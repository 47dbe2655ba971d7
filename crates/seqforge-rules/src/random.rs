use async_trait::async_trait;
use rand::Rng;
use seqforge_core::{fill, Align, Expr, Result, Session};
use std::sync::Arc;
use typed_builder::TypedBuilder;

/// Fixed-length string drawn uniformly from an alphabet.
///
/// Yields an empty string when the length is zero or the alphabet is
/// empty.
#[derive(Debug, Clone)]
pub struct Random {
    len: usize,
    alphabet: String,
}

impl Random {
    pub fn new(len: usize, alphabet: impl Into<String>) -> Self {
        Self {
            len,
            alphabet: alphabet.into(),
        }
    }
}

#[async_trait]
impl Expr for Random {
    async fn value(&self, session: &mut Session) -> Result<String> {
        if self.len == 0 || self.alphabet.is_empty() {
            return Ok(String::new());
        }
        let alphabet: Vec<char> = self.alphabet.chars().collect();
        session.with_rng(|rng| {
            (0..self.len)
                .map(|_| alphabet[rng.random_range(0..alphabet.len())])
                .collect()
        })
    }
}

/// Pads a wrapped expression's value out to a target width with
/// characters drawn from an alphabet.
///
/// A zero width or an empty alphabet disables the node without
/// evaluating the wrapped expression.
#[derive(Clone, TypedBuilder)]
pub struct RandomFill {
    child: Arc<dyn Expr>,
    width: usize,
    #[builder(setter(into))]
    alphabet: String,
    #[builder(default)]
    align: Align,
}

#[async_trait]
impl Expr for RandomFill {
    async fn value(&self, session: &mut Session) -> Result<String> {
        if self.width == 0 || self.alphabet.is_empty() {
            return Ok(String::new());
        }
        let value = self.child.value(session).await?;
        session.with_rng(|rng| fill(&value, self.width, self.align, &self.alphabet, rng))
    }
}
