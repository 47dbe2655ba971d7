use async_trait::async_trait;
use seqforge_core::{fill, Align, Expr, Result, Session};
use tracing::trace;
use typed_builder::TypedBuilder;

/// Numeric base used to render a counter value.
///
/// The original engine accepted a free-form runtime format string; a
/// closed set of bases is the Rust-native equivalent and keeps the node
/// total (no formatting can fail at evaluation time).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterFormat {
    #[default]
    Decimal,
    LowerHex,
    UpperHex,
    Octal,
    Binary,
}

impl CounterFormat {
    fn render(self, value: i64) -> String {
        match self {
            CounterFormat::Decimal => format!("{value}"),
            CounterFormat::LowerHex => format!("{value:x}"),
            CounterFormat::UpperHex => format!("{value:X}"),
            CounterFormat::Octal => format!("{value:o}"),
            CounterFormat::Binary => format!("{value:b}"),
        }
    }
}

/// Monotonic sequence element backed by the session's counter provider.
///
/// The counter key is whatever the session has accumulated by the time
/// this node's value pass runs, so sibling order inside a join decides
/// which codes scope the sequence. Without a configured provider the
/// node yields an empty string (feature disabled, not a failure).
#[derive(Debug, Clone, TypedBuilder)]
pub struct Counter {
    /// Smallest value the provider may return for a fresh key.
    #[builder(default = 0)]
    min: i64,
    /// Advance per call; 0 is treated as 1.
    #[builder(default = 1)]
    step: i64,
    #[builder(default)]
    format: CounterFormat,
    /// Target width after padding; 0 leaves the rendering unpadded.
    #[builder(default = 0)]
    width: usize,
    #[builder(default)]
    align: Align,
    #[builder(default = String::from("0"), setter(into))]
    pad: String,
}

#[async_trait]
impl Expr for Counter {
    async fn value(&self, session: &mut Session) -> Result<String> {
        let step = if self.step == 0 { 1 } else { self.step };
        trace!(
            key = %session.counter_key(),
            min = self.min,
            step,
            "requesting next counter value"
        );
        let Some(value) = session.next_counter(self.min, step).await? else {
            return Ok(String::new());
        };
        let rendered = self.format.render(value);
        session.with_rng(|rng| fill(&rendered, self.width, self.align, &self.pad, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::test_support::{session, session_with_counter};
    use seqforge_providers::MapCounter;
    use std::sync::Arc;

    #[tokio::test]
    async fn pads_to_width_on_the_left() {
        let counter = Counter::builder().width(4).align(Align::Right).build();
        let provider = Arc::new(MapCounter::new());
        let mut s = session_with_counter(provider.clone());
        assert_eq!(counter.value(&mut s).await.unwrap(), "0000");
        assert_eq!(counter.value(&mut s).await.unwrap(), "0001");
        assert_eq!(counter.value(&mut s).await.unwrap(), "0002");
    }

    #[tokio::test]
    async fn key_reflects_accumulated_fragments() {
        let counter = Counter::builder().min(5).build();
        let provider = Arc::new(MapCounter::new());
        let mut s = session_with_counter(provider.clone());
        s.push_key_fragment("ST".to_owned());
        s.push_key_fragment("ORDER".to_owned());
        assert_eq!(counter.value(&mut s).await.unwrap(), "5");
        assert_eq!(provider.current("ST.ORDER"), Some(5));
    }

    #[tokio::test]
    async fn zero_step_advances_by_one() {
        let counter = Counter::builder().step(0).build();
        let provider = Arc::new(MapCounter::new());
        let mut s = session_with_counter(provider.clone());
        assert_eq!(counter.value(&mut s).await.unwrap(), "0");
        assert_eq!(counter.value(&mut s).await.unwrap(), "1");
    }

    #[tokio::test]
    async fn hex_rendering_before_padding() {
        let counter = Counter::builder()
            .min(255)
            .format(CounterFormat::UpperHex)
            .width(4)
            .align(Align::Right)
            .build();
        let mut s = session_with_counter(Arc::new(MapCounter::new()));
        assert_eq!(counter.value(&mut s).await.unwrap(), "00FF");
    }

    #[tokio::test]
    async fn missing_provider_yields_empty() {
        let counter = Counter::builder().build();
        let mut s = session();
        assert_eq!(counter.value(&mut s).await.unwrap(), "");
    }
}
