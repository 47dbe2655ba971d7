use async_trait::async_trait;
use dashmap::DashMap;
use seqforge_core::{BoxError, CounterProvider, EnvProvider};

/// In-memory counter provider keyed by the engine's hierarchical keys.
///
/// DashMap's sharded locks keep independent keys from contending, and
/// the entry API makes each advance atomic, so concurrent `next` calls
/// on one generator stay safe. An absent key starts at exactly `min`;
/// a present key advances by `step` (clamped up to `min` if the stored
/// value has fallen behind a raised minimum).
#[derive(Debug, Default)]
pub struct MapCounter {
    counters: DashMap<String, i64>,
}

impl MapCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value handed out for `key`, if any. Intended for tests and
    /// diagnostics.
    pub fn current(&self, key: &str) -> Option<i64> {
        self.counters.get(key).map(|v| *v.value())
    }
}

#[async_trait]
impl CounterProvider for MapCounter {
    async fn next(&self, key: &str, min: i64, step: i64) -> Result<i64, BoxError> {
        let step = if step == 0 { 1 } else { step };
        let entry = self
            .counters
            .entry(key.to_owned())
            .and_modify(|v| *v = if *v < min { min } else { *v + step })
            .or_insert(min);
        Ok(*entry)
    }
}

/// In-memory environment provider.
///
/// Undefined names resolve to an empty string, matching the engine's
/// "missing is disabled, not failed" convention.
#[derive(Debug, Default)]
pub struct MapEnv {
    vars: DashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }
}

#[async_trait]
impl EnvProvider for MapEnv {
    async fn get(&self, name: &str) -> Result<String, BoxError> {
        Ok(self
            .vars
            .get(name)
            .map(|v| v.value().clone())
            .unwrap_or_default())
    }
}
