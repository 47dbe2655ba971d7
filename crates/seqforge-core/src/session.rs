use crate::error::{Error, Result};
use crate::provider::{CounterProvider, EnvProvider};
use jiff::Zoned;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex};

/// Mutator applied to a freshly constructed session before evaluation.
///
/// Lets callers override the captured timestamp or pre-seed key
/// fragments for testing and batch scenarios.
pub type SessionOption = Box<dyn FnOnce(&mut Session) + Send>;

/// Overrides the session timestamp.
pub fn at_time(now: Zoned) -> SessionOption {
    Box::new(move |session| session.set_now(now))
}

/// Pre-seeds the session's key-fragment list.
pub fn seed_key_fragments<I>(fragments: I) -> SessionOption
where
    I: IntoIterator<Item = String> + Send + 'static,
{
    Box::new(move |session| {
        for fragment in fragments {
            session.push_key_fragment(fragment);
        }
    })
}

/// Per-call evaluation context.
///
/// A session is created fresh for every `next` call and discarded
/// afterwards. It carries the timestamp captured once per call, the
/// ordered key-fragment list accumulated during join key passes, the
/// random source shared with the owning generator, and the two external
/// providers.
pub struct Session {
    now: Zoned,
    key_fragments: Vec<String>,
    rng: Arc<Mutex<StdRng>>,
    env: Option<Arc<dyn EnvProvider>>,
    counter: Option<Arc<dyn CounterProvider>>,
}

impl Session {
    pub fn new(
        now: Zoned,
        rng: Arc<Mutex<StdRng>>,
        env: Option<Arc<dyn EnvProvider>>,
        counter: Option<Arc<dyn CounterProvider>>,
    ) -> Self {
        Self {
            now,
            key_fragments: Vec::new(),
            rng,
            env,
            counter,
        }
    }

    /// Clones this session for an isolated sub-tree scope.
    ///
    /// The key-fragment list starts empty; the timestamp, random source
    /// and providers are shared with the parent.
    pub fn scoped(&self) -> Session {
        Session {
            now: self.now.clone(),
            key_fragments: Vec::new(),
            rng: Arc::clone(&self.rng),
            env: self.env.clone(),
            counter: self.counter.clone(),
        }
    }

    pub fn now(&self) -> &Zoned {
        &self.now
    }

    pub fn set_now(&mut self, now: Zoned) {
        self.now = now;
    }

    pub fn push_key_fragment(&mut self, fragment: String) {
        self.key_fragments.push(fragment);
    }

    pub fn key_fragments(&self) -> &[String] {
        &self.key_fragments
    }

    /// The hierarchical counter key: accumulated fragments joined with `.`.
    pub fn counter_key(&self) -> String {
        self.key_fragments.join(".")
    }

    /// Runs `f` with exclusive access to the shared random source.
    ///
    /// Locked once per call site rather than per draw so multi-character
    /// fills do not interleave with concurrent sessions mid-string.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> Result<T> {
        let mut rng = self.rng.lock().map_err(|_| Error::RandomSourcePoisoned)?;
        Ok(f(&mut rng))
    }

    pub fn has_env_provider(&self) -> bool {
        self.env.is_some()
    }

    /// Resolves `name` through the environment provider.
    ///
    /// Returns `None` when no provider is configured (feature disabled,
    /// not a failure).
    pub async fn resolve_env(&self, name: &str) -> Result<Option<String>> {
        let Some(provider) = &self.env else {
            return Ok(None);
        };
        let value = provider
            .get(name)
            .await
            .map_err(|source| Error::Environment {
                name: name.to_owned(),
                source,
            })?;
        Ok(Some(value))
    }

    /// Fetches the next counter value for the current key.
    ///
    /// Returns `None` when no provider is configured.
    pub async fn next_counter(&self, min: i64, step: i64) -> Result<Option<i64>> {
        let Some(provider) = &self.counter else {
            return Ok(None);
        };
        let key = self.counter_key();
        let value =
            provider
                .next(&key, min, step)
                .await
                .map_err(|source| Error::Counter { key, source })?;
        Ok(Some(value))
    }
}
