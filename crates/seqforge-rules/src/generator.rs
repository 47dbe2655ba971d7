use async_trait::async_trait;
use jiff::Zoned;
use rand::rngs::StdRng;
use rand::SeedableRng;
use seqforge_core::{
    CounterProvider, EnvProvider, Expr, Result, SerialGenerator, Session, SessionOption,
};
use std::sync::{Arc, Mutex};
use tracing::debug;
use typed_builder::TypedBuilder;

/// Configures a [`RuleGenerator`].
#[derive(TypedBuilder)]
pub struct GeneratorSettings {
    /// Root of the rule tree evaluated on every call.
    pub root: Arc<dyn Expr>,
    /// Environment provider; rules with env references yield empty
    /// strings without one.
    #[builder(default, setter(strip_option))]
    pub env: Option<Arc<dyn EnvProvider>>,
    /// Counter provider; counter nodes yield empty strings without one.
    #[builder(default, setter(strip_option))]
    pub counter: Option<Arc<dyn CounterProvider>>,
    /// Fixed seed for the shared random source. Defaults to OS entropy;
    /// set it only for reproducible output in tests.
    #[builder(default, setter(strip_option))]
    pub rng_seed: Option<u64>,
}

/// Serial-number generator driven by a rule tree.
///
/// Constructed once and shared for the life of the process. All
/// per-call mutable state lives in the session a `next` call creates,
/// so concurrent calls only contend on the mutex guarding the shared
/// random source.
pub struct RuleGenerator {
    root: Arc<dyn Expr>,
    rng: Arc<Mutex<StdRng>>,
    env: Option<Arc<dyn EnvProvider>>,
    counter: Option<Arc<dyn CounterProvider>>,
}

impl RuleGenerator {
    pub fn new(settings: GeneratorSettings) -> Self {
        let rng = match settings.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            root: settings.root,
            rng: Arc::new(Mutex::new(rng)),
            env: settings.env,
            counter: settings.counter,
        }
    }
}

#[async_trait]
impl SerialGenerator for RuleGenerator {
    async fn next_with(&self, options: Vec<SessionOption>) -> Result<String> {
        let mut session = Session::new(
            Zoned::now(),
            Arc::clone(&self.rng),
            self.env.clone(),
            self.counter.clone(),
        );
        for option in options {
            option(&mut session);
        }
        let value = self.root.value(&mut session).await?;
        debug!(len = value.len(), "generated serial number");
        Ok(value)
    }
}
