//! Core types and traits for the seqforge serial-number engine.
//!
//! This crate provides the shared vocabulary used by the rule-tree
//! evaluator and by provider implementations: charset constants, the
//! fill/alignment algorithm, the per-call [`Session`], the evaluation
//! traits, and the external provider contracts.

pub mod charset;
pub mod error;
pub mod expr;
pub mod fill;
pub mod generator;
pub mod provider;
pub mod session;

pub use error::{BoxError, Error, Result};
pub use expr::{Expr, KeySource};
pub use fill::{fill, Align};
pub use generator::SerialGenerator;
pub use provider::{CounterProvider, EnvProvider};
pub use session::{Session, SessionOption};
