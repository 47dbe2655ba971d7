//! Reference provider implementations for the seqforge engine.
//!
//! The map-backed providers keep counters and variables in process
//! memory; they carry no persistence and exist for embedding in tests,
//! prototypes, and single-process tools. Deployments that need
//! cross-process uniqueness supply their own
//! [`CounterProvider`](seqforge_core::CounterProvider) backed by
//! durable storage.

pub mod memory;
pub mod process;

pub use memory::{MapCounter, MapEnv};
pub use process::ProcessEnv;
