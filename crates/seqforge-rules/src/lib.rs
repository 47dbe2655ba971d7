//! Expression-node variants and the rule-tree generator.
//!
//! A rule tree is assembled from the node types in this crate (usually
//! through the [`build`] module) and handed to a [`RuleGenerator`],
//! which evaluates it against a fresh session on every
//! [`next`](seqforge_core::SerialGenerator::next) call.

pub mod build;
pub mod code;
pub mod constant;
pub mod counter;
pub mod env;
pub mod generator;
pub mod join;
pub mod random;
pub mod scope;
pub mod time;

pub use code::Code;
pub use constant::Constant;
pub use counter::{Counter, CounterFormat};
pub use env::EnvRef;
pub use generator::{GeneratorSettings, RuleGenerator};
pub use join::Join;
pub use random::{Random, RandomFill};
pub use scope::Scope;
pub use time::{TimeField, FMT_DAY, FMT_MONTH, FMT_WEEK, FMT_YEAR};
