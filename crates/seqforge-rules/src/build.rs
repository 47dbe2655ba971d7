//! Convenience constructors for assembling rule trees.
//!
//! Everything here returns `Arc<dyn Expr>` so the results compose
//! directly; reach for the node builders (e.g.
//! [`Counter::builder`](crate::Counter::builder)) when a shortcut does
//! not cover the exact shape needed.

use crate::code::Code;
use crate::constant::Constant;
use crate::counter::Counter;
use crate::env::EnvRef;
use crate::join::Join;
use crate::random::{Random, RandomFill};
use crate::scope::Scope;
use crate::time::{TimeField, FMT_DAY, FMT_MONTH, FMT_YEAR};
use seqforge_core::charset;
use seqforge_core::{Align, Expr};
use std::sync::Arc;

/// Literal text.
pub fn text(literal: impl Into<String>) -> Arc<dyn Expr> {
    Arc::new(Constant::new(literal))
}

/// Environment reference with a computed name.
pub fn env(name: Arc<dyn Expr>) -> Arc<dyn Expr> {
    Arc::new(EnvRef::new(name))
}

/// Environment reference with a fixed name.
pub fn env_named(name: impl Into<String>) -> Arc<dyn Expr> {
    env(text(name))
}

/// Business code that appears in both the counter key and the output.
pub fn code(child: Arc<dyn Expr>) -> Arc<dyn Expr> {
    Arc::new(Code::new(child))
}

pub fn code_text(literal: impl Into<String>) -> Arc<dyn Expr> {
    code(text(literal))
}

pub fn code_env(name: impl Into<String>) -> Arc<dyn Expr> {
    code(env_named(name))
}

/// Business code that scopes the counter key but stays out of the
/// output.
pub fn code_only(child: Arc<dyn Expr>) -> Arc<dyn Expr> {
    Arc::new(Code::key_only(child))
}

pub fn code_only_text(literal: impl Into<String>) -> Arc<dyn Expr> {
    code_only(text(literal))
}

/// Unpadded counter; a zero step advances by one.
pub fn counter(min: i64, step: i64) -> Arc<dyn Expr> {
    Arc::new(Counter::builder().min(min).step(step).build())
}

/// Counter padded on the left with `pad` out to `width`.
pub fn counter_padded(min: i64, width: usize, pad: impl Into<String>) -> Arc<dyn Expr> {
    Arc::new(
        Counter::builder()
            .min(min)
            .width(width)
            .align(Align::Right)
            .pad(pad)
            .build(),
    )
}

/// Counter zero-padded on the left out to `width`.
pub fn counter_zero_padded(min: i64, width: usize) -> Arc<dyn Expr> {
    counter_padded(min, width, "0")
}

/// Fixed-length random string over `alphabet`.
pub fn random(len: usize, alphabet: impl Into<String>) -> Arc<dyn Expr> {
    Arc::new(Random::new(len, alphabet))
}

pub fn random_digits(len: usize) -> Arc<dyn Expr> {
    random(len, charset::DIGITS)
}

pub fn random_alpha(len: usize) -> Arc<dyn Expr> {
    random(len, charset::UPPER_ALPHA)
}

pub fn random_hex(len: usize) -> Arc<dyn Expr> {
    random(len, charset::HEX_UPPER)
}

pub fn random_unambiguous(len: usize) -> Arc<dyn Expr> {
    random(len, charset::UNAMBIGUOUS)
}

/// Pads `child`'s value on the right with random characters from
/// `alphabet`.
pub fn fill(child: Arc<dyn Expr>, width: usize, alphabet: impl Into<String>) -> Arc<dyn Expr> {
    Arc::new(
        RandomFill::builder()
            .child(child)
            .width(width)
            .alphabet(alphabet)
            .build(),
    )
}

pub fn fill_digits(child: Arc<dyn Expr>, width: usize) -> Arc<dyn Expr> {
    fill(child, width, charset::DIGITS)
}

pub fn fill_alpha(child: Arc<dyn Expr>, width: usize) -> Arc<dyn Expr> {
    fill(child, width, charset::UPPER_ALPHA)
}

pub fn fill_hex(child: Arc<dyn Expr>, width: usize) -> Arc<dyn Expr> {
    fill(child, width, charset::HEX_UPPER)
}

pub fn fill_unambiguous(child: Arc<dyn Expr>, width: usize) -> Arc<dyn Expr> {
    fill(child, width, charset::UNAMBIGUOUS)
}

/// Pads `child`'s value on the left with random characters from
/// `alphabet`.
pub fn fill_left(child: Arc<dyn Expr>, width: usize, alphabet: impl Into<String>) -> Arc<dyn Expr> {
    Arc::new(
        RandomFill::builder()
            .child(child)
            .width(width)
            .alphabet(alphabet)
            .align(Align::Right)
            .build(),
    )
}

pub fn fill_left_digits(child: Arc<dyn Expr>, width: usize) -> Arc<dyn Expr> {
    fill_left(child, width, charset::DIGITS)
}

pub fn fill_left_alpha(child: Arc<dyn Expr>, width: usize) -> Arc<dyn Expr> {
    fill_left(child, width, charset::UPPER_ALPHA)
}

/// Time field rendered with a strftime pattern.
pub fn time(format: impl Into<String>) -> Arc<dyn Expr> {
    Arc::new(TimeField::builder().format(format).build())
}

pub fn time_year() -> Arc<dyn Expr> {
    time(FMT_YEAR)
}

pub fn time_month() -> Arc<dyn Expr> {
    time(FMT_MONTH)
}

pub fn time_day() -> Arc<dyn Expr> {
    time(FMT_DAY)
}

/// Time field that also contributes a key fragment, rendered with
/// `key_format` when non-empty.
pub fn time_keyed(format: impl Into<String>, key_format: impl Into<String>) -> Arc<dyn Expr> {
    Arc::new(
        TimeField::builder()
            .format(format)
            .keyed(true)
            .key_format(key_format)
            .build(),
    )
}

/// Ordered composition; children's non-empty values are joined with
/// `separator`.
pub fn join(separator: impl Into<String>, children: Vec<Arc<dyn Expr>>) -> Arc<dyn Expr> {
    Arc::new(Join::new(separator, children))
}

/// Isolated key namespace for a sub-tree.
pub fn scope(child: Arc<dyn Expr>) -> Arc<dyn Expr> {
    Arc::new(Scope::new(child))
}
