//! Analysis Core
//!
//! Input normalization, the fixed string hash, and the salted metric
//! generator that every mock tool report is derived from.

mod hasher;
mod metrics;
mod normalize;


pub use hasher::{hash, hash_chars, HASH_MODULUS, HASH_MULTIPLIER};
pub use metrics::{
    derive_choice, derive_flag, derive_metric, derive_scaled, truncate, MetricGenerator,
    MetricRange,
};
pub use normalize::normalize;
