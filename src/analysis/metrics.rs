//! Deterministic Metric Generator
//!
//! Maps `hash(normalized_input + salt)` into half-open ranges. The same
//! `(input, salt, range)` always yields the same value, across calls,
//! processes and restarts. Values are stable placeholders, never real
//! measurements of the analyzed resource.

use std::fmt::Display;

use crate::analysis::hasher::hash_chars;
use crate::error::{AnalysisError, Result};

/// Resolution of [`derive_scaled`]: the hash is reduced to this many steps.
const SCALE_STEPS: u32 = 10_000;

// == Metric Range ==
/// A validated half-open range `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricRange<T> {
    min: T,
    max: T,
}

impl<T> MetricRange<T>
where
    T: PartialOrd + Copy + Display,
{
    /// Creates a range, rejecting `min >= max` (and NaN bounds).
    pub fn new(min: T, max: T) -> Result<Self> {
        // `!(min < max)` also catches NaN
        if !(min < max) {
            return Err(AnalysisError::InvalidRange {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }
}

fn salted_hash(input: &str, salt: &str) -> u32 {
    hash_chars(input.chars().chain(salt.chars()))
}

// == Derive Metric ==
/// Integer metric: `min + hash(input + salt) % (max - min)`.
pub fn derive_metric(input: &str, salt: &str, range: &MetricRange<u32>) -> u32 {
    let span = range.max - range.min;
    range.min + salted_hash(input, salt) % span
}

// == Derive Scaled ==
/// Fractional metric: `min + (hash % 10000) / 10000 * (max - min)`, always
/// strictly below `max`.
pub fn derive_scaled(input: &str, salt: &str, range: &MetricRange<f64>) -> f64 {
    let step = f64::from(salted_hash(input, salt) % SCALE_STEPS);
    range.min + step / f64::from(SCALE_STEPS) * (range.max - range.min)
}

// == Derive Flag ==
/// Pass/fail metric: true for roughly `pass_percent` of inputs.
pub fn derive_flag(input: &str, salt: &str, pass_percent: u32) -> bool {
    let roll = salted_hash(input, salt) % 100;
    roll < pass_percent
}

// == Derive Choice ==
/// Picks one of `options` deterministically.
pub fn derive_choice<'o, T>(input: &str, salt: &str, options: &'o [T]) -> Result<&'o T> {
    let len = u32::try_from(options.len())
        .map_err(|_| AnalysisError::Internal("too many options".to_string()))?;
    let range = MetricRange::new(0, len)?;
    let index = derive_metric(input, salt, &range) as usize;
    Ok(&options[index])
}

// == Truncate ==
/// Rounds `value` toward negative infinity at `decimals` places, so a value
/// inside `[min, max)` stays below `max` for display.
pub fn truncate(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).floor() / factor
}

// == Metric Generator ==
/// Binds one normalized input so composite reports only vary the salt.
#[derive(Debug, Clone, Copy)]
pub struct MetricGenerator<'a> {
    input: &'a str,
}

impl<'a> MetricGenerator<'a> {
    pub fn new(normalized_input: &'a str) -> Self {
        Self {
            input: normalized_input,
        }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Integer metric in `[min, max)`.
    pub fn metric(&self, salt: &str, min: u32, max: u32) -> Result<u32> {
        let range = MetricRange::new(min, max)?;
        Ok(derive_metric(self.input, salt, &range))
    }

    /// Fractional metric in `[min, max)`.
    pub fn scaled(&self, salt: &str, min: f64, max: f64) -> Result<f64> {
        let range = MetricRange::new(min, max)?;
        Ok(derive_scaled(self.input, salt, &range))
    }

    pub fn flag(&self, salt: &str, pass_percent: u32) -> bool {
        derive_flag(self.input, salt, pass_percent)
    }

    pub fn choice<'o, T>(&self, salt: &str, options: &'o [T]) -> Result<&'o T> {
        derive_choice(self.input, salt, options)
    }
}
