//! Built-in transformations.
//!
//! These are pure functions over a single value. The masker registers thin
//! handlers around them under the names in [`rules`](crate::rules); custom
//! handlers can call them directly.
//!
//! Lengths are counted in Unicode scalar values, not bytes.

use rand::Rng;
use sha1::{Digest, Sha1};

use crate::{
    config::FIXED_LEN,
    error::MaskError,
    rules::{FILLED, RANDOM},
};

/// Largest output length of [`filled`] in bytes.
pub const MAX_FILLED_LEN: usize = 1 << 20;

/// Largest number of decimal digits kept by [`random_float`].
const MAX_FLOAT_DIGITS: u32 = f64::DIGITS;

/// Replaces every scalar value of `value` with `mask`.
///
/// With a non-empty `arg`, the output is exactly `arg` copies of `mask`
/// regardless of the input length. An empty input always yields an empty
/// output. A count whose output would exceed [`MAX_FILLED_LEN`] bytes is an
/// invalid argument.
pub fn filled(value: &str, arg: &str, mask: &str) -> Result<String, MaskError> {
    if value.is_empty() {
        return Ok(String::new());
    }
    if arg.is_empty() {
        return Ok(mask.repeat(value.chars().count()));
    }
    let count = arg
        .parse::<usize>()
        .map_err(|err| MaskError::invalid_argument(FILLED, arg, err))?;
    match count.checked_mul(mask.len()) {
        Some(len) if len <= MAX_FILLED_LEN => Ok(mask.repeat(count)),
        _ => Err(MaskError::invalid_argument(
            FILLED,
            arg,
            format!("output longer than {MAX_FILLED_LEN} bytes"),
        )),
    }
}

/// Replaces a non-empty value with [`FIXED_LEN`] copies of `mask`.
pub fn fixed(value: &str, mask: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    mask.repeat(FIXED_LEN)
}

/// Lower-case hex SHA-1 digest of the UTF-8 bytes of `value`.
///
/// An empty input yields an empty output.
pub fn hash(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    format!("{:x}", Sha1::digest(value.as_bytes()))
}

/// Uniform signed integer in `[0, N)`, where `arg` is `N`.
///
/// `max` caps the result for narrow integer types: a bound past `max` samples
/// from `[0, max]` instead.
pub fn random_int(arg: &str, max: i64) -> Result<i64, MaskError> {
    let bound = arg
        .parse::<i64>()
        .map_err(|err| MaskError::invalid_argument(RANDOM, arg, err))?;
    if bound <= 0 {
        return Err(MaskError::invalid_argument(
            RANDOM,
            arg,
            "bound must be positive",
        ));
    }
    Ok(rand::rng().random_range(0..=(bound - 1).min(max.max(0))))
}

/// Uniform unsigned integer in `[0, N)`, where `arg` is `N`, capped at `max`
/// like [`random_int`].
pub fn random_uint(arg: &str, max: u64) -> Result<u64, MaskError> {
    let bound = arg
        .parse::<u64>()
        .map_err(|err| MaskError::invalid_argument(RANDOM, arg, err))?;
    if bound == 0 {
        return Err(MaskError::invalid_argument(
            RANDOM,
            arg,
            "bound must be positive",
        ));
    }
    Ok(rand::rng().random_range(0..=(bound - 1).min(max)))
}

/// Uniform float in `[0, N)` truncated to `M` decimal digits, where `arg` is
/// `N.M`. A bare `N` keeps no decimal digits.
pub fn random_float(arg: &str) -> Result<f64, MaskError> {
    let (bound, digits) = arg.split_once('.').unwrap_or((arg, "0"));
    let bound = bound
        .parse::<u64>()
        .map_err(|err| MaskError::invalid_argument(RANDOM, arg, err))?;
    if bound == 0 {
        return Err(MaskError::invalid_argument(
            RANDOM,
            arg,
            "bound must be positive",
        ));
    }
    let digits = digits
        .parse::<u32>()
        .map_err(|err| MaskError::invalid_argument(RANDOM, arg, err))?;

    #[allow(clippy::cast_precision_loss)]
    let sample = rand::rng().random::<f64>() * bound as f64;
    Ok(truncate(sample, digits))
}

/// Drops everything past `digits` decimal digits, rounding toward zero.
fn truncate(value: f64, digits: u32) -> f64 {
    #[allow(clippy::cast_possible_wrap)]
    let scale = 10_f64.powi(digits.min(MAX_FLOAT_DIGITS) as i32);
    (value * scale).trunc() / scale
}
