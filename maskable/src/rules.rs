//! Names of the built-in rules.
//!
//! A rule string is a registered name optionally followed by an argument:
//! `filled4`, `random1000`, `random100000.4`.

/// Replaces the value with its zero value. Applies to every kind.
pub const ZERO: &str = "zero";

/// Replaces each character with the mask text, or emits `N` mask texts.
pub const FILLED: &str = "filled";

/// Replaces non-empty text with a fixed-length run of mask text.
pub const FIXED: &str = "fixed";

/// Replaces non-empty text with its hex SHA-1 digest.
pub const HASH: &str = "hash";

/// Replaces a number with a uniform random number in `[0, N)`.
pub const RANDOM: &str = "random";
