//! Output types for logging boundaries.
//!
//! This module provides types for handing masked values to a logger:
//!
//! - [`MaskedOutput`]: The output enum (Text or Json)
//! - [`ToMaskedOutput`]: Trait for types that can produce masked output
//! - [`MaskedOutputRef`]: Debug text of the masked copy
//! - [`MaskedJsonRef`]: JSON of the masked copy
//!
//! Masking errors never escape a logging call: they become placeholder text.

use std::fmt;

#[cfg(feature = "json")]
use serde::Serialize;
#[cfg(feature = "json")]
use serde_json::Value as JsonValue;

use crate::{engine::Maskable, error::MaskError, global::default_masker, masker::Masker};

// =============================================================================
// MaskedOutput - Output produced at logging boundaries
// =============================================================================

/// Output produced at a logging boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MaskedOutput {
    Text(String),
    #[cfg(feature = "json")]
    Json(JsonValue),
}

impl MaskedOutput {
    pub(crate) fn failed(err: &MaskError) -> Self {
        Self::Text(format!("Failed to mask value: {err}"))
    }
}

impl fmt::Display for MaskedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            #[cfg(feature = "json")]
            Self::Json(json) => write!(f, "{json}"),
        }
    }
}

// =============================================================================
// ToMaskedOutput - Trait for producing logging-safe output
// =============================================================================

/// Produces a logging-safe output representation.
pub trait ToMaskedOutput {
    #[must_use]
    fn to_masked_output(&self) -> MaskedOutput;
}

impl ToMaskedOutput for MaskedOutput {
    fn to_masked_output(&self) -> MaskedOutput {
        self.clone()
    }
}

// =============================================================================
// MaskedOutputRef - Debug text of a masked copy
// =============================================================================

/// Wrapper that masks a value when it is turned into output.
///
/// Created by [`MaskedOutputExt::masked_output`].
pub struct MaskedOutputRef<'a, T: ?Sized> {
    value: &'a T,
    masker: &'a Masker,
}

impl<T> ToMaskedOutput for MaskedOutputRef<'_, T>
where
    T: Maskable + fmt::Debug,
{
    fn to_masked_output(&self) -> MaskedOutput {
        match self.masker.mask(self.value) {
            Ok(masked) => MaskedOutput::Text(format!("{masked:?}")),
            Err(err) => MaskedOutput::failed(&err),
        }
    }
}

/// Extension trait to obtain a masked output wrapper.
pub trait MaskedOutputExt {
    /// Wraps the value for output through the default masker.
    fn masked_output(&self) -> MaskedOutputRef<'_, Self>
    where
        Self: Sized;

    /// Wraps the value for output through `masker`.
    fn masked_output_with<'a>(&'a self, masker: &'a Masker) -> MaskedOutputRef<'a, Self>
    where
        Self: Sized;
}

impl<T> MaskedOutputExt for T
where
    T: Maskable + fmt::Debug,
{
    fn masked_output(&self) -> MaskedOutputRef<'_, Self> {
        self.masked_output_with(default_masker())
    }

    fn masked_output_with<'a>(&'a self, masker: &'a Masker) -> MaskedOutputRef<'a, Self> {
        MaskedOutputRef {
            value: self,
            masker,
        }
    }
}

// =============================================================================
// MaskedJson - An already-masked JSON value
// =============================================================================

/// A JSON value produced from a masked copy.
#[cfg(feature = "json")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskedJson(JsonValue);

#[cfg(feature = "json")]
impl MaskedJson {
    /// Masks `value` with `masker` and serializes the copy.
    ///
    /// Masking and serialization failures are stored as a JSON string.
    pub fn from_value<T>(value: &T, masker: &Masker) -> Self
    where
        T: Maskable + Serialize,
    {
        let json = match masker.mask(value) {
            Ok(masked) => serde_json::to_value(masked).unwrap_or_else(|err| {
                JsonValue::String(format!("Failed to serialize masked value: {err}"))
            }),
            Err(err) => JsonValue::String(format!("Failed to mask value: {err}")),
        };
        Self(json)
    }

    pub fn value(&self) -> &JsonValue {
        &self.0
    }

    pub fn into_inner(self) -> JsonValue {
        self.0
    }
}

#[cfg(feature = "json")]
impl ToMaskedOutput for MaskedJson {
    fn to_masked_output(&self) -> MaskedOutput {
        MaskedOutput::Json(self.0.clone())
    }
}

// =============================================================================
// MaskedJsonRef - Wrapper for masked JSON output
// =============================================================================

/// Wrapper that masks a value and serializes it as JSON when turned into output.
#[cfg(feature = "json")]
pub struct MaskedJsonRef<'a, T: ?Sized> {
    value: &'a T,
    masker: &'a Masker,
}

#[cfg(feature = "json")]
impl<T> ToMaskedOutput for MaskedJsonRef<'_, T>
where
    T: Maskable + Serialize,
{
    fn to_masked_output(&self) -> MaskedOutput {
        MaskedJson::from_value(self.value, self.masker).to_masked_output()
    }
}

/// Extension trait to obtain a masked JSON output wrapper.
#[cfg(feature = "json")]
pub trait MaskedJsonExt {
    /// Wraps the value for JSON output through the default masker.
    fn masked_json(&self) -> MaskedJsonRef<'_, Self>
    where
        Self: Sized;

    /// Wraps the value for JSON output through `masker`.
    fn masked_json_with<'a>(&'a self, masker: &'a Masker) -> MaskedJsonRef<'a, Self>
    where
        Self: Sized;
}

#[cfg(feature = "json")]
impl<T> MaskedJsonExt for T
where
    T: Maskable + Serialize,
{
    fn masked_json(&self) -> MaskedJsonRef<'_, Self> {
        self.masked_json_with(default_masker())
    }

    fn masked_json_with<'a>(&'a self, masker: &'a Masker) -> MaskedJsonRef<'a, Self> {
        MaskedJsonRef {
            value: self,
            masker,
        }
    }
}
