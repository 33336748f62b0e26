//! Adapters for emitting masked values through `slog`.
//!
//! This module provides `slog::Value` implementations that serialize masked
//! copies, as structured JSON via `slog`'s nested-value support or as Debug
//! text.
//!
//! It is responsible for:
//! - Ensuring the logged representation is derived from a masked copy, not
//!   from the original value.
//! - Avoiding fallible logging APIs: masking and serialization failures are
//!   represented as placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog` or decide which fields are sensitive.

use std::fmt;

use serde::Serialize;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

pub use crate::output::MaskedJson;
use crate::{
    engine::Maskable,
    global::default_masker,
    masker::Masker,
    output::{MaskedJsonRef, MaskedOutput, MaskedOutputRef, ToMaskedOutput},
};

/// Marker trait for types whose `slog` integration always emits masked output.
///
/// This trait is implemented only for adapters that mask before logging. It
/// is not a blanket impl for raw types.
///
/// ```compile_fail
/// use maskable::slog::SlogMasked;
///
/// fn assert_slog_masked<T: SlogMasked>() {}
///
/// assert_slog_masked::<String>();
/// ```
pub trait SlogMasked: SlogValue {}

impl<T: SlogMasked + ?Sized> SlogMasked for &T {}

fn emit_output(
    output: &MaskedOutput,
    record: &Record<'_>,
    key: Key,
    serializer: &mut dyn Serializer,
) -> SlogResult {
    match output {
        MaskedOutput::Text(text) => serializer.emit_str(key, text),
        MaskedOutput::Json(json) => {
            let nested = slog::Serde(json.clone());
            SlogValue::serialize(&nested, record, key, serializer)
        }
    }
}

impl SlogValue for MaskedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value().clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

impl SlogMasked for MaskedJson {}

impl SlogValue for MaskedOutput {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        emit_output(self, record, key, serializer)
    }
}

impl SlogMasked for MaskedOutput {}

impl<T> SlogValue for MaskedOutputRef<'_, T>
where
    T: Maskable + fmt::Debug,
{
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        emit_output(&self.to_masked_output(), record, key, serializer)
    }
}

impl<T> SlogMasked for MaskedOutputRef<'_, T> where T: Maskable + fmt::Debug {}

impl<T> SlogValue for MaskedJsonRef<'_, T>
where
    T: Maskable + Serialize,
{
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        emit_output(&self.to_masked_output(), record, key, serializer)
    }
}

impl<T> SlogMasked for MaskedJsonRef<'_, T> where T: Maskable + Serialize {}

/// Extension trait for slog logging of masked values as JSON.
///
/// The value is masked eagerly and the masked copy is stored as a
/// `serde_json::Value`. The original value is never serialized.
///
/// ## Example
/// ```ignore
/// use maskable::slog::SlogMaskedExt;
///
/// info!(logger, "event"; "user" => user.slog_masked_json());
/// ```
pub trait SlogMaskedExt: Maskable + Serialize {
    /// Masks `self` with the default masker and returns a `slog::Value` that
    /// serializes as structured JSON.
    fn slog_masked_json(&self) -> MaskedJson {
        MaskedJson::from_value(self, default_masker())
    }

    /// Same as [`slog_masked_json`](Self::slog_masked_json) with an explicit masker.
    fn slog_masked_json_with(&self, masker: &Masker) -> MaskedJson {
        MaskedJson::from_value(self, masker)
    }
}

impl<T> SlogMaskedExt for T where T: Maskable + Serialize {}
