//! Adapters for emitting masked values through `tracing`.
//!
//! Masked values are logged as display strings, which works with any tracing
//! subscriber.
//!
//! # Example
//!
//! ```ignore
//! use maskable::{MaskedOutputExt, tracing::TracingMaskedExt};
//!
//! tracing::info!(user = %user.masked_output().tracing_masked());
//! ```

use std::fmt;

#[cfg(feature = "json")]
use serde::Serialize;
use tracing::field::{DisplayValue, display};

#[cfg(feature = "json")]
use crate::output::{MaskedJson, MaskedJsonRef};
use crate::{
    engine::Maskable,
    output::{MaskedOutput, MaskedOutputRef, ToMaskedOutput},
};

/// Marker trait for types whose `tracing` integration always emits masked output.
///
/// This trait is implemented only for adapters that mask before logging. It
/// is not a blanket impl for raw types.
pub trait TracingMasked {}

/// Extension trait for logging masked values as display strings.
pub trait TracingMaskedExt {
    /// Wraps the masked output for `tracing` as a display value.
    fn tracing_masked(&self) -> DisplayValue<String>;
}

impl<T> TracingMaskedExt for T
where
    T: ToMaskedOutput,
{
    fn tracing_masked(&self) -> DisplayValue<String> {
        display(self.to_masked_output().to_string())
    }
}

impl TracingMasked for MaskedOutput {}

impl<T> TracingMasked for MaskedOutputRef<'_, T> where T: Maskable + fmt::Debug {}

#[cfg(feature = "json")]
impl TracingMasked for MaskedJson {}

#[cfg(feature = "json")]
impl<T> TracingMasked for MaskedJsonRef<'_, T> where T: Maskable + Serialize {}
