//! The process-wide default masker and free functions that delegate to it.
//!
//! Configuration and registrations made through these functions are visible
//! to every later call in the process, from any thread.

use std::{
    ops::RangeInclusive,
    sync::{Arc, LazyLock},
};

use crate::{
    engine::{Maskable, MaskableAny},
    error::MaskError,
    masker::Masker,
    registry::MaskHandler,
};

static DEFAULT_MASKER: LazyLock<Masker> = LazyLock::new(Masker::new);

/// Returns the shared default masker.
pub fn default_masker() -> &'static Masker {
    &DEFAULT_MASKER
}

/// Masks `value` with the default masker. See [`Masker::mask`].
pub fn mask<T: Maskable>(value: &T) -> Result<T, MaskError> {
    DEFAULT_MASKER.mask(value)
}

pub fn mask_string(rule: &str, value: &str) -> Result<String, MaskError> {
    DEFAULT_MASKER.mask_string(rule, value)
}

pub fn mask_int(rule: &str, value: i64) -> Result<i64, MaskError> {
    DEFAULT_MASKER.mask_int(rule, value)
}

pub fn mask_uint(rule: &str, value: u64) -> Result<u64, MaskError> {
    DEFAULT_MASKER.mask_uint(rule, value)
}

pub fn mask_float(rule: &str, value: f64) -> Result<f64, MaskError> {
    DEFAULT_MASKER.mask_float(rule, value)
}

pub fn set_tag_name(tag_name: &str) {
    DEFAULT_MASKER.set_tag_name(tag_name);
}

pub fn set_mask_char(mask_char: &str) {
    DEFAULT_MASKER.set_mask_char(mask_char);
}

pub fn set_cache_enabled(enabled: bool) {
    DEFAULT_MASKER.set_cache_enabled(enabled);
}

pub fn register_field_rule(name: &str, rule: &str) {
    DEFAULT_MASKER.register_field_rule(name, rule);
}

pub fn field_rule(name: &str) -> Option<Arc<str>> {
    DEFAULT_MASKER.field_rule(name)
}

pub fn register_handler(name: &str, handler: MaskHandler) {
    DEFAULT_MASKER.register_handler(name, handler);
}

pub fn register_text_handler<F>(name: &str, handler: F)
where
    F: Fn(&Masker, &str, &str) -> Result<String, MaskError> + Send + Sync + 'static,
{
    DEFAULT_MASKER.register_text_handler(name, handler);
}

pub fn register_signed_handler<F>(name: &str, handler: F)
where
    F: Fn(&Masker, &str, i64, RangeInclusive<i64>) -> Result<i64, MaskError>
        + Send
        + Sync
        + 'static,
{
    DEFAULT_MASKER.register_signed_handler(name, handler);
}

pub fn register_unsigned_handler<F>(name: &str, handler: F)
where
    F: Fn(&Masker, &str, u64, RangeInclusive<u64>) -> Result<u64, MaskError>
        + Send
        + Sync
        + 'static,
{
    DEFAULT_MASKER.register_unsigned_handler(name, handler);
}

pub fn register_float_handler<F>(name: &str, handler: F)
where
    F: Fn(&Masker, &str, f64) -> Result<f64, MaskError> + Send + Sync + 'static,
{
    DEFAULT_MASKER.register_float_handler(name, handler);
}

pub fn register_any_handler<F>(name: &str, handler: F)
where
    F: Fn(&Masker, &str, &dyn MaskableAny) -> Result<Box<dyn MaskableAny>, MaskError>
        + Send
        + Sync
        + 'static,
{
    DEFAULT_MASKER.register_any_handler(name, handler);
}
