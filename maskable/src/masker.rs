//! The [`Masker`]: registries, configuration and the masking entry points.

use std::{
    ops::RangeInclusive,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use crate::{
    cache::TypeCache,
    config::MaskerConfig,
    descriptor::{Composite, FieldDescriptor},
    engine::{Maskable, MaskableAny},
    error::MaskError,
    registry::{FieldRegistry, HandlerRegistry, HandlerTable, MaskHandler, MaskKind, MaskRule},
    rules, transform,
};

/// Produces masked copies of values according to per-field rules.
///
/// A masker owns its handler tables, its field-name registry, its
/// configuration and a cache of per-type field descriptors. Every method
/// takes `&self`, so a masker can be shared between threads and configured
/// after it has been shared.
///
/// ```ignore
/// use maskable::{Masker, Maskable};
///
/// #[derive(Clone, Debug, Maskable)]
/// pub struct User {
///     pub id: String,
///     #[mask("filled")]
///     pub name: String,
/// }
///
/// let masker = Masker::new();
/// let user = User { id: "123456".into(), name: "Usagi".into() };
/// let masked = masker.mask(&user)?;
/// assert_eq!(masked.name, "*****");
/// ```
pub struct Masker {
    handlers: RwLock<HandlerRegistry>,
    fields: RwLock<FieldRegistry>,
    config: RwLock<MaskerConfig>,
    cache: TypeCache,
}

impl Default for Masker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Masker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Masker")
            .field("config", &*read(&self.config))
            .field("cached_types", &self.cache.len())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Construction
// =============================================================================

impl Masker {
    /// Creates a masker with the default configuration and the built-in rules.
    pub fn new() -> Self {
        Self::with_config(MaskerConfig::default())
    }

    /// Creates a masker with the given configuration and the built-in rules.
    pub fn with_config(config: MaskerConfig) -> Self {
        let masker = Self::bare(config);
        masker.register_builtins();
        masker
    }

    /// Creates a masker with the default configuration and no handlers.
    ///
    /// Every rule is a no-match until handlers are registered.
    pub fn empty() -> Self {
        Self::bare(MaskerConfig::default())
    }

    fn bare(config: MaskerConfig) -> Self {
        Self {
            handlers: RwLock::new(HandlerRegistry::default()),
            fields: RwLock::new(FieldRegistry::default()),
            config: RwLock::new(config),
            cache: TypeCache::default(),
        }
    }

    /// Registers `zero`, `filled`, `fixed`, `hash` and `random`.
    ///
    /// Existing handlers with those names are replaced.
    pub fn register_builtins(&self) {
        let mut handlers = write(&self.handlers);
        handlers.insert(
            rules::ZERO,
            MaskHandler::any(|_, _, value| Ok(value.zeroed_any())),
        );
        handlers.insert(
            rules::FILLED,
            MaskHandler::text(|masker, arg, value| {
                transform::filled(value, arg, &masker.mask_char())
            }),
        );
        handlers.insert(
            rules::FIXED,
            MaskHandler::text(|masker, _, value| Ok(transform::fixed(value, &masker.mask_char()))),
        );
        handlers.insert(
            rules::HASH,
            MaskHandler::text(|_, _, value| Ok(transform::hash(value))),
        );
        handlers.insert(
            rules::RANDOM,
            MaskHandler::signed(|_, arg, _, range| transform::random_int(arg, *range.end())),
        );
        handlers.insert(
            rules::RANDOM,
            MaskHandler::unsigned(|_, arg, _, range| transform::random_uint(arg, *range.end())),
        );
        handlers.insert(
            rules::RANDOM,
            MaskHandler::float(|_, arg, _| transform::random_float(arg)),
        );
    }
}

// =============================================================================
// Configuration
// =============================================================================

impl Masker {
    /// Selects the annotation keyword to honour. Empty disables annotations.
    pub fn set_tag_name(&self, tag_name: &str) {
        write(&self.config).set_tag_name(tag_name);
        self.cache.clear();
    }

    /// Sets the text `filled` and `fixed` emit per output position.
    pub fn set_mask_char(&self, mask_char: &str) {
        write(&self.config).set_mask_char(mask_char);
    }

    /// Turns the type metadata cache on or off. Turning it off empties it.
    pub fn set_cache_enabled(&self, enabled: bool) {
        write(&self.config).set_cache_enabled(enabled);
        if !enabled {
            self.cache.clear();
        }
    }

    pub fn tag_name(&self) -> Arc<str> {
        read(&self.config).tag_name_arc()
    }

    pub fn mask_char(&self) -> Arc<str> {
        read(&self.config).mask_char_arc()
    }

    pub fn cache_enabled(&self) -> bool {
        read(&self.config).cache_enabled()
    }

    /// Returns a snapshot of the active configuration.
    pub fn config(&self) -> MaskerConfig {
        read(&self.config).clone()
    }

    /// Drops every cached field descriptor.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Number of types with cached field descriptors.
    pub fn cached_type_count(&self) -> usize {
        self.cache.len()
    }
}

// =============================================================================
// Registries
// =============================================================================

impl Masker {
    /// Registers `handler` under `name`, replacing any handler of the same
    /// kind and name.
    pub fn register_handler(&self, name: &str, handler: MaskHandler) {
        write(&self.handlers).insert(name, handler);
    }

    pub fn register_text_handler<F>(&self, name: &str, handler: F)
    where
        F: Fn(&Masker, &str, &str) -> Result<String, MaskError> + Send + Sync + 'static,
    {
        self.register_handler(name, MaskHandler::text(handler));
    }

    pub fn register_signed_handler<F>(&self, name: &str, handler: F)
    where
        F: Fn(&Masker, &str, i64, RangeInclusive<i64>) -> Result<i64, MaskError>
            + Send
            + Sync
            + 'static,
    {
        self.register_handler(name, MaskHandler::signed(handler));
    }

    pub fn register_unsigned_handler<F>(&self, name: &str, handler: F)
    where
        F: Fn(&Masker, &str, u64, RangeInclusive<u64>) -> Result<u64, MaskError>
            + Send
            + Sync
            + 'static,
    {
        self.register_handler(name, MaskHandler::unsigned(handler));
    }

    pub fn register_float_handler<F>(&self, name: &str, handler: F)
    where
        F: Fn(&Masker, &str, f64) -> Result<f64, MaskError> + Send + Sync + 'static,
    {
        self.register_handler(name, MaskHandler::float(handler));
    }

    pub fn register_any_handler<F>(&self, name: &str, handler: F)
    where
        F: Fn(&Masker, &str, &dyn MaskableAny) -> Result<Box<dyn MaskableAny>, MaskError>
            + Send
            + Sync
            + 'static,
    {
        self.register_handler(name, MaskHandler::any(handler));
    }

    /// Whether a handler of `kind` is registered under exactly `name`.
    pub fn has_handler(&self, kind: MaskKind, name: &str) -> bool {
        read(&self.handlers).contains(kind, name)
    }

    /// Assigns `rule` to every field and text map key called `name`.
    pub fn register_field_rule(&self, name: &str, rule: &str) {
        write(&self.fields).insert(name, rule);
    }

    /// Removes the rule registered for `name`, returning it.
    pub fn remove_field_rule(&self, name: &str) -> Option<Arc<str>> {
        write(&self.fields).remove(name)
    }

    /// Returns the rule registered for `name`.
    pub fn field_rule(&self, name: &str) -> Option<Arc<str>> {
        read(&self.fields).get(name)
    }
}

// =============================================================================
// Masking
// =============================================================================

impl Masker {
    /// Returns a masked deep copy of `value`. The input is never modified.
    pub fn mask<T: Maskable>(&self, value: &T) -> Result<T, MaskError> {
        value.mask_with(self, "")
    }

    /// Applies `rule` to a single text value.
    pub fn mask_string(&self, rule: &str, value: &str) -> Result<String, MaskError> {
        value.to_owned().mask_with(self, rule)
    }

    /// Applies `rule` to a single signed integer.
    pub fn mask_int(&self, rule: &str, value: i64) -> Result<i64, MaskError> {
        value.mask_with(self, rule)
    }

    /// Applies `rule` to a single unsigned integer.
    pub fn mask_uint(&self, rule: &str, value: u64) -> Result<u64, MaskError> {
        value.mask_with(self, rule)
    }

    /// Applies `rule` to a single float.
    pub fn mask_float(&self, rule: &str, value: f64) -> Result<f64, MaskError> {
        value.mask_with(self, rule)
    }

    /// Returns the field descriptors of `T` for the active keyword.
    pub fn describe<T: Composite>(&self) -> Arc<[FieldDescriptor]> {
        let (tag_name, enabled) = {
            let config = read(&self.config);
            (config.tag_name_arc(), config.cache_enabled())
        };
        self.cache.resolve::<T>(&tag_name, enabled)
    }

    /// Masks one field of a composite value.
    ///
    /// Unexported fields are replaced by their zero value. Exported fields use
    /// their annotation, else the rule registered for their name, else no rule.
    pub fn mask_field<T: Maskable>(&self, field: &FieldDescriptor, value: &T) -> Result<T, MaskError> {
        if !field.exported() {
            return Ok(value.zeroed());
        }
        let registered;
        let rule = match field.rule() {
            Some(rule) => rule,
            None => {
                registered = self.field_rule(field.name());
                registered.as_deref().unwrap_or_default()
            }
        };
        value
            .mask_with(self, rule)
            .map_err(|err| err.within(field.name()))
    }

    /// Copies a field that is never traversed.
    ///
    /// Unexported fields become `T::default()`.
    pub fn copy_field<T: Clone + Default>(&self, field: &FieldDescriptor, value: &T) -> T {
        if field.exported() {
            value.clone()
        } else {
            T::default()
        }
    }
}

// =============================================================================
// Dispatch
// =============================================================================

impl Masker {
    /// Offers `value` to the any-kind table.
    ///
    /// Returns `Ok(None)` when no any-kind handler matches `rule`.
    pub fn apply_any<T: Maskable>(&self, rule: &str, value: &T) -> Result<Option<T>, MaskError> {
        let Some((handler, parsed)) = self.lookup(rule, |handlers| &handlers.any) else {
            return Ok(None);
        };
        let masked = handler(self, parsed.argument(), value)?;
        let found = masked.type_name();
        match masked.into_any().downcast::<T>() {
            Ok(masked) => Ok(Some(*masked)),
            Err(_) => Err(MaskError::TypeMismatch {
                rule: rule.to_owned(),
                expected: std::any::type_name::<T>(),
                found,
            }),
        }
    }

    /// Offers a text value to the text table.
    pub fn apply_text(&self, rule: &str, value: &str) -> Result<Option<String>, MaskError> {
        match self.lookup(rule, |handlers| &handlers.text) {
            Some((handler, parsed)) => handler(self, parsed.argument(), value).map(Some),
            None => Ok(None),
        }
    }

    /// Offers a signed integer to the signed table.
    ///
    /// `range` is the range of the caller's integer type.
    pub fn apply_signed(
        &self,
        rule: &str,
        value: i64,
        range: RangeInclusive<i64>,
    ) -> Result<Option<i64>, MaskError> {
        match self.lookup(rule, |handlers| &handlers.signed) {
            Some((handler, parsed)) => handler(self, parsed.argument(), value, range).map(Some),
            None => Ok(None),
        }
    }

    /// Offers an unsigned integer to the unsigned table.
    pub fn apply_unsigned(
        &self,
        rule: &str,
        value: u64,
        range: RangeInclusive<u64>,
    ) -> Result<Option<u64>, MaskError> {
        match self.lookup(rule, |handlers| &handlers.unsigned) {
            Some((handler, parsed)) => handler(self, parsed.argument(), value, range).map(Some),
            None => Ok(None),
        }
    }

    /// Offers a float to the float table.
    pub fn apply_float(&self, rule: &str, value: f64) -> Result<Option<f64>, MaskError> {
        match self.lookup(rule, |handlers| &handlers.float) {
            Some((handler, parsed)) => handler(self, parsed.argument(), value).map(Some),
            None => Ok(None),
        }
    }

    /// Resolves `rule` in one table. The registry lock is released on return,
    /// so handlers may call back into the masker.
    fn lookup<'r, F: ?Sized>(
        &self,
        rule: &'r str,
        table: impl FnOnce(&HandlerRegistry) -> &HandlerTable<F>,
    ) -> Option<(Arc<F>, MaskRule<'r>)> {
        if rule.is_empty() {
            return None;
        }
        let handlers = read(&self.handlers);
        table(&handlers).resolve(rule)
    }
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
