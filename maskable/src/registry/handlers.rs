//! Rule dispatch tables.
//!
//! Each kind of value has its own table so the same rule name (`random`) can
//! map to different transformations for integers and floats. A rule string is
//! matched against the registered names by prefix; the remainder is the
//! argument handed to the handler.

use std::{collections::BTreeMap, fmt, ops::RangeInclusive, sync::Arc};

use crate::{engine::MaskableAny, error::MaskError, masker::Masker};

/// Handler for text values: `(masker, argument, value)`.
pub type TextMaskFn = dyn Fn(&Masker, &str, &str) -> Result<String, MaskError> + Send + Sync;

/// Handler for signed integers, widened to `i64`: `(masker, argument, value,
/// range)`, where `range` is the range of the value's own type.
pub type SignedMaskFn =
    dyn Fn(&Masker, &str, i64, RangeInclusive<i64>) -> Result<i64, MaskError> + Send + Sync;

/// Handler for unsigned integers, widened to `u64`, with the range of the
/// value's own type.
pub type UnsignedMaskFn =
    dyn Fn(&Masker, &str, u64, RangeInclusive<u64>) -> Result<u64, MaskError> + Send + Sync;

/// Handler for floats, widened to `f64`.
pub type FloatMaskFn = dyn Fn(&Masker, &str, f64) -> Result<f64, MaskError> + Send + Sync;

/// Handler applied to values of every kind before the kind-specific table.
///
/// The returned value must have the same concrete type as the input.
pub type AnyMaskFn = dyn Fn(&Masker, &str, &dyn MaskableAny) -> Result<Box<dyn MaskableAny>, MaskError>
    + Send
    + Sync;

/// The kind of value a handler accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaskKind {
    Text,
    Signed,
    Unsigned,
    Float,
    Any,
}

impl fmt::Display for MaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Signed => "signed",
            Self::Unsigned => "unsigned",
            Self::Float => "float",
            Self::Any => "any",
        };
        f.write_str(name)
    }
}

/// A handler together with the kind of value it accepts.
#[derive(Clone)]
pub enum MaskHandler {
    Text(Arc<TextMaskFn>),
    Signed(Arc<SignedMaskFn>),
    Unsigned(Arc<UnsignedMaskFn>),
    Float(Arc<FloatMaskFn>),
    Any(Arc<AnyMaskFn>),
}

impl MaskHandler {
    pub fn text<F>(handler: F) -> Self
    where
        F: Fn(&Masker, &str, &str) -> Result<String, MaskError> + Send + Sync + 'static,
    {
        Self::Text(Arc::new(handler))
    }

    pub fn signed<F>(handler: F) -> Self
    where
        F: Fn(&Masker, &str, i64, RangeInclusive<i64>) -> Result<i64, MaskError>
            + Send
            + Sync
            + 'static,
    {
        Self::Signed(Arc::new(handler))
    }

    pub fn unsigned<F>(handler: F) -> Self
    where
        F: Fn(&Masker, &str, u64, RangeInclusive<u64>) -> Result<u64, MaskError>
            + Send
            + Sync
            + 'static,
    {
        Self::Unsigned(Arc::new(handler))
    }

    pub fn float<F>(handler: F) -> Self
    where
        F: Fn(&Masker, &str, f64) -> Result<f64, MaskError> + Send + Sync + 'static,
    {
        Self::Float(Arc::new(handler))
    }

    pub fn any<F>(handler: F) -> Self
    where
        F: Fn(&Masker, &str, &dyn MaskableAny) -> Result<Box<dyn MaskableAny>, MaskError>
            + Send
            + Sync
            + 'static,
    {
        Self::Any(Arc::new(handler))
    }

    pub fn kind(&self) -> MaskKind {
        match self {
            Self::Text(_) => MaskKind::Text,
            Self::Signed(_) => MaskKind::Signed,
            Self::Unsigned(_) => MaskKind::Unsigned,
            Self::Float(_) => MaskKind::Float,
            Self::Any(_) => MaskKind::Any,
        }
    }
}

impl fmt::Debug for MaskHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MaskHandler").field(&self.kind()).finish()
    }
}

/// A rule string split into the registered name and its argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaskRule<'r> {
    name: &'r str,
    argument: &'r str,
}

impl<'r> MaskRule<'r> {
    pub fn name(&self) -> &'r str {
        self.name
    }

    pub fn argument(&self) -> &'r str {
        self.argument
    }
}

impl fmt::Display for MaskRule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.argument)
    }
}

/// Handlers of one kind, keyed by rule name.
pub(crate) struct HandlerTable<F: ?Sized> {
    handlers: BTreeMap<String, Arc<F>>,
}

impl<F: ?Sized> Default for HandlerTable<F> {
    fn default() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }
}

impl<F: ?Sized> HandlerTable<F> {
    pub(crate) fn insert(&mut self, name: &str, handler: Arc<F>) {
        self.handlers.insert(name.to_owned(), handler);
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Finds the handler whose name is the longest prefix of `rule`.
    pub(crate) fn resolve<'r>(&self, rule: &'r str) -> Option<(Arc<F>, MaskRule<'r>)> {
        self.handlers
            .iter()
            .filter(|(name, _)| !name.is_empty() && rule.starts_with(name.as_str()))
            .max_by_key(|(name, _)| name.len())
            .map(|(name, handler)| {
                let (name, argument) = rule.split_at(name.len());
                (Arc::clone(handler), MaskRule { name, argument })
            })
    }
}

/// The five per-kind tables of a masker.
#[derive(Default)]
pub(crate) struct HandlerRegistry {
    pub(crate) text: HandlerTable<TextMaskFn>,
    pub(crate) signed: HandlerTable<SignedMaskFn>,
    pub(crate) unsigned: HandlerTable<UnsignedMaskFn>,
    pub(crate) float: HandlerTable<FloatMaskFn>,
    pub(crate) any: HandlerTable<AnyMaskFn>,
}

impl HandlerRegistry {
    pub(crate) fn insert(&mut self, name: &str, handler: MaskHandler) {
        match handler {
            MaskHandler::Text(handler) => self.text.insert(name, handler),
            MaskHandler::Signed(handler) => self.signed.insert(name, handler),
            MaskHandler::Unsigned(handler) => self.unsigned.insert(name, handler),
            MaskHandler::Float(handler) => self.float.insert(name, handler),
            MaskHandler::Any(handler) => self.any.insert(name, handler),
        }
    }

    pub(crate) fn contains(&self, kind: MaskKind, name: &str) -> bool {
        match kind {
            MaskKind::Text => self.text.contains(name),
            MaskKind::Signed => self.signed.contains(name),
            MaskKind::Unsigned => self.unsigned.contains(name),
            MaskKind::Float => self.float.contains(name),
            MaskKind::Any => self.any.contains(name),
        }
    }
}
