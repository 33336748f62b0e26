//! Core traits of the masking engine.
//!
//! [`Maskable`] is implemented by every value the engine can walk: scalars,
//! containers, derived composites and dynamic values. [`MaskableAny`] is its
//! object-safe counterpart, used where the concrete type is not known
//! statically (any-kind handlers and [`Dynamic`](crate::Dynamic)).

use std::any::Any;

use crate::{error::MaskError, masker::Masker};

/// A value the masking engine can copy with rules applied.
///
/// `mask_with` never modifies `self`; it returns a new value. Implementations
/// offer the whole value to the any-kind table first (see
/// [`Masker::apply_any`]) and otherwise recurse into their parts with the
/// same `rule`.
pub trait Maskable: Clone + Send + Sync + 'static {
    /// Returns a masked copy of `self` under `rule`. An empty rule means no
    /// rule; composites still apply their own field rules.
    fn mask_with(&self, masker: &Masker, rule: &str) -> Result<Self, MaskError>;

    /// Returns the zero value of this shape: empty text, `0`, `false`,
    /// `None`, empty containers, or a composite with every field zeroed.
    #[must_use]
    fn zeroed(&self) -> Self;

    /// The text name of this value when used as a map key.
    ///
    /// Maps consult the field-name registry with this name when they carry
    /// no rule of their own.
    fn as_key_name(&self) -> Option<&str> {
        None
    }
}

/// Masking through the default masker.
pub trait MaskableExt: Maskable {
    /// Returns a masked copy of `self` using [`default_masker`](crate::default_masker).
    fn masked(&self) -> Result<Self, MaskError> {
        crate::default_masker().mask(self)
    }

    /// Returns a masked copy of `self` using `masker`.
    fn masked_by(&self, masker: &Masker) -> Result<Self, MaskError> {
        masker.mask(self)
    }
}

impl<T: Maskable> MaskableExt for T {}

/// Object-safe view of a [`Maskable`] value.
pub trait MaskableAny: Any + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// The concrete type name, for diagnostics.
    fn type_name(&self) -> &'static str;

    fn clone_any(&self) -> Box<dyn MaskableAny>;

    /// The zero value of the concrete type.
    fn zeroed_any(&self) -> Box<dyn MaskableAny>;

    /// Masks the concrete value with `rule`.
    fn mask_any(&self, masker: &Masker, rule: &str) -> Result<Box<dyn MaskableAny>, MaskError>;
}

impl<T: Maskable> MaskableAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn clone_any(&self) -> Box<dyn MaskableAny> {
        Box::new(self.clone())
    }

    fn zeroed_any(&self) -> Box<dyn MaskableAny> {
        Box::new(self.zeroed())
    }

    fn mask_any(&self, masker: &Masker, rule: &str) -> Result<Box<dyn MaskableAny>, MaskError> {
        Ok(Box::new(self.mask_with(masker, rule)?))
    }
}

impl dyn MaskableAny {
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}
