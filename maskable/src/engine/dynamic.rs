//! Dynamically typed values.

use std::fmt;

use crate::{
    engine::{Maskable, MaskableAny},
    error::MaskError,
    masker::Masker,
};

/// A value whose concrete type is only known at runtime.
///
/// Masking delegates to the held value with the same rule and wraps the
/// result again, so `zero` on a `Dynamic` yields a `Dynamic` holding the
/// zero value of the same concrete type. A missing dynamic value is
/// `Option<Dynamic>::None`.
pub struct Dynamic(Box<dyn MaskableAny>);

impl Dynamic {
    pub fn new<T: Maskable>(value: T) -> Self {
        Self(Box::new(value))
    }

    pub fn from_boxed(value: Box<dyn MaskableAny>) -> Self {
        Self(value)
    }

    pub fn is<T: Maskable>(&self) -> bool {
        self.0.is::<T>()
    }

    pub fn downcast_ref<T: Maskable>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Takes the held value out if it is a `T`.
    pub fn into_inner<T: Maskable>(self) -> Option<T> {
        self.0.into_any().downcast::<T>().ok().map(|value| *value)
    }

    /// Name of the held concrete type.
    pub fn type_name(&self) -> &'static str {
        self.0.type_name()
    }

    pub fn as_maskable(&self) -> &dyn MaskableAny {
        &*self.0
    }
}

impl Clone for Dynamic {
    fn clone(&self) -> Self {
        Self(self.0.clone_any())
    }
}

impl fmt::Debug for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Dynamic").field(&self.type_name()).finish()
    }
}

impl Maskable for Dynamic {
    fn mask_with(&self, masker: &Masker, rule: &str) -> Result<Self, MaskError> {
        Ok(Self(self.0.mask_any(masker, rule)?))
    }

    fn zeroed(&self) -> Self {
        Self(self.0.zeroed_any())
    }
}
