//! Leaf types that are copied unchanged unless an any-kind rule applies.

use std::{marker::PhantomData, ops::Deref, time::Duration};

use super::impl_maskable_opaque;
use crate::{engine::Maskable, error::MaskError, masker::Masker};

// =============================================================================
// Opaque<T> - explicit passthrough wrapper
// =============================================================================

/// Wraps a value the masking engine must not look into.
///
/// Only any-kind rules such as `zero` apply; every other rule leaves the
/// value as is. Use it for foreign types that do not implement `Maskable`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Opaque<T>(pub T);

impl<T> Opaque<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Opaque<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Deref for Opaque<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> Maskable for Opaque<T>
where
    T: Clone + Default + Send + Sync + 'static,
{
    fn mask_with(&self, masker: &Masker, rule: &str) -> Result<Self, MaskError> {
        Ok(masker.apply_any(rule, self)?.unwrap_or_else(|| self.clone()))
    }

    fn zeroed(&self) -> Self {
        Self(T::default())
    }
}

// =============================================================================
// std passthrough implementations
// =============================================================================

impl<T> Maskable for PhantomData<T>
where
    T: ?Sized + Send + Sync + 'static,
{
    fn mask_with(&self, _masker: &Masker, _rule: &str) -> Result<Self, MaskError> {
        Ok(PhantomData)
    }

    fn zeroed(&self) -> Self {
        PhantomData
    }
}

impl_maskable_opaque!(Duration, Duration::ZERO);

// =============================================================================
// Date/time passthrough implementations (feature-gated)
// =============================================================================

#[cfg(feature = "chrono")]
mod chrono_passthrough {
    use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};

    use super::impl_maskable_opaque;

    impl_maskable_opaque!(DateTime<Utc>);
    impl_maskable_opaque!(DateTime<FixedOffset>);
    impl_maskable_opaque!(NaiveDateTime);
    impl_maskable_opaque!(NaiveDate);
    impl_maskable_opaque!(NaiveTime);
    impl_maskable_opaque!(TimeDelta);
}

// =============================================================================
// UUID passthrough implementation (feature-gated)
// =============================================================================

#[cfg(feature = "uuid")]
mod uuid_passthrough {
    use super::impl_maskable_opaque;

    impl_maskable_opaque!(uuid::Uuid, uuid::Uuid::nil());
}
