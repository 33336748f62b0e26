//! Recursive masking engine.
//!
//! Traversal is type-directed: every walkable type implements [`Maskable`],
//! derived composites consult the masker for their field descriptors, and
//! containers pass their rule down to their elements.

mod containers;
mod dynamic;
#[cfg(feature = "json")]
mod json;
mod traits;

pub use containers::Opaque;
pub use dynamic::Dynamic;
pub use traits::{Maskable, MaskableAny, MaskableExt};
