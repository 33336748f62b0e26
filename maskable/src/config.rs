//! Masker configuration.

use std::sync::Arc;

/// Annotation keyword read by default (`#[mask("...")]`).
pub const DEFAULT_TAG_NAME: &str = "mask";

/// Default text substituted by `filled` and `fixed`, once per output position.
pub const MASK_CHAR: &str = "*";

/// Number of mask characters produced by the `fixed` rule.
pub const FIXED_LEN: usize = 8;

/// Active configuration of a [`Masker`](crate::Masker).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskerConfig {
    /// Annotation keyword whose rules are honoured. Empty disables annotations.
    tag_name: Arc<str>,
    /// Substitution text for `filled` and `fixed`.
    mask_char: Arc<str>,
    /// Whether field descriptors are cached per type.
    cache_enabled: bool,
}

impl Default for MaskerConfig {
    fn default() -> Self {
        Self {
            tag_name: Arc::from(DEFAULT_TAG_NAME),
            mask_char: Arc::from(MASK_CHAR),
            cache_enabled: true,
        }
    }
}

impl MaskerConfig {
    /// Uses a specific annotation keyword.
    #[must_use]
    pub fn with_tag_name(mut self, tag_name: &str) -> Self {
        self.tag_name = Arc::from(tag_name);
        self
    }

    /// Uses a specific mask text.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: &str) -> Self {
        self.mask_char = Arc::from(mask_char);
        self
    }

    /// Turns the type metadata cache on or off.
    #[must_use]
    pub fn with_cache_enabled(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn mask_char(&self) -> &str {
        &self.mask_char
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache_enabled
    }

    pub(crate) fn tag_name_arc(&self) -> Arc<str> {
        Arc::clone(&self.tag_name)
    }

    pub(crate) fn mask_char_arc(&self) -> Arc<str> {
        Arc::clone(&self.mask_char)
    }

    pub(crate) fn set_tag_name(&mut self, tag_name: &str) {
        self.tag_name = Arc::from(tag_name);
    }

    pub(crate) fn set_mask_char(&mut self, mask_char: &str) {
        self.mask_char = Arc::from(mask_char);
    }

    pub(crate) fn set_cache_enabled(&mut self, enabled: bool) {
        self.cache_enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = MaskerConfig::default();
        assert_eq!(config.tag_name(), "mask");
        assert_eq!(config.mask_char(), "*");
        assert!(config.cache_enabled());
    }

    #[test]
    fn builders_override_each_setting() {
        let config = MaskerConfig::default()
            .with_tag_name("fake")
            .with_mask_char("+")
            .with_cache_enabled(false);
        assert_eq!(config.tag_name(), "fake");
        assert_eq!(config.mask_char(), "+");
        assert!(!config.cache_enabled());
    }
}
