//! Static field tables emitted by `#[derive(Maskable)]`.
//!
//! A [`Composite`] type describes its fields once, at compile time. The
//! masker turns that description into [`FieldDescriptor`]s for the active
//! annotation keyword and caches them per type.

/// One `keyword = "rule"` pair attached to a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Annotation {
    keyword: &'static str,
    rule: &'static str,
}

impl Annotation {
    pub const fn new(keyword: &'static str, rule: &'static str) -> Self {
        Self { keyword, rule }
    }

    pub fn keyword(&self) -> &'static str {
        self.keyword
    }

    pub fn rule(&self) -> &'static str {
        self.rule
    }
}

/// Compile-time description of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldInfo {
    name: &'static str,
    exported: bool,
    annotations: &'static [Annotation],
}

impl FieldInfo {
    pub const fn new(name: &'static str, exported: bool, annotations: &'static [Annotation]) -> Self {
        Self {
            name,
            exported,
            annotations,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn exported(&self) -> bool {
        self.exported
    }

    pub fn annotations(&self) -> &'static [Annotation] {
        self.annotations
    }

    /// Returns the rule annotated under `keyword`.
    ///
    /// An empty keyword never matches, which disables annotations.
    pub fn rule_for(&self, keyword: &str) -> Option<&'static str> {
        if keyword.is_empty() {
            return None;
        }
        self.annotations
            .iter()
            .find(|annotation| annotation.keyword == keyword)
            .map(|annotation| annotation.rule)
    }

    /// Resolves this field against the active annotation keyword.
    pub fn describe(&self, keyword: &str) -> FieldDescriptor {
        FieldDescriptor {
            name: self.name,
            exported: self.exported,
            rule: self.rule_for(keyword),
        }
    }
}

/// A field as seen by the masking engine under one configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: &'static str,
    exported: bool,
    rule: Option<&'static str>,
}

impl FieldDescriptor {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn exported(&self) -> bool {
        self.exported
    }

    /// The explicit rule for the active keyword, if any.
    pub fn rule(&self) -> Option<&'static str> {
        self.rule
    }
}

/// Types that expose a static field table.
///
/// Implemented by `#[derive(Maskable)]`. For enums the table lists the
/// fields of every variant in declaration order.
pub trait Composite: 'static {
    fn fields() -> &'static [FieldInfo];
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: FieldInfo = FieldInfo::new(
        "name",
        true,
        &[Annotation::new("mask", "filled"), Annotation::new("fake", "hash")],
    );

    #[test]
    fn rule_for_selects_by_keyword() {
        assert_eq!(NAME.rule_for("mask"), Some("filled"));
        assert_eq!(NAME.rule_for("fake"), Some("hash"));
        assert_eq!(NAME.rule_for("other"), None);
    }

    #[test]
    fn empty_keyword_disables_annotations() {
        assert_eq!(NAME.rule_for(""), None);
        assert_eq!(NAME.describe("").rule(), None);
    }

    #[test]
    fn describe_keeps_name_and_visibility() {
        let descriptor = NAME.describe("fake");
        assert_eq!(descriptor.name(), "name");
        assert!(descriptor.exported());
        assert_eq!(descriptor.rule(), Some("hash"));
    }
}
