//! Errors raised while masking.
//!
//! Only handlers can fail. An unknown rule name, or a rule registered for a
//! different kind of value, is not an error: the value is left unchanged.

use thiserror::Error;

/// Error returned by [`Masker::mask`](crate::Masker::mask) and the scalar helpers.
///
/// Any error aborts the whole masking call; no partially masked value is
/// returned.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MaskError {
    /// A rule argument could not be parsed into the form the rule requires.
    #[error("invalid argument `{argument}` for mask rule `{rule}`: {reason}")]
    InvalidArgument {
        rule: String,
        argument: String,
        reason: String,
    },
    /// An any-kind handler returned a value of a different concrete type.
    #[error("mask rule `{rule}` returned a `{found}` where a `{expected}` was expected")]
    TypeMismatch {
        rule: String,
        expected: &'static str,
        found: &'static str,
    },
    /// A handler produced a value that does not fit the field's type.
    #[error("mask rule `{rule}` produced {value}, which does not fit in `{target}`")]
    OutOfRange {
        rule: String,
        value: String,
        target: &'static str,
    },
    /// An error raised while masking a named field.
    #[error("field `{field}`: {source}")]
    Field {
        field: String,
        #[source]
        source: Box<MaskError>,
    },
}

impl MaskError {
    /// Builds an [`MaskError::InvalidArgument`].
    pub fn invalid_argument(
        rule: impl Into<String>,
        argument: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::InvalidArgument {
            rule: rule.into(),
            argument: argument.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn out_of_range(
        rule: &str,
        value: impl ToString,
        target: &'static str,
    ) -> Self {
        Self::OutOfRange {
            rule: rule.to_owned(),
            value: value.to_string(),
            target,
        }
    }

    /// Attaches the name of the field being masked.
    ///
    /// Nested calls build a dotted path, outermost field first.
    #[must_use]
    pub fn within(self, field: &str) -> Self {
        match self {
            Self::Field {
                field: inner,
                source,
            } => Self::Field {
                field: format!("{field}.{inner}"),
                source,
            },
            other => Self::Field {
                field: field.to_owned(),
                source: Box::new(other),
            },
        }
    }

    /// Returns the error without field context.
    pub fn root(&self) -> &MaskError {
        match self {
            Self::Field { source, .. } => source.root(),
            other => other,
        }
    }

    /// Returns the dotted path of the field that failed, if known.
    pub fn field_path(&self) -> Option<&str> {
        match self {
            Self::Field { field, .. } => Some(field),
            _ => None,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.root(), Self::InvalidArgument { .. })
    }
}
