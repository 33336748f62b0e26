//! Masking for `serde_json::Value` trees.
//!
//! Strings use the text table, integers the signed or unsigned table and
//! other numbers the float table. An integer no integer handler matches is
//! offered to the float table as well. Arrays mask each element with the array's
//! rule; objects behave like text-keyed maps.

use serde_json::{Map, Number, Value};

use super::containers::maps::mask_entry;
use crate::{engine::Maskable, error::MaskError, masker::Masker};

impl Maskable for Value {
    fn mask_with(&self, masker: &Masker, rule: &str) -> Result<Self, MaskError> {
        if let Some(masked) = masker.apply_any(rule, self)? {
            return Ok(masked);
        }
        match self {
            Value::Null | Value::Bool(_) => Ok(self.clone()),
            Value::String(text) => Ok(masker
                .apply_text(rule, text)?
                .map_or_else(|| self.clone(), Value::String)),
            Value::Number(number) => mask_number(masker, rule, number),
            Value::Array(items) => items
                .iter()
                .map(|item| item.mask_with(masker, rule))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            Value::Object(entries) => {
                let mut masked = Map::with_capacity(entries.len());
                for (key, value) in entries {
                    masked.insert(key.clone(), mask_entry(masker, rule, key, value)?);
                }
                Ok(Value::Object(masked))
            }
        }
    }

    fn zeroed(&self) -> Self {
        match self {
            Value::Null => Value::Null,
            Value::Bool(_) => Value::Bool(false),
            Value::String(_) => Value::String(String::new()),
            Value::Number(number) if number.is_f64() => Value::from(0.0),
            Value::Number(_) => Value::from(0),
            Value::Array(_) => Value::Array(Vec::new()),
            Value::Object(_) => Value::Object(Map::new()),
        }
    }

    fn as_key_name(&self) -> Option<&str> {
        self.as_str()
    }
}

fn mask_number(masker: &Masker, rule: &str, number: &Number) -> Result<Value, MaskError> {
    let masked = if let Some(value) = number.as_i64() {
        masker
            .apply_signed(rule, value, i64::MIN..=i64::MAX)?
            .map(Value::from)
    } else if let Some(value) = number.as_u64() {
        masker
            .apply_unsigned(rule, value, u64::MIN..=u64::MAX)?
            .map(Value::from)
    } else {
        None
    };
    match masked {
        Some(masked) => Ok(masked),
        None => mask_float(masker, rule, number),
    }
}

fn mask_float(masker: &Masker, rule: &str, number: &Number) -> Result<Value, MaskError> {
    let Some(value) = number.as_f64() else {
        return Ok(Value::Number(number.clone()));
    };
    match masker.apply_float(rule, value)? {
        Some(masked) => Number::from_f64(masked)
            .map(Value::Number)
            .ok_or_else(|| MaskError::out_of_range(rule, masked, "serde_json::Number")),
        None => Ok(Value::Number(number.clone())),
    }
}
