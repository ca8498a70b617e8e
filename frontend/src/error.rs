use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::booking::fields::FieldId;

#[derive(Debug, Error, PartialEq)]
pub enum BookingError {
    #[error("required fields missing or invalid: {}", list_fields(.fields))]
    Incomplete { fields: Vec<FieldId> },
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("browser call failed: {0}")]
    Dom(String),
}

fn list_fields(fields: &[FieldId]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<JsValue> for BookingError {
    fn from(value: JsValue) -> Self {
        BookingError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_lists_field_ids() {
        let err = BookingError::Incomplete { fields: vec![FieldId::Name, FieldId::Date] };
        assert_eq!(err.to_string(), "required fields missing or invalid: name, date");
    }
}
