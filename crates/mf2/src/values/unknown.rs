use crate::direction::Direction;
use crate::error::MessageError;
use crate::types::{Options, Value};
use crate::values::{MessagePart, MessageValue, ValueType};

/// Wraps an operand that no built-in value kind can classify.
///
/// The raw operand is kept for [`MessageValue::value_of`] and rendered with
/// its display form. Like a fallback it is never selectable.
#[derive(Debug, Clone)]
pub struct UnknownValue {
    source: String,
    locale: String,
    value: Value,
    options: Options,
}

impl UnknownValue {
    pub fn new(source: impl Into<String>, locale: impl Into<String>, value: Value) -> Self {
        Self {
            source: source.into(),
            locale: locale.into(),
            value,
            options: Options::new(),
        }
    }
}

impl MessageValue for UnknownValue {
    fn value_type(&self) -> ValueType {
        ValueType::Unknown
    }

    fn source(&self) -> &str {
        &self.source
    }

    fn dir(&self) -> Direction {
        Direction::Auto
    }

    fn locale(&self) -> &str {
        &self.locale
    }

    fn options(&self) -> &Options {
        &self.options
    }

    fn value_of(&self) -> Value {
        self.value.clone()
    }

    fn format_string(&self) -> Result<String, MessageError> {
        Ok(self.value.to_string())
    }

    fn format_parts(&self) -> Result<Vec<MessagePart>, MessageError> {
        Ok(vec![MessagePart {
            part_type: ValueType::Unknown,
            source: self.source.clone(),
            dir: None,
            locale: None,
            value: Some(self.value.to_string()),
            parts: Vec::new(),
        }])
    }
}
