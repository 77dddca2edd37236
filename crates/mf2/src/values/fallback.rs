use crate::direction::Direction;
use crate::error::MessageError;
use crate::types::{Options, Value};
use crate::values::{MessagePart, MessageValue, ValueType, fallback_text};

/// Marker for an expression that could not be resolved.
///
/// A fallback always formats, as `{source}`, so a message produces output
/// even when some of its expressions fail. It is never selectable.
#[derive(Debug, Clone)]
pub struct FallbackValue {
    source: String,
    locale: String,
    options: Options,
}

impl FallbackValue {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            locale: "und".to_string(),
            options: Options::new(),
        }
    }

    /// A fallback remembering the locale it was resolved for.
    pub fn with_locale(source: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            locale: locale.into(),
            options: Options::new(),
        }
    }
}

impl MessageValue for FallbackValue {
    fn value_type(&self) -> ValueType {
        ValueType::Fallback
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
        Value::Null
    }

    fn format_string(&self) -> Result<String, MessageError> {
        Ok(fallback_text(&self.source))
    }

    fn format_parts(&self) -> Result<Vec<MessagePart>, MessageError> {
        Ok(vec![MessagePart {
            part_type: ValueType::Fallback,
            source: self.source.clone(),
            dir: None,
            locale: None,
            value: None,
            parts: Vec::new(),
        }])
    }
}
