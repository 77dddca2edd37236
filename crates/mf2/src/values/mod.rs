//! Resolved message values.
//!
//! Every expression of a message resolves to one [`MessageValue`]. The value
//! is either rendered into the pattern output or asked which variant keys it
//! matches when it is used as a selector.

mod datetime;
mod fallback;
mod number;
mod string;
mod unknown;

use std::fmt::Debug;

use serde::{Serialize, Serializer};

use crate::direction::{Direction, wrap_with_isolation};
use crate::error::MessageError;
use crate::number::NumberPart;
use crate::types::{Options, Value};

pub use datetime::DateTimeValue;
pub use fallback::FallbackValue;
pub use number::NumberValue;
pub use string::StringValue;
pub use unknown::UnknownValue;

/// The kind of a resolved value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    String,
    Number,
    DateTime,
    Fallback,
    Unknown,
    /// A value produced by a host-defined function.
    Custom(String),
}

impl ValueType {
    pub fn as_str(&self) -> &str {
        match self {
            ValueType::String => "string",
            ValueType::Number => "number",
            ValueType::DateTime => "datetime",
            ValueType::Fallback => "fallback",
            ValueType::Unknown => "unknown",
            ValueType::Custom(name) => name,
        }
    }
}

impl Serialize for ValueType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One formatted part of a message, as produced by
/// [`MessageValue::format_parts`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessagePart {
    #[serde(rename = "type")]
    pub part_type: ValueType,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<NumberPart>,
}

impl MessagePart {
    /// A part carrying only a rendered string.
    pub fn text(value: &dyn MessageValue, text: String) -> Self {
        MessagePart {
            part_type: value.value_type(),
            source: value.source().to_string(),
            dir: Some(value.dir()),
            locale: Some(value.locale().to_string()),
            value: Some(text),
            parts: Vec::new(),
        }
    }
}

/// The resolved result of one expression.
///
/// Values are immutable once created. [`MessageValue::value_of`] always
/// succeeds and returns the underlying operand without display transforms
/// (a `:percent` of `0.01` still yields `0.01`).
pub trait MessageValue: Debug + Send + Sync {
    fn value_type(&self) -> ValueType;

    /// The expression source, used for fallback rendering and diagnostics.
    fn source(&self) -> &str;

    fn dir(&self) -> Direction;

    fn locale(&self) -> &str;

    /// The final merged options this value was formatted with.
    fn options(&self) -> &Options;

    fn value_of(&self) -> Value;

    fn format_string(&self) -> Result<String, MessageError>;

    fn format_parts(&self) -> Result<Vec<MessagePart>, MessageError>;

    /// Whether [`MessageValue::select_keys`] can be used on this value.
    fn selectable(&self) -> bool {
        false
    }

    /// Returns the subset of `keys` this value matches, best match first.
    fn select_keys(&self, keys: &[String]) -> Result<Vec<String>, MessageError> {
        let _ = keys;
        Err(MessageError::not_selectable(self.source()))
    }
}

/// Formats `value` wrapped in the isolate pair of its direction.
pub fn format_isolated(value: &dyn MessageValue) -> Result<String, MessageError> {
    let text = value.format_string()?;
    Ok(wrap_with_isolation(&text, value.dir().as_str()))
}

/// Renders a fallback marker for `source`.
pub(crate) fn fallback_text(source: &str) -> String {
    format!("{{{source}}}")
}
