use icu_normalizer::ComposingNormalizerBorrowed;

use crate::direction::Direction;
use crate::error::MessageError;
use crate::types::{Options, Value};
use crate::values::{MessagePart, MessageValue, ValueType};

/// A resolved string.
///
/// Selection compares the NFC normalization of the string with the NFC
/// normalization of each key; there is no plural logic.
#[derive(Debug, Clone)]
pub struct StringValue {
    source: String,
    locale: String,
    dir: Direction,
    options: Options,
    value: String,
}

impl StringValue {
    pub fn new(
        source: impl Into<String>,
        locale: impl Into<String>,
        dir: Direction,
        options: Options,
        value: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            locale: locale.into(),
            dir,
            options,
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl MessageValue for StringValue {
    fn value_type(&self) -> ValueType {
        ValueType::String
    }

    fn source(&self) -> &str {
        &self.source
    }

    fn dir(&self) -> Direction {
        self.dir
    }

    fn locale(&self) -> &str {
        &self.locale
    }

    fn options(&self) -> &Options {
        &self.options
    }

    fn value_of(&self) -> Value {
        Value::String(self.value.clone())
    }

    fn format_string(&self) -> Result<String, MessageError> {
        Ok(self.value.clone())
    }

    fn format_parts(&self) -> Result<Vec<MessagePart>, MessageError> {
        Ok(vec![MessagePart::text(self, self.value.clone())])
    }

    fn selectable(&self) -> bool {
        true
    }

    fn select_keys(&self, keys: &[String]) -> Result<Vec<String>, MessageError> {
        let normalizer = ComposingNormalizerBorrowed::new_nfc();
        let value = normalizer.normalize(&self.value);
        Ok(keys
            .iter()
            .filter(|key| normalizer.normalize(key.as_str()) == value)
            .cloned()
            .collect())
    }
}
