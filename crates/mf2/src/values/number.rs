use crate::direction::Direction;
use crate::error::MessageError;
use crate::number::{
    FormattedNumber, NumberFormatOptions, Numeric, Style, format_number, select_number_keys,
};
use crate::types::{Options, Value};
use crate::values::{MessagePart, MessageValue, ValueType};

/// A resolved number from `:number` and its relatives.
///
/// The operand is kept exactly as supplied; percent scaling applies only to
/// formatting and selection.
#[derive(Debug, Clone)]
pub struct NumberValue {
    source: String,
    locale: String,
    dir: Direction,
    options: Options,
    numeric: Numeric,
    format: NumberFormatOptions,
    selectable: bool,
}

impl NumberValue {
    /// Creates a selectable number whose formatting is read from `options`.
    pub fn new(
        source: impl Into<String>,
        locale: impl Into<String>,
        dir: Direction,
        options: Options,
        numeric: Numeric,
    ) -> Self {
        let format = NumberFormatOptions::from_options(&options);
        Self {
            source: source.into(),
            locale: locale.into(),
            dir,
            options,
            numeric,
            format,
            selectable: true,
        }
    }

    /// Marks the value as usable for formatting only.
    pub fn without_selection(mut self) -> Self {
        self.selectable = false;
        self
    }

    fn formatted(&self) -> FormattedNumber {
        format_number(&self.numeric, &self.format, &self.locale)
    }

    /// The value selection works on: the operand, times 100 for percents.
    fn effective(&self) -> Numeric {
        if self.format.style == Style::Percent {
            self.numeric.scaled_by_hundred()
        } else {
            self.numeric
        }
    }
}

impl MessageValue for NumberValue {
    fn value_type(&self) -> ValueType {
        ValueType::Number
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
        self.numeric.to_value()
    }

    fn format_string(&self) -> Result<String, MessageError> {
        Ok(self.formatted().to_string())
    }

    fn format_parts(&self) -> Result<Vec<MessagePart>, MessageError> {
        let formatted = self.formatted();
        let mut part = MessagePart::text(self, formatted.to_string());
        part.parts = formatted.into_parts();
        Ok(vec![part])
    }

    fn selectable(&self) -> bool {
        self.selectable
    }

    fn select_keys(&self, keys: &[String]) -> Result<Vec<String>, MessageError> {
        if !self.selectable {
            return Err(MessageError::not_selectable(&self.source));
        }
        Ok(select_number_keys(
            &self.effective(),
            self.format.select,
            &self.locale,
            keys,
        ))
    }
}
