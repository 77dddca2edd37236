use bon::Builder;
use chrono::NaiveDateTime;

use crate::datetime::{DateTimeFormat, Moment, ZoneInfo, format_datetime};
use crate::direction::Direction;
use crate::error::MessageError;
use crate::types::{Options, Value};
use crate::values::{MessagePart, MessageValue, ValueType};

/// A resolved date, time or date-time. Never selectable.
///
/// `local` is the wall-clock time of `moment` in `zone`; a floating moment
/// has no zone.
#[derive(Debug, Clone, Builder)]
pub struct DateTimeValue {
    #[builder(into)]
    source: String,
    #[builder(into)]
    locale: String,
    #[builder(default = Direction::Auto)]
    dir: Direction,
    #[builder(default)]
    options: Options,
    moment: Moment,
    local: NaiveDateTime,
    zone: Option<ZoneInfo>,
    format: DateTimeFormat,
}

impl DateTimeValue {
    pub fn moment(&self) -> Moment {
        self.moment
    }

    pub fn format_options(&self) -> &DateTimeFormat {
        &self.format
    }
}

impl MessageValue for DateTimeValue {
    fn value_type(&self) -> ValueType {
        ValueType::DateTime
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
        self.moment.to_value()
    }

    fn format_string(&self) -> Result<String, MessageError> {
        Ok(format_datetime(
            &self.local,
            self.zone.as_ref(),
            &self.format,
            &self.locale,
        ))
    }

    fn format_parts(&self) -> Result<Vec<MessagePart>, MessageError> {
        Ok(vec![MessagePart::text(self, self.format_string()?)])
    }
}
