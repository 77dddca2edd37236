//! Date and time formatting with English CLDR-style patterns.
//!
//! A [`Moment`] is either zoned (it carries a UTC offset) or floating. The
//! formatting functions resolve the requested time zone against the moment
//! and render the wall-clock time through a [`DateTimeFormat`].

use bon::Builder;
use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone,
};
use chrono_tz::Tz;

use crate::number::keyword_enum;
use crate::types::Value;

keyword_enum! {
    /// Which calendar fields a date shows.
    DateFields {
        Year => "year",
        Month => "month",
        Day => "day",
        Weekday => "weekday",
        MonthDay => "month-day",
        YearMonth => "year-month",
        YearMonthDay => "year-month-day",
        MonthDayWeekday => "month-day-weekday",
        YearMonthDayWeekday => "year-month-day-weekday",
    } default YearMonthDay
}

keyword_enum! {
    /// Width of month and weekday names.
    DateLength {
        Long => "long",
        Medium => "medium",
        Short => "short",
    } default Medium
}

keyword_enum! {
    /// Smallest time unit shown.
    TimePrecision {
        Hour => "hour",
        Minute => "minute",
        Second => "second",
    } default Minute
}

keyword_enum! {
    TimeZoneStyle {
        Long => "long",
        Short => "short",
    } default Short
}

keyword_enum! {
    /// Shorthand `dateStyle` values.
    DateStyle {
        Full => "full",
        Long => "long",
        Medium => "medium",
        Short => "short",
    } default Medium
}

keyword_enum! {
    /// Shorthand `timeStyle` values.
    TimeStyle {
        Full => "full",
        Long => "long",
        Medium => "medium",
        Short => "short",
    } default Short
}

keyword_enum! {
    Calendar {
        Gregory => "gregory",
        Iso8601 => "iso8601",
    } default Gregory
}

impl DateStyle {
    /// The field options a date style stands for.
    pub fn fields(self) -> (DateFields, DateLength) {
        match self {
            DateStyle::Full => (DateFields::YearMonthDayWeekday, DateLength::Long),
            DateStyle::Long => (DateFields::YearMonthDay, DateLength::Long),
            DateStyle::Medium => (DateFields::YearMonthDay, DateLength::Medium),
            DateStyle::Short => (DateFields::YearMonthDay, DateLength::Short),
        }
    }
}

impl TimeStyle {
    /// The field options a time style stands for.
    pub fn fields(self) -> (TimePrecision, Option<TimeZoneStyle>) {
        match self {
            TimeStyle::Full => (TimePrecision::Second, Some(TimeZoneStyle::Long)),
            TimeStyle::Long => (TimePrecision::Second, Some(TimeZoneStyle::Short)),
            TimeStyle::Medium => (TimePrecision::Second, None),
            TimeStyle::Short => (TimePrecision::Minute, None),
        }
    }
}

/// Resolved field options for one datetime rendering.
///
/// A format with neither date fields nor a time precision renders nothing.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct DateTimeFormat {
    pub date_fields: Option<DateFields>,
    #[builder(default)]
    pub date_length: DateLength,
    pub time_precision: Option<TimePrecision>,
    pub time_zone_style: Option<TimeZoneStyle>,
    /// `None` uses the locale's clock convention.
    pub hour12: Option<bool>,
    #[builder(default)]
    pub calendar: Calendar,
}

/// A point in time, with or without a UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Moment {
    Zoned(DateTime<FixedOffset>),
    Floating(NaiveDateTime),
}

impl Moment {
    /// Reads a moment from a datetime value or an ISO 8601 string.
    ///
    /// Strings may be RFC 3339 timestamps (zoned), local date-times or plain
    /// dates (floating, at midnight).
    pub fn from_value(value: &Value) -> Option<Moment> {
        match value {
            Value::DateTime(dt) => Some(Moment::Zoned(*dt)),
            Value::NaiveDateTime(dt) => Some(Moment::Floating(*dt)),
            Value::String(s) => Moment::parse(s),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Option<Moment> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Moment::Zoned(dt));
        }
        for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, pattern) {
                return Some(Moment::Floating(dt));
            }
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .map(|date| Moment::Floating(date.and_time(NaiveTime::MIN)))
    }

    pub fn to_value(self) -> Value {
        match self {
            Moment::Zoned(dt) => Value::DateTime(dt),
            Moment::Floating(dt) => Value::NaiveDateTime(dt),
        }
    }
}

/// A time zone requested through the `timeZone` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneRequest {
    /// Keep whatever zone the operand carries.
    Input,
    Named(Tz),
}

impl ZoneRequest {
    pub fn parse(s: &str) -> Option<ZoneRequest> {
        match s {
            "input" => Some(ZoneRequest::Input),
            "UTC" => Some(ZoneRequest::Named(Tz::UTC)),
            name => name.parse::<Tz>().ok().map(ZoneRequest::Named),
        }
    }
}

/// The zone a wall-clock time is displayed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneInfo {
    pub name: Option<String>,
    pub offset: FixedOffset,
}

/// Why a zone request cannot be applied to a moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneConflict {
    /// The operand's embedded offset differs from the requested zone's.
    Offset { embedded: FixedOffset, requested: String },
    /// The floating time does not exist in the requested zone.
    Nonexistent { requested: String },
}

impl ZoneConflict {
    pub fn describe(&self) -> String {
        match self {
            ZoneConflict::Offset {
                embedded,
                requested,
            } => format!("operand offset {embedded} conflicts with time zone {requested}"),
            ZoneConflict::Nonexistent { requested } => {
                format!("local time does not exist in time zone {requested}")
            }
        }
    }
}

/// Wall-clock time and display zone of `moment` under `request`.
pub fn resolve_zone(
    moment: Moment,
    request: ZoneRequest,
) -> Result<(NaiveDateTime, Option<ZoneInfo>), ZoneConflict> {
    let tz = match request {
        ZoneRequest::Input => {
            return Ok(match moment {
                Moment::Zoned(dt) => (
                    dt.naive_local(),
                    Some(ZoneInfo {
                        name: None,
                        offset: *dt.offset(),
                    }),
                ),
                Moment::Floating(dt) => (dt, None),
            });
        }
        ZoneRequest::Named(tz) => tz,
    };
    match moment {
        Moment::Zoned(dt) => {
            let converted = dt.with_timezone(&tz);
            let offset = converted.offset().fix();
            if offset != *dt.offset() {
                return Err(ZoneConflict::Offset {
                    embedded: *dt.offset(),
                    requested: tz.name().to_string(),
                });
            }
            Ok((
                converted.naive_local(),
                Some(ZoneInfo {
                    name: Some(tz.name().to_string()),
                    offset,
                }),
            ))
        }
        Moment::Floating(dt) => {
            let Some(zoned) = tz.from_local_datetime(&dt).earliest() else {
                return Err(ZoneConflict::Nonexistent {
                    requested: tz.name().to_string(),
                });
            };
            Ok((
                dt,
                Some(ZoneInfo {
                    name: Some(tz.name().to_string()),
                    offset: zoned.offset().fix(),
                }),
            ))
        }
    }
}

/// Whether `locale` uses a 12-hour clock by default.
fn uses_12_hour_clock(locale: &str) -> bool {
    let lang = locale.split(['-', '_']).next().unwrap_or_default();
    matches!(lang, "en" | "hi" | "ar" | "bn" | "ko")
}

/// Renders `local` with `format`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use mf2::datetime::{DateFields, DateLength, DateTimeFormat, format_datetime};
///
/// let local = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_opt(15, 4, 0).unwrap();
/// let format = DateTimeFormat::builder()
///     .date_fields(DateFields::YearMonthDay)
///     .date_length(DateLength::Long)
///     .build();
/// assert_eq!(format_datetime(&local, None, &format, "en"), "January 5, 2024");
/// ```
pub fn format_datetime(
    local: &NaiveDateTime,
    zone: Option<&ZoneInfo>,
    format: &DateTimeFormat,
    locale: &str,
) -> String {
    let date = format.date_fields.map(|fields| {
        local
            .format(date_pattern(fields, format.date_length, format.calendar))
            .to_string()
    });
    let time = format.time_precision.map(|precision| {
        let hour12 = format.calendar == Calendar::Gregory
            && format.hour12.unwrap_or_else(|| uses_12_hour_clock(locale));
        let mut text = local.format(time_pattern(precision, hour12)).to_string();
        if let (Some(style), Some(zone)) = (format.time_zone_style, zone) {
            text.push(' ');
            text.push_str(&zone_label(zone, style));
        }
        text
    });
    match (date, time) {
        (Some(date), Some(time)) => {
            let joiner = if format.date_length == DateLength::Long
                && format.calendar == Calendar::Gregory
            {
                " at "
            } else {
                ", "
            };
            format!("{date}{joiner}{time}")
        }
        (Some(date), None) => date,
        (None, Some(time)) => time,
        (None, None) => String::new(),
    }
}

fn date_pattern(fields: DateFields, length: DateLength, calendar: Calendar) -> &'static str {
    if calendar == Calendar::Iso8601 {
        return match fields {
            DateFields::Year => "%Y",
            DateFields::Month => "%m",
            DateFields::Day => "%d",
            DateFields::Weekday => "%a",
            DateFields::MonthDay | DateFields::MonthDayWeekday => "%m-%d",
            DateFields::YearMonth => "%Y-%m",
            DateFields::YearMonthDay | DateFields::YearMonthDayWeekday => "%Y-%m-%d",
        };
    }
    match (fields, length) {
        (DateFields::Year, _) => "%Y",
        (DateFields::Day, _) => "%-d",
        (DateFields::Month, DateLength::Long) => "%B",
        (DateFields::Month, DateLength::Medium) => "%b",
        (DateFields::Month, DateLength::Short) => "%-m",
        (DateFields::Weekday, DateLength::Long) => "%A",
        (DateFields::Weekday, DateLength::Medium | DateLength::Short) => "%a",
        (DateFields::MonthDay, DateLength::Long) => "%B %-d",
        (DateFields::MonthDay, DateLength::Medium) => "%b %-d",
        (DateFields::MonthDay, DateLength::Short) => "%-m/%-d",
        (DateFields::YearMonth, DateLength::Long) => "%B %Y",
        (DateFields::YearMonth, DateLength::Medium) => "%b %Y",
        (DateFields::YearMonth, DateLength::Short) => "%-m/%y",
        (DateFields::YearMonthDay, DateLength::Long) => "%B %-d, %Y",
        (DateFields::YearMonthDay, DateLength::Medium) => "%b %-d, %Y",
        (DateFields::YearMonthDay, DateLength::Short) => "%-m/%-d/%y",
        (DateFields::MonthDayWeekday, DateLength::Long) => "%A, %B %-d",
        (DateFields::MonthDayWeekday, DateLength::Medium) => "%a, %b %-d",
        (DateFields::MonthDayWeekday, DateLength::Short) => "%a, %-m/%-d",
        (DateFields::YearMonthDayWeekday, DateLength::Long) => "%A, %B %-d, %Y",
        (DateFields::YearMonthDayWeekday, DateLength::Medium) => "%a, %b %-d, %Y",
        (DateFields::YearMonthDayWeekday, DateLength::Short) => "%a, %-m/%-d/%y",
    }
}

fn time_pattern(precision: TimePrecision, hour12: bool) -> &'static str {
    match (precision, hour12) {
        (TimePrecision::Hour, true) => "%-I %p",
        (TimePrecision::Minute, true) => "%-I:%M %p",
        (TimePrecision::Second, true) => "%-I:%M:%S %p",
        (TimePrecision::Hour, false) => "%H",
        (TimePrecision::Minute, false) => "%H:%M",
        (TimePrecision::Second, false) => "%H:%M:%S",
    }
}

/// `UTC`, `GMT+1` or `GMT+5:30` for short; the zone name or `GMT+01:00` for
/// long.
fn zone_label(zone: &ZoneInfo, style: TimeZoneStyle) -> String {
    let seconds = zone.offset.local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let hours = seconds.unsigned_abs().div_euclid(3600);
    let minutes = seconds.unsigned_abs().rem_euclid(3600).div_euclid(60);
    match style {
        TimeZoneStyle::Short if seconds == 0 => "UTC".to_string(),
        TimeZoneStyle::Short if minutes == 0 => format!("GMT{sign}{hours}"),
        TimeZoneStyle::Short => format!("GMT{sign}{hours}:{minutes:02}"),
        TimeZoneStyle::Long => match &zone.name {
            Some(name) => name.clone(),
            None if seconds == 0 => "Coordinated Universal Time".to_string(),
            None => format!("GMT{sign}{hours:02}:{minutes:02}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset(hours: i32) -> FixedOffset {
        FixedOffset::east_opt(hours * 3600).unwrap()
    }

    #[test]
    fn parses_iso_strings() {
        assert!(matches!(Moment::parse("2024-01-05T15:04:00Z"), Some(Moment::Zoned(_))));
        assert!(matches!(Moment::parse("2024-01-05T15:04:00"), Some(Moment::Floating(_))));
        assert!(matches!(Moment::parse("2024-01-05"), Some(Moment::Floating(_))));
        assert_eq!(Moment::parse("yesterday"), None);
    }

    #[test]
    fn short_zone_labels() {
        let utc = ZoneInfo { name: None, offset: offset(0) };
        let plus_one = ZoneInfo { name: None, offset: offset(1) };
        let india = ZoneInfo {
            name: None,
            offset: FixedOffset::east_opt(5 * 3600 + 1800).unwrap(),
        };
        assert_eq!(zone_label(&utc, TimeZoneStyle::Short), "UTC");
        assert_eq!(zone_label(&plus_one, TimeZoneStyle::Short), "GMT+1");
        assert_eq!(zone_label(&india, TimeZoneStyle::Short), "GMT+5:30");
        assert_eq!(zone_label(&plus_one, TimeZoneStyle::Long), "GMT+01:00");
    }

    #[test]
    fn matching_offsets_do_not_conflict() {
        let dt = DateTime::parse_from_rfc3339("2024-01-05T15:04:00+01:00").unwrap();
        let paris = ZoneRequest::parse("Europe/Paris").unwrap();
        let (local, zone) = resolve_zone(Moment::Zoned(dt), paris).unwrap();
        assert_eq!(local, dt.naive_local());
        assert_eq!(zone.unwrap().name.as_deref(), Some("Europe/Paris"));
    }
}
