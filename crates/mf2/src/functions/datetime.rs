//! `:datetime`, `:date` and `:time`.

use std::sync::Arc;

use crate::datetime::{
    Calendar, DateFields, DateLength, DateStyle, DateTimeFormat, Moment, TimePrecision,
    TimeStyle, TimeZoneStyle, ZoneRequest, resolve_zone,
};
use crate::error::MessageError;
use crate::functions::FunctionContext;
use crate::functions::options::{DATE_SCHEMA, DATETIME_SCHEMA, OptionSchema, TIME_SCHEMA};
use crate::number::option_string;
use crate::types::{Options, Value};
use crate::values::{DateTimeValue, MessageValue, ValueType};

const FIELD_OPTIONS: &[&str] = &["dateFields", "dateLength", "timePrecision", "timeZoneStyle"];
const STYLE_OPTIONS: &[&str] = &["dateStyle", "timeStyle"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateTimeKind {
    DateTime,
    Date,
    Time,
}

impl DateTimeKind {
    fn schema(self) -> OptionSchema {
        match self {
            DateTimeKind::DateTime => DATETIME_SCHEMA,
            DateTimeKind::Date => DATE_SCHEMA,
            DateTimeKind::Time => TIME_SCHEMA,
        }
    }
}

fn moment_input(source: &str, operand: Option<&Value>) -> Result<(Moment, Options), MessageError> {
    let (raw, inherited) = match operand {
        None => {
            return Err(MessageError::bad_operand(
                source,
                "a date-time operand is required",
            ));
        }
        Some(Value::Resolved(resolved)) if resolved.value_type() == ValueType::Fallback => {
            return Err(MessageError::bad_operand(
                source,
                "operand could not be resolved",
            ));
        }
        Some(Value::Resolved(resolved)) => (resolved.value_of(), resolved.options().clone()),
        Some(value) => (value.clone(), Options::new()),
    };
    Moment::from_value(&raw)
        .map(|moment| (moment, inherited))
        .ok_or_else(|| {
            MessageError::bad_operand(source, format!("cannot read {} as a date-time", raw.kind()))
        })
}

fn datetime_format(kind: DateTimeKind, merged: &Options) -> DateTimeFormat {
    let keyword = |name: &str| merged.get(name).and_then(option_string);

    let mut date_fields = keyword("dateFields").and_then(|s| DateFields::parse(&s));
    let mut date_length = keyword("dateLength")
        .and_then(|s| DateLength::parse(&s))
        .unwrap_or_default();
    let mut time_precision = keyword("timePrecision").and_then(|s| TimePrecision::parse(&s));
    let mut time_zone_style = keyword("timeZoneStyle").and_then(|s| TimeZoneStyle::parse(&s));

    if let Some(style) = keyword("dateStyle").and_then(|s| DateStyle::parse(&s)) {
        let (fields, length) = style.fields();
        date_fields = Some(fields);
        date_length = length;
    }
    if let Some(style) = keyword("timeStyle").and_then(|s| TimeStyle::parse(&s)) {
        let (precision, zone_style) = style.fields();
        time_precision = Some(precision);
        time_zone_style = zone_style;
    }

    match kind {
        DateTimeKind::Date => {
            time_precision = None;
            time_zone_style = None;
            date_fields = date_fields.or(Some(DateFields::YearMonthDay));
        }
        DateTimeKind::Time => {
            date_fields = None;
            time_precision = time_precision.or(Some(TimePrecision::Minute));
        }
        DateTimeKind::DateTime if date_fields.is_none() && time_precision.is_none() => {
            date_fields = Some(DateFields::YearMonthDay);
            time_precision = Some(TimePrecision::Minute);
        }
        DateTimeKind::DateTime => {}
    }

    let hour12 = match merged.get("hour12") {
        Some(Value::Bool(b)) => Some(*b),
        _ => None,
    };
    let calendar = keyword("calendar")
        .and_then(|s| Calendar::parse(&s))
        .unwrap_or_default();

    DateTimeFormat::builder()
        .maybe_date_fields(date_fields)
        .date_length(date_length)
        .maybe_time_precision(time_precision)
        .maybe_time_zone_style(time_zone_style)
        .maybe_hour12(hour12)
        .calendar(calendar)
        .build()
}

fn resolve_datetime(
    ctx: &mut FunctionContext<'_>,
    kind: DateTimeKind,
    options: &Options,
    operand: Option<&Value>,
) -> Arc<dyn MessageValue> {
    let (moment, inherited) = match moment_input(ctx.source(), operand) {
        Ok(input) => input,
        Err(error) => return ctx.fail(error),
    };

    let field = FIELD_OPTIONS.iter().find(|name| options.contains_key(**name));
    let style = STYLE_OPTIONS.iter().find(|name| options.contains_key(**name));
    if let (Some(field), Some(style)) = (field, style) {
        return ctx.fail(MessageError::bad_option(
            ctx.source(),
            *style,
            format!("{style} cannot be combined with {field}"),
        ));
    }

    let mut merged = inherited;
    let replaced = if style.is_some() {
        FIELD_OPTIONS
    } else if field.is_some() {
        STYLE_OPTIONS
    } else {
        &[]
    };
    for name in replaced {
        merged.shift_remove(*name);
    }
    merged.insert(
        "localeMatcher".to_string(),
        Value::from(ctx.locale_matcher()),
    );
    kind.schema().apply(ctx, options, &mut merged);

    let format = datetime_format(kind, &merged);
    let request = merged
        .get("timeZone")
        .and_then(option_string)
        .and_then(|s| ZoneRequest::parse(&s))
        .unwrap_or(ZoneRequest::Input);
    let (local, zone) = match resolve_zone(moment, request) {
        Ok(resolved) => resolved,
        Err(conflict) => {
            return ctx.fail(MessageError::unsupported(
                ctx.source(),
                conflict.describe(),
            ));
        }
    };

    Arc::new(
        DateTimeValue::builder()
            .source(ctx.source())
            .locale(ctx.locale())
            .dir(ctx.dir())
            .options(merged)
            .moment(moment)
            .local(local)
            .maybe_zone(zone)
            .format(format)
            .build(),
    )
}

/// `:datetime`: a date and a time, medium date and minute precision by
/// default.
///
/// # Example
///
/// ```
/// use mf2::functions::{FunctionContext, datetime};
/// use mf2::types::{Options, Value};
///
/// let mut ctx = FunctionContext::builder().source("$when").build();
/// let when = Value::from("2024-01-05T15:04:00");
/// let value = datetime(&mut ctx, &Options::new(), Some(&when));
/// assert_eq!(value.format_string().unwrap(), "Jan 5, 2024, 3:04 PM");
/// ```
pub fn datetime(
    ctx: &mut FunctionContext<'_>,
    options: &Options,
    operand: Option<&Value>,
) -> Arc<dyn MessageValue> {
    resolve_datetime(ctx, DateTimeKind::DateTime, options, operand)
}

/// `:date`: the date part only.
pub fn date(
    ctx: &mut FunctionContext<'_>,
    options: &Options,
    operand: Option<&Value>,
) -> Arc<dyn MessageValue> {
    resolve_datetime(ctx, DateTimeKind::Date, options, operand)
}

/// `:time`: the time part only.
pub fn time(
    ctx: &mut FunctionContext<'_>,
    options: &Options,
    operand: Option<&Value>,
) -> Arc<dyn MessageValue> {
    resolve_datetime(ctx, DateTimeKind::Time, options, operand)
}
