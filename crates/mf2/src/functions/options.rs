//! Declarative option schemas for the built-in functions.
//!
//! Each function lists the options it recognizes together with the rule that
//! validates and coerces a supplied value. Supplied options are applied in
//! order. Names outside the schema are ignored. Invalid values report one
//! `bad-option` error at their position and are skipped.

use crate::datetime::{
    Calendar, DateFields, DateLength, DateStyle, TimePrecision, TimeStyle, TimeZoneStyle,
    ZoneRequest,
};
use crate::error::MessageError;
use crate::functions::FunctionContext;
use crate::number::symbols::{is_currency_code, is_unit_identifier};
use crate::number::{
    CompactDisplay, CurrencyDisplay, CurrencySign, Grouping, Notation, ROUNDING_INCREMENTS,
    RoundingMode, RoundingPriority, SelectMode, SignDisplay, TrailingZeroDisplay, UnitDisplay,
    option_string, option_u32,
};
use crate::types::{Options, Value};

/// How one option's value is checked and normalized.
#[derive(Debug, Clone, Copy)]
pub(crate) enum OptionKind {
    Keyword(&'static [&'static str]),
    /// A keyword that is only honored when written as a literal.
    LiteralKeyword(&'static [&'static str]),
    /// A `useGrouping` keyword or boolean.
    Grouping,
    /// An integer within an inclusive range.
    Digits { min: u32, max: u32 },
    NonNegativeInteger,
    RoundingIncrement,
    Currency,
    Unit,
    TimeZone,
    Boolean,
}

impl OptionKind {
    /// The normalized value, or a description of what was expected.
    fn coerce(self, value: &Value) -> Result<Value, String> {
        match self {
            OptionKind::Keyword(keywords) | OptionKind::LiteralKeyword(keywords) => {
                option_string(value)
                    .filter(|s| keywords.contains(&s.as_str()))
                    .map(Value::String)
                    .ok_or_else(|| format!("expected one of {}", keywords.join(", ")))
            }
            OptionKind::Grouping => option_string(value)
                .and_then(|s| Grouping::parse_lenient(&s))
                .map(|g| Value::String(g.as_str().to_string()))
                .ok_or_else(|| "expected auto, always, min2, never or a boolean".to_string()),
            OptionKind::Digits { min, max } => option_u32(value)
                .filter(|n| (min..=max).contains(n))
                .map(Value::from)
                .ok_or_else(|| format!("expected an integer from {min} to {max}")),
            OptionKind::NonNegativeInteger => option_non_negative(value)
                .map(Value::Int)
                .ok_or_else(|| "expected a non-negative integer".to_string()),
            OptionKind::RoundingIncrement => option_u32(value)
                .filter(|n| ROUNDING_INCREMENTS.contains(n))
                .map(Value::from)
                .ok_or_else(|| "expected a supported rounding increment".to_string()),
            OptionKind::Currency => option_string(value)
                .filter(|s| is_currency_code(s))
                .map(|s| Value::String(s.to_ascii_uppercase()))
                .ok_or_else(|| "expected a three-letter currency code".to_string()),
            OptionKind::Unit => option_string(value)
                .filter(|s| is_unit_identifier(s))
                .map(Value::String)
                .ok_or_else(|| "expected a unit identifier".to_string()),
            OptionKind::TimeZone => option_string(value)
                .filter(|s| ZoneRequest::parse(s).is_some())
                .map(Value::String)
                .ok_or_else(|| "expected input, UTC or an IANA time zone".to_string()),
            OptionKind::Boolean => match value {
                Value::Bool(b) => Ok(Value::Bool(*b)),
                other => match option_string(other).as_deref() {
                    Some("true") => Ok(Value::Bool(true)),
                    Some("false") => Ok(Value::Bool(false)),
                    _ => Err("expected true or false".to_string()),
                },
            },
        }
    }
}

/// A non-negative integer option value.
fn option_non_negative(value: &Value) -> Option<i64> {
    match value {
        Value::Int(n) => Some(*n).filter(|n| *n >= 0),
        Value::Float(f) if f.fract() == 0.0 && *f >= 0.0 && *f < i64::MAX as f64 => {
            Some(*f as i64)
        }
        Value::Decimal(d) if d.is_integer() && !d.is_negative() => {
            i64::try_from(d.normalized().mantissa()).ok()
        }
        Value::String(s) => s.parse::<i64>().ok().filter(|n| *n >= 0),
        Value::Resolved(v) => option_non_negative(&v.value_of()),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct OptionRule {
    pub name: &'static str,
    pub kind: OptionKind,
}

const fn rule(name: &'static str, kind: OptionKind) -> OptionRule {
    OptionRule { name, kind }
}

/// The options one function recognizes, as a list of shared groups.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OptionSchema(&'static [&'static [OptionRule]]);

impl OptionSchema {
    fn find(&self, name: &str) -> Option<&'static OptionRule> {
        self.0
            .iter()
            .copied()
            .flatten()
            .find(|rule| rule.name == name)
    }

    /// Validates and coerces a single option value.
    pub fn check(&self, name: &str, value: &Value) -> Result<Value, String> {
        match self.find(name) {
            Some(rule) => rule.kind.coerce(value),
            None => Err(format!("{name} is not recognized")),
        }
    }

    /// Validates `supplied` in order and inserts accepted values into
    /// `merged`.
    ///
    /// Returns `false` when a literal-only option was supplied through a
    /// variable. That option is reported and left out of `merged`.
    pub fn apply(
        &self,
        ctx: &mut FunctionContext<'_>,
        supplied: &Options,
        merged: &mut Options,
    ) -> bool {
        let mut all_literal = true;
        for (name, value) in supplied {
            let Some(rule) = self.find(name) else {
                continue;
            };
            if matches!(rule.kind, OptionKind::LiteralKeyword(_)) && !ctx.is_literal_option(name) {
                ctx.report(MessageError::bad_option(
                    ctx.source(),
                    name,
                    format!("{name} must be given as a literal"),
                ));
                all_literal = false;
                continue;
            }
            match rule.kind.coerce(value) {
                Ok(coerced) => {
                    merged.insert(name.clone(), coerced);
                }
                Err(message) => ctx.report(MessageError::bad_option(ctx.source(), name, message)),
            }
        }
        all_literal
    }
}

const LOCALE: &[OptionRule] = &[rule(
    "localeMatcher",
    OptionKind::Keyword(&["best fit", "lookup"]),
)];

const SELECT: &[OptionRule] = &[rule(
    "select",
    OptionKind::LiteralKeyword(SelectMode::KEYWORDS),
)];

const DIGITS: &[OptionRule] = &[
    rule(
        "minimumIntegerDigits",
        OptionKind::Digits { min: 1, max: 21 },
    ),
    rule(
        "minimumFractionDigits",
        OptionKind::Digits { min: 0, max: 100 },
    ),
    rule(
        "maximumFractionDigits",
        OptionKind::Digits { min: 0, max: 100 },
    ),
    rule(
        "minimumSignificantDigits",
        OptionKind::Digits { min: 1, max: 21 },
    ),
    rule(
        "maximumSignificantDigits",
        OptionKind::Digits { min: 1, max: 21 },
    ),
    rule("roundingMode", OptionKind::Keyword(RoundingMode::KEYWORDS)),
    rule(
        "roundingPriority",
        OptionKind::Keyword(RoundingPriority::KEYWORDS),
    ),
    rule("roundingIncrement", OptionKind::RoundingIncrement),
    rule(
        "trailingZeroDisplay",
        OptionKind::Keyword(TrailingZeroDisplay::KEYWORDS),
    ),
];

const DISPLAY: &[OptionRule] = &[
    rule("signDisplay", OptionKind::Keyword(SignDisplay::KEYWORDS)),
    rule("useGrouping", OptionKind::Grouping),
    rule("notation", OptionKind::Keyword(Notation::KEYWORDS)),
    rule("compactDisplay", OptionKind::Keyword(CompactDisplay::KEYWORDS)),
];

const INTEGER_ONLY: &[OptionRule] = &[
    rule(
        "minimumIntegerDigits",
        OptionKind::Digits { min: 1, max: 21 },
    ),
    rule(
        "maximumSignificantDigits",
        OptionKind::Digits { min: 1, max: 21 },
    ),
    rule("signDisplay", OptionKind::Keyword(SignDisplay::KEYWORDS)),
    rule("useGrouping", OptionKind::Grouping),
];

const CURRENCY: &[OptionRule] = &[
    rule("currency", OptionKind::Currency),
    rule(
        "currencyDisplay",
        OptionKind::Keyword(CurrencyDisplay::KEYWORDS),
    ),
    rule("currencySign", OptionKind::Keyword(CurrencySign::KEYWORDS)),
];

const UNIT: &[OptionRule] = &[
    rule("unit", OptionKind::Unit),
    rule("unitDisplay", OptionKind::Keyword(UnitDisplay::KEYWORDS)),
];

const DELTA: &[OptionRule] = &[
    rule("add", OptionKind::NonNegativeInteger),
    rule("subtract", OptionKind::NonNegativeInteger),
];

const ZONE: &[OptionRule] = &[
    rule("timeZone", OptionKind::TimeZone),
    rule("calendar", OptionKind::Keyword(Calendar::KEYWORDS)),
];

const DATE_FIELDS: &[OptionRule] = &[
    rule("dateFields", OptionKind::Keyword(DateFields::KEYWORDS)),
    rule("dateLength", OptionKind::Keyword(DateLength::KEYWORDS)),
    rule("dateStyle", OptionKind::Keyword(DateStyle::KEYWORDS)),
];

const TIME_FIELDS: &[OptionRule] = &[
    rule("timePrecision", OptionKind::Keyword(TimePrecision::KEYWORDS)),
    rule("timeZoneStyle", OptionKind::Keyword(TimeZoneStyle::KEYWORDS)),
    rule("timeStyle", OptionKind::Keyword(TimeStyle::KEYWORDS)),
    rule("hour12", OptionKind::Boolean),
];

pub(crate) const NUMBER_SCHEMA: OptionSchema = OptionSchema(&[LOCALE, SELECT, DIGITS, DISPLAY]);
pub(crate) const INTEGER_SCHEMA: OptionSchema = OptionSchema(&[LOCALE, SELECT, INTEGER_ONLY]);
pub(crate) const PERCENT_SCHEMA: OptionSchema = NUMBER_SCHEMA;
pub(crate) const CURRENCY_SCHEMA: OptionSchema =
    OptionSchema(&[LOCALE, DIGITS, DISPLAY, CURRENCY]);
pub(crate) const UNIT_SCHEMA: OptionSchema = OptionSchema(&[LOCALE, DIGITS, DISPLAY, UNIT]);
/// The `add` and `subtract` options of `:offset`. Its other options are
/// validated by `:number`.
pub(crate) const DELTA_SCHEMA: OptionSchema = OptionSchema(&[DELTA]);
pub(crate) const DATETIME_SCHEMA: OptionSchema =
    OptionSchema(&[LOCALE, ZONE, DATE_FIELDS, TIME_FIELDS]);
pub(crate) const DATE_SCHEMA: OptionSchema = OptionSchema(&[LOCALE, ZONE, DATE_FIELDS]);
pub(crate) const TIME_SCHEMA: OptionSchema = OptionSchema(&[LOCALE, ZONE, TIME_FIELDS]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_accept_numeric_strings() {
        let kind = OptionKind::Digits { min: 0, max: 100 };
        assert_eq!(kind.coerce(&Value::from("2")), Ok(Value::Int(2)));
        assert!(kind.coerce(&Value::from("foo")).is_err());
        assert!(kind.coerce(&Value::Int(101)).is_err());
    }

    #[test]
    fn grouping_normalizes_booleans() {
        assert_eq!(
            OptionKind::Grouping.coerce(&Value::Bool(false)),
            Ok(Value::from("never"))
        );
    }

    #[test]
    fn delta_schema_checks_single_options() {
        assert_eq!(DELTA_SCHEMA.check("add", &Value::from("3")), Ok(Value::Int(3)));
        assert!(DELTA_SCHEMA.check("subtract", &Value::Int(-1)).is_err());
        assert!(DELTA_SCHEMA.check("scale", &Value::Int(1)).is_err());
    }

    #[test]
    fn currency_codes_are_uppercased() {
        assert_eq!(
            OptionKind::Currency.coerce(&Value::from("eur")),
            Ok(Value::from("EUR"))
        );
        assert!(OptionKind::Currency.coerce(&Value::from("euro")).is_err());
    }
}
