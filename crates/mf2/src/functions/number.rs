//! `:number`, `:integer`, `:percent`, `:currency`, `:unit`, `:offset` and
//! `:math`.

use std::sync::Arc;

use crate::error::MessageError;
use crate::functions::FunctionContext;
use crate::functions::options::{
    CURRENCY_SCHEMA, DELTA_SCHEMA, INTEGER_SCHEMA, NUMBER_SCHEMA, OptionSchema, PERCENT_SCHEMA,
    UNIT_SCHEMA,
};
use crate::number::Numeric;
use crate::types::{Decimal, Options, Value};
use crate::values::{MessageValue, NumberValue, ValueType};

/// A numeric operand and the options it carried in.
#[derive(Debug)]
struct NumericInput {
    numeric: Numeric,
    inherited: Options,
}

/// Extracts the numeric operand of a call.
///
/// Resolved values contribute their underlying value and options; strings
/// must be JSON numbers.
fn numeric_input(source: &str, operand: Option<&Value>) -> Result<NumericInput, MessageError> {
    match operand {
        None => Err(MessageError::bad_operand(source, "a numeric operand is required")),
        Some(Value::Resolved(resolved)) => {
            if resolved.value_type() == ValueType::Fallback {
                return Err(MessageError::bad_operand(
                    source,
                    "operand could not be resolved",
                ));
            }
            Ok(NumericInput {
                numeric: numeric_from_raw(source, &resolved.value_of())?,
                inherited: resolved.options().clone(),
            })
        }
        Some(value) => Ok(NumericInput {
            numeric: numeric_from_raw(source, value)?,
            inherited: Options::new(),
        }),
    }
}

fn numeric_from_raw(source: &str, value: &Value) -> Result<Numeric, MessageError> {
    if let Some(numeric) = Numeric::from_value(value) {
        return Ok(numeric);
    }
    match value {
        Value::String(s) => parse_json_number(s).ok_or_else(|| {
            MessageError::bad_operand(source, format!("'{s}' is not a JSON number"))
        }),
        other => Err(MessageError::bad_operand(
            source,
            format!("expected a number, found {}", other.kind()),
        )),
    }
}

/// Parses a string holding exactly one JSON number.
///
/// Integers that fit stay integers; other numbers keep their exact decimal
/// digits.
pub(crate) fn parse_json_number(s: &str) -> Option<Numeric> {
    if s.trim() != s {
        return None;
    }
    let number: serde_json::Number = serde_json::from_str(s).ok()?;
    if let Some(n) = number.as_i64() {
        return Some(Numeric::Int(n));
    }
    match s.parse::<Decimal>() {
        Ok(d) => Some(Numeric::Decimal(d)),
        Err(_) => number.as_f64().map(Numeric::Float),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumericKind {
    Number,
    Integer,
    Percent,
    Currency,
    Unit,
}

impl NumericKind {
    fn schema(self) -> OptionSchema {
        match self {
            NumericKind::Number => NUMBER_SCHEMA,
            NumericKind::Integer => INTEGER_SCHEMA,
            NumericKind::Percent => PERCENT_SCHEMA,
            NumericKind::Currency => CURRENCY_SCHEMA,
            NumericKind::Unit => UNIT_SCHEMA,
        }
    }

    fn style(self) -> &'static str {
        match self {
            NumericKind::Number | NumericKind::Integer => "decimal",
            NumericKind::Percent => "percent",
            NumericKind::Currency => "currency",
            NumericKind::Unit => "unit",
        }
    }

    fn selectable(self) -> bool {
        !matches!(self, NumericKind::Currency | NumericKind::Unit)
    }
}

fn resolve_numeric(
    ctx: &mut FunctionContext<'_>,
    kind: NumericKind,
    options: &Options,
    operand: Option<&Value>,
) -> Arc<dyn MessageValue> {
    let input = match numeric_input(ctx.source(), operand) {
        Ok(input) => input,
        Err(error) => return ctx.fail(error),
    };

    let mut merged = input.inherited;
    merged.insert(
        "localeMatcher".to_string(),
        Value::from(ctx.locale_matcher()),
    );
    merged.insert("style".to_string(), Value::from(kind.style()));
    let all_literal = kind.schema().apply(ctx, options, &mut merged);
    let selectable = kind.selectable() && all_literal;

    let mut numeric = input.numeric;
    match kind {
        NumericKind::Integer => {
            numeric = numeric.round_half_away_from_zero();
            merged.shift_remove("minimumFractionDigits");
            merged.insert("maximumFractionDigits".to_string(), Value::Int(0));
        }
        NumericKind::Currency if !merged.contains_key("currency") => {
            return ctx.fail(MessageError::bad_operand(
                ctx.source(),
                "a currency option is required",
            ));
        }
        NumericKind::Unit if !merged.contains_key("unit") => {
            return ctx.fail(MessageError::bad_operand(
                ctx.source(),
                "a unit option is required",
            ));
        }
        NumericKind::Number | NumericKind::Percent | NumericKind::Currency | NumericKind::Unit => {}
    }

    let value = NumberValue::new(ctx.source(), ctx.locale(), ctx.dir(), merged, numeric);
    if selectable {
        Arc::new(value)
    } else {
        Arc::new(value.without_selection())
    }
}

/// `:number`: formats and selects on a number.
///
/// # Example
///
/// ```
/// use mf2::functions::{FunctionContext, number};
/// use mf2::types::{Options, Value};
///
/// let mut ctx = FunctionContext::builder().locales(vec!["en".to_string()]).build();
/// let value = number(&mut ctx, &Options::new(), Some(&Value::from(1234.5)));
/// assert_eq!(value.format_string().unwrap(), "1,234.5");
/// ```
pub fn number(
    ctx: &mut FunctionContext<'_>,
    options: &Options,
    operand: Option<&Value>,
) -> Arc<dyn MessageValue> {
    resolve_numeric(ctx, NumericKind::Number, options, operand)
}

/// `:integer`: rounds half away from zero and shows no fraction digits.
pub fn integer(
    ctx: &mut FunctionContext<'_>,
    options: &Options,
    operand: Option<&Value>,
) -> Arc<dyn MessageValue> {
    resolve_numeric(ctx, NumericKind::Integer, options, operand)
}

/// `:percent`: displays and selects on the operand times 100.
pub fn percent(
    ctx: &mut FunctionContext<'_>,
    options: &Options,
    operand: Option<&Value>,
) -> Arc<dyn MessageValue> {
    resolve_numeric(ctx, NumericKind::Percent, options, operand)
}

/// `:currency`: requires a `currency` option. Not selectable.
pub fn currency(
    ctx: &mut FunctionContext<'_>,
    options: &Options,
    operand: Option<&Value>,
) -> Arc<dyn MessageValue> {
    resolve_numeric(ctx, NumericKind::Currency, options, operand)
}

/// `:unit`: requires a `unit` option. Not selectable.
pub fn unit(
    ctx: &mut FunctionContext<'_>,
    options: &Options,
    operand: Option<&Value>,
) -> Arc<dyn MessageValue> {
    resolve_numeric(ctx, NumericKind::Unit, options, operand)
}

/// `:offset`: adds or subtracts a non-negative integer, then formats the
/// result as `:number` would.
///
/// Exactly one of `add` and `subtract` must be given.
pub fn offset(
    ctx: &mut FunctionContext<'_>,
    options: &Options,
    operand: Option<&Value>,
) -> Arc<dyn MessageValue> {
    let (name, value) = match (options.get("add"), options.get("subtract")) {
        (Some(value), None) => ("add", value),
        (None, Some(value)) => ("subtract", value),
        (Some(_), Some(_)) => {
            return ctx.fail(MessageError::bad_option(
                ctx.source(),
                "add",
                "add and subtract cannot be combined",
            ));
        }
        (None, None) => {
            return ctx.fail(MessageError::bad_option(
                ctx.source(),
                "add",
                "one of add or subtract is required",
            ));
        }
    };
    let amount = match DELTA_SCHEMA.check(name, value) {
        Ok(Value::Int(amount)) => amount,
        Ok(other) => {
            return ctx.fail(MessageError::bad_option(
                ctx.source(),
                name,
                format!("expected an integer, found {}", other.kind()),
            ));
        }
        Err(message) => return ctx.fail(MessageError::bad_option(ctx.source(), name, message)),
    };
    let delta = if name == "subtract" { -amount } else { amount };

    let input = match numeric_input(ctx.source(), operand) {
        Ok(input) => input,
        Err(error) => return ctx.fail(error),
    };
    let Some(shifted) = input.numeric.checked_add(delta) else {
        return ctx.fail(MessageError::bad_operand(
            ctx.source(),
            "result is out of range",
        ));
    };

    let carried: Arc<dyn MessageValue> = Arc::new(NumberValue::new(
        ctx.source(),
        ctx.locale(),
        ctx.dir(),
        input.inherited,
        shifted,
    ));
    let mut rest = options.clone();
    rest.shift_remove("add");
    rest.shift_remove("subtract");
    number(ctx, &rest, Some(&Value::Resolved(carried)))
}

/// `:math`: the draft name of [`offset`].
pub fn math(
    ctx: &mut FunctionContext<'_>,
    options: &Options,
    operand: Option<&Value>,
) -> Arc<dyn MessageValue> {
    offset(ctx, options, operand)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_number_strings() {
        assert_eq!(parse_json_number("42"), Some(Numeric::Int(42)));
        assert_eq!(
            parse_json_number("0.1"),
            Some(Numeric::Decimal(Decimal::new(1, 1)))
        );
        assert_eq!(parse_json_number(" 42"), None);
        assert_eq!(parse_json_number("+1"), None);
        assert_eq!(parse_json_number("0x10"), None);
        assert_eq!(parse_json_number("NaN"), None);
    }
}
