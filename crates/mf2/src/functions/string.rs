use std::sync::Arc;

use crate::error::MessageError;
use crate::functions::FunctionContext;
use crate::types::{Options, Value};
use crate::values::{MessageValue, StringValue, ValueType};

/// String form of a raw operand, for the kinds `:string` accepts.
fn string_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Decimal(_) => {
            Some(value.to_string())
        }
        _ => None,
    }
}

/// `:string`: formats and selects on the string form of its operand.
///
/// With no operand the value is the empty string. Selection compares keys
/// after NFC normalization.
///
/// # Example
///
/// ```
/// use mf2::functions::{FunctionContext, string};
/// use mf2::types::{Options, Value};
///
/// let mut ctx = FunctionContext::builder().source("$name").build();
/// let value = string(&mut ctx, &Options::new(), Some(&Value::from("caf\u{e9}")));
/// let keys = vec!["cafe\u{301}".to_string(), "other".to_string()];
/// assert_eq!(value.select_keys(&keys).unwrap(), ["cafe\u{301}"]);
/// ```
pub fn string(
    ctx: &mut FunctionContext<'_>,
    _options: &Options,
    operand: Option<&Value>,
) -> Arc<dyn MessageValue> {
    let text = match operand {
        None => Some(String::new()),
        Some(Value::Resolved(resolved)) if resolved.value_type() == ValueType::Fallback => None,
        Some(Value::Resolved(resolved)) => string_of(&resolved.value_of()),
        Some(value) => string_of(value),
    };
    let Some(text) = text else {
        let kind = operand.map_or("nothing", Value::kind);
        return ctx.fail(MessageError::bad_operand(
            ctx.source(),
            format!("cannot use {kind} as a string"),
        ));
    };
    let mut merged = Options::new();
    merged.insert(
        "localeMatcher".to_string(),
        Value::from(ctx.locale_matcher()),
    );
    Arc::new(StringValue::new(
        ctx.source(),
        ctx.locale(),
        ctx.dir(),
        merged,
        text,
    ))
}
