//! Message functions: the execution context, the registry and the built-in
//! function library.
//!
//! Stable functions are `:number`, `:integer`, `:offset` and `:string`.
//! Draft functions are `:currency`, `:percent`, `:unit`, `:math`, `:date`,
//! `:datetime` and `:time`.

mod context;
mod datetime;
mod number;
mod options;
mod registry;
mod string;

use std::sync::Arc;

use crate::types::{Options, Value};
use crate::values::{MessageValue, UnknownValue};

pub use context::{ErrorSink, FunctionContext};
pub use datetime::{date, datetime, time};
pub use number::{currency, integer, math, number, offset, percent, unit};
pub use registry::{FunctionRegistry, MessageFunction};
pub use string::string;

/// Resolves an operand that has no function annotation.
///
/// Strings resolve as `:string`, numbers as `:number` and date-times as
/// `:datetime`. Resolved values pass through unchanged; anything else
/// becomes an [`UnknownValue`].
pub fn resolve_unannotated(
    ctx: &mut FunctionContext<'_>,
    operand: &Value,
) -> Arc<dyn MessageValue> {
    let options = Options::new();
    match operand {
        Value::Resolved(resolved) => Arc::clone(resolved),
        Value::String(_) => string(ctx, &options, Some(operand)),
        Value::Int(_) | Value::Float(_) | Value::Decimal(_) => number(ctx, &options, Some(operand)),
        Value::DateTime(_) | Value::NaiveDateTime(_) => datetime(ctx, &options, Some(operand)),
        Value::Null | Value::Bool(_) => Arc::new(UnknownValue::new(
            ctx.source(),
            ctx.locale(),
            operand.clone(),
        )),
    }
}
