pub mod datetime;
pub mod direction;
pub mod error;
pub mod functions;
pub mod model;
pub mod number;
pub mod types;
pub mod values;

pub use direction::Direction;
pub use error::MessageError;
pub use functions::{FunctionContext, FunctionRegistry, MessageFunction};
pub use types::{Decimal, Options, Value};
pub use values::{MessagePart, MessageValue, ValueType};

/// Creates an [`Options`] map from name-value pairs, in order.
///
/// Values are converted via `Into<Value>`, so integers, floats, strings and
/// booleans can be passed directly.
///
/// # Example
///
/// ```
/// use mf2::{Value, options};
///
/// let opts = options! { "minimumFractionDigits" => 2, "style" => "percent" };
/// assert_eq!(opts.len(), 2);
/// assert_eq!(opts["minimumFractionDigits"], Value::Int(2));
/// assert_eq!(opts.get_index(1).map(|(name, _)| name.as_str()), Some("style"));
/// ```
#[macro_export]
macro_rules! options {
    {} => {
        $crate::Options::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::Options::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
