mod decimal;
mod value;

pub use decimal::{Decimal, DecimalParseError};
pub use value::{Options, Value};
