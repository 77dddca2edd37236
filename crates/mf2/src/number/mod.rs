//! Number engine: formatting and selection shared by the numeric functions.
//!
//! Formatting renders a [`Numeric`] into typed [`NumberPart`]s in one pass,
//! so the string form and the parts form can never disagree. Selection
//! implements exact-match-before-plural key matching.

mod digits;
mod format;
mod options;
mod plural;
mod select;
pub(crate) mod symbols;

use crate::types::{Decimal, Value};

pub use format::{FormattedNumber, NumberPart, NumberPartKind, format_number};
pub use options::{
    CompactDisplay, CurrencyDisplay, CurrencySign, Grouping, Notation, NumberFormatOptions,
    ROUNDING_INCREMENTS, RoundingMode, RoundingPriority, SelectMode, SignDisplay, Style,
    TrailingZeroDisplay, UnitDisplay,
};
pub use plural::{PluralKind, plural_category};
pub use select::{canonical_string, select_number_keys};

pub(crate) use digits::Digits;
pub(crate) use options::{keyword_enum, option_string, option_u32};

/// A numeric operand, keeping the representation the caller supplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Int(i64),
    Float(f64),
    Decimal(Decimal),
}

impl Numeric {
    /// Numeric view of a raw value; strings are not parsed here.
    pub fn from_value(value: &Value) -> Option<Numeric> {
        match value {
            Value::Int(n) => Some(Numeric::Int(*n)),
            Value::Float(f) => Some(Numeric::Float(*f)),
            Value::Decimal(d) => Some(Numeric::Decimal(*d)),
            _ => None,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Numeric::Int(n) => Value::Int(*n),
            Numeric::Float(f) => Value::Float(*f),
            Numeric::Decimal(d) => Value::Decimal(*d),
        }
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            Numeric::Int(n) => *n as f64,
            Numeric::Float(f) => *f,
            Numeric::Decimal(d) => d.to_f64(),
        }
    }

    pub fn is_finite(&self) -> bool {
        match self {
            Numeric::Float(f) => f.is_finite(),
            Numeric::Int(_) | Numeric::Decimal(_) => true,
        }
    }

    /// Adds `delta` without changing the representation. `None` on overflow.
    pub fn checked_add(&self, delta: i64) -> Option<Numeric> {
        match self {
            Numeric::Int(n) => n.checked_add(delta).map(Numeric::Int),
            Numeric::Float(f) => Some(Numeric::Float(f + delta as f64)),
            Numeric::Decimal(d) => d.checked_add_integer(delta).map(Numeric::Decimal),
        }
    }

    /// Rounds finite values to an integer, ties away from zero.
    pub fn round_half_away_from_zero(&self) -> Numeric {
        match self {
            Numeric::Int(_) => *self,
            Numeric::Float(f) if f.is_finite() => Numeric::Float(f.round()),
            Numeric::Float(_) => *self,
            Numeric::Decimal(_) => {
                let Some(mut digits) = Digits::from_numeric(self) else {
                    return *self;
                };
                digits.round(0, RoundingMode::HalfExpand);
                digits
                    .canonical()
                    .parse()
                    .map(Numeric::Decimal)
                    .unwrap_or(*self)
            }
        }
    }

    /// The value multiplied by one hundred, computed on decimal digits.
    pub fn scaled_by_hundred(&self) -> Numeric {
        match self {
            Numeric::Int(n) => n
                .checked_mul(100)
                .map(Numeric::Int)
                .unwrap_or_else(|| Numeric::Decimal(Decimal::new(i128::from(*n) * 100, 0))),
            Numeric::Float(f) => match Digits::from_f64(*f) {
                Some(mut digits) => {
                    digits.shift_left(2);
                    Numeric::Float(digits.canonical().parse().unwrap_or(f * 100.0))
                }
                None => Numeric::Float(f * 100.0),
            },
            Numeric::Decimal(d) => {
                if d.scale() >= 2 {
                    Numeric::Decimal(Decimal::new(d.mantissa(), d.scale() - 2))
                } else {
                    let factor = if d.scale() == 1 { 10 } else { 100 };
                    match d.mantissa().checked_mul(factor) {
                        Some(m) => Numeric::Decimal(Decimal::new(m, 0)),
                        None => Numeric::Float(d.to_f64() * 100.0),
                    }
                }
            }
        }
    }

    /// The value as an `i64` if it is integral and in range.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Numeric::Int(n) => Some(*n),
            Numeric::Float(f) => {
                let in_range = *f >= i64::MIN as f64 && *f < i64::MAX as f64;
                (f.is_finite() && f.fract() == 0.0 && in_range).then_some(*f as i64)
            }
            Numeric::Decimal(d) if d.is_integer() => {
                i64::try_from(d.normalized().mantissa()).ok()
            }
            Numeric::Decimal(_) => None,
        }
    }
}
