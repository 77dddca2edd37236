use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use thiserror::Error;

/// Largest scale accepted by [`Decimal`]; beyond it the mantissa cannot hold
/// a meaningful value.
const MAX_SCALE: u32 = 36;

/// An arbitrary-precision decimal number, stored as `mantissa * 10^-scale`.
///
/// Decimals keep the exact digits the caller supplied, so `1.50` formats and
/// selects differently from the float `1.5` only where options ask for it.
///
/// # Example
///
/// ```
/// use mf2::types::Decimal;
///
/// let d: Decimal = "12345678901234567890.25".parse().unwrap();
/// assert_eq!(d.to_string(), "12345678901234567890.25");
/// assert!(!d.is_integer());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decimal {
    mantissa: i128,
    scale: u32,
}

/// Error returned when a string is not a decimal number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid decimal '{input}'")]
pub struct DecimalParseError {
    input: String,
}

impl Decimal {
    /// Create a decimal from a mantissa and scale (`mantissa * 10^-scale`).
    pub fn new(mantissa: i128, scale: u32) -> Self {
        Self { mantissa, scale }
    }

    pub fn mantissa(&self) -> i128 {
        self.mantissa
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn is_negative(&self) -> bool {
        self.mantissa < 0
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa == 0
    }

    /// True if the value has no fractional part.
    pub fn is_integer(&self) -> bool {
        match 10i128.checked_pow(self.scale) {
            Some(unit) => self.mantissa % unit == 0,
            None => self.mantissa == 0,
        }
    }

    /// Drops trailing fractional zeros (`1.500` becomes `1.5`).
    pub fn normalized(&self) -> Decimal {
        let mut mantissa = self.mantissa;
        let mut scale = self.scale;
        while scale > 0 && mantissa % 10 == 0 {
            mantissa /= 10;
            scale -= 1;
        }
        Decimal { mantissa, scale }
    }

    /// Adds an integer, keeping the scale. Returns `None` on overflow.
    pub fn checked_add_integer(&self, delta: i64) -> Option<Decimal> {
        let unit = 10i128.checked_pow(self.scale)?;
        let shifted = i128::from(delta).checked_mul(unit)?;
        Some(Decimal {
            mantissa: self.mantissa.checked_add(shifted)?,
            scale: self.scale,
        })
    }

    /// Nearest `f64`; may lose precision.
    pub fn to_f64(&self) -> f64 {
        self.to_string().parse().unwrap_or(f64::NAN)
    }

    /// Digits of the absolute value split at the decimal point.
    pub(crate) fn digits(&self) -> (String, String) {
        let raw = self.mantissa.unsigned_abs().to_string();
        let scale = self.scale as usize;
        if raw.len() > scale {
            let (int, frac) = raw.split_at(raw.len() - scale);
            (int.to_string(), frac.to_string())
        } else {
            let mut frac = "0".repeat(scale - raw.len());
            frac.push_str(&raw);
            ("0".to_string(), frac)
        }
    }
}

impl FromStr for Decimal {
    type Err = DecimalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || DecimalParseError {
            input: s.to_string(),
        };
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (number, exponent) = match body.find(['e', 'E']) {
            Some(pos) => {
                let exp: i32 = body[pos + 1..].parse().map_err(|_| err())?;
                (&body[..pos], exp)
            }
            None => (body, 0),
        };
        let (int, frac) = number.split_once('.').unwrap_or((number, ""));
        if int.is_empty() || !int.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        if number.contains('.') && frac.is_empty() {
            return Err(err());
        }
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }

        let digits = format!("{int}{frac}");
        let mut mantissa: i128 = digits.parse().map_err(|_| err())?;
        let frac_len = i64::try_from(frac.len()).map_err(|_| err())?;
        let mut scale = frac_len - i64::from(exponent);
        if scale < 0 {
            let shift = u32::try_from(-scale).map_err(|_| err())?;
            let factor = 10i128.checked_pow(shift).ok_or_else(err)?;
            mantissa = mantissa.checked_mul(factor).ok_or_else(err)?;
            scale = 0;
        }
        let scale = u32::try_from(scale).map_err(|_| err())?;
        if scale > MAX_SCALE {
            return Err(err());
        }
        if negative {
            mantissa = -mantissa;
        }
        Ok(Decimal { mantissa, scale })
    }
}

impl Display for Decimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let (int, frac) = self.digits();
        if self.is_negative() {
            f.write_str("-")?;
        }
        f.write_str(&int)?;
        if !frac.is_empty() {
            write!(f, ".{frac}")?;
        }
        Ok(())
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let scale = self.scale.max(other.scale);
        let widen = |d: &Decimal| {
            10i128
                .checked_pow(scale - d.scale)
                .and_then(|factor| d.mantissa.checked_mul(factor))
        };
        match (widen(self), widen(other)) {
            (Some(a), Some(b)) => a.cmp(&b),
            _ => self.to_f64().total_cmp(&other.to_f64()),
        }
    }
}

impl From<i64> for Decimal {
    fn from(n: i64) -> Self {
        Decimal::new(i128::from(n), 0)
    }
}

impl From<u64> for Decimal {
    fn from(n: u64) -> Self {
        Decimal::new(i128::from(n), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_exponent_forms() {
        assert_eq!("1.25".parse::<Decimal>().unwrap(), Decimal::new(125, 2));
        assert_eq!("-0.5".parse::<Decimal>().unwrap(), Decimal::new(-5, 1));
        assert_eq!("12e2".parse::<Decimal>().unwrap(), Decimal::new(1200, 0));
        assert_eq!("1.5E-3".parse::<Decimal>().unwrap(), Decimal::new(15, 4));
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "-", "1.", ".5", "1.2.3", "abc", "1e", "+1"] {
            assert!(bad.parse::<Decimal>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn displays_small_fractions_with_leading_zero() {
        assert_eq!(Decimal::new(5, 3).to_string(), "0.005");
        assert_eq!(Decimal::new(-5, 3).to_string(), "-0.005");
    }

    #[test]
    fn adds_integers_at_existing_scale() {
        let d = Decimal::new(150, 2);
        assert_eq!(d.checked_add_integer(2).unwrap().to_string(), "3.50");
        assert_eq!(d.checked_add_integer(-2).unwrap().to_string(), "-0.50");
    }

    #[test]
    fn normalizes_and_compares() {
        assert_eq!(Decimal::new(1500, 3).normalized(), Decimal::new(15, 1));
        assert!(Decimal::new(15, 1) < Decimal::new(2, 0));
        assert!(Decimal::new(400, 2).is_integer());
    }
}
