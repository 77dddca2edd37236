//! Exact decimal digit strings and rounding.
//!
//! Numbers are formatted from their shortest decimal representation, so
//! rounding, scaling by powers of ten and significant-digit handling never
//! go through binary floating point.

use std::cmp::Ordering;
use std::iter::repeat_n;

use crate::number::Numeric;
use crate::number::options::RoundingMode;

/// Sign and ASCII digits of a finite number, split at the decimal point.
///
/// `int` never carries leading zeros and is `"0"` for values below one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Digits {
    pub negative: bool,
    pub int: String,
    pub frac: String,
}

/// Where the discarded digits of a rounding step fall relative to one half.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Half {
    Below,
    Exact,
    Above,
}

fn should_increment(mode: RoundingMode, negative: bool, half: Half, last_odd: bool) -> bool {
    match mode {
        RoundingMode::Ceil => !negative,
        RoundingMode::Floor => negative,
        RoundingMode::Expand => true,
        RoundingMode::Trunc => false,
        RoundingMode::HalfCeil => half == Half::Above || (half == Half::Exact && !negative),
        RoundingMode::HalfFloor => half == Half::Above || (half == Half::Exact && negative),
        RoundingMode::HalfExpand => half != Half::Below,
        RoundingMode::HalfTrunc => half == Half::Above,
        RoundingMode::HalfEven => half == Half::Above || (half == Half::Exact && last_odd),
    }
}

impl Digits {
    /// Digits of a finite numeric; `None` for NaN and infinities.
    pub fn from_numeric(n: &Numeric) -> Option<Digits> {
        match n {
            Numeric::Int(i) => Some(Digits::new(*i < 0, &i.unsigned_abs().to_string(), "")),
            Numeric::Float(f) => Digits::from_f64(*f),
            Numeric::Decimal(d) => {
                let (int, frac) = d.digits();
                Some(Digits::new(d.is_negative(), &int, &frac))
            }
        }
    }

    pub fn from_f64(f: f64) -> Option<Digits> {
        if !f.is_finite() {
            return None;
        }
        let text = format!("{}", f.abs());
        let (int, frac) = text.split_once('.').unwrap_or((&text, ""));
        Some(Digits::new(f.is_sign_negative(), int, frac))
    }

    fn new(negative: bool, int: &str, frac: &str) -> Digits {
        let mut digits = Digits {
            negative,
            int: int.to_string(),
            frac: frac.to_string(),
        };
        digits.trim_integer();
        digits
    }

    fn trim_integer(&mut self) {
        let trimmed = self.int.trim_start_matches('0');
        self.int = if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        };
    }

    pub fn is_zero(&self) -> bool {
        self.int.bytes().chain(self.frac.bytes()).all(|b| b == b'0')
    }

    /// Power of ten of the leading non-zero digit; `None` for zero.
    pub fn magnitude(&self) -> Option<i32> {
        if self.int != "0" {
            return i32::try_from(self.int.len()).ok().map(|len| len - 1);
        }
        let leading = self.frac.bytes().position(|b| b != b'0')?;
        i32::try_from(leading).ok().map(|pos| -(pos + 1))
    }

    /// Multiplies by `10^n`.
    pub fn shift_left(&mut self, n: usize) {
        if self.frac.len() < n {
            self.frac.push_str(&"0".repeat(n - self.frac.len()));
        }
        let moved: String = self.frac.drain(..n).collect();
        self.int.push_str(&moved);
        self.trim_integer();
    }

    /// Divides by `10^n`.
    pub fn shift_right(&mut self, n: usize) {
        if self.int.len() < n {
            self.int = format!("{}{}", "0".repeat(n - self.int.len()), self.int);
        }
        let split = self.int.len() - n;
        let moved = self.int.split_off(split);
        self.frac = format!("{moved}{}", self.frac);
        self.trim_integer();
    }

    /// Shifts by a signed power of ten.
    pub fn scale(&mut self, exponent: i32) {
        let n = exponent.unsigned_abs() as usize;
        match exponent.cmp(&0) {
            Ordering::Greater => self.shift_left(n),
            Ordering::Less => self.shift_right(n),
            Ordering::Equal => {}
        }
    }

    /// Rounds to `keep` fraction digits; a negative `keep` rounds to tens,
    /// hundreds, and so on.
    pub fn round(&mut self, keep: i32, mode: RoundingMode) {
        let mut all: Vec<u8> = self
            .int
            .bytes()
            .chain(self.frac.bytes())
            .map(|b| b - b'0')
            .collect();
        let mut point = self.int.len() as i64;
        let mut cut = point + i64::from(keep);
        if cut < 0 {
            let pad = (-cut) as usize;
            all.splice(0..0, repeat_n(0, pad));
            point += pad as i64;
            cut = 0;
        }
        let cut = cut as usize;
        if cut >= all.len() {
            return;
        }

        let discarded = &all[cut..];
        let rest_nonzero = discarded[1..].iter().any(|&d| d != 0);
        let increment = if discarded[0] == 0 && !rest_nonzero {
            false
        } else {
            let half = match discarded[0].cmp(&5) {
                Ordering::Greater => Half::Above,
                Ordering::Less => Half::Below,
                Ordering::Equal if rest_nonzero => Half::Above,
                Ordering::Equal => Half::Exact,
            };
            let last_odd = cut > 0 && all[cut - 1] % 2 == 1;
            should_increment(mode, self.negative, half, last_odd)
        };

        all.truncate(cut);
        if increment {
            let mut carried = true;
            for digit in all.iter_mut().rev() {
                if *digit == 9 {
                    *digit = 0;
                } else {
                    *digit += 1;
                    carried = false;
                    break;
                }
            }
            if carried {
                all.insert(0, 1);
                point += 1;
            }
        }

        let text: String = all.iter().map(|d| char::from(b'0' + d)).collect();
        if keep >= 0 {
            let point = (point as usize).min(text.len());
            self.int = text[..point].to_string();
            self.frac = text[point..].to_string();
        } else {
            self.int = format!("{text}{}", "0".repeat(keep.unsigned_abs() as usize));
            self.frac.clear();
        }
        self.trim_integer();
    }

    /// Rounds to a multiple of `increment * 10^-fraction_digits`.
    pub fn round_to_increment(&mut self, fraction_digits: u32, increment: u32, mode: RoundingMode) {
        let shift = fraction_digits as usize;
        self.shift_left(shift);
        let units: f64 = format!("{}.{}", self.int, self.frac)
            .parse()
            .unwrap_or_default();
        let quotient = units / f64::from(increment);
        let floor = quotient.floor();
        let remainder = quotient - floor;
        let rounded = if remainder == 0.0 {
            floor
        } else {
            let half = match remainder.partial_cmp(&0.5) {
                Some(Ordering::Greater) => Half::Above,
                Some(Ordering::Equal) => Half::Exact,
                _ => Half::Below,
            };
            let last_odd = floor % 2.0 == 1.0;
            if should_increment(mode, self.negative, half, last_odd) {
                floor + 1.0
            } else {
                floor
            }
        };
        let negative = self.negative;
        if let Some(digits) = Digits::from_f64(rounded * f64::from(increment)) {
            *self = digits;
        }
        self.negative = negative;
        self.frac.clear();
        self.shift_right(shift);
    }

    /// Rounds to at most `max` significant digits.
    pub fn round_significant(&mut self, max: u32, mode: RoundingMode) {
        let Some(magnitude) = self.magnitude() else {
            self.frac.clear();
            return;
        };
        let max = i32::try_from(max).unwrap_or(i32::MAX);
        self.round(max - 1 - magnitude, mode);
    }

    /// Number of significant digits currently shown.
    pub fn significant_digits(&self) -> usize {
        if self.int != "0" {
            self.int.len() + self.frac.len()
        } else if self.is_zero() {
            1 + self.frac.len()
        } else {
            self.frac.len() - self.frac.bytes().take_while(|&b| b == b'0').count()
        }
    }

    /// Drops trailing fraction zeros while more than `min` digits remain.
    pub fn strip_trailing_zeros(&mut self, min: usize) {
        while self.frac.len() > min && self.frac.ends_with('0') {
            self.frac.pop();
        }
    }

    pub fn pad_fraction(&mut self, min: usize) {
        if self.frac.len() < min {
            self.frac.push_str(&"0".repeat(min - self.frac.len()));
        }
    }

    pub fn pad_integer(&mut self, min: usize) {
        if self.int.len() < min {
            self.int = format!("{}{}", "0".repeat(min - self.int.len()), self.int);
        }
    }

    /// Shortest plain decimal string, without exponent or trailing zeros.
    pub fn canonical(&self) -> String {
        let mut digits = self.clone();
        digits.strip_trailing_zeros(0);
        let mut out = String::new();
        if digits.negative && !digits.is_zero() {
            out.push('-');
        }
        out.push_str(&digits.int);
        if !digits.frac.is_empty() {
            out.push('.');
            out.push_str(&digits.frac);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(f: f64) -> Digits {
        Digits::from_f64(f).unwrap()
    }

    #[test]
    fn float_digits_are_shortest_representation() {
        assert_eq!(digits(0.1).canonical(), "0.1");
        assert_eq!(digits(1.0).canonical(), "1");
        assert_eq!(digits(-0.0).canonical(), "0");
        assert_eq!(digits(1e21).canonical(), "1000000000000000000000");
    }

    #[test]
    fn half_expand_rounds_ties_away_from_zero() {
        let mut d = digits(2.5);
        d.round(0, RoundingMode::HalfExpand);
        assert_eq!(d.canonical(), "3");

        let mut d = digits(-2.5);
        d.round(0, RoundingMode::HalfExpand);
        assert_eq!(d.canonical(), "-3");
    }

    #[test]
    fn half_even_uses_last_kept_digit() {
        let mut d = digits(2.5);
        d.round(0, RoundingMode::HalfEven);
        assert_eq!(d.canonical(), "2");

        let mut d = digits(3.5);
        d.round(0, RoundingMode::HalfEven);
        assert_eq!(d.canonical(), "4");
    }

    #[test]
    fn directed_modes_respect_sign() {
        let mut d = digits(-1.21);
        d.round(1, RoundingMode::Ceil);
        assert_eq!(d.canonical(), "-1.2");

        let mut d = digits(-1.21);
        d.round(1, RoundingMode::Floor);
        assert_eq!(d.canonical(), "-1.3");
    }

    #[test]
    fn rounding_carries_into_new_digit() {
        let mut d = digits(9.996);
        d.round(2, RoundingMode::HalfExpand);
        assert_eq!(d.int, "10");
        assert_eq!(d.frac, "00");
    }

    #[test]
    fn negative_keep_rounds_integer_places() {
        let mut d = digits(1234.0);
        d.round(-2, RoundingMode::HalfExpand);
        assert_eq!(d.canonical(), "1200");
    }

    #[test]
    fn rounding_past_the_leading_digit_pads_with_zeros() {
        let mut d = digits(700.0);
        d.round(-4, RoundingMode::HalfExpand);
        assert_eq!(d.canonical(), "0");

        let mut d = digits(700.0);
        d.round(-4, RoundingMode::Expand);
        assert_eq!(d.canonical(), "10000");
    }

    #[test]
    fn significant_rounding() {
        let mut d = digits(0.012345);
        d.round_significant(3, RoundingMode::HalfExpand);
        assert_eq!(d.canonical(), "0.0123");

        let mut d = digits(98765.0);
        d.round_significant(2, RoundingMode::HalfExpand);
        assert_eq!(d.canonical(), "99000");
    }

    #[test]
    fn shifting_moves_the_decimal_point() {
        let mut d = digits(0.015);
        d.shift_left(2);
        assert_eq!(d.canonical(), "1.5");
        d.shift_right(4);
        assert_eq!(d.canonical(), "0.00015");
    }

    #[test]
    fn increment_rounding() {
        let mut d = digits(1.13);
        d.round_to_increment(1, 5, RoundingMode::HalfExpand);
        assert_eq!(d.canonical(), "1");

        let mut d = digits(1.38);
        d.round_to_increment(1, 5, RoundingMode::HalfExpand);
        assert_eq!(d.canonical(), "1.5");
    }
}
