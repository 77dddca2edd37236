//! Structured number formatting.
//!
//! [`format_number`] rounds the exact decimal digits of a number and emits
//! typed parts (sign, integer groups, separators, fraction, adornments). The
//! string form is the concatenation of the parts.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

use crate::number::digits::Digits;
use crate::number::options::{
    CompactDisplay, CurrencyDisplay, CurrencySign, Grouping, Notation, NumberFormatOptions,
    RoundingPriority, SignDisplay, Style, TrailingZeroDisplay, UnitDisplay,
};
use crate::number::plural::{PluralKind, plural_category};
use crate::number::symbols::{
    COMPACT_LONG, COMPACT_SHORT, LocaleSymbols, NBSP, currency_digits, currency_info,
    locale_symbols, unit_info,
};
use crate::number::Numeric;

/// Default significant digits for compact notation below two integer digits.
const COMPACT_SIGNIFICANT_DIGITS: u32 = 2;

/// The kind of one formatted number part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NumberPartKind {
    MinusSign,
    PlusSign,
    Integer,
    Group,
    Decimal,
    Fraction,
    Currency,
    PercentSign,
    Unit,
    Compact,
    ExponentSeparator,
    ExponentMinusSign,
    ExponentInteger,
    Nan,
    Infinity,
    Literal,
}

/// One typed piece of a formatted number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberPart {
    #[serde(rename = "type")]
    pub kind: NumberPartKind,
    pub value: String,
}

impl NumberPart {
    pub fn new(kind: NumberPartKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// A formatted number as an ordered list of parts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormattedNumber {
    parts: Vec<NumberPart>,
}

impl FormattedNumber {
    pub fn parts(&self) -> &[NumberPart] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<NumberPart> {
        self.parts
    }

    fn push(&mut self, kind: NumberPartKind, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.parts.push(NumberPart { kind, value });
        }
    }
}

impl Display for FormattedNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for part in &self.parts {
            f.write_str(&part.value)?;
        }
        Ok(())
    }
}

/// Rounded digits plus the notation applied to them.
struct Rendered {
    digits: Digits,
    exponent: Option<i32>,
    compact_index: usize,
}

/// Formats `value` for `locale`.
///
/// # Example
///
/// ```
/// use mf2::number::{NumberFormatOptions, Numeric, format_number};
///
/// let options = NumberFormatOptions::default();
/// let formatted = format_number(&Numeric::Float(1234.5678), &options, "en");
/// assert_eq!(formatted.to_string(), "1,234.568");
/// ```
pub fn format_number(
    value: &Numeric,
    options: &NumberFormatOptions,
    locale: &str,
) -> FormattedNumber {
    let symbols = locale_symbols(locale);
    let mut out = FormattedNumber::default();

    let rendered = Digits::from_numeric(value).map(|mut digits| {
        if options.style == Style::Percent {
            digits.shift_left(2);
        }
        render_digits(digits, options)
    });
    let (negative, zero) = match &rendered {
        Some(r) => (r.digits.negative, r.digits.is_zero()),
        None => {
            let f = value.to_f64();
            (f.is_sign_negative() && !f.is_nan(), false)
        }
    };

    let accounting = options.style == Style::Currency
        && options.currency_sign == CurrencySign::Accounting
        && negative
        && !zero;
    if accounting {
        out.push(NumberPartKind::Literal, "(");
    } else {
        match sign_part(options.sign_display, negative, zero) {
            Some(NumberPartKind::MinusSign) => out.push(NumberPartKind::MinusSign, "-"),
            Some(kind) => out.push(kind, "+"),
            None => {}
        }
    }

    let adornment = Adornment::resolve(options, &symbols, rendered.as_ref(), locale);
    for part in &adornment.prefix {
        out.parts.push(part.clone());
    }

    match &rendered {
        Some(r) => push_digits(&mut out, r, options, &symbols),
        None if value.to_f64().is_nan() => out.push(NumberPartKind::Nan, "NaN"),
        None => out.push(NumberPartKind::Infinity, "∞"),
    }

    for part in &adornment.suffix {
        out.parts.push(part.clone());
    }
    if accounting {
        out.push(NumberPartKind::Literal, ")");
    }
    out
}

fn sign_part(display: SignDisplay, negative: bool, zero: bool) -> Option<NumberPartKind> {
    match display {
        SignDisplay::Auto => negative.then_some(NumberPartKind::MinusSign),
        SignDisplay::Always if negative => Some(NumberPartKind::MinusSign),
        SignDisplay::Always => Some(NumberPartKind::PlusSign),
        SignDisplay::ExceptZero if zero => None,
        SignDisplay::ExceptZero if negative => Some(NumberPartKind::MinusSign),
        SignDisplay::ExceptZero => Some(NumberPartKind::PlusSign),
        SignDisplay::Negative => (negative && !zero).then_some(NumberPartKind::MinusSign),
        SignDisplay::Never => None,
    }
}

fn push_digits(
    out: &mut FormattedNumber,
    rendered: &Rendered,
    options: &NumberFormatOptions,
    symbols: &LocaleSymbols,
) {
    let digits = &rendered.digits;
    for (i, group) in group_integer(&digits.int, options.use_grouping, symbols)
        .into_iter()
        .enumerate()
    {
        if i > 0 {
            out.push(NumberPartKind::Group, symbols.group);
        }
        out.push(NumberPartKind::Integer, group);
    }
    if !digits.frac.is_empty() {
        out.push(NumberPartKind::Decimal, symbols.decimal);
        out.push(NumberPartKind::Fraction, digits.frac.as_str());
    }
    if let Some(exponent) = rendered.exponent {
        out.push(NumberPartKind::ExponentSeparator, "E");
        if exponent < 0 {
            out.push(NumberPartKind::ExponentMinusSign, "-");
        }
        out.push(
            NumberPartKind::ExponentInteger,
            exponent.unsigned_abs().to_string(),
        );
    }
    if rendered.compact_index > 0 {
        match options.compact_display {
            CompactDisplay::Short => {
                out.push(NumberPartKind::Compact, COMPACT_SHORT[rendered.compact_index]);
            }
            CompactDisplay::Long => {
                out.push(NumberPartKind::Literal, " ");
                out.push(NumberPartKind::Compact, COMPACT_LONG[rendered.compact_index]);
            }
        }
    }
}

/// Splits integer digits into groups of three, honoring the grouping strategy.
fn group_integer<'a>(int: &'a str, grouping: Grouping, symbols: &LocaleSymbols) -> Vec<&'a str> {
    let min_digits = match grouping {
        Grouping::Never => usize::MAX,
        Grouping::Always => 4,
        Grouping::Min2 => 5,
        Grouping::Auto => symbols.min_grouping,
    };
    if int.len() < min_digits {
        return vec![int];
    }
    let mut groups = Vec::new();
    let head = match int.len() % 3 {
        0 => 3,
        n => n,
    };
    groups.push(&int[..head]);
    let mut start = head;
    while start < int.len() {
        groups.push(&int[start..start + 3]);
        start += 3;
    }
    groups
}

fn render_digits(mut digits: Digits, options: &NumberFormatOptions) -> Rendered {
    let defaults = default_fraction_bounds(options);
    match options.notation {
        Notation::Standard => {
            round_digits(&mut digits, options, defaults);
            Rendered {
                digits,
                exponent: None,
                compact_index: 0,
            }
        }
        Notation::Scientific | Notation::Engineering => {
            let step = if options.notation == Notation::Engineering {
                3
            } else {
                1
            };
            let mut exponent = digits
                .magnitude()
                .map_or(0, |m| m.div_euclid(step) * step);
            digits.scale(-exponent);
            round_digits(&mut digits, options, (0, 3));
            if digits.int.len() > step as usize {
                exponent += step;
                digits.scale(-step);
                round_digits(&mut digits, options, (0, 3));
            }
            Rendered {
                digits,
                exponent: Some(exponent),
                compact_index: 0,
            }
        }
        Notation::Compact => {
            let max_index = COMPACT_SHORT.len() - 1;
            let mut index = digits
                .magnitude()
                .map_or(0, |m| m.max(0).div_euclid(3) as usize)
                .min(max_index);
            digits.scale(-(index as i32 * 3));
            round_compact(&mut digits, options);
            if digits.int.len() > 3 && index < max_index {
                index += 1;
                digits.scale(-3);
                round_compact(&mut digits, options);
            }
            Rendered {
                digits,
                exponent: None,
                compact_index: index,
            }
        }
    }
}

fn has_digit_options(options: &NumberFormatOptions) -> bool {
    options.minimum_fraction_digits.is_some()
        || options.maximum_fraction_digits.is_some()
        || options.minimum_significant_digits.is_some()
        || options.maximum_significant_digits.is_some()
}

fn round_compact(digits: &mut Digits, options: &NumberFormatOptions) {
    if has_digit_options(options) {
        round_digits(digits, options, (0, 0));
        return;
    }
    if digits.int.len() >= 2 {
        digits.round(0, options.rounding_mode);
    } else {
        digits.round_significant(COMPACT_SIGNIFICANT_DIGITS, options.rounding_mode);
    }
    digits.strip_trailing_zeros(0);
    finish(digits, options);
}

/// Fraction digit bounds implied by the style when no option sets them.
fn default_fraction_bounds(options: &NumberFormatOptions) -> (u32, u32) {
    match options.style {
        Style::Currency => {
            let digits = options.currency.as_deref().map_or(2, currency_digits);
            (digits, digits)
        }
        Style::Percent => (0, 0),
        Style::Decimal | Style::Unit => (0, 3),
    }
}

/// Explicit bounds win; a lone explicit bound widens the default to stay
/// consistent with it.
fn fraction_bounds(options: &NumberFormatOptions, defaults: (u32, u32)) -> (u32, u32) {
    match (
        options.minimum_fraction_digits,
        options.maximum_fraction_digits,
    ) {
        (Some(min), Some(max)) => (min, max.max(min)),
        (Some(min), None) => (min, defaults.1.max(min)),
        (None, Some(max)) => (defaults.0.min(max), max),
        (None, None) => defaults,
    }
}

fn round_digits(digits: &mut Digits, options: &NumberFormatOptions, defaults: (u32, u32)) {
    let significant = options.minimum_significant_digits.is_some()
        || options.maximum_significant_digits.is_some();
    let fractional = options.minimum_fraction_digits.is_some()
        || options.maximum_fraction_digits.is_some();

    *digits = if significant {
        let by_significant = round_significant(digits.clone(), options);
        if fractional && options.rounding_priority != RoundingPriority::Auto {
            let by_fraction = round_fraction(digits.clone(), options, defaults);
            let fraction_is_finer = by_fraction.frac.len() > by_significant.frac.len();
            let prefer_fraction = match options.rounding_priority {
                RoundingPriority::MorePrecision => fraction_is_finer,
                RoundingPriority::LessPrecision => !fraction_is_finer,
                RoundingPriority::Auto => false,
            };
            if prefer_fraction {
                by_fraction
            } else {
                by_significant
            }
        } else {
            by_significant
        }
    } else {
        round_fraction(digits.clone(), options, defaults)
    };
    finish(digits, options);
}

fn round_significant(mut digits: Digits, options: &NumberFormatOptions) -> Digits {
    let min = options.minimum_significant_digits.unwrap_or(1);
    let max = options.maximum_significant_digits.unwrap_or(21).max(min);
    digits.round_significant(max, options.rounding_mode);
    digits.strip_trailing_zeros(0);
    let shown = digits.significant_digits();
    let min = min as usize;
    if shown < min {
        let padded = digits.frac.len() + (min - shown);
        digits.pad_fraction(padded);
    }
    digits
}

fn round_fraction(
    mut digits: Digits,
    options: &NumberFormatOptions,
    defaults: (u32, u32),
) -> Digits {
    let (min, max) = fraction_bounds(options, defaults);
    if options.rounding_increment > 1 {
        digits.round_to_increment(max, options.rounding_increment, options.rounding_mode);
    } else {
        digits.round(i32::try_from(max).unwrap_or(i32::MAX), options.rounding_mode);
    }
    digits.strip_trailing_zeros(min as usize);
    digits.pad_fraction(min as usize);
    digits
}

fn finish(digits: &mut Digits, options: &NumberFormatOptions) {
    if let Some(min) = options.minimum_integer_digits {
        digits.pad_integer(min as usize);
    }
    if options.trailing_zero_display == TrailingZeroDisplay::StripIfInteger
        && digits.frac.bytes().all(|b| b == b'0')
    {
        digits.frac.clear();
    }
}

/// Currency, percent and unit parts around the digits.
#[derive(Default)]
struct Adornment {
    prefix: Vec<NumberPart>,
    suffix: Vec<NumberPart>,
}

impl Adornment {
    fn resolve(
        options: &NumberFormatOptions,
        symbols: &LocaleSymbols,
        rendered: Option<&Rendered>,
        locale: &str,
    ) -> Adornment {
        let mut adornment = Adornment::default();
        match options.style {
            Style::Decimal => {}
            Style::Percent => {
                if !symbols.percent_gap.is_empty() {
                    adornment.suffix_part(NumberPartKind::Literal, symbols.percent_gap);
                }
                adornment.suffix_part(NumberPartKind::PercentSign, "%");
            }
            Style::Currency => {
                if let Some(code) = options.currency.as_deref() {
                    adornment.currency(code, options.currency_display, symbols, rendered, locale);
                }
            }
            Style::Unit => {
                if let Some(unit) = options.unit.as_deref() {
                    adornment.unit(unit, options.unit_display, rendered, locale);
                }
            }
        }
        adornment
    }

    fn prefix_part(&mut self, kind: NumberPartKind, value: &str) {
        self.prefix.push(NumberPart::new(kind, value));
    }

    fn suffix_part(&mut self, kind: NumberPartKind, value: &str) {
        self.suffix.push(NumberPart::new(kind, value));
    }

    fn currency(
        &mut self,
        code: &str,
        display: CurrencyDisplay,
        symbols: &LocaleSymbols,
        rendered: Option<&Rendered>,
        locale: &str,
    ) {
        let info = currency_info(code);
        let text = match display {
            CurrencyDisplay::Symbol => info.map_or(code, |c| c.symbol),
            CurrencyDisplay::NarrowSymbol => info.map_or(code, |c| c.narrow),
            CurrencyDisplay::Code => code,
            CurrencyDisplay::Name => {
                let name = match info {
                    Some(c) if plural_of(rendered, locale) == "one" => c.name_one,
                    Some(c) => c.name_other,
                    None => code,
                };
                self.suffix_part(NumberPartKind::Literal, " ");
                self.suffix_part(NumberPartKind::Currency, name);
                return;
            }
        };
        let spaced = display == CurrencyDisplay::Code
            || text.chars().last().is_some_and(char::is_alphabetic);
        if symbols.currency_first {
            self.prefix_part(NumberPartKind::Currency, text);
            if spaced {
                self.prefix_part(NumberPartKind::Literal, NBSP);
            }
        } else {
            self.suffix_part(NumberPartKind::Literal, NBSP);
            self.suffix_part(NumberPartKind::Currency, text);
        }
    }

    fn unit(
        &mut self,
        unit: &str,
        display: UnitDisplay,
        rendered: Option<&Rendered>,
        locale: &str,
    ) {
        let Some(info) = unit_info(unit) else {
            self.suffix_part(NumberPartKind::Literal, " ");
            self.suffix_part(NumberPartKind::Unit, unit);
            return;
        };
        let long = if plural_of(rendered, locale) == "one" {
            info.long_one
        } else {
            info.long_other
        };
        let (name, attached) = match display {
            UnitDisplay::Long => (long, false),
            UnitDisplay::Short if info.short.is_empty() => (long, false),
            UnitDisplay::Short => (info.short, info.attached),
            UnitDisplay::Narrow => (info.narrow, true),
        };
        if !attached {
            self.suffix_part(NumberPartKind::Literal, " ");
        }
        self.suffix_part(NumberPartKind::Unit, name);
    }
}

/// Plural category of the digits as displayed; fractions are `other`.
fn plural_of(rendered: Option<&Rendered>, locale: &str) -> &'static str {
    let Some(rendered) = rendered else {
        return "other";
    };
    if !rendered.digits.frac.is_empty() || rendered.exponent.is_some() {
        return "other";
    }
    match rendered.digits.int.parse::<i64>() {
        Ok(n) => plural_category(locale, PluralKind::Cardinal, n),
        Err(_) => "other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en(value: Numeric, options: &NumberFormatOptions) -> String {
        format_number(&value, options, "en").to_string()
    }

    #[test]
    fn groups_integer_digits() {
        let symbols = locale_symbols("en");
        assert_eq!(group_integer("1234567", Grouping::Auto, &symbols), ["1", "234", "567"]);
        assert_eq!(group_integer("123", Grouping::Auto, &symbols), ["123"]);
        assert_eq!(group_integer("1234", Grouping::Min2, &symbols), ["1234"]);
        assert_eq!(group_integer("12345", Grouping::Never, &symbols), ["12345"]);
    }

    #[test]
    fn fraction_bounds_follow_explicit_values() {
        let opts = NumberFormatOptions::builder().minimum_fraction_digits(5).build();
        assert_eq!(fraction_bounds(&opts, (0, 3)), (5, 5));
        let opts = NumberFormatOptions::builder().maximum_fraction_digits(1).build();
        assert_eq!(fraction_bounds(&opts, (2, 2)), (1, 1));
    }

    #[test]
    fn scientific_carry_moves_exponent() {
        let opts = NumberFormatOptions::builder()
            .notation(Notation::Scientific)
            .maximum_fraction_digits(1)
            .build();
        assert_eq!(en(Numeric::Float(99.99), &opts), "1E2");
    }

    #[test]
    fn compact_carry_moves_to_next_suffix() {
        let opts = NumberFormatOptions::builder()
            .notation(Notation::Compact)
            .build();
        assert_eq!(en(Numeric::Int(999_999), &opts), "1M");
    }
}
