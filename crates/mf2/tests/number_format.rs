//! Tests for structured number formatting.

use mf2::number::{
    CompactDisplay, CurrencyDisplay, CurrencySign, Grouping, Notation, NumberFormatOptions,
    NumberPartKind, Numeric, RoundingMode, RoundingPriority, SignDisplay, Style,
    TrailingZeroDisplay, UnitDisplay, format_number,
};
use mf2::types::Decimal;

fn fmt(value: impl Into<f64>, options: &NumberFormatOptions, locale: &str) -> String {
    format_number(&Numeric::Float(value.into()), options, locale).to_string()
}

fn fmt_int(value: i64, options: &NumberFormatOptions, locale: &str) -> String {
    format_number(&Numeric::Int(value), options, locale).to_string()
}

fn currency(code: &str) -> NumberFormatOptions {
    NumberFormatOptions::builder()
        .style(Style::Currency)
        .currency(code)
        .build()
}

fn unit(id: &str, display: UnitDisplay) -> NumberFormatOptions {
    NumberFormatOptions::builder()
        .style(Style::Unit)
        .unit(id)
        .unit_display(display)
        .build()
}

// =============================================================================
// Decimal Style
// =============================================================================

#[test]
fn default_rounds_to_three_fraction_digits() {
    let opts = NumberFormatOptions::default();
    insta::assert_snapshot!(fmt(1234.5678, &opts, "en"), @"1,234.568");
    insta::assert_snapshot!(fmt_int(1234, &opts, "en"), @"1,234");
    insta::assert_snapshot!(fmt(0.1, &opts, "en"), @"0.1");
}

#[test]
fn locale_separators() {
    let opts = NumberFormatOptions::default();
    assert_eq!(fmt(1234567.891, &opts, "de"), "1.234.567,891");
    assert_eq!(fmt(1234.5, &opts, "fr-FR"), "1\u{202F}234,5");
    assert_eq!(fmt(1234.5, &opts, "ru"), "1\u{A0}234,5");
}

#[test]
fn spanish_groups_from_five_digits() {
    let opts = NumberFormatOptions::default();
    assert_eq!(fmt_int(1234, &opts, "es"), "1234");
    assert_eq!(fmt_int(12345, &opts, "es"), "12.345");
}

#[test]
fn grouping_strategies() {
    let never = NumberFormatOptions::builder()
        .use_grouping(Grouping::Never)
        .build();
    let min2 = NumberFormatOptions::builder()
        .use_grouping(Grouping::Min2)
        .build();
    assert_eq!(fmt_int(1234567, &never, "en"), "1234567");
    assert_eq!(fmt_int(1234, &min2, "en"), "1234");
    assert_eq!(fmt_int(12345, &min2, "en"), "12,345");
}

#[test]
fn decimal_operands_keep_their_digits() {
    let d: Decimal = "12345678901234567890.125".parse().unwrap();
    let opts = NumberFormatOptions::builder()
        .maximum_fraction_digits(2)
        .build();
    assert_eq!(
        format_number(&Numeric::Decimal(d), &opts, "en").to_string(),
        "12,345,678,901,234,567,890.13"
    );
}

// =============================================================================
// Digit Options
// =============================================================================

#[test]
fn fraction_digit_bounds() {
    let min2 = NumberFormatOptions::builder()
        .minimum_fraction_digits(2)
        .build();
    let max0 = NumberFormatOptions::builder()
        .maximum_fraction_digits(0)
        .build();
    assert_eq!(fmt_int(1, &min2, "en"), "1.00");
    assert_eq!(fmt(2.5, &max0, "en"), "3");
    assert_eq!(fmt(-2.5, &max0, "en"), "-3");
}

#[test]
fn rounding_mode_is_applied() {
    let half_even = NumberFormatOptions::builder()
        .maximum_fraction_digits(0)
        .rounding_mode(RoundingMode::HalfEven)
        .build();
    let floor = NumberFormatOptions::builder()
        .maximum_fraction_digits(1)
        .rounding_mode(RoundingMode::Floor)
        .build();
    assert_eq!(fmt(2.5, &half_even, "en"), "2");
    assert_eq!(fmt(3.5, &half_even, "en"), "4");
    assert_eq!(fmt(-1.21, &floor, "en"), "-1.3");
}

#[test]
fn significant_digits() {
    let max3 = NumberFormatOptions::builder()
        .maximum_significant_digits(3)
        .build();
    let min5 = NumberFormatOptions::builder()
        .minimum_significant_digits(5)
        .build();
    assert_eq!(fmt(1234.5, &max3, "en"), "1,230");
    assert_eq!(fmt(0.012345, &max3, "en"), "0.0123");
    assert_eq!(fmt(1.5, &min5, "en"), "1.5000");
}

#[test]
fn rounding_priority_compares_precision() {
    let builder = || {
        NumberFormatOptions::builder()
            .maximum_significant_digits(2)
            .maximum_fraction_digits(2)
    };
    let more = builder()
        .rounding_priority(RoundingPriority::MorePrecision)
        .build();
    let less = builder()
        .rounding_priority(RoundingPriority::LessPrecision)
        .build();
    let auto = builder().build();
    assert_eq!(fmt(1.2345, &more, "en"), "1.23");
    assert_eq!(fmt(1.2345, &less, "en"), "1.2");
    assert_eq!(fmt(1.2345, &auto, "en"), "1.2");
}

#[test]
fn rounding_increment() {
    let opts = NumberFormatOptions::builder()
        .minimum_fraction_digits(2)
        .maximum_fraction_digits(2)
        .rounding_increment(5)
        .build();
    assert_eq!(fmt(1.23, &opts, "en"), "1.25");
    assert_eq!(fmt(1.21, &opts, "en"), "1.20");
}

#[test]
fn minimum_integer_digits_pads() {
    let opts = NumberFormatOptions::builder()
        .minimum_integer_digits(3)
        .build();
    assert_eq!(fmt_int(5, &opts, "en"), "005");
    assert_eq!(fmt(5.5, &opts, "en"), "005.5");
}

#[test]
fn strip_if_integer() {
    let opts = NumberFormatOptions::builder()
        .minimum_fraction_digits(2)
        .trailing_zero_display(TrailingZeroDisplay::StripIfInteger)
        .build();
    assert_eq!(fmt_int(5, &opts, "en"), "5");
    assert_eq!(fmt(5.5, &opts, "en"), "5.50");
}

// =============================================================================
// Sign Display
// =============================================================================

#[test]
fn sign_display_modes() {
    let with = |mode| NumberFormatOptions::builder().sign_display(mode).build();
    assert_eq!(fmt_int(5, &with(SignDisplay::Always), "en"), "+5");
    assert_eq!(fmt_int(0, &with(SignDisplay::Always), "en"), "+0");
    assert_eq!(fmt_int(0, &with(SignDisplay::ExceptZero), "en"), "0");
    assert_eq!(fmt_int(-1, &with(SignDisplay::ExceptZero), "en"), "-1");
    assert_eq!(fmt_int(-5, &with(SignDisplay::Never), "en"), "5");
    assert_eq!(fmt(-0.0, &with(SignDisplay::Negative), "en"), "0");
    assert_eq!(fmt(-0.0, &with(SignDisplay::Auto), "en"), "-0");
}

#[test]
fn sign_applies_after_rounding() {
    let opts = NumberFormatOptions::builder()
        .maximum_fraction_digits(0)
        .sign_display(SignDisplay::Negative)
        .build();
    assert_eq!(fmt(-0.4, &opts, "en"), "0");
}

#[test]
fn non_finite_values() {
    let opts = NumberFormatOptions::default();
    assert_eq!(fmt(f64::NAN, &opts, "en"), "NaN");
    assert_eq!(fmt(f64::INFINITY, &opts, "en"), "∞");
    assert_eq!(fmt(f64::NEG_INFINITY, &opts, "en"), "-∞");
}

// =============================================================================
// Percent and Currency
// =============================================================================

#[test]
fn percent_scales_display() {
    let opts = NumberFormatOptions::builder().style(Style::Percent).build();
    insta::assert_snapshot!(fmt(0.256, &opts, "en"), @"26%");
    assert_eq!(fmt(0.256, &opts, "de"), "26\u{A0}%");
    assert_eq!(fmt(0.01, &opts, "en"), "1%");
}

#[test]
fn currency_symbols_and_minor_units() {
    insta::assert_snapshot!(fmt_int(42, &currency("USD"), "en"), @"$42.00");
    insta::assert_snapshot!(fmt(1234.5, &currency("JPY"), "en"), @"¥1,235");
    assert_eq!(fmt_int(42, &currency("EUR"), "de"), "42,00\u{A0}€");
    assert_eq!(fmt_int(42, &currency("CHF"), "en"), "CHF\u{A0}42.00");
    assert_eq!(fmt_int(1, &currency("KWD"), "en"), "KWD\u{A0}1.000");
}

#[test]
fn currency_display_variants() {
    let code = NumberFormatOptions::builder()
        .style(Style::Currency)
        .currency("USD")
        .currency_display(CurrencyDisplay::Code)
        .build();
    let name = NumberFormatOptions::builder()
        .style(Style::Currency)
        .currency("USD")
        .currency_display(CurrencyDisplay::Name)
        .maximum_fraction_digits(0)
        .build();
    assert_eq!(fmt_int(42, &code, "en"), "USD\u{A0}42.00");
    assert_eq!(fmt_int(1, &name, "en"), "1 US dollar");
    assert_eq!(fmt_int(42, &name, "en"), "42 US dollars");
}

#[test]
fn accounting_wraps_negatives() {
    let opts = NumberFormatOptions::builder()
        .style(Style::Currency)
        .currency("USD")
        .currency_sign(CurrencySign::Accounting)
        .build();
    insta::assert_snapshot!(fmt_int(-5, &opts, "en"), @"($5.00)");
    insta::assert_snapshot!(fmt_int(5, &opts, "en"), @"$5.00");
}

// =============================================================================
// Units and Notation
// =============================================================================

#[test]
fn unit_display_widths() {
    insta::assert_snapshot!(fmt_int(50, &unit("kilometer-per-hour", UnitDisplay::Short), "en"), @"50 km/h");
    insta::assert_snapshot!(fmt_int(1, &unit("kilometer", UnitDisplay::Long), "en"), @"1 kilometer");
    insta::assert_snapshot!(fmt_int(5, &unit("kilometer", UnitDisplay::Narrow), "en"), @"5km");
    insta::assert_snapshot!(fmt_int(21, &unit("celsius", UnitDisplay::Short), "en"), @"21°C");
    insta::assert_snapshot!(fmt_int(3, &unit("day", UnitDisplay::Short), "en"), @"3 days");
    insta::assert_snapshot!(fmt_int(3, &unit("furlong", UnitDisplay::Short), "en"), @"3 furlong");
}

#[test]
fn scientific_and_engineering() {
    let scientific = NumberFormatOptions::builder()
        .notation(Notation::Scientific)
        .build();
    let engineering = NumberFormatOptions::builder()
        .notation(Notation::Engineering)
        .build();
    insta::assert_snapshot!(fmt_int(123456, &scientific, "en"), @"1.235E5");
    insta::assert_snapshot!(fmt(0.00123, &scientific, "en"), @"1.23E-3");
    insta::assert_snapshot!(fmt_int(123456, &engineering, "en"), @"123.456E3");
}

#[test]
fn compact_notation() {
    let short = NumberFormatOptions::builder()
        .notation(Notation::Compact)
        .build();
    let long = NumberFormatOptions::builder()
        .notation(Notation::Compact)
        .compact_display(CompactDisplay::Long)
        .build();
    insta::assert_snapshot!(fmt_int(1234, &short, "en"), @"1.2K");
    insta::assert_snapshot!(fmt_int(1_500_000, &short, "en"), @"1.5M");
    insta::assert_snapshot!(fmt_int(999, &short, "en"), @"999");
    insta::assert_snapshot!(fmt_int(15_000, &short, "en"), @"15K");
    insta::assert_snapshot!(fmt_int(1234, &long, "en"), @"1.2 thousand");
}

// =============================================================================
// Parts
// =============================================================================

#[test]
fn parts_decompose_the_string() {
    let formatted = format_number(&Numeric::Float(-1234.5), &currency("USD"), "en");
    let kinds: Vec<NumberPartKind> = formatted.parts().iter().map(|p| p.kind).collect();
    assert_eq!(
        kinds,
        [
            NumberPartKind::MinusSign,
            NumberPartKind::Currency,
            NumberPartKind::Integer,
            NumberPartKind::Group,
            NumberPartKind::Integer,
            NumberPartKind::Decimal,
            NumberPartKind::Fraction,
        ]
    );
    let joined: String = formatted.parts().iter().map(|p| p.value.as_str()).collect();
    assert_eq!(joined, formatted.to_string());
    assert_eq!(joined, "-$1,234.50");
}

#[test]
fn parts_serialize_with_type_tags() {
    let formatted = format_number(&Numeric::Int(5), &NumberFormatOptions::default(), "en");
    let json = serde_json::to_value(formatted.parts()).unwrap();
    assert_eq!(json, serde_json::json!([{ "type": "integer", "value": "5" }]));
}
