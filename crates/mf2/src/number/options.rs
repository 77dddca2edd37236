//! Typed number formatting options.

use bon::Builder;

use crate::types::{Options, Value};

/// Declares a keyword option: an enum with its source spelling for each
/// variant, plus `parse`/`as_str` and the list of accepted keywords.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $keyword:literal),+ $(,)? } default $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[doc = concat!("`", $keyword, "`")]
                $variant,
            )+
        }

        impl $name {
            /// Every keyword accepted for this option.
            pub const KEYWORDS: &'static [&'static str] = &[$($keyword),+];

            pub fn parse(s: &str) -> Option<Self> {
                match s {
                    $($keyword => Some(Self::$variant),)+
                    _ => None,
                }
            }

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $keyword,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }
    };
}

pub(crate) use keyword_enum;

keyword_enum! {
    /// Which formatting style a number uses.
    Style {
        Decimal => "decimal",
        Percent => "percent",
        Currency => "currency",
        Unit => "unit",
    } default Decimal
}

keyword_enum! {
    /// How plural selection treats a number.
    SelectMode {
        Plural => "plural",
        Ordinal => "ordinal",
        Exact => "exact",
    } default Plural
}

keyword_enum! {
    SignDisplay {
        Auto => "auto",
        Always => "always",
        ExceptZero => "exceptZero",
        Negative => "negative",
        Never => "never",
    } default Auto
}

keyword_enum! {
    Notation {
        Standard => "standard",
        Scientific => "scientific",
        Engineering => "engineering",
        Compact => "compact",
    } default Standard
}

keyword_enum! {
    CompactDisplay {
        Short => "short",
        Long => "long",
    } default Short
}

keyword_enum! {
    CurrencyDisplay {
        Symbol => "symbol",
        NarrowSymbol => "narrowSymbol",
        Code => "code",
        Name => "name",
    } default Symbol
}

keyword_enum! {
    CurrencySign {
        Standard => "standard",
        Accounting => "accounting",
    } default Standard
}

keyword_enum! {
    UnitDisplay {
        Short => "short",
        Narrow => "narrow",
        Long => "long",
    } default Short
}

keyword_enum! {
    /// ECMA-402 rounding modes.
    RoundingMode {
        Ceil => "ceil",
        Floor => "floor",
        Expand => "expand",
        Trunc => "trunc",
        HalfCeil => "halfCeil",
        HalfFloor => "halfFloor",
        HalfExpand => "halfExpand",
        HalfTrunc => "halfTrunc",
        HalfEven => "halfEven",
    } default HalfExpand
}

keyword_enum! {
    /// Which constraint wins when both fraction and significant digits are set.
    RoundingPriority {
        Auto => "auto",
        MorePrecision => "morePrecision",
        LessPrecision => "lessPrecision",
    } default Auto
}

keyword_enum! {
    TrailingZeroDisplay {
        Auto => "auto",
        StripIfInteger => "stripIfInteger",
    } default Auto
}

keyword_enum! {
    /// When grouping separators are inserted.
    Grouping {
        Auto => "auto",
        Always => "always",
        Min2 => "min2",
        Never => "never",
    } default Auto
}

impl Grouping {
    /// Also accepts the boolean spellings `true` and `false`.
    pub fn parse_lenient(s: &str) -> Option<Self> {
        match s {
            "true" => Some(Grouping::Always),
            "false" => Some(Grouping::Never),
            other => Grouping::parse(other),
        }
    }
}

/// Increments accepted by `roundingIncrement`.
pub const ROUNDING_INCREMENTS: &[u32] = &[
    1, 2, 5, 10, 20, 25, 50, 100, 200, 250, 500, 1000, 2000, 2500, 5000,
];

/// Fully resolved options driving the number formatter.
///
/// Built either with the builder or from a merged, already validated
/// [`Options`] map via [`NumberFormatOptions::from_options`].
///
/// # Example
///
/// ```
/// use mf2::number::{NumberFormatOptions, Style};
///
/// let opts = NumberFormatOptions::builder()
///     .style(Style::Percent)
///     .maximum_fraction_digits(1)
///     .build();
/// assert_eq!(opts.style, Style::Percent);
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct NumberFormatOptions {
    #[builder(default)]
    pub style: Style,
    #[builder(default)]
    pub select: SelectMode,
    #[builder(into)]
    pub currency: Option<String>,
    #[builder(default)]
    pub currency_display: CurrencyDisplay,
    #[builder(default)]
    pub currency_sign: CurrencySign,
    #[builder(into)]
    pub unit: Option<String>,
    #[builder(default)]
    pub unit_display: UnitDisplay,
    pub minimum_integer_digits: Option<u32>,
    pub minimum_fraction_digits: Option<u32>,
    pub maximum_fraction_digits: Option<u32>,
    pub minimum_significant_digits: Option<u32>,
    pub maximum_significant_digits: Option<u32>,
    #[builder(default)]
    pub use_grouping: Grouping,
    #[builder(default)]
    pub sign_display: SignDisplay,
    #[builder(default)]
    pub notation: Notation,
    #[builder(default)]
    pub compact_display: CompactDisplay,
    #[builder(default)]
    pub rounding_mode: RoundingMode,
    #[builder(default)]
    pub rounding_priority: RoundingPriority,
    #[builder(default = 1)]
    pub rounding_increment: u32,
    #[builder(default)]
    pub trailing_zero_display: TrailingZeroDisplay,
}

impl Default for NumberFormatOptions {
    fn default() -> Self {
        NumberFormatOptions::builder().build()
    }
}

impl NumberFormatOptions {
    /// Reads typed options out of a merged option map.
    ///
    /// Values that do not parse are skipped here; reporting them is the job of
    /// the option schema that produced the map.
    pub fn from_options(options: &Options) -> Self {
        let keyword = |name: &str| options.get(name).and_then(option_string);
        let digits = |name: &str| options.get(name).and_then(option_u32);

        NumberFormatOptions {
            style: keyword("style")
                .and_then(|s| Style::parse(&s))
                .unwrap_or_default(),
            select: keyword("select")
                .and_then(|s| SelectMode::parse(&s))
                .unwrap_or_default(),
            currency: keyword("currency").map(|c| c.to_ascii_uppercase()),
            currency_display: keyword("currencyDisplay")
                .and_then(|s| CurrencyDisplay::parse(&s))
                .unwrap_or_default(),
            currency_sign: keyword("currencySign")
                .and_then(|s| CurrencySign::parse(&s))
                .unwrap_or_default(),
            unit: keyword("unit"),
            unit_display: keyword("unitDisplay")
                .and_then(|s| UnitDisplay::parse(&s))
                .unwrap_or_default(),
            minimum_integer_digits: digits("minimumIntegerDigits"),
            minimum_fraction_digits: digits("minimumFractionDigits"),
            maximum_fraction_digits: digits("maximumFractionDigits"),
            minimum_significant_digits: digits("minimumSignificantDigits"),
            maximum_significant_digits: digits("maximumSignificantDigits"),
            use_grouping: keyword("useGrouping")
                .and_then(|s| Grouping::parse_lenient(&s))
                .unwrap_or_default(),
            sign_display: keyword("signDisplay")
                .and_then(|s| SignDisplay::parse(&s))
                .unwrap_or_default(),
            notation: keyword("notation")
                .and_then(|s| Notation::parse(&s))
                .unwrap_or_default(),
            compact_display: keyword("compactDisplay")
                .and_then(|s| CompactDisplay::parse(&s))
                .unwrap_or_default(),
            rounding_mode: keyword("roundingMode")
                .and_then(|s| RoundingMode::parse(&s))
                .unwrap_or_default(),
            rounding_priority: keyword("roundingPriority")
                .and_then(|s| RoundingPriority::parse(&s))
                .unwrap_or_default(),
            rounding_increment: digits("roundingIncrement")
                .filter(|n| ROUNDING_INCREMENTS.contains(n))
                .unwrap_or(1),
            trailing_zero_display: keyword("trailingZeroDisplay")
                .and_then(|s| TrailingZeroDisplay::parse(&s))
                .unwrap_or_default(),
        }
    }
}

/// String form of an option value: strings as-is, booleans and numbers by
/// their display, resolved values by their underlying value.
pub(crate) fn option_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Int(_) | Value::Float(_) | Value::Decimal(_) => Some(value.to_string()),
        Value::Resolved(v) => option_string(&v.value_of()),
        _ => None,
    }
}

/// Non-negative integer form of an option value.
pub(crate) fn option_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Int(n) => u32::try_from(*n).ok(),
        Value::Float(f) if f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u32::MAX) => {
            Some(*f as u32)
        }
        Value::Decimal(d) if d.is_integer() => u32::try_from(d.normalized().mantissa()).ok(),
        Value::String(s) => s.parse().ok(),
        Value::Resolved(v) => option_u32(&v.value_of()),
        _ => None,
    }
}
