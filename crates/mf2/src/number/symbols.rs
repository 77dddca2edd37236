//! Locale symbols, currency data and unit names used by the formatter.
//!
//! This is a compact table covering the languages the plural rules support.
//! Full CLDR number data is the job of a locale data provider.

/// NO-BREAK SPACE
pub(crate) const NBSP: &str = "\u{A0}";
/// NARROW NO-BREAK SPACE
pub(crate) const NNBSP: &str = "\u{202F}";

/// Separators and adornment placement for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LocaleSymbols {
    pub decimal: &'static str,
    pub group: &'static str,
    /// Text between the number and `%`.
    pub percent_gap: &'static str,
    /// Currency symbols precede the number.
    pub currency_first: bool,
    /// Minimum integer digits before grouping applies under `auto`.
    pub min_grouping: usize,
}

const ENGLISH: LocaleSymbols = LocaleSymbols {
    decimal: ".",
    group: ",",
    percent_gap: "",
    currency_first: true,
    min_grouping: 4,
};

const GERMAN: LocaleSymbols = LocaleSymbols {
    decimal: ",",
    group: ".",
    percent_gap: NBSP,
    currency_first: false,
    min_grouping: 4,
};

const SPANISH: LocaleSymbols = LocaleSymbols {
    min_grouping: 5,
    ..GERMAN
};

const ITALIAN: LocaleSymbols = LocaleSymbols {
    percent_gap: "",
    ..GERMAN
};

const DUTCH: LocaleSymbols = LocaleSymbols {
    percent_gap: "",
    currency_first: true,
    ..GERMAN
};

const FRENCH: LocaleSymbols = LocaleSymbols {
    decimal: ",",
    group: NNBSP,
    percent_gap: NNBSP,
    currency_first: false,
    min_grouping: 4,
};

const SLAVIC: LocaleSymbols = LocaleSymbols {
    decimal: ",",
    group: NBSP,
    percent_gap: NBSP,
    currency_first: false,
    min_grouping: 4,
};

const POLISH: LocaleSymbols = LocaleSymbols {
    min_grouping: 5,
    ..SLAVIC
};

/// Primary language subtag of a BCP 47 tag, lowercased.
pub(crate) fn primary_language(locale: &str) -> String {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

pub(crate) fn locale_symbols(locale: &str) -> LocaleSymbols {
    match primary_language(locale).as_str() {
        "de" | "pt" | "id" | "tr" | "ro" | "el" | "da" => GERMAN,
        "es" => SPANISH,
        "it" => ITALIAN,
        "nl" => DUTCH,
        "fr" => FRENCH,
        "ru" | "uk" | "cs" | "sk" | "bg" | "sv" | "fi" | "nb" | "no" => SLAVIC,
        "pl" => POLISH,
        _ => ENGLISH,
    }
}

/// Display data for one ISO 4217 currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CurrencyInfo {
    pub code: &'static str,
    pub symbol: &'static str,
    pub narrow: &'static str,
    pub name_one: &'static str,
    pub name_other: &'static str,
    pub digits: u32,
}

const fn currency(
    code: &'static str,
    symbol: &'static str,
    narrow: &'static str,
    name_one: &'static str,
    name_other: &'static str,
    digits: u32,
) -> CurrencyInfo {
    CurrencyInfo {
        code,
        symbol,
        narrow,
        name_one,
        name_other,
        digits,
    }
}

const CURRENCIES: &[CurrencyInfo] = &[
    currency("AUD", "A$", "$", "Australian dollar", "Australian dollars", 2),
    currency("BHD", "BHD", "BHD", "Bahraini dinar", "Bahraini dinars", 3),
    currency("BRL", "R$", "R$", "Brazilian real", "Brazilian reals", 2),
    currency("CAD", "CA$", "$", "Canadian dollar", "Canadian dollars", 2),
    currency("CHF", "CHF", "CHF", "Swiss franc", "Swiss francs", 2),
    currency("CNY", "CN¥", "¥", "Chinese yuan", "Chinese yuan", 2),
    currency("EUR", "€", "€", "euro", "euros", 2),
    currency("GBP", "£", "£", "British pound", "British pounds", 2),
    currency("ILS", "₪", "₪", "Israeli new shekel", "Israeli new shekels", 2),
    currency("INR", "₹", "₹", "Indian rupee", "Indian rupees", 2),
    currency("JPY", "¥", "¥", "Japanese yen", "Japanese yen", 0),
    currency("KRW", "₩", "₩", "South Korean won", "South Korean won", 0),
    currency("KWD", "KWD", "KWD", "Kuwaiti dinar", "Kuwaiti dinars", 3),
    currency("MXN", "MX$", "$", "Mexican peso", "Mexican pesos", 2),
    currency("PLN", "PLN", "zł", "Polish zloty", "Polish zlotys", 2),
    currency("RUB", "RUB", "₽", "Russian ruble", "Russian rubles", 2),
    currency("SEK", "SEK", "kr", "Swedish krona", "Swedish kronor", 2),
    currency("USD", "$", "$", "US dollar", "US dollars", 2),
];

/// True for a well-formed ISO 4217 code (three ASCII letters).
pub(crate) fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Display data for `code`, if it is a known currency.
pub(crate) fn currency_info(code: &str) -> Option<CurrencyInfo> {
    CURRENCIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code))
        .copied()
}

/// Minor unit digits of `code`; unknown currencies use two.
pub(crate) fn currency_digits(code: &str) -> u32 {
    currency_info(code).map_or(2, |c| c.digits)
}

/// Display names for one measurement unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UnitInfo {
    pub id: &'static str,
    /// Empty when the short form is the long, pluralized name.
    pub short: &'static str,
    pub narrow: &'static str,
    pub long_one: &'static str,
    pub long_other: &'static str,
    /// Short and narrow forms attach to the number without a space.
    pub attached: bool,
}

const fn unit(
    id: &'static str,
    short: &'static str,
    narrow: &'static str,
    long_one: &'static str,
    long_other: &'static str,
    attached: bool,
) -> UnitInfo {
    UnitInfo {
        id,
        short,
        narrow,
        long_one,
        long_other,
        attached,
    }
}

const UNITS: &[UnitInfo] = &[
    unit("byte", "byte", "B", "byte", "bytes", false),
    unit("celsius", "°C", "°C", "degree Celsius", "degrees Celsius", true),
    unit("centimeter", "cm", "cm", "centimeter", "centimeters", false),
    unit("day", "", "d", "day", "days", false),
    unit("fahrenheit", "°F", "°", "degree Fahrenheit", "degrees Fahrenheit", true),
    unit("foot", "ft", "′", "foot", "feet", false),
    unit("gigabyte", "GB", "GB", "gigabyte", "gigabytes", false),
    unit("gram", "g", "g", "gram", "grams", false),
    unit("hour", "hr", "h", "hour", "hours", false),
    unit("inch", "in", "″", "inch", "inches", false),
    unit("kilobyte", "kB", "kB", "kilobyte", "kilobytes", false),
    unit("kilogram", "kg", "kg", "kilogram", "kilograms", false),
    unit("kilometer", "km", "km", "kilometer", "kilometers", false),
    unit("kilometer-per-hour", "km/h", "km/h", "kilometer per hour", "kilometers per hour", false),
    unit("liter", "L", "L", "liter", "liters", false),
    unit("megabyte", "MB", "MB", "megabyte", "megabytes", false),
    unit("meter", "m", "m", "meter", "meters", false),
    unit("mile", "mi", "mi", "mile", "miles", false),
    unit("mile-per-hour", "mph", "mph", "mile per hour", "miles per hour", false),
    unit("milliliter", "mL", "mL", "milliliter", "milliliters", false),
    unit("millimeter", "mm", "mm", "millimeter", "millimeters", false),
    unit("millisecond", "ms", "ms", "millisecond", "milliseconds", false),
    unit("minute", "min", "m", "minute", "minutes", false),
    unit("month", "", "m", "month", "months", false),
    unit("percent", "%", "%", "percent", "percent", true),
    unit("pound", "lb", "lb", "pound", "pounds", false),
    unit("second", "sec", "s", "second", "seconds", false),
    unit("terabyte", "TB", "TB", "terabyte", "terabytes", false),
    unit("week", "", "w", "week", "weeks", false),
    unit("year", "", "y", "year", "years", false),
];

/// True for a well-formed unit identifier such as `kilometer-per-hour`.
pub(crate) fn is_unit_identifier(unit: &str) -> bool {
    !unit.is_empty()
        && !unit.starts_with('-')
        && !unit.ends_with('-')
        && !unit.contains("--")
        && unit.bytes().all(|b| b.is_ascii_lowercase() || b == b'-')
}

/// Names for `unit`, if it is a known unit.
pub(crate) fn unit_info(unit: &str) -> Option<UnitInfo> {
    UNITS.iter().find(|u| u.id == unit).copied()
}

/// English compact suffixes indexed by thousands exponent (`10^(3 * i)`).
pub(crate) const COMPACT_SHORT: &[&str] = &["", "K", "M", "B", "T"];
pub(crate) const COMPACT_LONG: &[&str] = &["", "thousand", "million", "billion", "trillion"];
