//! Variant key matching for numeric values.

use crate::number::options::SelectMode;
use crate::number::plural::{PluralKind, plural_category};
use crate::number::{Digits, Numeric};
use crate::types::Decimal;

/// Shortest plain decimal rendering of a number, used for exact key matches.
///
/// Non-finite values render as `NaN`, `Infinity` and `-Infinity`.
///
/// ```
/// use mf2::number::{Numeric, canonical_string};
///
/// assert_eq!(canonical_string(&Numeric::Float(1.50)), "1.5");
/// assert_eq!(canonical_string(&Numeric::Int(-3)), "-3");
/// ```
pub fn canonical_string(value: &Numeric) -> String {
    match Digits::from_numeric(value) {
        Some(digits) => digits.canonical(),
        None => {
            let f = value.to_f64();
            if f.is_nan() {
                "NaN".to_string()
            } else if f.is_sign_negative() {
                "-Infinity".to_string()
            } else {
                "Infinity".to_string()
            }
        }
    }
}

/// Keys matching `value`, in the order exact matches take priority.
///
/// `value` is the effective value: callers apply any display scaling (percent)
/// before selecting. At most one key is returned.
pub fn select_number_keys(
    value: &Numeric,
    select: SelectMode,
    locale: &str,
    keys: &[String],
) -> Vec<String> {
    let canonical = canonical_string(value);

    let numeric_match = keys.iter().find(|key| {
        key.strip_prefix('=')
            .and_then(|n| n.parse::<Decimal>().ok())
            .is_some_and(|n| canonical_string(&Numeric::Decimal(n)) == canonical)
    });
    if let Some(key) = numeric_match {
        return vec![key.clone()];
    }

    if let Some(key) = keys.iter().find(|key| **key == canonical) {
        return vec![key.clone()];
    }

    let kind = match select {
        SelectMode::Exact => return Vec::new(),
        SelectMode::Plural => PluralKind::Cardinal,
        SelectMode::Ordinal => PluralKind::Ordinal,
    };
    let category = match value.as_integer() {
        Some(n) => plural_category(locale, kind, n),
        None => "other",
    };
    keys.iter()
        .find(|key| key.as_str() == category)
        .map(|key| vec![key.clone()])
        .unwrap_or_default()
}
