//! CLDR plural category resolution.
//!
//! Cardinal and ordinal rules come from `icu_plurals`. Rules are cached per
//! thread per language so repeated selection does not rebuild them.
//!
//! Only integral operands consult the CLDR rules. Fractional operands map to
//! `other`, which is an approximation and not full CLDR plural handling.

use std::cell::RefCell;

use icu_locale_core::{Locale, locale};
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};

use crate::number::symbols::primary_language;

/// Supported language codes for plural rule resolution.
const SUPPORTED_LANGUAGES: &[&str] = &[
    "ar", "bn", "de", "el", "en", "es", "fa", "fr", "he", "hi", "id", "it", "ja", "ko", "nl", "pl",
    "pt", "ro", "ru", "th", "tr", "uk", "vi", "zh",
];

thread_local! {
    static CARDINAL_RULES: RefCell<Vec<(&'static str, PluralRules)>> =
        const { RefCell::new(Vec::new()) };
    static ORDINAL_RULES: RefCell<Vec<(&'static str, PluralRules)>> =
        const { RefCell::new(Vec::new()) };
}

/// Which plural rule set to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralKind {
    Cardinal,
    Ordinal,
}

/// Normalize a locale to a supported language code, `"en"` when unknown.
fn normalize_lang(locale: &str) -> &'static str {
    let lang = primary_language(locale);
    SUPPORTED_LANGUAGES
        .iter()
        .find(|&&code| code == lang)
        .copied()
        .unwrap_or("en")
}

fn language_locale(lang: &'static str) -> Locale {
    match lang {
        "ar" => locale!("ar"),
        "bn" => locale!("bn"),
        "de" => locale!("de"),
        "el" => locale!("el"),
        "es" => locale!("es"),
        "fa" => locale!("fa"),
        "fr" => locale!("fr"),
        "he" => locale!("he"),
        "hi" => locale!("hi"),
        "id" => locale!("id"),
        "it" => locale!("it"),
        "ja" => locale!("ja"),
        "ko" => locale!("ko"),
        "nl" => locale!("nl"),
        "pl" => locale!("pl"),
        "pt" => locale!("pt"),
        "ro" => locale!("ro"),
        "ru" => locale!("ru"),
        "th" => locale!("th"),
        "tr" => locale!("tr"),
        "uk" => locale!("uk"),
        "vi" => locale!("vi"),
        "zh" => locale!("zh"),
        _ => locale!("en"),
    }
}

fn build_rules(lang: &'static str, kind: PluralKind) -> PluralRules {
    let rule_type = match kind {
        PluralKind::Cardinal => PluralRuleType::Cardinal,
        PluralKind::Ordinal => PluralRuleType::Ordinal,
    };
    PluralRules::try_new(language_locale(lang).into(), rule_type.into())
        .expect("locale should be supported")
}

fn category_str(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

/// CLDR plural category of an integer in the language of `locale`.
///
/// # Examples
///
/// ```
/// use mf2::number::{PluralKind, plural_category};
///
/// assert_eq!(plural_category("en", PluralKind::Cardinal, 1), "one");
/// assert_eq!(plural_category("en-US", PluralKind::Cardinal, 2), "other");
/// assert_eq!(plural_category("en", PluralKind::Ordinal, 2), "two");
/// assert_eq!(plural_category("ru", PluralKind::Cardinal, 5), "many");
/// ```
pub fn plural_category(locale: &str, kind: PluralKind, n: i64) -> &'static str {
    let lang = normalize_lang(locale);
    let cache = match kind {
        PluralKind::Cardinal => &CARDINAL_RULES,
        PluralKind::Ordinal => &ORDINAL_RULES,
    };
    cache.with_borrow_mut(|cache| {
        if let Some(entry) = cache.iter().find(|(code, _)| *code == lang) {
            return category_str(entry.1.category_for(n));
        }
        let rules = build_rules(lang, kind);
        let category = category_str(rules.category_for(n));
        cache.push((lang, rules));
        category
    })
}
