//! Integration tests for text direction resolution and isolation.

use mf2::Direction;
use mf2::direction::{
    FSI, LRI, PDI, RLI, get_direction, get_locale_direction, is_isolation_char,
    wrap_with_isolation,
};

// =============================================================================
// Text Direction
// =============================================================================

#[test]
fn first_strong_character_decides() {
    assert_eq!(get_direction("hello"), Direction::Ltr);
    assert_eq!(get_direction("שלום"), Direction::Rtl);
    assert_eq!(get_direction("مرحبا world"), Direction::Rtl);
    assert_eq!(get_direction("world مرحبا"), Direction::Ltr);
}

#[test]
fn neutral_text_is_auto() {
    assert_eq!(get_direction(""), Direction::Auto);
    assert_eq!(get_direction("123"), Direction::Auto);
    assert_eq!(get_direction("  ...!?"), Direction::Auto);
}

#[test]
fn leading_neutrals_are_skipped() {
    assert_eq!(get_direction("42 שלום"), Direction::Rtl);
    assert_eq!(get_direction("(1) Übersicht"), Direction::Ltr);
}

#[test]
fn other_scripts_are_left_to_right() {
    assert_eq!(get_direction("Привет"), Direction::Ltr);
    assert_eq!(get_direction("こんにちは"), Direction::Ltr);
    assert_eq!(get_direction("ދިވެހި"), Direction::Rtl);
}

// =============================================================================
// Locale Direction
// =============================================================================

#[test]
fn rtl_locales() {
    for locale in ["ar", "ar-EG", "he", "fa-IR", "ur", "yi"] {
        assert_eq!(get_locale_direction(locale), Direction::Rtl, "{locale}");
    }
}

#[test]
fn ltr_and_unknown_locales() {
    for locale in ["en", "en-US", "de_DE", "zh-Hant", "", "xx"] {
        assert_eq!(get_locale_direction(locale), Direction::Ltr, "{locale:?}");
    }
}

#[test]
fn locale_subtag_is_case_insensitive() {
    assert_eq!(get_locale_direction("AR"), Direction::Rtl);
    assert_eq!(get_locale_direction("He-IL"), Direction::Rtl);
}

// =============================================================================
// Isolation
// =============================================================================

#[test]
fn wraps_with_matching_isolates() {
    assert_eq!(wrap_with_isolation("abc", "ltr"), format!("{LRI}abc{PDI}"));
    assert_eq!(wrap_with_isolation("abc", "rtl"), format!("{RLI}abc{PDI}"));
    assert_eq!(wrap_with_isolation("abc", "auto"), format!("{FSI}abc{PDI}"));
}

#[test]
fn unknown_direction_is_left_alone() {
    assert_eq!(wrap_with_isolation("abc", "sideways"), "abc");
    assert_eq!(wrap_with_isolation("abc", "LTR"), "abc");
    assert_eq!(wrap_with_isolation("", "none"), "");
}

#[test]
fn empty_text_still_gets_isolates() {
    assert_eq!(wrap_with_isolation("", "rtl"), format!("{RLI}{PDI}"));
}

#[test]
fn isolation_characters() {
    for c in [LRI, RLI, FSI, PDI] {
        assert!(is_isolation_char(c));
    }
    assert!(!is_isolation_char('\u{200E}'));
    assert!(!is_isolation_char('a'));
}

#[test]
fn direction_keywords_round_trip() {
    for dir in [Direction::Ltr, Direction::Rtl, Direction::Auto] {
        assert_eq!(Direction::parse(dir.as_str()), Some(dir));
        assert_eq!(dir.to_string(), dir.as_str());
    }
    assert_eq!(Direction::parse("inherit"), None);
}
