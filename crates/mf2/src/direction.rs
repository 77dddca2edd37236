//! Bidirectional text direction resolution.
//!
//! Directions are decided by Unicode block membership of the first strongly
//! directional character, which is enough to pick an isolate for the
//! formatted output of an expression.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

/// LEFT-TO-RIGHT ISOLATE
pub const LRI: char = '\u{2066}';
/// RIGHT-TO-LEFT ISOLATE
pub const RLI: char = '\u{2067}';
/// FIRST STRONG ISOLATE
pub const FSI: char = '\u{2068}';
/// POP DIRECTIONAL ISOLATE
pub const PDI: char = '\u{2069}';

/// Primary language subtags written right-to-left.
const RTL_LANGUAGES: &[&str] = &["ar", "he", "fa", "ur", "yi"];

/// Code point ranges of right-to-left scripts.
const RTL_RANGES: &[(u32, u32)] = &[
    (0x0590, 0x05FF),   // Hebrew
    (0x0600, 0x06FF),   // Arabic
    (0x0700, 0x074F),   // Syriac
    (0x0750, 0x077F),   // Arabic Supplement
    (0x0780, 0x07BF),   // Thaana
    (0x07C0, 0x07FF),   // NKo
    (0x0800, 0x083F),   // Samaritan
    (0x0840, 0x085F),   // Mandaic
    (0x0860, 0x086F),   // Syriac Supplement
    (0x0870, 0x08FF),   // Arabic Extended-B, Extended-A
    (0xFB1D, 0xFB4F),   // Hebrew presentation forms
    (0xFB50, 0xFDFF),   // Arabic Presentation Forms-A
    (0xFE70, 0xFEFF),   // Arabic Presentation Forms-B
    (0x10800, 0x10FFF), // Historic RTL scripts
    (0x1E800, 0x1EFFF), // Mende Kikakui, Adlam, Arabic math
];

/// A resolved text direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
    Auto,
}

impl Direction {
    /// Parse one of `ltr`, `rtl` or `auto`.
    pub fn parse(s: &str) -> Option<Direction> {
        match s {
            "ltr" => Some(Direction::Ltr),
            "rtl" => Some(Direction::Rtl),
            "auto" => Some(Direction::Auto),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
            Direction::Auto => "auto",
        }
    }

    /// The isolate initiator for this direction.
    pub fn isolate_start(&self) -> char {
        match self {
            Direction::Ltr => LRI,
            Direction::Rtl => RLI,
            Direction::Auto => FSI,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

fn is_rtl_char(c: char) -> bool {
    let cp = u32::from(c);
    RTL_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&cp))
}

/// Direction of `text`, decided by its first strongly directional character.
///
/// Returns [`Direction::Auto`] when the text has no strong character (digits,
/// punctuation, whitespace or empty input).
///
/// # Examples
///
/// ```
/// use mf2::direction::{Direction, get_direction};
///
/// assert_eq!(get_direction("hello"), Direction::Ltr);
/// assert_eq!(get_direction("123 שלום"), Direction::Rtl);
/// assert_eq!(get_direction("42!"), Direction::Auto);
/// ```
pub fn get_direction(text: &str) -> Direction {
    for c in text.chars() {
        if is_rtl_char(c) {
            return Direction::Rtl;
        }
        if c.is_alphabetic() {
            return Direction::Ltr;
        }
    }
    Direction::Auto
}

/// Direction of a locale, from its primary language subtag.
///
/// Unknown and empty locales are left-to-right.
pub fn get_locale_direction(locale: &str) -> Direction {
    let primary = locale
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    if RTL_LANGUAGES.contains(&primary.as_str()) {
        Direction::Rtl
    } else {
        Direction::Ltr
    }
}

/// Wraps `text` in the isolate pair for `dir` (`ltr`, `rtl` or `auto`).
///
/// Any other `dir` returns the text unchanged.
pub fn wrap_with_isolation(text: &str, dir: &str) -> String {
    match Direction::parse(dir) {
        Some(direction) => {
            let mut wrapped = String::with_capacity(text.len() + 6);
            wrapped.push(direction.isolate_start());
            wrapped.push_str(text);
            wrapped.push(PDI);
            wrapped
        }
        None => text.to_string(),
    }
}

/// True for the four isolate control characters.
pub fn is_isolation_char(c: char) -> bool {
    matches!(c, LRI | RLI | FSI | PDI)
}
