//! Property tests for invariants that hold for every input.

use mf2::direction::{PDI, is_isolation_char, wrap_with_isolation};
use mf2::functions::{FunctionContext, number, percent, string};
use mf2::number::{NumberFormatOptions, Numeric, format_number};
use mf2::{MessageValue, Value, options};
use proptest::prelude::*;

fn ctx() -> FunctionContext<'static> {
    FunctionContext::builder()
        .locales(vec!["en".to_string()])
        .source("$x")
        .build()
}

proptest! {
    #[test]
    fn value_of_returns_the_integer_operand(n in any::<i64>()) {
        let mut ctx = ctx();
        let value = number(&mut ctx, &options! {}, Some(&Value::Int(n)));
        prop_assert_eq!(value.value_of(), Value::Int(n));
        let value = percent(&mut ctx, &options! {}, Some(&Value::Int(n)));
        prop_assert_eq!(value.value_of(), Value::Int(n));
    }

    #[test]
    fn value_of_returns_the_float_operand(f in -1.0e12f64..1.0e12) {
        let mut ctx = ctx();
        let opts = options! { "maximumFractionDigits" => 1 };
        let value = number(&mut ctx, &opts, Some(&Value::Float(f)));
        prop_assert_eq!(value.value_of(), Value::Float(f));
        prop_assert!(ctx.errors().is_empty());
    }

    #[test]
    fn exact_numeric_key_always_wins(n in -10_000i64..10_000) {
        let mut ctx = ctx();
        let value = number(&mut ctx, &options! {}, Some(&Value::Int(n)));
        let exact = format!("={n}");
        let keys = vec!["one".to_string(), "other".to_string(), exact.clone()];
        prop_assert_eq!(value.select_keys(&keys).unwrap(), vec![exact]);
    }

    #[test]
    fn string_selection_matches_itself(s in "[a-zA-Z0-9 ]{0,16}") {
        let mut ctx = ctx();
        let value = string(&mut ctx, &options! {}, Some(&Value::from(s.as_str())));
        let keys = vec![s.clone(), format!("{s}_")];
        prop_assert_eq!(value.select_keys(&keys).unwrap(), vec![s]);
    }

    #[test]
    fn parts_concatenate_to_the_string(n in any::<i64>(), digits in 0u32..4) {
        let opts = NumberFormatOptions::builder()
            .minimum_fraction_digits(digits)
            .build();
        let formatted = format_number(&Numeric::Int(n), &opts, "de");
        let joined: String = formatted.parts().iter().map(|p| p.value.as_str()).collect();
        prop_assert_eq!(joined, formatted.to_string());
    }

    #[test]
    fn isolation_wraps_and_unwraps(s in "[^\u{2066}-\u{2069}]{0,24}", dir in "ltr|rtl|auto") {
        let wrapped = wrap_with_isolation(&s, &dir);
        let mut chars = wrapped.chars();
        prop_assert!(chars.next().is_some_and(is_isolation_char));
        prop_assert_eq!(chars.next_back(), Some(PDI));
        prop_assert_eq!(chars.as_str(), s.as_str());
    }

    #[test]
    fn unknown_direction_leaves_text_unchanged(s in ".{0,24}", dir in "[a-z]{0,6}") {
        prop_assume!(!matches!(dir.as_str(), "ltr" | "rtl" | "auto"));
        prop_assert_eq!(wrap_with_isolation(&s, &dir), s);
    }
}
