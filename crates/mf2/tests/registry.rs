//! Integration tests for the function registry.

use std::sync::Arc;
use std::thread;

use mf2::functions::FunctionRegistry;
use mf2::values::StringValue;
use mf2::{Direction, FunctionContext, MessageValue, Options, Value, options};

fn call(registry: &FunctionRegistry, name: &str, operand: Value) -> String {
    let function = registry.get(name).unwrap();
    let mut ctx = FunctionContext::builder()
        .locales(vec!["en".to_string()])
        .source("$x")
        .build();
    function(&mut ctx, &options! {}, Some(&operand))
        .format_string()
        .unwrap()
}

fn shout(
    ctx: &mut FunctionContext<'_>,
    _options: &Options,
    operand: Option<&Value>,
) -> Arc<dyn MessageValue> {
    let text = operand.map(|v| v.to_string().to_uppercase()).unwrap_or_default();
    Arc::new(StringValue::new(
        ctx.source(),
        ctx.locale(),
        Direction::Auto,
        Options::new(),
        text,
    ))
}

// =============================================================================
// Presets
// =============================================================================

#[test]
fn defaults_hold_the_stable_functions() {
    let registry = FunctionRegistry::with_defaults();
    assert_eq!(registry.list(), ["integer", "number", "offset", "string"]);
    assert_eq!(registry.len(), 4);
}

#[test]
fn draft_adds_the_draft_functions() {
    let registry = FunctionRegistry::with_draft();
    assert_eq!(
        registry.list(),
        [
            "currency", "date", "datetime", "integer", "math", "number", "offset", "percent",
            "string", "time", "unit",
        ]
    );
    assert_eq!(call(&registry, "percent", Value::from(0.5)), "50%");
}

#[test]
fn new_registry_is_empty() {
    let registry = FunctionRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.get("number").is_none());
}

#[test]
fn builtin_names() {
    assert!(FunctionRegistry::is_builtin("number"));
    assert!(FunctionRegistry::is_builtin("datetime"));
    assert!(!FunctionRegistry::is_builtin("shout"));
}

// =============================================================================
// Lookup and Registration
// =============================================================================

#[test]
fn lookup_is_case_sensitive() {
    let registry = FunctionRegistry::with_defaults();
    assert!(registry.get("number").is_some());
    assert!(registry.get("Number").is_none());
    assert!(!registry.contains("NUMBER"));
}

#[test]
fn register_adds_and_replaces() {
    let registry = FunctionRegistry::with_defaults();
    registry.register("shout", shout);
    assert_eq!(call(&registry, "shout", Value::from("hey")), "HEY");

    registry.register("number", shout);
    assert_eq!(call(&registry, "number", Value::from("one")), "ONE");
    assert_eq!(registry.len(), 5);
}

#[test]
fn register_accepts_closures() {
    let registry = FunctionRegistry::new();
    let suffix = "!".to_string();
    registry.register("bang", move |ctx, _options, operand| {
        let text = operand.map(ToString::to_string).unwrap_or_default();
        Arc::new(StringValue::new(
            ctx.source(),
            ctx.locale(),
            Direction::Auto,
            Options::new(),
            format!("{text}{suffix}"),
        )) as Arc<dyn MessageValue>
    });
    assert_eq!(call(&registry, "bang", Value::from("go")), "go!");
}

// =============================================================================
// Clone and Merge
// =============================================================================

#[test]
fn clones_are_independent() {
    let original = FunctionRegistry::with_defaults();
    let copy = original.clone();
    copy.register("shout", shout);
    assert!(copy.contains("shout"));
    assert!(!original.contains("shout"));
}

#[test]
fn presets_are_not_shared() {
    let first = FunctionRegistry::with_defaults();
    first.register("shout", shout);
    assert!(!FunctionRegistry::with_defaults().contains("shout"));
}

#[test]
fn merge_prefers_incoming_entries() {
    let base = FunctionRegistry::with_defaults();
    let overrides = FunctionRegistry::new();
    overrides.register("string", shout);
    overrides.register("shout", shout);

    base.merge(&overrides);
    assert_eq!(call(&base, "string", Value::from("quiet")), "QUIET");
    assert!(base.contains("shout"));
    assert!(base.contains("number"));
    assert_eq!(overrides.len(), 2);
}

#[test]
fn merge_with_self_copy_is_harmless() {
    let registry = FunctionRegistry::with_defaults();
    let snapshot = registry.clone();
    registry.merge(&snapshot);
    assert_eq!(registry.list(), snapshot.list());
}

// =============================================================================
// Suggestions and Concurrency
// =============================================================================

#[test]
fn suggestions_for_misspelled_names() {
    let registry = FunctionRegistry::with_draft();
    assert_eq!(registry.suggestions("numbr"), ["number"]);
    assert_eq!(registry.suggestions("dat"), ["date"]);
    assert!(registry.suggestions("xyzzy").is_empty());
}

#[test]
fn shared_registry_across_threads() {
    let registry = FunctionRegistry::with_defaults();
    thread::scope(|scope| {
        for n in 0..4 {
            let registry = &registry;
            scope.spawn(move || {
                assert_eq!(call(registry, "number", Value::Int(n)), n.to_string());
            });
        }
        scope.spawn(|| registry.register("shout", shout));
    });
    assert!(registry.contains("shout"));
}

#[test]
fn debug_lists_names() {
    let registry = FunctionRegistry::with_defaults();
    let debug = format!("{registry:?}");
    assert!(debug.contains("\"offset\""), "{debug}");
}
