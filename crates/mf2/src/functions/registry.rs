//! Function registry mapping function names to implementations.

use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::{Arc, LazyLock, RwLock};

use strsim::levenshtein;
use tracing::trace;

use crate::functions::{FunctionContext, datetime, number, string};
use crate::types::{Options, Value};
use crate::values::MessageValue;

/// A message function: context, options and optional operand in, resolved
/// value out.
///
/// Functions never fail outright. Problems are reported through the context
/// and answered with a fallback value.
pub type MessageFunction = Arc<
    dyn Fn(&mut FunctionContext<'_>, &Options, Option<&Value>) -> Arc<dyn MessageValue>
        + Send
        + Sync,
>;

/// Functions every registry preset includes.
const STABLE: &[&str] = &["integer", "number", "offset", "string"];

/// Functions added by [`FunctionRegistry::with_draft`].
const DRAFT: &[&str] = &["currency", "date", "datetime", "math", "percent", "time", "unit"];

static DEFAULT_FUNCTIONS: LazyLock<FunctionRegistry> = LazyLock::new(|| {
    let registry = FunctionRegistry::new();
    registry.register("integer", number::integer);
    registry.register("number", number::number);
    registry.register("offset", number::offset);
    registry.register("string", string::string);
    registry
});

static DRAFT_FUNCTIONS: LazyLock<FunctionRegistry> = LazyLock::new(|| {
    let registry = DEFAULT_FUNCTIONS.clone();
    registry.register("currency", number::currency);
    registry.register("date", datetime::date);
    registry.register("datetime", datetime::datetime);
    registry.register("math", number::math);
    registry.register("percent", number::percent);
    registry.register("time", datetime::time);
    registry.register("unit", number::unit);
    registry
});

/// A registry of message functions, looked up by exact name.
///
/// Reads take a shared lock; [`register`](Self::register) and
/// [`merge`](Self::merge) take the exclusive lock. Cloning produces an
/// independent registry.
///
/// # Example
///
/// ```
/// use mf2::functions::FunctionRegistry;
///
/// let registry = FunctionRegistry::with_defaults();
/// assert!(registry.contains("number"));
/// assert!(!registry.contains("Number"));
/// assert!(!registry.contains("percent"));
/// ```
pub struct FunctionRegistry {
    functions: RwLock<BTreeMap<String, MessageFunction>>,
}

impl FunctionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            functions: RwLock::new(BTreeMap::new()),
        }
    }

    /// A registry holding the stable built-in functions.
    pub fn with_defaults() -> Self {
        DEFAULT_FUNCTIONS.clone()
    }

    /// A registry holding the stable and draft built-in functions.
    pub fn with_draft() -> Self {
        DRAFT_FUNCTIONS.clone()
    }

    /// Registers `function` under `name`, replacing any previous entry.
    pub fn register<F>(&self, name: impl Into<String>, function: F)
    where
        F: Fn(&mut FunctionContext<'_>, &Options, Option<&Value>) -> Arc<dyn MessageValue>
            + Send
            + Sync
            + 'static,
    {
        let name = name.into();
        trace!(function = %name, "registering message function");
        self.functions
            .write()
            .expect("function registry lock poisoned")
            .insert(name, Arc::new(function));
    }

    /// Get a function by name.
    pub fn get(&self, name: &str) -> Option<MessageFunction> {
        self.functions
            .read()
            .expect("function registry lock poisoned")
            .get(name)
            .cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions
            .read()
            .expect("function registry lock poisoned")
            .contains_key(name)
    }

    /// Names of all registered functions, sorted.
    pub fn list(&self) -> Vec<String> {
        self.functions
            .read()
            .expect("function registry lock poisoned")
            .keys()
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.functions
            .read()
            .expect("function registry lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies every function of `other` into this registry. Entries of
    /// `other` win on name collisions.
    pub fn merge(&self, other: &FunctionRegistry) {
        let incoming = other
            .functions
            .read()
            .expect("function registry lock poisoned")
            .clone();
        trace!(count = incoming.len(), "merging message functions");
        self.functions
            .write()
            .expect("function registry lock poisoned")
            .extend(incoming);
    }

    /// Registered names close to `name`, closest first, for diagnostics
    /// about unknown functions.
    ///
    /// Short names allow one edit, longer names two. At most three names
    /// are returned.
    pub fn suggestions(&self, name: &str) -> Vec<String> {
        let max_distance = if name.chars().count() <= 3 { 1 } else { 2 };
        let mut candidates: Vec<(usize, String)> = self
            .list()
            .into_iter()
            .map(|candidate| (levenshtein(name, &candidate), candidate))
            .filter(|(distance, _)| *distance <= max_distance)
            .collect();
        candidates.sort();
        candidates
            .into_iter()
            .take(3)
            .map(|(_, candidate)| candidate)
            .collect()
    }

    /// Whether `name` is one of the built-in function names.
    pub fn is_builtin(name: &str) -> bool {
        STABLE.contains(&name) || DRAFT.contains(&name)
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for FunctionRegistry {
    fn clone(&self) -> Self {
        Self {
            functions: RwLock::new(
                self.functions
                    .read()
                    .expect("function registry lock poisoned")
                    .clone(),
            ),
        }
    }
}

impl Debug for FunctionRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("FunctionRegistry")
            .field("functions", &self.list())
            .finish()
    }
}
