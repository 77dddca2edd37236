//! Execution context handed to every message function.

use std::collections::BTreeSet;
use std::mem;
use std::sync::Arc;

use bon::Builder;
use tracing::debug;

use crate::direction::{Direction, get_locale_direction};
use crate::error::MessageError;
use crate::values::{FallbackValue, MessageValue};

/// Callback receiving each error reported during resolution.
pub type ErrorSink<'a> = Box<dyn FnMut(&MessageError) + 'a>;

/// Per-call state for one expression.
///
/// The context carries:
/// - The caller's locale preferences, most preferred first
/// - The expression source, used to attribute errors and build fallbacks
/// - The names of options whose values were literals in the source
/// - An optional direction override and expression id
/// - The errors reported so far, in order
///
/// # Example
///
/// ```
/// use mf2::functions::FunctionContext;
///
/// let ctx = FunctionContext::builder()
///     .locales(vec!["fr-CA".to_string(), "en".to_string()])
///     .source("$count")
///     .build();
/// assert_eq!(ctx.locale(), "fr-CA");
/// assert_eq!(ctx.locale_matcher(), "best fit");
/// ```
#[derive(Builder)]
pub struct FunctionContext<'a> {
    #[builder(default)]
    locales: Vec<String>,
    #[builder(into, default)]
    source: String,
    #[builder(into, default = "best fit".to_string())]
    locale_matcher: String,
    /// Option names supplied as literals rather than variable references.
    #[builder(default)]
    literal_options: BTreeSet<String>,
    dir: Option<Direction>,
    #[builder(into)]
    id: Option<String>,
    #[builder(skip)]
    errors: Vec<MessageError>,
    #[builder(skip)]
    on_error: Option<ErrorSink<'a>>,
}

impl<'a> FunctionContext<'a> {
    /// Installs the callback invoked for every reported error.
    pub fn with_error_sink(mut self, sink: impl FnMut(&MessageError) + 'a) -> Self {
        self.on_error = Some(Box::new(sink));
        self
    }

    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    /// The most preferred locale, `en` when none was given.
    pub fn locale(&self) -> &str {
        self.locales.first().map_or("en", String::as_str)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn locale_matcher(&self) -> &str {
        &self.locale_matcher
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The direction override, if any.
    pub fn dir_override(&self) -> Option<Direction> {
        self.dir
    }

    /// The override, or the direction of the current locale.
    pub fn dir(&self) -> Direction {
        self.dir
            .unwrap_or_else(|| get_locale_direction(self.locale()))
    }

    /// Whether option `name` was written as a literal in the source.
    pub fn is_literal_option(&self, name: &str) -> bool {
        self.literal_options.contains(name)
    }

    /// Records `error` and passes it to the sink.
    pub fn report(&mut self, error: MessageError) {
        debug!(
            error_type = error.error_type(),
            source = %self.source,
            "{error}"
        );
        if let Some(sink) = self.on_error.as_mut() {
            sink(&error);
        }
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[MessageError] {
        &self.errors
    }

    /// Drains the recorded errors.
    pub fn take_errors(&mut self) -> Vec<MessageError> {
        mem::take(&mut self.errors)
    }

    /// A fallback for the current expression.
    pub fn fallback(&self) -> Arc<dyn MessageValue> {
        Arc::new(FallbackValue::with_locale(&self.source, self.locale()))
    }

    /// Reports `error` and returns a fallback for the current expression.
    pub(crate) fn fail(&mut self, error: MessageError) -> Arc<dyn MessageValue> {
        self.report(error);
        self.fallback()
    }
}
