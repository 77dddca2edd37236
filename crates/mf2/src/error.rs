//! Error types for message construction and resolution.

use thiserror::Error;

/// An error raised while building a message or resolving one of its
/// expressions.
///
/// Every variant maps to one stable type string (see [`MessageError::error_type`])
/// which consumers match on instead of the display text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// The syntax tree carried an error node; offsets are byte positions.
    #[error("syntax error at {start}..{end}: {message}")]
    Syntax {
        start: usize,
        end: usize,
        message: String,
    },

    /// The syntax tree is well-formed but violates a data model constraint.
    #[error("data model error at {start}..{end}: {message}")]
    DataModel {
        start: usize,
        end: usize,
        message: String,
    },

    /// The operand of a function cannot be used by it.
    #[error("bad operand for {expression}: {message}")]
    BadOperand { expression: String, message: String },

    /// An option value was rejected; the option is ignored.
    #[error("bad option '{name}' for {expression}: {message}")]
    BadOption {
        expression: String,
        name: String,
        message: String,
    },

    /// A value cannot be used as a selector.
    #[error("bad selector {expression}: {message}")]
    BadSelector { expression: String, message: String },

    /// A variable reference has no value.
    #[error("unresolved variable ${name}")]
    UnresolvedVariable { name: String },

    /// The requested operation is not supported for this operand.
    #[error("unsupported operation for {expression}: {message}")]
    UnsupportedOperation { expression: String, message: String },

    /// A function produced a value that cannot be used.
    #[error("bad function result for {expression}: {message}")]
    BadFunctionResult { expression: String, message: String },
}

impl MessageError {
    /// Stable type tag for this error.
    pub fn error_type(&self) -> &'static str {
        match self {
            MessageError::Syntax { .. } => "syntax-error",
            MessageError::DataModel { .. } => "data-model-error",
            MessageError::BadOperand { .. } => "bad-operand",
            MessageError::BadOption { .. } => "bad-option",
            MessageError::BadSelector { .. } => "bad-selector",
            MessageError::UnresolvedVariable { .. } => "unresolved-variable",
            MessageError::UnsupportedOperation { .. } => "unsupported-operation",
            MessageError::BadFunctionResult { .. } => "bad-function-result",
        }
    }

    pub(crate) fn bad_operand(expression: &str, message: impl Into<String>) -> Self {
        MessageError::BadOperand {
            expression: expression.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn bad_option(
        expression: &str,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        MessageError::BadOption {
            expression: expression.to_string(),
            name: name.into(),
            message: message.into(),
        }
    }

    pub(crate) fn not_selectable(expression: &str) -> Self {
        MessageError::BadSelector {
            expression: expression.to_string(),
            message: "value is not selectable".to_string(),
        }
    }

    pub(crate) fn unsupported(expression: &str, message: impl Into<String>) -> Self {
        MessageError::UnsupportedOperation {
            expression: expression.to_string(),
            message: message.into(),
        }
    }
}
