//! The MessageFormat 2 data model.
//!
//! Messages are immutable once built by [`from_cst`](crate::model::from_cst()).

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::types::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Pattern(PatternMessage),
    Select(SelectMessage),
}

impl Message {
    pub fn declarations(&self) -> &[Declaration] {
        match self {
            Message::Pattern(message) => &message.declarations,
            Message::Select(message) => &message.declarations,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatternMessage {
    pub declarations: Vec<Declaration>,
    pub pattern: Pattern,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectMessage {
    pub declarations: Vec<Declaration>,
    pub selectors: Vec<Expression>,
    pub variants: Vec<Variant>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    /// Binds `name` to an expression whose argument is `$name`.
    Input { name: String, value: Expression },
    Local { name: String, value: Expression },
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Input { name, .. } | Declaration::Local { name, .. } => name,
        }
    }

    pub fn value(&self) -> &Expression {
        match self {
            Declaration::Input { value, .. } | Declaration::Local { value, .. } => value,
        }
    }
}

pub type Pattern = Vec<PatternElement>;

#[derive(Debug, Clone, PartialEq)]
pub enum PatternElement {
    Text(String),
    Expression(Expression),
    Markup(Markup),
}

/// Attribute values; a valueless attribute is `True`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Literal(String),
    True,
}

pub type Attributes = IndexMap<String, AttributeValue>;

#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub arg: Option<Argument>,
    pub function: Option<FunctionRef>,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Literal(String),
    Variable(String),
    /// A value resolved before the message was built.
    Value(Value),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionRef {
    pub name: String,
    pub options: IndexMap<String, Argument>,
}

impl FunctionRef {
    /// Names of the options written as literals, for
    /// [`FunctionContext`](crate::functions::FunctionContext).
    pub fn literal_options(&self) -> BTreeSet<String> {
        self.options
            .iter()
            .filter(|(_, value)| matches!(value, Argument::Literal(_)))
            .map(|(name, _)| name.clone())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupKind {
    Open,
    Close,
    Standalone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Markup {
    pub kind: MarkupKind,
    pub name: String,
    pub options: IndexMap<String, Argument>,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub keys: Vec<VariantKey>,
    pub value: Pattern,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantKey {
    Literal(String),
    Catchall { value: Option<String> },
}
