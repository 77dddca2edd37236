//! Concrete syntax tree types consumed by the data model builder.
//!
//! A parser produces these nodes; every node keeps the byte offsets of the
//! source it was read from so construction errors can point back at it.

/// Byte offsets of a node in the message source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A syntax error the parser recorded and recovered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub span: Span,
    pub message: String,
}

/// A parsed message. `errors` is empty for a well-formed message.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub span: Span,
    pub body: MessageBody,
    pub errors: Vec<SyntaxError>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessageBody {
    /// A pattern with no declarations and no `{{ }}` quoting.
    Simple(Pattern),
    /// Declarations followed by a quoted pattern.
    Complex {
        declarations: Vec<Declaration>,
        pattern: Pattern,
    },
    /// Declarations followed by `.match` selectors and variants.
    Select {
        declarations: Vec<Declaration>,
        selectors: Vec<Expression>,
        variants: Vec<Variant>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    /// `.input {$name ...}`
    Input { span: Span, value: Expression },
    /// `.local $target = {...}`
    Local {
        span: Span,
        target: VariableRef,
        value: Expression,
    },
    Junk(Junk),
}

/// Unparseable source the parser skipped over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Junk {
    pub span: Span,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    pub span: Span,
    pub body: Vec<PatternNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PatternNode {
    Text { span: Span, value: String },
    Expression(Expression),
    Junk(Junk),
}

/// A `{...}` placeholder. Markup placeholders carry `markup` instead of an
/// argument or function.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub span: Span,
    pub arg: Option<Argument>,
    pub function: Option<FunctionRef>,
    pub markup: Option<MarkupRef>,
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Literal(Literal),
    Variable(VariableRef),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub span: Span,
    /// Written as `|...|`.
    pub quoted: bool,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableRef {
    pub span: Span,
    /// The name without its `$` sigil.
    pub name: String,
}

/// One lexical piece of an identifier: a name or the `:` separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentToken {
    pub span: Span,
    pub value: String,
}

/// An identifier as tokens: `[name]` or `[namespace, ":", name]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub span: Span,
    pub tokens: Vec<IdentToken>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionRef {
    pub span: Span,
    pub name: Identifier,
    pub options: Vec<FunctionOption>,
}

/// `name=value` inside a function or markup.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionOption {
    pub span: Span,
    pub name: Identifier,
    pub value: Argument,
}

/// Markup head: `#name` opens, `/name` closes, `#name /` stands alone.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupRef {
    pub span: Span,
    /// `#` or `/`.
    pub open: char,
    pub name: Identifier,
    pub options: Vec<FunctionOption>,
    /// `/` for self-closing markup.
    pub close: Option<char>,
}

/// `@name` or `@name=literal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub span: Span,
    pub name: Identifier,
    pub value: Option<Literal>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub span: Span,
    pub keys: Vec<Key>,
    pub value: Pattern,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Literal(Literal),
    /// `*`; `value` keeps the source text when the parser recorded one.
    Catchall { span: Span, value: Option<String> },
}
