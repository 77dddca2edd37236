//! Message data model and its construction from a syntax tree.

mod ast;
pub mod cst;
mod from_cst;

pub use ast::{
    Argument, AttributeValue, Attributes, Declaration, Expression, FunctionRef, Markup,
    MarkupKind, Message, Pattern, PatternElement, PatternMessage, SelectMessage, Variant,
    VariantKey,
};
pub use from_cst::from_cst;
