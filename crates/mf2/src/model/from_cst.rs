//! Conversion from the concrete syntax tree to the data model.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::error::MessageError;
use crate::model::ast::{
    Argument, AttributeValue, Attributes, Declaration, Expression, FunctionRef, Markup,
    MarkupKind, Message, Pattern, PatternElement, PatternMessage, SelectMessage, Variant,
    VariantKey,
};
use crate::model::cst::{self, Span};

fn syntax_error(span: Span, message: impl Into<String>) -> MessageError {
    MessageError::Syntax {
        start: span.start,
        end: span.end,
        message: message.into(),
    }
}

fn data_model_error(span: Span, message: impl Into<String>) -> MessageError {
    MessageError::DataModel {
        start: span.start,
        end: span.end,
        message: message.into(),
    }
}

/// Builds the data model of a parsed message.
///
/// Any recorded syntax error or junk node aborts the conversion; no partial
/// message is returned.
///
/// # Example
///
/// ```
/// use mf2::model::cst::{self, Span};
/// use mf2::model::{Message, PatternElement, from_cst};
///
/// let tree = cst::Message {
///     span: Span::new(0, 5),
///     body: cst::MessageBody::Simple(cst::Pattern {
///         span: Span::new(0, 5),
///         body: vec![cst::PatternNode::Text {
///             span: Span::new(0, 5),
///             value: "Hello".to_string(),
///         }],
///     }),
///     errors: Vec::new(),
/// };
/// let Message::Pattern(message) = from_cst(&tree).unwrap() else {
///     panic!("expected a pattern message");
/// };
/// assert_eq!(message.pattern, vec![PatternElement::Text("Hello".to_string())]);
/// ```
pub fn from_cst(message: &cst::Message) -> Result<Message, MessageError> {
    if let Some(error) = message.errors.first() {
        return Err(syntax_error(error.span, error.message.clone()));
    }
    match &message.body {
        cst::MessageBody::Simple(pattern) => Ok(Message::Pattern(PatternMessage {
            declarations: Vec::new(),
            pattern: convert_pattern(pattern)?,
        })),
        cst::MessageBody::Complex {
            declarations,
            pattern,
        } => Ok(Message::Pattern(PatternMessage {
            declarations: convert_declarations(declarations)?,
            pattern: convert_pattern(pattern)?,
        })),
        cst::MessageBody::Select {
            declarations,
            selectors,
            variants,
        } => {
            let declarations = convert_declarations(declarations)?;
            let selectors = selectors
                .iter()
                .map(convert_placeholder_expression)
                .collect::<Result<Vec<_>, _>>()?;
            let variants = variants
                .iter()
                .map(|variant| convert_variant(variant, selectors.len()))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Message::Select(SelectMessage {
                declarations,
                selectors,
                variants,
            }))
        }
    }
}

fn convert_declarations(
    declarations: &[cst::Declaration],
) -> Result<Vec<Declaration>, MessageError> {
    let mut seen = BTreeSet::new();
    let mut converted = Vec::with_capacity(declarations.len());
    for declaration in declarations {
        let (span, declaration) = match declaration {
            cst::Declaration::Input { span, value } => {
                let expression = convert_placeholder_expression(value)?;
                let Some(Argument::Variable(name)) = &expression.arg else {
                    return Err(data_model_error(
                        *span,
                        "input declaration requires a variable reference",
                    ));
                };
                let name = name.clone();
                (
                    *span,
                    Declaration::Input {
                        name,
                        value: expression,
                    },
                )
            }
            cst::Declaration::Local {
                span,
                target,
                value,
            } => (
                *span,
                Declaration::Local {
                    name: target.name.clone(),
                    value: convert_placeholder_expression(value)?,
                },
            ),
            cst::Declaration::Junk(junk) => {
                return Err(syntax_error(junk.span, "unexpected content in declaration"));
            }
        };
        if !seen.insert(declaration.name().to_string()) {
            return Err(data_model_error(
                span,
                format!("duplicate declaration of ${}", declaration.name()),
            ));
        }
        converted.push(declaration);
    }
    Ok(converted)
}

fn convert_pattern(pattern: &cst::Pattern) -> Result<Pattern, MessageError> {
    pattern
        .body
        .iter()
        .map(|node| match node {
            cst::PatternNode::Text { value, .. } => Ok(PatternElement::Text(value.clone())),
            cst::PatternNode::Expression(expression) => match &expression.markup {
                Some(markup) => convert_markup(expression, markup).map(PatternElement::Markup),
                None => convert_expression(expression).map(PatternElement::Expression),
            },
            cst::PatternNode::Junk(junk) => {
                Err(syntax_error(junk.span, "unexpected content in pattern"))
            }
        })
        .collect()
}

/// Converts an expression outside a pattern body, where markup is not
/// allowed.
fn convert_placeholder_expression(
    expression: &cst::Expression,
) -> Result<Expression, MessageError> {
    if expression.markup.is_some() {
        return Err(syntax_error(
            expression.span,
            "markup is only allowed in patterns",
        ));
    }
    convert_expression(expression)
}

fn convert_expression(expression: &cst::Expression) -> Result<Expression, MessageError> {
    let function = match &expression.function {
        Some(function) => Some(FunctionRef {
            name: convert_identifier(&function.name)?,
            options: convert_options(&function.options)?,
        }),
        None => None,
    };
    Ok(Expression {
        arg: expression.arg.as_ref().map(convert_argument),
        function,
        attributes: convert_attributes(&expression.attributes)?,
    })
}

fn convert_argument(argument: &cst::Argument) -> Argument {
    match argument {
        cst::Argument::Literal(literal) => Argument::Literal(literal.value.clone()),
        cst::Argument::Variable(variable) => Argument::Variable(variable.name.clone()),
    }
}

fn convert_markup(
    expression: &cst::Expression,
    markup: &cst::MarkupRef,
) -> Result<Markup, MessageError> {
    let kind = match (markup.open, markup.close) {
        ('/', None) => MarkupKind::Close,
        ('#', Some('/')) => MarkupKind::Standalone,
        ('#', None) => MarkupKind::Open,
        _ => return Err(syntax_error(markup.span, "malformed markup")),
    };
    Ok(Markup {
        kind,
        name: convert_identifier(&markup.name)?,
        options: convert_options(&markup.options)?,
        attributes: convert_attributes(&expression.attributes)?,
    })
}

/// `name` or `namespace:name`. Other token shapes are rejected.
fn convert_identifier(identifier: &cst::Identifier) -> Result<String, MessageError> {
    match identifier.tokens.as_slice() {
        [name] => Ok(name.value.clone()),
        [namespace, separator, name] if separator.value == ":" => {
            Ok(format!("{}:{}", namespace.value, name.value))
        }
        tokens => Err(data_model_error(
            identifier.span,
            format!("malformed identifier with {} tokens", tokens.len()),
        )),
    }
}

fn convert_options(
    options: &[cst::FunctionOption],
) -> Result<IndexMap<String, Argument>, MessageError> {
    let mut converted = IndexMap::with_capacity(options.len());
    for option in options {
        let name = convert_identifier(&option.name)?;
        if converted.contains_key(&name) {
            return Err(data_model_error(
                option.span,
                format!("duplicate option {name}"),
            ));
        }
        converted.insert(name, convert_argument(&option.value));
    }
    Ok(converted)
}

fn convert_attributes(attributes: &[cst::Attribute]) -> Result<Attributes, MessageError> {
    let mut converted = Attributes::with_capacity(attributes.len());
    for attribute in attributes {
        let name = convert_identifier(&attribute.name)?;
        if converted.contains_key(&name) {
            return Err(data_model_error(
                attribute.span,
                format!("duplicate attribute @{name}"),
            ));
        }
        let value = match &attribute.value {
            Some(literal) => AttributeValue::Literal(literal.value.clone()),
            None => AttributeValue::True,
        };
        converted.insert(name, value);
    }
    Ok(converted)
}

fn convert_variant(variant: &cst::Variant, selector_count: usize) -> Result<Variant, MessageError> {
    if variant.keys.len() != selector_count {
        return Err(data_model_error(
            variant.span,
            format!(
                "variant has {} keys but the message has {selector_count} selectors",
                variant.keys.len()
            ),
        ));
    }
    let keys = variant
        .keys
        .iter()
        .map(|key| match key {
            cst::Key::Literal(literal) => VariantKey::Literal(literal.value.clone()),
            cst::Key::Catchall { value, .. } => VariantKey::Catchall {
                value: value.clone(),
            },
        })
        .collect();
    Ok(Variant {
        keys,
        value: convert_pattern(&variant.value)?,
    })
}
