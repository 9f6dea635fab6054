//! Literals, identifiers, keywords, tokens and entity names.

use super::finish_node;
use crate::base::{NodeRef, same_node};
use crate::flags::NodeFlags;
use crate::node::*;
use crate::token::TokenKind;
use std::sync::Arc;
use tsr_common::TextRange;

fn literal(text: impl Into<String>) -> LiteralData {
    LiteralData { text: text.into() }
}

// =============================================================================
// Literals
// =============================================================================

pub fn create_string_literal(
    text: impl Into<String>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(NodeData::StringLiteral(literal(text)), location, flags)
}

/// Numeric literals store their text; `3`, `2.5` and `"0x1F"` are all accepted.
pub fn create_numeric_literal(
    value: impl ToString,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::NumericLiteral(literal(value.to_string())),
        location,
        flags,
    )
}

pub fn create_regular_expression_literal(
    text: impl Into<String>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(NodeData::RegularExpressionLiteral(literal(text)), location, flags)
}

pub fn create_no_substitution_template_literal(
    text: impl Into<String>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::NoSubstitutionTemplateLiteral(literal(text)),
        location,
        flags,
    )
}

pub fn create_template_head(
    text: impl Into<String>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(NodeData::TemplateHead(literal(text)), location, flags)
}

pub fn create_template_middle(
    text: impl Into<String>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(NodeData::TemplateMiddle(literal(text)), location, flags)
}

pub fn create_template_tail(
    text: impl Into<String>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(NodeData::TemplateTail(literal(text)), location, flags)
}

// =============================================================================
// Identifiers, keywords and tokens
// =============================================================================

pub fn create_identifier(
    text: impl Into<String>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::Identifier(IdentifierData { text: text.into() }),
        location,
        flags,
    )
}

pub fn create_this_keyword(location: Option<TextRange>, flags: Option<NodeFlags>) -> NodeRef {
    finish_node(NodeData::ThisKeyword, location, flags)
}

pub fn create_super_keyword(location: Option<TextRange>, flags: Option<NodeFlags>) -> NodeRef {
    finish_node(NodeData::SuperKeyword, location, flags)
}

pub fn create_null_keyword(location: Option<TextRange>, flags: Option<NodeFlags>) -> NodeRef {
    finish_node(NodeData::NullKeyword, location, flags)
}

pub fn create_true_keyword(location: Option<TextRange>, flags: Option<NodeFlags>) -> NodeRef {
    finish_node(NodeData::TrueKeyword, location, flags)
}

pub fn create_false_keyword(location: Option<TextRange>, flags: Option<NodeFlags>) -> NodeRef {
    finish_node(NodeData::FalseKeyword, location, flags)
}

/// A modifier keyword or one of the `*` / `?` / `...` markers.
pub fn create_token(
    token: TokenKind,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(NodeData::Token(TokenData { token }), location, flags)
}

// =============================================================================
// Names
// =============================================================================

pub fn create_qualified_name(
    left: NodeRef,
    right: NodeRef,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::QualifiedName(QualifiedNameData { left, right }),
        location,
        flags,
    )
}

pub fn update_qualified_name(node: &NodeRef, left: NodeRef, right: NodeRef) -> NodeRef {
    let data = expect_data!(node, QualifiedName);
    if same_node(&data.left, &left) && same_node(&data.right, &right) {
        return Arc::clone(node);
    }
    create_qualified_name(left, right, Some(node.loc), Some(node.flags))
}

pub fn create_computed_property_name(
    expression: NodeRef,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::ComputedPropertyName(ComputedPropertyData { expression }),
        location,
        flags,
    )
}

pub fn update_computed_property_name(node: &NodeRef, expression: NodeRef) -> NodeRef {
    let data = expect_data!(node, ComputedPropertyName);
    if same_node(&data.expression, &expression) {
        return Arc::clone(node);
    }
    create_computed_property_name(expression, Some(node.loc), Some(node.flags))
}
