//! Expression nodes and template spans.

use super::finish_node;
use crate::base::{NodeArray, NodeRef, same_array, same_node, same_opt_array, same_opt_node};
use crate::flags::NodeFlags;
use crate::node::*;
use crate::token::TokenKind;
use std::sync::Arc;
use tsr_common::TextRange;

// =============================================================================
// Literals of compound shape
// =============================================================================

pub fn create_array_literal_expression(
    elements: impl Into<NodeArray>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::ArrayLiteralExpression(ArrayLiteralData {
            elements: elements.into(),
        }),
        location,
        flags,
    )
}

pub fn update_array_literal_expression(node: &NodeRef, elements: NodeArray) -> NodeRef {
    let data = expect_data!(node, ArrayLiteralExpression);
    if same_array(&data.elements, &elements) {
        return Arc::clone(node);
    }
    create_array_literal_expression(elements, Some(node.loc), Some(node.flags))
}

pub fn create_object_literal_expression(
    properties: impl Into<NodeArray>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::ObjectLiteralExpression(ObjectLiteralData {
            properties: properties.into(),
        }),
        location,
        flags,
    )
}

pub fn update_object_literal_expression(node: &NodeRef, properties: NodeArray) -> NodeRef {
    let data = expect_data!(node, ObjectLiteralExpression);
    if same_array(&data.properties, &properties) {
        return Arc::clone(node);
    }
    create_object_literal_expression(properties, Some(node.loc), Some(node.flags))
}

// =============================================================================
// Member access and calls
// =============================================================================

pub fn create_property_access_expression(
    expression: NodeRef,
    name: NodeRef,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::PropertyAccessExpression(PropertyAccessData { expression, name }),
        location,
        flags,
    )
}

pub fn update_property_access_expression(
    node: &NodeRef,
    expression: NodeRef,
    name: NodeRef,
) -> NodeRef {
    let data = expect_data!(node, PropertyAccessExpression);
    if same_node(&data.expression, &expression) && same_node(&data.name, &name) {
        return Arc::clone(node);
    }
    create_property_access_expression(expression, name, Some(node.loc), Some(node.flags))
}

pub fn create_element_access_expression(
    expression: NodeRef,
    argument_expression: NodeRef,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::ElementAccessExpression(ElementAccessData {
            expression,
            argument_expression,
        }),
        location,
        flags,
    )
}

pub fn update_element_access_expression(
    node: &NodeRef,
    expression: NodeRef,
    argument_expression: NodeRef,
) -> NodeRef {
    let data = expect_data!(node, ElementAccessExpression);
    if same_node(&data.expression, &expression)
        && same_node(&data.argument_expression, &argument_expression)
    {
        return Arc::clone(node);
    }
    create_element_access_expression(
        expression,
        argument_expression,
        Some(node.loc),
        Some(node.flags),
    )
}

pub fn create_call_expression(
    expression: NodeRef,
    arguments: impl Into<NodeArray>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::CallExpression(CallExprData {
            expression,
            arguments: arguments.into(),
        }),
        location,
        flags,
    )
}

pub fn update_call_expression(node: &NodeRef, expression: NodeRef, arguments: NodeArray) -> NodeRef {
    let data = expect_data!(node, CallExpression);
    if same_node(&data.expression, &expression) && same_array(&data.arguments, &arguments) {
        return Arc::clone(node);
    }
    create_call_expression(expression, arguments, Some(node.loc), Some(node.flags))
}

pub fn create_new_expression(
    expression: NodeRef,
    arguments: impl Into<NodeArray>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::NewExpression(CallExprData {
            expression,
            arguments: arguments.into(),
        }),
        location,
        flags,
    )
}

pub fn update_new_expression(node: &NodeRef, expression: NodeRef, arguments: NodeArray) -> NodeRef {
    let data = expect_data!(node, NewExpression);
    if same_node(&data.expression, &expression) && same_array(&data.arguments, &arguments) {
        return Arc::clone(node);
    }
    create_new_expression(expression, arguments, Some(node.loc), Some(node.flags))
}

pub fn create_tagged_template_expression(
    tag: NodeRef,
    template: NodeRef,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::TaggedTemplateExpression(TaggedTemplateData { tag, template }),
        location,
        flags,
    )
}

pub fn update_tagged_template_expression(
    node: &NodeRef,
    tag: NodeRef,
    template: NodeRef,
) -> NodeRef {
    let data = expect_data!(node, TaggedTemplateExpression);
    if same_node(&data.tag, &tag) && same_node(&data.template, &template) {
        return Arc::clone(node);
    }
    create_tagged_template_expression(tag, template, Some(node.loc), Some(node.flags))
}

pub fn create_type_assertion_expression(
    type_annotation: NodeRef,
    expression: NodeRef,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::TypeAssertionExpression(TypeAssertionData {
            type_annotation,
            expression,
        }),
        location,
        flags,
    )
}

pub fn update_type_assertion_expression(
    node: &NodeRef,
    type_annotation: NodeRef,
    expression: NodeRef,
) -> NodeRef {
    let data = expect_data!(node, TypeAssertionExpression);
    if same_node(&data.type_annotation, &type_annotation)
        && same_node(&data.expression, &expression)
    {
        return Arc::clone(node);
    }
    create_type_assertion_expression(type_annotation, expression, Some(node.loc), Some(node.flags))
}

// =============================================================================
// Single-operand wrappers
// =============================================================================

/// Generates the create/update pair for kinds whose only slot is one
/// required `expression` child.
macro_rules! wrapped_expression {
    ($kind:ident, $create:ident, $update:ident) => {
        pub fn $create(
            expression: NodeRef,
            location: Option<TextRange>,
            flags: Option<NodeFlags>,
        ) -> NodeRef {
            finish_node(
                NodeData::$kind(WrappedExprData { expression }),
                location,
                flags,
            )
        }

        pub fn $update(node: &NodeRef, expression: NodeRef) -> NodeRef {
            let data = expect_data!(node, $kind);
            if same_node(&data.expression, &expression) {
                return Arc::clone(node);
            }
            $create(expression, Some(node.loc), Some(node.flags))
        }
    };
}

wrapped_expression!(
    ParenthesizedExpression,
    create_parenthesized_expression,
    update_parenthesized_expression
);
wrapped_expression!(DeleteExpression, create_delete_expression, update_delete_expression);
wrapped_expression!(TypeOfExpression, create_type_of_expression, update_type_of_expression);
wrapped_expression!(VoidExpression, create_void_expression, update_void_expression);
wrapped_expression!(AwaitExpression, create_await_expression, update_await_expression);
wrapped_expression!(
    SpreadElementExpression,
    create_spread_element_expression,
    update_spread_element_expression
);

// =============================================================================
// Functions
// =============================================================================

pub fn create_function_expression(
    name: Option<NodeRef>,
    parameters: impl Into<NodeArray>,
    body: NodeRef,
    type_parameters: Option<NodeArray>,
    type_annotation: Option<NodeRef>,
    modifiers: Option<NodeArray>,
    asterisk_token: Option<NodeRef>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::FunctionExpression(FunctionExprData {
            name,
            parameters: parameters.into(),
            body,
            type_parameters,
            type_annotation,
            modifiers,
            asterisk_token,
        }),
        location,
        flags,
    )
}

pub fn update_function_expression(
    node: &NodeRef,
    name: Option<NodeRef>,
    parameters: NodeArray,
    body: NodeRef,
    type_parameters: Option<NodeArray>,
    type_annotation: Option<NodeRef>,
    modifiers: Option<NodeArray>,
    asterisk_token: Option<NodeRef>,
) -> NodeRef {
    let data = expect_data!(node, FunctionExpression);
    if same_opt_node(data.name.as_ref(), name.as_ref())
        && same_array(&data.parameters, &parameters)
        && same_node(&data.body, &body)
        && same_opt_array(data.type_parameters.as_ref(), type_parameters.as_ref())
        && same_opt_node(data.type_annotation.as_ref(), type_annotation.as_ref())
        && same_opt_array(data.modifiers.as_ref(), modifiers.as_ref())
        && same_opt_node(data.asterisk_token.as_ref(), asterisk_token.as_ref())
    {
        return Arc::clone(node);
    }
    create_function_expression(
        name,
        parameters,
        body,
        type_parameters,
        type_annotation,
        modifiers,
        asterisk_token,
        Some(node.loc),
        Some(node.flags),
    )
}

/// `body` is either a `Block` or a bare expression.
pub fn create_arrow_function(
    parameters: impl Into<NodeArray>,
    body: NodeRef,
    type_parameters: Option<NodeArray>,
    type_annotation: Option<NodeRef>,
    modifiers: Option<NodeArray>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::ArrowFunction(ArrowFunctionData {
            parameters: parameters.into(),
            body,
            type_parameters,
            type_annotation,
            modifiers,
        }),
        location,
        flags,
    )
}

pub fn update_arrow_function(
    node: &NodeRef,
    parameters: NodeArray,
    body: NodeRef,
    type_parameters: Option<NodeArray>,
    type_annotation: Option<NodeRef>,
    modifiers: Option<NodeArray>,
) -> NodeRef {
    let data = expect_data!(node, ArrowFunction);
    if same_array(&data.parameters, &parameters)
        && same_node(&data.body, &body)
        && same_opt_array(data.type_parameters.as_ref(), type_parameters.as_ref())
        && same_opt_node(data.type_annotation.as_ref(), type_annotation.as_ref())
        && same_opt_array(data.modifiers.as_ref(), modifiers.as_ref())
    {
        return Arc::clone(node);
    }
    create_arrow_function(
        parameters,
        body,
        type_parameters,
        type_annotation,
        modifiers,
        Some(node.loc),
        Some(node.flags),
    )
}

// =============================================================================
// Operators
// =============================================================================

pub fn create_prefix_unary_expression(
    operator: TokenKind,
    operand: NodeRef,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::PrefixUnaryExpression(UnaryExprData { operator, operand }),
        location,
        flags,
    )
}

/// The operator is kept from `node`.
pub fn update_prefix_unary_expression(node: &NodeRef, operand: NodeRef) -> NodeRef {
    let data = expect_data!(node, PrefixUnaryExpression);
    if same_node(&data.operand, &operand) {
        return Arc::clone(node);
    }
    create_prefix_unary_expression(data.operator, operand, Some(node.loc), Some(node.flags))
}

pub fn create_postfix_unary_expression(
    operand: NodeRef,
    operator: TokenKind,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::PostfixUnaryExpression(UnaryExprData { operator, operand }),
        location,
        flags,
    )
}

pub fn update_postfix_unary_expression(node: &NodeRef, operand: NodeRef) -> NodeRef {
    let data = expect_data!(node, PostfixUnaryExpression);
    if same_node(&data.operand, &operand) {
        return Arc::clone(node);
    }
    create_postfix_unary_expression(operand, data.operator, Some(node.loc), Some(node.flags))
}

pub fn create_binary_expression(
    left: NodeRef,
    operator: TokenKind,
    right: NodeRef,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::BinaryExpression(BinaryExprData {
            operator,
            left,
            right,
        }),
        location,
        flags,
    )
}

/// The operator is kept from `node`.
pub fn update_binary_expression(node: &NodeRef, left: NodeRef, right: NodeRef) -> NodeRef {
    let data = expect_data!(node, BinaryExpression);
    if same_node(&data.left, &left) && same_node(&data.right, &right) {
        return Arc::clone(node);
    }
    create_binary_expression(left, data.operator, right, Some(node.loc), Some(node.flags))
}

pub fn create_conditional_expression(
    condition: NodeRef,
    when_true: NodeRef,
    when_false: NodeRef,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::ConditionalExpression(ConditionalExprData {
            condition,
            when_true,
            when_false,
        }),
        location,
        flags,
    )
}

pub fn update_conditional_expression(
    node: &NodeRef,
    condition: NodeRef,
    when_true: NodeRef,
    when_false: NodeRef,
) -> NodeRef {
    let data = expect_data!(node, ConditionalExpression);
    if same_node(&data.condition, &condition)
        && same_node(&data.when_true, &when_true)
        && same_node(&data.when_false, &when_false)
    {
        return Arc::clone(node);
    }
    create_conditional_expression(
        condition,
        when_true,
        when_false,
        Some(node.loc),
        Some(node.flags),
    )
}

// =============================================================================
// Templates
// =============================================================================

pub fn create_template_expression(
    head: NodeRef,
    template_spans: impl Into<NodeArray>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::TemplateExpression(TemplateExprData {
            head,
            template_spans: template_spans.into(),
        }),
        location,
        flags,
    )
}

pub fn update_template_expression(
    node: &NodeRef,
    head: NodeRef,
    template_spans: NodeArray,
) -> NodeRef {
    let data = expect_data!(node, TemplateExpression);
    if same_node(&data.head, &head) && same_array(&data.template_spans, &template_spans) {
        return Arc::clone(node);
    }
    create_template_expression(head, template_spans, Some(node.loc), Some(node.flags))
}

pub fn create_template_span(
    expression: NodeRef,
    literal: NodeRef,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::TemplateSpan(TemplateSpanData {
            expression,
            literal,
        }),
        location,
        flags,
    )
}

pub fn update_template_span(node: &NodeRef, expression: NodeRef, literal: NodeRef) -> NodeRef {
    let data = expect_data!(node, TemplateSpan);
    if same_node(&data.expression, &expression) && same_node(&data.literal, &literal) {
        return Arc::clone(node);
    }
    create_template_span(expression, literal, Some(node.loc), Some(node.flags))
}

// =============================================================================
// Generators and synthesized expressions
// =============================================================================

pub fn create_yield_expression(
    expression: Option<NodeRef>,
    asterisk_token: Option<NodeRef>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::YieldExpression(YieldExprData {
            expression,
            asterisk_token,
        }),
        location,
        flags,
    )
}

pub fn update_yield_expression(
    node: &NodeRef,
    expression: Option<NodeRef>,
    asterisk_token: Option<NodeRef>,
) -> NodeRef {
    let data = expect_data!(node, YieldExpression);
    if same_opt_node(data.expression.as_ref(), expression.as_ref())
        && same_opt_node(data.asterisk_token.as_ref(), asterisk_token.as_ref())
    {
        return Arc::clone(node);
    }
    create_yield_expression(expression, asterisk_token, Some(node.loc), Some(node.flags))
}

/// Label placeholder produced by code generation passes.
pub fn create_generated_label(
    label: Label,
    label_numbers: Vec<u32>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::GeneratedLabel(GeneratedLabelData {
            label,
            label_numbers,
        }),
        location,
        flags,
    )
}

pub fn create_omitted_expression(location: Option<TextRange>, flags: Option<NodeFlags>) -> NodeRef {
    finish_node(NodeData::OmittedExpression, location, flags)
}
