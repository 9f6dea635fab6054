//! Type parameters, parameters, class/interface members, signatures and
//! binding patterns.

use super::finish_node;
use crate::base::{NodeArray, NodeRef, same_array, same_node, same_opt_array, same_opt_node};
use crate::flags::NodeFlags;
use crate::node::*;
use std::sync::Arc;
use tsr_common::TextRange;

// =============================================================================
// Type parameters and parameters
// =============================================================================

pub fn create_type_parameter(
    name: NodeRef,
    constraint: Option<NodeRef>,
    expression: Option<NodeRef>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::TypeParameter(TypeParameterData {
            name,
            constraint,
            expression,
        }),
        location,
        flags,
    )
}

pub fn update_type_parameter(
    node: &NodeRef,
    name: NodeRef,
    constraint: Option<NodeRef>,
    expression: Option<NodeRef>,
) -> NodeRef {
    let data = expect_data!(node, TypeParameter);
    if same_node(&data.name, &name)
        && same_opt_node(data.constraint.as_ref(), constraint.as_ref())
        && same_opt_node(data.expression.as_ref(), expression.as_ref())
    {
        return Arc::clone(node);
    }
    create_type_parameter(name, constraint, expression, Some(node.loc), Some(node.flags))
}

pub fn create_parameter(
    name: NodeRef,
    initializer: Option<NodeRef>,
    type_annotation: Option<NodeRef>,
    modifiers: Option<NodeArray>,
    dot_dot_dot_token: Option<NodeRef>,
    question_token: Option<NodeRef>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::Parameter(ParameterData {
            name,
            initializer,
            type_annotation,
            modifiers,
            dot_dot_dot_token,
            question_token,
        }),
        location,
        flags,
    )
}

pub fn update_parameter(
    node: &NodeRef,
    name: NodeRef,
    initializer: Option<NodeRef>,
    type_annotation: Option<NodeRef>,
    modifiers: Option<NodeArray>,
    dot_dot_dot_token: Option<NodeRef>,
    question_token: Option<NodeRef>,
) -> NodeRef {
    let data = expect_data!(node, Parameter);
    if same_node(&data.name, &name)
        && same_opt_node(data.initializer.as_ref(), initializer.as_ref())
        && same_opt_node(data.type_annotation.as_ref(), type_annotation.as_ref())
        && same_opt_array(data.modifiers.as_ref(), modifiers.as_ref())
        && same_opt_node(data.dot_dot_dot_token.as_ref(), dot_dot_dot_token.as_ref())
        && same_opt_node(data.question_token.as_ref(), question_token.as_ref())
    {
        return Arc::clone(node);
    }
    create_parameter(
        name,
        initializer,
        type_annotation,
        modifiers,
        dot_dot_dot_token,
        question_token,
        Some(node.loc),
        Some(node.flags),
    )
}

// =============================================================================
// Properties and methods
// =============================================================================

pub fn create_property_signature(
    name: NodeRef,
    type_annotation: Option<NodeRef>,
    question_token: Option<NodeRef>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::PropertySignature(PropertySignatureData {
            name,
            type_annotation,
            question_token,
        }),
        location,
        flags,
    )
}

pub fn update_property_signature(
    node: &NodeRef,
    name: NodeRef,
    type_annotation: Option<NodeRef>,
    question_token: Option<NodeRef>,
) -> NodeRef {
    let data = expect_data!(node, PropertySignature);
    if same_node(&data.name, &name)
        && same_opt_node(data.type_annotation.as_ref(), type_annotation.as_ref())
        && same_opt_node(data.question_token.as_ref(), question_token.as_ref())
    {
        return Arc::clone(node);
    }
    create_property_signature(
        name,
        type_annotation,
        question_token,
        Some(node.loc),
        Some(node.flags),
    )
}

pub fn create_property_declaration(
    name: NodeRef,
    initializer: Option<NodeRef>,
    type_annotation: Option<NodeRef>,
    question_token: Option<NodeRef>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::PropertyDeclaration(PropertyDeclarationData {
            name,
            initializer,
            type_annotation,
            question_token,
        }),
        location,
        flags,
    )
}

pub fn update_property_declaration(
    node: &NodeRef,
    name: NodeRef,
    initializer: Option<NodeRef>,
    type_annotation: Option<NodeRef>,
    question_token: Option<NodeRef>,
) -> NodeRef {
    let data = expect_data!(node, PropertyDeclaration);
    if same_node(&data.name, &name)
        && same_opt_node(data.initializer.as_ref(), initializer.as_ref())
        && same_opt_node(data.type_annotation.as_ref(), type_annotation.as_ref())
        && same_opt_node(data.question_token.as_ref(), question_token.as_ref())
    {
        return Arc::clone(node);
    }
    create_property_declaration(
        name,
        initializer,
        type_annotation,
        question_token,
        Some(node.loc),
        Some(node.flags),
    )
}

pub fn create_method_signature(
    name: NodeRef,
    parameters: impl Into<NodeArray>,
    type_parameters: Option<NodeArray>,
    type_annotation: Option<NodeRef>,
    modifiers: Option<NodeArray>,
    asterisk_token: Option<NodeRef>,
    question_token: Option<NodeRef>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::MethodSignature(MethodSignatureData {
            name,
            parameters: parameters.into(),
            type_parameters,
            type_annotation,
            modifiers,
            asterisk_token,
            question_token,
        }),
        location,
        flags,
    )
}

pub fn update_method_signature(
    node: &NodeRef,
    name: NodeRef,
    parameters: NodeArray,
    type_parameters: Option<NodeArray>,
    type_annotation: Option<NodeRef>,
    modifiers: Option<NodeArray>,
    asterisk_token: Option<NodeRef>,
    question_token: Option<NodeRef>,
) -> NodeRef {
    let data = expect_data!(node, MethodSignature);
    if same_node(&data.name, &name)
        && same_array(&data.parameters, &parameters)
        && same_opt_array(data.type_parameters.as_ref(), type_parameters.as_ref())
        && same_opt_node(data.type_annotation.as_ref(), type_annotation.as_ref())
        && same_opt_array(data.modifiers.as_ref(), modifiers.as_ref())
        && same_opt_node(data.asterisk_token.as_ref(), asterisk_token.as_ref())
        && same_opt_node(data.question_token.as_ref(), question_token.as_ref())
    {
        return Arc::clone(node);
    }
    create_method_signature(
        name,
        parameters,
        type_parameters,
        type_annotation,
        modifiers,
        asterisk_token,
        question_token,
        Some(node.loc),
        Some(node.flags),
    )
}

pub fn create_method_declaration(
    name: NodeRef,
    parameters: impl Into<NodeArray>,
    body: Option<NodeRef>,
    type_parameters: Option<NodeArray>,
    type_annotation: Option<NodeRef>,
    modifiers: Option<NodeArray>,
    asterisk_token: Option<NodeRef>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::MethodDeclaration(MethodDeclarationData {
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

pub fn update_method_declaration(
    node: &NodeRef,
    name: NodeRef,
    parameters: NodeArray,
    body: Option<NodeRef>,
    type_parameters: Option<NodeArray>,
    type_annotation: Option<NodeRef>,
    modifiers: Option<NodeArray>,
    asterisk_token: Option<NodeRef>,
) -> NodeRef {
    let data = expect_data!(node, MethodDeclaration);
    if same_node(&data.name, &name)
        && same_array(&data.parameters, &parameters)
        && same_opt_node(data.body.as_ref(), body.as_ref())
        && same_opt_array(data.type_parameters.as_ref(), type_parameters.as_ref())
        && same_opt_node(data.type_annotation.as_ref(), type_annotation.as_ref())
        && same_opt_array(data.modifiers.as_ref(), modifiers.as_ref())
        && same_opt_node(data.asterisk_token.as_ref(), asterisk_token.as_ref())
    {
        return Arc::clone(node);
    }
    create_method_declaration(
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

// =============================================================================
// Constructors and accessors
// =============================================================================

pub fn create_constructor(
    parameters: impl Into<NodeArray>,
    body: Option<NodeRef>,
    type_parameters: Option<NodeArray>,
    type_annotation: Option<NodeRef>,
    modifiers: Option<NodeArray>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::Constructor(ConstructorData {
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

pub fn update_constructor(
    node: &NodeRef,
    parameters: NodeArray,
    body: Option<NodeRef>,
    type_parameters: Option<NodeArray>,
    type_annotation: Option<NodeRef>,
    modifiers: Option<NodeArray>,
) -> NodeRef {
    let data = expect_data!(node, Constructor);
    if same_array(&data.parameters, &parameters)
        && same_opt_node(data.body.as_ref(), body.as_ref())
        && same_opt_array(data.type_parameters.as_ref(), type_parameters.as_ref())
        && same_opt_node(data.type_annotation.as_ref(), type_annotation.as_ref())
        && same_opt_array(data.modifiers.as_ref(), modifiers.as_ref())
    {
        return Arc::clone(node);
    }
    create_constructor(
        parameters,
        body,
        type_parameters,
        type_annotation,
        modifiers,
        Some(node.loc),
        Some(node.flags),
    )
}

fn accessor_unchanged(
    data: &AccessorData,
    name: &NodeRef,
    parameters: &NodeArray,
    body: Option<&NodeRef>,
    type_parameters: Option<&NodeArray>,
    type_annotation: Option<&NodeRef>,
    modifiers: Option<&NodeArray>,
) -> bool {
    same_node(&data.name, name)
        && same_array(&data.parameters, parameters)
        && same_opt_node(data.body.as_ref(), body)
        && same_opt_array(data.type_parameters.as_ref(), type_parameters)
        && same_opt_node(data.type_annotation.as_ref(), type_annotation)
        && same_opt_array(data.modifiers.as_ref(), modifiers)
}

pub fn create_get_accessor(
    name: NodeRef,
    parameters: impl Into<NodeArray>,
    body: Option<NodeRef>,
    type_parameters: Option<NodeArray>,
    type_annotation: Option<NodeRef>,
    modifiers: Option<NodeArray>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::GetAccessor(AccessorData {
            name,
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

pub fn update_get_accessor(
    node: &NodeRef,
    name: NodeRef,
    parameters: NodeArray,
    body: Option<NodeRef>,
    type_parameters: Option<NodeArray>,
    type_annotation: Option<NodeRef>,
    modifiers: Option<NodeArray>,
) -> NodeRef {
    let data = expect_data!(node, GetAccessor);
    if accessor_unchanged(
        data,
        &name,
        &parameters,
        body.as_ref(),
        type_parameters.as_ref(),
        type_annotation.as_ref(),
        modifiers.as_ref(),
    ) {
        return Arc::clone(node);
    }
    create_get_accessor(
        name,
        parameters,
        body,
        type_parameters,
        type_annotation,
        modifiers,
        Some(node.loc),
        Some(node.flags),
    )
}

pub fn create_set_accessor(
    name: NodeRef,
    parameters: impl Into<NodeArray>,
    body: Option<NodeRef>,
    type_parameters: Option<NodeArray>,
    type_annotation: Option<NodeRef>,
    modifiers: Option<NodeArray>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::SetAccessor(AccessorData {
            name,
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

pub fn update_set_accessor(
    node: &NodeRef,
    name: NodeRef,
    parameters: NodeArray,
    body: Option<NodeRef>,
    type_parameters: Option<NodeArray>,
    type_annotation: Option<NodeRef>,
    modifiers: Option<NodeArray>,
) -> NodeRef {
    let data = expect_data!(node, SetAccessor);
    if accessor_unchanged(
        data,
        &name,
        &parameters,
        body.as_ref(),
        type_parameters.as_ref(),
        type_annotation.as_ref(),
        modifiers.as_ref(),
    ) {
        return Arc::clone(node);
    }
    create_set_accessor(
        name,
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
// Call, construct and index signatures
// =============================================================================

fn signature_data(
    parameters: NodeArray,
    type_parameters: Option<NodeArray>,
    type_annotation: Option<NodeRef>,
    modifiers: Option<NodeArray>,
) -> SignatureData {
    SignatureData {
        parameters,
        type_parameters,
        type_annotation,
        modifiers,
    }
}

fn signature_unchanged(
    data: &SignatureData,
    parameters: &NodeArray,
    type_parameters: Option<&NodeArray>,
    type_annotation: Option<&NodeRef>,
    modifiers: Option<&NodeArray>,
) -> bool {
    same_array(&data.parameters, parameters)
        && same_opt_array(data.type_parameters.as_ref(), type_parameters)
        && same_opt_node(data.type_annotation.as_ref(), type_annotation)
        && same_opt_array(data.modifiers.as_ref(), modifiers)
}

pub fn create_call_signature(
    parameters: impl Into<NodeArray>,
    type_parameters: Option<NodeArray>,
    type_annotation: Option<NodeRef>,
    modifiers: Option<NodeArray>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::CallSignature(signature_data(
            parameters.into(),
            type_parameters,
            type_annotation,
            modifiers,
        )),
        location,
        flags,
    )
}

pub fn update_call_signature(
    node: &NodeRef,
    parameters: NodeArray,
    type_parameters: Option<NodeArray>,
    type_annotation: Option<NodeRef>,
    modifiers: Option<NodeArray>,
) -> NodeRef {
    let data = expect_data!(node, CallSignature);
    if signature_unchanged(
        data,
        &parameters,
        type_parameters.as_ref(),
        type_annotation.as_ref(),
        modifiers.as_ref(),
    ) {
        return Arc::clone(node);
    }
    create_call_signature(
        parameters,
        type_parameters,
        type_annotation,
        modifiers,
        Some(node.loc),
        Some(node.flags),
    )
}

pub fn create_construct_signature(
    parameters: impl Into<NodeArray>,
    type_parameters: Option<NodeArray>,
    type_annotation: Option<NodeRef>,
    modifiers: Option<NodeArray>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::ConstructSignature(signature_data(
            parameters.into(),
            type_parameters,
            type_annotation,
            modifiers,
        )),
        location,
        flags,
    )
}

pub fn update_construct_signature(
    node: &NodeRef,
    parameters: NodeArray,
    type_parameters: Option<NodeArray>,
    type_annotation: Option<NodeRef>,
    modifiers: Option<NodeArray>,
) -> NodeRef {
    let data = expect_data!(node, ConstructSignature);
    if signature_unchanged(
        data,
        &parameters,
        type_parameters.as_ref(),
        type_annotation.as_ref(),
        modifiers.as_ref(),
    ) {
        return Arc::clone(node);
    }
    create_construct_signature(
        parameters,
        type_parameters,
        type_annotation,
        modifiers,
        Some(node.loc),
        Some(node.flags),
    )
}

pub fn create_index_signature(
    parameters: impl Into<NodeArray>,
    type_parameters: Option<NodeArray>,
    type_annotation: Option<NodeRef>,
    modifiers: Option<NodeArray>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::IndexSignature(signature_data(
            parameters.into(),
            type_parameters,
            type_annotation,
            modifiers,
        )),
        location,
        flags,
    )
}

pub fn update_index_signature(
    node: &NodeRef,
    parameters: NodeArray,
    type_parameters: Option<NodeArray>,
    type_annotation: Option<NodeRef>,
    modifiers: Option<NodeArray>,
) -> NodeRef {
    let data = expect_data!(node, IndexSignature);
    if signature_unchanged(
        data,
        &parameters,
        type_parameters.as_ref(),
        type_annotation.as_ref(),
        modifiers.as_ref(),
    ) {
        return Arc::clone(node);
    }
    create_index_signature(
        parameters,
        type_parameters,
        type_annotation,
        modifiers,
        Some(node.loc),
        Some(node.flags),
    )
}

// =============================================================================
// Binding patterns
// =============================================================================

pub fn create_object_binding_pattern(
    elements: impl Into<NodeArray>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::ObjectBindingPattern(BindingPatternData {
            elements: elements.into(),
        }),
        location,
        flags,
    )
}

pub fn update_object_binding_pattern(node: &NodeRef, elements: NodeArray) -> NodeRef {
    let data = expect_data!(node, ObjectBindingPattern);
    if same_array(&data.elements, &elements) {
        return Arc::clone(node);
    }
    create_object_binding_pattern(elements, Some(node.loc), Some(node.flags))
}

pub fn create_array_binding_pattern(
    elements: impl Into<NodeArray>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::ArrayBindingPattern(BindingPatternData {
            elements: elements.into(),
        }),
        location,
        flags,
    )
}

pub fn update_array_binding_pattern(node: &NodeRef, elements: NodeArray) -> NodeRef {
    let data = expect_data!(node, ArrayBindingPattern);
    if same_array(&data.elements, &elements) {
        return Arc::clone(node);
    }
    create_array_binding_pattern(elements, Some(node.loc), Some(node.flags))
}

pub fn create_binding_element(
    name: NodeRef,
    property_name: Option<NodeRef>,
    initializer: Option<NodeRef>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::BindingElement(BindingElementData {
            name,
            property_name,
            initializer,
        }),
        location,
        flags,
    )
}

pub fn update_binding_element(
    node: &NodeRef,
    name: NodeRef,
    property_name: Option<NodeRef>,
    initializer: Option<NodeRef>,
) -> NodeRef {
    let data = expect_data!(node, BindingElement);
    if same_node(&data.name, &name)
        && same_opt_node(data.property_name.as_ref(), property_name.as_ref())
        && same_opt_node(data.initializer.as_ref(), initializer.as_ref())
    {
        return Arc::clone(node);
    }
    create_binding_element(
        name,
        property_name,
        initializer,
        Some(node.loc),
        Some(node.flags),
    )
}
