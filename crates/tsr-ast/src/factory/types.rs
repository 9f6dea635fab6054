//! Type annotation nodes.
//!
//! The rewriter treats every kind here as opaque, but they still get full
//! `update_*` support so type-aware passes can rebuild them.

use super::finish_node;
use crate::base::{NodeArray, NodeRef, same_array, same_node, same_opt_array, same_opt_node};
use crate::flags::NodeFlags;
use crate::node::*;
use crate::token::TypeKeyword;
use std::sync::Arc;
use tsr_common::TextRange;

pub fn create_keyword_type(
    keyword: TypeKeyword,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::KeywordType(KeywordTypeData { keyword }),
        location,
        flags,
    )
}

pub fn create_type_reference(
    type_name: NodeRef,
    type_arguments: Option<NodeArray>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::TypeReference(TypeRefData {
            type_name,
            type_arguments,
        }),
        location,
        flags,
    )
}

pub fn update_type_reference(
    node: &NodeRef,
    type_name: NodeRef,
    type_arguments: Option<NodeArray>,
) -> NodeRef {
    let data = expect_data!(node, TypeReference);
    if same_node(&data.type_name, &type_name)
        && same_opt_array(data.type_arguments.as_ref(), type_arguments.as_ref())
    {
        return Arc::clone(node);
    }
    create_type_reference(type_name, type_arguments, Some(node.loc), Some(node.flags))
}

fn function_type_unchanged(
    data: &FunctionTypeData,
    parameters: &NodeArray,
    type_parameters: Option<&NodeArray>,
    type_annotation: Option<&NodeRef>,
) -> bool {
    same_array(&data.parameters, parameters)
        && same_opt_array(data.type_parameters.as_ref(), type_parameters)
        && same_opt_node(data.type_annotation.as_ref(), type_annotation)
}

pub fn create_function_type(
    parameters: impl Into<NodeArray>,
    type_parameters: Option<NodeArray>,
    type_annotation: Option<NodeRef>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::FunctionType(FunctionTypeData {
            parameters: parameters.into(),
            type_parameters,
            type_annotation,
        }),
        location,
        flags,
    )
}

pub fn update_function_type(
    node: &NodeRef,
    parameters: NodeArray,
    type_parameters: Option<NodeArray>,
    type_annotation: Option<NodeRef>,
) -> NodeRef {
    let data = expect_data!(node, FunctionType);
    if function_type_unchanged(
        data,
        &parameters,
        type_parameters.as_ref(),
        type_annotation.as_ref(),
    ) {
        return Arc::clone(node);
    }
    create_function_type(
        parameters,
        type_parameters,
        type_annotation,
        Some(node.loc),
        Some(node.flags),
    )
}

pub fn create_constructor_type(
    parameters: impl Into<NodeArray>,
    type_parameters: Option<NodeArray>,
    type_annotation: Option<NodeRef>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::ConstructorType(FunctionTypeData {
            parameters: parameters.into(),
            type_parameters,
            type_annotation,
        }),
        location,
        flags,
    )
}

pub fn update_constructor_type(
    node: &NodeRef,
    parameters: NodeArray,
    type_parameters: Option<NodeArray>,
    type_annotation: Option<NodeRef>,
) -> NodeRef {
    let data = expect_data!(node, ConstructorType);
    if function_type_unchanged(
        data,
        &parameters,
        type_parameters.as_ref(),
        type_annotation.as_ref(),
    ) {
        return Arc::clone(node);
    }
    create_constructor_type(
        parameters,
        type_parameters,
        type_annotation,
        Some(node.loc),
        Some(node.flags),
    )
}

pub fn create_type_query(
    expr_name: NodeRef,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::TypeQuery(TypeQueryData { expr_name }),
        location,
        flags,
    )
}

pub fn update_type_query(node: &NodeRef, expr_name: NodeRef) -> NodeRef {
    let data = expect_data!(node, TypeQuery);
    if same_node(&data.expr_name, &expr_name) {
        return Arc::clone(node);
    }
    create_type_query(expr_name, Some(node.loc), Some(node.flags))
}

pub fn create_type_literal(
    members: impl Into<NodeArray>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::TypeLiteral(TypeLiteralData {
            members: members.into(),
        }),
        location,
        flags,
    )
}

pub fn update_type_literal(node: &NodeRef, members: NodeArray) -> NodeRef {
    let data = expect_data!(node, TypeLiteral);
    if same_array(&data.members, &members) {
        return Arc::clone(node);
    }
    create_type_literal(members, Some(node.loc), Some(node.flags))
}

pub fn create_array_type(
    element_type: NodeRef,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::ArrayType(ArrayTypeData { element_type }),
        location,
        flags,
    )
}

pub fn update_array_type(node: &NodeRef, element_type: NodeRef) -> NodeRef {
    let data = expect_data!(node, ArrayType);
    if same_node(&data.element_type, &element_type) {
        return Arc::clone(node);
    }
    create_array_type(element_type, Some(node.loc), Some(node.flags))
}

pub fn create_tuple_type(
    element_types: impl Into<NodeArray>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::TupleType(TupleTypeData {
            element_types: element_types.into(),
        }),
        location,
        flags,
    )
}

pub fn update_tuple_type(node: &NodeRef, element_types: NodeArray) -> NodeRef {
    let data = expect_data!(node, TupleType);
    if same_array(&data.element_types, &element_types) {
        return Arc::clone(node);
    }
    create_tuple_type(element_types, Some(node.loc), Some(node.flags))
}

pub fn create_union_type(
    types: impl Into<NodeArray>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::UnionType(UnionTypeData {
            types: types.into(),
        }),
        location,
        flags,
    )
}

pub fn update_union_type(node: &NodeRef, types: NodeArray) -> NodeRef {
    let data = expect_data!(node, UnionType);
    if same_array(&data.types, &types) {
        return Arc::clone(node);
    }
    create_union_type(types, Some(node.loc), Some(node.flags))
}

pub fn create_parenthesized_type(
    type_node: NodeRef,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::ParenthesizedType(WrappedTypeData { type_node }),
        location,
        flags,
    )
}

pub fn update_parenthesized_type(node: &NodeRef, type_node: NodeRef) -> NodeRef {
    let data = expect_data!(node, ParenthesizedType);
    if same_node(&data.type_node, &type_node) {
        return Arc::clone(node);
    }
    create_parenthesized_type(type_node, Some(node.loc), Some(node.flags))
}
