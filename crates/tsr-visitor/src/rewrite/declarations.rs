//! Names, parameters, class/interface members and binding patterns.

use super::RewriteCx;
use crate::error::RewriteResult;
use crate::transformer::Transformer;
use tsr_ast::factory::*;
use tsr_ast::{
    AccessorData, BindingElementData, BindingPatternData, ComputedPropertyData, ConstructorData,
    MethodDeclarationData, MethodSignatureData, NodeArray, NodeRef, ParameterData,
    PropertyDeclarationData, PropertySignatureData, QualifiedNameData, SignatureData, SyntaxKind,
    TypeParameterData,
};

type AccessorUpdate = fn(
    &NodeRef,
    NodeRef,
    NodeArray,
    Option<NodeRef>,
    Option<NodeArray>,
    Option<NodeRef>,
    Option<NodeArray>,
) -> NodeRef;

type SignatureUpdate =
    fn(&NodeRef, NodeArray, Option<NodeArray>, Option<NodeRef>, Option<NodeArray>) -> NodeRef;

type BindingPatternUpdate = fn(&NodeRef, NodeArray) -> NodeRef;

impl<S, T> RewriteCx<'_, S, T>
where
    T: Transformer<S> + ?Sized,
{
    pub(super) fn qualified_name(
        &mut self,
        node: &NodeRef,
        data: &QualifiedNameData,
    ) -> RewriteResult<NodeRef> {
        let left = self.visit_required(&data.left, SyntaxKind::QualifiedName, "left")?;
        let right = self.visit_required(&data.right, SyntaxKind::QualifiedName, "right")?;
        Ok(update_qualified_name(node, left, right))
    }

    pub(super) fn computed_property_name(
        &mut self,
        node: &NodeRef,
        data: &ComputedPropertyData,
    ) -> RewriteResult<NodeRef> {
        let expression =
            self.visit_required(&data.expression, SyntaxKind::ComputedPropertyName, "expression")?;
        Ok(update_computed_property_name(node, expression))
    }

    pub(super) fn type_parameter(
        &mut self,
        node: &NodeRef,
        data: &TypeParameterData,
    ) -> RewriteResult<NodeRef> {
        let name = self.visit_required(&data.name, SyntaxKind::TypeParameter, "name")?;
        let constraint = self.visit_opt(data.constraint.as_ref())?;
        let expression = self.visit_opt(data.expression.as_ref())?;
        Ok(update_type_parameter(node, name, constraint, expression))
    }

    pub(super) fn parameter(
        &mut self,
        node: &NodeRef,
        data: &ParameterData,
    ) -> RewriteResult<NodeRef> {
        let name = self.visit_required(&data.name, SyntaxKind::Parameter, "name")?;
        let initializer = self.visit_opt(data.initializer.as_ref())?;
        let type_annotation = self.visit_opt(data.type_annotation.as_ref())?;
        let modifiers = self.visit_opt_nodes(data.modifiers.as_ref())?;
        let dot_dot_dot_token = self.visit_opt(data.dot_dot_dot_token.as_ref())?;
        let question_token = self.visit_opt(data.question_token.as_ref())?;
        Ok(update_parameter(
            node,
            name,
            initializer,
            type_annotation,
            modifiers,
            dot_dot_dot_token,
            question_token,
        ))
    }

    pub(super) fn property_signature(
        &mut self,
        node: &NodeRef,
        data: &PropertySignatureData,
    ) -> RewriteResult<NodeRef> {
        let name = self.visit_required(&data.name, SyntaxKind::PropertySignature, "name")?;
        let type_annotation = self.visit_opt(data.type_annotation.as_ref())?;
        let question_token = self.visit_opt(data.question_token.as_ref())?;
        Ok(update_property_signature(node, name, type_annotation, question_token))
    }

    pub(super) fn property_declaration(
        &mut self,
        node: &NodeRef,
        data: &PropertyDeclarationData,
    ) -> RewriteResult<NodeRef> {
        let name = self.visit_required(&data.name, SyntaxKind::PropertyDeclaration, "name")?;
        let initializer = self.visit_opt(data.initializer.as_ref())?;
        let type_annotation = self.visit_opt(data.type_annotation.as_ref())?;
        let question_token = self.visit_opt(data.question_token.as_ref())?;
        Ok(update_property_declaration(
            node,
            name,
            initializer,
            type_annotation,
            question_token,
        ))
    }

    pub(super) fn method_signature(
        &mut self,
        node: &NodeRef,
        data: &MethodSignatureData,
    ) -> RewriteResult<NodeRef> {
        let name = self.visit_required(&data.name, SyntaxKind::MethodSignature, "name")?;
        let parameters = self.visit_nodes(&data.parameters)?;
        let type_parameters = self.visit_opt_nodes(data.type_parameters.as_ref())?;
        let type_annotation = self.visit_opt(data.type_annotation.as_ref())?;
        let modifiers = self.visit_opt_nodes(data.modifiers.as_ref())?;
        let asterisk_token = self.visit_opt(data.asterisk_token.as_ref())?;
        let question_token = self.visit_opt(data.question_token.as_ref())?;
        Ok(update_method_signature(
            node,
            name,
            parameters,
            type_parameters,
            type_annotation,
            modifiers,
            asterisk_token,
            question_token,
        ))
    }

    pub(super) fn method_declaration(
        &mut self,
        node: &NodeRef,
        data: &MethodDeclarationData,
    ) -> RewriteResult<NodeRef> {
        let name = self.visit_required(&data.name, SyntaxKind::MethodDeclaration, "name")?;
        let parameters = self.visit_nodes(&data.parameters)?;
        let body = self.visit_opt(data.body.as_ref())?;
        let type_parameters = self.visit_opt_nodes(data.type_parameters.as_ref())?;
        let type_annotation = self.visit_opt(data.type_annotation.as_ref())?;
        let modifiers = self.visit_opt_nodes(data.modifiers.as_ref())?;
        let asterisk_token = self.visit_opt(data.asterisk_token.as_ref())?;
        Ok(update_method_declaration(
            node,
            name,
            parameters,
            body,
            type_parameters,
            type_annotation,
            modifiers,
            asterisk_token,
        ))
    }

    pub(super) fn constructor(
        &mut self,
        node: &NodeRef,
        data: &ConstructorData,
    ) -> RewriteResult<NodeRef> {
        let parameters = self.visit_nodes(&data.parameters)?;
        let body = self.visit_opt(data.body.as_ref())?;
        let type_parameters = self.visit_opt_nodes(data.type_parameters.as_ref())?;
        let type_annotation = self.visit_opt(data.type_annotation.as_ref())?;
        let modifiers = self.visit_opt_nodes(data.modifiers.as_ref())?;
        Ok(update_constructor(
            node,
            parameters,
            body,
            type_parameters,
            type_annotation,
            modifiers,
        ))
    }

    /// Get and set accessors.
    pub(super) fn accessor(
        &mut self,
        node: &NodeRef,
        data: &AccessorData,
        update: AccessorUpdate,
    ) -> RewriteResult<NodeRef> {
        let name = self.visit_required(&data.name, node.kind(), "name")?;
        let parameters = self.visit_nodes(&data.parameters)?;
        let body = self.visit_opt(data.body.as_ref())?;
        let type_parameters = self.visit_opt_nodes(data.type_parameters.as_ref())?;
        let type_annotation = self.visit_opt(data.type_annotation.as_ref())?;
        let modifiers = self.visit_opt_nodes(data.modifiers.as_ref())?;
        Ok(update(
            node,
            name,
            parameters,
            body,
            type_parameters,
            type_annotation,
            modifiers,
        ))
    }

    /// Call, construct and index signatures.
    pub(super) fn signature(
        &mut self,
        node: &NodeRef,
        data: &SignatureData,
        update: SignatureUpdate,
    ) -> RewriteResult<NodeRef> {
        let parameters = self.visit_nodes(&data.parameters)?;
        let type_parameters = self.visit_opt_nodes(data.type_parameters.as_ref())?;
        let type_annotation = self.visit_opt(data.type_annotation.as_ref())?;
        let modifiers = self.visit_opt_nodes(data.modifiers.as_ref())?;
        Ok(update(node, parameters, type_parameters, type_annotation, modifiers))
    }

    pub(super) fn binding_pattern(
        &mut self,
        node: &NodeRef,
        data: &BindingPatternData,
        update: BindingPatternUpdate,
    ) -> RewriteResult<NodeRef> {
        let elements = self.visit_nodes(&data.elements)?;
        Ok(update(node, elements))
    }

    pub(super) fn binding_element(
        &mut self,
        node: &NodeRef,
        data: &BindingElementData,
    ) -> RewriteResult<NodeRef> {
        let name = self.visit_required(&data.name, SyntaxKind::BindingElement, "name")?;
        let property_name = self.visit_opt(data.property_name.as_ref())?;
        let initializer = self.visit_opt(data.initializer.as_ref())?;
        Ok(update_binding_element(node, name, property_name, initializer))
    }
}
