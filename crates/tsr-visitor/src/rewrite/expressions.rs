//! Expressions and template spans.

use super::RewriteCx;
use crate::error::RewriteResult;
use crate::transformer::Transformer;
use tsr_ast::factory::*;
use tsr_ast::{
    ArrayLiteralData, ArrowFunctionData, BinaryExprData, CallExprData, ConditionalExprData,
    ElementAccessData, FunctionExprData, NodeArray, NodeRef, ObjectLiteralData,
    PropertyAccessData, SyntaxKind, TaggedTemplateData, TemplateExprData, TemplateSpanData,
    TypeAssertionData, UnaryExprData, WrappedExprData, YieldExprData,
};

type CallUpdate = fn(&NodeRef, NodeRef, NodeArray) -> NodeRef;
type SingleChildUpdate = fn(&NodeRef, NodeRef) -> NodeRef;

impl<S, T> RewriteCx<'_, S, T>
where
    T: Transformer<S> + ?Sized,
{
    pub(super) fn array_literal(
        &mut self,
        node: &NodeRef,
        data: &ArrayLiteralData,
    ) -> RewriteResult<NodeRef> {
        let elements = self.visit_nodes(&data.elements)?;
        Ok(update_array_literal_expression(node, elements))
    }

    pub(super) fn object_literal(
        &mut self,
        node: &NodeRef,
        data: &ObjectLiteralData,
    ) -> RewriteResult<NodeRef> {
        let properties = self.visit_nodes(&data.properties)?;
        Ok(update_object_literal_expression(node, properties))
    }

    pub(super) fn property_access(
        &mut self,
        node: &NodeRef,
        data: &PropertyAccessData,
    ) -> RewriteResult<NodeRef> {
        let kind = SyntaxKind::PropertyAccessExpression;
        let expression = self.visit_required(&data.expression, kind, "expression")?;
        let name = self.visit_required(&data.name, kind, "name")?;
        Ok(update_property_access_expression(node, expression, name))
    }

    pub(super) fn element_access(
        &mut self,
        node: &NodeRef,
        data: &ElementAccessData,
    ) -> RewriteResult<NodeRef> {
        let kind = SyntaxKind::ElementAccessExpression;
        let expression = self.visit_required(&data.expression, kind, "expression")?;
        let argument_expression =
            self.visit_required(&data.argument_expression, kind, "argument_expression")?;
        Ok(update_element_access_expression(node, expression, argument_expression))
    }

    /// Call and `new` expressions.
    pub(super) fn call_like(
        &mut self,
        node: &NodeRef,
        data: &CallExprData,
        update: CallUpdate,
    ) -> RewriteResult<NodeRef> {
        let expression = self.visit_required(&data.expression, node.kind(), "expression")?;
        let arguments = self.visit_nodes(&data.arguments)?;
        Ok(update(node, expression, arguments))
    }

    pub(super) fn tagged_template(
        &mut self,
        node: &NodeRef,
        data: &TaggedTemplateData,
    ) -> RewriteResult<NodeRef> {
        let kind = SyntaxKind::TaggedTemplateExpression;
        let tag = self.visit_required(&data.tag, kind, "tag")?;
        let template = self.visit_required(&data.template, kind, "template")?;
        Ok(update_tagged_template_expression(node, tag, template))
    }

    pub(super) fn type_assertion(
        &mut self,
        node: &NodeRef,
        data: &TypeAssertionData,
    ) -> RewriteResult<NodeRef> {
        let kind = SyntaxKind::TypeAssertionExpression;
        let type_annotation = self.visit_required(&data.type_annotation, kind, "type")?;
        let expression = self.visit_required(&data.expression, kind, "expression")?;
        Ok(update_type_assertion_expression(node, type_annotation, expression))
    }

    /// Parenthesized, `delete`, `typeof`, `void`, `await` and spread.
    pub(super) fn wrapped(
        &mut self,
        node: &NodeRef,
        data: &WrappedExprData,
        update: SingleChildUpdate,
    ) -> RewriteResult<NodeRef> {
        let expression = self.visit_required(&data.expression, node.kind(), "expression")?;
        Ok(update(node, expression))
    }

    pub(super) fn function_expression(
        &mut self,
        node: &NodeRef,
        data: &FunctionExprData,
    ) -> RewriteResult<NodeRef> {
        let name = self.visit_opt(data.name.as_ref())?;
        let parameters = self.visit_nodes(&data.parameters)?;
        let body = self.visit_required(&data.body, SyntaxKind::FunctionExpression, "body")?;
        let type_parameters = self.visit_opt_nodes(data.type_parameters.as_ref())?;
        let type_annotation = self.visit_opt(data.type_annotation.as_ref())?;
        let modifiers = self.visit_opt_nodes(data.modifiers.as_ref())?;
        let asterisk_token = self.visit_opt(data.asterisk_token.as_ref())?;
        Ok(update_function_expression(
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

    pub(super) fn arrow_function(
        &mut self,
        node: &NodeRef,
        data: &ArrowFunctionData,
    ) -> RewriteResult<NodeRef> {
        let parameters = self.visit_nodes(&data.parameters)?;
        let body = self.visit_required(&data.body, SyntaxKind::ArrowFunction, "body")?;
        let type_parameters = self.visit_opt_nodes(data.type_parameters.as_ref())?;
        let type_annotation = self.visit_opt(data.type_annotation.as_ref())?;
        let modifiers = self.visit_opt_nodes(data.modifiers.as_ref())?;
        Ok(update_arrow_function(
            node,
            parameters,
            body,
            type_parameters,
            type_annotation,
            modifiers,
        ))
    }

    /// Prefix and postfix unary expressions. The operator is carried over.
    pub(super) fn unary(
        &mut self,
        node: &NodeRef,
        data: &UnaryExprData,
        update: SingleChildUpdate,
    ) -> RewriteResult<NodeRef> {
        let operand = self.visit_required(&data.operand, node.kind(), "operand")?;
        Ok(update(node, operand))
    }

    pub(super) fn binary(
        &mut self,
        node: &NodeRef,
        data: &BinaryExprData,
    ) -> RewriteResult<NodeRef> {
        let left = self.visit_required(&data.left, SyntaxKind::BinaryExpression, "left")?;
        let right = self.visit_required(&data.right, SyntaxKind::BinaryExpression, "right")?;
        Ok(update_binary_expression(node, left, right))
    }

    pub(super) fn conditional(
        &mut self,
        node: &NodeRef,
        data: &ConditionalExprData,
    ) -> RewriteResult<NodeRef> {
        let kind = SyntaxKind::ConditionalExpression;
        let condition = self.visit_required(&data.condition, kind, "condition")?;
        let when_true = self.visit_required(&data.when_true, kind, "when_true")?;
        let when_false = self.visit_required(&data.when_false, kind, "when_false")?;
        Ok(update_conditional_expression(node, condition, when_true, when_false))
    }

    pub(super) fn template_expression(
        &mut self,
        node: &NodeRef,
        data: &TemplateExprData,
    ) -> RewriteResult<NodeRef> {
        let head = self.visit_required(&data.head, SyntaxKind::TemplateExpression, "head")?;
        let template_spans = self.visit_nodes(&data.template_spans)?;
        Ok(update_template_expression(node, head, template_spans))
    }

    pub(super) fn template_span(
        &mut self,
        node: &NodeRef,
        data: &TemplateSpanData,
    ) -> RewriteResult<NodeRef> {
        let kind = SyntaxKind::TemplateSpan;
        let expression = self.visit_required(&data.expression, kind, "expression")?;
        let literal = self.visit_required(&data.literal, kind, "literal")?;
        Ok(update_template_span(node, expression, literal))
    }

    pub(super) fn yield_expression(
        &mut self,
        node: &NodeRef,
        data: &YieldExprData,
    ) -> RewriteResult<NodeRef> {
        let expression = self.visit_opt(data.expression.as_ref())?;
        let asterisk_token = self.visit_opt(data.asterisk_token.as_ref())?;
        Ok(update_yield_expression(node, expression, asterisk_token))
    }
}
