//! The rewrite engine.
//!
//! [`RewriteCx`] carries the transform, the caller's state and the depth
//! budget through one rewrite. `fallback` dispatches on the node's payload
//! with one arm per kind and no wildcard; each non-terminal arm calls a
//! small per-kind method (in the sibling modules) that visits every child
//! slot in schema order and rebuilds the parent through its `update_*`.
//!
//! Recursion policy: `visit` calls the transform on a node and then rewrites
//! the children of whatever the transform returned, so replacements are
//! themselves descended into. `fallback` never calls the transform on the
//! node it is given.
//!
//! Each `fallback` level runs under `stacker::maybe_grow`, so the depth
//! budget, not the calling thread's stack size, decides how deep a rewrite
//! may go.

mod declarations;
mod expressions;
mod statements;

use crate::error::{RewriteError, RewriteResult};
use crate::options::RewriteStats;
use crate::transformer::Transformer;
use std::sync::Arc;
use tracing::trace;
use tsr_ast::{NodeArray, NodeData, NodeRef, SyntaxKind};
use tsr_common::limits::{REWRITE_STACK_RED_ZONE, REWRITE_STACK_SEGMENT};

pub(crate) struct RewriteCx<'a, S, T: ?Sized> {
    transform: &'a mut T,
    state: &'a mut S,
    depth: u32,
    max_depth: u32,
    pub(crate) stats: RewriteStats,
}

impl<'a, S, T> RewriteCx<'a, S, T>
where
    T: Transformer<S> + ?Sized,
{
    pub(crate) fn new(transform: &'a mut T, state: &'a mut S, max_depth: u32) -> Self {
        RewriteCx {
            transform,
            state,
            depth: 0,
            max_depth,
            stats: RewriteStats::default(),
        }
    }

    /// Transform `node`, then rewrite the children of the result.
    pub(crate) fn visit(&mut self, node: &NodeRef) -> RewriteResult<Option<NodeRef>> {
        self.stats.visited += 1;
        let Some(result) = self.transform.transform(node, self.state) else {
            self.stats.removed += 1;
            trace!(kind = ?node.kind(), pos = node.loc.pos, "transform removed node");
            return Ok(None);
        };
        if !Arc::ptr_eq(&result, node) {
            self.stats.replaced += 1;
            trace!(
                from = ?node.kind(),
                to = ?result.kind(),
                pos = node.loc.pos,
                "transform replaced node"
            );
        }
        self.fallback(&result).map(Some)
    }

    /// Optional slot: absent stays absent without calling the transform.
    pub(crate) fn visit_opt(&mut self, child: Option<&NodeRef>) -> RewriteResult<Option<NodeRef>> {
        match child {
            Some(child) => self.visit(child),
            None => Ok(None),
        }
    }

    /// Required slot: deleting it is an error.
    pub(crate) fn visit_required(
        &mut self,
        child: &NodeRef,
        parent: SyntaxKind,
        slot: &'static str,
    ) -> RewriteResult<NodeRef> {
        self.visit(child)?
            .ok_or(RewriteError::RequiredChildRemoved { parent, slot })
    }

    /// Element-wise `visit`. Deleted elements are dropped; the input handle
    /// comes back when no element changed.
    pub(crate) fn visit_nodes(&mut self, array: &NodeArray) -> RewriteResult<NodeArray> {
        let mut updated: Option<Vec<NodeRef>> = None;
        for (index, child) in array.iter().enumerate() {
            let visited = self.visit(child)?;
            if let Some(out) = updated.as_mut() {
                out.extend(visited);
                continue;
            }
            if let Some(node) = &visited {
                if Arc::ptr_eq(node, child) {
                    continue;
                }
            }
            // First change: copy the untouched prefix.
            let mut out = Vec::with_capacity(array.len());
            out.extend(array[..index].iter().cloned());
            out.extend(visited);
            updated = Some(out);
        }
        Ok(match updated {
            Some(nodes) => NodeArray::with_range(nodes, array.loc()),
            None => array.clone(),
        })
    }

    pub(crate) fn visit_opt_nodes(
        &mut self,
        array: Option<&NodeArray>,
    ) -> RewriteResult<Option<NodeArray>> {
        match array {
            Some(array) => self.visit_nodes(array).map(Some),
            None => Ok(None),
        }
    }

    /// Rewrite the children of `node`.
    pub(crate) fn fallback(&mut self, node: &NodeRef) -> RewriteResult<NodeRef> {
        if self.depth >= self.max_depth {
            return Err(RewriteError::DepthExceeded {
                limit: self.max_depth,
                kind: node.kind(),
            });
        }
        self.depth += 1;
        self.stats.max_depth_reached = self.stats.max_depth_reached.max(self.depth);
        let result =
            stacker::maybe_grow(REWRITE_STACK_RED_ZONE, REWRITE_STACK_SEGMENT, || {
                self.dispatch(node)
            });
        self.depth -= 1;

        if let Ok(rewritten) = &result {
            if !Arc::ptr_eq(rewritten, node) {
                self.stats.rebuilt += 1;
            }
        }
        result
    }

    fn dispatch(&mut self, node: &NodeRef) -> RewriteResult<NodeRef> {
        use tsr_ast::factory::*;

        match &node.data {
            // Terminal kinds
            NodeData::StringLiteral(_)
            | NodeData::NumericLiteral(_)
            | NodeData::RegularExpressionLiteral(_)
            | NodeData::NoSubstitutionTemplateLiteral(_)
            | NodeData::TemplateHead(_)
            | NodeData::TemplateMiddle(_)
            | NodeData::TemplateTail(_)
            | NodeData::Identifier(_)
            | NodeData::ThisKeyword
            | NodeData::SuperKeyword
            | NodeData::NullKeyword
            | NodeData::TrueKeyword
            | NodeData::FalseKeyword
            | NodeData::Token(_)
            | NodeData::KeywordType(_)
            | NodeData::TypeReference(_)
            | NodeData::FunctionType(_)
            | NodeData::ConstructorType(_)
            | NodeData::TypeQuery(_)
            | NodeData::TypeLiteral(_)
            | NodeData::ArrayType(_)
            | NodeData::TupleType(_)
            | NodeData::UnionType(_)
            | NodeData::ParenthesizedType(_)
            | NodeData::GeneratedLabel(_)
            | NodeData::OmittedExpression
            | NodeData::ContinueStatement(_)
            | NodeData::BreakStatement(_)
            | NodeData::DebuggerStatement
            | NodeData::EmptyStatement
            | NodeData::ShorthandPropertyAssignment(_) => Ok(Arc::clone(node)),

            // Names and declarations
            NodeData::QualifiedName(data) => self.qualified_name(node, data),
            NodeData::ComputedPropertyName(data) => self.computed_property_name(node, data),
            NodeData::TypeParameter(data) => self.type_parameter(node, data),
            NodeData::Parameter(data) => self.parameter(node, data),
            NodeData::PropertySignature(data) => self.property_signature(node, data),
            NodeData::PropertyDeclaration(data) => self.property_declaration(node, data),
            NodeData::MethodSignature(data) => self.method_signature(node, data),
            NodeData::MethodDeclaration(data) => self.method_declaration(node, data),
            NodeData::Constructor(data) => self.constructor(node, data),
            NodeData::GetAccessor(data) => self.accessor(node, data, update_get_accessor),
            NodeData::SetAccessor(data) => self.accessor(node, data, update_set_accessor),
            NodeData::CallSignature(data) => self.signature(node, data, update_call_signature),
            NodeData::ConstructSignature(data) => {
                self.signature(node, data, update_construct_signature)
            }
            NodeData::IndexSignature(data) => {
                self.signature(node, data, update_index_signature)
            }
            NodeData::ObjectBindingPattern(data) => {
                self.binding_pattern(node, data, update_object_binding_pattern)
            }
            NodeData::ArrayBindingPattern(data) => {
                self.binding_pattern(node, data, update_array_binding_pattern)
            }
            NodeData::BindingElement(data) => self.binding_element(node, data),

            // Expressions
            NodeData::ArrayLiteralExpression(data) => self.array_literal(node, data),
            NodeData::ObjectLiteralExpression(data) => self.object_literal(node, data),
            NodeData::PropertyAccessExpression(data) => self.property_access(node, data),
            NodeData::ElementAccessExpression(data) => self.element_access(node, data),
            NodeData::CallExpression(data) => self.call_like(node, data, update_call_expression),
            NodeData::NewExpression(data) => self.call_like(node, data, update_new_expression),
            NodeData::TaggedTemplateExpression(data) => self.tagged_template(node, data),
            NodeData::TypeAssertionExpression(data) => self.type_assertion(node, data),
            NodeData::ParenthesizedExpression(data) => {
                self.wrapped(node, data, update_parenthesized_expression)
            }
            NodeData::FunctionExpression(data) => self.function_expression(node, data),
            NodeData::ArrowFunction(data) => self.arrow_function(node, data),
            NodeData::DeleteExpression(data) => self.wrapped(node, data, update_delete_expression),
            NodeData::TypeOfExpression(data) => {
                self.wrapped(node, data, update_type_of_expression)
            }
            NodeData::VoidExpression(data) => self.wrapped(node, data, update_void_expression),
            NodeData::AwaitExpression(data) => self.wrapped(node, data, update_await_expression),
            NodeData::PrefixUnaryExpression(data) => {
                self.unary(node, data, update_prefix_unary_expression)
            }
            NodeData::PostfixUnaryExpression(data) => {
                self.unary(node, data, update_postfix_unary_expression)
            }
            NodeData::BinaryExpression(data) => self.binary(node, data),
            NodeData::ConditionalExpression(data) => self.conditional(node, data),
            NodeData::TemplateExpression(data) => self.template_expression(node, data),
            NodeData::YieldExpression(data) => self.yield_expression(node, data),
            NodeData::SpreadElementExpression(data) => {
                self.wrapped(node, data, update_spread_element_expression)
            }
            NodeData::TemplateSpan(data) => self.template_span(node, data),

            // Statements
            NodeData::Block(data) => self.block(node, data),
            NodeData::VariableStatement(data) => self.variable_statement(node, data),
            NodeData::ExpressionStatement(data) => self.expression_statement(node, data),
            NodeData::IfStatement(data) => self.if_statement(node, data),
            NodeData::DoStatement(data) => self.do_statement(node, data),
            NodeData::WhileStatement(data) => self.while_statement(node, data),
            NodeData::ForStatement(data) => self.for_statement(node, data),
            NodeData::ForInStatement(data) => self.for_in_statement(node, data),
            NodeData::ReturnStatement(data) => self.return_statement(node, data),
            NodeData::WithStatement(data) => self.with_statement(node, data),
            NodeData::SwitchStatement(data) => self.switch_statement(node, data),
            NodeData::LabeledStatement(data) => self.labeled_statement(node, data),
            NodeData::ThrowStatement(data) => self.throw_statement(node, data),
            NodeData::TryStatement(data) => self.try_statement(node, data),
            NodeData::VariableDeclaration(data) => self.variable_declaration(node, data),
            NodeData::VariableDeclarationList(data) => self.variable_declaration_list(node, data),
            NodeData::FunctionDeclaration(data) => self.function_declaration(node, data),
            NodeData::CaseClause(data) => self.case_clause(node, data),
            NodeData::DefaultClause(data) => self.default_clause(node, data),
            NodeData::CatchClause(data) => self.catch_clause(node, data),
            NodeData::PropertyAssignment(data) => self.property_assignment(node, data),
            NodeData::SourceFile(data) => self.source_file(node, data),
        }
    }
}
