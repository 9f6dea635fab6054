//! Read-only access to nodes.
//!
//! Checkers and printers navigate the tree through these helpers. Every
//! match here is exhaustive over `NodeData`, so a new kind cannot be added
//! without deciding how it is walked.

use crate::base::{NodeArray, NodeRef};
use crate::node::*;
use crate::syntax_kind::SyntaxKind;

macro_rules! data_accessors {
    ($($fn_name:ident -> $data:ty { $($variant:ident)|+ })*) => {
        $(
            #[inline]
            pub fn $fn_name(&self) -> Option<&$data> {
                match &self.data {
                    $(NodeData::$variant(data))|+ => Some(data),
                    _ => None,
                }
            }
        )*
    };
}

impl Node {
    pub fn kind(&self) -> SyntaxKind {
        match &self.data {
            NodeData::StringLiteral(_) => SyntaxKind::StringLiteral,
            NodeData::NumericLiteral(_) => SyntaxKind::NumericLiteral,
            NodeData::RegularExpressionLiteral(_) => SyntaxKind::RegularExpressionLiteral,
            NodeData::NoSubstitutionTemplateLiteral(_) => {
                SyntaxKind::NoSubstitutionTemplateLiteral
            }
            NodeData::TemplateHead(_) => SyntaxKind::TemplateHead,
            NodeData::TemplateMiddle(_) => SyntaxKind::TemplateMiddle,
            NodeData::TemplateTail(_) => SyntaxKind::TemplateTail,
            NodeData::Identifier(_) => SyntaxKind::Identifier,
            NodeData::ThisKeyword => SyntaxKind::ThisKeyword,
            NodeData::SuperKeyword => SyntaxKind::SuperKeyword,
            NodeData::NullKeyword => SyntaxKind::NullKeyword,
            NodeData::TrueKeyword => SyntaxKind::TrueKeyword,
            NodeData::FalseKeyword => SyntaxKind::FalseKeyword,
            NodeData::Token(_) => SyntaxKind::Token,
            NodeData::QualifiedName(_) => SyntaxKind::QualifiedName,
            NodeData::ComputedPropertyName(_) => SyntaxKind::ComputedPropertyName,
            NodeData::TypeParameter(_) => SyntaxKind::TypeParameter,
            NodeData::Parameter(_) => SyntaxKind::Parameter,
            NodeData::PropertySignature(_) => SyntaxKind::PropertySignature,
            NodeData::PropertyDeclaration(_) => SyntaxKind::PropertyDeclaration,
            NodeData::MethodSignature(_) => SyntaxKind::MethodSignature,
            NodeData::MethodDeclaration(_) => SyntaxKind::MethodDeclaration,
            NodeData::Constructor(_) => SyntaxKind::Constructor,
            NodeData::GetAccessor(_) => SyntaxKind::GetAccessor,
            NodeData::SetAccessor(_) => SyntaxKind::SetAccessor,
            NodeData::CallSignature(_) => SyntaxKind::CallSignature,
            NodeData::ConstructSignature(_) => SyntaxKind::ConstructSignature,
            NodeData::IndexSignature(_) => SyntaxKind::IndexSignature,
            NodeData::KeywordType(_) => SyntaxKind::KeywordType,
            NodeData::TypeReference(_) => SyntaxKind::TypeReference,
            NodeData::FunctionType(_) => SyntaxKind::FunctionType,
            NodeData::ConstructorType(_) => SyntaxKind::ConstructorType,
            NodeData::TypeQuery(_) => SyntaxKind::TypeQuery,
            NodeData::TypeLiteral(_) => SyntaxKind::TypeLiteral,
            NodeData::ArrayType(_) => SyntaxKind::ArrayType,
            NodeData::TupleType(_) => SyntaxKind::TupleType,
            NodeData::UnionType(_) => SyntaxKind::UnionType,
            NodeData::ParenthesizedType(_) => SyntaxKind::ParenthesizedType,
            NodeData::ObjectBindingPattern(_) => SyntaxKind::ObjectBindingPattern,
            NodeData::ArrayBindingPattern(_) => SyntaxKind::ArrayBindingPattern,
            NodeData::BindingElement(_) => SyntaxKind::BindingElement,
            NodeData::ArrayLiteralExpression(_) => SyntaxKind::ArrayLiteralExpression,
            NodeData::ObjectLiteralExpression(_) => SyntaxKind::ObjectLiteralExpression,
            NodeData::PropertyAccessExpression(_) => SyntaxKind::PropertyAccessExpression,
            NodeData::ElementAccessExpression(_) => SyntaxKind::ElementAccessExpression,
            NodeData::CallExpression(_) => SyntaxKind::CallExpression,
            NodeData::NewExpression(_) => SyntaxKind::NewExpression,
            NodeData::TaggedTemplateExpression(_) => SyntaxKind::TaggedTemplateExpression,
            NodeData::TypeAssertionExpression(_) => SyntaxKind::TypeAssertionExpression,
            NodeData::ParenthesizedExpression(_) => SyntaxKind::ParenthesizedExpression,
            NodeData::FunctionExpression(_) => SyntaxKind::FunctionExpression,
            NodeData::ArrowFunction(_) => SyntaxKind::ArrowFunction,
            NodeData::DeleteExpression(_) => SyntaxKind::DeleteExpression,
            NodeData::TypeOfExpression(_) => SyntaxKind::TypeOfExpression,
            NodeData::VoidExpression(_) => SyntaxKind::VoidExpression,
            NodeData::AwaitExpression(_) => SyntaxKind::AwaitExpression,
            NodeData::PrefixUnaryExpression(_) => SyntaxKind::PrefixUnaryExpression,
            NodeData::PostfixUnaryExpression(_) => SyntaxKind::PostfixUnaryExpression,
            NodeData::BinaryExpression(_) => SyntaxKind::BinaryExpression,
            NodeData::ConditionalExpression(_) => SyntaxKind::ConditionalExpression,
            NodeData::TemplateExpression(_) => SyntaxKind::TemplateExpression,
            NodeData::YieldExpression(_) => SyntaxKind::YieldExpression,
            NodeData::GeneratedLabel(_) => SyntaxKind::GeneratedLabel,
            NodeData::SpreadElementExpression(_) => SyntaxKind::SpreadElementExpression,
            NodeData::OmittedExpression => SyntaxKind::OmittedExpression,
            NodeData::TemplateSpan(_) => SyntaxKind::TemplateSpan,
            NodeData::Block(_) => SyntaxKind::Block,
            NodeData::VariableStatement(_) => SyntaxKind::VariableStatement,
            NodeData::EmptyStatement => SyntaxKind::EmptyStatement,
            NodeData::ExpressionStatement(_) => SyntaxKind::ExpressionStatement,
            NodeData::IfStatement(_) => SyntaxKind::IfStatement,
            NodeData::DoStatement(_) => SyntaxKind::DoStatement,
            NodeData::WhileStatement(_) => SyntaxKind::WhileStatement,
            NodeData::ForStatement(_) => SyntaxKind::ForStatement,
            NodeData::ForInStatement(_) => SyntaxKind::ForInStatement,
            NodeData::ContinueStatement(_) => SyntaxKind::ContinueStatement,
            NodeData::BreakStatement(_) => SyntaxKind::BreakStatement,
            NodeData::ReturnStatement(_) => SyntaxKind::ReturnStatement,
            NodeData::WithStatement(_) => SyntaxKind::WithStatement,
            NodeData::SwitchStatement(_) => SyntaxKind::SwitchStatement,
            NodeData::LabeledStatement(_) => SyntaxKind::LabeledStatement,
            NodeData::ThrowStatement(_) => SyntaxKind::ThrowStatement,
            NodeData::TryStatement(_) => SyntaxKind::TryStatement,
            NodeData::DebuggerStatement => SyntaxKind::DebuggerStatement,
            NodeData::VariableDeclaration(_) => SyntaxKind::VariableDeclaration,
            NodeData::VariableDeclarationList(_) => SyntaxKind::VariableDeclarationList,
            NodeData::FunctionDeclaration(_) => SyntaxKind::FunctionDeclaration,
            NodeData::CaseClause(_) => SyntaxKind::CaseClause,
            NodeData::DefaultClause(_) => SyntaxKind::DefaultClause,
            NodeData::CatchClause(_) => SyntaxKind::CatchClause,
            NodeData::PropertyAssignment(_) => SyntaxKind::PropertyAssignment,
            NodeData::ShorthandPropertyAssignment(_) => SyntaxKind::ShorthandPropertyAssignment,
            NodeData::SourceFile(_) => SyntaxKind::SourceFile,
        }
    }

    /// Source text for literal and identifier atoms.
    pub fn text(&self) -> Option<&str> {
        match &self.data {
            NodeData::StringLiteral(data)
            | NodeData::NumericLiteral(data)
            | NodeData::RegularExpressionLiteral(data)
            | NodeData::NoSubstitutionTemplateLiteral(data)
            | NodeData::TemplateHead(data)
            | NodeData::TemplateMiddle(data)
            | NodeData::TemplateTail(data) => Some(&data.text),
            NodeData::Identifier(data) => Some(&data.text),
            _ => None,
        }
    }

    data_accessors! {
        as_literal -> LiteralData {
            StringLiteral | NumericLiteral | RegularExpressionLiteral
                | NoSubstitutionTemplateLiteral | TemplateHead | TemplateMiddle | TemplateTail
        }
        as_identifier -> IdentifierData { Identifier }
        as_token -> TokenData { Token }
        as_qualified_name -> QualifiedNameData { QualifiedName }
        as_parameter -> ParameterData { Parameter }
        as_accessor -> AccessorData { GetAccessor | SetAccessor }
        as_signature -> SignatureData { CallSignature | ConstructSignature | IndexSignature }
        as_binding_pattern -> BindingPatternData { ObjectBindingPattern | ArrayBindingPattern }
        as_call_expression -> CallExprData { CallExpression | NewExpression }
        as_wrapped_expression -> WrappedExprData {
            ParenthesizedExpression | DeleteExpression | TypeOfExpression | VoidExpression
                | AwaitExpression | SpreadElementExpression
        }
        as_unary_expression -> UnaryExprData { PrefixUnaryExpression | PostfixUnaryExpression }
        as_binary_expression -> BinaryExprData { BinaryExpression }
        as_conditional_expression -> ConditionalExprData { ConditionalExpression }
        as_function_expression -> FunctionExprData { FunctionExpression }
        as_arrow_function -> ArrowFunctionData { ArrowFunction }
        as_block -> BlockData { Block }
        as_expression_statement -> ExprStatementData { ExpressionStatement }
        as_if_statement -> IfStatementData { IfStatement }
        as_jump -> JumpData { BreakStatement | ContinueStatement }
        as_return_statement -> ReturnData { ReturnStatement }
        as_variable_declaration -> VariableDeclarationData { VariableDeclaration }
        as_variable_declaration_list -> VariableDeclarationListData { VariableDeclarationList }
        as_function_declaration -> FunctionDeclarationData { FunctionDeclaration }
        as_source_file -> SourceFileData { SourceFile }
    }

    /// Calls `f` on every present child, in schema order.
    ///
    /// Unlike the rewriter, this walks into type annotations and the
    /// children of rewriter-terminal kinds too.
    pub fn for_each_child<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a NodeRef),
    {
        let f = &mut f;
        match &self.data {
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
            | NodeData::GeneratedLabel(_)
            | NodeData::OmittedExpression
            | NodeData::EmptyStatement
            | NodeData::DebuggerStatement => {}
            NodeData::QualifiedName(d) => {
                f(&d.left);
                f(&d.right);
            }
            NodeData::ComputedPropertyName(d) => f(&d.expression),
            NodeData::TypeParameter(d) => {
                f(&d.name);
                opt(f, &d.constraint);
                opt(f, &d.expression);
            }
            NodeData::Parameter(d) => {
                f(&d.name);
                opt(f, &d.initializer);
                opt(f, &d.type_annotation);
                opt_many(f, &d.modifiers);
                opt(f, &d.dot_dot_dot_token);
                opt(f, &d.question_token);
            }
            NodeData::PropertySignature(d) => {
                f(&d.name);
                opt(f, &d.type_annotation);
                opt(f, &d.question_token);
            }
            NodeData::PropertyDeclaration(d) => {
                f(&d.name);
                opt(f, &d.initializer);
                opt(f, &d.type_annotation);
                opt(f, &d.question_token);
            }
            NodeData::MethodSignature(d) => {
                f(&d.name);
                many(f, &d.parameters);
                opt_many(f, &d.type_parameters);
                opt(f, &d.type_annotation);
                opt_many(f, &d.modifiers);
                opt(f, &d.asterisk_token);
                opt(f, &d.question_token);
            }
            NodeData::MethodDeclaration(d) => {
                f(&d.name);
                many(f, &d.parameters);
                opt(f, &d.body);
                opt_many(f, &d.type_parameters);
                opt(f, &d.type_annotation);
                opt_many(f, &d.modifiers);
                opt(f, &d.asterisk_token);
            }
            NodeData::Constructor(d) => {
                many(f, &d.parameters);
                opt(f, &d.body);
                opt_many(f, &d.type_parameters);
                opt(f, &d.type_annotation);
                opt_many(f, &d.modifiers);
            }
            NodeData::GetAccessor(d) | NodeData::SetAccessor(d) => {
                f(&d.name);
                many(f, &d.parameters);
                opt(f, &d.body);
                opt_many(f, &d.type_parameters);
                opt(f, &d.type_annotation);
                opt_many(f, &d.modifiers);
            }
            NodeData::CallSignature(d)
            | NodeData::ConstructSignature(d)
            | NodeData::IndexSignature(d) => {
                many(f, &d.parameters);
                opt_many(f, &d.type_parameters);
                opt(f, &d.type_annotation);
                opt_many(f, &d.modifiers);
            }
            NodeData::TypeReference(d) => {
                f(&d.type_name);
                opt_many(f, &d.type_arguments);
            }
            NodeData::FunctionType(d) | NodeData::ConstructorType(d) => {
                many(f, &d.parameters);
                opt_many(f, &d.type_parameters);
                opt(f, &d.type_annotation);
            }
            NodeData::TypeQuery(d) => f(&d.expr_name),
            NodeData::TypeLiteral(d) => many(f, &d.members),
            NodeData::ArrayType(d) => f(&d.element_type),
            NodeData::TupleType(d) => many(f, &d.element_types),
            NodeData::UnionType(d) => many(f, &d.types),
            NodeData::ParenthesizedType(d) => f(&d.type_node),
            NodeData::ObjectBindingPattern(d) | NodeData::ArrayBindingPattern(d) => {
                many(f, &d.elements);
            }
            NodeData::BindingElement(d) => {
                f(&d.name);
                opt(f, &d.property_name);
                opt(f, &d.initializer);
            }
            NodeData::ArrayLiteralExpression(d) => many(f, &d.elements),
            NodeData::ObjectLiteralExpression(d) => many(f, &d.properties),
            NodeData::PropertyAccessExpression(d) => {
                f(&d.expression);
                f(&d.name);
            }
            NodeData::ElementAccessExpression(d) => {
                f(&d.expression);
                f(&d.argument_expression);
            }
            NodeData::CallExpression(d) | NodeData::NewExpression(d) => {
                f(&d.expression);
                many(f, &d.arguments);
            }
            NodeData::TaggedTemplateExpression(d) => {
                f(&d.tag);
                f(&d.template);
            }
            NodeData::TypeAssertionExpression(d) => {
                f(&d.type_annotation);
                f(&d.expression);
            }
            NodeData::ParenthesizedExpression(d)
            | NodeData::DeleteExpression(d)
            | NodeData::TypeOfExpression(d)
            | NodeData::VoidExpression(d)
            | NodeData::AwaitExpression(d)
            | NodeData::SpreadElementExpression(d) => f(&d.expression),
            NodeData::FunctionExpression(d) => {
                opt(f, &d.name);
                many(f, &d.parameters);
                f(&d.body);
                opt_many(f, &d.type_parameters);
                opt(f, &d.type_annotation);
                opt_many(f, &d.modifiers);
                opt(f, &d.asterisk_token);
            }
            NodeData::ArrowFunction(d) => {
                many(f, &d.parameters);
                f(&d.body);
                opt_many(f, &d.type_parameters);
                opt(f, &d.type_annotation);
                opt_many(f, &d.modifiers);
            }
            NodeData::PrefixUnaryExpression(d) | NodeData::PostfixUnaryExpression(d) => {
                f(&d.operand);
            }
            NodeData::BinaryExpression(d) => {
                f(&d.left);
                f(&d.right);
            }
            NodeData::ConditionalExpression(d) => {
                f(&d.condition);
                f(&d.when_true);
                f(&d.when_false);
            }
            NodeData::TemplateExpression(d) => {
                f(&d.head);
                many(f, &d.template_spans);
            }
            NodeData::YieldExpression(d) => {
                opt(f, &d.expression);
                opt(f, &d.asterisk_token);
            }
            NodeData::TemplateSpan(d) => {
                f(&d.expression);
                f(&d.literal);
            }
            NodeData::Block(d) => many(f, &d.statements),
            NodeData::VariableStatement(d) => f(&d.declaration_list),
            NodeData::ExpressionStatement(d) => f(&d.expression),
            NodeData::IfStatement(d) => {
                f(&d.expression);
                f(&d.then_statement);
                opt(f, &d.else_statement);
            }
            NodeData::DoStatement(d) => {
                f(&d.statement);
                f(&d.expression);
            }
            NodeData::WhileStatement(d) => {
                f(&d.expression);
                f(&d.statement);
            }
            NodeData::ForStatement(d) => {
                opt(f, &d.initializer);
                opt(f, &d.condition);
                opt(f, &d.iterator);
                f(&d.statement);
            }
            NodeData::ForInStatement(d) => {
                f(&d.initializer);
                f(&d.expression);
                f(&d.statement);
            }
            NodeData::ContinueStatement(d) | NodeData::BreakStatement(d) => opt(f, &d.label),
            NodeData::ReturnStatement(d) => opt(f, &d.expression),
            NodeData::WithStatement(d) => {
                f(&d.expression);
                f(&d.statement);
            }
            NodeData::SwitchStatement(d) => {
                f(&d.expression);
                many(f, &d.clauses);
            }
            NodeData::LabeledStatement(d) => {
                f(&d.label);
                f(&d.statement);
            }
            NodeData::ThrowStatement(d) => f(&d.expression),
            NodeData::TryStatement(d) => {
                f(&d.try_block);
                opt(f, &d.catch_clause);
                opt(f, &d.finally_block);
            }
            NodeData::VariableDeclaration(d) => {
                f(&d.name);
                opt(f, &d.initializer);
            }
            NodeData::VariableDeclarationList(d) => many(f, &d.declarations),
            NodeData::FunctionDeclaration(d) => {
                f(&d.name);
                many(f, &d.parameters);
                opt(f, &d.body);
                opt_many(f, &d.type_parameters);
                opt(f, &d.type_annotation);
                opt_many(f, &d.modifiers);
                opt(f, &d.asterisk_token);
            }
            NodeData::CaseClause(d) => {
                f(&d.expression);
                many(f, &d.statements);
            }
            NodeData::DefaultClause(d) => many(f, &d.statements),
            NodeData::CatchClause(d) => {
                f(&d.name);
                f(&d.block);
            }
            NodeData::PropertyAssignment(d) => {
                f(&d.name);
                f(&d.initializer);
            }
            NodeData::ShorthandPropertyAssignment(d) => f(&d.name),
            NodeData::SourceFile(d) => many(f, &d.statements),
        }
    }

    /// Every present child, in schema order.
    pub fn children(&self) -> Vec<&NodeRef> {
        let mut out = Vec::new();
        self.for_each_child(|child| out.push(child));
        out
    }

    /// Number of nodes in this subtree, the node itself included.
    ///
    /// Walks with an explicit stack, so arbitrarily deep trees are fine.
    pub fn count_nodes(&self) -> usize {
        let mut count = 1;
        let mut stack: Vec<&NodeRef> = self.children();
        while let Some(node) = stack.pop() {
            count += 1;
            node.for_each_child(|child| stack.push(child));
        }
        count
    }

    /// Debug dump of the subtree as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[inline]
fn opt<'a, F: FnMut(&'a NodeRef)>(f: &mut F, child: &'a Option<NodeRef>) {
    if let Some(child) = child {
        f(child);
    }
}

#[inline]
fn many<'a, F: FnMut(&'a NodeRef)>(f: &mut F, children: &'a NodeArray) {
    for child in children.nodes() {
        f(child);
    }
}

#[inline]
fn opt_many<'a, F: FnMut(&'a NodeRef)>(f: &mut F, children: &'a Option<NodeArray>) {
    if let Some(children) = children {
        many(f, children);
    }
}
