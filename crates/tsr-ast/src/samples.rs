//! Representative trees for exhaustiveness checks and benchmarks.
//!
//! [`sample_node`] builds one node of the requested kind with every optional
//! slot populated, so walkers that skip a slot show up as a missed child.

use crate::base::{NodeArray, NodeRef};
use crate::factory::*;
use crate::flags::NodeFlags;
use crate::node::Label;
use crate::syntax_kind::SyntaxKind;
use crate::token::{TokenKind, TypeKeyword};
use tsr_common::TextRange;

fn ident(text: &str) -> NodeRef {
    create_identifier(text, None, None)
}

fn num(value: u32) -> NodeRef {
    create_numeric_literal(value, None, None)
}

fn token(kind: TokenKind) -> NodeRef {
    create_token(kind, None, None)
}

fn nodes(items: Vec<NodeRef>) -> NodeArray {
    NodeArray::new(items)
}

fn modifiers() -> Option<NodeArray> {
    Some(nodes(vec![token(TokenKind::ExportKeyword)]))
}

fn type_params() -> Option<NodeArray> {
    Some(nodes(vec![create_type_parameter(ident("T"), None, None, None, None)]))
}

fn number_type() -> Option<NodeRef> {
    Some(create_keyword_type(TypeKeyword::Number, None, None))
}

fn params() -> NodeArray {
    nodes(vec![create_parameter(
        ident("p"),
        Some(num(0)),
        number_type(),
        None,
        None,
        None,
        None,
        None,
    )])
}

fn block() -> NodeRef {
    create_block(
        vec![create_expression_statement(ident("body"), None, None)],
        None,
        None,
    )
}

fn statement(name: &str) -> NodeRef {
    create_expression_statement(ident(name), None, None)
}

/// One node of `kind` with every child slot filled in.
pub fn sample_node(kind: SyntaxKind) -> NodeRef {
    match kind {
        SyntaxKind::StringLiteral => create_string_literal("s", None, None),
        SyntaxKind::NumericLiteral => num(1),
        SyntaxKind::RegularExpressionLiteral => {
            create_regular_expression_literal("/a+/g", None, None)
        }
        SyntaxKind::NoSubstitutionTemplateLiteral => {
            create_no_substitution_template_literal("plain", None, None)
        }
        SyntaxKind::TemplateHead => create_template_head("head ", None, None),
        SyntaxKind::TemplateMiddle => create_template_middle(" mid ", None, None),
        SyntaxKind::TemplateTail => create_template_tail(" tail", None, None),
        SyntaxKind::Identifier => ident("x"),
        SyntaxKind::ThisKeyword => create_this_keyword(None, None),
        SyntaxKind::SuperKeyword => create_super_keyword(None, None),
        SyntaxKind::NullKeyword => create_null_keyword(None, None),
        SyntaxKind::TrueKeyword => create_true_keyword(None, None),
        SyntaxKind::FalseKeyword => create_false_keyword(None, None),
        SyntaxKind::Token => token(TokenKind::AsyncKeyword),
        SyntaxKind::QualifiedName => create_qualified_name(ident("ns"), ident("T"), None, None),
        SyntaxKind::ComputedPropertyName => {
            create_computed_property_name(ident("key"), None, None)
        }
        SyntaxKind::TypeParameter => create_type_parameter(
            ident("T"),
            number_type(),
            Some(ident("dflt")),
            None,
            None,
        ),
        SyntaxKind::Parameter => create_parameter(
            ident("p"),
            Some(num(0)),
            number_type(),
            modifiers(),
            Some(token(TokenKind::DotDotDot)),
            Some(token(TokenKind::Question)),
            None,
            None,
        ),
        SyntaxKind::PropertySignature => create_property_signature(
            ident("prop"),
            number_type(),
            Some(token(TokenKind::Question)),
            None,
            None,
        ),
        SyntaxKind::PropertyDeclaration => create_property_declaration(
            ident("field"),
            Some(num(1)),
            number_type(),
            Some(token(TokenKind::Question)),
            None,
            None,
        ),
        SyntaxKind::MethodSignature => create_method_signature(
            ident("m"),
            params(),
            type_params(),
            number_type(),
            modifiers(),
            Some(token(TokenKind::Asterisk)),
            Some(token(TokenKind::Question)),
            None,
            None,
        ),
        SyntaxKind::MethodDeclaration => create_method_declaration(
            ident("m"),
            params(),
            Some(block()),
            type_params(),
            number_type(),
            modifiers(),
            Some(token(TokenKind::Asterisk)),
            None,
            None,
        ),
        SyntaxKind::Constructor => create_constructor(
            params(),
            Some(block()),
            type_params(),
            number_type(),
            modifiers(),
            None,
            None,
        ),
        SyntaxKind::GetAccessor => create_get_accessor(
            ident("value"),
            NodeArray::empty(),
            Some(block()),
            type_params(),
            number_type(),
            modifiers(),
            None,
            None,
        ),
        SyntaxKind::SetAccessor => create_set_accessor(
            ident("value"),
            params(),
            Some(block()),
            type_params(),
            number_type(),
            modifiers(),
            None,
            None,
        ),
        SyntaxKind::CallSignature => {
            create_call_signature(params(), type_params(), number_type(), modifiers(), None, None)
        }
        SyntaxKind::ConstructSignature => create_construct_signature(
            params(),
            type_params(),
            number_type(),
            modifiers(),
            None,
            None,
        ),
        SyntaxKind::IndexSignature => {
            create_index_signature(params(), type_params(), number_type(), modifiers(), None, None)
        }
        SyntaxKind::KeywordType => create_keyword_type(TypeKeyword::String, None, None),
        SyntaxKind::TypeReference => create_type_reference(
            ident("Array"),
            Some(nodes(vec![create_keyword_type(TypeKeyword::Number, None, None)])),
            None,
            None,
        ),
        SyntaxKind::FunctionType => {
            create_function_type(params(), type_params(), number_type(), None, None)
        }
        SyntaxKind::ConstructorType => {
            create_constructor_type(params(), type_params(), number_type(), None, None)
        }
        SyntaxKind::TypeQuery => create_type_query(ident("value"), None, None),
        SyntaxKind::TypeLiteral => create_type_literal(
            vec![create_property_signature(ident("a"), number_type(), None, None, None)],
            None,
            None,
        ),
        SyntaxKind::ArrayType => {
            create_array_type(create_keyword_type(TypeKeyword::Any, None, None), None, None)
        }
        SyntaxKind::TupleType => create_tuple_type(
            vec![
                create_keyword_type(TypeKeyword::String, None, None),
                create_keyword_type(TypeKeyword::Boolean, None, None),
            ],
            None,
            None,
        ),
        SyntaxKind::UnionType => create_union_type(
            vec![
                create_keyword_type(TypeKeyword::Void, None, None),
                create_keyword_type(TypeKeyword::Symbol, None, None),
            ],
            None,
            None,
        ),
        SyntaxKind::ParenthesizedType => create_parenthesized_type(
            create_keyword_type(TypeKeyword::Number, None, None),
            None,
            None,
        ),
        SyntaxKind::ObjectBindingPattern => create_object_binding_pattern(
            vec![create_binding_element(ident("a"), Some(ident("b")), Some(num(1)), None, None)],
            None,
            None,
        ),
        SyntaxKind::ArrayBindingPattern => create_array_binding_pattern(
            vec![
                create_binding_element(ident("first"), None, None, None, None),
                create_omitted_expression(None, None),
            ],
            None,
            None,
        ),
        SyntaxKind::BindingElement => {
            create_binding_element(ident("a"), Some(ident("b")), Some(num(2)), None, None)
        }
        SyntaxKind::ArrayLiteralExpression => {
            create_array_literal_expression(vec![num(1), num(2)], None, None)
        }
        SyntaxKind::ObjectLiteralExpression => create_object_literal_expression(
            vec![
                create_property_assignment(ident("a"), num(1), None, None),
                create_shorthand_property_assignment(ident("b"), None, None),
            ],
            None,
            None,
        ),
        SyntaxKind::PropertyAccessExpression => {
            create_property_access_expression(ident("obj"), ident("prop"), None, None)
        }
        SyntaxKind::ElementAccessExpression => {
            create_element_access_expression(ident("arr"), num(0), None, None)
        }
        SyntaxKind::CallExpression => {
            create_call_expression(ident("f"), vec![num(1), ident("y")], None, None)
        }
        SyntaxKind::NewExpression => create_new_expression(ident("C"), vec![num(1)], None, None),
        SyntaxKind::TaggedTemplateExpression => create_tagged_template_expression(
            ident("tag"),
            create_no_substitution_template_literal("t", None, None),
            None,
            None,
        ),
        SyntaxKind::TypeAssertionExpression => create_type_assertion_expression(
            create_keyword_type(TypeKeyword::Any, None, None),
            ident("value"),
            None,
            None,
        ),
        SyntaxKind::ParenthesizedExpression => {
            create_parenthesized_expression(ident("inner"), None, None)
        }
        SyntaxKind::FunctionExpression => create_function_expression(
            Some(ident("named")),
            params(),
            block(),
            type_params(),
            number_type(),
            modifiers(),
            Some(token(TokenKind::Asterisk)),
            None,
            None,
        ),
        SyntaxKind::ArrowFunction => create_arrow_function(
            params(),
            ident("result"),
            type_params(),
            number_type(),
            Some(nodes(vec![token(TokenKind::AsyncKeyword)])),
            None,
            None,
        ),
        SyntaxKind::DeleteExpression => create_delete_expression(ident("gone"), None, None),
        SyntaxKind::TypeOfExpression => create_type_of_expression(ident("what"), None, None),
        SyntaxKind::VoidExpression => create_void_expression(num(0), None, None),
        SyntaxKind::AwaitExpression => create_await_expression(ident("promise"), None, None),
        SyntaxKind::PrefixUnaryExpression => {
            create_prefix_unary_expression(TokenKind::Minus, num(1), None, None)
        }
        SyntaxKind::PostfixUnaryExpression => {
            create_postfix_unary_expression(ident("i"), TokenKind::PlusPlus, None, None)
        }
        SyntaxKind::BinaryExpression => {
            create_binary_expression(num(3), TokenKind::Plus, num(4), None, None)
        }
        SyntaxKind::ConditionalExpression => {
            create_conditional_expression(ident("c"), num(1), num(2), None, None)
        }
        SyntaxKind::TemplateExpression => create_template_expression(
            create_template_head("a", None, None),
            vec![
                create_template_span(ident("x"), create_template_middle("b", None, None), None, None),
                create_template_span(ident("y"), create_template_tail("c", None, None), None, None),
            ],
            None,
            None,
        ),
        SyntaxKind::YieldExpression => create_yield_expression(
            Some(ident("item")),
            Some(token(TokenKind::Asterisk)),
            None,
            None,
        ),
        SyntaxKind::GeneratedLabel => create_generated_label(Label(1), vec![1, 2], None, None),
        SyntaxKind::SpreadElementExpression => {
            create_spread_element_expression(ident("rest"), None, None)
        }
        SyntaxKind::OmittedExpression => create_omitted_expression(None, None),
        SyntaxKind::TemplateSpan => create_template_span(
            ident("x"),
            create_template_tail("end", None, None),
            None,
            None,
        ),
        SyntaxKind::Block => create_block(vec![statement("a"), statement("b")], None, None),
        SyntaxKind::VariableStatement => create_variable_statement(
            create_variable_declaration_list(
                vec![create_variable_declaration(ident("v"), Some(num(1)), None, None)],
                None,
                Some(NodeFlags::LET),
            ),
            None,
            None,
        ),
        SyntaxKind::EmptyStatement => create_empty_statement(None, None),
        SyntaxKind::ExpressionStatement => statement("expr"),
        SyntaxKind::IfStatement => create_if_statement(
            ident("cond"),
            statement("then"),
            Some(statement("otherwise")),
            None,
            None,
        ),
        SyntaxKind::DoStatement => create_do_statement(block(), ident("again"), None, None),
        SyntaxKind::WhileStatement => create_while_statement(ident("more"), block(), None, None),
        SyntaxKind::ForStatement => create_for_statement(
            Some(create_variable_declaration_list(
                vec![create_variable_declaration(ident("i"), Some(num(0)), None, None)],
                None,
                Some(NodeFlags::LET),
            )),
            Some(create_binary_expression(ident("i"), TokenKind::LessThan, num(10), None, None)),
            Some(create_postfix_unary_expression(ident("i"), TokenKind::PlusPlus, None, None)),
            block(),
            None,
            None,
        ),
        SyntaxKind::ForInStatement => {
            create_for_in_statement(ident("k"), ident("obj"), block(), None, None)
        }
        SyntaxKind::ContinueStatement => {
            create_continue_statement(Some(ident("outer")), None, None)
        }
        SyntaxKind::BreakStatement => create_break_statement(Some(ident("outer")), None, None),
        SyntaxKind::ReturnStatement => create_return_statement(Some(num(0)), None, None),
        SyntaxKind::WithStatement => create_with_statement(ident("scope"), block(), None, None),
        SyntaxKind::SwitchStatement => create_switch_statement(
            ident("tag"),
            vec![
                create_case_clause(num(1), vec![statement("one")], None, None),
                create_default_clause(vec![statement("other")], None, None),
            ],
            None,
            None,
        ),
        SyntaxKind::LabeledStatement => {
            create_labeled_statement(ident("outer"), statement("body"), None, None)
        }
        SyntaxKind::ThrowStatement => create_throw_statement(ident("err"), None, None),
        SyntaxKind::TryStatement => create_try_statement(
            block(),
            Some(create_catch_clause(ident("e"), block(), None, None)),
            Some(block()),
            None,
            None,
        ),
        SyntaxKind::DebuggerStatement => create_debugger_statement(None, None),
        SyntaxKind::VariableDeclaration => {
            create_variable_declaration(ident("v"), Some(num(1)), None, None)
        }
        SyntaxKind::VariableDeclarationList => create_variable_declaration_list(
            vec![
                create_variable_declaration(ident("a"), Some(num(1)), None, None),
                create_variable_declaration(ident("b"), None, None, None),
            ],
            None,
            Some(NodeFlags::CONST),
        ),
        SyntaxKind::FunctionDeclaration => create_function_declaration(
            ident("f"),
            params(),
            Some(block()),
            type_params(),
            number_type(),
            modifiers(),
            Some(token(TokenKind::Asterisk)),
            None,
            Some(NodeFlags::EXPORT),
        ),
        SyntaxKind::CaseClause => create_case_clause(num(1), vec![statement("one")], None, None),
        SyntaxKind::DefaultClause => create_default_clause(vec![statement("other")], None, None),
        SyntaxKind::CatchClause => create_catch_clause(ident("e"), block(), None, None),
        SyntaxKind::PropertyAssignment => {
            create_property_assignment(ident("key"), num(1), None, None)
        }
        SyntaxKind::ShorthandPropertyAssignment => {
            create_shorthand_property_assignment(ident("key"), None, None)
        }
        SyntaxKind::SourceFile => create_source_file(
            "sample.ts",
            vec![statement("a"), statement("b")],
            None,
            None,
        ),
    }
}

/// A source file of `functions` function declarations, each holding a few
/// statements with arithmetic, calls and control flow.
///
/// Every node gets a distinct, increasing range so rebuilt nodes can be
/// told apart from their originals by position as well as identity.
pub fn sample_program(functions: usize) -> NodeRef {
    let mut pos = 0u32;
    let mut next = move |width: u32| {
        let range = TextRange::new(pos, pos + width);
        pos += width;
        Some(range)
    };

    let mut statements = Vec::with_capacity(functions);
    for index in 0..functions {
        let name = format!("f{index}");
        let sum = create_binary_expression(
            create_numeric_literal(index, next(1), None),
            TokenKind::Plus,
            create_identifier("x", next(1), None),
            next(3),
            None,
        );
        let declaration = create_variable_statement(
            create_variable_declaration_list(
                vec![create_variable_declaration(
                    create_identifier("y", next(1), None),
                    Some(sum),
                    next(5),
                    None,
                )],
                next(6),
                Some(NodeFlags::CONST),
            ),
            next(7),
            None,
        );
        let call = create_expression_statement(
            create_call_expression(
                create_identifier("log", next(3), None),
                vec![create_identifier("y", next(1), None)],
                next(6),
                None,
            ),
            next(7),
            None,
        );
        let guard = create_if_statement(
            create_binary_expression(
                create_identifier("y", next(1), None),
                TokenKind::GreaterThan,
                create_numeric_literal(10, next(2), None),
                next(4),
                None,
            ),
            create_return_statement(Some(create_identifier("y", next(1), None)), next(8), None),
            None,
            next(14),
            None,
        );
        let body = create_block(vec![declaration, call, guard], next(30), None);
        statements.push(create_function_declaration(
            create_identifier(name, next(2), None),
            vec![create_parameter(
                create_identifier("x", next(1), None),
                None,
                None,
                None,
                None,
                None,
                next(1),
                None,
            )],
            Some(body),
            None,
            None,
            None,
            None,
            next(40),
            None,
        ));
    }

    create_source_file("program.ts", statements, next(0), None)
}
