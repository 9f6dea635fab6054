//! Statements, variable/function declarations, clauses, object literal
//! members and the source file root.

use super::finish_node;
use crate::base::{NodeArray, NodeRef, same_array, same_node, same_opt_array, same_opt_node};
use crate::flags::NodeFlags;
use crate::node::*;
use std::sync::Arc;
use tsr_common::TextRange;

// =============================================================================
// Simple statements
// =============================================================================

pub fn create_block(
    statements: impl Into<NodeArray>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::Block(BlockData {
            statements: statements.into(),
        }),
        location,
        flags,
    )
}

pub fn update_block(node: &NodeRef, statements: NodeArray) -> NodeRef {
    let data = expect_data!(node, Block);
    if same_array(&data.statements, &statements) {
        return Arc::clone(node);
    }
    create_block(statements, Some(node.loc), Some(node.flags))
}

pub fn create_variable_statement(
    declaration_list: NodeRef,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::VariableStatement(VariableStatementData { declaration_list }),
        location,
        flags,
    )
}

pub fn update_variable_statement(node: &NodeRef, declaration_list: NodeRef) -> NodeRef {
    let data = expect_data!(node, VariableStatement);
    if same_node(&data.declaration_list, &declaration_list) {
        return Arc::clone(node);
    }
    create_variable_statement(declaration_list, Some(node.loc), Some(node.flags))
}

pub fn create_empty_statement(location: Option<TextRange>, flags: Option<NodeFlags>) -> NodeRef {
    finish_node(NodeData::EmptyStatement, location, flags)
}

pub fn create_expression_statement(
    expression: NodeRef,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::ExpressionStatement(ExprStatementData { expression }),
        location,
        flags,
    )
}

pub fn update_expression_statement(node: &NodeRef, expression: NodeRef) -> NodeRef {
    let data = expect_data!(node, ExpressionStatement);
    if same_node(&data.expression, &expression) {
        return Arc::clone(node);
    }
    create_expression_statement(expression, Some(node.loc), Some(node.flags))
}

pub fn create_debugger_statement(location: Option<TextRange>, flags: Option<NodeFlags>) -> NodeRef {
    finish_node(NodeData::DebuggerStatement, location, flags)
}

// =============================================================================
// Control flow
// =============================================================================

pub fn create_if_statement(
    expression: NodeRef,
    then_statement: NodeRef,
    else_statement: Option<NodeRef>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::IfStatement(IfStatementData {
            expression,
            then_statement,
            else_statement,
        }),
        location,
        flags,
    )
}

pub fn update_if_statement(
    node: &NodeRef,
    expression: NodeRef,
    then_statement: NodeRef,
    else_statement: Option<NodeRef>,
) -> NodeRef {
    let data = expect_data!(node, IfStatement);
    if same_node(&data.expression, &expression)
        && same_node(&data.then_statement, &then_statement)
        && same_opt_node(data.else_statement.as_ref(), else_statement.as_ref())
    {
        return Arc::clone(node);
    }
    create_if_statement(
        expression,
        then_statement,
        else_statement,
        Some(node.loc),
        Some(node.flags),
    )
}

pub fn create_do_statement(
    statement: NodeRef,
    expression: NodeRef,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::DoStatement(DoStatementData {
            statement,
            expression,
        }),
        location,
        flags,
    )
}

pub fn update_do_statement(node: &NodeRef, statement: NodeRef, expression: NodeRef) -> NodeRef {
    let data = expect_data!(node, DoStatement);
    if same_node(&data.statement, &statement) && same_node(&data.expression, &expression) {
        return Arc::clone(node);
    }
    create_do_statement(statement, expression, Some(node.loc), Some(node.flags))
}

pub fn create_while_statement(
    expression: NodeRef,
    statement: NodeRef,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::WhileStatement(WhileStatementData {
            expression,
            statement,
        }),
        location,
        flags,
    )
}

pub fn update_while_statement(node: &NodeRef, expression: NodeRef, statement: NodeRef) -> NodeRef {
    let data = expect_data!(node, WhileStatement);
    if same_node(&data.expression, &expression) && same_node(&data.statement, &statement) {
        return Arc::clone(node);
    }
    create_while_statement(expression, statement, Some(node.loc), Some(node.flags))
}

pub fn create_for_statement(
    initializer: Option<NodeRef>,
    condition: Option<NodeRef>,
    iterator: Option<NodeRef>,
    statement: NodeRef,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::ForStatement(ForStatementData {
            initializer,
            condition,
            iterator,
            statement,
        }),
        location,
        flags,
    )
}

pub fn update_for_statement(
    node: &NodeRef,
    initializer: Option<NodeRef>,
    condition: Option<NodeRef>,
    iterator: Option<NodeRef>,
    statement: NodeRef,
) -> NodeRef {
    let data = expect_data!(node, ForStatement);
    if same_opt_node(data.initializer.as_ref(), initializer.as_ref())
        && same_opt_node(data.condition.as_ref(), condition.as_ref())
        && same_opt_node(data.iterator.as_ref(), iterator.as_ref())
        && same_node(&data.statement, &statement)
    {
        return Arc::clone(node);
    }
    create_for_statement(
        initializer,
        condition,
        iterator,
        statement,
        Some(node.loc),
        Some(node.flags),
    )
}

pub fn create_for_in_statement(
    initializer: NodeRef,
    expression: NodeRef,
    statement: NodeRef,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::ForInStatement(ForInStatementData {
            initializer,
            expression,
            statement,
        }),
        location,
        flags,
    )
}

pub fn update_for_in_statement(
    node: &NodeRef,
    initializer: NodeRef,
    expression: NodeRef,
    statement: NodeRef,
) -> NodeRef {
    let data = expect_data!(node, ForInStatement);
    if same_node(&data.initializer, &initializer)
        && same_node(&data.expression, &expression)
        && same_node(&data.statement, &statement)
    {
        return Arc::clone(node);
    }
    create_for_in_statement(
        initializer,
        expression,
        statement,
        Some(node.loc),
        Some(node.flags),
    )
}

pub fn create_continue_statement(
    label: Option<NodeRef>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::ContinueStatement(JumpData { label }),
        location,
        flags,
    )
}

pub fn update_continue_statement(node: &NodeRef, label: Option<NodeRef>) -> NodeRef {
    let data = expect_data!(node, ContinueStatement);
    if same_opt_node(data.label.as_ref(), label.as_ref()) {
        return Arc::clone(node);
    }
    create_continue_statement(label, Some(node.loc), Some(node.flags))
}

pub fn create_break_statement(
    label: Option<NodeRef>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(NodeData::BreakStatement(JumpData { label }), location, flags)
}

pub fn update_break_statement(node: &NodeRef, label: Option<NodeRef>) -> NodeRef {
    let data = expect_data!(node, BreakStatement);
    if same_opt_node(data.label.as_ref(), label.as_ref()) {
        return Arc::clone(node);
    }
    create_break_statement(label, Some(node.loc), Some(node.flags))
}

pub fn create_return_statement(
    expression: Option<NodeRef>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::ReturnStatement(ReturnData { expression }),
        location,
        flags,
    )
}

pub fn update_return_statement(node: &NodeRef, expression: Option<NodeRef>) -> NodeRef {
    let data = expect_data!(node, ReturnStatement);
    if same_opt_node(data.expression.as_ref(), expression.as_ref()) {
        return Arc::clone(node);
    }
    create_return_statement(expression, Some(node.loc), Some(node.flags))
}

pub fn create_with_statement(
    expression: NodeRef,
    statement: NodeRef,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::WithStatement(WithData {
            expression,
            statement,
        }),
        location,
        flags,
    )
}

pub fn update_with_statement(node: &NodeRef, expression: NodeRef, statement: NodeRef) -> NodeRef {
    let data = expect_data!(node, WithStatement);
    if same_node(&data.expression, &expression) && same_node(&data.statement, &statement) {
        return Arc::clone(node);
    }
    create_with_statement(expression, statement, Some(node.loc), Some(node.flags))
}

pub fn create_switch_statement(
    expression: NodeRef,
    clauses: impl Into<NodeArray>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::SwitchStatement(SwitchData {
            expression,
            clauses: clauses.into(),
        }),
        location,
        flags,
    )
}

pub fn update_switch_statement(node: &NodeRef, expression: NodeRef, clauses: NodeArray) -> NodeRef {
    let data = expect_data!(node, SwitchStatement);
    if same_node(&data.expression, &expression) && same_array(&data.clauses, &clauses) {
        return Arc::clone(node);
    }
    create_switch_statement(expression, clauses, Some(node.loc), Some(node.flags))
}

pub fn create_labeled_statement(
    label: NodeRef,
    statement: NodeRef,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::LabeledStatement(LabeledData { label, statement }),
        location,
        flags,
    )
}

pub fn update_labeled_statement(node: &NodeRef, label: NodeRef, statement: NodeRef) -> NodeRef {
    let data = expect_data!(node, LabeledStatement);
    if same_node(&data.label, &label) && same_node(&data.statement, &statement) {
        return Arc::clone(node);
    }
    create_labeled_statement(label, statement, Some(node.loc), Some(node.flags))
}

pub fn create_throw_statement(
    expression: NodeRef,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::ThrowStatement(ThrowData { expression }),
        location,
        flags,
    )
}

pub fn update_throw_statement(node: &NodeRef, expression: NodeRef) -> NodeRef {
    let data = expect_data!(node, ThrowStatement);
    if same_node(&data.expression, &expression) {
        return Arc::clone(node);
    }
    create_throw_statement(expression, Some(node.loc), Some(node.flags))
}

pub fn create_try_statement(
    try_block: NodeRef,
    catch_clause: Option<NodeRef>,
    finally_block: Option<NodeRef>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::TryStatement(TryData {
            try_block,
            catch_clause,
            finally_block,
        }),
        location,
        flags,
    )
}

pub fn update_try_statement(
    node: &NodeRef,
    try_block: NodeRef,
    catch_clause: Option<NodeRef>,
    finally_block: Option<NodeRef>,
) -> NodeRef {
    let data = expect_data!(node, TryStatement);
    if same_node(&data.try_block, &try_block)
        && same_opt_node(data.catch_clause.as_ref(), catch_clause.as_ref())
        && same_opt_node(data.finally_block.as_ref(), finally_block.as_ref())
    {
        return Arc::clone(node);
    }
    create_try_statement(
        try_block,
        catch_clause,
        finally_block,
        Some(node.loc),
        Some(node.flags),
    )
}

// =============================================================================
// Declarations
// =============================================================================

pub fn create_variable_declaration(
    name: NodeRef,
    initializer: Option<NodeRef>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::VariableDeclaration(VariableDeclarationData { name, initializer }),
        location,
        flags,
    )
}

pub fn update_variable_declaration(
    node: &NodeRef,
    name: NodeRef,
    initializer: Option<NodeRef>,
) -> NodeRef {
    let data = expect_data!(node, VariableDeclaration);
    if same_node(&data.name, &name)
        && same_opt_node(data.initializer.as_ref(), initializer.as_ref())
    {
        return Arc::clone(node);
    }
    create_variable_declaration(name, initializer, Some(node.loc), Some(node.flags))
}

/// `let`/`const` is recorded in `flags`, not in the payload.
pub fn create_variable_declaration_list(
    declarations: impl Into<NodeArray>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::VariableDeclarationList(VariableDeclarationListData {
            declarations: declarations.into(),
        }),
        location,
        flags,
    )
}

pub fn update_variable_declaration_list(node: &NodeRef, declarations: NodeArray) -> NodeRef {
    let data = expect_data!(node, VariableDeclarationList);
    if same_array(&data.declarations, &declarations) {
        return Arc::clone(node);
    }
    create_variable_declaration_list(declarations, Some(node.loc), Some(node.flags))
}

pub fn create_function_declaration(
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
        NodeData::FunctionDeclaration(FunctionDeclarationData {
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

pub fn update_function_declaration(
    node: &NodeRef,
    name: NodeRef,
    parameters: NodeArray,
    body: Option<NodeRef>,
    type_parameters: Option<NodeArray>,
    type_annotation: Option<NodeRef>,
    modifiers: Option<NodeArray>,
    asterisk_token: Option<NodeRef>,
) -> NodeRef {
    let data = expect_data!(node, FunctionDeclaration);
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
    create_function_declaration(
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
// Clauses
// =============================================================================

pub fn create_case_clause(
    expression: NodeRef,
    statements: impl Into<NodeArray>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::CaseClause(CaseClauseData {
            expression,
            statements: statements.into(),
        }),
        location,
        flags,
    )
}

pub fn update_case_clause(node: &NodeRef, expression: NodeRef, statements: NodeArray) -> NodeRef {
    let data = expect_data!(node, CaseClause);
    if same_node(&data.expression, &expression) && same_array(&data.statements, &statements) {
        return Arc::clone(node);
    }
    create_case_clause(expression, statements, Some(node.loc), Some(node.flags))
}

pub fn create_default_clause(
    statements: impl Into<NodeArray>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::DefaultClause(DefaultClauseData {
            statements: statements.into(),
        }),
        location,
        flags,
    )
}

pub fn update_default_clause(node: &NodeRef, statements: NodeArray) -> NodeRef {
    let data = expect_data!(node, DefaultClause);
    if same_array(&data.statements, &statements) {
        return Arc::clone(node);
    }
    create_default_clause(statements, Some(node.loc), Some(node.flags))
}

pub fn create_catch_clause(
    name: NodeRef,
    block: NodeRef,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::CatchClause(CatchClauseData { name, block }),
        location,
        flags,
    )
}

pub fn update_catch_clause(node: &NodeRef, name: NodeRef, block: NodeRef) -> NodeRef {
    let data = expect_data!(node, CatchClause);
    if same_node(&data.name, &name) && same_node(&data.block, &block) {
        return Arc::clone(node);
    }
    create_catch_clause(name, block, Some(node.loc), Some(node.flags))
}

// =============================================================================
// Object literal members
// =============================================================================

pub fn create_property_assignment(
    name: NodeRef,
    initializer: NodeRef,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::PropertyAssignment(PropertyAssignmentData { name, initializer }),
        location,
        flags,
    )
}

pub fn update_property_assignment(node: &NodeRef, name: NodeRef, initializer: NodeRef) -> NodeRef {
    let data = expect_data!(node, PropertyAssignment);
    if same_node(&data.name, &name) && same_node(&data.initializer, &initializer) {
        return Arc::clone(node);
    }
    create_property_assignment(name, initializer, Some(node.loc), Some(node.flags))
}

pub fn create_shorthand_property_assignment(
    name: NodeRef,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::ShorthandPropertyAssignment(ShorthandPropertyData { name }),
        location,
        flags,
    )
}

pub fn update_shorthand_property_assignment(node: &NodeRef, name: NodeRef) -> NodeRef {
    let data = expect_data!(node, ShorthandPropertyAssignment);
    if same_node(&data.name, &name) {
        return Arc::clone(node);
    }
    create_shorthand_property_assignment(name, Some(node.loc), Some(node.flags))
}

// =============================================================================
// Source file
// =============================================================================

pub fn create_source_file(
    file_name: impl Into<String>,
    statements: impl Into<NodeArray>,
    location: Option<TextRange>,
    flags: Option<NodeFlags>,
) -> NodeRef {
    finish_node(
        NodeData::SourceFile(SourceFileData {
            file_name: file_name.into(),
            statements: statements.into(),
        }),
        location,
        flags,
    )
}

/// The file name is kept from `node`.
pub fn update_source_file(node: &NodeRef, statements: NodeArray) -> NodeRef {
    let data = expect_data!(node, SourceFile);
    if same_array(&data.statements, &statements) {
        return Arc::clone(node);
    }
    create_source_file(
        data.file_name.clone(),
        statements,
        Some(node.loc),
        Some(node.flags),
    )
}
