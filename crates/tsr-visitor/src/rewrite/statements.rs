//! Statements, declarations, clauses and the source file.

use super::RewriteCx;
use crate::error::RewriteResult;
use crate::transformer::Transformer;
use tsr_ast::factory::*;
use tsr_ast::{
    BlockData, CaseClauseData, CatchClauseData, DefaultClauseData, DoStatementData,
    ExprStatementData, ForInStatementData, ForStatementData, FunctionDeclarationData,
    IfStatementData, LabeledData, NodeRef, PropertyAssignmentData, ReturnData, SourceFileData,
    SwitchData, SyntaxKind, ThrowData, TryData, VariableDeclarationData,
    VariableDeclarationListData, VariableStatementData, WhileStatementData, WithData,
};

impl<S, T> RewriteCx<'_, S, T>
where
    T: Transformer<S> + ?Sized,
{
    pub(super) fn block(&mut self, node: &NodeRef, data: &BlockData) -> RewriteResult<NodeRef> {
        let statements = self.visit_nodes(&data.statements)?;
        Ok(update_block(node, statements))
    }

    pub(super) fn variable_statement(
        &mut self,
        node: &NodeRef,
        data: &VariableStatementData,
    ) -> RewriteResult<NodeRef> {
        let declaration_list = self.visit_required(
            &data.declaration_list,
            SyntaxKind::VariableStatement,
            "declaration_list",
        )?;
        Ok(update_variable_statement(node, declaration_list))
    }

    pub(super) fn expression_statement(
        &mut self,
        node: &NodeRef,
        data: &ExprStatementData,
    ) -> RewriteResult<NodeRef> {
        let expression =
            self.visit_required(&data.expression, SyntaxKind::ExpressionStatement, "expression")?;
        Ok(update_expression_statement(node, expression))
    }

    pub(super) fn if_statement(
        &mut self,
        node: &NodeRef,
        data: &IfStatementData,
    ) -> RewriteResult<NodeRef> {
        let kind = SyntaxKind::IfStatement;
        let expression = self.visit_required(&data.expression, kind, "expression")?;
        let then_statement = self.visit_required(&data.then_statement, kind, "then_statement")?;
        let else_statement = self.visit_opt(data.else_statement.as_ref())?;
        Ok(update_if_statement(node, expression, then_statement, else_statement))
    }

    pub(super) fn do_statement(
        &mut self,
        node: &NodeRef,
        data: &DoStatementData,
    ) -> RewriteResult<NodeRef> {
        let kind = SyntaxKind::DoStatement;
        let statement = self.visit_required(&data.statement, kind, "statement")?;
        let expression = self.visit_required(&data.expression, kind, "expression")?;
        Ok(update_do_statement(node, statement, expression))
    }

    pub(super) fn while_statement(
        &mut self,
        node: &NodeRef,
        data: &WhileStatementData,
    ) -> RewriteResult<NodeRef> {
        let kind = SyntaxKind::WhileStatement;
        let expression = self.visit_required(&data.expression, kind, "expression")?;
        let statement = self.visit_required(&data.statement, kind, "statement")?;
        Ok(update_while_statement(node, expression, statement))
    }

    pub(super) fn for_statement(
        &mut self,
        node: &NodeRef,
        data: &ForStatementData,
    ) -> RewriteResult<NodeRef> {
        let initializer = self.visit_opt(data.initializer.as_ref())?;
        let condition = self.visit_opt(data.condition.as_ref())?;
        let iterator = self.visit_opt(data.iterator.as_ref())?;
        let statement =
            self.visit_required(&data.statement, SyntaxKind::ForStatement, "statement")?;
        Ok(update_for_statement(node, initializer, condition, iterator, statement))
    }

    pub(super) fn for_in_statement(
        &mut self,
        node: &NodeRef,
        data: &ForInStatementData,
    ) -> RewriteResult<NodeRef> {
        let kind = SyntaxKind::ForInStatement;
        let initializer = self.visit_required(&data.initializer, kind, "initializer")?;
        let expression = self.visit_required(&data.expression, kind, "expression")?;
        let statement = self.visit_required(&data.statement, kind, "statement")?;
        Ok(update_for_in_statement(node, initializer, expression, statement))
    }

    pub(super) fn return_statement(
        &mut self,
        node: &NodeRef,
        data: &ReturnData,
    ) -> RewriteResult<NodeRef> {
        let expression = self.visit_opt(data.expression.as_ref())?;
        Ok(update_return_statement(node, expression))
    }

    pub(super) fn with_statement(
        &mut self,
        node: &NodeRef,
        data: &WithData,
    ) -> RewriteResult<NodeRef> {
        let kind = SyntaxKind::WithStatement;
        let expression = self.visit_required(&data.expression, kind, "expression")?;
        let statement = self.visit_required(&data.statement, kind, "statement")?;
        Ok(update_with_statement(node, expression, statement))
    }

    pub(super) fn switch_statement(
        &mut self,
        node: &NodeRef,
        data: &SwitchData,
    ) -> RewriteResult<NodeRef> {
        let expression =
            self.visit_required(&data.expression, SyntaxKind::SwitchStatement, "expression")?;
        let clauses = self.visit_nodes(&data.clauses)?;
        Ok(update_switch_statement(node, expression, clauses))
    }

    pub(super) fn labeled_statement(
        &mut self,
        node: &NodeRef,
        data: &LabeledData,
    ) -> RewriteResult<NodeRef> {
        let kind = SyntaxKind::LabeledStatement;
        let label = self.visit_required(&data.label, kind, "label")?;
        let statement = self.visit_required(&data.statement, kind, "statement")?;
        Ok(update_labeled_statement(node, label, statement))
    }

    pub(super) fn throw_statement(
        &mut self,
        node: &NodeRef,
        data: &ThrowData,
    ) -> RewriteResult<NodeRef> {
        let expression =
            self.visit_required(&data.expression, SyntaxKind::ThrowStatement, "expression")?;
        Ok(update_throw_statement(node, expression))
    }

    pub(super) fn try_statement(
        &mut self,
        node: &NodeRef,
        data: &TryData,
    ) -> RewriteResult<NodeRef> {
        let try_block =
            self.visit_required(&data.try_block, SyntaxKind::TryStatement, "try_block")?;
        let catch_clause = self.visit_opt(data.catch_clause.as_ref())?;
        let finally_block = self.visit_opt(data.finally_block.as_ref())?;
        Ok(update_try_statement(node, try_block, catch_clause, finally_block))
    }

    pub(super) fn variable_declaration(
        &mut self,
        node: &NodeRef,
        data: &VariableDeclarationData,
    ) -> RewriteResult<NodeRef> {
        let name = self.visit_required(&data.name, SyntaxKind::VariableDeclaration, "name")?;
        let initializer = self.visit_opt(data.initializer.as_ref())?;
        Ok(update_variable_declaration(node, name, initializer))
    }

    pub(super) fn variable_declaration_list(
        &mut self,
        node: &NodeRef,
        data: &VariableDeclarationListData,
    ) -> RewriteResult<NodeRef> {
        let declarations = self.visit_nodes(&data.declarations)?;
        Ok(update_variable_declaration_list(node, declarations))
    }

    pub(super) fn function_declaration(
        &mut self,
        node: &NodeRef,
        data: &FunctionDeclarationData,
    ) -> RewriteResult<NodeRef> {
        let name = self.visit_required(&data.name, SyntaxKind::FunctionDeclaration, "name")?;
        let parameters = self.visit_nodes(&data.parameters)?;
        let body = self.visit_opt(data.body.as_ref())?;
        let type_parameters = self.visit_opt_nodes(data.type_parameters.as_ref())?;
        let type_annotation = self.visit_opt(data.type_annotation.as_ref())?;
        let modifiers = self.visit_opt_nodes(data.modifiers.as_ref())?;
        let asterisk_token = self.visit_opt(data.asterisk_token.as_ref())?;
        Ok(update_function_declaration(
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

    pub(super) fn case_clause(
        &mut self,
        node: &NodeRef,
        data: &CaseClauseData,
    ) -> RewriteResult<NodeRef> {
        let expression =
            self.visit_required(&data.expression, SyntaxKind::CaseClause, "expression")?;
        let statements = self.visit_nodes(&data.statements)?;
        Ok(update_case_clause(node, expression, statements))
    }

    pub(super) fn default_clause(
        &mut self,
        node: &NodeRef,
        data: &DefaultClauseData,
    ) -> RewriteResult<NodeRef> {
        let statements = self.visit_nodes(&data.statements)?;
        Ok(update_default_clause(node, statements))
    }

    pub(super) fn catch_clause(
        &mut self,
        node: &NodeRef,
        data: &CatchClauseData,
    ) -> RewriteResult<NodeRef> {
        let kind = SyntaxKind::CatchClause;
        let name = self.visit_required(&data.name, kind, "name")?;
        let block = self.visit_required(&data.block, kind, "block")?;
        Ok(update_catch_clause(node, name, block))
    }

    pub(super) fn property_assignment(
        &mut self,
        node: &NodeRef,
        data: &PropertyAssignmentData,
    ) -> RewriteResult<NodeRef> {
        let kind = SyntaxKind::PropertyAssignment;
        let name = self.visit_required(&data.name, kind, "name")?;
        let initializer = self.visit_required(&data.initializer, kind, "initializer")?;
        Ok(update_property_assignment(node, name, initializer))
    }

    pub(super) fn source_file(
        &mut self,
        node: &NodeRef,
        data: &SourceFileData,
    ) -> RewriteResult<NodeRef> {
        let statements = self.visit_nodes(&data.statements)?;
        Ok(update_source_file(node, statements))
    }
}
