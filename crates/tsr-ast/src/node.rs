//! Node header and per-kind payloads.
//!
//! # Architecture
//!
//! A [`Node`] is a small header (range, flags) plus a [`NodeData`] payload.
//! `NodeData` has exactly one variant per [`SyntaxKind`](crate::SyntaxKind);
//! kinds with the same child layout share a payload struct, the way
//! `GetAccessor` and `SetAccessor` both carry an [`AccessorData`].
//!
//! Child slots are typed by arity only:
//! - `NodeRef`: required child
//! - `Option<NodeRef>`: optional child; `None` is "absent", never a default node
//! - `NodeArray` / `Option<NodeArray>`: ordered children
//!
//! Which kind-family may sit in a slot (expression, statement, ...) is
//! documented per field and is the parser's responsibility.

use crate::base::{NodeArray, NodeRef};
use crate::flags::NodeFlags;
use crate::token::{TokenKind, TypeKeyword};
use serde::{Deserialize, Serialize};
use tsr_common::TextRange;

/// An immutable AST node.
///
/// There is no `&mut` API and no interior mutability: a rewrite that changes
/// anything builds a new node. `Node` is not `Clone` on purpose; share it
/// through its [`NodeRef`] handle instead.
#[derive(Debug, Serialize, Deserialize)]
pub struct Node {
    pub loc: TextRange,
    pub flags: NodeFlags,
    pub data: NodeData,
}

/// Label allocated by a generator-style lowering pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label(pub u32);

/// Per-kind payload. Variant names match `SyntaxKind` one to one.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum NodeData {
    // =========================================================================
    // Literals
    // =========================================================================
    StringLiteral(LiteralData),
    NumericLiteral(LiteralData),
    RegularExpressionLiteral(LiteralData),
    NoSubstitutionTemplateLiteral(LiteralData),
    TemplateHead(LiteralData),
    TemplateMiddle(LiteralData),
    TemplateTail(LiteralData),

    // =========================================================================
    // Identifiers, keywords and tokens
    // =========================================================================
    Identifier(IdentifierData),
    ThisKeyword,
    SuperKeyword,
    NullKeyword,
    TrueKeyword,
    FalseKeyword,
    Token(TokenData),

    // =========================================================================
    // Names
    // =========================================================================
    QualifiedName(QualifiedNameData),
    ComputedPropertyName(ComputedPropertyData),

    // =========================================================================
    // Signature elements and members
    // =========================================================================
    TypeParameter(TypeParameterData),
    Parameter(ParameterData),
    PropertySignature(PropertySignatureData),
    PropertyDeclaration(PropertyDeclarationData),
    MethodSignature(MethodSignatureData),
    MethodDeclaration(MethodDeclarationData),
    Constructor(ConstructorData),
    GetAccessor(AccessorData),
    SetAccessor(AccessorData),
    CallSignature(SignatureData),
    ConstructSignature(SignatureData),
    IndexSignature(SignatureData),

    // =========================================================================
    // Types
    // =========================================================================
    KeywordType(KeywordTypeData),
    TypeReference(TypeRefData),
    FunctionType(FunctionTypeData),
    ConstructorType(FunctionTypeData),
    TypeQuery(TypeQueryData),
    TypeLiteral(TypeLiteralData),
    ArrayType(ArrayTypeData),
    TupleType(TupleTypeData),
    UnionType(UnionTypeData),
    ParenthesizedType(WrappedTypeData),

    // =========================================================================
    // Binding patterns
    // =========================================================================
    ObjectBindingPattern(BindingPatternData),
    ArrayBindingPattern(BindingPatternData),
    BindingElement(BindingElementData),

    // =========================================================================
    // Expressions
    // =========================================================================
    ArrayLiteralExpression(ArrayLiteralData),
    ObjectLiteralExpression(ObjectLiteralData),
    PropertyAccessExpression(PropertyAccessData),
    ElementAccessExpression(ElementAccessData),
    CallExpression(CallExprData),
    NewExpression(CallExprData),
    TaggedTemplateExpression(TaggedTemplateData),
    TypeAssertionExpression(TypeAssertionData),
    ParenthesizedExpression(WrappedExprData),
    FunctionExpression(FunctionExprData),
    ArrowFunction(ArrowFunctionData),
    DeleteExpression(WrappedExprData),
    TypeOfExpression(WrappedExprData),
    VoidExpression(WrappedExprData),
    AwaitExpression(WrappedExprData),
    PrefixUnaryExpression(UnaryExprData),
    PostfixUnaryExpression(UnaryExprData),
    BinaryExpression(BinaryExprData),
    ConditionalExpression(ConditionalExprData),
    TemplateExpression(TemplateExprData),
    YieldExpression(YieldExprData),
    GeneratedLabel(GeneratedLabelData),
    SpreadElementExpression(WrappedExprData),
    OmittedExpression,

    TemplateSpan(TemplateSpanData),

    // =========================================================================
    // Statements
    // =========================================================================
    Block(BlockData),
    VariableStatement(VariableStatementData),
    EmptyStatement,
    ExpressionStatement(ExprStatementData),
    IfStatement(IfStatementData),
    DoStatement(DoStatementData),
    WhileStatement(WhileStatementData),
    ForStatement(ForStatementData),
    ForInStatement(ForInStatementData),
    ContinueStatement(JumpData),
    BreakStatement(JumpData),
    ReturnStatement(ReturnData),
    WithStatement(WithData),
    SwitchStatement(SwitchData),
    LabeledStatement(LabeledData),
    ThrowStatement(ThrowData),
    TryStatement(TryData),
    DebuggerStatement,

    // =========================================================================
    // Declarations
    // =========================================================================
    VariableDeclaration(VariableDeclarationData),
    VariableDeclarationList(VariableDeclarationListData),
    FunctionDeclaration(FunctionDeclarationData),

    // =========================================================================
    // Clauses and property assignments
    // =========================================================================
    CaseClause(CaseClauseData),
    DefaultClause(DefaultClauseData),
    CatchClause(CatchClauseData),
    PropertyAssignment(PropertyAssignmentData),
    ShorthandPropertyAssignment(ShorthandPropertyData),

    SourceFile(SourceFileData),
}

// =============================================================================
// Atoms
// =============================================================================

/// Text of string, numeric, regex and template literal pieces.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LiteralData {
    pub text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IdentifierData {
    pub text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenData {
    pub token: TokenKind,
}

// =============================================================================
// Names
// =============================================================================

/// `left.right` in an entity name.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QualifiedNameData {
    /// Identifier or QualifiedName
    pub left: NodeRef,
    pub right: NodeRef,
}

/// `[expression]` used as a property name.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ComputedPropertyData {
    pub expression: NodeRef,
}

// =============================================================================
// Signature elements and members
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeParameterData {
    pub name: NodeRef,
    pub constraint: Option<NodeRef>,
    /// Recovery slot for an expression written where a constraint was expected.
    pub expression: Option<NodeRef>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParameterData {
    /// Identifier or binding pattern
    pub name: NodeRef,
    pub initializer: Option<NodeRef>,
    pub type_annotation: Option<NodeRef>,
    pub modifiers: Option<NodeArray>,
    pub dot_dot_dot_token: Option<NodeRef>,
    pub question_token: Option<NodeRef>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PropertySignatureData {
    pub name: NodeRef,
    pub type_annotation: Option<NodeRef>,
    pub question_token: Option<NodeRef>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PropertyDeclarationData {
    pub name: NodeRef,
    pub initializer: Option<NodeRef>,
    pub type_annotation: Option<NodeRef>,
    pub question_token: Option<NodeRef>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MethodSignatureData {
    pub name: NodeRef,
    pub parameters: NodeArray,
    pub type_parameters: Option<NodeArray>,
    pub type_annotation: Option<NodeRef>,
    pub modifiers: Option<NodeArray>,
    pub asterisk_token: Option<NodeRef>,
    pub question_token: Option<NodeRef>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MethodDeclarationData {
    pub name: NodeRef,
    pub parameters: NodeArray,
    /// Absent for overload declarations
    pub body: Option<NodeRef>,
    pub type_parameters: Option<NodeArray>,
    pub type_annotation: Option<NodeRef>,
    pub modifiers: Option<NodeArray>,
    pub asterisk_token: Option<NodeRef>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConstructorData {
    pub parameters: NodeArray,
    pub body: Option<NodeRef>,
    pub type_parameters: Option<NodeArray>,
    pub type_annotation: Option<NodeRef>,
    pub modifiers: Option<NodeArray>,
}

/// Shared by `GetAccessor` and `SetAccessor`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccessorData {
    pub name: NodeRef,
    pub parameters: NodeArray,
    pub body: Option<NodeRef>,
    pub type_parameters: Option<NodeArray>,
    pub type_annotation: Option<NodeRef>,
    pub modifiers: Option<NodeArray>,
}

/// Shared by call, construct and index signatures.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignatureData {
    pub parameters: NodeArray,
    pub type_parameters: Option<NodeArray>,
    pub type_annotation: Option<NodeRef>,
    pub modifiers: Option<NodeArray>,
}

// =============================================================================
// Types
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KeywordTypeData {
    pub keyword: TypeKeyword,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeRefData {
    /// Identifier or QualifiedName
    pub type_name: NodeRef,
    pub type_arguments: Option<NodeArray>,
}

/// Shared by `FunctionType` and `ConstructorType`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FunctionTypeData {
    pub parameters: NodeArray,
    pub type_parameters: Option<NodeArray>,
    pub type_annotation: Option<NodeRef>,
}

/// `typeof expr_name` in type position.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeQueryData {
    pub expr_name: NodeRef,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeLiteralData {
    pub members: NodeArray,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArrayTypeData {
    pub element_type: NodeRef,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TupleTypeData {
    pub element_types: NodeArray,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UnionTypeData {
    pub types: NodeArray,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WrappedTypeData {
    pub type_node: NodeRef,
}

// =============================================================================
// Binding patterns
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BindingPatternData {
    pub elements: NodeArray,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BindingElementData {
    /// Identifier or nested binding pattern
    pub name: NodeRef,
    pub property_name: Option<NodeRef>,
    pub initializer: Option<NodeRef>,
}

// =============================================================================
// Expressions
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArrayLiteralData {
    pub elements: NodeArray,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ObjectLiteralData {
    pub properties: NodeArray,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PropertyAccessData {
    pub expression: NodeRef,
    pub name: NodeRef,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ElementAccessData {
    pub expression: NodeRef,
    pub argument_expression: NodeRef,
}

/// Shared by `CallExpression` and `NewExpression`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CallExprData {
    pub expression: NodeRef,
    pub arguments: NodeArray,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TaggedTemplateData {
    pub tag: NodeRef,
    /// NoSubstitutionTemplateLiteral or TemplateExpression
    pub template: NodeRef,
}

/// `<type>expression`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeAssertionData {
    pub type_annotation: NodeRef,
    pub expression: NodeRef,
}

/// Single-operand wrappers: parenthesized, `delete`, `typeof`, `void`,
/// `await` and spread.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WrappedExprData {
    pub expression: NodeRef,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FunctionExprData {
    pub name: Option<NodeRef>,
    pub parameters: NodeArray,
    /// Block, or an expression
    pub body: NodeRef,
    pub type_parameters: Option<NodeArray>,
    pub type_annotation: Option<NodeRef>,
    pub modifiers: Option<NodeArray>,
    pub asterisk_token: Option<NodeRef>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArrowFunctionData {
    pub parameters: NodeArray,
    /// Block, or a concise expression body
    pub body: NodeRef,
    pub type_parameters: Option<NodeArray>,
    pub type_annotation: Option<NodeRef>,
    pub modifiers: Option<NodeArray>,
}

/// Shared by prefix and postfix unary expressions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UnaryExprData {
    pub operator: TokenKind,
    pub operand: NodeRef,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BinaryExprData {
    pub operator: TokenKind,
    pub left: NodeRef,
    pub right: NodeRef,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConditionalExprData {
    pub condition: NodeRef,
    pub when_true: NodeRef,
    pub when_false: NodeRef,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TemplateExprData {
    /// TemplateHead
    pub head: NodeRef,
    pub template_spans: NodeArray,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TemplateSpanData {
    pub expression: NodeRef,
    /// TemplateMiddle or TemplateTail
    pub literal: NodeRef,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct YieldExprData {
    pub expression: Option<NodeRef>,
    pub asterisk_token: Option<NodeRef>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratedLabelData {
    pub label: Label,
    pub label_numbers: Vec<u32>,
}

// =============================================================================
// Statements
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlockData {
    pub statements: NodeArray,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariableStatementData {
    pub declaration_list: NodeRef,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExprStatementData {
    pub expression: NodeRef,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IfStatementData {
    pub expression: NodeRef,
    pub then_statement: NodeRef,
    pub else_statement: Option<NodeRef>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DoStatementData {
    pub statement: NodeRef,
    pub expression: NodeRef,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WhileStatementData {
    pub expression: NodeRef,
    pub statement: NodeRef,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ForStatementData {
    /// Expression or VariableDeclarationList
    pub initializer: Option<NodeRef>,
    pub condition: Option<NodeRef>,
    pub iterator: Option<NodeRef>,
    pub statement: NodeRef,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ForInStatementData {
    /// Expression or VariableDeclarationList
    pub initializer: NodeRef,
    pub expression: NodeRef,
    pub statement: NodeRef,
}

/// Shared by `break` and `continue`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JumpData {
    pub label: Option<NodeRef>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReturnData {
    pub expression: Option<NodeRef>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WithData {
    pub expression: NodeRef,
    pub statement: NodeRef,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SwitchData {
    pub expression: NodeRef,
    /// CaseClause and DefaultClause nodes
    pub clauses: NodeArray,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LabeledData {
    pub label: NodeRef,
    pub statement: NodeRef,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThrowData {
    pub expression: NodeRef,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TryData {
    pub try_block: NodeRef,
    pub catch_clause: Option<NodeRef>,
    pub finally_block: Option<NodeRef>,
}

// =============================================================================
// Declarations
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariableDeclarationData {
    /// Identifier or binding pattern
    pub name: NodeRef,
    pub initializer: Option<NodeRef>,
}

/// `let`/`const` live in the list node's flags.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariableDeclarationListData {
    pub declarations: NodeArray,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FunctionDeclarationData {
    pub name: NodeRef,
    pub parameters: NodeArray,
    /// Absent for overloads and ambient declarations
    pub body: Option<NodeRef>,
    pub type_parameters: Option<NodeArray>,
    pub type_annotation: Option<NodeRef>,
    pub modifiers: Option<NodeArray>,
    pub asterisk_token: Option<NodeRef>,
}

// =============================================================================
// Clauses and property assignments
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaseClauseData {
    pub expression: NodeRef,
    pub statements: NodeArray,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultClauseData {
    pub statements: NodeArray,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatchClauseData {
    pub name: NodeRef,
    pub block: NodeRef,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PropertyAssignmentData {
    pub name: NodeRef,
    pub initializer: NodeRef,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShorthandPropertyData {
    pub name: NodeRef,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceFileData {
    pub file_name: String,
    pub statements: NodeArray,
}
