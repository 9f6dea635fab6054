//! The closed set of node kinds.

use serde::{Deserialize, Serialize};

/// One kind per grammar production.
///
/// `NodeData` has exactly one variant per `SyntaxKind` variant, with the
/// same name. Adding a kind here without adding it to `NodeData`,
/// `Node::kind`, the factory and the rewriter's dispatch is a compile error
/// in at least one of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SyntaxKind {
    // Literals
    StringLiteral,
    NumericLiteral,
    RegularExpressionLiteral,
    NoSubstitutionTemplateLiteral,
    TemplateHead,
    TemplateMiddle,
    TemplateTail,

    // Identifiers, keywords and tokens
    Identifier,
    ThisKeyword,
    SuperKeyword,
    NullKeyword,
    TrueKeyword,
    FalseKeyword,
    Token,

    // Names
    QualifiedName,
    ComputedPropertyName,

    // Signature elements and members
    TypeParameter,
    Parameter,
    PropertySignature,
    PropertyDeclaration,
    MethodSignature,
    MethodDeclaration,
    Constructor,
    GetAccessor,
    SetAccessor,
    CallSignature,
    ConstructSignature,
    IndexSignature,

    // Types
    KeywordType,
    TypeReference,
    FunctionType,
    ConstructorType,
    TypeQuery,
    TypeLiteral,
    ArrayType,
    TupleType,
    UnionType,
    ParenthesizedType,

    // Binding patterns
    ObjectBindingPattern,
    ArrayBindingPattern,
    BindingElement,

    // Expressions
    ArrayLiteralExpression,
    ObjectLiteralExpression,
    PropertyAccessExpression,
    ElementAccessExpression,
    CallExpression,
    NewExpression,
    TaggedTemplateExpression,
    TypeAssertionExpression,
    ParenthesizedExpression,
    FunctionExpression,
    ArrowFunction,
    DeleteExpression,
    TypeOfExpression,
    VoidExpression,
    AwaitExpression,
    PrefixUnaryExpression,
    PostfixUnaryExpression,
    BinaryExpression,
    ConditionalExpression,
    TemplateExpression,
    YieldExpression,
    GeneratedLabel,
    SpreadElementExpression,
    OmittedExpression,

    // Misc
    TemplateSpan,

    // Statements
    Block,
    VariableStatement,
    EmptyStatement,
    ExpressionStatement,
    IfStatement,
    DoStatement,
    WhileStatement,
    ForStatement,
    ForInStatement,
    ContinueStatement,
    BreakStatement,
    ReturnStatement,
    WithStatement,
    SwitchStatement,
    LabeledStatement,
    ThrowStatement,
    TryStatement,
    DebuggerStatement,

    // Declarations
    VariableDeclaration,
    VariableDeclarationList,
    FunctionDeclaration,

    // Clauses
    CaseClause,
    DefaultClause,
    CatchClause,

    // Property assignments
    PropertyAssignment,
    ShorthandPropertyAssignment,

    // Top level
    SourceFile,
}

impl SyntaxKind {
    /// Every kind, in declaration order.
    pub const ALL: [SyntaxKind; 93] = [
        SyntaxKind::StringLiteral,
        SyntaxKind::NumericLiteral,
        SyntaxKind::RegularExpressionLiteral,
        SyntaxKind::NoSubstitutionTemplateLiteral,
        SyntaxKind::TemplateHead,
        SyntaxKind::TemplateMiddle,
        SyntaxKind::TemplateTail,
        SyntaxKind::Identifier,
        SyntaxKind::ThisKeyword,
        SyntaxKind::SuperKeyword,
        SyntaxKind::NullKeyword,
        SyntaxKind::TrueKeyword,
        SyntaxKind::FalseKeyword,
        SyntaxKind::Token,
        SyntaxKind::QualifiedName,
        SyntaxKind::ComputedPropertyName,
        SyntaxKind::TypeParameter,
        SyntaxKind::Parameter,
        SyntaxKind::PropertySignature,
        SyntaxKind::PropertyDeclaration,
        SyntaxKind::MethodSignature,
        SyntaxKind::MethodDeclaration,
        SyntaxKind::Constructor,
        SyntaxKind::GetAccessor,
        SyntaxKind::SetAccessor,
        SyntaxKind::CallSignature,
        SyntaxKind::ConstructSignature,
        SyntaxKind::IndexSignature,
        SyntaxKind::KeywordType,
        SyntaxKind::TypeReference,
        SyntaxKind::FunctionType,
        SyntaxKind::ConstructorType,
        SyntaxKind::TypeQuery,
        SyntaxKind::TypeLiteral,
        SyntaxKind::ArrayType,
        SyntaxKind::TupleType,
        SyntaxKind::UnionType,
        SyntaxKind::ParenthesizedType,
        SyntaxKind::ObjectBindingPattern,
        SyntaxKind::ArrayBindingPattern,
        SyntaxKind::BindingElement,
        SyntaxKind::ArrayLiteralExpression,
        SyntaxKind::ObjectLiteralExpression,
        SyntaxKind::PropertyAccessExpression,
        SyntaxKind::ElementAccessExpression,
        SyntaxKind::CallExpression,
        SyntaxKind::NewExpression,
        SyntaxKind::TaggedTemplateExpression,
        SyntaxKind::TypeAssertionExpression,
        SyntaxKind::ParenthesizedExpression,
        SyntaxKind::FunctionExpression,
        SyntaxKind::ArrowFunction,
        SyntaxKind::DeleteExpression,
        SyntaxKind::TypeOfExpression,
        SyntaxKind::VoidExpression,
        SyntaxKind::AwaitExpression,
        SyntaxKind::PrefixUnaryExpression,
        SyntaxKind::PostfixUnaryExpression,
        SyntaxKind::BinaryExpression,
        SyntaxKind::ConditionalExpression,
        SyntaxKind::TemplateExpression,
        SyntaxKind::YieldExpression,
        SyntaxKind::GeneratedLabel,
        SyntaxKind::SpreadElementExpression,
        SyntaxKind::OmittedExpression,
        SyntaxKind::TemplateSpan,
        SyntaxKind::Block,
        SyntaxKind::VariableStatement,
        SyntaxKind::EmptyStatement,
        SyntaxKind::ExpressionStatement,
        SyntaxKind::IfStatement,
        SyntaxKind::DoStatement,
        SyntaxKind::WhileStatement,
        SyntaxKind::ForStatement,
        SyntaxKind::ForInStatement,
        SyntaxKind::ContinueStatement,
        SyntaxKind::BreakStatement,
        SyntaxKind::ReturnStatement,
        SyntaxKind::WithStatement,
        SyntaxKind::SwitchStatement,
        SyntaxKind::LabeledStatement,
        SyntaxKind::ThrowStatement,
        SyntaxKind::TryStatement,
        SyntaxKind::DebuggerStatement,
        SyntaxKind::VariableDeclaration,
        SyntaxKind::VariableDeclarationList,
        SyntaxKind::FunctionDeclaration,
        SyntaxKind::CaseClause,
        SyntaxKind::DefaultClause,
        SyntaxKind::CatchClause,
        SyntaxKind::PropertyAssignment,
        SyntaxKind::ShorthandPropertyAssignment,
        SyntaxKind::SourceFile,
    ];

    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            SyntaxKind::StringLiteral
                | SyntaxKind::NumericLiteral
                | SyntaxKind::RegularExpressionLiteral
                | SyntaxKind::NoSubstitutionTemplateLiteral
                | SyntaxKind::TemplateHead
                | SyntaxKind::TemplateMiddle
                | SyntaxKind::TemplateTail
        )
    }

    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::ThisKeyword
                | SyntaxKind::SuperKeyword
                | SyntaxKind::NullKeyword
                | SyntaxKind::TrueKeyword
                | SyntaxKind::FalseKeyword
        )
    }

    /// Type annotation kinds. The rewriter treats these as opaque.
    pub const fn is_type_node(self) -> bool {
        matches!(
            self,
            SyntaxKind::KeywordType
                | SyntaxKind::TypeReference
                | SyntaxKind::FunctionType
                | SyntaxKind::ConstructorType
                | SyntaxKind::TypeQuery
                | SyntaxKind::TypeLiteral
                | SyntaxKind::ArrayType
                | SyntaxKind::TupleType
                | SyntaxKind::UnionType
                | SyntaxKind::ParenthesizedType
        )
    }

    pub const fn is_statement(self) -> bool {
        matches!(
            self,
            SyntaxKind::Block
                | SyntaxKind::VariableStatement
                | SyntaxKind::EmptyStatement
                | SyntaxKind::ExpressionStatement
                | SyntaxKind::IfStatement
                | SyntaxKind::DoStatement
                | SyntaxKind::WhileStatement
                | SyntaxKind::ForStatement
                | SyntaxKind::ForInStatement
                | SyntaxKind::ContinueStatement
                | SyntaxKind::BreakStatement
                | SyntaxKind::ReturnStatement
                | SyntaxKind::WithStatement
                | SyntaxKind::SwitchStatement
                | SyntaxKind::LabeledStatement
                | SyntaxKind::ThrowStatement
                | SyntaxKind::TryStatement
                | SyntaxKind::DebuggerStatement
                | SyntaxKind::FunctionDeclaration
        )
    }

    /// Expression kinds, literals and primary keywords included.
    pub const fn is_expression(self) -> bool {
        self.is_literal()
            || self.is_keyword()
            || matches!(
                self,
                SyntaxKind::Identifier
                    | SyntaxKind::ArrayLiteralExpression
                    | SyntaxKind::ObjectLiteralExpression
                    | SyntaxKind::PropertyAccessExpression
                    | SyntaxKind::ElementAccessExpression
                    | SyntaxKind::CallExpression
                    | SyntaxKind::NewExpression
                    | SyntaxKind::TaggedTemplateExpression
                    | SyntaxKind::TypeAssertionExpression
                    | SyntaxKind::ParenthesizedExpression
                    | SyntaxKind::FunctionExpression
                    | SyntaxKind::ArrowFunction
                    | SyntaxKind::DeleteExpression
                    | SyntaxKind::TypeOfExpression
                    | SyntaxKind::VoidExpression
                    | SyntaxKind::AwaitExpression
                    | SyntaxKind::PrefixUnaryExpression
                    | SyntaxKind::PostfixUnaryExpression
                    | SyntaxKind::BinaryExpression
                    | SyntaxKind::ConditionalExpression
                    | SyntaxKind::TemplateExpression
                    | SyntaxKind::YieldExpression
                    | SyntaxKind::GeneratedLabel
                    | SyntaxKind::SpreadElementExpression
                    | SyntaxKind::OmittedExpression
            )
    }
}
