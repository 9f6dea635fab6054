//! Token kinds carried as node payloads.
//!
//! Operators live on expression nodes as a `TokenKind` payload. Modifiers and
//! the `*` / `?` / `...` markers are materialized as `Token` nodes so they sit
//! in ordinary child slots.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Punctuation
    DotDotDot,
    Question,
    Comma,

    // Arithmetic
    Plus,
    Minus,
    Asterisk,
    Slash,
    Percent,
    PlusPlus,
    MinusMinus,

    // Bitwise and shifts
    LessThanLessThan,
    GreaterThanGreaterThan,
    GreaterThanGreaterThanGreaterThan,
    Ampersand,
    Bar,
    Caret,
    Tilde,

    // Logical
    Exclamation,
    AmpersandAmpersand,
    BarBar,

    // Comparison
    LessThan,
    GreaterThan,
    LessThanEquals,
    GreaterThanEquals,
    EqualsEquals,
    ExclamationEquals,
    EqualsEqualsEquals,
    ExclamationEqualsEquals,
    InstanceOfKeyword,
    InKeyword,

    // Assignment
    Equals,
    PlusEquals,
    MinusEquals,
    AsteriskEquals,
    SlashEquals,
    PercentEquals,
    LessThanLessThanEquals,
    GreaterThanGreaterThanEquals,
    GreaterThanGreaterThanGreaterThanEquals,
    AmpersandEquals,
    BarEquals,
    CaretEquals,

    // Modifiers
    ExportKeyword,
    DeclareKeyword,
    PublicKeyword,
    PrivateKeyword,
    ProtectedKeyword,
    StaticKeyword,
    DefaultKeyword,
    AsyncKeyword,
    ConstKeyword,
}

impl TokenKind {
    pub const fn text(self) -> &'static str {
        match self {
            TokenKind::DotDotDot => "...",
            TokenKind::Question => "?",
            TokenKind::Comma => ",",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::LessThanLessThan => "<<",
            TokenKind::GreaterThanGreaterThan => ">>",
            TokenKind::GreaterThanGreaterThanGreaterThan => ">>>",
            TokenKind::Ampersand => "&",
            TokenKind::Bar => "|",
            TokenKind::Caret => "^",
            TokenKind::Tilde => "~",
            TokenKind::Exclamation => "!",
            TokenKind::AmpersandAmpersand => "&&",
            TokenKind::BarBar => "||",
            TokenKind::LessThan => "<",
            TokenKind::GreaterThan => ">",
            TokenKind::LessThanEquals => "<=",
            TokenKind::GreaterThanEquals => ">=",
            TokenKind::EqualsEquals => "==",
            TokenKind::ExclamationEquals => "!=",
            TokenKind::EqualsEqualsEquals => "===",
            TokenKind::ExclamationEqualsEquals => "!==",
            TokenKind::InstanceOfKeyword => "instanceof",
            TokenKind::InKeyword => "in",
            TokenKind::Equals => "=",
            TokenKind::PlusEquals => "+=",
            TokenKind::MinusEquals => "-=",
            TokenKind::AsteriskEquals => "*=",
            TokenKind::SlashEquals => "/=",
            TokenKind::PercentEquals => "%=",
            TokenKind::LessThanLessThanEquals => "<<=",
            TokenKind::GreaterThanGreaterThanEquals => ">>=",
            TokenKind::GreaterThanGreaterThanGreaterThanEquals => ">>>=",
            TokenKind::AmpersandEquals => "&=",
            TokenKind::BarEquals => "|=",
            TokenKind::CaretEquals => "^=",
            TokenKind::ExportKeyword => "export",
            TokenKind::DeclareKeyword => "declare",
            TokenKind::PublicKeyword => "public",
            TokenKind::PrivateKeyword => "private",
            TokenKind::ProtectedKeyword => "protected",
            TokenKind::StaticKeyword => "static",
            TokenKind::DefaultKeyword => "default",
            TokenKind::AsyncKeyword => "async",
            TokenKind::ConstKeyword => "const",
        }
    }

    pub const fn is_modifier(self) -> bool {
        matches!(
            self,
            TokenKind::ExportKeyword
                | TokenKind::DeclareKeyword
                | TokenKind::PublicKeyword
                | TokenKind::PrivateKeyword
                | TokenKind::ProtectedKeyword
                | TokenKind::StaticKeyword
                | TokenKind::DefaultKeyword
                | TokenKind::AsyncKeyword
                | TokenKind::ConstKeyword
        )
    }

    pub const fn is_assignment_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Equals
                | TokenKind::PlusEquals
                | TokenKind::MinusEquals
                | TokenKind::AsteriskEquals
                | TokenKind::SlashEquals
                | TokenKind::PercentEquals
                | TokenKind::LessThanLessThanEquals
                | TokenKind::GreaterThanGreaterThanEquals
                | TokenKind::GreaterThanGreaterThanGreaterThanEquals
                | TokenKind::AmpersandEquals
                | TokenKind::BarEquals
                | TokenKind::CaretEquals
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Keywords usable as a type annotation (`any`, `string`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeKeyword {
    Any,
    String,
    Number,
    Boolean,
    Void,
    Symbol,
}

impl TypeKeyword {
    pub const fn text(self) -> &'static str {
        match self {
            TypeKeyword::Any => "any",
            TypeKeyword::String => "string",
            TypeKeyword::Number => "number",
            TypeKeyword::Boolean => "boolean",
            TypeKeyword::Void => "void",
            TypeKeyword::Symbol => "symbol",
        }
    }
}

impl fmt::Display for TypeKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
