//! The fixed operator vocabulary.
//!
//! Both the resolver and the codec recognize operators only through this
//! table. Anything outside it is a terminal to the codec, so a new operator
//! must be added here before it can be encoded.

use std::fmt;

/// Operators that take a left and a right operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Or,
    And,
    /// `=`
    Equal,
    /// `==`
    DoubleEqual,
    /// `!=`
    NotEqual,
    /// `<>`
    LessGreater,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Like,
    /// `~`
    Tilde,
    Regex,
}

impl BinaryOperator {
    pub const COMPARATORS: [BinaryOperator; 11] = [
        BinaryOperator::Equal,
        BinaryOperator::DoubleEqual,
        BinaryOperator::NotEqual,
        BinaryOperator::LessGreater,
        BinaryOperator::Less,
        BinaryOperator::LessEqual,
        BinaryOperator::Greater,
        BinaryOperator::GreaterEqual,
        BinaryOperator::Like,
        BinaryOperator::Tilde,
        BinaryOperator::Regex,
    ];

    /// The token as it appears in source text and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Or => "or",
            BinaryOperator::And => "and",
            BinaryOperator::Equal => "=",
            BinaryOperator::DoubleEqual => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::LessGreater => "<>",
            BinaryOperator::Less => "<",
            BinaryOperator::LessEqual => "<=",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterEqual => ">=",
            BinaryOperator::Like => "like",
            BinaryOperator::Tilde => "~",
            BinaryOperator::Regex => "regex",
        }
    }

    /// Returns true for `and` / `or`.
    pub fn is_boolean(&self) -> bool {
        matches!(self, BinaryOperator::Or | BinaryOperator::And)
    }

    /// Returns true for field-versus-literal comparators.
    pub fn is_comparator(&self) -> bool {
        !self.is_boolean()
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of an operator token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    Not,
    Binary(BinaryOperator),
}

impl OperatorKind {
    pub const NOT: &'static str = "not";

    /// Classify an exact token. Case and whitespace are significant.
    pub fn from_token(token: &str) -> Option<Self> {
        if token == Self::NOT {
            return Some(OperatorKind::Not);
        }
        let binary = match token {
            "or" => BinaryOperator::Or,
            "and" => BinaryOperator::And,
            "=" => BinaryOperator::Equal,
            "==" => BinaryOperator::DoubleEqual,
            "!=" => BinaryOperator::NotEqual,
            "<>" => BinaryOperator::LessGreater,
            "<" => BinaryOperator::Less,
            "<=" => BinaryOperator::LessEqual,
            ">" => BinaryOperator::Greater,
            ">=" => BinaryOperator::GreaterEqual,
            "like" => BinaryOperator::Like,
            "~" => BinaryOperator::Tilde,
            "regex" => BinaryOperator::Regex,
            _ => return None,
        };
        Some(OperatorKind::Binary(binary))
    }

    /// Classify a token written by a user: trimmed, case-insensitive.
    pub fn from_source(token: &str) -> Option<Self> {
        Self::from_token(&token.trim().to_lowercase())
    }

    /// Number of operands the operator takes.
    pub fn arity(&self) -> usize {
        match self {
            OperatorKind::Not => 1,
            OperatorKind::Binary(_) => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorKind::Not => Self::NOT,
            OperatorKind::Binary(op) => op.as_str(),
        }
    }
}
