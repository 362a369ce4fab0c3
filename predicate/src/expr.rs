//! Expression types produced by the query parser.
//!
//! The resolver only needs the shape of an expression and, for literals,
//! their canonical text. Spans are optional because expressions built
//! programmatically have no source location.

use std::fmt;
use tagraph_core::Value;

/// Source location for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A piece of source text with its location.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub value: String,
    pub span: Option<Span>,
}

impl Token {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            span: None,
        }
    }

    pub fn at(value: impl Into<String>, span: Span) -> Self {
        Self {
            value: value.into(),
            span: Some(span),
        }
    }
}

/// Declared type of a symbol in the query environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolType {
    Graph,
    GraphPredicate,
    GraphMetadata,
    Integer,
    String,
}

impl fmt::Display for SymbolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SymbolType::Graph => "Graph",
            SymbolType::GraphPredicate => "GraphPredicate",
            SymbolType::GraphMetadata => "GraphMetadata",
            SymbolType::Integer => "Integer",
            SymbolType::String => "String",
        };
        f.write_str(name)
    }
}

/// A parsed expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Operator applied to operands: `a = 'x'`, `p and q`, `not p`
    Operation { operator: Token, operands: Vec<Expr> },
    /// Bare field name
    Name(Token),
    /// Literal value
    Literal { value: Value, span: Option<Span> },
    /// Reference to a symbol: `$p`
    Variable { name: Token, ty: SymbolType },
    /// Raw string expression
    Str(Token),
}

impl Expr {
    /// Build an operation.
    pub fn op(operator: impl Into<String>, operands: Vec<Expr>) -> Self {
        Expr::Operation {
            operator: Token::new(operator),
            operands,
        }
    }

    /// Build a field name.
    pub fn name(name: impl Into<String>) -> Self {
        Expr::Name(Token::new(name))
    }

    /// Build a literal.
    pub fn literal(value: impl Into<Value>) -> Self {
        Expr::Literal {
            value: value.into(),
            span: None,
        }
    }

    /// Build a variable reference.
    pub fn variable(name: impl Into<String>, ty: SymbolType) -> Self {
        Expr::Variable {
            name: Token::new(name),
            ty,
        }
    }

    /// Shorthand for a `field <op> literal` comparison.
    pub fn compare(field: &str, comparator: &str, value: impl Into<Value>) -> Self {
        Expr::op(comparator, vec![Expr::name(field), Expr::literal(value)])
    }

    /// Get the source location of this expression, if known.
    pub fn span(&self) -> Option<Span> {
        match self {
            Expr::Operation { operator, .. } => operator.span,
            Expr::Name(token) | Expr::Str(token) => token.span,
            Expr::Literal { span, .. } => *span,
            Expr::Variable { name, .. } => name.span,
        }
    }

    /// Short description used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Expr::Operation { .. } => "operation",
            Expr::Name(_) => "name",
            Expr::Literal { .. } => "literal",
            Expr::Variable { .. } => "variable",
            Expr::Str(_) => "string",
        }
    }
}
