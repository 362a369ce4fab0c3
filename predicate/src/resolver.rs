//! Expression to predicate tree compilation.

use crate::error::{CompileError, CompileResult};
use crate::expr::{Expr, SymbolType, Token};
use crate::node::PredicateNode;
use crate::operator::{BinaryOperator, OperatorKind};
use crate::symbols::PredicateSymbolTable;

/// Predicate resolver.
///
/// Resolution never coerces: any operand shape it does not expect is an
/// error carrying the location of the offending token.
pub struct PredicateResolver<'s> {
    symbols: &'s PredicateSymbolTable,
}

impl<'s> PredicateResolver<'s> {
    /// Create a resolver over a symbol table.
    pub fn new(symbols: &'s PredicateSymbolTable) -> Self {
        Self { symbols }
    }

    /// Resolve an expression into a tree owned by the caller.
    pub fn resolve(&self, expr: &Expr) -> CompileResult<PredicateNode> {
        match expr {
            Expr::Operation { operator, operands } => self.resolve_operation(operator, operands),
            Expr::Variable { name, ty } => self.resolve_variable(name, *ty),
            other => Err(CompileError::UnsupportedExpression {
                kind: other.kind(),
                span: other.span(),
            }),
        }
    }

    fn resolve_operation(&self, operator: &Token, operands: &[Expr]) -> CompileResult<PredicateNode> {
        let kind = OperatorKind::from_source(&operator.value)
            .ok_or_else(|| CompileError::unknown_operator(&operator.value, operator.span))?;

        if operands.len() != kind.arity() {
            return Err(CompileError::arity_mismatch(
                kind.as_str(),
                operands.len(),
                kind.arity(),
                operator.span,
            ));
        }

        match kind {
            OperatorKind::Not => Ok(PredicateNode::negate(self.resolve(&operands[0])?)),
            OperatorKind::Binary(op) if op.is_boolean() => Ok(PredicateNode::binary(
                op,
                self.resolve(&operands[0])?,
                self.resolve(&operands[1])?,
            )),
            OperatorKind::Binary(comparator) => {
                self.resolve_comparison(comparator, &operands[0], &operands[1])
            }
        }
    }

    /// `field <comparator> literal` becomes a three-node subtree.
    fn resolve_comparison(
        &self,
        comparator: BinaryOperator,
        lhs: &Expr,
        rhs: &Expr,
    ) -> CompileResult<PredicateNode> {
        let field = match lhs {
            Expr::Name(name) => name.value.clone(),
            other => {
                return Err(CompileError::UnexpectedOperand {
                    side: "left",
                    expected: "field name",
                    found: other.kind(),
                    span: other.span(),
                })
            }
        };
        let literal = match rhs {
            Expr::Literal { value, .. } => value.canonical_string(),
            other => {
                return Err(CompileError::UnexpectedOperand {
                    side: "right",
                    expected: "literal",
                    found: other.kind(),
                    span: other.span(),
                })
            }
        };
        Ok(PredicateNode::comparison(comparator, field, literal))
    }

    fn resolve_variable(&self, name: &Token, ty: SymbolType) -> CompileResult<PredicateNode> {
        if ty != SymbolType::GraphPredicate {
            return Err(CompileError::IllegalVariableType {
                name: name.value.clone(),
                actual: ty,
                span: name.span,
            });
        }
        self.symbols
            .resolve(&name.value)
            .ok_or_else(|| CompileError::unknown_predicate(&name.value, name.span))
    }
}
