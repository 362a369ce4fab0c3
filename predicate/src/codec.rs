//! Postfix wire format for predicate trees.
//!
//! A tree is written in post-order as space-separated tokens. Operators go
//! out as their raw token; a terminal goes out as the lower-case hex of its
//! text wrapped in single quotes, so terminal content can never collide with
//! an operator or a separator.
//!
//! ```text
//! type = 'Process'   ->   277479706527 2750726f6365737327 =
//! ```

use crate::error::{FormatError, FormatResult};
use crate::node::PredicateNode;
use crate::operator::OperatorKind;

/// Version written by [`serialize_versioned`].
pub const CODEC_VERSION: u32 = 1;

const QUOTE: char = '\'';

/// Encode a tree as a postfix token stream.
pub fn serialize(node: &PredicateNode) -> String {
    let mut tokens = Vec::new();
    push_tokens(node, &mut tokens);
    tokens.join(" ")
}

fn push_tokens(node: &PredicateNode, tokens: &mut Vec<String>) {
    match node {
        PredicateNode::Terminal(value) => tokens.push(encode_terminal(value)),
        PredicateNode::Not(operand) => {
            push_tokens(operand, tokens);
            tokens.push(OperatorKind::NOT.to_string());
        }
        PredicateNode::Binary {
            operator,
            left,
            right,
        } => {
            push_tokens(left, tokens);
            push_tokens(right, tokens);
            tokens.push(operator.as_str().to_string());
        }
    }
}

fn encode_terminal(value: &str) -> String {
    hex::encode(format!("{QUOTE}{value}{QUOTE}"))
}

fn decode_terminal(token: &str) -> FormatResult<String> {
    let bytes = hex::decode(token).map_err(|source| FormatError::InvalidHex {
        token: token.to_string(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| FormatError::InvalidUtf8 {
        token: token.to_string(),
    })?;
    text.strip_prefix(QUOTE)
        .and_then(|rest| rest.strip_suffix(QUOTE))
        .map(str::to_string)
        .ok_or_else(|| FormatError::MissingQuotes {
            token: token.to_string(),
        })
}

/// Decode a postfix token stream back into a tree.
pub fn deserialize(stream: &str) -> FormatResult<PredicateNode> {
    let mut stack: Vec<PredicateNode> = Vec::new();

    for (position, token) in stream.split_whitespace().enumerate() {
        match OperatorKind::from_token(token) {
            Some(kind) => {
                if stack.len() < kind.arity() {
                    return Err(FormatError::StackUnderflow {
                        operator: kind.as_str(),
                        position,
                        expected: kind.arity(),
                        found: stack.len(),
                    });
                }
                let node = match kind {
                    OperatorKind::Not => {
                        let operand = pop(&mut stack)?;
                        PredicateNode::negate(operand)
                    }
                    OperatorKind::Binary(operator) => {
                        let right = pop(&mut stack)?;
                        let left = pop(&mut stack)?;
                        PredicateNode::binary(operator, left, right)
                    }
                };
                stack.push(node);
            }
            None => stack.push(PredicateNode::Terminal(decode_terminal(token)?)),
        }
    }

    match stack.len() {
        0 => Err(FormatError::EmptyStream),
        1 => stack.pop().ok_or(FormatError::EmptyStream),
        remaining => Err(FormatError::UnbalancedStream { remaining }),
    }
}

fn pop(stack: &mut Vec<PredicateNode>) -> FormatResult<PredicateNode> {
    stack
        .pop()
        .ok_or(FormatError::UnbalancedStream { remaining: 0 })
}

/// Encode with a `v<N>:` prefix.
pub fn serialize_versioned(node: &PredicateNode) -> String {
    format!("v{}:{}", CODEC_VERSION, serialize(node))
}

/// Decode a stream written by [`serialize_versioned`].
pub fn deserialize_versioned(stream: &str) -> FormatResult<PredicateNode> {
    let (version, body) = stream
        .strip_prefix('v')
        .and_then(|rest| rest.split_once(':'))
        .ok_or(FormatError::MissingVersion)?;
    if version != CODEC_VERSION.to_string() {
        return Err(FormatError::UnsupportedVersion(version.to_string()));
    }
    tracing::trace!(version, "decoding versioned predicate stream");
    deserialize(body)
}
