use crate::error::ParseError;
use crate::op;
use std::fmt;

/// A binary expression tree. A leaf holds the text of a numeric literal; a
/// branch holds an operator symbol and owns both of its operands.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprTree {
    Leaf(String),
    Branch {
        op: String,
        left: Box<ExprTree>,
        right: Box<ExprTree>,
    },
}

/// Build an expression tree from postfix tokens.
///
/// Operands are pushed onto a stack; an operator pops its right operand,
/// then its left, and pushes the combined branch. The token sequence must
/// reduce to exactly one tree: an operator short of operands is
/// [`ParseError::MissingOperand`], an empty sequence is
/// [`ParseError::EmptyExpression`], and anything left over is
/// [`ParseError::LeftoverOperands`].
pub fn build(postfix: Vec<String>) -> Result<ExprTree, ParseError> {
    let mut stack = Vec::<ExprTree>::new();
    for token in postfix {
        if op::lookup(&token).is_some() {
            let right = stack
                .pop()
                .ok_or_else(|| ParseError::MissingOperand(token.clone()))?;
            let left = stack
                .pop()
                .ok_or_else(|| ParseError::MissingOperand(token.clone()))?;
            stack.push(ExprTree::Branch {
                op: token,
                left: Box::new(left),
                right: Box::new(right),
            });
        } else {
            stack.push(ExprTree::Leaf(token));
        }
    }
    let root = stack.pop().ok_or(ParseError::EmptyExpression)?;
    if stack.is_empty() {
        Ok(root)
    } else {
        Err(ParseError::LeftoverOperands(stack.len() + 1))
    }
}

impl fmt::Display for ExprTree {
    /// Display this tree as fully parenthesized infix.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExprTree::Leaf(text) => write!(f, "{}", text),
            ExprTree::Branch { op, left, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}
