//! Evaluates one arithmetic expression. The input string is tokenized, run
//! through the shunting-yard conversion to postfix, assembled into a binary
//! expression tree, and the tree is evaluated to an `f64`:
//!
//! ```
//! assert_eq!(rpncalc::eval_str("(3 + 5) * 2").unwrap(), 16.0);
//! ```
//!
//! The operators are `+ - * /` and `**` (power), with the usual precedence
//! (`**` over `* /` over `+ -`) and left-to-right grouping at equal
//! precedence. Every operator is binary: there is no unary minus, so a `-`
//! at the start of an expression or just inside a `(` is rejected for
//! missing an operand.
//!
//! Each stage is also usable on its own: [`tokenize`], [`to_postfix`],
//! [`build`], and [`ExprTree::evaluate`]. Parsing failures ([`ParseError`])
//! are reported before evaluation begins and are distinct from evaluation
//! failures ([`EvalError`]).

mod error;
mod eval;
mod lexer;
mod op;
mod shunter;
mod tree;

pub use error::{Error, EvalError, ParseError};
pub use lexer::tokenize;
pub use op::{BinaryOp, Prec, OPERATORS};
pub use shunter::to_postfix;
pub use tree::{build, ExprTree};

/// Run the whole pipeline on `expression` and return its value.
pub fn eval_str(expression: &str) -> Result<f64, Error> {
    let postfix = to_postfix(tokenize(expression))?;
    let tree = build(postfix)?;
    Ok(tree.evaluate()?)
}
