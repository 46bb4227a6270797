use crate::error::EvalError;
use crate::op;
use crate::tree::ExprTree;

impl ExprTree {
    /// Evaluate the tree to a number.
    ///
    /// A leaf whose text does not parse as a float is
    /// [`EvalError::InvalidNumber`]; a branch whose symbol is not in the
    /// operator table is [`EvalError::UnknownOperator`]. Division by zero is
    /// not an error: `1 / 0` is positive infinity and `0 / 0` is NaN, per
    /// float semantics.
    pub fn evaluate(&self) -> Result<f64, EvalError> {
        self.eval(false)
    }

    /// Like [`evaluate`](ExprTree::evaluate), except a leaf that does not
    /// parse as a number evaluates to `0.0` instead of failing.
    ///
    /// This reproduces the historical calculator behavior, where the numeric
    /// conversion error was ignored. Prefer [`evaluate`](ExprTree::evaluate).
    pub fn evaluate_lenient(&self) -> Result<f64, EvalError> {
        self.eval(true)
    }

    fn eval(&self, lenient: bool) -> Result<f64, EvalError> {
        match self {
            ExprTree::Leaf(text) => match text.parse::<f64>() {
                Ok(value) => Ok(value),
                Err(_) if lenient => Ok(0.0),
                Err(_) => Err(EvalError::InvalidNumber(text.clone())),
            },
            ExprTree::Branch { op: symbol, left, right } => {
                let op =
                    op::lookup(symbol).ok_or_else(|| EvalError::UnknownOperator(symbol.clone()))?;
                let left = left.eval(lenient)?;
                let right = right.eval(lenient)?;
                Ok((op.apply)(left, right))
            }
        }
    }
}
