use thiserror::Error;

/// An expression that could not be turned into a tree. Always produced
/// before evaluation begins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed expression: ')' without a matching '('")]
    UnmatchedCloseParen,
    #[error("malformed expression: '(' without a matching ')'")]
    UnmatchedOpenParen,
    #[error("invalid expression: operator '{0}' is missing an operand")]
    MissingOperand(String),
    #[error("invalid expression: empty input")]
    EmptyExpression,
    #[error("invalid expression: {0} values with no operator to join them")]
    LeftoverOperands(usize),
}

/// A tree that could not be evaluated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("unknown operator '{0}'")]
    UnknownOperator(String),
    #[error("'{0}' is not a number")]
    InvalidNumber(String),
}

/// Any failure from the full string-to-number pipeline. The two variants let
/// a caller tell malformed input apart from a tree that would not evaluate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}
