use crate::error::ParseError;
use crate::op;
use crate::op::Prec;

// `(` is not in the operator table, so it compares as precedence 0 and is
// only ever removed by an explicit `)`.
fn stack_prec(token: &str) -> Prec {
    op::lookup(token).map_or(0, |op| op.prec)
}

/// Convert an infix token sequence into reverse polish notation. For example,
/// `1 * 2 + 3` becomes `1 2 * 3 +`.
///
/// Standard shunting-yard: operators pop the stack while the top has
/// precedence >= their own, so operators of equal precedence group left to
/// right (including `**`). Unbalanced parentheses are reported as
/// [`ParseError::UnmatchedCloseParen`] or [`ParseError::UnmatchedOpenParen`];
/// operand/operator mismatches are left for the tree builder to catch.
pub fn to_postfix(tokens: Vec<String>) -> Result<Vec<String>, ParseError> {
    let mut output = Vec::<String>::new();
    let mut stack = Vec::<String>::new();
    for token in tokens {
        if token == "(" {
            stack.push(token);
        } else if token == ")" {
            loop {
                match stack.pop() {
                    Some(top) => {
                        if top == "(" {
                            break;
                        }
                        output.push(top);
                    }
                    None => return Err(ParseError::UnmatchedCloseParen),
                }
            }
        } else if let Some(op) = op::lookup(&token) {
            while let Some(top) = stack.pop() {
                if stack_prec(&top) >= op.prec {
                    output.push(top);
                } else {
                    stack.push(top);
                    break;
                }
            }
            stack.push(token);
        } else {
            output.push(token);
        }
    }
    while let Some(top) = stack.pop() {
        if top == "(" {
            return Err(ParseError::UnmatchedOpenParen);
        }
        output.push(top);
    }
    Ok(output)
}
