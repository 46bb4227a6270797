use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // `**` is listed first so it lexes as one token rather than two `*`s.
    static ref OPERATOR_OR_PAREN: Regex = Regex::new(r"(\*\*|[+\-*/()])").unwrap();
}

/// Split an expression string into tokens.
///
/// Every operator and parenthesis is padded with spaces, then the string is
/// split on whitespace. Numeric literals (including decimal points) pass
/// through untouched, so `"(3+5)*2"` tokenizes to `( 3 + 5 ) * 2`.
pub fn tokenize(expression: &str) -> Vec<String> {
    let spaced = OPERATOR_OR_PAREN.replace_all(expression, " $1 ");
    spaced.split_whitespace().map(str::to_owned).collect()
}
