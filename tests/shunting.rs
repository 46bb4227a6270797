use rpncalc::{to_postfix, tokenize, ParseError};

#[track_caller]
fn assert_postfix(src: &str, expected: &str) {
    let postfix = to_postfix(tokenize(src)).unwrap();
    assert_eq!(postfix.join(" "), expected, "for input {:?}", src);
}

#[track_caller]
fn assert_malformed(src: &str, expected: ParseError) {
    let err = to_postfix(tokenize(src)).unwrap_err();
    assert_eq!(err, expected, "for input {:?}", src);
}

#[test]
fn test_tokenize() {
    assert_eq!(tokenize("1+2"), ["1", "+", "2"]);
    assert_eq!(tokenize("(3+5)*2"), ["(", "3", "+", "5", ")", "*", "2"]);
    assert_eq!(tokenize("  10 /  2.5"), ["10", "/", "2.5"]);
    assert_eq!(tokenize("2**3"), ["2", "**", "3"]);
    assert_eq!(tokenize(""), Vec::<String>::new());
}

#[test]
fn test_postfix_precedence() {
    assert_postfix("1 + 2", "1 2 +");
    assert_postfix("1 + 2 * 3", "1 2 3 * +");
    assert_postfix("1 * 2 + 3", "1 2 * 3 +");
    assert_postfix("2 * 3 ** 2", "2 3 2 ** *");
}

#[test]
fn test_postfix_left_assoc() {
    assert_postfix("1 - 2 - 3", "1 2 - 3 -");
    assert_postfix("10 / 2 / 5", "10 2 / 5 /");
    assert_postfix("2 ** 3 ** 2", "2 3 ** 2 **");
}

#[test]
fn test_postfix_parens() {
    assert_postfix("(3 + 5) * 2", "3 5 + 2 *");
    assert_postfix("3 / (1 + 2)", "3 1 2 + /");
    assert_postfix("((1))", "1");
}

#[test]
fn test_postfix_unbalanced_parens() {
    assert_malformed("1 + 2)", ParseError::UnmatchedCloseParen);
    assert_malformed(")", ParseError::UnmatchedCloseParen);
    assert_malformed("(1 + 2", ParseError::UnmatchedOpenParen);
    assert_malformed("(", ParseError::UnmatchedOpenParen);
}

#[test]
fn test_postfix_leaves_operand_checks_to_tree_builder() {
    // `3 +` converts fine; only the tree builder notices the missing operand.
    assert_postfix("3 +", "3 +");
}
