//! Property-based tests for the expression pipeline.
//!
//! These tests use proptest to generate random inputs and verify that:
//! 1. Well-formed numerals scan to one token and evaluate to the same float
//! 2. Comparisons and logical operators only ever produce `0` or `1`
//! 3. The pipeline never panics, whatever the input

use proptest::prelude::*;
use reckon::{
    Session,
    interpreter::lexer::{TokenKind, tokenize},
};

/// Generate numerals in decimal and scientific notation.
fn numeral() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u64..1_000_000).prop_map(|n| n.to_string()),
        (0.0f64..1e6).prop_map(|f| format!("{f}")),
        (0.0f64..1e6, 1usize..8).prop_map(|(f, p)| format!("{f:.p$}")),
        (0.0f64..10.0, -300i32..300).prop_map(|(m, e)| format!("{m}e{e}")),
        (0.0f64..10.0, 0i32..300).prop_map(|(m, e)| format!("{m}E+{e}")),
        "[0-9]{0,5}\\.[0-9]{1,5}".prop_map(|s| s),
    ]
}

/// Generate operands that always evaluate.
fn operand() -> impl Strategy<Value = String> {
    prop_oneof![
        (-1000i64..1000).prop_map(|n| format!("({n})")),
        (-100.0f64..100.0).prop_map(|f| format!("({f})")),
        Just("pi".to_string()),
        Just("e".to_string()),
        Just("sin(30)".to_string()),
    ]
}

/// Generate tokens that look like expression elements, in any order.
fn expression_token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("(".to_string()),
        Just(")".to_string()),
        Just(",".to_string()),
        Just("+".to_string()),
        Just("-".to_string()),
        Just("*".to_string()),
        Just("/".to_string()),
        Just("^".to_string()),
        Just("!".to_string()),
        Just("=".to_string()),
        Just("==".to_string()),
        Just("<=".to_string()),
        Just("&&".to_string()),
        Just("||".to_string()),
        Just("sin".to_string()),
        Just("log".to_string()),
        Just("sum".to_string()),
        Just("x".to_string()),
        Just("pi".to_string()),
        numeral(),
        "[a-z][a-z0-9_]{0,6}".prop_map(|s| s),
    ]
}

proptest! {
    #[test]
    fn numerals_scan_to_one_token(text in numeral()) {
        let tokens = tokenize(&text).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(&tokens[0].text, &text);
    }

    #[test]
    fn numerals_evaluate_to_their_value(text in numeral()) {
        let expected: f64 = text.parse().unwrap();
        let value = Session::new().evaluate(&text).unwrap();
        prop_assert_eq!(value.to_bits(), expected.to_bits());
    }

    #[test]
    fn comparisons_yield_zero_or_one(
        left in operand(),
        right in operand(),
        op in prop::sample::select(vec!["<", ">", "<=", ">=", "==", "!=", "&&", "||"]),
    ) {
        let source = format!("{left} {op} {right}");
        let value = Session::new().evaluate(&source).unwrap();
        prop_assert!(value == 0.0 || value == 1.0, "{} gave {}", source, value);
    }

    #[test]
    fn assignment_then_read_back(value in -1e6f64..1e6) {
        let mut session = Session::new();
        let assigned = session.evaluate(&format!("v = ({value})")).unwrap();
        prop_assert_eq!(assigned, value);
        prop_assert_eq!(session.evaluate("v").unwrap(), value);
    }

    #[test]
    fn pipeline_never_panics_on_arbitrary_text(source in "[\\x00-\\x7F]{0,200}") {
        let _ = Session::new().evaluate(&source);
    }

    #[test]
    fn pipeline_never_panics_on_token_soup(
        tokens in prop::collection::vec(expression_token(), 0..40),
    ) {
        let mut session = Session::new();
        let _ = session.evaluate(&tokens.join(" "));
        let _ = session.evaluate(&tokens.concat());
    }
}
