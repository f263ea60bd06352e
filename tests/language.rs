use std::fs;

use reckon::{
    Session,
    error::{Error, EvalError, LexError, ParseError},
    interpreter::environment::ConstantTable,
};
use walkdir::WalkDir;

const TOLERANCE: f64 = 1e-9;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let mut session = Session::new();
        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            count += 1;
            check_case(&mut session, line, path.display(), i + 1);
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Checks one `expression => expected` line, where `expected` is a number or
/// the word `error`.
fn check_case(session: &mut Session, line: &str, file: impl std::fmt::Display, number: usize) {
    let (source, expected) = line.rsplit_once(" => ")
                                 .unwrap_or_else(|| panic!("{file}:{number}: missing ' => ' in {line:?}"));
    let result = session.evaluate(source);

    if expected.trim() == "error" {
        assert!(result.is_err(), "{file}:{number}: {source:?} should fail, got {result:?}");
        return;
    }

    let expected: f64 = expected.trim()
                                .parse()
                                .unwrap_or_else(|e| panic!("{file}:{number}: bad expectation: {e}"));
    match result {
        Ok(value) => assert!((value - expected).abs() <= TOLERANCE * expected.abs().max(1.0),
                             "{file}:{number}: {source:?} gave {value}, expected {expected}"),
        Err(e) => panic!("{file}:{number}: {source:?} failed: {e}"),
    }
}

fn assert_value(src: &str, expected: f64) {
    match Session::new().evaluate(src) {
        Ok(value) => assert!((value - expected).abs() < TOLERANCE,
                             "{src:?} gave {value}, expected {expected}"),
        Err(e) => panic!("Expression failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match Session::new().evaluate(src) {
        Ok(value) => panic!("Expression {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn precedence_and_associativity() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("2^3^2", 512.0);
    assert_value("8/4/2", 1.0);
    assert_value("10 - 4 - 3", 3.0);
    assert_value("-3^2", -9.0);
    assert_value("2 * 3^2", 18.0);
}

#[test]
fn implicit_multiplication() {
    assert_value("2sin(90)", 2.0);
    assert_value("2(3 + 4)", 14.0);
    assert_value("(1 + 1)(2 + 2)", 8.0);
    assert_value("2pi", std::f64::consts::TAU);
    assert_value("3 4", 12.0);
}

#[test]
fn signs() {
    assert_value("-(-5)", 5.0);
    assert_value("1 - -2", 3.0);
    assert_value("+5", 5.0);
    assert_value("2 * -3", -6.0);
    assert_value("2^-2", 0.25);
    assert_value("-2^2", -4.0);
    assert_value("(-2)^2", 4.0);
    for doubled in ["--5", "---5", "-+5", "+-5", "2^--1"] {
        assert!(matches!(assert_failure(doubled), Error::Parse(ParseError::MissingOperand { .. })),
                "{doubled:?} should need an operand after its first sign");
    }
}

#[test]
fn factorial() {
    assert_value("5!", 120.0);
    assert_value("0!", 1.0);
    assert_value("3!!", 720.0);
    assert_value("-3!", -6.0);
    assert_value("(2 + 1)!", 6.0);
    assert!(Session::new().evaluate("170!").is_ok());
    assert!(matches!(assert_failure("171!"), Error::Eval(EvalError::Overflow { .. })));
    assert!(matches!(assert_failure("3.5!"), Error::Eval(EvalError::DomainError { .. })));
    assert!(matches!(assert_failure("(-1)!"), Error::Eval(EvalError::DomainError { .. })));
}

#[test]
fn comparisons_and_logic() {
    assert_value("5 > 3", 1.0);
    assert_value("5 < 3", 0.0);
    assert_value("3 >= 3", 1.0);
    assert_value("2 <= 1", 0.0);
    assert_value("2 == 2", 1.0);
    assert_value("2 != 2", 0.0);
    assert_value("0 || 1 && 0", 0.0);
    assert_value("1 && 2", 1.0);
    assert_value("0 || 0", 0.0);
    assert_value("-1 || 0", 1.0);
    assert_value("1 + 1 == 2 && 3 > 2", 1.0);
}

#[test]
fn logic_is_eager() {
    assert!(matches!(assert_failure("0 && 1/0"), Error::Eval(EvalError::DivisionByZero)));
    assert!(matches!(assert_failure("1 || undefined"),
                     Error::Eval(EvalError::UndefinedVariable { .. })));
}

#[test]
fn variables_persist_in_session() {
    let mut session = Session::new();
    assert_eq!(session.evaluate("x = 10").unwrap(), 10.0);
    assert_eq!(session.evaluate("x + 5").unwrap(), 15.0);
    assert_eq!(session.evaluate("x = 5").unwrap(), 5.0);
    assert_eq!(session.evaluate("x").unwrap(), 5.0);
    assert_eq!(session.evaluate("y = x * 2").unwrap(), 10.0);
    assert_eq!(session.variables().iter_sorted(), [("x", 5.0), ("y", 10.0)]);

    session.reset();
    assert!(session.variables().is_empty());
    assert!(matches!(session.evaluate("x"),
                     Err(Error::Eval(EvalError::UndefinedVariable { .. }))));
}

#[test]
fn failed_assignment_keeps_old_value() {
    let mut session = Session::new();
    session.evaluate("x = 1").unwrap();
    assert!(session.evaluate("x = 1/0").is_err());
    assert!(session.evaluate("x = 1 +").is_err());
    assert_eq!(session.evaluate("x").unwrap(), 1.0);
}

#[test]
fn constants() {
    assert_value("pi", std::f64::consts::PI);
    assert_value("e", std::f64::consts::E);
    assert_value("tau / pi", 2.0);
    assert_value("phi^2 - phi", 1.0);

    let mut bare = Session::with_constants(ConstantTable::new());
    assert!(bare.evaluate("pi").is_err());

    let mut custom = Session::with_constants([("k", 3.0)].into_iter().collect());
    assert_eq!(custom.evaluate("2k").unwrap(), 6.0);
}

#[test]
fn builtin_functions() {
    assert_value("sin(30)", 0.5);
    assert_value("cos(0)", 1.0);
    assert_value("tan(45)", 1.0);
    assert_value("asin(1)", 90.0);
    assert_value("atan2(1, 1)", 45.0);
    assert_value("sqrt(16)", 4.0);
    assert_value("sqrt(0)", 0.0);
    assert_value("ln(e)", 1.0);
    assert_value("log(100)", 2.0);
    assert_value("log(8, 2)", 3.0);
    assert_value("log2(8)", 3.0);
    assert_value("log10(0.001)", -3.0);
    assert_value("exp(0)", 1.0);
    assert_value("pow(2, 8)", 256.0);
    assert_value("abs(-7)", 7.0);
    assert_value("ceil(1.2)", 2.0);
    assert_value("floor(-1.2)", -2.0);
    assert_value("round(-4.5)", -5.0);
    assert_value("trunc(-2.7)", -2.0);
    assert_value("sign(-42)", -1.0);
    assert_value("mod(10, 3)", 1.0);
    assert_value("min(3, 7)", 3.0);
    assert_value("max(3, 7)", 7.0);
    assert_value("deg2rad(180)", std::f64::consts::PI);
    assert_value("rad2deg(pi)", 180.0);
    assert_value("sum(1, 2, 3, 4)", 10.0);
    assert_value("product(1, 2, 3, 4)", 24.0);
    assert_value("mean(1, 2, 3, 4)", 2.5);
    assert_value("median(3, 1, 2)", 2.0);
    assert_value("mode(1, 2, 2, 3, 3)", 2.0);
}

#[test]
fn evaluation_errors() {
    assert_eq!(assert_failure("5/0"), Error::Eval(EvalError::DivisionByZero));
    assert_eq!(assert_failure("mod(5, 0)"), Error::Eval(EvalError::DivisionByZero));
    assert!(matches!(assert_failure("sqrt(-1)"), Error::Eval(EvalError::DomainError { .. })));
    assert!(matches!(assert_failure("ln(0)"), Error::Eval(EvalError::DomainError { .. })));
    assert!(matches!(assert_failure("log(10, 1)"), Error::Eval(EvalError::DomainError { .. })));
    assert!(matches!(assert_failure("pow(-2, 0.5)"), Error::Eval(EvalError::DomainError { .. })));
    assert!(matches!(assert_failure("0^-1"), Error::Eval(EvalError::DomainError { .. })));
    assert!(matches!(assert_failure("exp(710)"), Error::Eval(EvalError::Overflow { .. })));
    assert!(matches!(assert_failure("10^400"), Error::Eval(EvalError::Overflow { .. })));
    assert!(matches!(assert_failure("tan(270)"),
                     Error::Eval(EvalError::UndefinedResult { .. })));
    assert!(matches!(assert_failure("undefined_var"),
                     Error::Eval(EvalError::UndefinedVariable { .. })));
    assert!(matches!(assert_failure("f(2)"), Error::Eval(EvalError::UnknownFunction { .. })));
    assert!(matches!(assert_failure("sin(1, 2)"), Error::Eval(EvalError::ArityError { .. })));
    assert!(matches!(assert_failure("sin"), Error::Eval(EvalError::ArityError { .. })));
    assert!(matches!(assert_failure("max(1)"), Error::Eval(EvalError::ArityError { .. })));
}

#[test]
fn lexical_errors() {
    assert!(matches!(assert_failure("3.14.15"),
                     Error::Lex(LexError::MultipleDecimalPoints { .. })));
    assert!(matches!(assert_failure("2e"), Error::Lex(LexError::MalformedExponent { .. })));
    assert!(matches!(assert_failure("1 & 1"), Error::Lex(LexError::InvalidOperator { .. })));
    assert!(matches!(assert_failure("2 # 3"), Error::Lex(LexError::InvalidCharacter { .. })));
}

#[test]
fn parse_errors() {
    assert_eq!(assert_failure(""), Error::Parse(ParseError::EmptyExpression));
    assert_eq!(assert_failure("   "), Error::Parse(ParseError::EmptyExpression));
    assert!(matches!(assert_failure("(2 + 3"), Error::Parse(ParseError::UnmatchedParen { .. })));
    assert!(matches!(assert_failure("2 +"), Error::Parse(ParseError::MissingOperand { .. })));
    assert!(matches!(assert_failure("2 + 3)"),
                     Error::Parse(ParseError::UnexpectedTrailingToken { .. })));
    assert_eq!(assert_failure("max(x 1)").to_string(), "unexpected token '1' at position 6");
}

#[test]
fn deep_nesting_is_an_error() {
    let mut session = Session::new();
    let nested = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert!(matches!(session.evaluate(&nested),
                     Err(Error::Parse(ParseError::NestingTooDeep { .. }))));
    assert!(matches!(session.evaluate(&"-(".repeat(10_000)),
                     Err(Error::Parse(ParseError::NestingTooDeep { .. }))));

    let shallow = format!("{}1{}", "(".repeat(40), ")".repeat(40));
    assert_eq!(session.evaluate(&shallow), Ok(1.0));
}

#[test]
fn error_messages() {
    assert_eq!(assert_failure("5/0").to_string(), "division by zero");
    assert_eq!(assert_failure("foo").to_string(), "undefined variable 'foo'");
    assert_eq!(assert_failure("log(1, 2, 3)").to_string(),
               "function 'log' requires 1 or 2 argument(s), got 3");
    assert_eq!(assert_failure("1 $ 2").to_string(),
               "invalid character '$' at position 2");
}
