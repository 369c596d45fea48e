use std::fs;

use exprtree::{
    Number,
    error::EvalError,
    evaluate,
    interpreter::{operator::OperatorKind, parser::group::MAX_GROUP_DEPTH},
};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line_number, line) in content.lines().enumerate() {
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let (expression, expected) =
                line.split_once("=>")
                    .unwrap_or_else(|| panic!("{path:?}:{}: missing '=>'", line_number + 1));
            count += 1;
            check_case(expression, expected.trim(), &format!("{path:?}:{}", line_number + 1));
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn check_case(expression: &str, expected: &str, location: &str) {
    let actual = evaluate(expression);

    if let Some(error) = expected.strip_prefix("error:") {
        match actual {
            Err(e) => assert_eq!(format!("{e:?}"), error.trim(), "{location}: {expression}"),
            Ok(v) => panic!("{location}: {expression} evaluated to {v}, expected {error}"),
        }
        return;
    }

    let value = actual.unwrap_or_else(|e| panic!("{location}: {expression} failed: {e}"));
    if expected.contains('.') {
        let expected: f64 = expected.parse().unwrap();
        match value {
            Number::Real(r) => assert_close(r, expected, location),
            Number::Integer(_) => panic!("{location}: {expression} gave integer {value}, expected real {expected}"),
        }
    } else {
        let expected: i64 = expected.parse().unwrap();
        assert_eq!(value, Number::Integer(expected), "{location}: {expression}");
    }
}

fn assert_close(actual: f64, expected: f64, location: &str) {
    let scale = expected.abs().max(1.0);
    assert!((actual - expected).abs() <= 1e-12 * scale,
            "{location}: got {actual}, expected {expected}");
}

fn assert_value(src: &str, expected: Number) {
    match evaluate(src) {
        Ok(v) => assert_eq!(v, expected, "Expression: {src}"),
        Err(e) => panic!("Expression {src} failed: {e}"),
    }
}

fn assert_error(src: &str, expected: &EvalError) {
    match evaluate(src) {
        Ok(v) => panic!("Expression {src} succeeded with {v} but was expected to fail"),
        Err(e) => assert_eq!(&e, expected, "Expression: {src}"),
    }
}

#[test]
fn given_examples() {
    assert_value("1 + 1", Number::Integer(2));
    assert_value("(3 + 4) * 6", Number::Integer(42));
    assert_value("(1 * 4) + (5 * 2)", Number::Integer(14));
}

#[test]
fn grouping_binds_tightest() {
    assert_value("(1+2)*3", Number::Integer(9));
    assert_value("1+2*3", Number::Integer(7));
    assert_eq!(evaluate("(5)"), evaluate("5"));
    assert_eq!(evaluate("2*(3)"), evaluate("2*3"));
}

#[test]
fn whitespace_is_ignored() {
    let plain = evaluate("1+2").unwrap();
    assert_eq!(evaluate("1 + 2").unwrap(), plain);
    assert_eq!(evaluate("1\t+\n2").unwrap(), plain);
    assert_eq!(evaluate(" \r\n 1+ 2 \u{a0}").unwrap(), plain);
}

#[test]
fn multiply_spellings_agree() {
    assert_value("2*3", Number::Integer(6));
    assert_value("2x3", Number::Integer(6));
    assert_value("2X3", Number::Integer(6));
}

#[test]
fn power_spellings_agree() {
    assert_value("2^10", Number::Integer(1024));
    assert_value("2**10", Number::Integer(1024));
    assert_error("2***3", &EvalError::IncompleteReduction);
}

#[test]
fn division_is_always_real() {
    assert_value("4/2", Number::Real(2.0));
    assert_ne!(evaluate("4/2").unwrap(), Number::Integer(2));
    assert_value("1/4", Number::Real(0.25));
}

#[test]
fn integer_and_real_types_are_kept() {
    assert_value("2.0", Number::Integer(2));
    assert_value("2*1.5", Number::Real(3.0));
    assert_value("2^-2", Number::Real(0.25));
    assert_value("2^0", Number::Integer(1));
    assert_value("-1.5", Number::Real(-1.5));
    assert_value("1^99999999999", Number::Integer(1));
    assert_value("-1^99999999999", Number::Integer(-1));
}

#[test]
fn unary_minus_is_disambiguated() {
    assert_value("3--2", Number::Integer(5));
    assert_value("-5", Number::Integer(-5));
    assert_value("3*-2", Number::Integer(-6));
    assert_value("-(1+3)", Number::Integer(-4));
    assert_value("(-5)", Number::Integer(-5));
    assert_value("-2^2", Number::Integer(4));
}

#[test]
fn unbalanced_grouping_reports_count() {
    assert_error("((", &EvalError::UnbalancedGrouping { count: 2 });
    assert_error("(", &EvalError::UnbalancedGrouping { count: 1 });
    assert_error(")", &EvalError::UnmatchedClosingGroup);
    assert_error(")1+2(+3", &EvalError::UnmatchedClosingGroup);
}

#[test]
fn dangling_operators_are_errors() {
    assert_error("3*", &EvalError::MissingRightOperand { operator: OperatorKind::Multiply });
    assert_error("*3", &EvalError::MissingLeftOperand { operator: OperatorKind::Multiply });
    assert_error("1+*4", &EvalError::IncompleteReduction);
}

#[test]
fn unknown_input_is_error() {
    assert_error("4%3", &EvalError::UnrecognizedToken { token: "4%3".to_string() });
    assert_error("foobar", &EvalError::UnrecognizedToken { token: "foobar".to_string() });
}

#[test]
fn empty_input_is_error() {
    assert_error("", &EvalError::IncompleteReduction);
    assert_error("   ", &EvalError::IncompleteReduction);
}

#[test]
fn arithmetic_failures_are_errors() {
    assert_error("1/0", &EvalError::DivisionByZero);
    assert_error("1/(2-2)", &EvalError::DivisionByZero);
    assert_error("2^63", &EvalError::Overflow);
}

#[test]
fn error_messages_name_the_problem() {
    let message = evaluate("foobar").unwrap_err().to_string();
    assert!(message.contains("Unknown operator or bad input: 'foobar'"), "{message}");

    let message = evaluate("((").unwrap_err().to_string();
    assert!(message.contains("2 too many opening operators"), "{message}");

    let message = evaluate("3*").unwrap_err().to_string();
    assert!(message.contains("'*'"), "{message}");

    let nested = format!("{}1{}", "(".repeat(300), ")".repeat(300));
    let message = evaluate(&nested).unwrap_err().to_string();
    assert!(message.contains("more than 256 levels"), "{message}");
}

#[test]
fn long_chains_evaluate() {
    let terms = 200_000;

    assert_value(&format!("{}1", "1+".repeat(terms)), Number::Integer(200_001));
    assert_value(&format!("{}2", "2-".repeat(terms)), Number::Integer(-399_998));
    assert_value(&format!("{}1", "1^".repeat(terms)), Number::Integer(1));
    assert_value(&format!("{}1", "-1*".repeat(terms)), Number::Integer(1));
    assert_value(&format!("{}1", "-1*".repeat(terms + 1)), Number::Integer(-1));
    assert_value(&format!("{}1", "1/".repeat(terms)), Number::Real(1.0));
}

#[test]
fn long_chains_report_errors() {
    let terms = 200_000;

    assert_error(&"1+".repeat(terms),
                 &EvalError::MissingRightOperand { operator: OperatorKind::Add });
    assert_error(&format!("{}0", "1/".repeat(terms)), &EvalError::DivisionByZero);
    assert_error(&format!("{}1+*2", "1+".repeat(terms)), &EvalError::IncompleteReduction);
}

#[test]
fn deep_grouping_is_bounded() {
    let nested = |depth: usize| format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let too_deep = EvalError::NestingTooDeep { limit: MAX_GROUP_DEPTH };

    assert_value(&nested(MAX_GROUP_DEPTH), Number::Integer(1));
    assert_value(&format!("{}2{}", "-(".repeat(MAX_GROUP_DEPTH), ")".repeat(MAX_GROUP_DEPTH)),
                 Number::Integer(2));
    assert_error(&nested(MAX_GROUP_DEPTH + 1), &too_deep);
    assert_error(&nested(50_000), &too_deep);
    assert_error(&"(".repeat(50_000), &EvalError::UnbalancedGrouping { count: 50_000 });
}
