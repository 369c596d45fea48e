//! Property-based tests for the evaluation pipeline.

use exprtree::{Number, evaluate, interpreter::evaluator::core::apply, parse};
use proptest::prelude::*;

// Strategy for decimal literals, integral or not
fn literal() -> impl Strategy<Value = String> {
    prop_oneof![(0i64..100).prop_map(|n| n.to_string()),
                (0u32..1000, 1u32..100).prop_map(|(whole, fraction)| format!("{whole}.{fraction}"))]
}

fn operator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("+"),
                Just("-"),
                Just("*"),
                Just("x"),
                Just("X"),
                Just("/"),
                Just("^"),
                Just("**")]
}

// Strategy for expression text, valid or not
fn expression() -> impl Strategy<Value = String> {
    literal().prop_recursive(4, 32, 2, |inner| {
                 prop_oneof![(inner.clone(), operator(), inner.clone()).prop_map(|(l, op, r)| {
                                                                               format!("{l}{op}{r}")
                                                                           }),
                             inner.clone().prop_map(|e| format!("({e})")),
                             inner.prop_map(|e| format!("-{e}"))]
             })
}

fn whitespace() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(""), Just(" "), Just("  "), Just("\t"), Just("\n"), Just("\r\n")]
}

fn interleave(text: &str, gaps: &[&str]) -> String {
    let mut out = String::new();
    for (i, c) in text.chars().enumerate() {
        if !gaps.is_empty() {
            out.push_str(gaps[i % gaps.len()]);
        }
        out.push(c);
    }
    out
}

// Conventional evaluation of `first (op n)*` with `*` above `+`/`-`
fn reference(first: i64, rest: &[(char, i64)]) -> i64 {
    let mut sum = 0;
    let mut sign = 1;
    let mut term = first;

    for &(op, n) in rest {
        match op {
            '*' => term *= n,
            '+' | '-' => {
                sum += sign * term;
                sign = if op == '+' { 1 } else { -1 };
                term = n;
            },
            _ => unreachable!(),
        }
    }

    sum + sign * term
}

proptest! {
    #[test]
    fn whitespace_does_not_change_result(text in expression(),
                                         gaps in proptest::collection::vec(whitespace(), 0..16)) {
        prop_assert_eq!(evaluate(&interleave(&text, &gaps)), evaluate(&text));
    }

    #[test]
    fn multiply_spellings_are_interchangeable(text in expression()) {
        let canonical = text.replace('x', "*").replace('X', "*");
        prop_assert_eq!(evaluate(&text), evaluate(&canonical));
    }

    #[test]
    fn serialized_trees_parse_back(text in expression()) {
        if let Ok(tree) = parse(&text) {
            let serialized = tree.to_string();
            prop_assert_eq!(parse(&serialized), Ok(tree.clone()));
            prop_assert_eq!(evaluate(&serialized), apply(&tree));
            prop_assert_eq!(evaluate(&text), apply(&tree));
        }
    }

    #[test]
    fn integer_arithmetic_follows_precedence(first in 0i64..50,
                                             rest in proptest::collection::vec(
                                                 (prop_oneof![Just('+'), Just('-'), Just('*')], 0i64..50),
                                                 0..8)) {
        let mut text = first.to_string();
        for (op, n) in &rest {
            text.push(*op);
            text.push_str(&n.to_string());
        }

        prop_assert_eq!(evaluate(&text), Ok(Number::Integer(reference(first, &rest))));
    }

    #[test]
    fn redundant_parentheses_do_not_change_result(text in expression()) {
        prop_assert_eq!(evaluate(&format!("({text})")), evaluate(&text));
    }
}
