//! Tests for Display trait on Value - what the calculator prints

use crate::{evaluator::EvalError, values::Value};

#[test]
fn test_display_int_positive() {
    let value: Value<i64> = Value::Number(42);
    assert_eq!(format!("{}", value), "42");
}

#[test]
fn test_display_int_negative() {
    let value: Value<i64> = Value::Number(-100);
    assert_eq!(format!("{}", value), "-100");
}

#[test]
fn test_display_float_whole() {
    let value: Value = Value::Number(18.0);
    assert_eq!(format!("{}", value), "18");
}

#[test]
fn test_display_float_with_decimal() {
    let value: Value = Value::Number(2.5);
    assert_eq!(format!("{}", value), "2.5");

    let value: Value = Value::Number(-0.125);
    assert_eq!(format!("{}", value), "-0.125");
}

#[test]
fn test_display_float_non_finite() {
    assert_eq!(format!("{}", Value::Number(f64::INFINITY)), "inf");
    assert_eq!(format!("{}", Value::Number(f64::NAN)), "NaN");
}

#[test]
fn test_display_errors() {
    let cases = [
        (EvalError::DivisionByZero, "Error: Division By Zero"),
        (EvalError::InvalidOperator, "Error: Invalid Operator"),
        (EvalError::InvalidNumber, "Error: Invalid Number"),
        (EvalError::DepthExceeded, "Error: Maximum Depth Exceeded"),
    ];
    for (error, expected) in cases {
        let value: Value = Value::Error(error);
        assert_eq!(format!("{}", value), expected);
    }
}

#[test]
fn test_display_is_repeatable() {
    let values: [Value; 3] = [
        Value::Number(1.0 / 3.0),
        Value::Number(-7.0),
        Value::Error(EvalError::DivisionByZero),
    ];
    for value in values {
        let first = value.to_string();
        let second = value.to_string();
        assert_eq!(first, second);
    }
}

#[test]
fn test_error_messages_are_distinct() {
    let messages: Vec<String> = [
        EvalError::DivisionByZero,
        EvalError::InvalidOperator,
        EvalError::InvalidNumber,
        EvalError::DepthExceeded,
    ]
    .iter()
    .map(|e| Value::<f64>::Error(*e).to_string())
    .collect();

    for (i, a) in messages.iter().enumerate() {
        for b in &messages[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_conversions() {
    let ok: Value<i64> = Ok(3).into();
    assert_eq!(ok.as_number(), Some(3));
    assert!(!ok.is_error());

    let err: Value<i64> = Err(EvalError::InvalidNumber).into();
    assert_eq!(err.as_error(), Some(EvalError::InvalidNumber));
    assert_eq!(err.into_result(), Err(EvalError::InvalidNumber));
}
