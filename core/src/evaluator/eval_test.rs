//! Unit tests for the evaluator.

use super::*;
use crate::parser::{self, NodeKind, Span};
use crate::test_utils::init_test_logging;

fn run(input: &str) -> Value {
    let tree = parser::parse_line(input, parser::DEFAULT_MAX_DEPTH).expect("parsing failed");
    eval(&tree)
}

fn run_int(input: &str) -> Value<i64> {
    let tree = parser::parse_line(input, parser::DEFAULT_MAX_DEPTH).expect("parsing failed");
    eval(&tree)
}

fn num(text: &str) -> Node {
    Node::number(text, Span::new(0, text.len()))
}

fn op(token: &str) -> Node {
    Node::operator(token, Span::new(0, token.len()))
}

#[test]
fn test_single_numbers() {
    for literal in ["0", "42", "-7", "3.5", "-0.25", "10."] {
        let tree = parser::parse_expr(literal).unwrap();
        let expected: f64 = literal.parse().unwrap();
        assert_eq!(eval::<f64>(&tree), Value::Number(expected), "literal {}", literal);
    }
}

#[test]
fn test_binary_operators() {
    let cases = [
        ("+ 7 2", 9.0),
        ("- 7 2", 5.0),
        ("* 7 2", 14.0),
        ("/ 7 2", 3.5),
        ("% 7 2", 1.0),
        ("^ 7 2", 49.0),
        ("(+ 7 2)", 9.0),
        ("(^ 2 0.5)", 2f64.powf(0.5)),
    ];
    for (input, expected) in cases {
        assert_eq!(run(input), Value::Number(expected), "input {}", input);
    }
}

#[test]
fn test_word_and_symbol_synonyms() {
    let pairs = [
        ("+", "add"),
        ("-", "sub"),
        ("*", "mul"),
        ("/", "div"),
        ("%", "mod"),
    ];
    let operands = ["3 4", "-2.5 8", "10 3 2", "(+ 1 2) 0.5"];
    for (symbol, word) in pairs {
        for args in operands {
            let by_symbol = run(&format!("{} {}", symbol, args));
            let by_word = run(&format!("{} {}", word, args));
            assert_eq!(by_symbol, by_word, "({} {}) vs ({} {})", symbol, args, word, args);
        }
    }
}

#[test]
fn test_variadic_fold() {
    assert_eq!(run("+ 1 2 3 4"), Value::Number(10.0));
    assert_eq!(run("- 10 1 2 3"), Value::Number(4.0));
    assert_eq!(run("/ 100 2 5"), Value::Number(10.0));
    // Left to right: (2 ^ 3) ^ 2
    assert_eq!(run("^ 2 3 2"), Value::Number(64.0));
}

#[test]
fn test_single_operand() {
    assert_eq!(run("+ 5"), Value::Number(5.0));
    assert_eq!(run("- 5"), Value::Number(5.0));
    assert_eq!(run("min 5"), Value::Number(5.0));
}

#[test]
fn test_nesting() {
    assert_eq!(run("* (+ 1 2) (- 10 4)"), Value::Number(18.0));
    assert_eq!(run("(* (+ 1 2) (- 10 4))"), Value::Number(18.0));
    assert_eq!(
        run("+ 1 (* 2 (- 5 (/ 8 4)))"),
        Value::Number(7.0)
    );
}

#[test]
fn test_min_max_scan_every_operand() {
    assert_eq!(run("min 5 3 9 -1 4"), Value::Number(-1.0));
    assert_eq!(run("max 5 3 9 -1 4"), Value::Number(9.0));
    assert_eq!(run("(min 5 3 9 -1 4)"), Value::Number(-1.0));
    assert_eq!(run("max -3 -2 -7"), Value::Number(-2.0));
    assert_eq!(run("min (max 1 2) (max 0 3)"), Value::Number(2.0));
}

#[test]
fn test_min_max_error_short_circuits() {
    assert_eq!(
        run("min 1 (/ 1 0) 5"),
        Value::Error(EvalError::DivisionByZero)
    );
    assert_eq!(
        run("max (/ 1 0) 1"),
        Value::Error(EvalError::DivisionByZero)
    );
    assert_eq!(
        run("max 1 2 (% 3 0)"),
        Value::Error(EvalError::DivisionByZero)
    );
}

#[test]
fn test_division_by_zero() {
    assert_eq!(run("/ 5 0"), Value::Error(EvalError::DivisionByZero));
    assert_eq!(run("% 5 0"), Value::Error(EvalError::DivisionByZero));
    assert_eq!(run("div 5 0.0"), Value::Error(EvalError::DivisionByZero));
    assert_eq!(run("/ 5 0 1"), Value::Error(EvalError::DivisionByZero));
    assert_eq!(run("/ 5 (- 2 2)"), Value::Error(EvalError::DivisionByZero));
}

#[test]
fn test_error_propagates_through_enclosing_expressions() {
    assert_eq!(
        run("+ (/ 1 0) (/ 1 0)"),
        Value::Error(EvalError::DivisionByZero)
    );
    assert_eq!(
        run("* 2 (+ 1 (/ 3 0)) 4"),
        Value::Error(EvalError::DivisionByZero)
    );
}

#[test]
fn test_leftmost_error_wins() {
    let huge = "9".repeat(400);
    let input = format!("+ {} (/ 1 0)", huge);
    assert_eq!(run(&input), Value::Error(EvalError::InvalidNumber));

    let input = format!("+ (/ 1 0) {}", huge);
    assert_eq!(run(&input), Value::Error(EvalError::DivisionByZero));
}

#[test]
fn test_invalid_number() {
    init_test_logging();
    let huge = "1".repeat(400);
    assert_eq!(
        run(&format!("+ 1 {}", huge)),
        Value::Error(EvalError::InvalidNumber)
    );
    let tree = parser::parse_expr(&huge).unwrap();
    assert_eq!(eval::<f64>(&tree), Value::Error(EvalError::InvalidNumber));
}

#[test]
fn test_underflowing_literal_is_invalid() {
    let tiny = format!("0.{}1", "0".repeat(400));
    let tree = parser::parse_expr(&tiny).unwrap();
    assert_eq!(eval::<f64>(&tree), Value::Error(EvalError::InvalidNumber));
    assert_eq!(
        run(&format!("+ 1 {}", tiny)),
        Value::Error(EvalError::InvalidNumber)
    );
    assert_eq!(run("+ 0.000 1"), Value::Number(1.0));
}

#[test]
fn test_invalid_operator_in_hand_built_tree() {
    let tree = Node::expr(op("pow"), vec![num("2"), num("3")], Span::new(0, 11)).unwrap();
    assert_eq!(eval::<f64>(&tree), Value::Error(EvalError::InvalidOperator));
    assert_eq!(eval::<i64>(&tree), Value::Error(EvalError::InvalidOperator));
}

#[test]
fn test_invalid_operator_with_single_operand_is_never_applied() {
    let tree = Node::expr(op("??"), vec![num("5")], Span::new(0, 6)).unwrap();
    assert_eq!(eval::<f64>(&tree), Value::Number(5.0));
    assert_eq!(eval::<i64>(&tree), Value::Number(5));
}

#[test]
fn test_invalid_operator_nested_in_valid_tree() {
    let single = Node::expr(op("??"), vec![num("1")], Span::new(0, 6)).unwrap();
    let tree = Node::program(op("+"), vec![num("1"), single], Span::new(0, 10)).unwrap();
    assert_eq!(eval::<f64>(&tree), Value::Number(2.0));

    let pair = Node::expr(op("??"), vec![num("1"), num("2")], Span::new(0, 8)).unwrap();
    let tree = Node::program(op("+"), vec![num("1"), pair], Span::new(0, 12)).unwrap();
    assert_eq!(eval::<f64>(&tree), Value::Error(EvalError::InvalidOperator));
}

#[test]
fn test_operand_errors_win_over_invalid_operator() {
    let div_by_zero = || Node::expr(op("/"), vec![num("1"), num("0")], Span::new(0, 7)).unwrap();

    let tree = Node::expr(op("??"), vec![div_by_zero(), num("2")], Span::new(0, 14)).unwrap();
    assert_eq!(eval::<f64>(&tree), Value::Error(EvalError::DivisionByZero));

    let tree = Node::expr(op("??"), vec![num("2"), div_by_zero()], Span::new(0, 14)).unwrap();
    assert_eq!(eval::<f64>(&tree), Value::Error(EvalError::DivisionByZero));

    let huge = "9".repeat(400);
    let tree = Node::expr(op("??"), vec![num(&huge), num("2")], Span::new(0, 410)).unwrap();
    assert_eq!(eval::<f64>(&tree), Value::Error(EvalError::InvalidNumber));
}

#[test]
fn test_hand_built_tree_matches_parsed_tree() {
    let inner = Node::expr(op("+"), vec![num("1"), num("2")], Span::new(2, 9)).unwrap();
    let tree = Node::program(op("*"), vec![inner, num("6")], Span::new(0, 11)).unwrap();
    assert_eq!(tree.kind(), NodeKind::Program);
    assert_eq!(eval::<f64>(&tree), run("* (+ 1 2) 6"));
}

#[test]
fn test_tree_is_not_mutated() {
    let tree = parser::parse("+ (* 2 3) 4").unwrap();
    let before = tree.clone();
    let first = eval::<f64>(&tree);
    let second = eval::<f64>(&tree);
    assert_eq!(first, second);
    assert_eq!(tree, before);
}

#[test]
fn test_depth_limit() {
    let tree = parser::parse("+ (+ (+ 1 2) 3) 4").unwrap();

    assert_eq!(eval_with_limits::<f64>(&tree, 3), Value::Number(10.0));
    assert_eq!(
        eval_with_limits::<f64>(&tree, 2),
        Value::Error(EvalError::DepthExceeded)
    );
}

#[test]
fn test_evaluator_is_reusable_after_depth_error() {
    let deep = parser::parse("+ (+ (+ 1 2) 3) 4").unwrap();
    let shallow = parser::parse("+ 1 2").unwrap();

    let mut evaluator = Evaluator::<f64>::new(EvaluatorOptions { max_depth: 2 });
    assert_eq!(evaluator.eval(&deep), Value::Error(EvalError::DepthExceeded));
    assert_eq!(evaluator.eval(&shallow), Value::Number(3.0));
}

#[test]
fn test_integer_mode() {
    assert_eq!(run_int("+ 1 2 3"), Value::Number(6));
    assert_eq!(run_int("/ 7 2"), Value::Number(3));
    assert_eq!(run_int("% -7 2"), Value::Number(-1));
    assert_eq!(run_int("^ 2 10"), Value::Number(1024));
    assert_eq!(run_int("min 4 -2 9"), Value::Number(-2));
    assert_eq!(run_int("+ 1.9 1"), Value::Number(2));
    assert_eq!(run_int("/ 7 0"), Value::Error(EvalError::DivisionByZero));
}

#[test]
fn test_integer_mode_rejects_out_of_range_literal() {
    assert_eq!(
        run_int("+ 1 99999999999999999999"),
        Value::Error(EvalError::InvalidNumber)
    );
}

#[test]
fn test_float_mod_sign_follows_dividend() {
    assert_eq!(run("% -7 3"), Value::Number(-1.0));
    assert_eq!(run("% 7 -3"), Value::Number(1.0));
    assert_eq!(run("mod 5.5 2"), Value::Number(1.5));
}
