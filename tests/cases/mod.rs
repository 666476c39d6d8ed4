use once_cell::sync::Lazy;
use styx::{Engine, EngineOptions, Error, NumberMode};

/// A line and the rendered result expected in float mode.
pub struct TestCase {
    pub name: &'static str,
    pub line: &'static str,
    pub rendered: &'static str,
}

pub static TEST_CASES: Lazy<Vec<TestCase>> = Lazy::new(|| {
    vec![
        TestCase {
            name: "bare_number",
            line: "42",
            rendered: "42",
        },
        TestCase {
            name: "variadic_sum",
            line: "(+ 1 2 3 4)",
            rendered: "10",
        },
        TestCase {
            name: "nested_product",
            line: "(* (+ 1 2) (- 10 4))",
            rendered: "18",
        },
        TestCase {
            name: "minimum",
            line: "(min 5 3 9 -1 4)",
            rendered: "-1",
        },
        TestCase {
            name: "maximum",
            line: "(max 5 3 9 -1 4)",
            rendered: "9",
        },
        TestCase {
            name: "division_by_zero",
            line: "(/ 5 0)",
            rendered: "Error: Division By Zero",
        },
        TestCase {
            name: "remainder_by_zero",
            line: "(% 5 0)",
            rendered: "Error: Division By Zero",
        },
        TestCase {
            name: "division_by_zero_mid_fold",
            line: "(/ 5 0 1)",
            rendered: "Error: Division By Zero",
        },
        TestCase {
            name: "single_error_from_two_operands",
            line: "(+ (/ 1 0) (/ 1 0))",
            rendered: "Error: Division By Zero",
        },
    ]
});

/// Evaluates `line` and renders the outcome.
///
/// Parse failures render as their diagnostic code (`P001`, ...), depth
/// failures as `ResourceExceeded`.
pub fn run(line: &str, mode: NumberMode) -> Result<String, String> {
    let engine = Engine::new(EngineOptions {
        number_mode: mode,
        ..Default::default()
    });
    engine.run(line).map_err(|err| match err {
        Error::Compilation { diagnostics, .. } => diagnostics
            .first()
            .and_then(|d| d.code.clone())
            .unwrap_or_default(),
        Error::ResourceExceeded(_) => "ResourceExceeded".to_string(),
    })
}

pub fn expected(outcome: Result<&str, &str>) -> Result<String, String> {
    outcome.map(str::to_string).map_err(str::to_string)
}

/// Declares a module of tests for one input line.
///
/// `float` and `integer` give the expected outcome in each number mode:
/// `Ok(rendered)` for a line that parses, `Err(code)` for one that does not.
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:expr,
        $(float: { $float:expr },)?
        $(integer: { $integer:expr },)?
    ) => {
        mod $name {
            $(
                #[test]
                fn float() {
                    pretty_assertions::assert_eq!(
                        $crate::cases::run($input, styx::NumberMode::Float),
                        $crate::cases::expected($float),
                        "input: {:?}",
                        $input
                    );
                }
            )?

            $(
                #[test]
                fn integer() {
                    pretty_assertions::assert_eq!(
                        $crate::cases::run($input, styx::NumberMode::Integer),
                        $crate::cases::expected($integer),
                        "input: {:?}",
                        $input
                    );
                }
            )?
        }
    };
}
