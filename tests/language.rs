use std::{
    fs::{self},
    path::Path,
};

use cinder::{
    error::{ParseError, RuntimeError},
    evaluate_with_output, parse,
};
use walkdir::WalkDir;

/// The header of a program in `tests/programs`.
#[derive(Default)]
struct Expectation {
    result:   Option<i64>,
    bindings: Vec<(String, i64)>,
    output:   Option<String>,
}

fn read_expectation(path: &Path, source: &str) -> Expectation {
    let mut expectation = Expectation::default();

    for line in source.lines() {
        if let Some(value) = line.strip_prefix("// expect:") {
            expectation.result =
                Some(value.trim()
                          .parse()
                          .unwrap_or_else(|e| panic!("Bad expect line in {path:?}: {e}")));
        } else if let Some(binding) = line.strip_prefix("// bind:") {
            let (name, value) = binding.split_once('=')
                                       .unwrap_or_else(|| panic!("Bad bind line in {path:?}"));
            let value = value.trim()
                             .parse()
                             .unwrap_or_else(|e| panic!("Bad bind value in {path:?}: {e}"));
            expectation.bindings.push((name.trim().to_string(), value));
        } else if let Some(text) = line.strip_prefix("// output:") {
            let text = text.strip_prefix(' ').unwrap_or(text);
            let output = expectation.output.get_or_insert_with(String::new);
            output.push_str(text);
            output.push('\n');
        }
    }

    expectation
}

fn run_with_output(src: &str, bindings: &[(&str, i64)]) -> (Result<i64, RuntimeError>, String) {
    let program = parse(src).unwrap_or_else(|e| panic!("Program failed to parse: {e}"));
    let mut out = Vec::new();
    let result = evaluate_with_output(&program, bindings.iter().copied(), &mut out);
    (result, String::from_utf8(out).unwrap())
}

fn assert_success(src: &str, bindings: &[(&str, i64)], expected: i64) {
    match run_with_output(src, bindings).0 {
        Ok(result) => assert_eq!(result, expected, "Program returned the wrong value"),
        Err(e) => panic!("Program failed: {e}"),
    }
}

fn assert_failure(src: &str, bindings: &[(&str, i64)]) -> RuntimeError {
    match run_with_output(src, bindings).0 {
        Ok(result) => panic!("Program returned {result} but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_parse_failure(src: &str) -> ParseError {
    match parse(src) {
        Ok(program) => panic!("Source parsed but was expected to fail:\n{src}\n{program:?}"),
        Err(e) => e,
    }
}

#[test]
fn program_corpus_runs() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "c"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expectation = read_expectation(path, &source);
        let expected = expectation.result
                                  .unwrap_or_else(|| panic!("{path:?} has no expect line"));

        let program = parse(&source).unwrap_or_else(|e| panic!("{path:?} failed to parse: {e}"));
        let mut out = Vec::new();
        let result = evaluate_with_output(&program, expectation.bindings, &mut out)
            .unwrap_or_else(|e| panic!("{path:?} failed: {e}"));

        count += 1;
        assert_eq!(result, expected, "{path:?} returned the wrong value");
        if let Some(output) = expectation.output {
            assert_eq!(String::from_utf8(out).unwrap(), output, "{path:?} printed the wrong output");
        }
    }

    assert!(count > 0, "No programs found in tests/programs");
}

#[test]
fn factorial_for_several_inputs() {
    let source = fs::read_to_string("tests/programs/factorial.c").expect("missing file");
    assert_success(&source, &[("num", 5)], 120);
    assert_success(&source, &[("num", 1)], 1);
    assert_success(&source, &[("num", 0)], 1);
}

#[test]
fn prime_check_for_several_inputs() {
    let source = fs::read_to_string("tests/programs/prime.c").expect("missing file");
    assert_success(&source, &[("number", 4)], 0);
    assert_success(&source, &[("number", 7)], 1);
    assert_success(&source, &[("number", 2)], 1);
    assert_success(&source, &[("number", 1)], 0);
}

#[test]
fn fibonacci_for_small_input() {
    let source = fs::read_to_string("tests/programs/fibonacci.c").expect("missing file");
    let (result, output) = run_with_output(&source, &[("n", 5)]);
    assert_eq!(result, Ok(3));
    assert_eq!(output, "0\n1\n1\n2\n3\n");
}

#[test]
fn main_without_return_yields_minus_one() {
    assert_success("int main() { int x = 3; }", &[], -1);
    assert_success("int main() { }", &[], -1);
}

#[test]
fn bare_return_yields_zero() {
    assert_success("int main() { return; }", &[], 0);
}

#[test]
fn boolean_results_become_exit_codes() {
    assert_success("int main() { return 1 < 2; }", &[], 1);
    assert_success("int main() { return !true; }", &[], 0);
}

#[test]
fn non_integer_results_are_errors() {
    assert!(matches!(assert_failure("int main() { return 1.5; }", &[]),
                     RuntimeError::TypeError { .. }));
    assert!(matches!(assert_failure(r#"int main() { return "done"; }"#, &[]),
                     RuntimeError::TypeError { .. }));
}

#[test]
fn bindings_are_visible_in_main_only() {
    assert_success("int main() { return a * b; }", &[("a", 6), ("b", 7)], 42);
    assert!(matches!(assert_failure("int get() { return a; } int main() { return get(); }",
                                    &[("a", 1)]),
                     RuntimeError::UnknownVariable { .. }));
}

#[test]
fn later_bindings_replace_earlier_ones() {
    assert_success("int main() { return a; }", &[("a", 1), ("a", 2)], 2);
}

#[test]
fn logical_operators_evaluate_both_sides() {
    let source = r#"
        int side(int v) { print("side"); return v; }
        int main() {
            bool a = false && side(1);
            bool b = true || side(0);
            return a + b;
        }
    "#;
    let (result, output) = run_with_output(source, &[]);
    assert_eq!(result, Ok(1));
    assert_eq!(output, "side\nside\n");
}

#[test]
fn integer_and_real_division() {
    assert_success("int main() { return 7 / 2; }", &[], 3);
    assert_success("int main() { return -7 / 2; }", &[], -4);
    assert_success("int main() { return -7 % 2; }", &[], 1);
    assert_success("int main() { return 7.0 / 2 == 3.5; }", &[], 1);
    assert_success("int main() { return 7 / 2.0 == 3.0; }", &[], 1);
}

#[test]
fn mixed_comparisons() {
    assert_success("int main() { return 2 == 2.0; }", &[], 1);
    assert_success(r#"int main() { return "a" == 1; }"#, &[], 0);
    assert_success(r#"int main() { return "a" != 1; }"#, &[], 1);
    assert!(matches!(assert_failure(r#"int main() { return "a" < 1; }"#, &[]),
                     RuntimeError::TypeError { .. }));
}

#[test]
fn loops_with_early_return() {
    let source = r"
        int firstSquareAbove(int limit) {
            for (int i = 0; true; i++) {
                if (i * i > limit) {
                    return i;
                }
            }
        }
        int main() { return firstSquareAbove(50); }
    ";
    assert_success(source, &[], 8);
}

#[test]
fn for_loop_variable_is_scoped_to_the_loop() {
    let source = "int main() { for (int i = 0; i < 3; i++) { } return i; }";
    assert_eq!(assert_failure(source, &[]),
               RuntimeError::UnknownVariable { name: "i".into() });
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(assert_failure("int main() { return 1 / 0; }", &[]),
               RuntimeError::DivisionByZero);
    assert_eq!(assert_failure("int main() { return 1 % 0; }", &[]),
               RuntimeError::DivisionByZero);
}

#[test]
fn unknown_variable_is_error() {
    assert_eq!(assert_failure("int main() { foo = 1; return 0; }", &[]),
               RuntimeError::UnknownVariable { name: "foo".into() });
}

#[test]
fn missing_main_is_error() {
    assert_eq!(assert_failure("int helper() { return 1; }", &[]),
               RuntimeError::MissingMain);
}

#[test]
fn wrong_function_arity_is_error() {
    let source = "int add(int a, int b) { return a + b; } int main() { return add(3); }";
    assert_eq!(assert_failure(source, &[]),
               RuntimeError::ArgumentCountMismatch { name:     "add".into(),
                                                     expected: 2,
                                                     found:    1, });
}

#[test]
fn extra_arguments_are_an_error() {
    let source = "int add(int a, int b) { return a + b; } int main() { return add(1, 2, 3); }";
    assert_eq!(assert_failure(source, &[]),
               RuntimeError::ArgumentCountMismatch { name:     "add".into(),
                                                     expected: 2,
                                                     found:    3, });
}

#[test]
fn increment_of_a_non_variable_is_error() {
    assert!(matches!(assert_failure("int main() { return (1 + 2)++; }", &[]),
                     RuntimeError::InvalidIncrementTarget { .. }));
}

#[test]
fn integer_overflow_is_error() {
    assert!(matches!(assert_failure("int main() { return 9223372036854775807 + 1; }", &[]),
                     RuntimeError::Overflow { .. }));
}

#[test]
fn invalid_programs_do_not_parse() {
    for source in ["int main() { return 5 }",
                   "main() { return 0; }",
                   "int main() { if x > 1 { return 1; } }",
                   "int main() { int = 5; }",
                   "int main() { return 5 + * 3; }",
                   "int main() { return -x++; }",
                   "int main() { return 1 < 2 < 3; }",
                   "int main() { return (1 + 2; }",
                   "int main() { return 1; ",
                   "int main() { return 1; } }",
                   "int main() { return @; }"]
    {
        assert_parse_failure(source);
    }
}

#[test]
fn parse_errors_report_a_position() {
    let err = assert_parse_failure("int main() {\n    return 5\n}");
    assert!(matches!(err, ParseError::UnexpectedToken { .. }));
    assert_eq!(err.position().line, 3);
    assert_eq!(err.position().column, 1);
}

#[test]
fn errors_after_a_multi_line_string_point_at_its_start() {
    let err = assert_parse_failure("int main() { return 1 \"a\nb\"; }");
    assert!(matches!(err, ParseError::UnexpectedToken { .. }));
    assert_eq!(err.position().line, 1);
    assert_eq!(err.position().column, 23);
}
