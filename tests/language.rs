use std::fs;

use minifun::{
    error::{Error, ParseError, RuntimeError},
    interpreter::value::Value,
    run,
};
use walkdir::WalkDir;

#[test]
fn program_files_produce_their_expected_value() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "mf"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = extract_expectation(&content).unwrap_or_else(|| {
                           panic!("{path:?} does not start with an '(* expect: ... *)' header")
                       });

        count += 1;
        match (run(&content), expected.strip_prefix("error ")) {
            (Err(e), Some(kind)) if error_kind(&e) == kind.trim() => {},
            (Ok(value), None) if value.to_string() == expected => {},
            (result, _) => panic!("Program {path:?} expected {expected}, got {result:?}"),
        }
    }

    assert!(count > 0, "No programs found in tests/programs");
}

fn extract_expectation(content: &str) -> Option<String> {
    content.lines()
           .next()?
           .trim()
           .strip_prefix("(* expect:")?
           .strip_suffix("*)")
           .map(|s| s.trim().to_string())
}

fn error_kind(error: &Error) -> &'static str {
    match error {
        Error::Parse(e) => match e {
            ParseError::InvalidToken { .. } => "InvalidToken",
            ParseError::LiteralTooLarge { .. } => "LiteralTooLarge",
            ParseError::UnexpectedToken { .. } => "UnexpectedToken",
            ParseError::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ParseError::ChainedComparison { .. } => "ChainedComparison",
            ParseError::MissingParameters { .. } => "MissingParameters",
        },
        Error::Runtime(e) => match e {
            RuntimeError::UnboundVariable { .. } => "UnboundVariable",
            RuntimeError::UndefinedFunction { .. } => "UndefinedFunction",
            RuntimeError::TypeError { .. } => "TypeError",
            RuntimeError::DivisionByZero => "DivisionByZero",
            RuntimeError::Overflow { .. } => "Overflow",
        },
    }
}

fn assert_success(src: &str, expected: Value) {
    match run(src) {
        Ok(value) => assert_eq!(value, expected, "Program: {src}"),
        Err(e) => panic!("Program failed: {e}\n{src}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = run(src) {
        panic!("Program succeeded with {value} but was expected to fail:\n{src}")
    }
}

#[test]
fn literals_and_arithmetic() {
    assert_success("42", Value::Integer(42));
    assert_success("true", Value::Bool(true));
    assert_success("1 + 2 * 3 - 4 / 2", Value::Integer(5));
    assert_success("-(2 + 3)", Value::Integer(-5));
    assert_success("17 % 5;;", Value::Integer(2));
}

#[test]
fn comments_anywhere() {
    assert_success("(* leading *) 1 (* between *) + (* spanning\n lines *) 1",
                   Value::Integer(2));
}

#[test]
fn conditionals_and_bindings() {
    assert_success("let x = 3 in if x > 2 then x * 10 else 0", Value::Integer(30));
    assert_success("let a = 1 in let b = a + 1 in let a = 10 in a + b",
                   Value::Integer(12));
    assert_success("if not (1 = 2) && 3 <> 4 then true else false", Value::Bool(true));
    assert_success("if not (1 = 2) and 3 <> 4 or false then 1 else 0", Value::Integer(1));
}

#[test]
fn function_blocks() {
    assert_success("let add x y = x + y and sub x y = x - y in sub (add 10 5) 3",
                   Value::Integer(12));
    assert_success("letrec pow b e = if e = 0 then 1 else b * pow b (e - 1) in pow 2 10",
                   Value::Integer(1024));
    assert_success("letrec gcd a b = if b = 0 then a else gcd b (a % b) in gcd 1071 462",
                   Value::Integer(21));
}

#[test]
fn connective_and_inside_declaration_blocks() {
    assert_success("letrec both a b = a and b and either a b = a or b in either false (both true true)",
                   Value::Bool(true));
    assert_success("let small n = n > 0 and n < 10\nand big n = not (small n) in big 42",
                   Value::Bool(true));
}

#[test]
fn syntax_errors_fail() {
    assert_failure("1 +");
    assert_failure("1 < 2 < 3");
    assert_failure("letrec f = 1 in f");
    assert_failure("let x = 1 in");
    assert_failure("if true then 1");
    assert_failure("1 # 2");
}

#[test]
fn runtime_errors_fail() {
    assert_failure("1 / 0");
    assert_failure("letrec f x = x in f 1 2");
    assert_failure("letrec f y = x in let x = 1 in f x");
    assert_failure("missing 1");
    assert_failure("1 = false");
    assert_failure("9223372036854775807 * 2");
}
