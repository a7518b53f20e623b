use minifun::{
    ast::{BinaryOperator, Expr, FunctionDef, UnaryOperator},
    error::{Error, RuntimeError},
    eval,
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, evaluate},
        value::Value,
    },
    run,
};

fn runtime_err(result: Result<Value, Error>) -> RuntimeError {
    match result {
        Ok(v) => panic!("Evaluation succeeded with {v} but was expected to fail"),
        Err(Error::Runtime(e)) => e,
        Err(Error::Parse(e)) => panic!("Expected a runtime error, got: {e}"),
    }
}

fn int(n: i64) -> Result<Value, Error> {
    Ok(Value::Integer(n))
}

fn inc() -> FunctionDef {
    FunctionDef { name:   "inc".to_string(),
                  params: vec!["n".to_string()],
                  body:   Expr::binary(BinaryOperator::Add, Expr::var("n"), Expr::Num(1)),
                  line:   1, }
}

#[test]
fn arithmetic_respects_precedence() {
    assert_eq!(eval("3 + 4 * 2"), int(11));
    assert_eq!(eval("(3 + 4) * 2"), int(14));
    assert_eq!(eval("10 - 3 - 2"), int(5));
    assert_eq!(eval("100 / 10 / 5"), int(2));
}

#[test]
fn division_truncates_toward_zero() {
    assert_eq!(eval("7 / 2"), int(3));
    assert_eq!(eval("-7 / 2"), int(-3));
    assert_eq!(eval("-7 % 2"), int(-1));
    assert_eq!(eval("7 % -2"), int(1));
}

#[test]
fn division_and_modulo_by_zero() {
    assert_eq!(runtime_err(eval("1 / 0")), RuntimeError::DivisionByZero);
    assert_eq!(runtime_err(eval("7 % (3 - 3)")), RuntimeError::DivisionByZero);
}

#[test]
fn operand_kind_is_checked_before_zero() {
    assert!(matches!(runtime_err(eval("true / 0")), RuntimeError::TypeError { .. }));
}

#[test]
fn boolean_operators_do_not_short_circuit() {
    assert_eq!(runtime_err(eval("false && (1 / 0)")), RuntimeError::DivisionByZero);
    assert_eq!(runtime_err(eval("true || (1 / 0 = 0)")), RuntimeError::DivisionByZero);
    assert_eq!(eval("true && not false"), Ok(Value::Bool(true)));
    assert_eq!(eval("false || false"), Ok(Value::Bool(false)));
}

#[test]
fn keyword_connectives() {
    assert_eq!(runtime_err(eval("false and (1 / 0)")), RuntimeError::DivisionByZero);
    assert_eq!(runtime_err(eval("true or (1 / 0 = 0)")), RuntimeError::DivisionByZero);
    assert_eq!(eval("true or false"), Ok(Value::Bool(true)));
    assert_eq!(eval("true and false"), Ok(Value::Bool(false)));
    assert_eq!(eval("not false and 1 < 2"), Ok(Value::Bool(true)));
    assert!(matches!(runtime_err(eval("1 or true")), RuntimeError::TypeError { .. }));
}

#[test]
fn conditional_evaluates_only_the_taken_branch() {
    assert_eq!(eval("if true then 1 else (1 / 0)"), int(1));
    assert_eq!(eval("if 1 > 2 then 1 / 0 else 2"), int(2));
    assert!(matches!(runtime_err(eval("if 1 then 2 else 3")), RuntimeError::TypeError { .. }));
}

#[test]
fn comparisons() {
    assert_eq!(eval("1 <= 1"), Ok(Value::Bool(true)));
    assert_eq!(eval("2 >= 3"), Ok(Value::Bool(false)));
    assert_eq!(eval("1 <> 2"), Ok(Value::Bool(true)));
    assert_eq!(eval("true = true"), Ok(Value::Bool(true)));
    assert_eq!(eval("true <> false"), Ok(Value::Bool(true)));
}

#[test]
fn mixed_kinds_are_type_errors() {
    assert!(matches!(runtime_err(eval("1 = true")), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_err(eval("true < false")), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_err(eval("1 + true")), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_err(eval("1 && true")), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_err(eval("not 1")), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_err(eval("-true")), RuntimeError::TypeError { .. }));
}

#[test]
fn overflow_is_reported() {
    assert_eq!(runtime_err(eval("9223372036854775807 + 1")),
               RuntimeError::Overflow { operator: "+".to_string() });
    assert_eq!(runtime_err(eval("-(-9223372036854775807 - 1)")),
               RuntimeError::Overflow { operator: "-".to_string() });
    assert_eq!(runtime_err(eval("(-9223372036854775807 - 1) / (-1)")),
               RuntimeError::Overflow { operator: "/".to_string() });
    assert_eq!(eval("-9223372036854775807 - 1"), int(i64::MIN));
}

#[test]
fn let_shadows_without_leaking() {
    assert_eq!(eval("let x = 1 in (let x = 2 in x)"), int(2));
    assert_eq!(eval("let x = 1 in (let x = 2 in x) + x"), int(3));
    assert_eq!(eval("let x = 1 in let y = x + 1 in x + y"), int(3));
}

#[test]
fn let_binding_is_not_recursive() {
    assert_eq!(runtime_err(eval("let x = x in x")),
               RuntimeError::UnboundVariable { name: "x".to_string() });
}

#[test]
fn unbound_variables_and_undefined_functions() {
    assert_eq!(runtime_err(eval("y")),
               RuntimeError::UnboundVariable { name: "y".to_string() });
    assert_eq!(runtime_err(eval("g 1")),
               RuntimeError::UndefinedFunction { name: "g".to_string() });
}

#[test]
fn declared_functions_are_called() {
    assert_eq!(run("let f x y = x + y in f 3 4"), int(7));
    assert_eq!(run("letrec twice x = 2 * x and quad x = twice (twice x) in quad 3"),
               int(12));
}

#[test]
fn functions_are_not_closures() {
    let err = runtime_err(run("letrec f y = x + y in let x = 5 in f 1"));

    assert_eq!(err, RuntimeError::UnboundVariable { name: "x".to_string() });
}

#[test]
fn function_names_are_not_variables() {
    assert_eq!(runtime_err(run("letrec f x = x in f")),
               RuntimeError::UnboundVariable { name: "f".to_string() });
}

#[test]
fn arity_mismatch_is_a_type_error() {
    assert!(matches!(runtime_err(run("letrec f x y = x in f 1")),
                     RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_err(run("letrec f x = x in f 1 2")),
                     RuntimeError::TypeError { .. }));
}

#[test]
fn arguments_are_evaluated_before_the_arity_check() {
    assert_eq!(runtime_err(run("letrec f x = x in f 1 (1 / 0)")),
               RuntimeError::DivisionByZero);
}

#[test]
fn only_variables_can_be_called() {
    assert!(matches!(runtime_err(eval("(1) 2")), RuntimeError::TypeError { .. }));
}

#[test]
fn anonymous_functions_are_not_values() {
    assert!(matches!(runtime_err(eval("fun x -> x")), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_err(eval("let f x = x in f 1")),
                     RuntimeError::TypeError { .. }));
}

#[test]
fn first_declaration_wins() {
    assert_eq!(run("letrec f x = 1 and f x = 2 in f 0"), int(1));
}

#[test]
fn recursion() {
    let fact = "letrec fact n = if n = 0 then 1 else n * fact (n - 1) in fact 10";
    assert_eq!(run(fact), int(3_628_800));

    let fib = "letrec fib n = if n < 2 then n else fib (n - 1) + fib (n - 2) in fib 15";
    assert_eq!(run(fib), int(610));
}

#[test]
fn mutual_recursion_sees_later_declarations() {
    let src = "letrec even n = if n = 0 then true else odd (n - 1)
               and odd n = if n = 0 then false else even (n - 1)
               in even 10";

    assert_eq!(run(src), Ok(Value::Bool(true)));
}

#[test]
fn hand_built_trees() {
    let context = Context::new(&[]);
    let env = Environment::new().extend("b", Value::Bool(false));

    let expr = Expr::if_expr(Expr::unary(UnaryOperator::Not, Expr::var("b")),
                             Expr::Num(1),
                             Expr::Num(2));
    assert_eq!(context.eval(&expr, &env), Ok(Value::Integer(1)));

    let expr = Expr::let_in("b", Expr::Num(3), Expr::var("b"));
    assert_eq!(context.eval(&expr, &env), Ok(Value::Integer(3)));
}

#[test]
fn arguments_use_the_callers_environment() {
    let functions = [inc()];
    let env = Environment::new().extend("n", Value::Integer(5));

    let call = Expr::call("inc", vec![Expr::var("n")]);
    assert_eq!(evaluate(&functions, &env, &call), Ok(Value::Integer(6)));

    let call = Expr::call("inc", vec![Expr::Num(41)]);
    assert_eq!(evaluate(&functions, &Environment::new(), &call), Ok(Value::Integer(42)));
}

#[test]
fn environments_are_persistent() {
    let outer = Environment::new().extend("x", Value::Integer(1));
    let inner = outer.extend("x", Value::Integer(2))
                     .extend("y", Value::Bool(true));

    assert_eq!(outer.lookup("x"), Some(&Value::Integer(1)));
    assert_eq!(outer.lookup("y"), None);
    assert_eq!(inner.lookup("x"), Some(&Value::Integer(2)));
    assert_eq!(inner.lookup("y"), Some(&Value::Bool(true)));
    assert!(Environment::new().is_empty());
    assert!(!outer.is_empty());
}
