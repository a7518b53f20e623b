use minifun::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::lexer::{Position, Token},
    parse_expression, parse_program, tokenize,
};

fn parses_as(src: &str, expected: &str) {
    match parse_expression(src) {
        Ok(expr) => assert_eq!(expr.to_string(), expected, "while parsing {src:?}"),
        Err(e) => panic!("Expression {src:?} failed to parse: {e}"),
    }
}

fn parse_err(src: &str) -> ParseError {
    match parse_program(src) {
        Ok(program) => panic!("Program {src:?} parsed but was expected to fail: {program}"),
        Err(e) => e,
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    parses_as("3 + 4 * 2", "(3 + (4 * 2))");
    parses_as("3 * 4 + 2", "((3 * 4) + 2)");
    parses_as("(3 + 4) * 2", "((3 + 4) * 2)");
    parses_as("10 - 6 % 4", "(10 - (6 % 4))");
}

#[test]
fn left_associative_levels_fold_left() {
    parses_as("1 - 2 - 3", "((1 - 2) - 3)");
    parses_as("1 - 2 + 3", "((1 - 2) + 3)");
    parses_as("8 / 4 / 2", "((8 / 4) / 2)");
    parses_as("8 / 4 * 2 % 3", "(((8 / 4) * 2) % 3)");
    parses_as("a && b && c", "((a && b) && c)");
    parses_as("a || b || c", "((a || b) || c)");
}

#[test]
fn left_fold_builds_nested_nodes() {
    let expr = parse_expression("a - b - c").unwrap();

    let expected = Expr::binary(BinaryOperator::Sub,
                                Expr::binary(BinaryOperator::Sub, Expr::var("a"), Expr::var("b")),
                                Expr::var("c"));
    assert_eq!(expr, expected);
}

#[test]
fn boolean_connectives_rank_below_comparison() {
    parses_as("a && b || c && d", "((a && b) || (c && d))");
    parses_as("x < 1 || x > 9", "((x < 1) || (x > 9))");
    parses_as("1 + 2 < 3 * 4", "((1 + 2) < (3 * 4))");
    parses_as("x = 1 && y <> 2", "((x = 1) && (y <> 2))");
}

#[test]
fn keyword_connectives_match_symbolic_ones() {
    parses_as("a and b and c", "((a && b) && c)");
    parses_as("a or b or c", "((a || b) || c)");
    parses_as("a and b or c && d", "((a && b) || (c && d))");
    parses_as("false and (1 / 0)", "(false && (1 / 0))");
    parses_as("x < 1 or not b", "((x < 1) || (not b))");

    assert_eq!(parse_expression("p and q").unwrap(),
               parse_expression("p && q").unwrap());
}

#[test]
fn and_before_a_definition_head_ends_the_body() {
    let program = parse_program("letrec f x = x > 0 and x < 5 and g y = f y in g 3").unwrap();

    assert_eq!(program.functions.len(), 2);
    assert_eq!(program.functions[0].body.to_string(), "((x > 0) && (x < 5))");
    assert_eq!(program.functions[1].name, "g");
}

#[test]
fn and_without_parameters_stays_a_connective() {
    let program = parse_program("letrec f x = x and y in f true").unwrap();

    assert_eq!(program.functions.len(), 1);
    assert_eq!(program.functions[0].body.to_string(), "(x && y)");
}

#[test]
fn comparisons_do_not_chain() {
    let err = parse_err("1 < 2 < 3");
    assert_eq!(err,
               ParseError::ChainedComparison { operator: "<".to_string(),
                                               position: Position { line: 1, column: 7 }, });

    assert!(matches!(parse_err("1 < 2 = true"), ParseError::ChainedComparison { .. }));
    parses_as("(1 < 2) = true", "((1 < 2) = true)");
}

#[test]
fn unary_operators_stack() {
    parses_as("- - x", "(-(-x))");
    parses_as("not not b", "(not (not b))");
    parses_as("-x * y", "((-x) * y)");
    parses_as("not a && b", "((not a) && b)");
    parses_as("3 - -2", "(3 - (-2))");
}

#[test]
fn application_takes_atoms() {
    parses_as("f x y", "(f x y)");
    parses_as("f x - 1", "((f x) - 1)");
    parses_as("f (x - 1) 2", "(f (x - 1) 2)");
    parses_as("f -1", "(f - 1)");
    parses_as("-f x", "(-(f x))");
    parses_as("f x * g y", "((f x) * (g y))");
}

#[test]
fn conditionals_extend_to_the_right() {
    parses_as("if a then 1 else 2 + 3", "(if a then 1 else (2 + 3))");
    parses_as("if a then if b then 1 else 2 else 3",
              "(if a then (if b then 1 else 2) else 3)");
    parses_as("1 + (if c then 2 else 3)", "(1 + (if c then 2 else 3))");
}

#[test]
fn conditional_needs_parentheses_inside_operators() {
    let err = parse_expression("1 + if c then 2 else 3").unwrap_err();

    assert_eq!(err,
               ParseError::UnexpectedToken { found:    "if".to_string(),
                                             expected: "an expression".to_string(),
                                             position: Position { line: 1, column: 5 }, });
}

#[test]
fn missing_else_is_rejected() {
    assert!(matches!(parse_err("if true then 1"),
                     ParseError::UnexpectedEndOfInput { .. }));
}

#[test]
fn let_and_fun_expressions() {
    parses_as("let x = 1 in x + 1", "(let x = 1 in (x + 1))");
    parses_as("let x = 1 in let y = 2 in x + y",
              "(let x = 1 in (let y = 2 in (x + y)))");
    parses_as("fun x y -> x + y", "(fun x y -> (x + y))");
    parses_as("let f x = x in f 1", "(let f = (fun x -> x) in (f 1))");
}

#[test]
fn fun_requires_a_parameter() {
    let err = parse_expression("fun -> 1").unwrap_err();

    assert!(matches!(err, ParseError::UnexpectedToken { ref found, .. } if found == "->"));
}

#[test]
fn program_with_function_block() {
    let program = parse_program("letrec f x = x\nand g y z = f y in g 1 2").unwrap();

    assert_eq!(program.functions.len(), 2);
    assert_eq!(program.functions[0].name, "f");
    assert_eq!(program.functions[0].params, vec!["x"]);
    assert_eq!(program.functions[0].line, 1);
    assert_eq!(program.functions[1].name, "g");
    assert_eq!(program.functions[1].params, vec!["y", "z"]);
    assert_eq!(program.functions[1].line, 2);
    assert_eq!(program.main, Expr::call("g", vec![Expr::Num(1), Expr::Num(2)]));
}

#[test]
fn let_opens_a_block_only_for_functions() {
    let program = parse_program("let f x y = x + y in f 3 4").unwrap();
    assert_eq!(program.functions.len(), 1);
    assert_eq!(program.main.to_string(), "(f 3 4)");

    let program = parse_program("let x = 1 in x").unwrap();
    assert!(program.functions.is_empty());
    assert_eq!(program.main.to_string(), "(let x = 1 in x)");
}

#[test]
fn bare_expression_is_a_program() {
    let program = parse_program("1 + 2;;").unwrap();

    assert!(program.functions.is_empty());
    assert_eq!(program.main.to_string(), "(1 + 2)");
}

#[test]
fn program_display_round_trips_structure() {
    let program = parse_program("letrec f x = x + 1 in f 2").unwrap();

    assert_eq!(program.to_string(), "letrec f x = (x + 1)\nin\n(f 2)");
}

#[test]
fn declarations_need_parameters() {
    let err = parse_err("letrec f = 1 in f");

    assert_eq!(err,
               ParseError::MissingParameters { name:     "f".to_string(),
                                               position: Position { line: 1, column: 10 }, });
}

#[test]
fn trailing_tokens_are_rejected() {
    assert!(matches!(parse_err("1 + 2 ;; 3"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_err("(1 + 2))"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_err("1 +"), ParseError::UnexpectedEndOfInput { .. }));
}

#[test]
fn comments_are_skipped_and_positions_survive_them() {
    parses_as("(* hi *) 1 + (* multi\nline *) 2", "(1 + 2)");

    let err = parse_err("(* a\n b *) )");
    assert_eq!(err.position(), Position { line: 2, column: 7 });
}

#[test]
fn lexical_errors_carry_positions() {
    let err = parse_err("let x = 1 in\n  x $ 2");
    assert_eq!(err,
               ParseError::InvalidToken { token:    "$".to_string(),
                                          position: Position { line: 2, column: 5 }, });

    assert!(matches!(tokenize("99999999999999999999"),
                     Err(ParseError::LiteralTooLarge { .. })));
}

#[test]
fn tokenizer_output() {
    let tokens = tokenize("fact' <> not_1\n  -> ;; or and").unwrap()
                                                     .into_iter()
                                                     .map(|(token, _)| token)
                                                     .collect::<Vec<_>>();

    assert_eq!(tokens,
               vec![Token::Identifier("fact'".to_string()),
                    Token::NotEqual,
                    Token::Identifier("not_1".to_string()),
                    Token::Arrow,
                    Token::SemiSemi,
                    Token::Or,
                    Token::And,
                    Token::Eof]);
}
