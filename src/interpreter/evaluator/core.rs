use log::{debug, warn};

use crate::{
    ast::{Expr, FunctionDef, Program},
    error::RuntimeError,
    interpreter::{environment::Environment, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context only borrows the function table of the program being run.
/// It holds no variables and no mutable state: variables live in the
/// [`Environment`] passed to each `eval` call, so every evaluation is a pure
/// function of the table, the environment and the expression.
///
/// ## Usage
///
/// `Context` is created once per program and shared by every recursive
/// evaluation, including the evaluation of function bodies. Because the
/// table is complete before the first call, a function can call itself and
/// any function declared after it.
#[derive(Debug, Clone, Copy)]
pub struct Context<'p> {
    /// Top-level function declarations, in source order.
    pub functions: &'p [FunctionDef],
}

impl<'p> Context<'p> {
    /// Creates an evaluation context over the given function table.
    #[must_use]
    pub const fn new(functions: &'p [FunctionDef]) -> Self {
        Self { functions }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Evaluation is
    /// strict and left to right: operands and arguments are evaluated before
    /// the operator or call that consumes them. The only exception is
    /// `if`, which evaluates the branch selected by its condition and never
    /// the other one.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: Variable bindings visible to `expr`.
    ///
    /// # Returns
    /// The value of `expr`.
    ///
    /// # Errors
    /// - `UnboundVariable` for a variable missing from `env`.
    /// - `UndefinedFunction` for a call to an undeclared name.
    /// - `TypeError` for operand kind mismatches, non-boolean conditions,
    ///   arity mismatches, non-variable callees and `fun` expressions.
    /// - `DivisionByZero` and `Overflow` from integer arithmetic.
    ///
    /// # Example
    /// ```
    /// use minifun::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{environment::Environment, evaluator::core::Context, value::Value},
    /// };
    ///
    /// let context = Context::new(&[]);
    /// let env = Environment::new().extend("x", Value::Integer(4));
    /// let expr = Expr::binary(BinaryOperator::Mul, Expr::var("x"), Expr::Num(2));
    ///
    /// assert_eq!(context.eval(&expr, &env).unwrap(), Value::Integer(8));
    /// ```
    pub fn eval(&self, expr: &Expr, env: &Environment) -> EvalResult<Value> {
        match expr {
            Expr::Num(n) => Ok(Value::Integer(*n)),
            Expr::Bool(b) => Ok(Value::Bool(*b)),
            Expr::Var(name) => Self::eval_variable(name, env),
            Expr::UnaryOp { op, expr } => {
                let value = self.eval(expr, env)?;
                Self::eval_unary(*op, value)
            },
            Expr::BinaryOp { left, op, right } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                Self::eval_binary(*op, left, right)
            },
            Expr::IfExpr { condition,
                           then_branch,
                           else_branch, } => {
                self.eval_if_expr(condition, then_branch, else_branch, env)
            },
            Expr::Let { name, bound, body } => self.eval_let(name, bound, body, env),
            Expr::Fun { .. } => {
                Err(RuntimeError::type_error("anonymous functions cannot be evaluated; declare \
                                              the function at top level instead"))
            },
            Expr::Call { callee, arguments } => self.eval_call(callee, arguments, env),
        }
    }

    fn eval_variable(name: &str, env: &Environment) -> EvalResult<Value> {
        env.lookup(name)
           .copied()
           .ok_or_else(|| RuntimeError::UnboundVariable { name: name.to_string() })
    }

    /// Evaluates `condition` and then exactly one of the branches.
    ///
    /// # Errors
    /// Returns `TypeError` if the condition is not a boolean.
    fn eval_if_expr(&self,
                    condition: &Expr,
                    then_branch: &Expr,
                    else_branch: &Expr,
                    env: &Environment)
                    -> EvalResult<Value> {
        if self.eval(condition, env)?.as_bool("if condition")? {
            self.eval(then_branch, env)
        } else {
            self.eval(else_branch, env)
        }
    }

    /// Evaluates `bound`, then `body` with `name` bound to the result.
    ///
    /// The extension is local to `body`; `env` itself is not changed.
    fn eval_let(&self,
                name: &str,
                bound: &Expr,
                body: &Expr,
                env: &Environment)
                -> EvalResult<Value> {
        let value = self.eval(bound, env)?;
        self.eval(body, &env.extend(name, value))
    }
}

/// Evaluates `expr` under a function table and an environment.
///
/// Shorthand for `Context::new(functions).eval(expr, env)`.
pub fn evaluate(functions: &[FunctionDef], env: &Environment, expr: &Expr) -> EvalResult<Value> {
    Context::new(functions).eval(expr, env)
}

/// Runs a parsed program: evaluates its main expression in an empty
/// environment with the program's declarations as the function table.
///
/// # Example
/// ```
/// use minifun::{interpreter::evaluator::core::run_program, parse_program};
///
/// let program = parse_program("letrec double x = x + x in double 21").unwrap();
///
/// assert_eq!(run_program(&program).unwrap().to_string(), "42");
/// ```
pub fn run_program(program: &Program) -> EvalResult<Value> {
    debug!("evaluating program with {} function declaration(s)",
           program.functions.len());

    for (i, def) in program.functions.iter().enumerate() {
        if let Some(first) = program.functions[..i].iter().find(|f| f.name == def.name) {
            warn!("function '{}' declared on line {} is shadowed by the declaration on line {}",
                  def.name,
                  def.line,
                  first.line);
        }
    }

    Context::new(&program.functions).eval(&program.main, &Environment::new())
}
