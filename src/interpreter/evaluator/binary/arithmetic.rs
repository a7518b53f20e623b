use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates an integer arithmetic operation.
    ///
    /// Both operands must be integers. Division and remainder check for a
    /// zero divisor before dividing. All operations are checked, so a result
    /// that does not fit in an `i64` is an error instead of a wrap-around.
    /// The remainder takes the sign of the dividend (`-7 % 2 = -1`).
    ///
    /// # Errors
    /// - `TypeError` if either operand is a boolean.
    /// - `DivisionByZero` for `/` or `%` by `0`.
    /// - `Overflow` if the result is out of range.
    ///
    /// # Example
    /// ```
    /// use minifun::{
    ///     ast::BinaryOperator,
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let q = Context::eval_arithmetic(BinaryOperator::Div, Value::Integer(7), Value::Integer(2));
    /// assert_eq!(q.unwrap(), Value::Integer(3));
    ///
    /// let err = Context::eval_arithmetic(BinaryOperator::Mod, Value::Integer(7), Value::Integer(0));
    /// assert_eq!(err.unwrap_err(), RuntimeError::DivisionByZero);
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        let context = format!("'{op}'");
        let a = left.as_integer(&context)?;
        let b = right.as_integer(&context)?;

        if matches!(op, Div | Mod) && b == 0 {
            return Err(RuntimeError::DivisionByZero);
        }

        let result = match op {
            Add => a.checked_add(b),
            Sub => a.checked_sub(b),
            Mul => a.checked_mul(b),
            Div => a.checked_div(b),
            Mod => a.checked_rem(b),
            _ => unreachable!("eval_arithmetic used with non arithmetic operator"),
        };

        result.map(Value::from)
              .ok_or_else(|| RuntimeError::overflow(op))
    }
}
