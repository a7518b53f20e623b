use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

/// Maps an equality operator and a boolean equality result to the final
/// boolean value, inverting it for `NotEqual`.
#[must_use]
pub fn equality_op_result(op: BinaryOperator, is_equal: bool) -> bool {
    match op {
        BinaryOperator::Equal => is_equal,
        BinaryOperator::NotEqual => !is_equal,
        _ => unreachable!("equality_op_result used with non equality operator"),
    }
}

impl Context<'_> {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `=` and `<>` accept two integers or two booleans and compare by value;
    /// the operands must be of the same kind. Ordering operators accept
    /// integers only.
    ///
    /// # Errors
    /// Returns `TypeError` for operands of different kinds, or for booleans
    /// given to an ordering operator.
    ///
    /// # Example
    /// ```
    /// use minifun::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let eq = Context::eval_comparison(BinaryOperator::Equal, Value::Bool(true), Value::Bool(true));
    /// assert_eq!(eq.unwrap(), Value::Bool(true));
    ///
    /// let mixed = Context::eval_comparison(BinaryOperator::Equal, Value::Integer(1), Value::Bool(true));
    /// assert!(mixed.is_err());
    /// ```
    pub fn eval_comparison(op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        Ok(Value::Bool(match op {
                           Equal | NotEqual => match (left, right) {
                               (Value::Integer(a), Value::Integer(b)) => {
                                   equality_op_result(op, a == b)
                               },
                               (Value::Bool(a), Value::Bool(b)) => equality_op_result(op, a == b),
                               _ => {
                                   return Err(RuntimeError::type_error(format!("cannot compare \
                                                                                {} with {} \
                                                                                using '{op}'",
                                                                               left.type_name(),
                                                                               right.type_name())));
                               },
                           },

                           Less | LessEqual | Greater | GreaterEqual => {
                               let context = format!("'{op}'");
                               let a = left.as_integer(&context)?;
                               let b = right.as_integer(&context)?;

                               match op {
                                   Less => a < b,
                                   LessEqual => a <= b,
                                   Greater => a > b,
                                   GreaterEqual => a >= b,
                                   _ => unreachable!(),
                               }
                           },

                           _ => unreachable!("eval_comparison used with non comparison operator"),
                       }))
    }
}
