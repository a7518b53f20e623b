use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: integer negation.
    /// - `Not`: boolean negation.
    ///
    /// # Errors
    /// - `TypeError` if the operand has the wrong kind.
    /// - `Overflow` when negating `i64::MIN`.
    ///
    /// # Example
    /// ```
    /// use minifun::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, Value::Integer(5)).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Not, Value::Bool(false)).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: Value) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => {
                let n = value.as_integer("negation")?;
                n.checked_neg()
                 .map(Value::from)
                 .ok_or_else(|| RuntimeError::Overflow { operator: op.to_string() })
            },
            UnaryOperator::Not => Ok(Value::from(!value.as_bool("not")?)),
        }
    }
}
