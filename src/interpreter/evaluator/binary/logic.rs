use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates a logical operation between two boolean values.
    ///
    /// Both values are already computed; there is no short-circuiting.
    ///
    /// # Example
    /// ```
    /// use minifun::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let result = Context::eval_logic(BinaryOperator::Or, Value::Bool(false), Value::Bool(true));
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// assert!(Context::eval_logic(BinaryOperator::And, Value::Bool(true), Value::Integer(1)).is_err());
    /// ```
    pub fn eval_logic(op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
        use BinaryOperator::{And, Or};

        let context = format!("'{op}'");
        let a = left.as_bool(&context)?;
        let b = right.as_bool(&context)?;

        match op {
            And => Ok(Value::from(a && b)),
            Or => Ok(Value::from(a || b)),
            _ => unreachable!("eval_logic used with non logical operator"),
        }
    }
}
