use log::trace;

use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates a function call.
    ///
    /// Only a variable can stand in function position; its name is looked up
    /// in the function table, never in the environment. The arguments are
    /// evaluated left to right in the caller's environment, then the body
    /// runs in a fresh environment that holds the parameters and nothing
    /// else.
    ///
    /// # Parameters
    /// - `callee`: The expression in function position.
    /// - `arguments`: Argument expressions, in order.
    /// - `env`: The caller's environment.
    ///
    /// # Errors
    /// - `TypeError` if `callee` is not a variable.
    /// - `UndefinedFunction` if no declaration has that name.
    /// - Any error raised while evaluating an argument.
    /// - `TypeError` if the argument count differs from the parameter count.
    /// - Any error raised by the body.
    pub(crate) fn eval_call(&self,
                            callee: &Expr,
                            arguments: &[Expr],
                            env: &Environment)
                            -> EvalResult<Value> {
        let Expr::Var(name) = callee else {
            return Err(RuntimeError::type_error(format!("only named functions can be \
                                                         called, found '{callee}'")));
        };

        let func = self.lookup_function(name)
                       .ok_or_else(|| RuntimeError::UndefinedFunction { name: name.clone() })?;

        let arg_vals = arguments.iter()
                                .map(|arg| self.eval(arg, env))
                                .collect::<EvalResult<Vec<_>>>()?;

        self.call_user_defined_function(func, arg_vals)
    }

    /// Returns the first declaration named `name`.
    ///
    /// Later declarations with the same name are unreachable.
    #[must_use]
    pub fn lookup_function(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.iter().find(|f| f.name == name)
    }

    /// Binds the evaluated arguments to the parameters of `func` and
    /// evaluates its body.
    ///
    /// # Errors
    /// - `TypeError` on an arity mismatch.
    /// - Any error raised by the body.
    fn call_user_defined_function(&self,
                                  func: &FunctionDef,
                                  arg_vals: Vec<Value>)
                                  -> EvalResult<Value> {
        if arg_vals.len() != func.params.len() {
            return Err(RuntimeError::type_error(format!("arity mismatch calling '{}': \
                                                         expected {} argument(s), got {}",
                                                        func.name,
                                                        func.params.len(),
                                                        arg_vals.len())));
        }

        trace!("calling '{}' with ({})",
               func.name,
               arg_vals.iter()
                       .map(ToString::to_string)
                       .collect::<Vec<_>>()
                       .join(", "));

        let bindings = Environment::from_bindings(func.params.iter().cloned().zip(arg_vals));

        self.eval(&func.body, &bindings)
    }
}
