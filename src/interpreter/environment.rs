use std::rc::Rc;

use crate::interpreter::value::Value;

/// One binding plus the rest of the environment it was added to.
#[derive(Debug)]
struct Frame {
    name:   String,
    value:  Value,
    parent: Option<Rc<Frame>>,
}

/// A persistent mapping from variable names to values.
///
/// Environments are never modified in place. [`Environment::extend`] returns
/// a new environment that shares every existing binding with the receiver
/// and puts the new one in front, so a lookup sees the most recent binding
/// of a name and the receiver keeps seeing exactly what it saw before. Each
/// `let` and each function call gets its own extension; dropping it leaves
/// the outer scope untouched.
///
/// ## Example
/// ```
/// use minifun::interpreter::{environment::Environment, value::Value};
///
/// let outer = Environment::new().extend("x", Value::Integer(1));
/// let inner = outer.extend("x", Value::Integer(2));
///
/// assert_eq!(inner.lookup("x"), Some(&Value::Integer(2)));
/// assert_eq!(outer.lookup("x"), Some(&Value::Integer(1)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Environment {
    head: Option<Rc<Frame>>,
}

impl Environment {
    /// Creates an environment with no bindings.
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Returns a new environment with `name` bound to `value`, shadowing any
    /// earlier binding of `name`.
    #[must_use]
    pub fn extend(&self, name: impl Into<String>, value: Value) -> Self {
        Self { head: Some(Rc::new(Frame { name: name.into(),
                                          value,
                                          parent: self.head.clone() })) }
    }

    /// Builds an environment holding only the given bindings.
    ///
    /// Later pairs shadow earlier pairs with the same name.
    pub fn from_bindings<N, B>(bindings: B) -> Self
        where N: Into<String>,
              B: IntoIterator<Item = (N, Value)>
    {
        bindings.into_iter()
                .fold(Self::new(), |env, (name, value)| env.extend(name, value))
    }

    /// Looks up the most recent binding of `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        let mut frame = self.head.as_deref();
        while let Some(current) = frame {
            if current.name == name {
                return Some(&current.value);
            }
            frame = current.parent.as_deref();
        }
        None
    }

    /// Whether the environment holds no bindings at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}
