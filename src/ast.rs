use std::fmt;

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers every construct of the language: integer and boolean
/// literals, variables, unary and binary operations, conditionals,
/// let-bindings, anonymous functions and calls. Nodes are immutable once
/// built; the parser is the only producer and the evaluator the only
/// consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Num(i64),
    /// A boolean literal: `true` or `false`.
    Bool(bool),
    /// Reference to a variable by name.
    Var(String),
    /// A unary operation (e.g. `-x` or `not b`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation (addition, comparison, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Conditional (`if c then t else e`) expression.
    IfExpr {
        /// The condition; must evaluate to a boolean.
        condition:   Box<Self>,
        /// Expression evaluated if the condition is true.
        then_branch: Box<Self>,
        /// Expression evaluated if the condition is false.
        else_branch: Box<Self>,
    },
    /// Non-recursive local binding (`let x = bound in body`).
    Let {
        /// The bound name.
        name:  String,
        /// Expression whose value is bound.
        bound: Box<Self>,
        /// Expression evaluated with the binding in scope.
        body:  Box<Self>,
    },
    /// Anonymous function (`fun x y -> body`).
    ///
    /// Parsed but never a runtime value.
    Fun {
        /// Parameter names, in order.
        params: Vec<String>,
        /// The function body.
        body:   Box<Self>,
    },
    /// Function application by juxtaposition (`f a b`).
    Call {
        /// The expression in function position. Only variables can be called.
        callee:    Box<Self>,
        /// Arguments, in order.
        arguments: Vec<Self>,
    },
}

impl Expr {
    /// Builds a variable reference.
    #[must_use]
    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    /// Builds a unary operation node.
    #[must_use]
    pub fn unary(op: UnaryOperator, expr: Self) -> Self {
        Self::UnaryOp { op,
                        expr: Box::new(expr) }
    }

    /// Builds a binary operation node.
    ///
    /// ## Example
    /// ```
    /// use minifun::ast::{BinaryOperator, Expr};
    ///
    /// let sum = Expr::binary(BinaryOperator::Add, Expr::Num(1), Expr::var("x"));
    ///
    /// assert_eq!(sum.to_string(), "(1 + x)");
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Builds a conditional node.
    #[must_use]
    pub fn if_expr(condition: Self, then_branch: Self, else_branch: Self) -> Self {
        Self::IfExpr { condition:   Box::new(condition),
                       then_branch: Box::new(then_branch),
                       else_branch: Box::new(else_branch), }
    }

    /// Builds a let-binding node.
    #[must_use]
    pub fn let_in(name: impl Into<String>, bound: Self, body: Self) -> Self {
        Self::Let { name:  name.into(),
                    bound: Box::new(bound),
                    body:  Box::new(body), }
    }

    /// Builds a call of the named function.
    #[must_use]
    pub fn call(name: impl Into<String>, arguments: Vec<Self>) -> Self {
        Self::Call { callee: Box::new(Self::var(name)),
                     arguments }
    }
}

/// Represents a top-level function declaration.
///
/// Functions are not closures: the body sees its parameters and the other
/// top-level functions, nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in order. Never empty.
    pub params: Vec<String>,
    /// The body expression evaluated when the function is called.
    pub body:   Expr,
    /// Line number of the name in the source code.
    pub line:   usize,
}

/// A whole program: the function table plus the entry expression.
///
/// Function names need not be unique. Calls resolve to the first declaration
/// with a matching name, so declaration order decides which duplicate wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// Top-level function declarations, in source order.
    pub functions: Vec<FunctionDef>,
    /// The expression whose value is the program's result.
    pub main:      Expr,
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, boolean connectives and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Integer division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
    /// Equal to (`=`)
    Equal,
    /// Not equal to (`<>`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `not x`).
    Not,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            And => "&&",
            Or => "||",
            Equal => "=",
            NotEqual => "<>",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "not "),
        }
    }
}

/// Renders the expression fully parenthesised, so the printed form shows
/// exactly how the parser grouped it.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Var(name) => write!(f, "{name}"),
            Self::UnaryOp { op, expr } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::IfExpr { condition,
                           then_branch,
                           else_branch, } => {
                write!(f, "(if {condition} then {then_branch} else {else_branch})")
            },
            Self::Let { name, bound, body } => write!(f, "(let {name} = {bound} in {body})"),
            Self::Fun { params, body } => write!(f, "(fun {} -> {body})", params.join(" ")),
            Self::Call { callee, arguments } => {
                write!(f, "({callee}")?;
                for argument in arguments {
                    write!(f, " {argument}")?;
                }
                write!(f, ")")
            },
        }
    }
}

impl fmt::Display for FunctionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = {}", self.name, self.params.join(" "), self.body)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, def) in self.functions.iter().enumerate() {
            let keyword = if i == 0 { "letrec" } else { "and" };
            writeln!(f, "{keyword} {def}")?;
        }
        if !self.functions.is_empty() {
            writeln!(f, "in")?;
        }
        write!(f, "{}", self.main)
    }
}
