// ABOUTME: Value types representing the tagged runtime values of the evaluator

use crate::env::Environment;
use crate::error::EvalError;
use std::fmt;
use std::rc::Rc;

/// A native procedure: a plain function pointer over a slice of already
/// evaluated operands. No opaque user pointer is threaded through — a
/// Rust closure captures whatever state it needs instead.
pub type NativeFn = fn(&[Value]) -> Result<Value, EvalError>;

/// A procedure produced by `lambda` or by the function-shape of `define`.
/// Carries its formal parameter names, its body, and the environment in
/// effect when it was created.
#[derive(Debug, Clone)]
pub struct Closure {
    pub params: Vec<String>,
    pub body: Rc<Vec<crate::parser::Expr>>,
    pub env: Rc<Environment>,
}

#[allow(dead_code)]
#[derive(Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Integer(i64),
    Number(f64),
    String(Rc<str>),
    Native(NativeFn),
    Closure(Rc<Closure>),
    /// An opaque host value the evaluator never inspects.
    UserData(Rc<dyn std::any::Any>),
}

/// `Rc<dyn Any>` doesn't implement `Debug`, so this can't be derived;
/// `UserData` prints as its type name instead of its contents.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "Nil"),
            Value::Bool(b) => write!(f, "Bool({:?})", b),
            Value::Integer(n) => write!(f, "Integer({:?})", n),
            Value::Number(n) => write!(f, "Number({:?})", n),
            Value::String(s) => write!(f, "String({:?})", s),
            Value::Native(_) => write!(f, "Native(..)"),
            Value::Closure(_) => write!(f, "Closure(..)"),
            Value::UserData(_) => write!(f, "UserData(..)"),
        }
    }
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Native(_) | Value::Closure(_) => "procedure",
            Value::UserData(_) => "userdata",
        }
    }

    pub fn is_procedure(&self) -> bool {
        matches!(self, Value::Native(_) | Value::Closure(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Number(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "#!unspecific"),
            Value::Bool(b) => write!(f, "{}", if *b { "#t" } else { "#f" }),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Native(_) | Value::Closure(_) => write!(f, "#[compound-procedure]"),
            Value::UserData(_) => write!(f, "#[user-data]"),
        }
    }
}
