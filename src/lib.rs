// ABOUTME: Library module exposing the embeddable evaluator and its internals

pub mod builtins;
pub mod config;
pub mod env;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod value;

use env::Environment;
use error::EvalError;
use std::cell::RefCell;
use std::rc::Rc;
use value::Value;

/// An embeddable evaluator instance: a global environment with all
/// built-ins installed, plus a single pending-error slot.
///
/// ```
/// use tiny_eval::Evaluator;
///
/// let mut ev = Evaluator::new();
/// let result = ev.eval("(+ 1 (* 2 3) 4 5)").unwrap();
/// assert_eq!(result.as_integer(), Some(16));
/// ```
pub struct Evaluator {
    global: Rc<Environment>,
    error: RefCell<Option<EvalError>>,
}

impl Evaluator {
    /// Allocates a new evaluator with a fresh global frame and all
    /// built-ins installed.
    pub fn new() -> Self {
        let global = Environment::new();
        builtins::register_builtins(&global);
        Evaluator {
            global,
            error: RefCell::new(None),
        }
    }

    /// Installs a binding in the global frame, for injecting host values
    /// or native procedures before evaluating any source text.
    pub fn define(&self, name: &str, value: Value) {
        self.global.define(name, value);
    }

    /// Parses and evaluates `source` one top-level expression at a time,
    /// returning the value of the last one. Each form is evaluated as soon
    /// as it is parsed, so a form's side effects (e.g. `display`) happen
    /// before any later form is even parsed — a parse error partway through
    /// `source` does not undo or withhold the forms that already ran.
    /// Clears the error slot at entry; on failure, sets it and returns the
    /// error.
    pub fn eval(&self, source: &str) -> Result<Value, EvalError> {
        self.set_error(None);
        let result = self.eval_program(source);
        if let Err(ref e) = result {
            self.set_error(Some(e.clone()));
        }
        result
    }

    fn eval_program(&self, source: &str) -> Result<Value, EvalError> {
        let mut rest = source;
        let mut result = Value::Nil;
        while let Some((next_rest, expr)) = parser::parse_top_level(rest)? {
            result = eval::eval(&expr, &self.global)?;
            rest = next_rest;
        }
        Ok(result)
    }

    /// The pending error, if the last `eval` call failed.
    pub fn error(&self) -> Option<EvalError> {
        self.error.borrow().clone()
    }

    /// Clears or replaces the pending error slot.
    pub fn set_error(&self, err: Option<EvalError>) {
        *self.error.borrow_mut() = err;
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
