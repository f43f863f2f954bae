//! Logic operations: not
//!
//! `and`/`or` are short-circuiting special forms handled directly by the
//! evaluator (they must not evaluate all their operands), so only `not`
//! lives here as an ordinary native procedure.

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;
use std::rc::Rc;

/// Exactly one operand; true iff the operand is Boolean false. Any other
/// value — including Boolean true — yields false rather than an error.
fn builtin_not(operands: &[Value]) -> Result<Value, EvalError> {
    match operands {
        [v] => Ok(Value::Bool(matches!(v, Value::Bool(false)))),
        _ => Err(EvalError::NotRequiresOneOperand),
    }
}

pub fn register(env: &Rc<Environment>) {
    env.define("not", Value::Native(builtin_not));
}
