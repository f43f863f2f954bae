//! Console I/O operations: display, newline
//!
//! - `display`: writes a single value's textual rendering to standard output
//! - `newline`: writes a line terminator
//!
//! Both return nil.

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;
use std::io::Write;
use std::rc::Rc;

/// Exactly one operand. Rendering follows `Value`'s `Display` impl, which
/// already matches the variant-by-variant format this built-in requires
/// (unquoted strings, `#t`/`#f`, `#[compound-procedure]`, `#[user-data]`,
/// `#!unspecific`).
fn builtin_display(operands: &[Value]) -> Result<Value, EvalError> {
    match operands {
        [v] => {
            print!("{}", v);
            let _ = std::io::stdout().flush();
            Ok(Value::Nil)
        }
        _ => Err(EvalError::DisplayRequiresOneOperand),
    }
}

fn builtin_newline(_operands: &[Value]) -> Result<Value, EvalError> {
    print!("{}", crate::config::NEWLINE);
    let _ = std::io::stdout().flush();
    Ok(Value::Nil)
}

pub fn register(env: &Rc<Environment>) {
    env.define("display", Value::Native(builtin_display));
    env.define("newline", Value::Native(builtin_newline));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_returns_nil() {
        assert!(matches!(
            builtin_display(&[Value::Integer(42)]).unwrap(),
            Value::Nil
        ));
    }

    #[test]
    fn test_display_wrong_arity() {
        assert_eq!(
            builtin_display(&[]).unwrap_err(),
            EvalError::DisplayRequiresOneOperand
        );
        assert_eq!(
            builtin_display(&[Value::Integer(1), Value::Integer(2)]).unwrap_err(),
            EvalError::DisplayRequiresOneOperand
        );
    }

    #[test]
    fn test_newline_returns_nil() {
        assert!(matches!(builtin_newline(&[]).unwrap(), Value::Nil));
    }
}
