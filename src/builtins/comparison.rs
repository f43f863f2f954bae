//! Comparison operations: =, <, <=, >, >=
//!
//! Chained semantics: operands are compared pairwise left-to-right; the
//! result is true iff every adjacent pair satisfies the relation. Zero or
//! one operand is vacuously true.

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;
use std::rc::Rc;

fn chained(operands: &[Value], rel: fn(f64, f64) -> bool) -> Result<Value, EvalError> {
    let numbers = operands
        .iter()
        .map(|v| v.as_number().ok_or(EvalError::OperandNotNumber))
        .collect::<Result<Vec<_>, _>>()?;
    let ok = numbers.windows(2).all(|pair| rel(pair[0], pair[1]));
    Ok(Value::Bool(ok))
}

fn builtin_eq(operands: &[Value]) -> Result<Value, EvalError> {
    chained(operands, |a, b| a == b)
}

fn builtin_lt(operands: &[Value]) -> Result<Value, EvalError> {
    chained(operands, |a, b| a < b)
}

fn builtin_le(operands: &[Value]) -> Result<Value, EvalError> {
    chained(operands, |a, b| a <= b)
}

fn builtin_gt(operands: &[Value]) -> Result<Value, EvalError> {
    chained(operands, |a, b| a > b)
}

fn builtin_ge(operands: &[Value]) -> Result<Value, EvalError> {
    chained(operands, |a, b| a >= b)
}

pub fn register(env: &Rc<Environment>) {
    env.define("=", Value::Native(builtin_eq));
    env.define("<", Value::Native(builtin_lt));
    env.define("<=", Value::Native(builtin_le));
    env.define(">", Value::Native(builtin_gt));
    env.define(">=", Value::Native(builtin_ge));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_one_operand_are_true() {
        assert_eq!(builtin_lt(&[]).unwrap().as_bool(), Some(true));
        assert_eq!(
            builtin_lt(&[Value::Integer(1)]).unwrap().as_bool(),
            Some(true)
        );
    }

    #[test]
    fn test_lt_chained_true() {
        let ops = vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)];
        assert_eq!(builtin_lt(&ops).unwrap().as_bool(), Some(true));
    }

    #[test]
    fn test_lt_chained_false() {
        let ops = vec![Value::Integer(1), Value::Integer(3), Value::Integer(2)];
        assert_eq!(builtin_lt(&ops).unwrap().as_bool(), Some(false));
    }

    #[test]
    fn test_chained_equals_and_of_pairs_property() {
        // (< a b c) == (and (< a b) (< b c))
        let a = Value::Integer(1);
        let b = Value::Integer(2);
        let c = Value::Integer(3);
        let chained = builtin_lt(&[a.clone(), b.clone(), c.clone()])
            .unwrap()
            .as_bool()
            .unwrap();
        let pairwise = builtin_lt(&[a, b.clone()]).unwrap().as_bool().unwrap()
            && builtin_lt(&[b, c]).unwrap().as_bool().unwrap();
        assert_eq!(chained, pairwise);
    }

    #[test]
    fn test_eq_mixed_integer_and_number() {
        let ops = vec![Value::Integer(2), Value::Number(2.0)];
        assert_eq!(builtin_eq(&ops).unwrap().as_bool(), Some(true));
    }

    #[test]
    fn test_ge_and_le() {
        let ops = vec![Value::Integer(3), Value::Integer(3), Value::Integer(2)];
        assert_eq!(builtin_ge(&ops).unwrap().as_bool(), Some(true));
        assert_eq!(builtin_le(&ops).unwrap().as_bool(), Some(false));
    }

    #[test]
    fn test_non_numeric_operand_errors() {
        let ops = vec![Value::Integer(1), Value::String("x".into())];
        assert_eq!(builtin_lt(&ops).unwrap_err(), EvalError::OperandNotNumber);
    }
}
