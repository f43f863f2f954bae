//! Arithmetic operations: +, -, *, /
//!
//! Numeric promotion: an all-Integer operand list produces an Integer
//! result; any Number operand promotes the whole expression to Number.
//! `-`/`/` special-case a single operand (negate / reciprocal, always
//! Number for `/`) and zero operands (an arity error, since "negate
//! nothing" and "invert nothing" are not meaningful).

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;
use std::rc::Rc;

fn all_integer(operands: &[Value]) -> bool {
    operands.iter().all(|v| matches!(v, Value::Integer(_)))
}

fn check_numeric(operands: &[Value]) -> Result<(), EvalError> {
    if operands.iter().all(|v| v.is_numeric()) {
        Ok(())
    } else {
        Err(EvalError::OperandNotNumber)
    }
}

fn builtin_add(operands: &[Value]) -> Result<Value, EvalError> {
    if operands.is_empty() {
        return Ok(Value::Integer(0));
    }
    check_numeric(operands)?;
    if all_integer(operands) {
        let sum: i64 = operands.iter().map(|v| v.as_integer().unwrap()).sum();
        Ok(Value::Integer(sum))
    } else {
        let sum: f64 = operands.iter().map(|v| v.as_number().unwrap()).sum();
        Ok(Value::Number(sum))
    }
}

fn builtin_sub(operands: &[Value]) -> Result<Value, EvalError> {
    if operands.is_empty() {
        return Err(EvalError::MinusRequiresOperand);
    }
    check_numeric(operands)?;
    if operands.len() == 1 {
        return Ok(if all_integer(operands) {
            Value::Integer(-operands[0].as_integer().unwrap())
        } else {
            Value::Number(-operands[0].as_number().unwrap())
        });
    }
    if all_integer(operands) {
        let mut acc = operands[0].as_integer().unwrap();
        for v in &operands[1..] {
            acc -= v.as_integer().unwrap();
        }
        Ok(Value::Integer(acc))
    } else {
        let mut acc = operands[0].as_number().unwrap();
        for v in &operands[1..] {
            acc -= v.as_number().unwrap();
        }
        Ok(Value::Number(acc))
    }
}

fn builtin_mul(operands: &[Value]) -> Result<Value, EvalError> {
    if operands.is_empty() {
        return Ok(Value::Integer(1));
    }
    check_numeric(operands)?;
    if all_integer(operands) {
        let product: i64 = operands.iter().map(|v| v.as_integer().unwrap()).product();
        Ok(Value::Integer(product))
    } else {
        let product: f64 = operands.iter().map(|v| v.as_number().unwrap()).product();
        Ok(Value::Number(product))
    }
}

fn builtin_div(operands: &[Value]) -> Result<Value, EvalError> {
    if operands.is_empty() {
        return Err(EvalError::DividesRequiresOperand);
    }
    check_numeric(operands)?;
    if operands.len() == 1 {
        return Ok(Value::Number(1.0 / operands[0].as_number().unwrap()));
    }
    if all_integer(operands) && !operands[1..].iter().any(|v| v.as_integer() == Some(0)) {
        let mut acc = operands[0].as_integer().unwrap();
        for v in &operands[1..] {
            acc /= v.as_integer().unwrap();
        }
        Ok(Value::Integer(acc))
    } else {
        // a zero Integer divisor falls through to float division rather
        // than panicking on i64 division by zero; IEEE 754 gives inf/nan.
        let mut acc = operands[0].as_number().unwrap();
        for v in &operands[1..] {
            acc /= v.as_number().unwrap();
        }
        Ok(Value::Number(acc))
    }
}

pub fn register(env: &Rc<Environment>) {
    env.define("+", Value::Native(builtin_add));
    env.define("-", Value::Native(builtin_sub));
    env.define("*", Value::Native(builtin_mul));
    env.define("/", Value::Native(builtin_div));
}
