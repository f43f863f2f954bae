// ABOUTME: Evaluator module for executing parsed Lisp expressions

use crate::env::Environment;
use crate::error::EvalError;
use crate::parser::Expr;
use crate::value::{Closure, Value};
use std::rc::Rc;

/// Evaluates a single expression in the given environment. Plain recursive
/// tree-walking: no tail-call optimization, no continuations.
pub fn eval(expr: &Expr, env: &Rc<Environment>) -> Result<Value, EvalError> {
    match expr {
        Expr::Atom(text) => eval_atom(text, env),
        Expr::Str(s) => Ok(Value::String(Rc::from(s.as_str()))),
        Expr::Combination(items) => eval_combination(items, env),
    }
}

/// Evaluates a sequence of top-level expressions in order, returning the
/// value of the last one. Used both for whole programs and for a closure's
/// body.
pub fn eval_program(exprs: &[Expr], env: &Rc<Environment>) -> Result<Value, EvalError> {
    let mut result = Value::Nil;
    for expr in exprs {
        result = eval(expr, env)?;
    }
    Ok(result)
}

/// Classifies a raw atom token: a literal containing `.` is attempted as a
/// float, otherwise as an integer; anything that fails numeric parsing is a
/// symbol reference, resolved through the environment.
fn eval_atom(text: &str, env: &Rc<Environment>) -> Result<Value, EvalError> {
    if text.contains('.') {
        if let Ok(n) = text.parse::<f64>() {
            return Ok(Value::Number(n));
        }
    } else if let Ok(n) = text.parse::<i64>() {
        return Ok(Value::Integer(n));
    }
    env.get(text).ok_or(EvalError::UnboundSymbol)
}

fn eval_combination(items: &[Expr], env: &Rc<Environment>) -> Result<Value, EvalError> {
    if items.is_empty() {
        return Err(EvalError::UnexpectedEndOfExpression);
    }

    if let Expr::Atom(head) = &items[0] {
        match head.to_ascii_lowercase().as_str() {
            "define" => return eval_define(items, env),
            "lambda" => return eval_lambda(items, env),
            "cond" => return eval_cond(items, env),
            "if" => return eval_if(items, env),
            "and" => return eval_and(items, env),
            "or" => return eval_or(items, env),
            _ => {}
        }
    }

    let operands = items[1..]
        .iter()
        .map(|e| eval(e, env))
        .collect::<Result<Vec<_>, _>>()?;
    apply(&items[0], operands, env)
}

/// The head of a combination is either a bare symbol (looked up directly as
/// a procedure name — it is never attempted as a numeric literal) or a
/// general expression (evaluated and expected to yield a procedure).
fn apply(head: &Expr, operands: Vec<Value>, env: &Rc<Environment>) -> Result<Value, EvalError> {
    let proc = match head {
        Expr::Atom(name) => env.get(name).ok_or(EvalError::ApplyUnboundProcedure)?,
        _ => eval(head, env)?,
    };
    call_procedure(&proc, operands)
}

fn call_procedure(proc: &Value, operands: Vec<Value>) -> Result<Value, EvalError> {
    match proc {
        Value::Native(f) => f(&operands),
        Value::Closure(closure) => invoke_closure(closure, operands),
        _ => Err(EvalError::ApplyNotProcedure),
    }
}

/// A fresh frame is created per invocation, parented to the closure's
/// *captured* environment rather than the caller's — this is what keeps
/// recursion and nested closures from leaking bindings across calls.
fn invoke_closure(closure: &Closure, operands: Vec<Value>) -> Result<Value, EvalError> {
    if operands.len() != closure.params.len() {
        return Err(EvalError::LambdaMismatchOperandCount);
    }
    let frame = Environment::with_parent(Rc::clone(&closure.env));
    for (name, value) in closure.params.iter().zip(operands) {
        frame.define(name, value);
    }
    eval_program(&closure.body, &frame)
}

fn parse_params(expr: &Expr) -> Result<Vec<String>, EvalError> {
    match expr {
        Expr::Combination(items) => items
            .iter()
            .map(|e| match e {
                Expr::Atom(name) => Ok(name.clone()),
                _ => Err(EvalError::LambdaInvalidExpression),
            })
            .collect(),
        _ => Err(EvalError::LambdaInvalidExpression),
    }
}

/// `(lambda (params...) body...)` — captures the current environment.
fn eval_lambda(items: &[Expr], env: &Rc<Environment>) -> Result<Value, EvalError> {
    if items.len() < 2 {
        return Err(EvalError::LambdaUnexpectedEndOfDefinition);
    }
    let params = parse_params(&items[1])?;
    if items.len() < 3 {
        return Err(EvalError::LambdaUnexpectedEndOfDefinition);
    }
    Ok(Value::Closure(Rc::new(Closure {
        params,
        body: Rc::new(items[2..].to_vec()),
        env: Rc::clone(env),
    })))
}

/// `(define name expr)` installs locally; `(define (name params...) body...)`
/// installs globally. This asymmetry is preserved from the source (see
/// Design Notes) rather than normalised away. Both shapes return the defined
/// value, not a name — `Value` has no symbol variant to return instead.
fn eval_define(items: &[Expr], env: &Rc<Environment>) -> Result<Value, EvalError> {
    if items.len() < 2 {
        return Err(EvalError::DefineUnexpectedEndOfExpression);
    }
    match &items[1] {
        Expr::Atom(name) => {
            if items.len() != 3 {
                return Err(EvalError::DefineUnexpectedEndOfExpression);
            }
            let value = eval(&items[2], env)?;
            env.define(name, value.clone());
            Ok(value)
        }
        Expr::Combination(parts) => {
            let name = match parts.first() {
                Some(Expr::Atom(name)) => name.clone(),
                _ => return Err(EvalError::DefineUnexpectedEndOfProcedure),
            };
            let params = parts[1..]
                .iter()
                .map(|e| match e {
                    Expr::Atom(n) => Ok(n.clone()),
                    _ => Err(EvalError::LambdaInvalidExpression),
                })
                .collect::<Result<Vec<_>, _>>()?;
            if items.len() < 3 {
                return Err(EvalError::DefineUnexpectedEndOfProcedure);
            }
            let closure = Value::Closure(Rc::new(Closure {
                params,
                body: Rc::new(items[2..].to_vec()),
                env: Rc::clone(env),
            }));
            env.define_global(&name, closure.clone());
            Ok(closure)
        }
        _ => Err(EvalError::DefineUnexpectedEndOfExpression),
    }
}

/// `(cond (pred expr...) ... (else expr...))`. Evaluates predicates in
/// order; the first truthy one's body is evaluated and returned.
fn eval_cond(items: &[Expr], env: &Rc<Environment>) -> Result<Value, EvalError> {
    for clause in &items[1..] {
        let parts = match clause {
            Expr::Combination(parts) => parts,
            _ => return Err(EvalError::CondUnexpectedExpression),
        };
        if parts.len() < 2 {
            return Err(EvalError::CondUnexpectedExpression);
        }
        let is_else = matches!(&parts[0], Expr::Atom(a) if a.eq_ignore_ascii_case("else"));
        let matched = if is_else {
            true
        } else {
            let pred = eval(&parts[0], env).map_err(|_| EvalError::CondCantEvalCondition)?;
            match pred {
                Value::Bool(b) => b,
                _ => return Err(EvalError::CondUnexpectedResult),
            }
        };
        if matched {
            return eval_program(&parts[1..], env);
        }
    }
    Ok(Value::Nil)
}

/// `(if pred then else)`.
fn eval_if(items: &[Expr], env: &Rc<Environment>) -> Result<Value, EvalError> {
    if items.len() != 4 {
        return Err(EvalError::IfUnexpectedEndOfExpression);
    }
    match eval(&items[1], env)? {
        Value::Bool(true) => eval(&items[2], env),
        Value::Bool(false) => eval(&items[3], env),
        _ => Err(EvalError::IfUnexpectedResult),
    }
}

/// Short-circuiting `and`. Zero operands is true.
fn eval_and(items: &[Expr], env: &Rc<Environment>) -> Result<Value, EvalError> {
    for expr in &items[1..] {
        match eval(expr, env)? {
            Value::Bool(true) => continue,
            Value::Bool(false) => return Ok(Value::Bool(false)),
            _ => return Err(EvalError::AndOrOperandNotBoolean),
        }
    }
    Ok(Value::Bool(true))
}

/// Short-circuiting `or`. Zero operands is false.
fn eval_or(items: &[Expr], env: &Rc<Environment>) -> Result<Value, EvalError> {
    for expr in &items[1..] {
        match eval(expr, env)? {
            Value::Bool(false) => continue,
            Value::Bool(true) => return Ok(Value::Bool(true)),
            _ => return Err(EvalError::AndOrOperandNotBoolean),
        }
    }
    Ok(Value::Bool(false))
}
