// ABOUTME: Integration tests exercising the embeddable evaluator through its public Host API

use tiny_eval::error::EvalError;
use tiny_eval::value::Value;
use tiny_eval::Evaluator;

#[test]
fn test_factorial_program() {
    let ev = Evaluator::new();
    ev.eval(
        r#"
        (define (factorial n)
          (if (<= n 1)
              1
              (* n (factorial (- n 1)))))
        "#,
    )
    .unwrap();

    assert_eq!(ev.eval("(factorial 5)").unwrap().as_integer(), Some(120));
    assert_eq!(ev.eval("(factorial 0)").unwrap().as_integer(), Some(1));
}

#[test]
fn test_fibonacci_program() {
    let ev = Evaluator::new();
    ev.eval(
        r#"
        (define (fib n)
          (if (< n 2)
              n
              (+ (fib (- n 1)) (fib (- n 2)))))
        "#,
    )
    .unwrap();

    assert_eq!(ev.eval("(fib 10)").unwrap().as_integer(), Some(55));
    assert_eq!(ev.eval("(fib 0)").unwrap().as_integer(), Some(0));
}

#[test]
fn test_closures_capture_their_defining_environment() {
    let ev = Evaluator::new();
    ev.eval("(define (make-adder n) (lambda (x) (+ n x)))").unwrap();
    ev.eval("(define add5 (make-adder 5))").unwrap();
    ev.eval("(define add100 (make-adder 100))").unwrap();

    assert_eq!(ev.eval("(add5 10)").unwrap().as_integer(), Some(15));
    assert_eq!(ev.eval("(add100 23)").unwrap().as_integer(), Some(123));
    // each closure keeps its own captured `n`, independent of the other
    assert_eq!(ev.eval("(add5 10)").unwrap().as_integer(), Some(15));
}

#[test]
fn test_nested_internal_defines_are_installed_globally() {
    // exercises the define-shape asymmetry: the nested function-shape
    // defines inside square-root's body land in the global frame, yet
    // remain reachable from the recursive call because the lexical
    // parent chain walks back up to it.
    let ev = Evaluator::new();
    ev.eval(
        r#"
        (define (square-root x)
          (define (good-enough? guess)
            (< (abs-diff (* guess guess) x) 0.001))
          (define (abs-diff a b)
            (if (< a b) (- b a) (- a b)))
          (define (improve guess)
            (/ (+ guess (/ x guess)) 2))
          (define (iter guess)
            (if (good-enough? guess) guess (iter (improve guess))))
          (iter 1.0))
        "#,
    )
    .unwrap();

    let result = ev.eval("(square-root 3)").unwrap().as_number().unwrap();
    assert!((result - 3f64.sqrt()).abs() < 1e-3);

    // the helper functions are visible as ordinary globals afterward
    assert_eq!(ev.eval("(abs-diff 5 2)").unwrap().as_integer(), Some(3));
}

#[test]
fn test_mutual_recursion_across_top_level_defines() {
    let ev = Evaluator::new();
    ev.eval(
        r#"
        (define (even? n) (if (= n 0) #t (odd? (- n 1))))
        (define (odd? n) (if (= n 0) #f (even? (- n 1))))
        "#,
    )
    .unwrap();

    assert_eq!(ev.eval("(even? 10)").unwrap().as_bool(), Some(true));
    assert_eq!(ev.eval("(odd? 10)").unwrap().as_bool(), Some(false));
}

#[test]
fn test_cond_special_form() {
    let ev = Evaluator::new();
    ev.eval(
        r#"
        (define (classify n)
          (cond ((< n 0) "negative")
                ((= n 0) "zero")
                (#t "positive")))
        "#,
    )
    .unwrap();

    assert_eq!(ev.eval("(classify -1)").unwrap().as_str(), Some("negative"));
    assert_eq!(ev.eval("(classify 0)").unwrap().as_str(), Some("zero"));
    assert_eq!(ev.eval("(classify 5)").unwrap().as_str(), Some("positive"));
}

#[test]
fn test_and_or_short_circuit() {
    let ev = Evaluator::new();
    // `boom` is unbound, so evaluating it errors; and/or must never reach
    // it once the result is already determined by an earlier operand.
    assert_eq!(ev.eval("(and #f boom)").unwrap().as_bool(), Some(false));
    assert_eq!(ev.eval("(or #t boom)").unwrap().as_bool(), Some(true));

    // when every operand must be inspected, the unbound one still errors
    assert!(ev.eval("(and #t boom)").is_err());
    assert!(ev.eval("(or #f boom)").is_err());

    assert_eq!(ev.eval("(and #t #t)").unwrap().as_bool(), Some(true));
    assert_eq!(ev.eval("(or #f #f)").unwrap().as_bool(), Some(false));
}

#[test]
fn test_integer_and_number_arithmetic_promotion() {
    let ev = Evaluator::new();
    assert_eq!(ev.eval("(+ 1 2 3 4)").unwrap().as_integer(), Some(10));
    assert_eq!(ev.eval("(* 2 3 4)").unwrap().as_integer(), Some(24));
    assert_eq!(ev.eval("(- 10 3)").unwrap().as_integer(), Some(7));
    assert_eq!(ev.eval("(/ 20 4)").unwrap().as_integer(), Some(5));

    // any Number operand promotes the whole expression to Number
    assert_eq!(ev.eval("(+ 1 2.5)").unwrap().as_number(), Some(3.5));
    assert_eq!(ev.eval("(* 2 2.0)").unwrap().as_number(), Some(4.0));
}

#[test]
fn test_comparison_chains() {
    let ev = Evaluator::new();
    assert_eq!(ev.eval("(< 1 2 3)").unwrap().as_bool(), Some(true));
    assert_eq!(ev.eval("(< 1 3 2)").unwrap().as_bool(), Some(false));
    assert_eq!(ev.eval("(= 1 1 1)").unwrap().as_bool(), Some(true));
    assert_eq!(ev.eval("(>= 3 3 2 1)").unwrap().as_bool(), Some(true));
}

#[test]
fn test_display_and_newline_return_unspecific() {
    let ev = Evaluator::new();
    let v = ev.eval("(display 42)").unwrap();
    assert!(matches!(v, Value::Nil));
    let v = ev.eval("(newline)").unwrap();
    assert!(matches!(v, Value::Nil));
}

#[test]
fn test_case_insensitive_symbol_lookup() {
    let ev = Evaluator::new();
    ev.eval("(define MyValue 7)").unwrap();
    assert_eq!(ev.eval("myvalue").unwrap().as_integer(), Some(7));
    assert_eq!(ev.eval("MYVALUE").unwrap().as_integer(), Some(7));
}

#[test]
fn test_error_conditions_surface_through_the_error_slot() {
    let ev = Evaluator::new();

    assert!(ev.eval("undefined-var").is_err());
    assert_eq!(ev.error(), Some(EvalError::UnboundSymbol));

    // integer division by zero falls back to IEEE float division rather
    // than panicking on i64 division by zero.
    assert_eq!(ev.eval("(/ 1 0)").unwrap().as_number(), Some(f64::INFINITY));

    ev.eval("(define x 5)").unwrap();
    assert!(ev.eval("(x)").is_err());
    assert_eq!(ev.error(), Some(EvalError::ApplyNotProcedure));
}

#[test]
fn test_forms_before_a_parse_error_already_ran() {
    use std::sync::atomic::{AtomicI64, Ordering};
    static SEEN: AtomicI64 = AtomicI64::new(0);
    fn record(operands: &[Value]) -> Result<Value, EvalError> {
        if let [Value::Integer(n)] = operands {
            SEEN.store(*n, Ordering::SeqCst);
            Ok(Value::Nil)
        } else {
            Err(EvalError::OperandNotNumber)
        }
    }

    let ev = Evaluator::new();
    ev.define("record", Value::Native(record));

    // the first form is well-formed and must evaluate before the second
    // form's missing close-paren is even reached, per the top-level
    // parse-then-evaluate loop.
    assert!(ev.eval("(record 1) (+ 1 2").is_err());
    assert_eq!(ev.error(), Some(EvalError::UnexpectedEndOfExpression));
    assert_eq!(SEEN.load(Ordering::SeqCst), 1);
}

#[test]
fn test_host_injected_native_procedure() {
    fn double(operands: &[Value]) -> Result<Value, EvalError> {
        match operands {
            [Value::Integer(n)] => Ok(Value::Integer(n * 2)),
            [Value::Number(n)] => Ok(Value::Number(n * 2.0)),
            _ => Err(EvalError::OperandNotNumber),
        }
    }

    let ev = Evaluator::new();
    ev.define("double", Value::Native(double));
    assert_eq!(ev.eval("(double 21)").unwrap().as_integer(), Some(42));
}

#[test]
fn test_user_data_round_trips_and_displays_as_user_data() {
    struct Handle {
        id: u32,
    }

    let ev = Evaluator::new();
    ev.define(
        "conn",
        Value::UserData(std::rc::Rc::new(Handle { id: 7 })),
    );

    let v = ev.eval("conn").unwrap();
    assert_eq!(format!("{}", v), "#[user-data]");

    match v {
        Value::UserData(rc) => {
            let handle = rc.downcast_ref::<Handle>().expect("expected Handle");
            assert_eq!(handle.id, 7);
        }
        other => panic!("expected UserData, got {:?}", other),
    }
}

#[test]
fn test_multiple_definitions_compose() {
    let ev = Evaluator::new();
    ev.eval("(define (add a b) (+ a b))").unwrap();
    ev.eval("(define (mul a b) (* a b))").unwrap();
    ev.eval("(define (square x) (mul x x))").unwrap();

    assert_eq!(
        ev.eval("(add (square 3) (square 4))").unwrap().as_integer(),
        Some(25)
    );
}
