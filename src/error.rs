// ABOUTME: Error types for evaluation failures in the Lisp interpreter

use thiserror::Error;

/// Every failure the evaluator can produce, keyed to the message-prefix
/// taxonomy the host matches against. The `Display` impl generated by
/// `#[error(...)]` is the exact string surfaced through `Evaluator::error()`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("eval: unexpected end of string")]
    UnexpectedEndOfString,

    #[error("eval: unexpected end of expression")]
    UnexpectedEndOfExpression,

    #[error("eval: unexpected close parenthesis")]
    UnexpectedCloseParen,

    #[error("eval: unbound symbol")]
    UnboundSymbol,

    #[error("apply: unbound procedure")]
    ApplyUnboundProcedure,

    #[error("apply: operator is not a procedure")]
    ApplyNotProcedure,

    #[error("define: unexpected end of expression")]
    DefineUnexpectedEndOfExpression,

    #[error("define: unexpected end of procedure definition")]
    DefineUnexpectedEndOfProcedure,

    #[error("lambda: invalid expression")]
    LambdaInvalidExpression,

    #[error("lambda: unexpected end of definition")]
    LambdaUnexpectedEndOfDefinition,

    #[error("lambda: mismatch operand count")]
    LambdaMismatchOperandCount,

    #[error("cond: unexpected conditional expression")]
    CondUnexpectedExpression,

    #[error("cond: unexpected conditional result")]
    CondUnexpectedResult,

    #[error("cond: can't eval condition")]
    CondCantEvalCondition,

    #[error("if: unexpected conditional result")]
    IfUnexpectedResult,

    #[error("if: unexpected end of expression")]
    IfUnexpectedEndOfExpression,

    #[error("and|or: operand is not a boolean value")]
    AndOrOperandNotBoolean,

    #[error("operand is not a number")]
    OperandNotNumber,

    #[error("minus: require at least 1 operand")]
    MinusRequiresOperand,

    #[error("divides: require at least 1 operand")]
    DividesRequiresOperand,

    #[error("not: requires exactly 1 operand")]
    NotRequiresOneOperand,

    #[error("display: requires 1 operand")]
    DisplayRequiresOneOperand,
}
