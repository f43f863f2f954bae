// ABOUTME: Builds an expression tree from source text, deferring atom classification to eval time

use crate::error::EvalError;
use nom::bytes::complete::take_while1;
use nom::character::complete::multispace0;
use nom::IResult;

/// The parser's output: a tree of atoms, strings, and combinations. This is
/// distinct from `Value` — a numeric-looking atom is not classified as
/// Integer/Number/Symbol until the evaluator resolves it, and there is no
/// list-of-values variant here since the language has no quoting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Atom(String),
    Str(String),
    Combination(Vec<Expr>),
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || c == '(' || c == ')' || c == '"'
}

fn skip_ws(input: &str) -> &str {
    let result: IResult<&str, &str> = multispace0(input);
    match result {
        Ok((rest, _)) => rest,
        Err(_) => input,
    }
}

/// Mirrors `lexer::close_string`'s escape rule but reports success/failure
/// explicitly rather than through a sentinel end-of-input return, since the
/// parser needs to tell "closed at end of input" apart from "never closed".
fn string_end(bytes: &[u8]) -> Option<usize> {
    let mut p = 1;
    while p < bytes.len() {
        match bytes[p] {
            b'\\' => p += 2,
            b'"' => return Some(p + 1),
            _ => p += 1,
        }
    }
    None
}

fn parse_atom(input: &str) -> Result<(&str, Expr), EvalError> {
    let result: IResult<&str, &str> = take_while1(|c: char| !is_delimiter(c))(input);
    match result {
        Ok((rest, token)) => Ok((rest, Expr::Atom(token.to_string()))),
        Err(_) => Err(EvalError::UnexpectedEndOfExpression),
    }
}

/// Bytes between the quotes become the string's content verbatim: a
/// backslash causes the following byte to be included literally, with no
/// further translation (`\n` stays two characters, not a newline).
fn parse_string(input: &str) -> Result<(&str, Expr), EvalError> {
    let bytes = input.as_bytes();
    match string_end(bytes) {
        Some(end) => {
            let content = &input[1..end - 1];
            Ok((&input[end..], Expr::Str(content.to_string())))
        }
        None => Err(EvalError::UnexpectedEndOfString),
    }
}

fn parse_combination(input: &str) -> Result<(&str, Expr), EvalError> {
    let mut rest = &input[1..];
    let mut items = Vec::new();
    loop {
        rest = skip_ws(rest);
        match rest.chars().next() {
            None => return Err(EvalError::UnexpectedEndOfExpression),
            Some(')') => {
                rest = &rest[1..];
                break;
            }
            _ => {
                let (next_rest, expr) = parse_expr(rest)?;
                items.push(expr);
                rest = next_rest;
            }
        }
    }
    Ok((rest, Expr::Combination(items)))
}

/// Parses a single expression starting at `input` (after leading whitespace
/// is skipped), returning the remaining text.
pub fn parse_expr(input: &str) -> Result<(&str, Expr), EvalError> {
    let input = skip_ws(input);
    match input.chars().next() {
        None => Err(EvalError::UnexpectedEndOfExpression),
        Some('(') => parse_combination(input),
        Some('"') => parse_string(input),
        Some(')') => Err(EvalError::UnexpectedCloseParen),
        Some(_) => parse_atom(input),
    }
}

/// Parses the next top-level expression in `input`, skipping leading
/// whitespace first. Returns `None` once only whitespace remains, so a
/// caller can distinguish "done" from a parse error.
pub fn parse_top_level(input: &str) -> Result<Option<(&str, Expr)>, EvalError> {
    let rest = skip_ws(input);
    if rest.is_empty() {
        return Ok(None);
    }
    let (next_rest, expr) = parse_expr(rest)?;
    Ok(Some((next_rest, expr)))
}

/// Parses every top-level expression in `input` in source order.
pub fn parse_program(input: &str) -> Result<Vec<Expr>, EvalError> {
    let mut rest = input;
    let mut exprs = Vec::new();
    while let Some((next_rest, expr)) = parse_top_level(rest)? {
        exprs.push(expr);
        rest = next_rest;
    }
    Ok(exprs)
}
