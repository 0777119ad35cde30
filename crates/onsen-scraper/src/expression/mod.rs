//! Evaluator for the page's embedded state expressions.
//!
//! The front-end framework emits either a bare literal or an
//! immediately-invoked function expression whose body returns a literal, with
//! repeated strings hoisted into parameters. That closed shape needs no
//! general-purpose scripting engine: a recursive-descent parse plus parameter
//! substitution recovers the value, and nothing the payload can say reaches a
//! filesystem, network, or process API. Evaluation state lives on the call
//! stack, so nothing is shared between documents.

mod eval;
mod parser;

pub use eval::Value;

use thiserror::Error;

/// Failure while tokenizing, parsing, or evaluating a state expression.
///
/// Byte offsets refer to the expression text handed in, not the surrounding
/// page.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unexpected character '{ch}' at byte {at}")]
    UnexpectedChar { ch: char, at: usize },

    #[error("expected {expected} at byte {at}")]
    Expected { expected: &'static str, at: usize },

    #[error("invalid escape sequence at byte {at}")]
    BadEscape { at: usize },

    #[error("invalid number literal at byte {at}")]
    BadNumber { at: usize },

    #[error("trailing input after expression at byte {at}")]
    TrailingInput { at: usize },

    /// The payload referenced a name with no parameter binding — real pages
    /// never do this, so it signals a shape this evaluator does not cover.
    #[error("unknown identifier \"{name}\" at evaluation time")]
    UnknownIdentifier { name: String },

    #[error("called a value that is not a function expression")]
    NotCallable,

    /// More arguments than declared parameters. Missing arguments bind to
    /// `undefined` as the scripting language would; surplus ones indicate a
    /// misparse and are rejected.
    #[error("function declares {declared} parameters but was called with {got} arguments")]
    ArityMismatch { declared: usize, got: usize },

    #[error("cannot negate a non-numeric value")]
    NegatedNonNumber,
}

/// Evaluates `expr` to a [`Value`].
///
/// # Errors
///
/// Returns [`EvalError`] when the expression fails to tokenize, parse, or
/// evaluate.
pub fn evaluate(expr: &str) -> Result<Value, EvalError> {
    let ast = parser::parse(expr)?;
    eval::evaluate(&ast)
}

/// Evaluates `expr` and serializes the result the way the page's own
/// `JSON.stringify` would (`undefined` object members dropped, `undefined`
/// array elements as `null`).
///
/// Returns `Ok(None)` when the whole expression evaluates to `undefined` —
/// the scripting "no value" sentinel, which callers report distinctly from
/// parse failures since it indicates a schema-assumption mismatch.
///
/// # Errors
///
/// Returns [`EvalError`] when the expression fails to tokenize, parse, or
/// evaluate.
pub fn stringify(expr: &str) -> Result<Option<String>, EvalError> {
    Ok(evaluate(expr)?.to_json().map(|json| json.to_string()))
}

#[cfg(test)]
#[path = "../expression_test.rs"]
mod tests;
