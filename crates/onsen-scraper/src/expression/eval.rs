//! Evaluation of parsed state expressions.

use std::collections::HashMap;

use super::parser::Expr;
use super::EvalError;

/// A value produced by evaluating a state expression.
///
/// Object members keep their source order; [`Value::to_json`] decides how
/// `undefined` entries serialize.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Converts to a JSON value with `JSON.stringify` semantics: an
    /// `undefined` root vanishes (`None`), `undefined` array elements become
    /// `null`, `undefined` object members are dropped, and non-finite
    /// numbers become `null`.
    #[must_use]
    pub fn to_json(&self) -> Option<serde_json::Value> {
        match self {
            Value::Undefined => None,
            Value::Null => Some(serde_json::Value::Null),
            Value::Bool(b) => Some(serde_json::Value::Bool(*b)),
            Value::Number(n) => Some(number_to_json(*n)),
            Value::String(s) => Some(serde_json::Value::String(s.clone())),
            Value::Array(items) => Some(serde_json::Value::Array(
                items
                    .iter()
                    .map(|item| item.to_json().unwrap_or(serde_json::Value::Null))
                    .collect(),
            )),
            Value::Object(fields) => {
                let mut map = serde_json::Map::new();
                for (key, value) in fields {
                    if let Some(json) = value.to_json() {
                        map.insert(key.clone(), json);
                    }
                }
                Some(serde_json::Value::Object(map))
            }
        }
    }
}

/// Integral values serialize without a decimal point so numeric ids survive
/// a round trip into integer-typed schema fields.
#[allow(clippy::cast_possible_truncation)]
fn number_to_json(n: f64) -> serde_json::Value {
    #[allow(clippy::cast_precision_loss)]
    let integral = n.is_finite() && n.fract() == 0.0 && (i64::MIN as f64..=i64::MAX as f64).contains(&n);
    if integral {
        serde_json::Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
    }
}

type Scope = HashMap<String, Value>;

/// Evaluates a parsed expression with no free identifiers in scope.
pub(super) fn evaluate(expr: &Expr) -> Result<Value, EvalError> {
    eval(expr, &Scope::new())
}

fn eval(expr: &Expr, scope: &Scope) -> Result<Value, EvalError> {
    match expr {
        Expr::Undefined => Ok(Value::Undefined),
        Expr::Null => Ok(Value::Null),
        Expr::Bool(b) => Ok(Value::Bool(*b)),
        Expr::Number(n) => Ok(Value::Number(*n)),
        Expr::String(s) => Ok(Value::String(s.clone())),
        Expr::Ident(name) => scope
            .get(name)
            .cloned()
            .ok_or_else(|| EvalError::UnknownIdentifier { name: name.clone() }),
        Expr::Neg(inner) => match eval(inner, scope)? {
            Value::Number(n) => Ok(Value::Number(-n)),
            _ => Err(EvalError::NegatedNonNumber),
        },
        Expr::Array(items) => items
            .iter()
            .map(|item| eval(item, scope))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Expr::Object(fields) => fields
            .iter()
            .map(|(key, value)| Ok((key.clone(), eval(value, scope)?)))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Object),
        // An uncalled function has no JSON representation; `JSON.stringify`
        // treats it as `undefined`.
        Expr::Function { .. } => Ok(Value::Undefined),
        Expr::Call { callee, args } => {
            let Expr::Function { params, body } = callee.as_ref() else {
                return Err(EvalError::NotCallable);
            };
            if args.len() > params.len() {
                return Err(EvalError::ArityMismatch {
                    declared: params.len(),
                    got: args.len(),
                });
            }

            let mut inner = scope.clone();
            for (at, param) in params.iter().enumerate() {
                let bound = match args.get(at) {
                    Some(arg) => eval(arg, scope)?,
                    None => Value::Undefined,
                };
                inner.insert(param.clone(), bound);
            }
            eval(body, &inner)
        }
    }
}
