use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::value::{Value, ValueKind};

static FLOAT_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]+").unwrap());
static INTEGER_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+").unwrap());

/// Infer the variant of raw value text. First match wins:
///
/// 1. leading `digits.digits` -> [`Value::Float`] of that prefix
/// 2. leading `digits` -> [`Value::Integer`] of that prefix
/// 3. any alphabetic character -> [`Value::Text`], verbatim
/// 4. otherwise [`Value::Empty`]
///
/// Anything after a numeric prefix is ignored, so `3.14abc` is `Float(3.14)`
/// and `3abc` is `Integer(3)`. `line` is only used for error reporting.
pub fn infer(text: &str, line: usize) -> Result<Value> {
    if let Some(m) = FLOAT_PREFIX.find(text) {
        return match m.as_str().parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Value::Float(f)),
            _ => Err(invalid(text, line, ValueKind::Float)),
        };
    }
    if let Some(m) = INTEGER_PREFIX.find(text) {
        return m
            .as_str()
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| invalid(text, line, ValueKind::Integer));
    }
    if text.chars().any(char::is_alphabetic) {
        return Ok(Value::Text(text.to_owned()));
    }
    Ok(Value::Empty)
}

fn invalid(text: &str, line: usize, kind: ValueKind) -> Error {
    Error::InvalidNumber {
        line,
        text: text.to_owned(),
        kind,
    }
}
