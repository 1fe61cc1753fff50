use core::fmt;

use crate::number::format_float;

/// A scalar parsed from the right-hand side of a `key=value` line.
///
/// Exactly one variant is stored per entry; reads through
/// [`Document::get`](crate::Document::get) never convert between them.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    /// Always finite when produced by the parser.
    Float(f64),
    Text(String),
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    Float,
    Text,
    Empty,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
            Value::Empty => ValueKind::Empty,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(num) => f.write_str(&format_float(*num)),
            Value::Text(s) => f.write_str(s),
            Value::Empty => Ok(()),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Text => "text",
            ValueKind::Empty => "empty",
        })
    }
}

/// Types that can be read out of a stored [`Value`] without conversion.
///
/// `from_value` returns the kind it expected when the stored variant does not
/// match, so the caller can report both sides of the mismatch.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self, ValueKind>;
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Result<Self, ValueKind> {
        value.as_integer().ok_or(ValueKind::Integer)
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self, ValueKind> {
        value.as_float().ok_or(ValueKind::Float)
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self, ValueKind> {
        value.as_text().map(str::to_owned).ok_or(ValueKind::Text)
    }
}

/// The unit type stands for [`Value::Empty`].
impl FromValue for () {
    fn from_value(value: &Value) -> Result<Self, ValueKind> {
        if value.is_empty() {
            Ok(())
        } else {
            Err(ValueKind::Empty)
        }
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self, ValueKind> {
        Ok(value.clone())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Empty => serializer.serialize_unit(),
        }
    }
}
