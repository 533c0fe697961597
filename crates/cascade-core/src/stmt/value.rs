use super::Type;
use crate::{Error, Result};

use std::fmt;

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// 64-bit float
    F64(f64),

    /// Signed 64-bit integer
    I64(i64),

    /// Null value
    #[default]
    Null,

    /// String value
    String(String),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns `true` if the value does not count as a selection.
    ///
    /// Missing selections arrive from the browser as `null`, `false`, `0` or
    /// an empty string, either typed or as their query-string spelling.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(v) => !v,
            Self::I64(v) => *v == 0,
            Self::F64(v) => *v == 0.0,
            Self::String(v) => matches!(v.as_str(), "" | "0" | "false" | "null"),
        }
    }

    /// The name of the variant, used in error messages.
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::F64(_) => "F64",
            Self::I64(_) => "I64",
            Self::Null => "Null",
            Self::String(_) => "String",
        }
    }

    /// Converts the value to `ty`.
    ///
    /// Strings are parsed into numbers and booleans, numbers are formatted
    /// into strings. Null converts to every type.
    pub fn cast(self, ty: Type) -> Result<Value> {
        Ok(match (self, ty) {
            (Value::Null, _) => Value::Null,
            (value @ Value::Bool(_), Type::Bool) => value,
            (value @ Value::F64(_), Type::F64) => value,
            (value @ Value::I64(_), Type::I64) => value,
            (value @ Value::String(_), Type::String) => value,
            (Value::I64(v), Type::F64) => Value::F64(v as f64),
            (Value::I64(v), Type::Bool) => Value::Bool(v != 0),
            (Value::I64(v), Type::String) => Value::String(v.to_string()),
            (Value::F64(v), Type::String) => Value::String(v.to_string()),
            (Value::Bool(v), Type::I64) => Value::I64(v as i64),
            (Value::Bool(v), Type::String) => Value::String(v.to_string()),
            (Value::String(v), Type::I64) => match v.trim().parse() {
                Ok(parsed) => Value::I64(parsed),
                Err(_) => return Err(Error::type_conversion(Value::String(v), ty.name())),
            },
            (Value::String(v), Type::F64) => match v.trim().parse() {
                Ok(parsed) => Value::F64(parsed),
                Err(_) => return Err(Error::type_conversion(Value::String(v), ty.name())),
            },
            (Value::String(v), Type::Bool) => match v.as_str() {
                "1" | "true" => Value::Bool(true),
                "0" | "false" => Value::Bool(false),
                _ => return Err(Error::type_conversion(Value::String(v), ty.name())),
            },
            (value, ty) => return Err(Error::type_conversion(value, ty.name())),
        })
    }

    /// Infers the type of the value; `None` for null.
    pub const fn infer_ty(&self) -> Option<Type> {
        match self {
            Self::Bool(_) => Some(Type::Bool),
            Self::F64(_) => Some(Type::F64),
            Self::I64(_) => Some(Type::I64),
            Self::Null => None,
            Self::String(_) => Some(Type::String),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::Null => Ok(()),
            Value::String(v) => f.write_str(v),
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I64(src.into())
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}
