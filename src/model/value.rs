//! Dynamically typed attribute values.

use serde::{Deserialize, Serialize};

use super::{Dict, Node};
use crate::layout::Length;
use crate::style::Color;

/// A node attribute value.
///
/// Serialized untagged, so plain JSON scalars, arrays, and objects map onto
/// the obvious variants. Objects are tried as a length (`{"pt": 12}`), a
/// color (`{"r":…,"g":…,"b":…,"a":…}`), and a content node (`{"kind": …}`)
/// before falling back to a dictionary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Vec<Value>),
    Length(Length),
    Color(Color),
    Content(Box<Node>),
    Dict(Dict),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_length(&self) -> Option<Length> {
        match self {
            Value::Length(l) => Some(*l),
            _ => None,
        }
    }

    pub fn as_content(&self) -> Option<&Node> {
        match self {
            Value::Content(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Short type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "none",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Length(_) => "length",
            Value::Color(_) => "color",
            Value::Content(_) => "content",
            Value::Dict(_) => "dictionary",
        }
    }

    /// Deep-merge two dictionary values.
    ///
    /// # Panics
    ///
    /// Panics if either side is not a dictionary.
    pub fn merge(self, overlay: Value) -> Value {
        match (self, overlay) {
            (Value::Dict(base), Value::Dict(top)) => Value::Dict(super::merge(&base, [&top])),
            (base, top) => panic!(
                "cannot merge {} with {}: both sides must be dictionaries",
                base.type_name(),
                top.type_name()
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Length> for Value {
    fn from(v: Length) -> Self {
        Value::Length(v)
    }
}

impl From<Color> for Value {
    fn from(v: Color) -> Self {
        Value::Color(v)
    }
}

impl From<Node> for Value {
    fn from(v: Node) -> Self {
        Value::Content(Box::new(v))
    }
}

impl From<Dict> for Value {
    fn from(v: Dict) -> Self {
        Value::Dict(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::None, Into::into)
    }
}
