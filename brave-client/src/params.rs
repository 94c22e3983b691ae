//! Request parameter values and the per-call parameter map.
//!
//! Every scalar argument a request can carry is a [`ParamValue`]. Each value
//! has two canonical renderings: a string form used for query-string encoding
//! on GET, and a JSON literal used when the map is sent as a request body on
//! POST/DELETE. The verb picks the rendering; the value behaves identically
//! either way, and the two renderings always denote the same logical value.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Parameter map for a single request. Keys are unique and insertion order is
/// irrelevant; `BTreeMap` keeps the serialized body bytes deterministic.
pub type Params = BTreeMap<String, ParamValue>;

/// A scalar request argument.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl ParamValue {
    /// String rendering used for query-string encoding. Total for every
    /// variant; no error conditions.
    pub fn as_query_value(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::Bool(b) => write!(f, "{b}"),
            ParamValue::Int(i) => write!(f, "{i}"),
            ParamValue::Float(x) => write!(f, "{x}"),
        }
    }
}

/// JSON-literal rendering used for request-body encoding.
impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParamValue::Str(s) => serializer.serialize_str(s),
            ParamValue::Bool(b) => serializer.serialize_bool(*b),
            ParamValue::Int(i) => serializer.serialize_i64(*i),
            ParamValue::Float(x) => serializer.serialize_f64(*x),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Str(s)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        ParamValue::Int(i)
    }
}

impl From<u32> for ParamValue {
    fn from(i: u32) -> Self {
        ParamValue::Int(i64::from(i))
    }
}

impl From<f64> for ParamValue {
    fn from(x: f64) -> Self {
        ParamValue::Float(x)
    }
}
