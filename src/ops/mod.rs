//! Operation bodies for the catalog tables.
//!
//! One module per category plus the shape predicates every category shares.
//! Bodies follow the catalog call convention (`OpFn`): optional arguments
//! arrive as a `Value` slice, flags use loose truthiness, and malformed
//! arguments degrade to the no-argument behavior instead of erroring. The
//! only hard failure is a target of the wrong shape, which the dispatch
//! path already rules out.

pub(crate) mod mapping;
pub(crate) mod sequence;
pub(crate) mod text;

use crate::Error;
use crate::catalog::identity::Category;
use serde_json::{Map, Value};

pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub(crate) fn flag(args: &[Value], position: usize) -> bool {
    args.get(position).map(truthy).unwrap_or(false)
}

pub(crate) fn str_arg<'a>(args: &'a [Value], position: usize, default: &'a str) -> &'a str {
    args.get(position).and_then(Value::as_str).unwrap_or(default)
}

/// Text rendering for scalar values: strings stay bare, everything else
/// takes its JSON form.
pub(crate) fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub(crate) fn as_array<'a>(target: &'a Value, name: &'static str) -> Result<&'a Vec<Value>, Error> {
    target.as_array().ok_or(Error::TargetMismatch {
        name,
        expected: Category::Sequence,
    })
}

pub(crate) fn as_object<'a>(
    target: &'a Value,
    name: &'static str,
) -> Result<&'a Map<String, Value>, Error> {
    target.as_object().ok_or(Error::TargetMismatch {
        name,
        expected: Category::Mapping,
    })
}

pub(crate) fn as_object_mut<'a>(
    target: &'a mut Value,
    name: &'static str,
) -> Result<&'a mut Map<String, Value>, Error> {
    target.as_object_mut().ok_or(Error::TargetMismatch {
        name,
        expected: Category::Mapping,
    })
}

pub(crate) fn as_text<'a>(target: &'a Value, name: &'static str) -> Result<&'a str, Error> {
    target.as_str().ok_or(Error::TargetMismatch {
        name,
        expected: Category::Text,
    })
}

// The predicates answer for any shape, so every category table carries them.
pub(crate) fn is_str(target: &mut Value, _args: &[Value]) -> Result<Value, Error> {
    Ok(Value::Bool(target.is_string()))
}

pub(crate) fn is_arr(target: &mut Value, _args: &[Value]) -> Result<Value, Error> {
    Ok(Value::Bool(target.is_array()))
}

pub(crate) fn is_obj(target: &mut Value, _args: &[Value]) -> Result<Value, Error> {
    Ok(Value::Bool(target.is_object()))
}
