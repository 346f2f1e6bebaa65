//! Transforms over `Value::Array` targets.

use super::{as_array, flag, str_arg};
use crate::Error;
use serde_json::{Map, Value};

/// Drop duplicate elements by value equality, keeping first occurrences.
pub(crate) fn unique(target: &mut Value, _args: &[Value]) -> Result<Value, Error> {
    let items = as_array(target, "unique")?;
    let mut out: Vec<Value> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    Ok(Value::Array(out))
}

/// Trim whitespace from string elements; non-strings pass through and
/// nested arrays are not descended into. A truthy argument also drops
/// elements that trim to nothing.
pub(crate) fn trim(target: &mut Value, args: &[Value]) -> Result<Value, Error> {
    let drop_empty = flag(args, 0);
    let items = as_array(target, "trim")?;
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(s) => {
                let trimmed = s.trim();
                if drop_empty && trimmed.is_empty() {
                    continue;
                }
                out.push(Value::String(trimmed.to_string()));
            }
            other => out.push(other.clone()),
        }
    }
    Ok(Value::Array(out))
}

/// Flatten nested arrays `depth` levels deep (default 1).
pub(crate) fn flat(target: &mut Value, args: &[Value]) -> Result<Value, Error> {
    let depth = args.first().and_then(Value::as_u64).unwrap_or(1);
    let items = as_array(target, "flat")?;
    let mut out = Vec::with_capacity(items.len());
    flatten_into(&mut out, items, depth);
    Ok(Value::Array(out))
}

fn flatten_into(out: &mut Vec<Value>, items: &[Value], depth: u64) {
    for item in items {
        match item {
            Value::Array(inner) if depth > 0 => flatten_into(out, inner, depth - 1),
            other => out.push(other.clone()),
        }
    }
}

/// Last element, or `back` positions before it; `Null` when out of range.
pub(crate) fn last(target: &mut Value, args: &[Value]) -> Result<Value, Error> {
    let items = as_array(target, "last")?;
    let back = args.first().and_then(Value::as_u64).unwrap_or(0) as usize;
    Ok(items.iter().rev().nth(back).cloned().unwrap_or(Value::Null))
}

/// Collapse single-element arrays to their element. Empty arrays stay
/// empty, or become `Null` when the argument is truthy; longer arrays are
/// returned unchanged.
pub(crate) fn unpack(target: &mut Value, args: &[Value]) -> Result<Value, Error> {
    let null_on_empty = flag(args, 0);
    let items = as_array(target, "unpack")?;
    match items.len() {
        0 if null_on_empty => Ok(Value::Null),
        0 => Ok(Value::Array(Vec::new())),
        1 => Ok(items[0].clone()),
        _ => Ok(target.clone()),
    }
}

/// Fold an array of `{k, v}` records into one object. Arguments rename the
/// key and value fields; records missing either field are skipped.
pub(crate) fn keyval(target: &mut Value, args: &[Value]) -> Result<Value, Error> {
    let key_field = str_arg(args, 0, "k");
    let val_field = str_arg(args, 1, "v");
    let items = as_array(target, "keyval")?;
    let mut out = Map::new();
    for item in items {
        if let Value::Object(entry) = item {
            if let (Some(Value::String(key)), Some(value)) =
                (entry.get(key_field), entry.get(val_field))
            {
                out.insert(key.clone(), value.clone());
            }
        }
    }
    Ok(Value::Object(out))
}
