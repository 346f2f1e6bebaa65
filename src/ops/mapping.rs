//! Transforms over `Value::Object` targets.
//!
//! `mv`, `rm`, and `setpath` mutate the target; their `p`-suffixed or pure
//! siblings work on a copy. Both return the resulting value so either
//! calling style composes.

use super::{as_object, as_object_mut, scalar_text, str_arg};
use crate::Error;
use serde_json::{Map, Value};

pub(crate) fn keys(target: &mut Value, _args: &[Value]) -> Result<Value, Error> {
    let map = as_object(target, "keys")?;
    Ok(Value::Array(
        map.keys().map(|k| Value::String(k.clone())).collect(),
    ))
}

pub(crate) fn is_empty(target: &mut Value, _args: &[Value]) -> Result<Value, Error> {
    let map = as_object(target, "isEmpty")?;
    Ok(Value::Bool(map.is_empty()))
}

/// Explode an object into `{k, v}` records, or render it as text.
///
/// Two string arguments rename the record fields. A single object argument
/// switches to the text form instead: `key<ks>value`, records joined by
/// `rs`, with `ks` defaulting to `=` and `rs` to a line break.
pub(crate) fn keyval(target: &mut Value, args: &[Value]) -> Result<Value, Error> {
    let map = as_object(target, "keyval")?;
    if let Some(Value::Object(opts)) = args.first() {
        let ks = opts.get("ks").and_then(Value::as_str).unwrap_or("=");
        let rs = opts.get("rs").and_then(Value::as_str).unwrap_or("\n");
        let rendered = map
            .iter()
            .map(|(k, v)| format!("{k}{ks}{}", scalar_text(v)))
            .collect::<Vec<_>>()
            .join(rs);
        return Ok(Value::String(rendered));
    }
    let key_field = str_arg(args, 0, "k");
    let val_field = str_arg(args, 1, "v");
    let entries = map
        .iter()
        .map(|(k, v)| {
            let mut entry = Map::new();
            entry.insert(key_field.to_string(), Value::String(k.clone()));
            entry.insert(val_field.to_string(), v.clone());
            Value::Object(entry)
        })
        .collect();
    Ok(Value::Array(entries))
}

/// Merge argument objects over a copy of the target, later writers winning.
pub(crate) fn concat(target: &mut Value, args: &[Value]) -> Result<Value, Error> {
    let map = as_object(target, "concat")?;
    let mut merged = map.clone();
    for arg in args {
        if let Value::Object(extra) = arg {
            for (key, value) in extra {
                merged.insert(key.clone(), value.clone());
            }
        }
    }
    Ok(Value::Object(merged))
}

// The rename map drives the walk: the source key is always removed, and the
// value lands under the new name only when that name is a non-empty string.
// Renames overwrite existing keys.
fn apply_rename(map: &mut Map<String, Value>, renames: &Map<String, Value>) {
    for (from, to) in renames {
        let Some(value) = map.remove(from) else {
            continue;
        };
        if let Some(name) = to.as_str() {
            if !name.is_empty() {
                map.insert(name.to_string(), value);
            }
        }
    }
}

/// Rename or delete keys per the argument object, in place.
pub(crate) fn mv(target: &mut Value, args: &[Value]) -> Result<Value, Error> {
    let map = as_object_mut(target, "mv")?;
    if let Some(Value::Object(renames)) = args.first() {
        apply_rename(map, renames);
    }
    Ok(target.clone())
}

/// Pure sibling of `mv`.
pub(crate) fn mvp(target: &mut Value, args: &[Value]) -> Result<Value, Error> {
    let mut out = as_object(target, "mvp")?.clone();
    if let Some(Value::Object(renames)) = args.first() {
        apply_rename(&mut out, renames);
    }
    Ok(Value::Object(out))
}

/// Remove the named keys, in place. Non-string arguments are ignored.
pub(crate) fn rm(target: &mut Value, args: &[Value]) -> Result<Value, Error> {
    let map = as_object_mut(target, "rm")?;
    for key in args.iter().filter_map(Value::as_str) {
        map.remove(key);
    }
    Ok(target.clone())
}

/// Pure sibling of `rm`.
pub(crate) fn rmp(target: &mut Value, args: &[Value]) -> Result<Value, Error> {
    let mut out = as_object(target, "rmp")?.clone();
    for key in args.iter().filter_map(Value::as_str) {
        out.remove(key);
    }
    Ok(Value::Object(out))
}

/// Keys of the target missing from the argument object, as an array.
pub(crate) fn not_in(target: &mut Value, args: &[Value]) -> Result<Value, Error> {
    let map = as_object(target, "notIn")?;
    let other = match args.first() {
        Some(Value::Object(o)) => Some(o),
        _ => None,
    };
    let missing = map
        .keys()
        .filter(|key| other.map(|o| !o.contains_key(*key)).unwrap_or(true))
        .map(|key| Value::String(key.clone()))
        .collect();
    Ok(Value::Array(missing))
}

/// Walk a `/`- or `.`-separated path; `Null` when any segment is absent.
pub(crate) fn getpath(target: &mut Value, args: &[Value]) -> Result<Value, Error> {
    as_object(target, "getpath")?;
    let Some(path) = args.first().and_then(Value::as_str) else {
        return Ok(Value::Null);
    };
    let mut cursor: &Value = target;
    for segment in path.split(|c| c == '/' || c == '.') {
        match cursor.get(segment) {
            Some(next) => cursor = next,
            None => return Ok(Value::Null),
        }
    }
    Ok(cursor.clone())
}

/// Set a leaf under a `/`- or `.`-separated path, in place, creating
/// intermediate objects as needed. Intermediates of another shape are
/// replaced rather than descended into.
pub(crate) fn setpath(target: &mut Value, args: &[Value]) -> Result<Value, Error> {
    as_object(target, "setpath")?;
    let (Some(path), Some(leaf)) = (args.first().and_then(Value::as_str), args.get(1)) else {
        return Ok(target.clone());
    };
    let segments: Vec<&str> = path.split(|c| c == '/' || c == '.').collect();
    let leaf_at = segments.len() - 1;
    let mut map = as_object_mut(target, "setpath")?;
    for (position, segment) in segments.iter().enumerate() {
        if position == leaf_at {
            map.insert((*segment).to_string(), leaf.clone());
        } else {
            let entry = map
                .entry((*segment).to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            map = match entry {
                Value::Object(inner) => inner,
                _ => break,
            };
        }
    }
    Ok(target.clone())
}
