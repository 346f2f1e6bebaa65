//! Transforms over `Value::String` targets.

use super::{as_text, scalar_text};
use crate::Error;
use serde_json::Value;

/// Substitute `%{key}` tokens from the parameter object.
///
/// Tokens with no matching parameter stay verbatim, as does the whole text
/// when the argument is missing or not an object.
pub(crate) fn sprintf(target: &mut Value, args: &[Value]) -> Result<Value, Error> {
    let text = as_text(target, "sprintf")?;
    let Some(Value::Object(params)) = args.first() else {
        return Ok(Value::String(text.to_string()));
    };
    let mut rendered = text.to_string();
    for (key, value) in params {
        let token = format!("%{{{key}}}");
        rendered = rendered.replace(&token, &scalar_text(value));
    }
    Ok(Value::String(rendered))
}

/// Reflow hard-wrapped text: leading whitespace is stripped per line and
/// single line breaks become spaces. A run of n line breaks keeps n-1 of
/// them after the joining space, so paragraph breaks survive.
pub(crate) fn trimln(target: &mut Value, _args: &[Value]) -> Result<Value, Error> {
    let text = as_text(target, "trimln")?;
    let lines: Vec<&str> = text.split('\n').map(str::trim_start).collect();
    let mut out = String::with_capacity(text.len());
    let mut position = 0;
    while position < lines.len() {
        out.push_str(lines[position]);
        let mut next = position + 1;
        while next < lines.len() && lines[next].is_empty() {
            next += 1;
        }
        if next < lines.len() {
            out.push(' ');
            for _ in (position + 1)..next {
                out.push('\n');
            }
        }
        position = next;
    }
    Ok(Value::String(out))
}

pub(crate) fn uc(target: &mut Value, _args: &[Value]) -> Result<Value, Error> {
    let text = as_text(target, "uc")?;
    Ok(Value::String(text.to_uppercase()))
}

pub(crate) fn lc(target: &mut Value, _args: &[Value]) -> Result<Value, Error> {
    let text = as_text(target, "lc")?;
    Ok(Value::String(text.to_lowercase()))
}

/// Titlecase words longer than one character; single-character words (the
/// articles in practice) keep their case.
pub(crate) fn tc(target: &mut Value, _args: &[Value]) -> Result<Value, Error> {
    let text = as_text(target, "tc")?;
    let mut out = String::with_capacity(text.len());
    let mut word = String::new();
    for ch in text.chars() {
        if ch.is_whitespace() {
            flush_word(&mut out, &mut word);
            out.push(ch);
        } else {
            word.push(ch);
        }
    }
    flush_word(&mut out, &mut word);
    Ok(Value::String(out))
}

fn flush_word(out: &mut String, word: &mut String) {
    if word.chars().count() > 1 {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    } else {
        out.push_str(word);
    }
    word.clear();
}
