// src/registry/functions.rs
// =============================================================================
// Adapters between template values and the typed helpers in `links`.
//
// Each adapter checks the argument count, converts positional arguments
// to Rust types, calls the helper, and converts the result back.
//
// Coercion rules:
// - url:       string; null counts as ""
// - strip_www: bool, or a number (0 is false, anything else true);
//              missing or null means false
// - limit:     non-negative integer, also written as a float like 8.0;
//              missing, null or false means no limit
// =============================================================================

use serde_json::Value;

use super::CallError;
use crate::links::{self, DomainOptions, SiteContext};

pub(super) fn is_external_url(site: &SiteContext, args: &[Value]) -> Result<Value, CallError> {
    const NAME: &str = "is_external_url";
    check_arity(NAME, args, 1, 1)?;
    let url = url_arg(NAME, args, 0)?;

    Ok(Value::Bool(links::is_external_url(url, site)))
}

// Templates test the result directly ({% if get_link_attributes(url) %}),
// so an absent result is `false` rather than an empty string
pub(super) fn get_link_attributes(site: &SiteContext, args: &[Value]) -> Result<Value, CallError> {
    const NAME: &str = "get_link_attributes";
    check_arity(NAME, args, 1, 1)?;
    let url = url_arg(NAME, args, 0)?;

    Ok(match links::get_link_attributes(url, site) {
        Some(attributes) => Value::String(attributes),
        None => Value::Bool(false),
    })
}

pub(super) fn url_to_domain(_site: &SiteContext, args: &[Value]) -> Result<Value, CallError> {
    const NAME: &str = "url_to_domain";
    check_arity(NAME, args, 1, 3)?;
    let url = url_arg(NAME, args, 0)?;
    let options = DomainOptions {
        strip_www: bool_arg(NAME, args, 1)?,
        limit: limit_arg(NAME, args, 2)?,
    };

    Ok(Value::String(links::url_to_domain(url, options)))
}

pub(super) fn make_anchor_link(_site: &SiteContext, args: &[Value]) -> Result<Value, CallError> {
    const NAME: &str = "make_anchor_link";
    check_arity(NAME, args, 1, 1)?;
    let url = url_arg(NAME, args, 0)?;

    Ok(Value::String(links::make_anchor_link(url)))
}

fn check_arity(name: &'static str, args: &[Value], min: usize, max: usize) -> Result<(), CallError> {
    if (min..=max).contains(&args.len()) {
        Ok(())
    } else {
        Err(CallError::Arity {
            name,
            min,
            max,
            got: args.len(),
        })
    }
}

fn url_arg<'a>(name: &'static str, args: &'a [Value], index: usize) -> Result<&'a str, CallError> {
    match args.get(index) {
        Some(Value::String(url)) => Ok(url.as_str()),
        None | Some(Value::Null) => Ok(""),
        Some(other) => Err(type_error(name, index, "a string", other)),
    }
}

fn bool_arg(name: &'static str, args: &[Value], index: usize) -> Result<bool, CallError> {
    match args.get(index) {
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(Value::Number(number)) => Ok(number.as_f64().map_or(false, |n| n != 0.0)),
        None | Some(Value::Null) => Ok(false),
        Some(other) => Err(type_error(name, index, "a boolean", other)),
    }
}

fn limit_arg(name: &'static str, args: &[Value], index: usize) -> Result<Option<usize>, CallError> {
    match args.get(index) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::Number(number)) => whole_number(number)
            .and_then(|limit| usize::try_from(limit).ok())
            .map(Some)
            .ok_or_else(|| type_error(name, index, "a non-negative integer", &args[index])),
        Some(other) => Err(type_error(name, index, "a non-negative integer or false", other)),
    }
}

// 8 and 8.0 are the same limit; 8.5 and -1 are not limits at all
fn whole_number(number: &serde_json::Number) -> Option<u64> {
    if let Some(n) = number.as_u64() {
        return Some(n);
    }
    number
        .as_f64()
        .filter(|n| n.fract() == 0.0 && *n >= 0.0 && *n <= u64::MAX as f64)
        .map(|n| n as u64)
}

// Positions in messages are 1-based, the way template authors count
fn type_error(name: &'static str, index: usize, expected: &'static str, got: &Value) -> CallError {
    CallError::ArgumentType {
        name,
        position: index + 1,
        expected,
        got: got.to_string(),
    }
}
