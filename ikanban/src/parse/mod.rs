//! Forgiving input parsing for board operations
//!
//! The parser accepts several spellings of the same request and normalizes
//! them to [`OpRequest`]s:
//!
//! - `{"op": "move card", ...}` (also `"operation"`, `"action"`)
//! - `{"verb": "move", "noun": "card", ...}`
//! - `{"move": "card", ...}`
//! - bare data, from which the operation is inferred

use crate::error::{BoardError, Result};
use crate::types::{Noun, OpRequest, Verb};
use serde_json::{Map, Value};

/// Keys that carry request metadata rather than parameters
const META_KEYS: &[&str] = &["actor", "note"];

/// Parse input JSON into one or more requests
pub fn parse_input(input: Value) -> Result<Vec<OpRequest>> {
    match input {
        Value::Array(arr) => arr.into_iter().map(parse_single).collect(),
        Value::Object(obj) => Ok(vec![parse_single(Value::Object(obj))?]),
        _ => Err(BoardError::parse("input must be an object or array")),
    }
}

/// Parse a single request from JSON
fn parse_single(input: Value) -> Result<OpRequest> {
    let Value::Object(obj) = input else {
        return Err(BoardError::parse("operation must be an object"));
    };

    let (verb, noun, mut params) = extract_operation(&obj)?;
    let actor = obj.get("actor").and_then(|v| v.as_str()).map(str::to_string);

    normalize_params(noun, &mut params);

    let request = OpRequest::new(verb, noun, params);
    Ok(match actor {
        Some(actor) => request.with_actor(actor),
        None => request,
    })
}

fn extract_operation(obj: &Map<String, Value>) -> Result<(Verb, Noun, Map<String, Value>)> {
    // "op" string
    for key in ["op", "operation", "action"] {
        if let Some(op) = obj.get(key).and_then(|v| v.as_str()) {
            return parse_op_string(op)
                .map(|(verb, noun)| (verb, noun, without_keys(obj, &["op", "operation", "action"])))
                .ok_or_else(|| BoardError::UnknownOperation { op: op.to_string() });
        }
    }

    // separate verb and noun fields
    let verb = obj.get("verb").and_then(|v| v.as_str());
    let noun = obj.get("noun").or_else(|| obj.get("target")).and_then(|v| v.as_str());
    if let (Some(verb_str), Some(noun_str)) = (verb, noun) {
        return match (Verb::from_alias(verb_str), Noun::parse(noun_str)) {
            (Some(verb), Some(noun)) => {
                Ok((verb, noun, without_keys(obj, &["verb", "noun", "target"])))
            }
            _ => Err(BoardError::UnknownOperation {
                op: format!("{verb_str} {noun_str}"),
            }),
        };
    }

    // shorthand: {"archive": "card", ...}
    for (key, value) in obj {
        let Some(verb) = Verb::from_alias(key) else {
            continue;
        };
        if let Some(noun) = value.as_str().and_then(Noun::parse) {
            return Ok((verb, noun, without_keys(obj, &[key.as_str()])));
        }
    }

    if let Some((verb, noun)) = infer_operation(obj) {
        return Ok((verb, noun, without_keys(obj, &[])));
    }

    Err(BoardError::parse("cannot determine operation from input"))
}

/// Parse an op string such as "move card", "list archived cards" or
/// "update-background". The first word is the verb, the rest the noun.
fn parse_op_string(s: &str) -> Option<(Verb, Noun)> {
    let s = s.trim();
    let (verb, noun) = match s.split_once(char::is_whitespace) {
        Some(parts) => parts,
        None => s.split_once(['-', '_'])?,
    };
    Some((Verb::from_alias(verb)?, Noun::parse(noun)?))
}

/// Guess the operation from the keys present
fn infer_operation(obj: &Map<String, Value>) -> Option<(Verb, Noun)> {
    let has = |keys: &[&str]| keys.iter().any(|k| obj.contains_key(*k));

    if obj.is_empty() {
        return Some((Verb::Get, Noun::Board));
    }
    if has(&["item_index", "itemIndex"]) && has(&["checked"]) {
        return Some((Verb::Toggle, Noun::Task));
    }
    if has(&["from_column_id", "fromColumnId"]) && has(&["to_column_id", "toColumnId"]) {
        return Some((Verb::Move, Noun::Card));
    }
    if has(&["from_index", "fromIndex"]) && has(&["to_index", "toIndex"]) {
        return Some((Verb::Reorder, Noun::Column));
    }
    let has_card = has(&["card_id", "cardId"]);
    if has(&["column_id", "columnId"]) && has(&["title"]) {
        return Some(if has_card {
            (Verb::Update, Noun::Card)
        } else {
            (Verb::Create, Noun::Card)
        });
    }

    None
}

fn without_keys(obj: &Map<String, Value>, keys: &[&str]) -> Map<String, Value> {
    obj.iter()
        .filter(|(k, _)| !keys.contains(&k.as_str()) && !META_KEYS.contains(&k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// snake_case keys, string shorthands for checklist items and links, and a
/// flat `{kind, value}` background
fn normalize_params(noun: Noun, params: &mut Map<String, Value>) {
    let keys: Vec<String> = params.keys().cloned().collect();
    for key in keys {
        let snake = to_snake_case(&key);
        if snake != key && !params.contains_key(&snake) {
            if let Some(value) = params.remove(&key) {
                params.insert(snake, value);
            }
        }
    }

    expand_strings(params, "checklist", "text");
    expand_strings(params, "links", "url");

    if noun == Noun::Background && !params.contains_key("background") {
        let kind = params.remove("kind").or_else(|| params.remove("type"));
        match (kind, params.remove("value")) {
            (Some(kind), Some(value)) => {
                params.insert(
                    "background".to_string(),
                    serde_json::json!({ "kind": kind, "value": value }),
                );
            }
            (kind, value) => {
                if let Some(kind) = kind {
                    params.insert("kind".to_string(), kind);
                }
                if let Some(value) = value {
                    params.insert("value".to_string(), value);
                }
            }
        }
    }
}

/// Turn `["a", {...}]` into `[{field: "a"}, {...}]`
fn expand_strings(params: &mut Map<String, Value>, key: &str, field: &str) {
    if let Some(Value::Array(items)) = params.get_mut(key) {
        for item in items.iter_mut() {
            if let Value::String(s) = item {
                let mut obj = Map::new();
                obj.insert(field.to_string(), Value::String(std::mem::take(s)));
                *item = Value::Object(obj);
            }
        }
    }
}

/// camelCase to snake_case
fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result
}
