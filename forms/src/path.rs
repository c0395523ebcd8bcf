//! Dotted field paths into a record (`items.0.quantity`, `tasks.greasing`).
//!
//! Numeric segments index arrays; everything else indexes objects. The same
//! path strings key validation errors, so a renderer can look up the error for
//! the widget it is drawing.

use serde_json::{Map, Value};

use crate::Record;

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

/// Join a prefix and a segment (`""` + `name` → `name`).
#[must_use]
pub fn join(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_owned()
    } else {
        format!("{prefix}.{segment}")
    }
}

/// Read the value at `path`, if present.
#[must_use]
pub fn get<'a>(record: &'a Record, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = record.get(segments.next()?)?;
    for segment in segments {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Write `value` at `path`, creating intermediate objects as needed.
///
/// Returns `false` when the path crosses a scalar or indexes past the end of
/// an array; the record is left unchanged in that case.
pub fn set(record: &mut Record, path: &str, value: Value) -> bool {
    let segments: Vec<&str> = path.split('.').collect();
    let Some((last, parents)) = segments.split_last() else {
        return false;
    };
    if parents.is_empty() {
        record.insert((*last).to_owned(), value);
        return true;
    }

    let mut current = record
        .entry(parents[0].to_owned())
        .or_insert_with(|| Value::Object(Map::new()));
    for segment in &parents[1..] {
        let Some(next) = step_mut(current, segment) else {
            return false;
        };
        current = next;
    }

    match current {
        Value::Null => {
            let mut map = Map::new();
            map.insert((*last).to_owned(), value);
            *current = Value::Object(map);
            true
        }
        Value::Object(map) => {
            map.insert((*last).to_owned(), value);
            true
        }
        Value::Array(items) => match last.parse::<usize>().ok().and_then(|i| items.get_mut(i)) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        },
        _ => false,
    }
}

fn step_mut<'a>(current: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    if current.is_null() {
        *current = Value::Object(Map::new());
    }
    match current {
        Value::Object(map) => Some(map.entry(segment.to_owned()).or_insert(Value::Null)),
        Value::Array(items) => items.get_mut(segment.parse::<usize>().ok()?),
        _ => None,
    }
}
