//! FILENAME: encoder/src/flatten.rs
//! PURPOSE: Depth-first flattening of a value graph into row/column cells.
//! CONTEXT: This is the encoding visitor. It walks a `Value` of statically
//! unknown shape and records every leaf into a `TableData`: the first path
//! segment becomes the row key, the dot-joined remainder the column key.
//! The encoder is designed for input shaped as "a sequence of records" or
//! "a map of records" - each top-level element becomes one row and every
//! field path below it a dotted column name.

use model::{Path, PathSegment, TableData};

use crate::value::Value;

/// Text recorded for an absent (nil) leaf.
const NIL_TEXT: &str = "nil";

/// Flattens a value graph into a table dataset.
///
/// Total over the tagged value graph: every node kind has a defined
/// handling, so this cannot fail. Row and column keys keep first-encounter
/// order. A scalar or nil passed as the whole input has no row key to
/// select and yields an empty dataset.
pub fn flatten(value: &Value) -> TableData {
    let mut data = TableData::new();
    walk(value, &Path::new(), &mut data);
    data
}

/// Recurses into one node.
///
/// Each child receives its own appended copy of the path (append-and-pass,
/// no shared path buffer), while the dataset is the single exclusively
/// owned accumulator threaded down the call stack.
fn walk(node: &Value, path: &Path, data: &mut TableData) {
    match node {
        Value::Keyed(fields) => {
            for (name, child) in fields {
                let mut child_path = path.clone();
                child_path.push(PathSegment::field(name.as_str()));
                walk(child, &child_path, data);
            }
        }
        Value::Sequence(items) => {
            for (index, child) in items.iter().enumerate() {
                let mut child_path = path.clone();
                child_path.push(PathSegment::Index(index));
                walk(child, &child_path, data);
            }
        }
        Value::Scalar(scalar) => data.record(path, scalar.to_text()),
        Value::Nil => data.record(path, NIL_TEXT.to_string()),
    }
}
