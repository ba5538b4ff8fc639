//! FILENAME: tabletext/src/lib.rs
//! PURPOSE: Public entry points for encoding values into text tables.
//! CONTEXT: Thin facade wiring the flattening encoder into the renderer.
//! Callers hand in any serializable value (or a hand-built `Value` graph)
//! plus a style, and get back finished table text to print verbatim.

use serde::Serialize;

// Re-export the full public surface so callers need only this crate.
pub use encoder::{flatten, EncodeError, Scalar, Value, SUPER_FIELD};
pub use model::{
    BodyGlyphs, BoxArt, HeaderGlyphs, PathSegment, TableData, TableStyle,
};
pub use renderer::{measure_columns, render};

/// Encodes any serializable value into finished table text.
///
/// The value is flattened leaf by leaf: the first path segment of each
/// leaf selects the row, the remaining segments (joined with `.`) select
/// the column. Input shaped as a sequence or map of records therefore
/// renders one row per top-level element.
///
/// Fails only when the value contains a node the encoder does not
/// recognize; conforming inputs cannot fail.
pub fn encode_to_table<T: Serialize>(
    value: &T,
    style: &TableStyle,
) -> Result<String, EncodeError> {
    let json = serde_json::to_value(value)?;
    Ok(encode_value(&Value::from(json), style))
}

/// Encodes a hand-built value graph. Total: cannot fail.
pub fn encode_value(value: &Value, style: &TableStyle) -> String {
    let data = flatten(value);
    tracing::debug!(
        rows = data.row_keys.len(),
        columns = data.column_keys.len(),
        "encoded value into table dataset"
    );
    render(&data, style)
}
