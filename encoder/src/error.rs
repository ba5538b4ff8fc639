//! FILENAME: encoder/src/error.rs

use thiserror::Error;

/// The single failure mode of encoding: the input contained a node the
/// encoder cannot classify as a keyed record, a sequence, a scalar, or
/// nil. Conforming inputs never hit this - it signals a defect in the
/// caller's value, not a runtime condition.
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("unrecognized node: {0}")]
    UnrecognizedNode(#[from] serde_json::Error),
}
