//! FILENAME: model/src/path.rs
//! PURPOSE: Path segments locating a leaf within a traversed value graph.
//! CONTEXT: A path is accumulated while walking from the traversal root
//! down to a leaf. The first segment selects the row a leaf lands in; the
//! remaining segments, joined with `.`, select the column.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One component of the location of a leaf: either a record field name or
/// a zero-based sequence index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

impl PathSegment {
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// The display form used when building row and column keys.
    /// Field names render verbatim; indices render in decimal.
    pub fn as_key(&self) -> String {
        match self {
            PathSegment::Field(name) => name.clone(),
            PathSegment::Index(index) => index.to_string(),
        }
    }
}

/// The ordered segments from the traversal root to a leaf.
/// Most value graphs nest only a few levels deep, so segments live inline.
pub type Path = SmallVec<[PathSegment; 8]>;

/// Joins the segments after the row key with `.` to form a column key.
/// An empty tail (a leaf directly below the root) yields the empty string,
/// producing a single unlabeled data column.
pub fn column_key(tail: &[PathSegment]) -> String {
    tail.iter()
        .map(PathSegment::as_key)
        .collect::<Vec<_>>()
        .join(".")
}
