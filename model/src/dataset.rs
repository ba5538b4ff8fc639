//! FILENAME: model/src/dataset.rs
//! PURPOSE: The sparse row/column cell storage a value graph flattens into.
//! CONTEXT: This file defines `TableData`, the dataset handed from the
//! flattening encoder to the renderer. It uses a sparse storage strategy
//! (nested maps) because rows rarely populate every column - a (row,
//! column) pair with no entry simply renders as a blank cell.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::path::{column_key, PathSegment};

/// The flattened dataset: ordered row keys, ordered column keys, and a
/// sparse mapping of cell text.
///
/// Key order is first-encounter order during traversal and is preserved
/// verbatim into rendering - it is never sorted. A dataset is built once
/// per encode call and discarded after rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableData {
    /// Row keys in the order they will be displayed.
    pub row_keys: Vec<String>,

    /// Column keys in the order they will be displayed.
    pub column_keys: Vec<String>,

    /// Cell text keyed by row key, then column key.
    pub cells: FxHashMap<String, FxHashMap<String, String>>,
}

impl TableData {
    /// Creates a new, empty dataset.
    pub fn new() -> Self {
        TableData {
            row_keys: Vec::new(),
            column_keys: Vec::new(),
            cells: FxHashMap::default(),
        }
    }

    /// Records one leaf at the given path.
    ///
    /// The first segment selects the row; the remaining segments, joined
    /// with `.`, select the column (the empty string for a leaf directly
    /// below the root). Keys seen for the first time are appended to the
    /// ordered key lists. A leaf at the traversal root itself (empty path)
    /// has no row to land in and records nothing.
    pub fn record(&mut self, path: &[PathSegment], text: String) {
        if path.is_empty() {
            return;
        }

        let row_key = path[0].as_key();
        let col_key = column_key(&path[1..]);

        if !self.row_keys.contains(&row_key) {
            self.row_keys.push(row_key.clone());
        }
        if !self.column_keys.contains(&col_key) {
            self.column_keys.push(col_key.clone());
        }

        self.cells.entry(row_key).or_default().insert(col_key, text);
    }

    /// Looks up the text recorded for a (row, column) pair.
    /// Absent cells are a normal condition, not an error.
    pub fn cell(&self, row_key: &str, column_key: &str) -> Option<&str> {
        self.cells
            .get(row_key)
            .and_then(|row| row.get(column_key))
            .map(String::as_str)
    }

    /// True when no leaf has been recorded.
    pub fn is_empty(&self) -> bool {
        self.row_keys.is_empty()
    }
}
