//! FILENAME: renderer/src/layout.rs
//! PURPOSE: Column width measurement - the first of the two render passes.
//! CONTEXT: Widths are computed once, globally, before any line is drawn,
//! so every value line in the output shares one total width.

use model::{TableData, TableStyle};

/// Character count of a cell or label. Widths are simple character
/// counts; no display-width correction is applied.
pub(crate) fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Computes the total width of every column, in column-key order.
///
/// A column is as wide as its widest cell or its own key label, plus
/// padding on both sides. When row keys are shown, a synthetic leading
/// column sized to the widest row key is prepended.
pub fn measure_columns(data: &TableData, style: &TableStyle) -> Vec<usize> {
    let pad = style.padding_size * 2;

    let mut widths: Vec<usize> = data
        .column_keys
        .iter()
        .map(|key| {
            let widest_cell = data
                .row_keys
                .iter()
                .filter_map(|row| data.cell(row, key))
                .map(text_width)
                .max()
                .unwrap_or(0);
            widest_cell.max(text_width(key)) + pad
        })
        .collect();

    if style.show_row_keys {
        let widest_key = data
            .row_keys
            .iter()
            .map(|key| text_width(key))
            .max()
            .unwrap_or(0);
        widths.insert(0, widest_key + pad);
    }

    widths
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::PathSegment as Seg;

    fn sample() -> TableData {
        let mut data = TableData::new();
        data.record(&[Seg::field("a"), Seg::field("name")], "Mario".to_string());
        data.record(&[Seg::field("bb"), Seg::field("name")], "Yo".to_string());
        data.record(&[Seg::field("a"), Seg::field("x")], "1".to_string());
        data
    }

    #[test]
    fn test_width_is_widest_cell_or_key() {
        let widths = measure_columns(&sample(), &TableStyle::whitespace());
        // "name" column: widest cell "Mario" (5) beats the key (4).
        // "x" column: the key and the only cell are both width 1.
        assert_eq!(widths, vec![5, 1]);
    }

    #[test]
    fn test_width_includes_padding_on_both_sides() {
        let mut style = TableStyle::whitespace();
        style.padding_size = 2;
        let widths = measure_columns(&sample(), &style);
        assert_eq!(widths, vec![9, 5]);
    }

    #[test]
    fn test_row_key_column_is_prepended() {
        let mut style = TableStyle::whitespace();
        style.show_row_keys = true;
        let widths = measure_columns(&sample(), &style);
        // The synthetic column is sized to the widest row key ("bb").
        assert_eq!(widths, vec![2, 5, 1]);
    }

    #[test]
    fn test_empty_dataset_measures_no_columns() {
        let widths = measure_columns(&TableData::new(), &TableStyle::default());
        assert!(widths.is_empty());
    }

    #[test]
    fn test_widths_use_character_counts() {
        let mut data = TableData::new();
        data.record(&[Seg::field("r"), Seg::field("c")], "héllo".to_string());
        let widths = measure_columns(&data, &TableStyle::whitespace());
        assert_eq!(widths, vec![5]);
    }
}
