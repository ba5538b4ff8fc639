//! FILENAME: model/src/lib.rs
//! PURPOSE: Main library entry point for the table data model.
//! CONTEXT: Re-exports the dataset, path, and style types shared by the
//! flattening encoder and the renderer. The renderer depends only on the
//! types defined here, never on the encoder itself.

pub mod dataset;
pub mod path;
pub mod style;

// Re-export commonly used types at the crate root
pub use dataset::TableData;
pub use path::{column_key, Path, PathSegment};
pub use style::{
    BodyGlyphs, BoxArt, HeaderGlyphs, TableStyle, HEAVY_BOX_ART, LIGHT_BOX_ART,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_records_leaves() {
        let mut data = TableData::new();
        data.record(
            &[PathSegment::Index(0), PathSegment::field("name")],
            "Mario".to_string(),
        );
        assert_eq!(data.cell("0", "name"), Some("Mario"));
    }

    #[test]
    fn it_builds_styles() {
        let style = TableStyle::whitespace();
        assert_eq!(style.padding_size, 0);

        let boxed = TableStyle::default();
        assert_eq!(boxed.padding_size, 1);
    }

    #[test]
    fn integration_test_dataset_from_paths() {
        let mut data = TableData::new();

        // Two records in a sequence, overlapping on one field.
        data.record(
            &[PathSegment::Index(0), PathSegment::field("name")],
            "Mario".to_string(),
        );
        data.record(
            &[PathSegment::Index(0), PathSegment::field("color")],
            "red".to_string(),
        );
        data.record(
            &[PathSegment::Index(1), PathSegment::field("name")],
            "Yoshi".to_string(),
        );

        assert_eq!(data.row_keys, vec!["0", "1"]);
        assert_eq!(data.column_keys, vec!["name", "color"]);
        assert_eq!(data.cell("1", "color"), None);
    }

    #[test]
    fn integration_test_box_art_builds_render_ready_styles() {
        let style = TableStyle::from_box_art(HEAVY_BOX_ART, LIGHT_BOX_ART).unwrap();
        assert_eq!(style.header.top_leading_corner, "┏");
        assert_eq!(style.body.bottom_trailing_corner, "┘");
        // Art-built styles start from the plain defaults.
        assert_eq!(style.padding_size, 0);
    }
}
