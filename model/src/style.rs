//! FILENAME: model/src/style.rs
//! PURPOSE: Border glyph sets and layout options for table rendering.
//! CONTEXT: A `TableStyle` is immutable configuration supplied by the
//! caller: two independently configured glyph sets (header and body) plus
//! padding and row-key options. Glyphs are strings because an empty glyph
//! is meaningful - the whitespace preset builds its rules entirely from
//! empty glyphs, which render as nothing.

use serde::{Deserialize, Serialize};

// ============================================================================
// GLYPH SETS
// ============================================================================

/// Glyphs for the header block: the top rule, the label line, and the rule
/// separating the header from the body. The bottom rule may use a different
/// line weight than the top one (the default preset joins a heavy header to
/// a light body through half-weight junctions).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderGlyphs {
    #[serde(default)]
    pub top_leading_corner: String,
    #[serde(default)]
    pub top: String,
    #[serde(default)]
    pub top_join: String,
    #[serde(default)]
    pub top_trailing_corner: String,

    #[serde(default)]
    pub leading: String,
    #[serde(default)]
    pub join: String,
    #[serde(default)]
    pub trailing: String,

    #[serde(default)]
    pub bottom_leading_corner: String,
    #[serde(default)]
    pub bottom: String,
    #[serde(default)]
    pub bottom_join: String,
    #[serde(default)]
    pub bottom_trailing_corner: String,
}

/// Glyphs for the body block: the value lines, the interior separators
/// between rows, and the rule that closes the table after the last row.
/// `bottom` is the line glyph for both the interior separators and the
/// closing rule; only the corner/junction glyphs differ between the two.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyGlyphs {
    #[serde(default)]
    pub leading: String,
    #[serde(default)]
    pub inner: String,
    #[serde(default)]
    pub trailing: String,

    #[serde(default)]
    pub leading_join: String,
    #[serde(default)]
    pub inner_join: String,
    #[serde(default)]
    pub trailing_join: String,

    #[serde(default)]
    pub bottom_leading_corner: String,
    #[serde(default)]
    pub bottom: String,
    #[serde(default)]
    pub bottom_join: String,
    #[serde(default)]
    pub bottom_trailing_corner: String,
}

// ============================================================================
// TABLE STYLE
// ============================================================================

/// The complete style configuration for one render call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStyle {
    /// Glyphs for the header block.
    pub header: HeaderGlyphs,

    /// Glyphs for the body block.
    pub body: BodyGlyphs,

    /// When true, a synthetic leading column holds the row key labels
    /// under an empty header label. Defaults to `false`.
    #[serde(default)]
    pub show_row_keys: bool,

    /// Spaces added to both sides of every value in the table.
    /// Defaults to `0`.
    #[serde(default)]
    pub padding_size: usize,

    /// When true, one extra blank line follows the newline that already
    /// terminates the output. Defaults to `false`.
    #[serde(default)]
    pub add_trailing_newline: bool,
}

impl TableStyle {
    pub fn new(header: HeaderGlyphs, body: BodyGlyphs) -> Self {
        TableStyle {
            header,
            body,
            show_row_keys: false,
            padding_size: 0,
            add_trailing_newline: false,
        }
    }

    /// Columns separated by a single space, no border glyphs, no padding.
    /// The glyph-less rules render as nothing, so the output is just the
    /// label line followed by one line per row.
    pub fn whitespace() -> Self {
        TableStyle::new(
            HeaderGlyphs {
                join: " ".to_string(),
                ..HeaderGlyphs::default()
            },
            BodyGlyphs {
                inner: " ".to_string(),
                ..BodyGlyphs::default()
            },
        )
    }

    /// Light box-drawing lines throughout, with one space of padding.
    pub fn light() -> Self {
        let mut style = TableStyle::new(
            HeaderGlyphs {
                top_leading_corner: "┌".to_string(),
                top: "─".to_string(),
                top_join: "┬".to_string(),
                top_trailing_corner: "┐".to_string(),
                leading: "│".to_string(),
                join: "│".to_string(),
                trailing: "│".to_string(),
                bottom_leading_corner: "├".to_string(),
                bottom: "─".to_string(),
                bottom_join: "┼".to_string(),
                bottom_trailing_corner: "┤".to_string(),
            },
            light_body(),
        );
        style.padding_size = 1;
        style
    }

    /// Builds a style from two four-line box-drawing grids, one for the
    /// header block and one for the body block (see [`BoxArt`]).
    /// Returns `None` when either grid is malformed.
    pub fn from_box_art(header_art: &str, body_art: &str) -> Option<Self> {
        let header = BoxArt::parse(header_art)?.header_glyphs();
        let body = BoxArt::parse(body_art)?.body_glyphs();
        Some(TableStyle::new(header, body))
    }
}

impl Default for TableStyle {
    /// Heavy-line header over a light-line body, separated by a
    /// half-weight divider row, with one space of padding.
    fn default() -> Self {
        let mut style = TableStyle::new(
            HeaderGlyphs {
                top_leading_corner: "┏".to_string(),
                top: "━".to_string(),
                top_join: "┳".to_string(),
                top_trailing_corner: "┓".to_string(),
                leading: "┃".to_string(),
                join: "┃".to_string(),
                trailing: "┃".to_string(),
                bottom_leading_corner: "┡".to_string(),
                bottom: "━".to_string(),
                bottom_join: "╇".to_string(),
                bottom_trailing_corner: "┩".to_string(),
            },
            light_body(),
        );
        style.padding_size = 1;
        style
    }
}

/// The light-line body shared by the boxed presets.
fn light_body() -> BodyGlyphs {
    BodyGlyphs {
        leading: "│".to_string(),
        inner: "│".to_string(),
        trailing: "│".to_string(),
        leading_join: "├".to_string(),
        inner_join: "┼".to_string(),
        trailing_join: "┤".to_string(),
        bottom_leading_corner: "└".to_string(),
        bottom: "─".to_string(),
        bottom_join: "┴".to_string(),
        bottom_trailing_corner: "┘".to_string(),
    }
}

// ============================================================================
// BOX ART
// ============================================================================

/// The light box-drawing grid (U+250x range).
pub const LIGHT_BOX_ART: &str = "┌─┬┐\n│ ││\n├─┼┤\n└─┴┘";

/// The heavy box-drawing grid (U+250x range, heavy variants).
pub const HEAVY_BOX_ART: &str = "┏━┳┓\n┃ ┃┃\n┣━╋┫\n┗━┻┛";

/// A four-line, four-column glyph grid from which corner, line, and
/// junction glyphs are read by position:
///
/// ```text
/// ┌─┬┐   row 0: top rule
/// │ ││   row 1: value line
/// ├─┼┤   row 2: interior separator / header divider
/// └─┴┘   row 3: closing rule
/// ```
#[derive(Debug, Clone)]
pub struct BoxArt {
    grid: [[char; 4]; 4],
}

impl BoxArt {
    /// Parses a grid of four lines with four glyphs each.
    /// Returns `None` when a line is missing or too short.
    pub fn parse(art: &str) -> Option<Self> {
        let mut grid = [[' '; 4]; 4];
        let mut lines = art.lines();
        for row in grid.iter_mut() {
            let mut chars = lines.next()?.chars();
            for slot in row.iter_mut() {
                *slot = chars.next()?;
            }
        }
        Some(BoxArt { grid })
    }

    fn glyph(&self, row: usize, col: usize) -> String {
        self.grid[row][col].to_string()
    }

    /// Header glyphs read from the grid: the top rule from row 0, the
    /// label line from row 1, and the divider from row 2.
    pub fn header_glyphs(&self) -> HeaderGlyphs {
        HeaderGlyphs {
            top_leading_corner: self.glyph(0, 0),
            top: self.glyph(0, 1),
            top_join: self.glyph(0, 2),
            top_trailing_corner: self.glyph(0, 3),
            leading: self.glyph(1, 0),
            join: self.glyph(1, 2),
            trailing: self.glyph(1, 3),
            bottom_leading_corner: self.glyph(2, 0),
            bottom: self.glyph(2, 1),
            bottom_join: self.glyph(2, 2),
            bottom_trailing_corner: self.glyph(2, 3),
        }
    }

    /// Body glyphs read from the grid: value lines from row 1, interior
    /// separators from row 2, and the closing rule from row 3.
    pub fn body_glyphs(&self) -> BodyGlyphs {
        BodyGlyphs {
            leading: self.glyph(1, 0),
            inner: self.glyph(1, 2),
            trailing: self.glyph(1, 3),
            leading_join: self.glyph(2, 0),
            inner_join: self.glyph(2, 2),
            trailing_join: self.glyph(2, 3),
            bottom_leading_corner: self.glyph(3, 0),
            bottom: self.glyph(3, 1),
            bottom_join: self.glyph(3, 2),
            bottom_trailing_corner: self.glyph(3, 3),
        }
    }
}
