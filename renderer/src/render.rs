//! FILENAME: renderer/src/render.rs
//! PURPOSE: Line emission - the second of the two render passes.
//! CONTEXT: Rendering is a single deterministic pass over the measured
//! columns: header rule, label line, divider rule, then one values line
//! and one rule per row. It is a total function - absent cells render
//! blank, an empty dataset still renders a header-only table, and no
//! input can fail mid-render.

use model::{TableData, TableStyle};

use crate::layout::measure_columns;

/// Renders a dataset with the given style.
///
/// Pure: rendering the same (dataset, style) pair twice yields
/// byte-identical output. The result ends in exactly one trailing
/// newline, plus one extra blank line when `add_trailing_newline` is set.
pub fn render(data: &TableData, style: &TableStyle) -> String {
    let widths = measure_columns(data, style);
    let mut output = String::new();

    let header = &style.header;
    let body = &style.body;

    // Header block: top rule, label line, divider rule.
    push_rule(
        &mut output,
        &widths,
        &header.top_leading_corner,
        &header.top,
        &header.top_join,
        &header.top_trailing_corner,
    );

    let mut labels: Vec<&str> = data.column_keys.iter().map(String::as_str).collect();
    if style.show_row_keys {
        labels.insert(0, "");
    }
    push_values(
        &mut output,
        &widths,
        style.padding_size,
        &labels,
        &header.leading,
        &header.join,
        &header.trailing,
    );

    push_rule(
        &mut output,
        &widths,
        &header.bottom_leading_corner,
        &header.bottom,
        &header.bottom_join,
        &header.bottom_trailing_corner,
    );

    // Body block: one values line per row, each followed by a rule. The
    // last row closes the table; every other row gets an interior
    // separator.
    for (position, row_key) in data.row_keys.iter().enumerate() {
        let mut values: Vec<&str> = data
            .column_keys
            .iter()
            .map(|column| data.cell(row_key, column).unwrap_or(""))
            .collect();
        if style.show_row_keys {
            values.insert(0, row_key);
        }
        push_values(
            &mut output,
            &widths,
            style.padding_size,
            &values,
            &body.leading,
            &body.inner,
            &body.trailing,
        );

        if position + 1 == data.row_keys.len() {
            push_rule(
                &mut output,
                &widths,
                &body.bottom_leading_corner,
                &body.bottom,
                &body.bottom_join,
                &body.bottom_trailing_corner,
            );
        } else {
            push_rule(
                &mut output,
                &widths,
                &body.leading_join,
                &body.bottom,
                &body.inner_join,
                &body.trailing_join,
            );
        }
    }

    if style.add_trailing_newline {
        output.push('\n');
    }

    output
}

/// Appends one line to the output.
///
/// A line that is empty after trimming trailing whitespace contributes no
/// output line at all - this is how a glyph-less style's rules vanish
/// instead of appearing as blank rows. Every kept line is emitted
/// verbatim, newline-terminated, with no trimming.
fn push_line(output: &mut String, line: String) {
    if line.trim_end().is_empty() {
        return;
    }
    output.push_str(&line);
    output.push('\n');
}

/// A horizontal rule: the line glyph repeated to each column's total
/// width, joined by the junction glyph, between the two corner glyphs.
fn push_rule(
    output: &mut String,
    widths: &[usize],
    leading: &str,
    line: &str,
    join: &str,
    trailing: &str,
) {
    let spans: Vec<String> = widths.iter().map(|width| line.repeat(*width)).collect();
    push_line(output, format!("{}{}{}", leading, spans.join(join), trailing));
}

/// A values line: each value fitted to its column's content width, with
/// padding spaces inside the border glyphs.
fn push_values(
    output: &mut String,
    widths: &[usize],
    padding_size: usize,
    values: &[&str],
    leading: &str,
    join: &str,
    trailing: &str,
) {
    let padding = " ".repeat(padding_size);
    let fitted: Vec<String> = values
        .iter()
        .zip(widths.iter())
        .map(|(value, width)| fit(value, width.saturating_sub(padding_size * 2)))
        .collect();
    let separator = format!("{}{}{}", padding, join, padding);
    push_line(
        output,
        format!(
            "{}{}{}{}{}",
            leading,
            padding,
            fitted.join(&separator),
            padding,
            trailing
        ),
    );
}

/// Left-aligns `value` in exactly `width` characters: shorter values are
/// space-padded, longer values are hard-cut. No wrapping, no ellipsis.
fn fit(value: &str, width: usize) -> String {
    let cut: String = value.chars().take(width).collect();
    format!("{:<width$}", cut, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::text_width;

    #[test]
    fn test_fit_pads_short_values() {
        assert_eq!(fit("ab", 5), "ab   ");
        assert_eq!(fit("", 3), "   ");
    }

    #[test]
    fn test_fit_hard_cuts_long_values() {
        assert_eq!(fit("toolong", 4), "tool");
        assert_eq!(text_width(&fit("toolong", 4)), 4);
    }

    #[test]
    fn test_fit_counts_characters_not_bytes() {
        assert_eq!(fit("héllo", 5), "héllo");
        assert_eq!(fit("héllo", 3), "hél");
    }

    #[test]
    fn test_push_line_drops_whitespace_only_lines() {
        let mut output = String::new();
        push_line(&mut output, "".to_string());
        push_line(&mut output, "   ".to_string());
        assert_eq!(output, "");

        push_line(&mut output, "x  ".to_string());
        // Kept lines are emitted verbatim, trailing spaces included.
        assert_eq!(output, "x  \n");
    }

    #[test]
    fn test_rule_spans_each_column_width() {
        let mut output = String::new();
        push_rule(&mut output, &[3, 5], "┌", "─", "┬", "┐");
        assert_eq!(output, "┌───┬─────┐\n");
    }
}
