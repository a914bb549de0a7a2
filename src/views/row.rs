//! RowView: a single line of cells joined by a padded separator.
//!
//! `RowView::new(0, 0, ["one", "two", "three"])` draws:
//!
//! ```text
//! one | two | three
//! ```
//!
//! Cell widths are display widths (unicode-width), not byte lengths.

use unicode_width::UnicodeWidthStr;

use crate::error::ViewError;
use crate::view::{DrawContext, View};

// ============================================================================
// ALIGNMENT
// ============================================================================

/// How a cell sits inside its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Center,
    Left,
    Right,
}

impl Alignment {
    /// Parse an alignment name.
    ///
    /// Unknown names fall back to `Center` — deliberate soft-fail, kept
    /// from the original behavior.
    pub fn parse(name: &str) -> Alignment {
        match name {
            "left" => Alignment::Left,
            "right" => Alignment::Right,
            _ => Alignment::Center,
        }
    }
}

/// Pad `text` with spaces to display width `width`.
///
/// Never truncates: text already `width` or wider comes back unchanged.
/// Centering puts the odd leftover space on the right.
pub fn pad(text: &str, width: usize, alignment: Alignment) -> String {
    let current = UnicodeWidthStr::width(text);
    if current >= width {
        return text.to_string();
    }
    let margin = width - current;
    match alignment {
        Alignment::Left => format!("{}{}", text, " ".repeat(margin)),
        Alignment::Right => format!("{}{}", " ".repeat(margin), text),
        Alignment::Center => {
            let left = margin / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(margin - left))
        }
    }
}

// ============================================================================
// ROW VIEW
// ============================================================================

/// A row of cells on one line, each padded to its column width.
#[derive(Debug)]
pub struct RowView {
    row: u16,
    col: u16,
    cells: Vec<String>,
    sizes: Vec<usize>,
    padding: usize,
    separator: String,
    align: Alignment,
}

impl RowView {
    /// Row with each column sized to its own cell — no padding applied.
    pub fn new<I, S>(row: u16, col: u16, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        let sizes = cells.iter().map(|c| UnicodeWidthStr::width(c.as_str())).collect();
        RowView {
            row,
            col,
            cells,
            sizes,
            padding: 1,
            separator: "|".to_string(),
            align: Alignment::Center,
        }
    }

    /// Row with explicit column sizes; one size per cell.
    pub fn with_sizes<I, S>(
        row: u16,
        col: u16,
        cells: I,
        sizes: Vec<usize>,
    ) -> Result<Self, ViewError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut view = Self::new(row, col, cells);
        if sizes.len() != view.cells.len() {
            return Err(ViewError::SizeMismatch {
                cells: view.cells.len(),
                sizes: sizes.len(),
            });
        }
        view.sizes = sizes;
        Ok(view)
    }

    /// Spaces on each side of the separator (default 1).
    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Separator between cells (default `|`).
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Cell alignment (default center).
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// The rendered line: padded cells joined by `pad + separator + pad`.
    pub fn render(&self) -> String {
        let padded: Vec<String> = self
            .cells
            .iter()
            .zip(&self.sizes)
            .map(|(cell, &size)| pad(cell, size, self.align))
            .collect();
        let gap = format!(
            "{pad}{sep}{pad}",
            pad = " ".repeat(self.padding),
            sep = self.separator
        );
        padded.join(&gap)
    }
}

impl View for RowView {
    fn draw(&self, ctx: &mut DrawContext<'_>) -> Result<(), ViewError> {
        ctx.draw_text(self.row, self.col, &self.render())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::MemoryScreen;

    #[test]
    fn default_sizes_apply_no_padding() {
        let row = RowView::new(0, 0, ["one", "two", "three", "four"]);
        assert_eq!(row.render(), "one | two | three | four");
    }

    #[test]
    fn rendered_width_matches_sizes_and_gaps() {
        // sum(sizes) + (2*padding + sep)*(n-1)
        let row = RowView::with_sizes(0, 0, ["a", "bb", "c"], vec![5, 5, 5]).unwrap();
        assert_eq!(row.render().len(), 15 + 3 * 2);
    }

    #[test]
    fn pad_never_truncates() {
        assert_eq!(pad("longtext", 3, Alignment::Center), "longtext");
        for align in [Alignment::Center, Alignment::Left, Alignment::Right] {
            assert_eq!(pad("ab", 6, align).len(), 6);
        }
    }

    #[test]
    fn pad_alignments() {
        assert_eq!(pad("ab", 6, Alignment::Left), "ab    ");
        assert_eq!(pad("ab", 6, Alignment::Right), "    ab");
        assert_eq!(pad("ab", 6, Alignment::Center), "  ab  ");
        // odd leftover goes right
        assert_eq!(pad("ab", 5, Alignment::Center), " ab  ");
    }

    #[test]
    fn unknown_alignment_name_falls_back_to_center() {
        assert_eq!(Alignment::parse("justified"), Alignment::Center);
        assert_eq!(Alignment::parse("left"), Alignment::Left);
        assert_eq!(Alignment::parse("right"), Alignment::Right);
        assert_eq!(Alignment::parse("center"), Alignment::Center);
    }

    #[test]
    fn size_mismatch_is_reported() {
        let err = RowView::with_sizes(0, 0, ["a", "b"], vec![3]).unwrap_err();
        assert!(matches!(
            err,
            ViewError::SizeMismatch { cells: 2, sizes: 1 }
        ));
    }

    #[test]
    fn custom_padding_and_separator() {
        let row = RowView::new(0, 0, ["x", "y"]).padding(0).separator("/");
        assert_eq!(row.render(), "x/y");

        let row = RowView::new(0, 0, ["x", "y"]).padding(2).separator("::");
        assert_eq!(row.render(), "x  ::  y");
    }

    #[test]
    fn draw_writes_at_position() {
        let row = RowView::new(2, 3, ["hi", "yo"]);
        let mut screen = MemoryScreen::new(4, 20);
        row.draw(&mut DrawContext::new(&mut screen)).unwrap();
        assert_eq!(screen.line(2), "   hi | yo");
    }

    #[test]
    fn wide_cells_measure_by_display_width() {
        // CJK chars are two columns wide
        let row = RowView::with_sizes(0, 0, ["漢字", "ab"], vec![6, 4]).unwrap();
        let rendered = row.render();
        assert_eq!(unicode_width::UnicodeWidthStr::width(rendered.as_str()), 6 + 4 + 3);
    }
}
