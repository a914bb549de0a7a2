//! GridView: a block of rows sharing one set of column widths.
//!
//! ```text
//! one | two | three
//!  1  |  2  |   3
//! ```
//!
//! Column widths are derived once at construction: the widest cell down
//! each column wins. Ragged input is rejected up front so drawing can
//! never hit a mismatched index.

use unicode_width::UnicodeWidthStr;

use crate::error::ViewError;
use crate::view::{DrawContext, View};
use crate::views::row::{Alignment, RowView};

/// Rows of cells rendered as stacked [`RowView`]s with shared sizing.
#[derive(Debug)]
pub struct GridView {
    row: u16,
    col: u16,
    rows: Vec<Vec<String>>,
    sizes: Vec<usize>,
    padding: usize,
    separator: String,
    align: Alignment,
}

impl GridView {
    /// Grid with column widths derived from the widest cell per column.
    pub fn new<I, R, S>(row: u16, col: u16, rows: I) -> Result<Self, ViewError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|r| r.into_iter().map(Into::into).collect())
            .collect();
        check_rectangular(&rows)?;
        let sizes = calculate_sizes(&rows);
        Ok(GridView {
            row,
            col,
            rows,
            sizes,
            padding: 1,
            separator: "|".to_string(),
            align: Alignment::Center,
        })
    }

    /// Grid with explicit column widths; one per column.
    pub fn with_sizes<I, R, S>(
        row: u16,
        col: u16,
        rows: I,
        sizes: Vec<usize>,
    ) -> Result<Self, ViewError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut grid = Self::new(row, col, rows)?;
        let columns = grid.rows.first().map_or(0, Vec::len);
        if sizes.len() != columns {
            return Err(ViewError::SizeMismatch {
                cells: columns,
                sizes: sizes.len(),
            });
        }
        grid.sizes = sizes;
        Ok(grid)
    }

    /// Spaces on each side of the separator (default 1), shared by all rows.
    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Separator between cells (default `|`), shared by all rows.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Cell alignment (default center), shared by all rows.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Shared column widths.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }
}

/// Every row must have the first row's column count.
fn check_rectangular(rows: &[Vec<String>]) -> Result<(), ViewError> {
    let Some(first) = rows.first() else {
        return Ok(());
    };
    for (i, row) in rows.iter().enumerate().skip(1) {
        if row.len() != first.len() {
            return Err(ViewError::MalformedGrid {
                row: i,
                expected: first.len(),
                found: row.len(),
            });
        }
    }
    Ok(())
}

/// Max display width down each column. Assumes rectangular input.
fn calculate_sizes(rows: &[Vec<String>]) -> Vec<usize> {
    let columns = rows.first().map_or(0, Vec::len);
    (0..columns)
        .map(|j| {
            rows.iter()
                .map(|r| UnicodeWidthStr::width(r[j].as_str()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

impl View for GridView {
    fn draw(&self, ctx: &mut DrawContext<'_>) -> Result<(), ViewError> {
        for (i, cells) in self.rows.iter().enumerate() {
            let line = RowView::with_sizes(
                self.row + i as u16,
                self.col,
                cells.iter().map(String::as_str),
                self.sizes.clone(),
            )?
            .padding(self.padding)
            .separator(self.separator.as_str())
            .align(self.align);
            line.draw(ctx)?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
