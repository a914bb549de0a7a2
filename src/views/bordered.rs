//! BorderedView: a fixed-size box outline with a blank interior.
//!
//! ```text
//! +-+
//! | |
//! +-+
//! ```

use crate::error::ViewError;
use crate::view::{DrawContext, View};

/// A `width x height` outline drawn from (row, col).
///
/// No content model — composites draw their own content inside.
pub struct BorderedView {
    row: u16,
    col: u16,
    width: u16,
    height: u16,
}

impl BorderedView {
    /// Requires width >= 2 (two corners) and height >= 1.
    pub fn new(row: u16, col: u16, width: u16, height: u16) -> Result<Self, ViewError> {
        if width < 2 || height < 1 {
            return Err(ViewError::InvalidGeometry { width, height });
        }
        Ok(BorderedView { row, col, width, height })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }
}

impl View for BorderedView {
    fn draw(&self, ctx: &mut DrawContext<'_>) -> Result<(), ViewError> {
        let inner = (self.width - 2) as usize;
        let edge = format!("+{}+", "-".repeat(inner));
        let middle = format!("|{}|", " ".repeat(inner));

        ctx.draw_text(self.row, self.col, &edge)?;
        for i in 1..self.height.saturating_sub(1) {
            ctx.draw_text(self.row + i, self.col, &middle)?;
        }
        if self.height > 1 {
            ctx.draw_text(self.row + self.height - 1, self.col, &edge)?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
