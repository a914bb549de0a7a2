//! Error kinds reported by views and the controller.
//!
//! Every failure mode gets a named variant instead of an index fault:
//! popping an empty stack, ragged grids, degenerate geometry. Errors are
//! fatal to the current draw or event cycle but never corrupt view-stack
//! state — constructors validate up front and the controller leaves the
//! stack untouched on a failed pop.

use std::io;

/// Error produced by view construction, drawing, or the controller.
#[derive(Debug)]
pub enum ViewError {
    /// The controller was asked for an active view (or to pop below one
    /// remaining view) with nothing usable on the stack.
    EmptyViewStack,

    /// A grid row has a different column count than the first row.
    MalformedGrid {
        /// Index of the offending row.
        row: usize,
        /// Column count established by the first row.
        expected: usize,
        /// Column count actually found.
        found: usize,
    },

    /// An explicit sizes vector does not match the cell count.
    SizeMismatch { cells: usize, sizes: usize },

    /// Bordered box below the drawable minimum (width >= 2, height >= 1).
    InvalidGeometry { width: u16, height: u16 },

    /// A menu choice or menu view was built with zero entries.
    EmptyMenu,

    /// The screen surface failed underneath a draw or present pass.
    Screen(io::Error),
}

impl std::fmt::Display for ViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewError::EmptyViewStack => {
                write!(f, "view stack has no active view")
            }
            ViewError::MalformedGrid { row, expected, found } => {
                write!(
                    f,
                    "grid row {} has {} columns, expected {}",
                    row, found, expected
                )
            }
            ViewError::SizeMismatch { cells, sizes } => {
                write!(f, "{} cells but {} column sizes", cells, sizes)
            }
            ViewError::InvalidGeometry { width, height } => {
                write!(
                    f,
                    "bordered view needs width >= 2 and height >= 1, got {}x{}",
                    width, height
                )
            }
            ViewError::EmptyMenu => {
                write!(f, "menu requires at least one entry")
            }
            ViewError::Screen(e) => {
                write!(f, "screen surface error: {}", e)
            }
        }
    }
}

impl std::error::Error for ViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ViewError::Screen(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ViewError {
    fn from(e: io::Error) -> Self {
        ViewError::Screen(e)
    }
}

// ============================================================================
// TESTS
// ============================================================================
