//! The leaf view library: rows, grids, bordered boxes, menus.

pub mod bordered;
pub mod grid;
pub mod menu;
pub mod row;

pub use bordered::BorderedView;
pub use grid::GridView;
pub use menu::{MenuChoice, MenuView};
pub use row::{pad, Alignment, RowView};
