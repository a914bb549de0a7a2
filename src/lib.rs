//! termstack: a minimal terminal UI toolkit.
//!
//! A view-stack controller drives a character-cell screen; a small library
//! of composable views (rows, grids, bordered boxes, menus) renders itself
//! through a shared surface contract. Every present pass is a full
//! erase-and-redraw — there is no layout engine, damage tracking, or
//! resize handling.
//!
//! ```no_run
//! use termstack::controller::Controller;
//! use termstack::screen::TerminalScreen;
//! use termstack::theme::ColorPair;
//! use termstack::views::{MenuChoice, MenuView};
//!
//! # fn main() -> Result<(), termstack::error::ViewError> {
//! let gender = MenuChoice::new(
//!     "Gender",
//!     vec![("Male", ColorPair::Danger), ("Female", ColorPair::Safe)],
//! )?;
//! let menu = MenuView::new(1, 1, vec![gender])?;
//!
//! let mut controller = Controller::new(TerminalScreen::new());
//! controller.push_view(Box::new(menu));
//! controller.run()?;
//! # Ok(())
//! # }
//! ```

pub mod controller;
pub mod error;
pub mod screen;
pub mod theme;
pub mod view;
pub mod views;
