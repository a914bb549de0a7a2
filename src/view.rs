//! The composition model: the `View` trait, draw contexts, event outcomes,
//! and the `Group` container.
//!
//! Drawing is one-directional: the controller builds a [`DrawContext`] per
//! pass and hands it down the view tree as a parameter. A parent that draws
//! its subviews passes the context along, which is all the "screen
//! propagation" there is — no view holds a screen reference between passes.
//!
//! Input is the opposite: key events are delivered only to the active
//! top-level view, and forwarding to subviews is that view's own business.
//! Views signal what should happen next through [`EventOutcome`]; the
//! controller interprets it. Pure decision, effectful interpretation.

use crossterm::event::KeyEvent;

use crate::error::ViewError;
use crate::screen::Surface;
use crate::theme::ColorPair;

// ============================================================================
// DRAW CONTEXT
// ============================================================================

/// Borrow of the screen surface for the duration of one draw pass.
///
/// Converts surface I/O errors into [`ViewError::Screen`] so view code
/// stays in one error type.
pub struct DrawContext<'a> {
    surface: &'a mut dyn Surface,
}

impl<'a> DrawContext<'a> {
    pub fn new(surface: &'a mut dyn Surface) -> Self {
        DrawContext { surface }
    }

    /// Write `text` at (row, col).
    pub fn draw_text(&mut self, row: u16, col: u16, text: &str) -> Result<(), ViewError> {
        self.surface.write_text(row, col, text)?;
        Ok(())
    }

    /// Write `text` at (row, col) in a registered color pair.
    pub fn draw_styled(
        &mut self,
        row: u16,
        col: u16,
        text: &str,
        pair: ColorPair,
    ) -> Result<(), ViewError> {
        self.surface.write_styled(row, col, text, pair)?;
        Ok(())
    }
}

// ============================================================================
// EVENT OUTCOMES
// ============================================================================

/// What a view wants to happen after handling a key.
///
/// Views never touch the stack or the terminal directly — they return one
/// of these and the controller's event loop carries it out. `Pop` and
/// `Quit` are the explicit exit path: a root view that pops itself ends
/// the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Key not handled; keep waiting.
    Ignored,
    /// Model changed; run a full erase-and-redraw pass.
    Redraw,
    /// Remove this view from the stack and redraw the one underneath.
    Pop,
    /// End the event loop.
    Quit,
}

// ============================================================================
// VIEW
// ============================================================================

/// Base unit of drawing.
///
/// `draw` takes `&self`: repeated calls with an unchanged model must
/// produce identical screen output, and the immutable receiver keeps a
/// draw pass from mutating the model it renders.
pub trait View {
    /// Emit this view's content through the draw context.
    fn draw(&self, ctx: &mut DrawContext<'_>) -> Result<(), ViewError>;

    /// Handle a key press. Default: not interested.
    fn key_pressed(&mut self, key: KeyEvent) -> EventOutcome {
        let _ = key;
        EventOutcome::Ignored
    }
}

// ============================================================================
// GROUP
// ============================================================================

/// A view that is nothing but its subviews.
///
/// Draws each subview in insertion order with the shared context. Does not
/// forward key events — a group of static widgets has no input behavior,
/// and interactive composites implement their own routing.
#[derive(Default)]
pub struct Group {
    subviews: Vec<Box<dyn View>>,
}

impl Group {
    pub fn new() -> Self {
        Group { subviews: Vec::new() }
    }

    /// Append one subview; the group takes ownership.
    pub fn add_subview(&mut self, view: Box<dyn View>) {
        self.subviews.push(view);
    }

    /// Append several subviews in order.
    pub fn add_subviews(&mut self, views: impl IntoIterator<Item = Box<dyn View>>) {
        self.subviews.extend(views);
    }

    pub fn len(&self) -> usize {
        self.subviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subviews.is_empty()
    }
}

impl View for Group {
    fn draw(&self, ctx: &mut DrawContext<'_>) -> Result<(), ViewError> {
        for view in &self.subviews {
            view.draw(ctx)?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
