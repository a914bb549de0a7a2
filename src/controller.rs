//! The view-stack controller: terminal acquisition, present passes, and the
//! blocking event loop.
//!
//! The controller owns the surface and a stack of top-level views. The top
//! of the stack is the active view: it is the one drawn by a present pass
//! and the only one that receives key events. Views underneath keep their
//! state and become active again when the stack pops back down to them.
//!
//! Lifecycle: the first `present` acquires the terminal (raw input, cursor
//! hidden, color pairs registered) exactly once. Every pass after that is a
//! full erase-and-redraw — no damage tracking. The loop exits when the
//! active view returns `Quit`, or returns `Pop` with nothing underneath;
//! the surface is released on every exit path.

use crate::error::ViewError;
use crate::screen::Surface;
use crate::theme::ColorPair;
use crate::view::{DrawContext, EventOutcome, View};

/// Owns the screen surface and the stack of top-level views.
pub struct Controller<S: Surface> {
    surface: S,
    views: Vec<Box<dyn View>>,
    acquired: bool,
}

impl<S: Surface> Controller<S> {
    /// A controller with an empty stack. The terminal is not touched until
    /// the first [`present`](Controller::present).
    pub fn new(surface: S) -> Self {
        Controller {
            surface,
            views: Vec::new(),
            acquired: false,
        }
    }

    // ------------------------------------------------------------------
    // Stack
    // ------------------------------------------------------------------

    /// Push a view; it becomes the active view.
    pub fn push_view(&mut self, view: Box<dyn View>) {
        self.views.push(view);
    }

    /// Pop the active view, returning it.
    ///
    /// Refuses to pop the last view: that would leave the stack with no
    /// active view. The stack is unchanged on error.
    pub fn pop_view(&mut self) -> Result<Box<dyn View>, ViewError> {
        if self.views.len() < 2 {
            return Err(ViewError::EmptyViewStack);
        }
        self.views.pop().ok_or(ViewError::EmptyViewStack)
    }

    /// The top-of-stack view.
    pub fn active_view(&self) -> Result<&dyn View, ViewError> {
        self.views
            .last()
            .map(|v| v.as_ref())
            .ok_or(ViewError::EmptyViewStack)
    }

    /// The top-of-stack view, mutably (for event dispatch).
    pub fn active_view_mut(&mut self) -> Result<&mut dyn View, ViewError> {
        match self.views.last_mut() {
            Some(v) => Ok(v.as_mut()),
            None => Err(ViewError::EmptyViewStack),
        }
    }

    /// Number of views on the stack.
    pub fn depth(&self) -> usize {
        self.views.len()
    }

    // ------------------------------------------------------------------
    // Presenting
    // ------------------------------------------------------------------

    /// One full pass: erase, draw the active view, refresh.
    ///
    /// The first call also acquires the terminal; later calls reuse it.
    pub fn present(&mut self) -> Result<(), ViewError> {
        if self.views.is_empty() {
            return Err(ViewError::EmptyViewStack);
        }
        if !self.acquired {
            self.acquire()?;
        }

        self.surface.erase()?;
        let view = self
            .views
            .last()
            .ok_or(ViewError::EmptyViewStack)?;
        view.draw(&mut DrawContext::new(&mut self.surface))?;
        self.surface.refresh()?;
        Ok(())
    }

    /// One-time terminal setup: raw input, hidden cursor, the palette.
    fn acquire(&mut self) -> Result<(), ViewError> {
        self.surface.enable_raw_input()?;
        self.surface.set_cursor_visible(false)?;
        for pair in ColorPair::all() {
            self.surface.define_color_pair(pair, pair.fg())?;
        }
        self.acquired = true;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Event loop
    // ------------------------------------------------------------------

    /// Present, then block on keys until the active view ends the loop.
    ///
    /// The surface is released on every exit path, error included; a loop
    /// error takes precedence over a release error.
    pub fn run(&mut self) -> Result<(), ViewError> {
        let outcome = self.event_loop();
        let released = self.surface.release().map_err(ViewError::from);
        outcome.and(released)
    }

    fn event_loop(&mut self) -> Result<(), ViewError> {
        self.present()?;
        loop {
            let key = self.surface.read_key()?;
            let outcome = self.active_view_mut()?.key_pressed(key);
            match outcome {
                EventOutcome::Ignored => {
                    self.surface.refresh()?;
                }
                EventOutcome::Redraw => {
                    self.present()?;
                }
                EventOutcome::Pop => {
                    // popping the root view is how a program quits
                    if self.views.len() < 2 {
                        break;
                    }
                    self.pop_view()?;
                    self.present()?;
                }
                EventOutcome::Quit => break,
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Surface access
    // ------------------------------------------------------------------

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Give the surface back, dropping the views.
    pub fn into_surface(self) -> S {
        self.surface
    }
}

// ============================================================================
// TESTS
// ============================================================================
