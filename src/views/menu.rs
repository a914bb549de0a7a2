//! MenuChoice and MenuView: an interactive bordered menu.
//!
//! Each choice is a prompt plus an ordered set of options; toggling cycles
//! through the options. The menu renders as a bordered box with one
//! `prompt | option` row per choice:
//!
//! ```text
//! +-----------------------+
//! | Gender       | Male   |
//! | Like Sports? | Yes    |
//! +-----------------------+
//! ```
//!
//! The option column is sized to the widest option across every choice, so
//! the box keeps its footprint while the user toggles.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::error::ViewError;
use crate::theme::ColorPair;
use crate::view::{DrawContext, EventOutcome, View};
use crate::views::bordered::BorderedView;
use crate::views::row::{pad, Alignment};

use unicode_width::UnicodeWidthStr;

// ============================================================================
// MENU CHOICE
// ============================================================================

/// One menu row: a prompt and an ordered label -> color mapping with a
/// cyclic selection cursor.
#[derive(Debug)]
pub struct MenuChoice {
    prompt: String,
    options: Vec<(String, ColorPair)>,
    selected: usize,
}

impl MenuChoice {
    /// Requires at least one option.
    pub fn new<S>(
        prompt: impl Into<String>,
        options: Vec<(S, ColorPair)>,
    ) -> Result<Self, ViewError>
    where
        S: Into<String>,
    {
        if options.is_empty() {
            return Err(ViewError::EmptyMenu);
        }
        Ok(MenuChoice {
            prompt: prompt.into(),
            options: options.into_iter().map(|(l, c)| (l.into(), c)).collect(),
            selected: 0,
        })
    }

    /// Advance the selection, wrapping past the last option.
    pub fn toggle(&mut self) {
        self.selected = (self.selected + 1) % self.options.len();
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_label(&self) -> &str {
        &self.options[self.selected].0
    }

    /// Color pair of the selected option.
    pub fn selected_attr(&self) -> ColorPair {
        self.options[self.selected].1
    }

    /// This choice as one grid/row pair of cells: prompt, selected label.
    ///
    /// The color attribute travels separately via [`selected_attr`]
    /// (cells are text; styles are not).
    ///
    /// [`selected_attr`]: MenuChoice::selected_attr
    pub fn row_cells(&self) -> [&str; 2] {
        [&self.prompt, self.selected_label()]
    }

    /// Widest label this choice can show.
    fn max_label_width(&self) -> usize {
        self.options
            .iter()
            .map(|(l, _)| UnicodeWidthStr::width(l.as_str()))
            .max()
            .unwrap_or(0)
    }
}

// ============================================================================
// MENU VIEW
// ============================================================================

/// A bordered, keyboard-driven stack of [`MenuChoice`] rows.
///
/// Up/Down (or k/j) move the cursor, Space/Enter toggle the focused
/// choice, Esc/q pops the menu off the stack, Ctrl+C quits.
#[derive(Debug)]
pub struct MenuView {
    row: u16,
    col: u16,
    choices: Vec<MenuChoice>,
    cursor: usize,
}

impl MenuView {
    /// Requires at least one choice.
    pub fn new(row: u16, col: u16, choices: Vec<MenuChoice>) -> Result<Self, ViewError> {
        if choices.is_empty() {
            return Err(ViewError::EmptyMenu);
        }
        Ok(MenuView { row, col, choices, cursor: 0 })
    }

    pub fn choices(&self) -> &[MenuChoice] {
        &self.choices
    }

    pub fn choice(&self, index: usize) -> Option<&MenuChoice> {
        self.choices.get(index)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Column widths: (prompt column, option column).
    ///
    /// The option column covers every option of every choice, not just the
    /// selected ones, so toggling never resizes the box.
    fn column_widths(&self) -> (usize, usize) {
        let prompt_w = self
            .choices
            .iter()
            .map(|c| UnicodeWidthStr::width(c.prompt()))
            .max()
            .unwrap_or(0);
        let label_w = self
            .choices
            .iter()
            .map(MenuChoice::max_label_width)
            .max()
            .unwrap_or(0);
        (prompt_w, label_w)
    }
}

impl View for MenuView {
    fn draw(&self, ctx: &mut DrawContext<'_>) -> Result<(), ViewError> {
        let (prompt_w, label_w) = self.column_widths();
        // "| " + prompt + " | " + label + " |"
        let inner = prompt_w + 3 + label_w;
        let border = BorderedView::new(
            self.row,
            self.col,
            (inner + 4) as u16,
            (self.choices.len() + 2) as u16,
        )?;
        border.draw(ctx)?;

        for (i, choice) in self.choices.iter().enumerate() {
            let r = self.row + 1 + i as u16;
            let prompt_col = self.col + 2;
            let label_col = prompt_col + prompt_w as u16 + 3;

            let prompt = pad(choice.prompt(), prompt_w, Alignment::Left);
            if i == self.cursor {
                ctx.draw_styled(r, prompt_col, &prompt, ColorPair::Interactive)?;
            } else {
                ctx.draw_text(r, prompt_col, &prompt)?;
            }
            ctx.draw_text(r, prompt_col + prompt_w as u16, " | ")?;
            ctx.draw_styled(
                r,
                label_col,
                &pad(choice.selected_label(), label_w, Alignment::Left),
                choice.selected_attr(),
            )?;
        }
        Ok(())
    }

    fn key_pressed(&mut self, key: KeyEvent) -> EventOutcome {
        // Ctrl+C always quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return EventOutcome::Quit;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                EventOutcome::Redraw
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = (self.cursor + 1).min(self.choices.len() - 1);
                EventOutcome::Redraw
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.choices[self.cursor].toggle();
                EventOutcome::Redraw
            }
            KeyCode::Esc | KeyCode::Char('q') => EventOutcome::Pop,
            _ => EventOutcome::Ignored,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::{MemoryScreen, Surface};

    fn sample_menu() -> MenuView {
        let gender = MenuChoice::new(
            "Gender",
            vec![("Male", ColorPair::Danger), ("Female", ColorPair::Safe)],
        )
        .unwrap();
        let sports = MenuChoice::new(
            "Like Sports?",
            vec![("Yes", ColorPair::Safe), ("No", ColorPair::Danger)],
        )
        .unwrap();
        MenuView::new(0, 0, vec![gender, sports]).unwrap()
    }

    #[test]
    fn toggle_is_a_cyclic_permutation() {
        let mut choice = MenuChoice::new(
            "speed",
            vec![
                ("slow", ColorPair::Plain),
                ("medium", ColorPair::Warning),
                ("fast", ColorPair::Danger),
            ],
        )
        .unwrap();
        assert_eq!(choice.selected_label(), "slow");
        choice.toggle();
        assert_eq!(choice.selected_label(), "medium");
        choice.toggle();
        choice.toggle();
        // three toggles: back where we started
        assert_eq!(choice.selected_index(), 0);
        assert_eq!(choice.selected_label(), "slow");
    }

    #[test]
    fn row_cells_expose_prompt_and_selection() {
        let mut choice = MenuChoice::new(
            "Gender",
            vec![("Male", ColorPair::Danger), ("Female", ColorPair::Safe)],
        )
        .unwrap();
        assert_eq!(choice.row_cells(), ["Gender", "Male"]);
        assert_eq!(choice.selected_attr(), ColorPair::Danger);
        choice.toggle();
        assert_eq!(choice.row_cells(), ["Gender", "Female"]);
        assert_eq!(choice.selected_attr(), ColorPair::Safe);
    }

    #[test]
    fn empty_options_are_rejected() {
        let err = MenuChoice::new("x", Vec::<(String, ColorPair)>::new()).unwrap_err();
        assert!(matches!(err, ViewError::EmptyMenu));
        let err = MenuView::new(0, 0, Vec::new()).unwrap_err();
        assert!(matches!(err, ViewError::EmptyMenu));
    }

    #[test]
    fn menu_renders_a_bordered_choice_grid() {
        let menu = sample_menu();
        let mut screen = MemoryScreen::new(5, 40);
        menu.draw(&mut DrawContext::new(&mut screen)).unwrap();
        assert_eq!(
            screen.lines()[..4],
            [
                "+-----------------------+",
                "| Gender       | Male   |",
                "| Like Sports? | Yes    |",
                "+-----------------------+",
            ]
        );
    }

    #[test]
    fn box_footprint_is_stable_across_toggles() {
        let mut menu = sample_menu();
        let mut screen = MemoryScreen::new(5, 40);
        menu.draw(&mut DrawContext::new(&mut screen)).unwrap();
        let border = screen.line(0);

        // toggle Gender to the longer "Female" label and redraw
        menu.key_pressed(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        screen.erase().unwrap();
        menu.draw(&mut DrawContext::new(&mut screen)).unwrap();
        assert_eq!(screen.line(0), border);
        assert_eq!(screen.line(1), "| Gender       | Female |");
    }

    #[test]
    fn cursor_moves_and_clamps() {
        let mut menu = sample_menu();
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        let up = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE);

        assert_eq!(menu.key_pressed(down), EventOutcome::Redraw);
        assert_eq!(menu.cursor(), 1);
        assert_eq!(menu.key_pressed(down), EventOutcome::Redraw);
        assert_eq!(menu.cursor(), 1); // clamped at the last row

        menu.key_pressed(up);
        assert_eq!(menu.cursor(), 0);
        menu.key_pressed(up);
        assert_eq!(menu.cursor(), 0); // clamped at the first row
    }

    #[test]
    fn toggle_applies_to_the_row_under_the_cursor() {
        let mut menu = sample_menu();
        menu.key_pressed(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        menu.key_pressed(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));
        assert_eq!(menu.choice(0).unwrap().selected_label(), "Male");
        assert_eq!(menu.choice(1).unwrap().selected_label(), "No");
    }

    #[test]
    fn exit_keys_map_to_outcomes() {
        let mut menu = sample_menu();
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let unmapped = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);

        assert_eq!(menu.key_pressed(esc), EventOutcome::Pop);
        assert_eq!(menu.key_pressed(q), EventOutcome::Pop);
        assert_eq!(menu.key_pressed(ctrl_c), EventOutcome::Quit);
        assert_eq!(menu.key_pressed(unmapped), EventOutcome::Ignored);
    }
}
