//! Color pair palette.
//!
//! A fixed set of foreground colors over the terminal's default background,
//! registered once by the controller during terminal acquisition. Numeric
//! ids follow the classic curses pair numbering (1-5).
//!
//! Color semantics:
//! - Safe (green): positive / confirmed choices
//! - Danger (red): destructive / negative choices
//! - Interactive (cyan): the focused element, keybinding hints
//! - Warning (yellow): attention needed
//! - Plain (white): neutral text

use crossterm::style::Color;

/// A registered foreground-over-default-background color pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorPair {
    Safe = 1,
    Danger = 2,
    Interactive = 3,
    Warning = 4,
    Plain = 5,
}

impl ColorPair {
    /// Every pair, in id order. The controller registers these once.
    pub fn all() -> [ColorPair; 5] {
        [
            ColorPair::Safe,
            ColorPair::Danger,
            ColorPair::Interactive,
            ColorPair::Warning,
            ColorPair::Plain,
        ]
    }

    /// Numeric pair id (1-5).
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Foreground color for this pair.
    pub fn fg(self) -> Color {
        match self {
            ColorPair::Safe => Color::Green,
            ColorPair::Danger => Color::Red,
            ColorPair::Interactive => Color::Cyan,
            ColorPair::Warning => Color::Yellow,
            ColorPair::Plain => Color::White,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_ids_are_one_through_five() {
        let ids: Vec<u8> = ColorPair::all().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn pairs_have_expected_foregrounds() {
        assert_eq!(ColorPair::Safe.fg(), Color::Green);
        assert_eq!(ColorPair::Danger.fg(), Color::Red);
        assert_eq!(ColorPair::Interactive.fg(), Color::Cyan);
        assert_eq!(ColorPair::Warning.fg(), Color::Yellow);
        assert_eq!(ColorPair::Plain.fg(), Color::White);
    }
}
