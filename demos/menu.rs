//! Interactive menu demo - run with: cargo run --example menu
//!
//! Up/Down move, Space/Enter toggle, q quits.

use termstack::controller::Controller;
use termstack::error::ViewError;
use termstack::screen::{install_panic_hook, TerminalScreen};
use termstack::theme::ColorPair;
use termstack::views::{MenuChoice, MenuView};

fn main() {
    install_panic_hook();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ViewError> {
    let difficulty = MenuChoice::new(
        "Difficulty",
        vec![
            ("Easy", ColorPair::Safe),
            ("Normal", ColorPair::Warning),
            ("Hard", ColorPair::Danger),
        ],
    )?;
    let sound = MenuChoice::new(
        "Sound",
        vec![("On", ColorPair::Safe), ("Off", ColorPair::Danger)],
    )?;
    let fullscreen = MenuChoice::new(
        "Fullscreen",
        vec![("Yes", ColorPair::Safe), ("No", ColorPair::Plain)],
    )?;

    let menu = MenuView::new(1, 2, vec![difficulty, sound, fullscreen])?;

    let mut controller = Controller::new(TerminalScreen::new());
    controller.push_view(Box::new(menu));
    controller.run()
}
