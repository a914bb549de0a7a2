//! Static composition demo - run with: cargo run --example grid
//!
//! Draws a grid and a bordered box inside one group; any key exits.

use crossterm::event::KeyEvent;

use termstack::controller::Controller;
use termstack::error::ViewError;
use termstack::screen::{install_panic_hook, TerminalScreen};
use termstack::view::{DrawContext, EventOutcome, Group, View};
use termstack::views::{Alignment, BorderedView, GridView, RowView};

/// A group that exits on any key press.
struct DemoScreen {
    content: Group,
}

impl View for DemoScreen {
    fn draw(&self, ctx: &mut DrawContext<'_>) -> Result<(), ViewError> {
        self.content.draw(ctx)
    }

    fn key_pressed(&mut self, _key: KeyEvent) -> EventOutcome {
        EventOutcome::Quit
    }
}

fn main() {
    install_panic_hook();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ViewError> {
    let title = RowView::new(1, 2, ["termstack", "grid demo"]).separator("/");
    let scores = GridView::new(3, 2, [
        vec!["player", "wins", "losses"],
        vec!["ada", "12", "3"],
        vec!["grace", "9", "6"],
        vec!["linus", "4", "11"],
    ])?
    .align(Alignment::Right);
    let frame = BorderedView::new(8, 2, 30, 5)?;

    let mut content = Group::new();
    content.add_subviews(vec![
        Box::new(title) as Box<dyn View>,
        Box::new(scores),
        Box::new(frame),
    ]);

    let mut controller = Controller::new(TerminalScreen::new());
    controller.push_view(Box::new(DemoScreen { content }));
    controller.run()
}
