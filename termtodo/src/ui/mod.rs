//! Terminal UI rendering.

pub mod filter_tabs;
pub mod footer;
pub mod input;
pub mod status_bar;
pub mod task_list;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    text::Span,
    widgets::{Block, Borders},
};

use crate::app::App;

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    // Card above, status bar at bottom
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    let card = Block::default()
        .title(Span::styled(
            format!(" {} ", app.title),
            theme::panel_title(theme::TITLE),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(theme::normal());
    let card_inner = card.inner(main_chunks[0]);
    frame.render_widget(card, main_chunks[0]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Length(3), // Filter tabs
            Constraint::Min(3),    // Task list
            Constraint::Length(1), // Footer
        ])
        .split(card_inner);

    input::render(frame, chunks[0], app);
    filter_tabs::render(frame, chunks[1], app);
    task_list::render(frame, chunks[2], app);
    footer::render(frame, chunks[3], app);

    status_bar::render(frame, main_chunks[1], app);
}
