//! Footer with the remaining-items count and the clear-completed control.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::App;

/// Render "<n> items left" and, when anything is completed, "Clear completed".
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let count = Paragraph::new(Line::from(Span::styled(
        format!(" {} items left", app.store().active_count()),
        theme::dimmed(),
    )));
    frame.render_widget(count, chunks[0]);

    if app.can_clear_completed() {
        let clear = Paragraph::new(Line::from(vec![
            Span::styled("Clear completed", theme::normal()),
            Span::styled(" (c) ", theme::dimmed()),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(clear, chunks[1]);
    }
}
