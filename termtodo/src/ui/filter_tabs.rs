//! All / Active / Completed filter tabs.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Tabs},
};
use termtodo_core::FilterMode;

use super::theme;
use crate::app::{App, Focus};

/// Render the three filter tabs with the active mode highlighted.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == Focus::Filters;

    let block = Block::default()
        .title("Filter")
        .borders(Borders::ALL)
        .border_style(theme::border(is_focused));

    let tabs = Tabs::new(FilterMode::ALL.map(FilterMode::label))
        .select(app.store().filter().index())
        .style(theme::dimmed())
        .highlight_style(if is_focused {
            theme::selected()
        } else {
            theme::highlighted()
        })
        .divider("|")
        .block(block);

    frame.render_widget(tabs, area);
}
