//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, Focus};

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let help_text = match app.focus {
        Focus::Input => "Enter: add | Tab: switch panel | Esc: quit | ←→: move cursor",
        Focus::Filters => "←→/hl: change filter | 1-3: pick | Tab: switch panel | Esc: quit",
        Focus::List => {
            "↑↓/jk: navigate | Space: toggle | d: delete | c: clear done | Tab: switch panel"
        }
    };

    let status_line = Line::from(vec![
        Span::styled(concat!("TermTodo v", env!("CARGO_PKG_VERSION")), theme::bold()),
        Span::raw(" | "),
        Span::styled(help_text, theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
