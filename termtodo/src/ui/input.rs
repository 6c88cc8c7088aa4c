//! New-task input box.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme;
use crate::app::{App, Focus};

/// Render the input box with a block cursor when focused.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == Focus::Input;

    // Keep the cursor column inside the box once the text outgrows it.
    let visible_cols = usize::from(area.width.saturating_sub(2)).max(1);
    let cursor_col = if is_focused { app.cursor_position } else { 0 };
    let scroll =
        u16::try_from((cursor_col + 1).saturating_sub(visible_cols)).unwrap_or(u16::MAX);

    let input_line = if app.input.is_empty() {
        let mut spans = Vec::with_capacity(2);
        if is_focused {
            spans.push(Span::styled("█", theme::normal()));
        }
        spans.push(Span::styled(app.placeholder.as_str(), theme::placeholder()));
        Line::from(spans)
    } else {
        let mut display_text = app.input.clone();
        if is_focused {
            let idx = display_text
                .char_indices()
                .nth(app.cursor_position)
                .map_or(display_text.len(), |(i, _)| i);
            display_text.insert(idx, '█');
        }
        Line::from(Span::styled(display_text, theme::normal()))
    };

    let block = Block::default()
        .title("New task")
        .borders(Borders::ALL)
        .border_style(theme::border(is_focused));

    let paragraph = Paragraph::new(input_line)
        .block(block)
        .scroll((0, scroll));

    frame.render_widget(paragraph, area);
}
