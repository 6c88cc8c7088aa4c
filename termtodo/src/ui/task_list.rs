//! Task list rendering.

use std::borrow::Cow;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use termtodo_core::Task;

use super::theme;
use crate::app::{App, Focus};

/// Render the visible tasks, or a placeholder when there are none.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == Focus::List;

    let block = Block::default()
        .title("Tasks")
        .borders(Borders::ALL)
        .border_style(theme::border(is_focused));

    let tasks = app.visible_tasks();
    if tasks.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No tasks found",
            theme::placeholder(),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let text_width = usize::from(area.width.saturating_sub(2)).saturating_sub(ROW_CHROME);
    let items: Vec<ListItem> = tasks
        .iter()
        .map(|task| task_row(task, text_width))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(if is_focused {
            theme::selected()
        } else {
            theme::bold()
        });

    let mut state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Columns a row uses besides the text: "[ ] " before it and "  ✗" after.
const ROW_CHROME: usize = 7;

/// Shortens `text` to `max` characters, ending in an ellipsis when cut.
fn fit_text(text: &str, max: usize) -> Cow<'_, str> {
    if text.chars().count() <= max {
        return Cow::Borrowed(text);
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    if max > 0 {
        cut.push('…');
    }
    Cow::Owned(cut)
}

fn task_row(task: &Task, text_width: usize) -> ListItem<'_> {
    let (checkbox, checkbox_style, text_style) = if task.is_completed() {
        ("[✓]", theme::checked(), theme::completed_task())
    } else {
        ("[ ]", theme::normal(), theme::normal())
    };

    ListItem::new(Line::from(vec![
        Span::styled(checkbox, checkbox_style),
        Span::raw(" "),
        Span::styled(fit_text(task.text(), text_width), text_style),
        Span::raw("  "),
        Span::styled("✗", theme::delete_marker()),
    ]))
}
