//! Theme and styling constants for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// Primary foreground color.
pub const FG_PRIMARY: Color = Color::White;

/// Secondary foreground color (dimmed text).
pub const FG_SECONDARY: Color = Color::Gray;

/// Muted foreground for completed tasks and placeholders.
pub const FG_MUTED: Color = Color::DarkGray;

/// Highlight color for focused elements.
pub const HIGHLIGHT: Color = Color::Cyan;

/// Checkbox color for completed tasks.
pub const SUCCESS: Color = Color::Green;

/// Delete marker color.
pub const DESTRUCTIVE: Color = Color::Red;

/// Card title color.
pub const TITLE: Color = Color::Green;

/// Normal text style.
#[must_use]
pub fn normal() -> Style {
    Style::default().fg(FG_PRIMARY)
}

/// Dimmed text style (help text, counts).
#[must_use]
pub fn dimmed() -> Style {
    Style::default().fg(FG_SECONDARY)
}

/// Bold text style.
#[must_use]
pub fn bold() -> Style {
    Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD)
}

/// Highlighted text style (focused borders, active tab).
#[must_use]
pub fn highlighted() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

/// Selected item style (in lists).
#[must_use]
pub fn selected() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Border style for a region depending on focus.
#[must_use]
pub fn border(focused: bool) -> Style {
    if focused { highlighted() } else { normal() }
}

/// Text of a completed task: muted and struck through.
#[must_use]
pub fn completed_task() -> Style {
    Style::default()
        .fg(FG_MUTED)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Checkbox of a completed task.
#[must_use]
pub fn checked() -> Style {
    Style::default().fg(SUCCESS)
}

/// Delete marker at the end of a row.
#[must_use]
pub fn delete_marker() -> Style {
    Style::default().fg(DESTRUCTIVE)
}

/// Placeholder text in an empty input or list.
#[must_use]
pub fn placeholder() -> Style {
    Style::default()
        .fg(FG_MUTED)
        .add_modifier(Modifier::ITALIC)
}

/// Style for the status bar background (dark background with white foreground).
#[must_use]
pub fn status_bar_bg() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 50))
}

/// Style for panel titles with a given color (bold).
#[must_use]
pub fn panel_title(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
