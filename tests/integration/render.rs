//! Integration tests: full-frame rendering with ratatui's `TestBackend`.
//!
//! Verifies what the user sees: title, input placeholder, filter tabs,
//! task rows, the empty-view placeholder, and the footer.

use ratatui::{Terminal, backend::TestBackend};
use termtodo::app::{App, Focus};
use termtodo::config::ClientConfig;
use termtodo::ui;
use termtodo_core::FilterMode;

/// Render the app to a test buffer and return the content as a string.
fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|frame| ui::draw(frame, app))
        .expect("draw frame");

    let buf = terminal.backend().buffer();
    let area = buf.area;
    let mut lines = Vec::new();
    for y in area.y..area.y + area.height {
        let mut line = String::new();
        for x in area.x..area.x + area.width {
            line.push_str(buf[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn add(app: &mut App, text: &str) {
    app.input = text.to_string();
    app.submit_input();
}

#[test]
fn empty_app_frame() {
    let app = App::new();
    let screen = render_to_string(&app, 70, 18);

    assert!(screen.contains("To-Do List"));
    assert!(screen.contains("Add a new task..."));
    assert!(screen.contains("All"));
    assert!(screen.contains("Active"));
    assert!(screen.contains("Completed"));
    assert!(screen.contains("No tasks found"));
    assert!(screen.contains("0 items left"));
    assert!(!screen.contains("Clear completed"));
    assert!(screen.contains("TermTodo v"));
}

#[test]
fn configured_labels_are_rendered() {
    let config = ClientConfig {
        title: "Chores".to_string(),
        placeholder: "What next?".to_string(),
        ..ClientConfig::default()
    };
    let app = App::from_config(&config);
    let screen = render_to_string(&app, 70, 18);

    assert!(screen.contains("Chores"));
    assert!(screen.contains("What next?"));
    assert!(!screen.contains("To-Do List"));
}

#[test]
fn rows_follow_filter() {
    let mut app = App::new();
    add(&mut app, "Buy milk");
    add(&mut app, "Walk dog");
    app.toggle(app.store().tasks()[0].id());

    let all = render_to_string(&app, 70, 18);
    assert!(all.contains("[✓] Buy milk"));
    assert!(all.contains("[ ] Walk dog"));
    assert!(all.contains("1 items left"));
    assert!(all.contains("Clear completed"));

    app.set_filter(FilterMode::Active);
    let active = render_to_string(&app, 70, 18);
    assert!(!active.contains("Buy milk"));
    assert!(active.contains("[ ] Walk dog"));
    assert!(active.contains("Clear completed"));

    app.set_filter(FilterMode::Completed);
    app.clear_completed();
    let completed = render_to_string(&app, 70, 18);
    assert!(completed.contains("No tasks found"));
    assert!(completed.contains("1 items left"));
    assert!(!completed.contains("Clear completed"));
}

#[test]
fn status_bar_help_follows_focus() {
    let mut app = App::new();
    assert!(render_to_string(&app, 100, 18).contains("Enter: add"));

    app.focus = Focus::List;
    assert!(render_to_string(&app, 100, 18).contains("Space: toggle"));

    app.focus = Focus::Filters;
    assert!(render_to_string(&app, 100, 18).contains("change filter"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut app = App::new();
    add(&mut app, "A task with a rather long description that will not fit");
    let _ = render_to_string(&app, 10, 4);
}
