//! Integration tests: driving the to-do list through key events.
//!
//! # Verification Focus
//!
//! - Submitting input creates trimmed tasks and always clears the input
//! - Blank submissions create nothing
//! - Toggle, delete and clear-completed act on the selected row
//! - Filter changes only affect the view
//! - The "Buy milk" / "Walk dog" walkthrough end to end

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use termtodo::app::{App, Focus};
use termtodo_core::FilterMode;

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn add(app: &mut App, text: &str) {
    app.focus = Focus::Input;
    type_str(app, text);
    press(app, KeyCode::Enter);
}

fn texts(app: &App) -> Vec<String> {
    app.store()
        .tasks()
        .iter()
        .map(|t| t.text().to_string())
        .collect()
}

fn visible_texts(app: &App) -> Vec<String> {
    app.visible_tasks()
        .iter()
        .map(|t| t.text().to_string())
        .collect()
}

// =============================================================================
// Adding tasks
// =============================================================================

#[test]
fn enter_adds_trimmed_task_and_clears_input() {
    let mut app = App::new();
    add(&mut app, "  Buy milk  ");

    assert_eq!(texts(&app), vec!["Buy milk"]);
    assert!(app.input.is_empty());
    assert_eq!(app.cursor_position, 0);
}

#[test]
fn blank_submission_clears_input_without_adding() {
    let mut app = App::new();
    add(&mut app, "   ");

    assert!(app.store().is_empty());
    assert!(app.input.is_empty());
    assert_eq!(app.cursor_position, 0);

    press(&mut app, KeyCode::Enter);
    assert!(app.store().is_empty());
}

#[test]
fn new_tasks_are_appended_in_order() {
    let mut app = App::new();
    add(&mut app, "one");
    add(&mut app, "two");
    add(&mut app, "three");

    assert_eq!(texts(&app), vec!["one", "two", "three"]);
    assert_eq!(app.store().active_count(), 3);
}

#[test]
fn list_shortcuts_are_plain_text_while_typing() {
    let mut app = App::new();
    add(&mut app, "dcj 123");
    assert_eq!(texts(&app), vec!["dcj 123"]);
    assert_eq!(app.store().filter(), FilterMode::All);
}

// =============================================================================
// List actions
// =============================================================================

#[test]
fn space_toggles_selected_and_twice_restores() {
    let mut app = App::new();
    add(&mut app, "a");
    add(&mut app, "b");

    app.focus = Focus::List;
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));

    let flags: Vec<bool> = app.store().tasks().iter().map(|t| t.is_completed()).collect();
    assert_eq!(flags, vec![false, true]);

    press(&mut app, KeyCode::Enter);
    assert!(!app.store().has_completed());
}

#[test]
fn delete_removes_only_selected() {
    let mut app = App::new();
    add(&mut app, "a");
    add(&mut app, "b");
    add(&mut app, "c");

    app.focus = Focus::List;
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Delete);

    assert_eq!(texts(&app), vec!["a", "c"]);
    assert_eq!(app.selected, 1);
}

#[test]
fn clear_completed_key_is_noop_without_completed_tasks() {
    let mut app = App::new();
    add(&mut app, "a");
    app.focus = Focus::List;

    assert!(!app.can_clear_completed());
    press(&mut app, KeyCode::Char('c'));
    assert_eq!(texts(&app), vec!["a"]);
}

#[test]
fn clear_completed_keeps_active_in_order() {
    let mut app = App::new();
    for text in ["a", "b", "c", "d"] {
        add(&mut app, text);
    }

    app.focus = Focus::List;
    press(&mut app, KeyCode::Char(' ')); // a
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char(' ')); // c
    press(&mut app, KeyCode::Char('c'));

    assert_eq!(texts(&app), vec!["b", "d"]);
    assert!(!app.can_clear_completed());
    assert!(app.selected < 2);

    press(&mut app, KeyCode::Char('c'));
    assert_eq!(texts(&app), vec!["b", "d"]);
}

// =============================================================================
// Filters
// =============================================================================

#[test]
fn filter_changes_view_not_collection() {
    let mut app = App::new();
    add(&mut app, "a");
    add(&mut app, "b");
    app.toggle(app.store().tasks()[0].id());

    app.focus = Focus::Filters;
    press(&mut app, KeyCode::Right);
    assert_eq!(app.store().filter(), FilterMode::Active);
    assert_eq!(visible_texts(&app), vec!["b"]);

    press(&mut app, KeyCode::Right);
    assert_eq!(app.store().filter(), FilterMode::Completed);
    assert_eq!(visible_texts(&app), vec!["a"]);

    assert_eq!(texts(&app), vec!["a", "b"]);
}

#[test]
fn digits_select_filters_from_list() {
    let mut app = App::new();
    add(&mut app, "a");
    app.focus = Focus::List;

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.store().filter(), FilterMode::Completed);
    assert!(app.visible_tasks().is_empty());
    assert_eq!(app.selected_task_id(), None);

    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.store().filter(), FilterMode::All);
}

#[test]
fn toggling_under_active_filter_hides_row_and_keeps_selection_valid() {
    let mut app = App::new();
    add(&mut app, "a");
    add(&mut app, "b");
    app.set_filter(FilterMode::Active);

    app.focus = Focus::List;
    press(&mut app, KeyCode::End);
    press(&mut app, KeyCode::Char(' '));

    assert_eq!(visible_texts(&app), vec!["a"]);
    assert_eq!(app.selected, 0);
    assert_eq!(app.store().active_count(), app.visible_tasks().len());
}

// =============================================================================
// Walkthrough
// =============================================================================

#[test]
fn buy_milk_walk_dog_walkthrough() {
    let mut app = App::new();
    add(&mut app, "Buy milk");
    add(&mut app, "Walk dog");

    let tasks = app.store().tasks();
    assert_eq!(tasks.len(), 2);
    assert!(tasks.iter().all(|t| !t.is_completed()));

    app.focus = Focus::List;
    press(&mut app, KeyCode::Home);
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.store().active_count(), 1);

    app.focus = Focus::Filters;
    press(&mut app, KeyCode::Char('3'));
    let visible = app.visible_tasks();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].text(), "Buy milk");
    assert!(visible[0].is_completed());

    app.focus = Focus::List;
    press(&mut app, KeyCode::Char('c'));
    let tasks = app.store().tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].text(), "Walk dog");
    assert!(!tasks[0].is_completed());
}
