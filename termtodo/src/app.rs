//! Application state and event handling.
//!
//! `App` owns the [`TaskStore`] and the view-only state around it (input
//! buffer, focus, selection). Key events are translated into store intents;
//! the UI reads `&App` and never mutates it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use termtodo_core::{FilterMode, Task, TaskId, TaskStore};

use crate::config::ClientConfig;

/// Which region is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Input box is focused (default).
    Input,
    /// Filter tabs are focused.
    Filters,
    /// Task list is focused.
    List,
}

/// Main application state.
pub struct App {
    store: TaskStore,
    /// Current text input.
    pub input: String,
    /// Cursor position in input (character index, not byte index).
    pub cursor_position: usize,
    /// Which region is focused.
    pub focus: Focus,
    /// Selected row within the visible tasks.
    pub selected: usize,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Card title.
    pub title: String,
    /// Input placeholder text.
    pub placeholder: String,
}

impl App {
    /// Create an empty application with default labels.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&ClientConfig::default())
    }

    /// Create an empty application using resolved configuration.
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            store: TaskStore::with_filter(config.initial_filter),
            input: String::new(),
            cursor_position: 0,
            focus: Focus::Input,
            selected: 0,
            should_quit: false,
            title: config.title.clone(),
            placeholder: config.placeholder.clone(),
        }
    }

    /// Read access to the task store.
    #[must_use]
    pub const fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Tasks currently shown in the list.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.store.visible_tasks()
    }

    /// The id of the highlighted task, if the visible list is non-empty.
    #[must_use]
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.store.visible_tasks().get(self.selected).map(|t| t.id())
    }

    /// Whether the "Clear completed" control is shown.
    #[must_use]
    pub fn can_clear_completed(&self) -> bool {
        self.store.has_completed()
    }

    // -----------------------------------------------------------------------
    // Intents
    // -----------------------------------------------------------------------

    /// Submit the current input as a new task.
    ///
    /// Blank input creates nothing. The input is cleared either way.
    pub fn submit_input(&mut self) -> Option<TaskId> {
        let created = self.store.add(&self.input);
        match created {
            Some(id) => tracing::debug!(%id, "task added"),
            None => tracing::trace!("blank input ignored"),
        }
        self.input.clear();
        self.cursor_position = 0;
        self.clamp_selection();
        created
    }

    /// Toggle completion of the selected task.
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.toggle(id);
        }
    }

    /// Delete the selected task.
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.delete(id);
        }
    }

    /// Toggle completion of the task with `id`. Unknown ids are ignored.
    pub fn toggle(&mut self, id: TaskId) {
        if self.store.toggle(id) {
            tracing::debug!(%id, "task toggled");
        }
        self.clamp_selection();
    }

    /// Delete the task with `id`. Unknown ids are ignored.
    pub fn delete(&mut self, id: TaskId) {
        if self.store.delete(id) {
            tracing::debug!(%id, "task deleted");
        }
        self.clamp_selection();
    }

    /// Remove every completed task.
    pub fn clear_completed(&mut self) {
        let removed = self.store.clear_completed();
        tracing::debug!(removed, "cleared completed tasks");
        self.clamp_selection();
    }

    /// Switch the list filter.
    pub fn set_filter(&mut self, mode: FilterMode) {
        if self.store.filter() != mode {
            tracing::debug!(filter = %mode, "filter changed");
        }
        self.store.set_filter(mode);
        self.clamp_selection();
    }

    // -----------------------------------------------------------------------
    // Key handling
    // -----------------------------------------------------------------------

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Global shortcuts
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Tab, KeyModifiers::SHIFT) | (KeyCode::BackTab, _) => {
                self.cycle_focus_backward();
                return;
            }
            (KeyCode::Tab, _) => {
                self.cycle_focus_forward();
                return;
            }
            _ => {}
        }

        // Focus-specific shortcuts
        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::Filters => self.handle_filters_key(key),
            Focus::List => self.handle_list_key(key),
        }
    }

    /// Handle key event when input is focused.
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.submit_input();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.enter_char(c);
            }
            KeyCode::Backspace => self.delete_char_before(),
            KeyCode::Delete => self.delete_char_at(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.input.chars().count(),
            _ => {}
        }
    }

    /// Handle key event when the filter tabs are focused.
    fn handle_filters_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.set_filter(self.store.filter().prev()),
            KeyCode::Right | KeyCode::Char('l') => self.set_filter(self.store.filter().next()),
            KeyCode::Char(c) => self.select_filter_by_digit(c),
            _ => {}
        }
    }

    /// Handle key event when the task list is focused.
    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Home | KeyCode::Char('g') => self.selected = 0,
            KeyCode::End | KeyCode::Char('G') => self.select_last(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Delete | KeyCode::Char('d') => self.delete_selected(),
            KeyCode::Char('c') => {
                if self.can_clear_completed() {
                    self.clear_completed();
                }
            }
            KeyCode::Char(c) => self.select_filter_by_digit(c),
            _ => {}
        }
    }

    fn select_filter_by_digit(&mut self, c: char) {
        let mode = match c {
            '1' => FilterMode::All,
            '2' => FilterMode::Active,
            '3' => FilterMode::Completed,
            _ => return,
        };
        self.set_filter(mode);
    }

    /// Cycle focus forward: Input -> Filters -> List -> Input.
    const fn cycle_focus_forward(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::Filters,
            Focus::Filters => Focus::List,
            Focus::List => Focus::Input,
        };
    }

    /// Cycle focus backward: Input -> List -> Filters -> Input.
    const fn cycle_focus_backward(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::List,
            Focus::List => Focus::Filters,
            Focus::Filters => Focus::Input,
        };
    }

    // -----------------------------------------------------------------------
    // Input editing
    // -----------------------------------------------------------------------

    /// Byte offset of the character at `char_idx`, or the end of the input.
    fn byte_index(&self, char_idx: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_idx)
            .map_or(self.input.len(), |(i, _)| i)
    }

    /// Insert a character at the cursor position.
    fn enter_char(&mut self, c: char) {
        let idx = self.byte_index(self.cursor_position);
        self.input.insert(idx, c);
        self.cursor_position += 1;
    }

    /// Delete the character before the cursor.
    fn delete_char_before(&mut self) {
        if self.cursor_position > 0 {
            let idx = self.byte_index(self.cursor_position - 1);
            self.input.remove(idx);
            self.cursor_position -= 1;
        }
    }

    /// Delete the character under the cursor.
    fn delete_char_at(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            let idx = self.byte_index(self.cursor_position);
            self.input.remove(idx);
        }
    }

    /// Move cursor left.
    const fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    /// Move cursor right.
    fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    const fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.store.visible_tasks().len() {
            self.selected += 1;
        }
    }

    fn select_last(&mut self) {
        self.selected = self.store.visible_tasks().len().saturating_sub(1);
    }

    /// Keep the selection inside the visible list after it shrinks.
    fn clamp_selection(&mut self) {
        let len = self.store.visible_tasks().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
