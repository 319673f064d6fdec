//! Todo List State
//!
//! In-memory collection and pending input owned by the list component.
//! Every mutation reports whether anything changed so the caller knows
//! whether to re-render.

use crate::models::TodoItem;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TodoState {
    /// Entries in display order, addressed by position
    pub todos: Vec<TodoItem>,
    /// Pending text of the add input
    pub label_text: String,
}

impl TodoState {
    pub fn new(todos: Vec<TodoItem>) -> Self {
        Self {
            todos,
            label_text: String::new(),
        }
    }

    /// Append the pending text as a new entry.
    ///
    /// Whitespace-only text is ignored and left in the buffer. The label is
    /// stored as typed, not trimmed.
    pub fn add(&mut self) -> bool {
        if self.label_text.trim().is_empty() {
            return false;
        }
        let label = std::mem::take(&mut self.label_text);
        self.todos.push(TodoItem::new(label));
        true
    }

    pub fn set_label_text(&mut self, text: impl Into<String>) {
        self.label_text = text.into();
    }

    /// Remove the entry at `index`; out of range is a no-op
    pub fn delete(&mut self, index: usize) -> bool {
        if index >= self.todos.len() {
            return false;
        }
        self.todos.remove(index);
        true
    }

    /// Set completion of the entry at `index`; out of range is a no-op
    pub fn toggle(&mut self, index: usize, checked: bool) -> bool {
        match self.todos.get_mut(index) {
            Some(item) => {
                item.completed = Some(checked);
                true
            }
            None => false,
        }
    }

    /// Number of entries not completed
    pub fn remaining(&self) -> usize {
        self.todos.iter().filter(|item| !item.is_completed()).count()
    }
}
