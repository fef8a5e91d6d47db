use crate::error::{Result, TodoError};
use crate::models::{validate_title, Todo, TodoList};
use crate::snapshot::{self, SessionSnapshot};
use crate::sort;

/// Core business logic: the session-scoped collection of todo lists.
/// One instance lives per request cycle, rebuilt from the session snapshot
/// and serialized back when the cycle ends.
pub struct TodoCollection {
    lists: Vec<TodoList>,
    next_list_id: i64,
}

impl Default for TodoCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoCollection {
    /// The first-visit case: no lists yet
    pub fn new() -> Self {
        TodoCollection {
            lists: Vec::new(),
            next_list_id: 1,
        }
    }

    /// Rehydrate from a session snapshot. The list id watermark resumes
    /// past the highest persisted id so fresh lists never collide.
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Result<Self> {
        let lists = snapshot::rehydrate(snapshot)?;
        let next_list_id = lists.iter().map(TodoList::id).max().unwrap_or(0) + 1;
        Ok(TodoCollection {
            lists,
            next_list_id,
        })
    }

    /// Serialize current state back to the wire shape
    pub fn to_snapshot(&self) -> SessionSnapshot {
        snapshot::serialize(&self.lists)
    }

    // ==================== List Operations ====================

    /// Create a new list. Returns the new list's id.
    pub fn create_list(&mut self, title: &str) -> Result<i64> {
        let title = validate_title(title)?;
        self.check_unique_title(&title, None)?;

        let id = self.next_list_id;
        self.lists.push(TodoList::new(id, &title)?);
        self.next_list_id += 1;
        Ok(id)
    }

    /// Rename a list, re-validating length and uniqueness against every
    /// other list, symmetric with creation
    pub fn rename_list(&mut self, list_id: i64, title: &str) -> Result<()> {
        let title = validate_title(title)?;
        self.check_unique_title(&title, Some(list_id))?;
        self.find_list_mut(list_id)?.set_title(&title)
    }

    /// Remove a list from the live collection and return it
    pub fn delete_list(&mut self, list_id: i64) -> Result<TodoList> {
        let index = self
            .lists
            .iter()
            .position(|l| l.id() == list_id)
            .ok_or(TodoError::ListNotFound(list_id))?;
        Ok(self.lists.remove(index))
    }

    pub fn find_list(&self, list_id: i64) -> Result<&TodoList> {
        self.lists
            .iter()
            .find(|l| l.id() == list_id)
            .ok_or(TodoError::ListNotFound(list_id))
    }

    pub fn find_list_mut(&mut self, list_id: i64) -> Result<&mut TodoList> {
        self.lists
            .iter_mut()
            .find(|l| l.id() == list_id)
            .ok_or(TodoError::ListNotFound(list_id))
    }

    // ==================== Todo Operations ====================

    /// Add a todo to a list. Returns the new todo's id.
    pub fn add_todo(&mut self, list_id: i64, title: &str) -> Result<i64> {
        let title = validate_title(title)?;
        self.find_list_mut(list_id)?.add_todo(&title)
    }

    /// Flip a todo's done flag. Returns the new state.
    pub fn toggle_todo(&mut self, list_id: i64, todo_id: i64) -> Result<bool> {
        let todo = self
            .find_list_mut(list_id)?
            .find_by_id_mut(todo_id)
            .ok_or(TodoError::TodoNotFound { list_id, todo_id })?;
        if todo.is_done() {
            todo.mark_undone();
        } else {
            todo.mark_done();
        }
        Ok(todo.is_done())
    }

    /// Remove a todo from a list and return it
    pub fn delete_todo(&mut self, list_id: i64, todo_id: i64) -> Result<Todo> {
        let list = self.find_list_mut(list_id)?;
        let index = list
            .todos()
            .iter()
            .position(|t| t.id() == todo_id)
            .ok_or(TodoError::TodoNotFound { list_id, todo_id })?;
        list.remove_at(index)
    }

    pub fn mark_all_done(&mut self, list_id: i64) -> Result<()> {
        self.find_list_mut(list_id)?.mark_all_done();
        Ok(())
    }

    pub fn find_todo(&self, list_id: i64, todo_id: i64) -> Result<&Todo> {
        self.find_list(list_id)?
            .find_by_id(todo_id)
            .ok_or(TodoError::TodoNotFound { list_id, todo_id })
    }

    // ==================== Presentation ====================

    /// Lists in display order (not-done first, case-insensitive by title)
    pub fn lists_sorted(&self) -> Vec<&TodoList> {
        sort::sort_todo_lists(&self.lists)
    }

    /// One list's todos in display order
    pub fn todos_sorted(&self, list_id: i64) -> Result<Vec<&Todo>> {
        Ok(sort::sort_todos(self.find_list(list_id)?))
    }

    /// Lists in storage order
    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    // ==================== Helper Methods ====================

    /// Uniqueness is case-sensitive exact match. `exclude` skips the list
    /// being renamed so a no-op rename is legal.
    fn check_unique_title(&self, title: &str, exclude: Option<i64>) -> Result<()> {
        let taken = self
            .lists
            .iter()
            .any(|l| Some(l.id()) != exclude && l.title() == title);
        if taken {
            return Err(TodoError::DuplicateListTitle(title.to_string()));
        }
        Ok(())
    }
}
