use crate::error::{Result, TodoError};
use std::fmt;

/// Maximum title length, in characters, after trimming
pub const MAX_TITLE_LEN: usize = 100;

/// Trim a title and enforce the length invariant shared by todos and lists.
/// Returns the trimmed form, which is what gets stored.
pub fn validate_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TodoError::EmptyTitle);
    }
    if trimmed.chars().count() > MAX_TITLE_LEN {
        return Err(TodoError::TitleTooLong);
    }
    Ok(trimmed.to_string())
}

/// A single completable item, exclusively owned by one `TodoList`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id: i64,
    title: String,
    done: bool,
}

impl Todo {
    /// Create an undone todo. The title guard runs here unconditionally,
    /// even when the caller has already validated.
    pub fn new(id: i64, title: &str) -> Result<Self> {
        let title = validate_title(title)?;
        Ok(Todo {
            id,
            title,
            done: false,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Idempotent
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Idempotent
    pub fn mark_undone(&mut self) {
        self.done = false;
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.done { "x" } else { " " };
        write!(f, "[{marker}] {}", self.title)
    }
}

/// An ordered aggregate of todos. Item ids are allocated by the list and
/// never reused within the live collection's lifetime, even after removal.
#[derive(Debug, Clone)]
pub struct TodoList {
    id: i64,
    title: String,
    todos: Vec<Todo>,
    next_todo_id: i64,
}

impl TodoList {
    /// Create an empty list. Title uniqueness against sibling lists is the
    /// collection's check; only the length guard runs here.
    pub fn new(id: i64, title: &str) -> Result<Self> {
        let title = validate_title(title)?;
        Ok(TodoList {
            id,
            title,
            todos: Vec::new(),
            next_todo_id: 1,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the title. The caller re-validates uniqueness beforehand,
    /// symmetric with creation.
    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.title = validate_title(title)?;
        Ok(())
    }

    /// Append an existing todo, keeping the id watermark ahead of it
    pub fn add(&mut self, todo: Todo) {
        self.next_todo_id = self.next_todo_id.max(todo.id + 1);
        self.todos.push(todo);
    }

    /// Create a todo with a fresh id and append it. Returns the new id.
    pub fn add_todo(&mut self, title: &str) -> Result<i64> {
        let todo = Todo::new(self.next_todo_id, title)?;
        let id = todo.id;
        self.add(todo);
        Ok(id)
    }

    /// Remove and return the todo at `index` in storage order
    pub fn remove_at(&mut self, index: usize) -> Result<Todo> {
        if index >= self.todos.len() {
            return Err(TodoError::IndexOutOfRange {
                index,
                len: self.todos.len(),
            });
        }
        Ok(self.todos.remove(index))
    }

    /// Position in storage order, matched by id. Rehydration produces new
    /// instances each request, so reference identity means nothing here.
    pub fn find_index_of(&self, todo: &Todo) -> Option<usize> {
        self.todos.iter().position(|t| t.id == todo.id)
    }

    pub fn find_by_id(&self, todo_id: i64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == todo_id)
    }

    pub fn find_by_id_mut(&mut self, todo_id: i64) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|t| t.id == todo_id)
    }

    /// No-op on an empty list
    pub fn mark_all_done(&mut self) {
        for todo in &mut self.todos {
            todo.mark_done();
        }
    }

    /// A list is done iff it has at least one todo and all of them are done.
    /// An empty list is not done.
    pub fn is_done(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(Todo::is_done)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn done_count(&self) -> usize {
        self.todos.iter().filter(|t| t.is_done()).count()
    }

    /// Todos in storage (insertion) order
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }
}
