//! Display ordering. Both functions are read-only projections producing a
//! new sequence of references; the underlying storage order is never
//! touched, since positional operations key on it.

use crate::models::{Todo, TodoList};
use std::cmp::Ordering;

/// Lowercase both titles, then code-point lexicographic. Titles equal after
/// lowercasing compare equal, so the stable sort keeps their original order.
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Lists for the overview page: not-done lists first, then done lists,
/// each group sorted case-insensitively by title.
pub fn sort_todo_lists(lists: &[TodoList]) -> Vec<&TodoList> {
    let mut undone: Vec<&TodoList> = lists.iter().filter(|l| !l.is_done()).collect();
    let mut done: Vec<&TodoList> = lists.iter().filter(|l| l.is_done()).collect();

    undone.sort_by(|a, b| compare_titles(a.title(), b.title()));
    done.sort_by(|a, b| compare_titles(a.title(), b.title()));

    undone.extend(done);
    undone
}

/// Same ordering applied to one list's todos
pub fn sort_todos(list: &TodoList) -> Vec<&Todo> {
    let mut undone: Vec<&Todo> = list.todos().iter().filter(|t| !t.is_done()).collect();
    let mut done: Vec<&Todo> = list.todos().iter().filter(|t| t.is_done()).collect();

    undone.sort_by(|a, b| compare_titles(a.title(), b.title()));
    done.sort_by(|a, b| compare_titles(a.title(), b.title()));

    undone.extend(done);
    undone
}
