//! The session store persists inert structured data, never live entities.
//! This module defines that inert shape and the two total conversions
//! between it and the behavior-bearing `TodoList`/`Todo` graph. Every field
//! and both ordering levels must survive the round trip exactly; anything
//! dropped or reordered here becomes a persistent user-facing bug.

use crate::error::{Result, TodoError};
use crate::models::{Todo, TodoList};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Wire shape of the whole session document.
/// An absent `todoLists` key reads as the empty collection (first visit).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    #[serde(rename = "todoLists", default)]
    pub todo_lists: Vec<TodoListSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoListSnapshot {
    pub id: i64,
    pub title: String,
    pub todos: Vec<TodoSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoSnapshot {
    pub id: i64,
    pub title: String,
    pub done: bool,
}

/// Reconstruct live lists from a snapshot, preserving ids, titles, done
/// flags, and the order of lists and of todos within each list.
///
/// A present-but-malformed snapshot (invalid or untrimmed title, duplicate
/// list id or title, duplicate todo id within a list) fails rather than
/// being silently repaired; a truncated or guessed rebuild would masquerade
/// as success. Titles are stored trimmed, so a snapshot this system wrote
/// never carries surrounding whitespace; one that does is malformed, and
/// trimming it here would both alter persisted state and let two titles
/// collide after the uniqueness check.
pub fn rehydrate(snapshot: &SessionSnapshot) -> Result<Vec<TodoList>> {
    let mut lists = Vec::with_capacity(snapshot.todo_lists.len());
    let mut seen_ids = HashSet::new();
    let mut seen_titles = HashSet::new();

    for list_snap in &snapshot.todo_lists {
        if list_snap.title.trim() != list_snap.title {
            return Err(TodoError::Rehydration(format!(
                "untrimmed title {:?} on list #{}",
                list_snap.title, list_snap.id
            )));
        }
        if !seen_ids.insert(list_snap.id) {
            return Err(TodoError::Rehydration(format!(
                "duplicate list id #{}",
                list_snap.id
            )));
        }
        if !seen_titles.insert(list_snap.title.as_str()) {
            return Err(TodoError::Rehydration(format!(
                "duplicate list title {:?}",
                list_snap.title
            )));
        }

        let mut list = TodoList::new(list_snap.id, &list_snap.title)
            .map_err(|e| TodoError::Rehydration(format!("list #{}: {e}", list_snap.id)))?;

        let mut seen_todo_ids = HashSet::new();
        for todo_snap in &list_snap.todos {
            if todo_snap.title.trim() != todo_snap.title {
                return Err(TodoError::Rehydration(format!(
                    "untrimmed title {:?} on todo #{} in list #{}",
                    todo_snap.title, todo_snap.id, list_snap.id
                )));
            }
            if !seen_todo_ids.insert(todo_snap.id) {
                return Err(TodoError::Rehydration(format!(
                    "duplicate todo id #{} in list #{}",
                    todo_snap.id, list_snap.id
                )));
            }
            let mut todo = Todo::new(todo_snap.id, &todo_snap.title).map_err(|e| {
                TodoError::Rehydration(format!(
                    "todo #{} in list #{}: {e}",
                    todo_snap.id, list_snap.id
                ))
            })?;
            if todo_snap.done {
                todo.mark_done();
            }
            list.add(todo);
        }

        lists.push(list);
    }

    Ok(lists)
}

/// Project live lists back into the wire shape
pub fn serialize(lists: &[TodoList]) -> SessionSnapshot {
    SessionSnapshot {
        todo_lists: lists
            .iter()
            .map(|list| TodoListSnapshot {
                id: list.id(),
                title: list.title().to_string(),
                todos: list
                    .todos()
                    .iter()
                    .map(|todo| TodoSnapshot {
                        id: todo.id(),
                        title: todo.title().to_string(),
                        done: todo.is_done(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SessionSnapshot {
        serde_json::from_str(
            r#"{
                "todoLists": [
                    {
                        "id": 2,
                        "title": "Work",
                        "todos": [
                            { "id": 3, "title": "Report", "done": true },
                            { "id": 1, "title": "Email", "done": false }
                        ]
                    },
                    { "id": 1, "title": "Groceries", "todos": [] }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_round_trip_preserves_everything() {
        let snapshot = sample();
        let lists = rehydrate(&snapshot).unwrap();
        assert_eq!(serialize(&lists), snapshot);
    }

    #[test]
    fn test_rehydrated_lists_behave() {
        let lists = rehydrate(&sample()).unwrap();

        let work = &lists[0];
        assert_eq!(work.id(), 2);
        assert_eq!(work.len(), 2);
        assert!(!work.is_done());
        assert!(work.find_by_id(3).unwrap().is_done());
        assert!(!work.find_by_id(1).unwrap().is_done());

        // Item order is snapshot order, not id order
        assert_eq!(work.todos()[0].id(), 3);
        assert_eq!(work.todos()[1].id(), 1);

        // Fresh ids must not collide with rehydrated ones
        let mut work = work.clone();
        assert_eq!(work.add_todo("Standup").unwrap(), 4);
    }

    #[test]
    fn test_absent_key_is_empty_collection() {
        let snapshot: SessionSnapshot = serde_json::from_str("{}").unwrap();
        assert!(rehydrate(&snapshot).unwrap().is_empty());

        let snapshot: SessionSnapshot = serde_json::from_str(r#"{"todoLists": []}"#).unwrap();
        assert!(rehydrate(&snapshot).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_list_id_rejected() {
        let snapshot: SessionSnapshot = serde_json::from_str(
            r#"{"todoLists": [
                { "id": 1, "title": "A", "todos": [] },
                { "id": 1, "title": "B", "todos": [] }
            ]}"#,
        )
        .unwrap();
        assert!(matches!(
            rehydrate(&snapshot),
            Err(TodoError::Rehydration(_))
        ));
    }

    #[test]
    fn test_duplicate_list_title_rejected() {
        let snapshot: SessionSnapshot = serde_json::from_str(
            r#"{"todoLists": [
                { "id": 1, "title": "Work", "todos": [] },
                { "id": 2, "title": "Work", "todos": [] }
            ]}"#,
        )
        .unwrap();
        assert!(matches!(
            rehydrate(&snapshot),
            Err(TodoError::Rehydration(_))
        ));
    }

    #[test]
    fn test_invalid_title_rejected() {
        let snapshot: SessionSnapshot = serde_json::from_str(
            r#"{"todoLists": [ { "id": 1, "title": "", "todos": [] } ]}"#,
        )
        .unwrap();
        assert!(matches!(
            rehydrate(&snapshot),
            Err(TodoError::Rehydration(_))
        ));
    }

    #[test]
    fn test_untrimmed_titles_rejected_not_repaired() {
        // Stored titles are always trimmed; trimming here instead of
        // failing would rewrite persisted state behind the user's back
        // and break the exact round-trip guarantee.
        let snapshot: SessionSnapshot = serde_json::from_str(
            r#"{"todoLists": [ { "id": 1, "title": " Groceries", "todos": [] } ]}"#,
        )
        .unwrap();
        assert!(matches!(
            rehydrate(&snapshot),
            Err(TodoError::Rehydration(_))
        ));

        let snapshot: SessionSnapshot = serde_json::from_str(
            r#"{"todoLists": [ { "id": 1, "title": "Groceries", "todos": [
                { "id": 1, "title": " Milk ", "done": false }
            ] } ]}"#,
        )
        .unwrap();
        assert!(matches!(
            rehydrate(&snapshot),
            Err(TodoError::Rehydration(_))
        ));
    }

    #[test]
    fn test_titles_colliding_after_trim_rejected() {
        // "A" and " A" pass a naive uniqueness check but would rehydrate
        // into two lists with one title; the untrimmed one is malformed.
        let snapshot: SessionSnapshot = serde_json::from_str(
            r#"{"todoLists": [
                { "id": 1, "title": "A", "todos": [] },
                { "id": 2, "title": " A", "todos": [] }
            ]}"#,
        )
        .unwrap();
        assert!(matches!(
            rehydrate(&snapshot),
            Err(TodoError::Rehydration(_))
        ));
    }

    #[test]
    fn test_duplicate_todo_id_rejected() {
        let snapshot: SessionSnapshot = serde_json::from_str(
            r#"{"todoLists": [ { "id": 1, "title": "A", "todos": [
                { "id": 1, "title": "x", "done": false },
                { "id": 1, "title": "y", "done": false }
            ] } ]}"#,
        )
        .unwrap();
        assert!(matches!(
            rehydrate(&snapshot),
            Err(TodoError::Rehydration(_))
        ));
    }

    #[test]
    fn test_missing_required_field_fails_at_parse() {
        let result: std::result::Result<SessionSnapshot, _> =
            serde_json::from_str(r#"{"todoLists": [ { "title": "A", "todos": [] } ]}"#);
        assert!(result.is_err());
    }
}
