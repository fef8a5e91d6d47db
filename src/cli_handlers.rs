use crate::error::TodoError;
use crate::models::TodoList;
use crate::store::SessionStore;

// Every handler runs one full request cycle: load the session snapshot,
// rehydrate, operate on the live collection, write the snapshot back. The
// write-back is unconditional, matching the session contract, so even
// read-only commands go through it.

/// Handle the lists command
pub fn handle_lists(store: &SessionStore) -> Result<(), TodoError> {
    let collection = store.load()?;

    if collection.is_empty() {
        println!("No todo lists yet. Create one with `tl new <title>`.");
    } else {
        for list in collection.lists_sorted() {
            println!("  [#{:>3}] {}", list.id(), format_list(list));
        }
    }

    store.save(&collection)?;
    Ok(())
}

/// Handle the new command
pub fn handle_new(store: &SessionStore, title: &str) -> Result<(), TodoError> {
    let mut collection = store.load()?;

    let id = collection.create_list(title)?;
    let list = collection.find_list(id)?;
    println!("Created list #{}: {}", list.id(), list.title());

    store.save(&collection)?;
    Ok(())
}

/// Handle the rename command
pub fn handle_rename(store: &SessionStore, id: i64, title: &str) -> Result<(), TodoError> {
    let mut collection = store.load()?;

    collection.rename_list(id, title)?;
    println!("Renamed list #{} to {}", id, collection.find_list(id)?.title());

    store.save(&collection)?;
    Ok(())
}

/// Handle the delete command
pub fn handle_delete(store: &SessionStore, id: i64) -> Result<(), TodoError> {
    let mut collection = store.load()?;

    let removed = collection.delete_list(id)?;
    println!("Deleted list #{}: {}", removed.id(), removed.title());

    store.save(&collection)?;
    Ok(())
}

/// Handle the show command
pub fn handle_show(store: &SessionStore, id: i64) -> Result<(), TodoError> {
    let collection = store.load()?;

    let list = collection.find_list(id)?;
    println!("[#{}] {}", list.id(), format_list(list));

    if list.is_empty() {
        println!("  (no todos)");
    } else {
        for todo in collection.todos_sorted(id)? {
            println!("  [#{:>3}] {todo}", todo.id());
        }
    }

    store.save(&collection)?;
    Ok(())
}

/// Handle the add command
pub fn handle_add(store: &SessionStore, list_id: i64, title: &str) -> Result<(), TodoError> {
    let mut collection = store.load()?;

    let todo_id = collection.add_todo(list_id, title)?;
    let todo = collection.find_todo(list_id, todo_id)?;
    println!("Added todo #{} to list #{}: {}", todo.id(), list_id, todo.title());

    store.save(&collection)?;
    Ok(())
}

/// Handle the toggle command
pub fn handle_toggle(store: &SessionStore, list_id: i64, todo_id: i64) -> Result<(), TodoError> {
    let mut collection = store.load()?;

    let done = collection.toggle_todo(list_id, todo_id)?;
    let todo = collection.find_todo(list_id, todo_id)?;
    if done {
        println!("Marked todo #{} done: {}", todo.id(), todo.title());
    } else {
        println!("Marked todo #{} not done: {}", todo.id(), todo.title());
    }

    store.save(&collection)?;
    Ok(())
}

/// Handle the remove command
pub fn handle_remove(store: &SessionStore, list_id: i64, todo_id: i64) -> Result<(), TodoError> {
    let mut collection = store.load()?;

    let removed = collection.delete_todo(list_id, todo_id)?;
    println!("Removed todo #{}: {}", removed.id(), removed.title());

    store.save(&collection)?;
    Ok(())
}

/// Handle the complete command
pub fn handle_complete(store: &SessionStore, list_id: i64) -> Result<(), TodoError> {
    let mut collection = store.load()?;

    collection.mark_all_done(list_id)?;
    let list = collection.find_list(list_id)?;
    println!("Marked all {} todos done in list #{}", list.len(), list_id);

    store.save(&collection)?;
    Ok(())
}

// Helper function
fn format_list(list: &TodoList) -> String {
    let marker = if list.is_done() { "x" } else { " " };
    format!(
        "[{marker}] {} ({}/{} done)",
        list.title(),
        list.done_count(),
        list.len()
    )
}
