pub mod cli;
pub mod cli_handlers;
pub mod core;
pub mod error;
pub mod models;
pub mod snapshot;
pub mod sort;
pub mod store;

pub use error::{Result, TodoError};
pub use models::{Todo, TodoList};
