use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tl")]
#[command(about = "Session-backed Todo List Manager")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Session document path (defaults to todos.json in the current directory)
    #[arg(long, global = true)]
    pub session: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show all todo lists in display order
    Lists,

    /// Create a new todo list
    New {
        /// List title
        title: String,
    },

    /// Rename a todo list
    Rename {
        /// List ID
        id: i64,
        /// New title
        title: String,
    },

    /// Delete a todo list
    Delete {
        /// List ID
        id: i64,
    },

    /// Show one list's todos in display order
    Show {
        /// List ID
        id: i64,
    },

    /// Add a todo to a list
    Add {
        /// List ID
        list: i64,
        /// Todo title
        title: String,
    },

    /// Toggle a todo between done and not done
    Toggle {
        /// List ID
        list: i64,
        /// Todo ID
        todo: i64,
    },

    /// Remove a todo from a list
    Remove {
        /// List ID
        list: i64,
        /// Todo ID
        todo: i64,
    },

    /// Mark every todo in a list as done
    Complete {
        /// List ID
        list: i64,
    },
}
