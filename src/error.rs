use thiserror::Error;

/// All possible errors in the todo list manager
#[derive(Error, Debug)]
pub enum TodoError {
    #[error("A title was not provided.")]
    EmptyTitle,

    #[error("List title must be between 1 and 100 characters.")]
    TitleTooLong,

    #[error("List title must be unique.")]
    DuplicateListTitle(String),

    #[error("List #{0} not found")]
    ListNotFound(i64),

    #[error("Todo #{todo_id} not found in list #{list_id}")]
    TodoNotFound { list_id: i64, todo_id: i64 },

    #[error("Index {index} out of range for list of {len} todos")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Malformed session snapshot: {0}")]
    Rehydration(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TodoError {
    /// Validation failures are recoverable at the form boundary;
    /// everything else propagates to the generic failure handler.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TodoError::EmptyTitle | TodoError::TitleTooLong | TodoError::DuplicateListTitle(_)
        )
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TodoError>;
