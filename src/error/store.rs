use thiserror::Error as ThisError;

/// Failures raised by [`crate::db::TodoStore`].
#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("todo not found: id={id}")]
    NotFound { id: i64 },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
