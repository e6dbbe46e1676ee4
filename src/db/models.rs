use chrono::{DateTime, Utc};
use sqlx::FromRow;
use togo_schema::Todo;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DbTodo {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbTodo> for Todo {
    fn from(row: DbTodo) -> Self {
        Todo {
            id: row.id,
            title: row.title,
            description: row.description,
            completed: row.completed,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
