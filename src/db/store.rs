use crate::config::DatabaseConfig;
use crate::db::models::DbTodo;
use crate::db::patch::merge_update;
use crate::db::schema::SQLITE_INIT;
use crate::error::StoreError;
use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;
use togo_schema::{CreateTodoInput, Todo, UpdateTodoInput};
use tracing::{debug, info};

/// CRUD access to the `todos` table.
///
/// Cloning is cheap and shares the underlying pool. There is no in-process locking;
/// each call checks a connection out of the pool for the duration of its statement(s).
#[derive(Clone)]
pub struct TodoStore {
    pool: SqlitePool,
}

impl TodoStore {
    /// Opens the pool, creating the database file if needed, and applies the schema.
    pub async fn connect(database_url: &str, cfg: &DatabaseConfig) -> Result<Self, StoreError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .busy_timeout(cfg.busy_timeout())
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(cfg.max_connections)
            .min_connections(cfg.min_connections)
            .connect_with(connect_opts)
            .await?;

        apply_schema(&pool).await?;

        info!(
            max_connections = cfg.max_connections,
            min_connections = cfg.min_connections,
            "TodoStore initialized"
        );
        Ok(Self::from_pool(pool))
    }

    /// Wraps an existing pool. The schema must already be applied.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Waits for checked-out connections to return, then closes the pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// All todos, newest first.
    pub async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let rows = sqlx::query_as::<_, DbTodo>(
            r#"
        SELECT id, title, description, completed, created_at, updated_at
        FROM todos
        ORDER BY created_at DESC, id DESC
        "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Todo, StoreError> {
        let row = sqlx::query_as::<_, DbTodo>(
            r#"
        SELECT id, title, description, completed, created_at, updated_at
        FROM todos
        WHERE id = ?
        "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Todo::from).ok_or(StoreError::NotFound { id })
    }

    /// Inserts a todo; `created_at` and `updated_at` come from the column defaults.
    pub async fn create(&self, input: CreateTodoInput) -> Result<Todo, StoreError> {
        let row = sqlx::query_as::<_, DbTodo>(
            r#"
        INSERT INTO todos (title, description, completed)
        VALUES (?, ?, ?)
        RETURNING id, title, description, completed, created_at, updated_at
        "#,
        )
        .bind(input.title)
        .bind(input.description)
        .bind(input.completed)
        .fetch_one(&self.pool)
        .await?;

        debug!(id = row.id, "todo created");
        Ok(row.into())
    }

    /// Read-modify-write update.
    ///
    /// The read and the write are separate statements with no enclosing transaction, so two
    /// concurrent updates of the same id can overwrite each other (last writer wins, based on
    /// whatever it read).
    pub async fn update(&self, id: i64, input: UpdateTodoInput) -> Result<Todo, StoreError> {
        let title_set = input.title.is_some();
        let description_set = input.description.is_some();
        let completed_set = input.completed.is_some();
        let no_op = input.is_empty();

        let current = self.get_by_id(id).await?;
        let merged = merge_update(current, input, Utc::now());

        let row = sqlx::query_as::<_, DbTodo>(
            r#"
        UPDATE todos
        SET title = ?, description = ?, completed = ?, updated_at = ?
        WHERE id = ?
        RETURNING id, title, description, completed, created_at, updated_at
        "#,
        )
        .bind(merged.title)
        .bind(merged.description)
        .bind(merged.completed)
        .bind(merged.updated_at)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        // The row can disappear between the read and the write.
        let row = row.ok_or(StoreError::NotFound { id })?;

        debug!(
            id,
            updated_at = %row.updated_at,
            title_set,
            description_set,
            completed_set,
            no_op,
            "todo updated"
        );
        Ok(row.into())
    }

    /// Deletes by id. A missing row is not an error.
    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let res = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(id, affected = res.rows_affected(), "todo delete applied");
        Ok(())
    }
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), StoreError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
