//! Database module: the `todos` table and everything that touches it.
//!
//! Layout:
//! - `models.rs`: Rust struct mirroring a DB row
//! - `schema.rs`: SQL DDL for initializing the database (SQLite)
//! - `patch.rs`: pure merge of partial updates over a stored todo
//! - `store.rs`: `TodoStore`, the pooled CRUD surface

pub mod models;
pub mod patch;
pub mod schema;
pub mod store;

pub use models::DbTodo;
pub use patch::merge_update;
pub use schema::SQLITE_INIT;
pub use store::TodoStore;
