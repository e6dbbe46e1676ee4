use chrono::{DateTime, Utc};
use togo_schema::{Todo, UpdateTodoInput};

/// Applies the fields present in `overrides` on top of `existing` and stamps `updated_at`.
///
/// `id` and `created_at` are carried over untouched. Title validation happens before this
/// is called.
pub fn merge_update(existing: Todo, overrides: UpdateTodoInput, now: DateTime<Utc>) -> Todo {
    let UpdateTodoInput {
        title,
        description,
        completed,
    } = overrides;

    Todo {
        title: title.unwrap_or(existing.title),
        description: description.unwrap_or(existing.description),
        completed: completed.unwrap_or(existing.completed),
        updated_at: now,
        ..existing
    }
}
