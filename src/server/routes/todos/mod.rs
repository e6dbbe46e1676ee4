use crate::server::router::{TogoState, method_not_allowed_handler};
use axum::{
    Router,
    routing::{MethodRouter, get, post},
};

pub mod extract;
pub mod handlers;

/// Path prefix whose next segment is the todo id.
pub const TODO_ID_PREFIX: &str = "/todos/";

pub fn router() -> Router<TogoState> {
    // `get` also answers HEAD unless HEAD is routed explicitly.
    let by_id: MethodRouter<TogoState> = get(handlers::get_todo)
        .head(method_not_allowed_handler)
        .put(handlers::update_todo)
        .delete(handlers::delete_todo);

    Router::new()
        .route(
            "/todos",
            get(handlers::list_todos).head(method_not_allowed_handler),
        )
        .route("/todos/new", post(handlers::create_todo))
        // Everything under `/todos/` is id-addressed; trailing segments are ignored.
        .route("/todos/", by_id.clone())
        .route("/todos/{id}", by_id.clone())
        .route("/todos/{id}/{*rest}", by_id)
}
