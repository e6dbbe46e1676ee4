use axum::{Json, http::StatusCode, response::IntoResponse};
use std::fmt;
use thiserror::Error as ThisError;
use togo_schema::MessageBody;
use tracing::{debug, error};

use super::StoreError;

/// Store operation a handler was performing when it failed; selects the client-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl StoreOp {
    pub fn failure_message(self) -> &'static str {
        match self {
            StoreOp::List => "cannot get all todos",
            StoreOp::Get => "cannot get todo by id",
            StoreOp::Create => "cannot create new todo",
            StoreOp::Update => "cannot update todo",
            StoreOp::Delete => "cannot delete todo",
        }
    }
}

impl fmt::Display for StoreOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}

/// HTTP-facing error. Client errors map to 400, every store failure maps to 500.
#[derive(Debug, ThisError)]
pub enum TogoError {
    #[error("invalid id")]
    InvalidId,

    #[error("cannot read request body")]
    MalformedBody { reason: String },

    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("{op}")]
    Store {
        op: StoreOp,
        #[source]
        source: StoreError,
    },
}

impl TogoError {
    pub fn store(op: StoreOp) -> impl FnOnce(StoreError) -> Self {
        move |source| TogoError::Store { op, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            TogoError::InvalidId | TogoError::MalformedBody { .. } | TogoError::EmptyTitle => {
                StatusCode::BAD_REQUEST
            }
            // Not-found is deliberately not surfaced as 404.
            TogoError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TogoError {
    fn into_response(self) -> axum::response::Response {
        match &self {
            TogoError::MalformedBody { reason } => {
                debug!(reason = %reason, "rejected request body");
            }
            TogoError::Store { op, source } => {
                error!(
                    op = ?op,
                    not_found = source.is_not_found(),
                    error = %source,
                    "store operation failed"
                );
            }
            TogoError::InvalidId | TogoError::EmptyTitle => {}
        }

        (self.status(), Json(MessageBody::new(self.to_string()))).into_response()
    }
}
