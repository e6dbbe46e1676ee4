use crate::error::TogoError;
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
};
use percent_encoding::percent_decode_str;
use serde::de::DeserializeOwned;

use super::TODO_ID_PREFIX;

/// Todo id taken from the first segment of the percent-decoded path after `/todos/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoId(pub i64);

impl<S> FromRequestParts<S> for TodoId
where
    S: Send + Sync,
{
    type Rejection = TogoError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parse_todo_id(parts.uri.path())
            .map(TodoId)
            .ok_or(TogoError::InvalidId)
    }
}

pub(crate) fn parse_todo_id(path: &str) -> Option<i64> {
    let rest = path.strip_prefix(TODO_ID_PREFIX)?;
    let decoded = percent_decode_str(rest).decode_utf8().ok()?;
    decoded.split('/').next()?.parse().ok()
}

/// JSON request body decoded without looking at `Content-Type`.
///
/// Only the first JSON value is read; anything after it is ignored. A `null` body yields
/// `T::default()`. Any read or decode failure becomes [`TogoError::MalformedBody`].
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = TogoError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| TogoError::MalformedBody {
                reason: e.body_text(),
            })?;

        let first = serde_json::Deserializer::from_slice(&bytes)
            .into_iter::<Option<T>>()
            .next()
            .ok_or_else(|| TogoError::MalformedBody {
                reason: "empty body".to_string(),
            })?;

        first
            .map(|value| JsonBody(value.unwrap_or_default()))
            .map_err(|e| TogoError::MalformedBody {
                reason: e.to_string(),
            })
    }
}

/// Trimmed title must be non-empty.
pub(crate) fn ensure_title(title: &str) -> Result<(), TogoError> {
    if title.trim().is_empty() {
        return Err(TogoError::EmptyTitle);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_first_segment_after_prefix() {
        assert_eq!(parse_todo_id("/todos/42"), Some(42));
        assert_eq!(parse_todo_id("/todos/42/"), Some(42));
        assert_eq!(parse_todo_id("/todos/42/comments/7"), Some(42));
        assert_eq!(parse_todo_id("/todos/-3"), Some(-3));
    }

    #[test]
    fn decodes_percent_escapes_before_parsing() {
        assert_eq!(parse_todo_id("/todos/%31"), Some(1));
        assert_eq!(parse_todo_id("/todos/%34%32/x"), Some(42));
        assert_eq!(parse_todo_id("/todos/7%2Fextra"), Some(7));
        assert_eq!(parse_todo_id("/todos/%FF"), None);
    }

    #[test]
    fn rejects_non_integer_segments() {
        assert_eq!(parse_todo_id("/todos/abc"), None);
        assert_eq!(parse_todo_id("/todos/"), None);
        assert_eq!(parse_todo_id("/todos/4.5"), None);
        assert_eq!(parse_todo_id("/todos/99999999999999999999"), None);
        assert_eq!(parse_todo_id("/other/1"), None);
    }

    #[test]
    fn title_must_have_visible_characters() {
        assert!(ensure_title("groceries").is_ok());
        assert!(ensure_title("  groceries ").is_ok());
        assert!(matches!(ensure_title(""), Err(TogoError::EmptyTitle)));
        assert!(matches!(ensure_title(" \t\n "), Err(TogoError::EmptyTitle)));
    }
}
