use std::str::FromStr;

use anyhow::{anyhow, Context};
use serde_json::json;
use uuid::Uuid;

use crate::{CommentId, ThreadId};

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Unknown error: {0}")]
    Unknown(String),

    #[error("Permission denied")]
    PermissionDenied,

    #[error("Thread not found: {0:?}")]
    ThreadNotFound(ThreadId),

    #[error("Comment not found: {0:?}")]
    CommentNotFound(CommentId),

    #[error("Parent comment not found: {0:?}")]
    ParentNotFound(CommentId),

    #[error("No profile for user {0:?}")]
    ProfileNotFound(String),

    #[error("Uuid already used {0}")]
    UuidAlreadyUsed(Uuid),

    #[error("Name already used {0}")]
    NameAlreadyUsed(String),

    #[error("Email already used {0}")]
    EmailAlreadyUsed(String),

    #[error("Null byte in string is not allowed {0:?}")]
    NullByteInString(String),

    #[error("Invalid character in name {0:?}")]
    InvalidName(String),

    #[error("Comment text cannot be empty")]
    EmptyContent,
}

impl Error {
    pub fn status_code(&self) -> http::StatusCode {
        use http::StatusCode;
        match self {
            Error::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::PermissionDenied => StatusCode::FORBIDDEN,
            Error::ThreadNotFound(_) => StatusCode::NOT_FOUND,
            Error::CommentNotFound(_) => StatusCode::NOT_FOUND,
            Error::ParentNotFound(_) => StatusCode::NOT_FOUND,
            Error::ProfileNotFound(_) => StatusCode::NOT_FOUND,
            Error::UuidAlreadyUsed(_) => StatusCode::CONFLICT,
            Error::NameAlreadyUsed(_) => StatusCode::CONFLICT,
            Error::EmailAlreadyUsed(_) => StatusCode::CONFLICT,
            Error::NullByteInString(_) => StatusCode::BAD_REQUEST,
            Error::InvalidName(_) => StatusCode::BAD_REQUEST,
            Error::EmptyContent => StatusCode::BAD_REQUEST,
        }
    }

    pub fn contents(&self) -> Vec<u8> {
        serde_json::to_vec(&match self {
            Error::Unknown(msg) => json!({
                "message": msg,
                "type": "unknown",
            }),
            Error::PermissionDenied => json!({
                "message": "permission denied",
                "type": "permission-denied",
            }),
            Error::ThreadNotFound(t) => json!({
                "message": "thread not found",
                "type": "thread-not-found",
                "thread": t.0,
            }),
            Error::CommentNotFound(c) => json!({
                "message": "comment not found",
                "type": "comment-not-found",
                "comment": c.0,
            }),
            Error::ParentNotFound(c) => json!({
                "message": "parent comment not found",
                "type": "parent-not-found",
                "comment": c.0,
            }),
            Error::ProfileNotFound(u) => json!({
                "message": "no profile for user",
                "type": "profile-not-found",
                "username": u,
            }),
            Error::UuidAlreadyUsed(u) => json!({
                "message": "uuid conflict",
                "type": "conflict-uuid",
                "uuid": u,
            }),
            Error::NameAlreadyUsed(n) => json!({
                "message": "name already used",
                "type": "conflict-name",
                "name": n,
            }),
            Error::EmailAlreadyUsed(e) => json!({
                "message": "email already used",
                "type": "conflict-email",
                "email": e,
            }),
            Error::NullByteInString(s) => json!({
                "message": "there was a null byte in argument string",
                "type": "null-byte",
                "string": s,
            }),
            Error::InvalidName(n) => json!({
                "message": "there was an invalid character in a user name",
                "type": "invalid-name",
                "name": n,
            }),
            Error::EmptyContent => json!({
                "message": "comment text cannot be empty",
                "type": "empty-content",
            }),
        })
        .expect("serializing error contents")
    }

    pub fn parse(body: &[u8]) -> anyhow::Result<Error> {
        fn get_str<'a>(data: &'a serde_json::Value, field: &str) -> anyhow::Result<&'a str> {
            data.get(field)
                .and_then(|v| v.as_str())
                .ok_or_else(|| anyhow!("error field {field:?} is not a string"))
        }
        fn get_uuid(data: &serde_json::Value, field: &str) -> anyhow::Result<Uuid> {
            get_str(data, field).and_then(|s| {
                Uuid::from_str(s).with_context(|| format!("error field {field:?} is not a uuid"))
            })
        }
        let data: serde_json::Value =
            serde_json::from_slice(body).context("parsing error contents")?;
        Ok(
            match data
                .get("type")
                .and_then(|t| t.as_str())
                .ok_or_else(|| anyhow!("error type is not a string"))?
            {
                "unknown" => Error::Unknown(String::from(
                    data.get("message")
                        .and_then(|msg| msg.as_str())
                        .unwrap_or(""),
                )),
                "permission-denied" => Error::PermissionDenied,
                "thread-not-found" => Error::ThreadNotFound(ThreadId(get_uuid(&data, "thread")?)),
                "comment-not-found" => {
                    Error::CommentNotFound(CommentId(get_uuid(&data, "comment")?))
                }
                "parent-not-found" => Error::ParentNotFound(CommentId(get_uuid(&data, "comment")?)),
                "profile-not-found" => {
                    Error::ProfileNotFound(String::from(get_str(&data, "username")?))
                }
                "conflict-uuid" => Error::UuidAlreadyUsed(get_uuid(&data, "uuid")?),
                "conflict-name" => Error::NameAlreadyUsed(String::from(get_str(&data, "name")?)),
                "conflict-email" => Error::EmailAlreadyUsed(String::from(get_str(&data, "email")?)),
                "null-byte" => Error::NullByteInString(String::from(get_str(&data, "string")?)),
                "invalid-name" => Error::InvalidName(String::from(get_str(&data, "name")?)),
                "empty-content" => Error::EmptyContent,
                _ => return Err(anyhow!("error contents has unknown type")),
            },
        )
    }
}
