mod comment;
mod db;
mod error;
mod profile;
mod thread;
mod user;

pub use comment::{Comment, CommentId, CommentTree, DELETED_COMMENT_CONTENT};
pub use db::Store;
pub use error::Error;
pub use profile::{Profile, SocialLink};
pub use thread::{NewThread, Thread, ThreadId};
pub use user::{NewUser, User, UserId};

pub use uuid::{uuid, Uuid};
pub type Time = chrono::DateTime<chrono::Utc>;

pub const STUB_UUID: Uuid = uuid!("ffffffff-ffff-ffff-ffff-ffffffffffff");

/// Checks that a string can be persisted and echoed back verbatim
pub fn validate_string(s: &str) -> Result<(), Error> {
    match s.contains('\0') {
        true => Err(Error::NullByteInString(String::from(s))),
        false => Ok(()),
    }
}

/// Usernames double as requester identities, and a tombstoned comment's
/// author is the empty string, so the empty name is never valid
pub fn validate_name(s: &str) -> Result<(), Error> {
    let ok = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    match ok {
        true => Ok(()),
        false => Err(Error::InvalidName(String::from(s))),
    }
}
