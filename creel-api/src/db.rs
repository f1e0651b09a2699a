use async_trait::async_trait;

use crate::{CommentId, Profile, Thread, ThreadId, User, UserId};

/// Persistence and id-generation collaborators of the forum service.
///
/// Threads are read and written as whole documents; implementations must
/// make each call atomic, and `fresh_comment_id` must never hand out an id
/// already present in any thread.
#[async_trait]
pub trait Store {
    fn fresh_comment_id(&mut self) -> CommentId;

    async fn load_thread(&mut self, id: ThreadId) -> anyhow::Result<Option<Thread>>;
    async fn save_thread(&mut self, thread: &Thread) -> anyhow::Result<()>;
    async fn list_threads(&mut self) -> anyhow::Result<Vec<Thread>>;

    async fn user_by_id(&mut self, id: UserId) -> anyhow::Result<Option<User>>;
    async fn user_by_name(&mut self, username: &str) -> anyhow::Result<Option<User>>;
    async fn user_by_email(&mut self, email: &str) -> anyhow::Result<Option<User>>;
    async fn create_user(&mut self, user: User) -> anyhow::Result<()>;

    async fn load_profile(&mut self, username: &str) -> anyhow::Result<Option<Profile>>;
    async fn save_profile(&mut self, profile: &Profile) -> anyhow::Result<()>;
}
