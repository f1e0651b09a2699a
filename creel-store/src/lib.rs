mod error;
mod memory;


pub use error::Error;
pub use memory::MemoryStore;

use anyhow::Context;
use chrono::Utc;
use creel_api::{
    Comment, CommentId, NewThread, NewUser, Profile, Store, Thread, ThreadId, User, Uuid,
};

/// Forum service invoked by the surrounding request layer.
///
/// Every mutation is one logical operation against one thread document:
/// load the whole thread, mutate the in-memory tree, write the whole thread
/// back. Requester identities arrive here already verified.
pub struct Forum<S> {
    store: S,
}

impl<S: Store> Forum<S> {
    pub fn new(store: S) -> Forum<S> {
        Forum { store }
    }

    pub async fn signup(&mut self, data: NewUser) -> Result<User, Error> {
        data.validate()?;
        if self
            .store
            .user_by_id(data.id)
            .await
            .context("looking up user id")?
            .is_some()
        {
            return Err(Error::uuid_already_used(data.id.0));
        }
        if self
            .store
            .user_by_name(&data.username)
            .await
            .context("looking up username")?
            .is_some()
        {
            return Err(Error::name_already_used(data.username));
        }
        if self
            .store
            .user_by_email(&data.email)
            .await
            .context("looking up email")?
            .is_some()
        {
            return Err(Error::email_already_used(data.email));
        }
        let user = User::from(data);
        self.store
            .create_user(user.clone())
            .await
            .context("persisting new user")?;
        // seed the profile so later updates have a record to replace
        let profile = Profile {
            username: user.username.clone(),
            name: format!("{} {}", user.first_name, user.last_name),
            email: user.email.clone(),
            ..Profile::default()
        };
        self.store
            .save_profile(&profile)
            .await
            .context("seeding profile")?;
        tracing::debug!(id = ?user.id, username = %user.username, "registered user");
        Ok(user)
    }

    pub async fn create_thread(&mut self, author: &str, data: NewThread) -> Result<Thread, Error> {
        creel_api::validate_name(author)?;
        data.validate()?;
        let thread = Thread::new(
            ThreadId(Uuid::new_v4()),
            String::from(author),
            data,
            Utc::now(),
        );
        self.store
            .save_thread(&thread)
            .await
            .context("persisting new thread")?;
        tracing::debug!(id = ?thread.id, "created thread");
        Ok(thread)
    }

    pub async fn list_threads(&mut self) -> Result<Vec<Thread>, Error> {
        Ok(self.store.list_threads().await.context("listing threads")?)
    }

    /// Returns the thread for display and bumps its view counter
    pub async fn view_thread(&mut self, id: ThreadId) -> Result<Thread, Error> {
        let mut thread = self.load(id).await?;
        thread.total_views += 1;
        self.store
            .save_thread(&thread)
            .await
            .context("persisting view count")?;
        Ok(thread)
    }

    pub async fn post_comment(
        &mut self,
        thread_id: ThreadId,
        requester: &str,
        content: &str,
    ) -> Result<Thread, Error> {
        self.insert(thread_id, None, requester, content).await
    }

    pub async fn post_reply(
        &mut self,
        thread_id: ThreadId,
        parent: CommentId,
        requester: &str,
        content: &str,
    ) -> Result<Thread, Error> {
        self.insert(thread_id, Some(parent), requester, content).await
    }

    async fn insert(
        &mut self,
        thread_id: ThreadId,
        parent: Option<CommentId>,
        requester: &str,
        content: &str,
    ) -> Result<Thread, Error> {
        creel_api::validate_name(requester)?;
        creel_api::validate_string(content)?;
        let mut thread = self.load(thread_id).await?;
        let comment = Comment::new(
            self.store.fresh_comment_id(),
            String::from(requester),
            String::from(content),
            Utc::now(),
        );
        thread.comments.insert(parent, comment)?;
        self.store
            .save_thread(&thread)
            .await
            .context("persisting comment")?;
        Ok(thread)
    }

    pub async fn edit_comment(
        &mut self,
        thread_id: ThreadId,
        comment_id: CommentId,
        requester: &str,
        content: &str,
    ) -> Result<Thread, Error> {
        creel_api::validate_name(requester)?;
        creel_api::validate_string(content)?;
        let mut thread = self.load(thread_id).await?;
        thread.comments.edit(&comment_id, requester, content)?;
        self.store
            .save_thread(&thread)
            .await
            .context("persisting edit")?;
        Ok(thread)
    }

    pub async fn delete_comment(
        &mut self,
        thread_id: ThreadId,
        comment_id: CommentId,
        requester: &str,
    ) -> Result<Thread, Error> {
        creel_api::validate_name(requester)?;
        let mut thread = self.load(thread_id).await?;
        thread.comments.delete(&comment_id, requester)?;
        self.store
            .save_thread(&thread)
            .await
            .context("persisting tombstone")?;
        tracing::debug!(?comment_id, "tombstoned comment");
        Ok(thread)
    }

    pub async fn fetch_profile(&mut self, username: &str) -> Result<Profile, Error> {
        self.store
            .load_profile(username)
            .await
            .context("loading profile")?
            .ok_or_else(|| Error::profile_not_found(username))
    }

    pub async fn update_profile(
        &mut self,
        requester: &str,
        profile: Profile,
    ) -> Result<Profile, Error> {
        profile.validate()?;
        if requester != profile.username {
            return Err(Error::permission_denied());
        }
        if self
            .store
            .load_profile(&profile.username)
            .await
            .context("loading profile")?
            .is_none()
        {
            return Err(Error::profile_not_found(&profile.username));
        }
        self.store
            .save_profile(&profile)
            .await
            .context("persisting profile")?;
        Ok(profile)
    }

    async fn load(&mut self, id: ThreadId) -> Result<Thread, Error> {
        self.store
            .load_thread(id)
            .await
            .context("loading thread")?
            .ok_or_else(|| Error::thread_not_found(id))
    }
}
