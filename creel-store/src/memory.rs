use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use creel_api::{CommentId, Profile, Store, Thread, ThreadId, User, UserId, Uuid};

/// Whole-document in-memory store: the reference implementation of the
/// persistence collaborator, also backing the test suites
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: BTreeMap<UserId, User>,
    profiles: HashMap<String, Profile>,
    threads: BTreeMap<ThreadId, Thread>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn fresh_comment_id(&mut self) -> CommentId {
        CommentId(Uuid::new_v4())
    }

    async fn load_thread(&mut self, id: ThreadId) -> anyhow::Result<Option<Thread>> {
        Ok(self.threads.get(&id).cloned())
    }

    async fn save_thread(&mut self, thread: &Thread) -> anyhow::Result<()> {
        self.threads.insert(thread.id, thread.clone());
        Ok(())
    }

    async fn list_threads(&mut self) -> anyhow::Result<Vec<Thread>> {
        let mut threads = self.threads.values().cloned().collect::<Vec<_>>();
        threads.sort_by_key(|t| t.date);
        Ok(threads)
    }

    async fn user_by_id(&mut self, id: UserId) -> anyhow::Result<Option<User>> {
        Ok(self.users.get(&id).cloned())
    }

    async fn user_by_name(&mut self, username: &str) -> anyhow::Result<Option<User>> {
        Ok(self.users.values().find(|u| u.username == username).cloned())
    }

    async fn user_by_email(&mut self, email: &str) -> anyhow::Result<Option<User>> {
        Ok(self.users.values().find(|u| u.email == email).cloned())
    }

    async fn create_user(&mut self, user: User) -> anyhow::Result<()> {
        self.users.insert(user.id, user);
        Ok(())
    }

    async fn load_profile(&mut self, username: &str) -> anyhow::Result<Option<Profile>> {
        Ok(self.profiles.get(username).cloned())
    }

    async fn save_profile(&mut self, profile: &Profile) -> anyhow::Result<()> {
        self.profiles.insert(profile.username.clone(), profile.clone());
        Ok(())
    }
}
