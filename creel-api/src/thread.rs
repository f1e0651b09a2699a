use crate::{CommentTree, Error, Time, Uuid, STUB_UUID};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct ThreadId(pub Uuid);

impl ThreadId {
    pub fn stub() -> ThreadId {
        ThreadId(STUB_UUID)
    }
}

/// One discussion unit: the opening post plus its comment tree, persisted
/// and rewritten as a single document
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Thread {
    pub id: ThreadId,
    pub author: String,
    pub title: String,

    /// Opening post body; replies to it live in `comments`
    pub content: String,

    pub date: Time,
    pub comments: CommentTree,
    pub total_views: u64,
}

impl Thread {
    pub fn new(id: ThreadId, author: String, data: NewThread, date: Time) -> Thread {
        Thread {
            id,
            author,
            title: data.title,
            content: data.content,
            date,
            comments: CommentTree::new(),
            total_views: 0,
        }
    }
}

#[derive(
    Clone,
    Debug,
    Eq,
    PartialEq,
    bolero::generator::TypeGenerator,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct NewThread {
    #[generator(bolero::generator::gen_with::<String>().len(0..50usize))]
    pub title: String,
    #[generator(bolero::generator::gen_with::<String>().len(0..200usize))]
    pub content: String,
}

impl NewThread {
    pub fn validate(&self) -> Result<(), Error> {
        crate::validate_string(&self.title)?;
        crate::validate_string(&self.content)
    }
}
