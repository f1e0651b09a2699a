use crate::{Error, Time, Uuid, STUB_UUID};

/// Placeholder left in place of a soft-deleted comment's text
pub const DELETED_COMMENT_CONTENT: &str = "Comment was deleted";

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CommentId(pub Uuid);

impl CommentId {
    pub fn stub() -> CommentId {
        CommentId(STUB_UUID)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,

    /// Cleared to the empty string when the comment is soft-deleted
    pub author: String,

    pub content: String,

    /// Set at creation, never mutated afterwards
    pub created_at: Time,

    /// Child comments, in posting order
    pub replies: Vec<Comment>,
}

impl Comment {
    pub fn new(id: CommentId, author: String, content: String, created_at: Time) -> Comment {
        Comment {
            id,
            author,
            content,
            created_at,
            replies: Vec::new(),
        }
    }

    /// Pre-order depth-first search for `id` anywhere below `comments`,
    /// returning a mutable handle on the match
    pub fn find_in<'a>(comments: &'a mut [Comment], id: &CommentId) -> Option<&'a mut Comment> {
        for c in comments.iter_mut() {
            if c.id == *id {
                return Some(c);
            }
            if let Some(res) = Comment::find_in(&mut c.replies, id) {
                return Some(res);
            }
        }
        None
    }

    pub fn is_deleted(&self) -> bool {
        self.author.is_empty()
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CommentTree {
    /// Top-level comments, in posting order
    pub roots: Vec<Comment>,

    /// Number of comments ever inserted at any depth. Soft-deletes leave a
    /// tombstone in place, so this never decreases.
    pub total_comments: u64,
}

impl CommentTree {
    pub fn new() -> CommentTree {
        CommentTree {
            roots: Vec::new(),
            total_comments: 0,
        }
    }

    /// Locates a comment at any depth. A miss is a normal outcome: clients
    /// routinely hold on to ids of comments from a stale page load.
    pub fn find(&mut self, id: &CommentId) -> Option<&mut Comment> {
        Comment::find_in(&mut self.roots, id)
    }

    /// Appends `comment` under `parent`, or at top level for `None`. The
    /// append and the counter increment happen together or not at all.
    pub fn insert(&mut self, parent: Option<CommentId>, comment: Comment) -> Result<(), Error> {
        match parent {
            None => self.roots.push(comment),
            Some(p) => match self.find(&p) {
                None => return Err(Error::ParentNotFound(p)),
                Some(par) => par.replies.push(comment),
            },
        }
        self.total_comments += 1;
        Ok(())
    }

    /// Replaces the text of `id`, for its original author only
    pub fn edit(&mut self, id: &CommentId, requester: &str, content: &str) -> Result<(), Error> {
        let comment = self.find(id).ok_or(Error::CommentNotFound(*id))?;
        // a tombstone's author is empty and must not match any requester
        if requester.is_empty() || comment.author != requester {
            return Err(Error::PermissionDenied);
        }
        if content.is_empty() {
            return Err(Error::EmptyContent);
        }
        comment.content = String::from(content);
        Ok(())
    }

    /// Tombstones `id`: author and text are cleared but the node and its
    /// subtree stay in place, so replies never dangle
    pub fn delete(&mut self, id: &CommentId, requester: &str) -> Result<(), Error> {
        let comment = self.find(id).ok_or(Error::CommentNotFound(*id))?;
        if requester.is_empty() || comment.author != requester {
            return Err(Error::PermissionDenied);
        }
        comment.author.clear();
        comment.content = String::from(DELETED_COMMENT_CONTENT);
        Ok(())
    }

    /// Full recursive node count. `total_comments` is maintained
    /// incrementally and is never recomputed from this walk at runtime; the
    /// walk backs the consistency checks in tests.
    pub fn deep_count(&self) -> u64 {
        fn count(comments: &[Comment]) -> u64 {
            comments.iter().map(|c| 1 + count(&c.replies)).sum()
        }
        count(&self.roots)
    }
}
