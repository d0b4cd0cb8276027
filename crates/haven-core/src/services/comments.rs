use std::sync::Arc;

use crate::commands::{BLANK_FIELD, CreateComment, ParentRef};
use crate::domain::Comment;
use crate::error::{DomainError, FieldErrors};
use crate::ports::{ArticleRepository, BaseRepository, CommentRepository};

pub const MISSING_ARTICLE: &str = "Article does not exist.";
pub const NESTED_REPLY: &str = "Replies can only be made to top-level comments.";

/// Comment engine: top-level comments and single-level replies.
#[derive(Clone)]
pub struct CommentService {
    articles: Arc<dyn ArticleRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl CommentService {
    pub fn new(articles: Arc<dyn ArticleRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { articles, comments }
    }

    pub async fn create(&self, mut cmd: CreateComment) -> Result<Comment, DomainError> {
        let mut errors = FieldErrors::new();
        if cmd.body.trim().is_empty() {
            errors.add("body", BLANK_FIELD);
        }
        if self.articles.find_by_id(cmd.article_id).await?.is_none() {
            errors.add("article", MISSING_ARTICLE);
        }
        errors.into_result()?;

        let comment = match cmd.parent.take() {
            Some(parent) => self.reply(parent, cmd).await?,
            None => Comment::top_level(cmd.article_id, cmd.author_id, cmd.body),
        };

        let comment = self.comments.insert(comment).await?;
        tracing::info!(
            comment_id = %comment.id,
            article_id = %comment.article_id,
            parent_id = ?comment.parent_id,
            "Comment created"
        );
        Ok(comment)
    }

    async fn reply(&self, parent: ParentRef, cmd: CreateComment) -> Result<Comment, DomainError> {
        let parent_id = match parent {
            ParentRef::Comment(id) => id,
            ParentRef::Unknown(raw) => return Err(DomainError::not_found("comment", raw)),
        };

        let parent = self
            .comments
            .find_by_id(parent_id)
            .await?
            .filter(|parent| parent.article_id == cmd.article_id)
            .ok_or_else(|| DomainError::not_found("comment", parent_id))?;

        if parent.is_reply() {
            return Err(DomainError::invalid("parent_id", NESTED_REPLY));
        }

        Ok(Comment::reply_to(&parent, cmd.author_id, cmd.body))
    }
}
