//! Comment handler.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use haven_core::commands::{CreateComment, ParentRef};
use haven_shared::ApiResponse;
use haven_shared::dto::{CommentBody, CommentResponse, NewCommentRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/articles/{article_id}/comments
///
/// A `parent_id` in the payload makes the comment a reply.
pub async fn create_comment(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<CommentBody<NewCommentRequest>>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner().comment;
    let parent = match req.parent_id() {
        Ok(id) => id.map(ParentRef::Comment),
        Err(raw) => Some(ParentRef::Unknown(raw)),
    };

    let cmd = CreateComment::new(path.into_inner(), identity.user_id, req.body, parent);
    let comment = state.comments.create(cmd).await?;

    let response = CommentResponse {
        id: comment.id,
        article_id: comment.article_id,
        author_id: comment.author_id,
        body: comment.body,
        parent_id: comment.parent_id,
        created_at: comment.created_at,
    };

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        "comment",
        response,
        "Comment created successfully.",
    )))
}
