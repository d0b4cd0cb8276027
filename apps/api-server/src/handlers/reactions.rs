//! Like and favourite handlers.
//!
//! The same handlers serve both resources; the [`ReactionKind`] is attached
//! to each resource as app data.

use actix_web::{HttpRequest, HttpResponse, web};
use uuid::Uuid;

use haven_core::DomainError;
use haven_core::commands::{REQUIRED_FIELD, ReactionKey};
use haven_core::domain::{Reaction, ReactionKind};
use haven_shared::ApiResponse;
use haven_shared::dto::{ArticleBody, ReactionDeletedResponse, ReactionRequest, ReactionResponse};

use crate::middleware::auth::Identity;
use crate::middleware::body::OptionalJson;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn reaction_response(reaction: Reaction) -> ReactionResponse {
    ReactionResponse {
        id: reaction.id,
        article_id: reaction.article_id,
        user_id: reaction.user_id,
        kind: reaction.kind.as_str().to_string(),
        value: reaction.value,
        created_at: reaction.created_at,
        updated_at: reaction.updated_at,
    }
}

fn created_message(kind: ReactionKind) -> &'static str {
    match kind {
        ReactionKind::Like => "Article liked successfully.",
        ReactionKind::Favourite => "Article favourited successfully.",
    }
}

fn updated_message(kind: ReactionKind) -> &'static str {
    match kind {
        ReactionKind::Like => "Like updated successfully.",
        ReactionKind::Favourite => "Favourite updated successfully.",
    }
}

fn deleted_message(kind: ReactionKind) -> &'static str {
    match kind {
        ReactionKind::Like => "Like removed successfully.",
        ReactionKind::Favourite => "Favourite removed successfully.",
    }
}

/// POST /api/articles/{article_id}/like|favourite
///
/// The body is optional; the reaction value defaults to `true`.
pub async fn create_reaction(
    state: web::Data<AppState>,
    kind: web::Data<ReactionKind>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: OptionalJson<ArticleBody<ReactionRequest>>,
) -> AppResult<HttpResponse> {
    let kind = **kind;
    let value = body
        .into_inner()
        .and_then(|b| b.article.value)
        .unwrap_or(true);

    let key = ReactionKey::new(kind, path.into_inner(), identity.user_id);
    let reaction = state.reactions.create(key, value).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        "article",
        reaction_response(reaction),
        created_message(kind),
    )))
}

/// PUT /api/articles/{article_id}/like|favourite
pub async fn update_reaction(
    state: web::Data<AppState>,
    kind: web::Data<ReactionKind>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<ArticleBody<ReactionRequest>>,
) -> AppResult<HttpResponse> {
    let kind = **kind;
    let value = body
        .into_inner()
        .article
        .value
        .ok_or_else(|| DomainError::invalid(kind.as_str(), REQUIRED_FIELD))?;

    let key = ReactionKey::new(kind, path.into_inner(), identity.user_id);
    let reaction = state.reactions.update(key, value).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        "article",
        reaction_response(reaction),
        updated_message(kind),
    )))
}

/// DELETE /api/articles/{article_id}/like|favourite
pub async fn delete_reaction(
    state: web::Data<AppState>,
    kind: web::Data<ReactionKind>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let kind = **kind;
    let article_id = path.into_inner();

    state
        .reactions
        .delete(ReactionKey::new(kind, article_id, identity.user_id))
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        "article",
        ReactionDeletedResponse {
            article_id,
            kind: kind.as_str().to_string(),
        },
        deleted_message(kind),
    )))
}

/// Any other method on a reaction resource, GET included.
pub async fn method_not_allowed(req: HttpRequest, _identity: Identity) -> AppResult<HttpResponse> {
    Err(AppError::MethodNotAllowed(format!(
        "method {} not allowed",
        req.method()
    )))
}
