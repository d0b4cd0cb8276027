//! Rating handler.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use haven_core::commands::RateArticle;
use haven_core::services::RatedArticle;
use haven_shared::ApiResponse;
use haven_shared::dto::{ArticleBody, RatingRequest, RatingResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/articles/rate/{article_id}
pub async fn rate_article(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<ArticleBody<RatingRequest>>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner().article;

    let cmd = RateArticle::new(
        path.into_inner(),
        identity.user_id,
        req.rating_value(),
        req.review,
    )?;
    let RatedArticle {
        rating,
        average_rating,
    } = state.ratings.rate(cmd).await?;

    let response = RatingResponse {
        id: rating.id,
        article_id: rating.article_id,
        user_id: rating.user_id,
        rating: rating.score.value(),
        review: rating.review,
        created_at: rating.created_at,
        average_rating,
    };

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        "article",
        response,
        "Article rated successfully.",
    )))
}
