//! Article handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use haven_core::commands::CreateArticle;
use haven_core::domain::Article;
use haven_shared::ApiResponse;
use haven_shared::dto::{ArticleBody, ArticleDetailResponse, ArticleResponse, NewArticleRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub(crate) fn article_response(article: Article) -> ArticleResponse {
    ArticleResponse {
        id: article.id,
        title: article.title,
        body: article.body,
        description: article.description,
        slug: article.slug,
        author_id: article.author_id,
        created_at: article.created_at,
        updated_at: article.updated_at,
    }
}

/// POST /api/articles/
pub async fn create_article(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<ArticleBody<NewArticleRequest>>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner().article;

    let cmd = CreateArticle::new(identity.user_id, req.title, req.body, req.description)?;
    let article = state.articles.create(cmd).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        "article",
        article_response(article),
        "Article created successfully.",
    )))
}

/// GET /api/articles/{article} - by id or slug
pub async fn get_article(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let key = path.into_inner();

    let article = match Uuid::parse_str(&key) {
        Ok(id) => state.articles.get(id).await?,
        Err(_) => state
            .articles
            .get_by_slug(&key)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("article {} not found", key)))?,
    };
    let average_rating = state.articles.average_rating(article.id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "article",
        ArticleDetailResponse {
            article: article_response(article),
            average_rating,
        },
    )))
}
