//! HTTP handlers and route configuration.

mod articles;
mod comments;
mod health;
mod ratings;
mod reactions;

#[cfg(test)]
mod tests;

use actix_web::web;
use haven_core::domain::ReactionKind;

use crate::middleware::error::{json_config, path_config};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .app_data(path_config())
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Article routes - all require an identity
            .service(
                web::scope("/articles")
                    .route("", web::post().to(articles::create_article))
                    .route("/", web::post().to(articles::create_article))
                    .route("/rate/{article_id}", web::post().to(ratings::rate_article))
                    .route(
                        "/{article_id}/comments",
                        web::post().to(comments::create_comment),
                    )
                    .service(reaction_resource("/{article_id}/like", ReactionKind::Like))
                    .service(reaction_resource(
                        "/{article_id}/favourite",
                        ReactionKind::Favourite,
                    ))
                    .route("/{article}", web::get().to(articles::get_article)),
            ),
    );
}

/// Likes and favourites share handlers; the kind rides along as resource data.
fn reaction_resource(path: &str, kind: ReactionKind) -> actix_web::Resource {
    web::resource(path)
        .app_data(web::Data::new(kind))
        .route(web::post().to(reactions::create_reaction))
        .route(web::put().to(reactions::update_reaction))
        .route(web::delete().to(reactions::delete_reaction))
        .default_service(web::route().to(reactions::method_not_allowed))
}
