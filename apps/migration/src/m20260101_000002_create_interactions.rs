//! Ratings, comments and reactions, all hanging off `articles`.

use sea_orm_migration::prelude::*;

use crate::m20260101_000001_create_articles::Articles;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn created_at<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

fn article_fk<T: IntoIden + 'static>(name: &str, table: T, col: T) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(name)
        .from(table, col)
        .to(Articles::Table, Articles::Id)
        .on_delete(ForeignKeyAction::Cascade)
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ratings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Ratings::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Ratings::ArticleId).uuid().not_null())
                    .col(ColumnDef::new(Ratings::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Ratings::Rating)
                            .integer()
                            .not_null()
                            .check(Expr::col(Ratings::Rating).between(1, 5)),
                    )
                    .col(ColumnDef::new(Ratings::Review).text().not_null().default(""))
                    .col(created_at(Ratings::CreatedAt))
                    .foreign_key(&mut article_fk(
                        "fk_ratings_article_id",
                        Ratings::Table,
                        Ratings::ArticleId,
                    ))
                    .to_owned(),
            )
            .await?;

        // One rating per user and article.
        manager
            .create_index(
                Index::create()
                    .name("idx_ratings_article_user")
                    .table(Ratings::Table)
                    .col(Ratings::ArticleId)
                    .col(Ratings::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Comments::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Comments::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Comments::ArticleId).uuid().not_null())
                    .col(ColumnDef::new(Comments::AuthorId).uuid().not_null())
                    .col(ColumnDef::new(Comments::Body).text().not_null())
                    .col(ColumnDef::new(Comments::ParentId).uuid().null())
                    .col(created_at(Comments::CreatedAt))
                    .foreign_key(&mut article_fk(
                        "fk_comments_article_id",
                        Comments::Table,
                        Comments::ArticleId,
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_parent_id")
                            .from(Comments::Table, Comments::ParentId)
                            .to(Comments::Table, Comments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_comments_article_id")
                    .table(Comments::Table)
                    .col(Comments::ArticleId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Reactions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Reactions::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Reactions::ArticleId).uuid().not_null())
                    .col(ColumnDef::new(Reactions::UserId).uuid().not_null())
                    .col(ColumnDef::new(Reactions::Kind).string_len(16).not_null())
                    .col(ColumnDef::new(Reactions::Value).boolean().not_null().default(true))
                    .col(created_at(Reactions::CreatedAt))
                    .col(created_at(Reactions::UpdatedAt))
                    .foreign_key(&mut article_fk(
                        "fk_reactions_article_id",
                        Reactions::Table,
                        Reactions::ArticleId,
                    ))
                    .to_owned(),
            )
            .await?;

        // One like and one favourite per user and article.
        manager
            .create_index(
                Index::create()
                    .name("idx_reactions_article_user_kind")
                    .table(Reactions::Table)
                    .col(Reactions::ArticleId)
                    .col(Reactions::UserId)
                    .col(Reactions::Kind)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reactions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Comments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Ratings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Ratings {
    Table,
    Id,
    ArticleId,
    UserId,
    Rating,
    Review,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Comments {
    Table,
    Id,
    ArticleId,
    AuthorId,
    Body,
    ParentId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Reactions {
    Table,
    Id,
    ArticleId,
    UserId,
    Kind,
    Value,
    CreatedAt,
    UpdatedAt,
}
