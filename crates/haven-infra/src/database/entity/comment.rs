//! Comment entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub article_id: Uuid,
    pub author_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::article::Entity",
        from = "Column::ArticleId",
        to = "super::article::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Article,
}

impl Related<super::article::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Article.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for haven_core::domain::Comment {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            article_id: model.article_id,
            author_id: model.author_id,
            body: model.body,
            parent_id: model.parent_id,
            created_at: model.created_at.into(),
        }
    }
}

impl From<haven_core::domain::Comment> for ActiveModel {
    fn from(comment: haven_core::domain::Comment) -> Self {
        Self {
            id: Set(comment.id),
            article_id: Set(comment.article_id),
            author_id: Set(comment.author_id),
            body: Set(comment.body),
            parent_id: Set(comment.parent_id),
            created_at: Set(comment.created_at.into()),
        }
    }
}
