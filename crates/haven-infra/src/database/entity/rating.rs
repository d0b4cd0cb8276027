//! Rating entity for SeaORM.
//!
//! The migration backs `(article_id, user_id)` with a unique index.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use haven_core::domain::Score;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ratings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub article_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    #[sea_orm(column_type = "Text")]
    pub review: String,
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

impl TryFrom<Model> for haven_core::domain::Rating {
    type Error = String;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            article_id: model.article_id,
            user_id: model.user_id,
            score: Score::try_from(i64::from(model.rating))?,
            review: model.review,
            created_at: model.created_at.into(),
        })
    }
}

impl From<haven_core::domain::Rating> for ActiveModel {
    fn from(rating: haven_core::domain::Rating) -> Self {
        Self {
            id: Set(rating.id),
            article_id: Set(rating.article_id),
            user_id: Set(rating.user_id),
            rating: Set(rating.score.value()),
            review: Set(rating.review),
            created_at: Set(rating.created_at.into()),
        }
    }
}
