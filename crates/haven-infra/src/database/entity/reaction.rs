//! Reaction (like/favourite) entity for SeaORM.
//!
//! The migration backs `(article_id, user_id, kind)` with a unique index.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use haven_core::domain::ReactionKind;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub article_id: Uuid,
    pub user_id: Uuid,
    /// `like` or `favourite`.
    pub kind: String,
    pub value: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
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

impl TryFrom<Model> for haven_core::domain::Reaction {
    type Error = String;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            article_id: model.article_id,
            user_id: model.user_id,
            kind: model.kind.parse::<ReactionKind>()?,
            value: model.value,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        })
    }
}

impl From<haven_core::domain::Reaction> for ActiveModel {
    fn from(reaction: haven_core::domain::Reaction) -> Self {
        Self {
            id: Set(reaction.id),
            article_id: Set(reaction.article_id),
            user_id: Set(reaction.user_id),
            kind: Set(reaction.kind.as_str().to_string()),
            value: Set(reaction.value),
            created_at: Set(reaction.created_at.into()),
            updated_at: Set(reaction.updated_at.into()),
        }
    }
}
