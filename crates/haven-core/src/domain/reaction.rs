use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of reaction a user can leave on an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Favourite,
}

impl ReactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ReactionKind::Like => "like",
            ReactionKind::Favourite => "favourite",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(ReactionKind::Like),
            "favourite" => Ok(ReactionKind::Favourite),
            other => Err(format!("unknown reaction kind: {}", other)),
        }
    }
}

/// Reaction entity - a user's like or favourite on an article.
///
/// For likes `value` distinguishes a like (`true`) from a dislike (`false`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    pub id: Uuid,
    pub article_id: Uuid,
    pub user_id: Uuid,
    pub kind: ReactionKind,
    pub value: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reaction {
    pub fn new(article_id: Uuid, user_id: Uuid, kind: ReactionKind, value: bool) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            article_id,
            user_id,
            kind,
            value,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_value(&mut self, value: bool) {
        self.value = value;
        self.updated_at = Utc::now();
    }
}
