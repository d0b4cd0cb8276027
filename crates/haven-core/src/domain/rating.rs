use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Inclusive bounds of a rating value.
pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// A validated rating value in `MIN_RATING..=MAX_RATING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i32")]
pub struct Score(i32);

impl Score {
    pub fn value(self) -> i32 {
        self.0
    }
}

impl TryFrom<i64> for Score {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (i64::from(MIN_RATING)..=i64::from(MAX_RATING)).contains(&value) {
            Ok(Score(value as i32))
        } else {
            Err(format!(
                "rating {} outside {}..={}",
                value, MIN_RATING, MAX_RATING
            ))
        }
    }
}

impl From<Score> for i32 {
    fn from(score: Score) -> Self {
        score.0
    }
}

/// Rating entity - one user's score and review of one article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub id: Uuid,
    pub article_id: Uuid,
    pub user_id: Uuid,
    pub score: Score,
    pub review: String,
    pub created_at: DateTime<Utc>,
}

impl Rating {
    pub fn new(article_id: Uuid, user_id: Uuid, score: Score, review: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            article_id,
            user_id,
            score,
            review,
            created_at: Utc::now(),
        }
    }
}

/// Unweighted mean of `scores`; `None` when there are none.
pub fn average_rating(scores: &[i32]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let total: i64 = scores.iter().map(|&s| i64::from(s)).sum();
    Some(total as f64 / scores.len() as f64)
}
