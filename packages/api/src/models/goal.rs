//! Goal records: each belongs to one category and one user.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, NaiveDate, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full goal record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Goal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub target_date: Option<NaiveDate>,
    pub priority: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Goal {
    /// Convert to GoalInfo for client consumption.
    pub fn to_info(&self) -> GoalInfo {
        GoalInfo {
            id: self.id.to_string(),
            category_id: self.category_id.to_string(),
            title: self.title.clone(),
            description: self.description.clone(),
            target_date: self.target_date.map(|d| d.to_string()),
            priority: self.priority,
            status: self.status.clone(),
        }
    }
}

/// Goal fields safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalInfo {
    pub id: String,
    pub category_id: String,
    pub title: String,
    pub description: Option<String>,
    /// `YYYY-MM-DD`.
    pub target_date: Option<String>,
    pub priority: i32,
    pub status: String,
}
