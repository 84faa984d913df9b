//! Category records: user-scoped labels that goals hang off.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full category record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub kind: String,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Category {
    /// Convert to CategoryInfo for client consumption.
    pub fn to_info(&self) -> CategoryInfo {
        CategoryInfo {
            id: self.id.to_string(),
            name: self.name.clone(),
            kind: self.kind.clone(),
            color: self.color.clone(),
            icon: self.icon.clone(),
        }
    }
}

/// Category fields safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryInfo {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub color: Option<String>,
    pub icon: Option<String>,
}
