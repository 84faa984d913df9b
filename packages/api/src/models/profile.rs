//! Profile records.
//!
//! One row per user, created lazily on first fetch. The completeness
//! predicate is deliberately minimal: a profile is complete once it has a
//! non-empty first name.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full profile record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub city: Option<String>,
    pub motivation: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Profile {
    /// Convert to ProfileInfo for client consumption.
    pub fn to_info(&self) -> ProfileInfo {
        ProfileInfo {
            id: self.id.to_string(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age,
            gender: self.gender.clone(),
            city: self.city.clone(),
            motivation: self.motivation.clone(),
            avatar_url: self.avatar_url.clone(),
        }
    }
}

/// Profile fields safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileInfo {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub city: Option<String>,
    pub motivation: Option<String>,
    pub avatar_url: Option<String>,
}

impl ProfileInfo {
    /// Onboarding is finished once a non-empty first name is stored.
    pub fn is_complete(&self) -> bool {
        self.first_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty())
    }

    /// Full display name, or None until the profile is complete.
    pub fn display_name(&self) -> Option<String> {
        let first = self.first_name.as_deref()?.trim();
        if first.is_empty() {
            return None;
        }
        match self.last_name.as_deref().map(str::trim) {
            Some(last) if !last.is_empty() => Some(format!("{first} {last}")),
            _ => Some(first.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(first_name: Option<&str>) -> ProfileInfo {
        ProfileInfo {
            id: "p1".to_string(),
            first_name: first_name.map(str::to_string),
            last_name: None,
            age: None,
            gender: None,
            city: None,
            motivation: None,
            avatar_url: None,
        }
    }

    #[test]
    fn complete_only_with_a_non_empty_first_name() {
        assert!(profile(Some("Alice")).is_complete());
        assert!(!profile(None).is_complete());
        assert!(!profile(Some("")).is_complete());
        assert!(!profile(Some("   ")).is_complete());
    }

    #[test]
    fn display_name_joins_name_parts() {
        let mut p = profile(Some("Alice"));
        assert_eq!(p.display_name().as_deref(), Some("Alice"));
        p.last_name = Some("Reed".to_string());
        assert_eq!(p.display_name().as_deref(), Some("Alice Reed"));
        assert_eq!(profile(None).display_name(), None);
    }
}
