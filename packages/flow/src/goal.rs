//! Goal drafts as typed in the add-goal form.
//!
//! Form inputs are strings; [`GoalDraft::validate`] turns them into a
//! [`NewGoal`] with a real integer priority, or a message the form can show
//! inline.

use serde::{Deserialize, Serialize};

pub const PRIORITY_MIN: i32 = 1;
pub const PRIORITY_MAX: i32 = 5;

/// Raw form state for a new goal. Everything is a string until validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalDraft {
    pub title: String,
    pub description: String,
    pub category_id: String,
    pub target_date: String,
    pub priority: String,
}

impl Default for GoalDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category_id: String::new(),
            target_date: String::new(),
            priority: "3".to_string(),
        }
    }
}

/// A validated goal, ready to send to the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGoal {
    pub title: String,
    pub description: Option<String>,
    pub category_id: String,
    /// `YYYY-MM-DD`, as produced by a date input.
    pub target_date: Option<String>,
    pub priority: i32,
}

impl GoalDraft {
    pub fn validate(&self) -> Result<NewGoal, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required".to_string());
        }
        if self.category_id.is_empty() {
            return Err("Pick a category".to_string());
        }

        let priority: i32 = self
            .priority
            .trim()
            .parse()
            .map_err(|_| "Priority must be a number".to_string())?;
        if !(PRIORITY_MIN..=PRIORITY_MAX).contains(&priority) {
            return Err(format!(
                "Priority must be between {PRIORITY_MIN} and {PRIORITY_MAX}"
            ));
        }

        let description = self.description.trim();
        let target_date = self.target_date.trim();

        Ok(NewGoal {
            title: title.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            category_id: self.category_id.clone(),
            target_date: (!target_date.is_empty()).then(|| target_date.to_string()),
            priority,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> GoalDraft {
        GoalDraft {
            title: "Run 5k".to_string(),
            description: String::new(),
            category_id: "cat-1".to_string(),
            target_date: String::new(),
            priority: "3".to_string(),
        }
    }

    #[test]
    fn priority_string_parses_to_integer() {
        let goal = draft().validate().unwrap();
        assert_eq!(goal.title, "Run 5k");
        assert_eq!(goal.category_id, "cat-1");
        assert_eq!(goal.priority, 3);
        assert_eq!(goal.description, None);
        assert_eq!(goal.target_date, None);
    }

    #[test]
    fn default_draft_carries_the_middle_priority() {
        assert_eq!(GoalDraft::default().priority, "3");
    }

    #[test]
    fn non_numeric_priority_is_rejected() {
        let mut d = draft();
        d.priority = "high".to_string();
        assert!(d.validate().unwrap_err().contains("number"));
    }

    #[test]
    fn out_of_range_priority_is_rejected() {
        for p in ["0", "6", "-1"] {
            let mut d = draft();
            d.priority = p.to_string();
            assert!(d.validate().unwrap_err().contains("between"));
        }
    }

    #[test]
    fn missing_title_or_category_is_rejected() {
        let mut d = draft();
        d.title = "   ".to_string();
        assert!(d.validate().is_err());

        let mut d = draft();
        d.category_id = String::new();
        assert!(d.validate().is_err());
    }

    #[test]
    fn optional_fields_come_through_when_present() {
        let mut d = draft();
        d.description = " Couch to 5k plan ".to_string();
        d.target_date = "2026-12-31".to_string();
        let goal = d.validate().unwrap();
        assert_eq!(goal.description.as_deref(), Some("Couch to 5k plan"));
        assert_eq!(goal.target_date.as_deref(), Some("2026-12-31"));
    }
}
