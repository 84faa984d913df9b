use api::{CategoryInfo, GoalInfo};
use dioxus::prelude::*;

/// One category with the goals that belong to it.
#[component]
pub fn CategoryCard(category: CategoryInfo, goals: Vec<GoalInfo>) -> Element {
    let accent = category
        .color
        .as_deref()
        .map(|c| format!("border-top: 3px solid {c};"))
        .unwrap_or_default();

    rsx! {
        div {
            class: "category-card",
            style: "{accent}",

            div {
                class: "category-card-header",
                if let Some(icon) = &category.icon {
                    span { class: "category-icon", "{icon}" }
                }
                h3 { class: "category-name", "{category.name}" }
                span { class: "category-kind", "{category.kind}" }
            }

            if goals.is_empty() {
                p { class: "category-empty", "No goals yet." }
            } else {
                ul {
                    class: "goal-list",
                    for goal in &goals {
                        li {
                            key: "{goal.id}",
                            class: "goal-item",
                            div { class: "goal-title", "{goal.title}" }
                            if let Some(description) = &goal.description {
                                p { class: "goal-description", "{description}" }
                            }
                            div {
                                class: "goal-meta",
                                span { class: "goal-priority", "P{goal.priority}" }
                                span { class: "goal-status", "{goal.status}" }
                                if let Some(date) = &goal.target_date {
                                    span { class: "goal-date", "{date}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
