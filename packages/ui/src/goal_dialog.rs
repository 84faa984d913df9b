use api::CategoryInfo;
use dioxus::prelude::*;
use flow::{GoalDraft, NewGoal};

use crate::modal_overlay::ModalOverlay;

/// Dialog form for creating a new goal.
#[component]
pub fn NewGoalDialog(
    categories: Vec<CategoryInfo>,
    on_create: EventHandler<NewGoal>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(GoalDraft::default);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |_| match draft().validate() {
        Ok(goal) => on_create.call(goal),
        Err(e) => error.set(Some(e)),
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),

            div {
                class: "dialog-form",
                h2 { "Add New Goal" }

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                div {
                    class: "form-field",
                    label { r#for: "goal-title", "Title" }
                    input {
                        id: "goal-title",
                        class: "form-input",
                        r#type: "text",
                        value: draft().title,
                        oninput: move |evt: FormEvent| draft.write().title = evt.value(),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "goal-description", "Description" }
                    textarea {
                        id: "goal-description",
                        class: "form-input",
                        value: draft().description,
                        oninput: move |evt: FormEvent| draft.write().description = evt.value(),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "goal-category", "Category" }
                    select {
                        id: "goal-category",
                        class: "form-input",
                        value: draft().category_id,
                        onchange: move |evt| draft.write().category_id = evt.value(),
                        option { value: "", "Select a category" }
                        for category in &categories {
                            option {
                                key: "{category.id}",
                                value: "{category.id}",
                                "{category.name}"
                            }
                        }
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "goal-target-date", "Target Date" }
                    input {
                        id: "goal-target-date",
                        class: "form-input",
                        r#type: "date",
                        value: draft().target_date,
                        oninput: move |evt: FormEvent| draft.write().target_date = evt.value(),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "goal-priority", "Priority (1-5)" }
                    select {
                        id: "goal-priority",
                        class: "form-input",
                        value: draft().priority,
                        onchange: move |evt| draft.write().priority = evt.value(),
                        for priority in flow::goal::PRIORITY_MIN..=flow::goal::PRIORITY_MAX {
                            option {
                                key: "{priority}",
                                value: "{priority}",
                                "{priority}"
                            }
                        }
                    }
                }

                div {
                    class: "form-actions",
                    button { class: "primary", onclick: handle_submit, "Add Goal" }
                    button {
                        class: "secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
