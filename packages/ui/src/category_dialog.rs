use dioxus::prelude::*;

use crate::modal_overlay::ModalOverlay;

const CATEGORY_KINDS: [&str; 5] = ["personal", "health", "career", "finance", "learning"];

/// Dialog form for creating a new category.
/// Emits `(name, kind, color, icon)` on create.
#[component]
pub fn NewCategoryDialog(
    on_create: EventHandler<(String, String, Option<String>, Option<String>)>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut name = use_signal(String::new);
    let mut kind = use_signal(|| CATEGORY_KINDS[0].to_string());
    let mut color = use_signal(String::new);
    let mut icon = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |_| {
        let name = name().trim().to_string();
        if name.is_empty() {
            error.set(Some("Category name is required".to_string()));
            return;
        }
        let color = Some(color()).filter(|c| !c.is_empty());
        let icon = Some(icon().trim().to_string()).filter(|i| !i.is_empty());
        on_create.call((name, kind(), color, icon));
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),

            div {
                class: "dialog-form",
                h2 { "Add New Category" }

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                div {
                    class: "form-field",
                    label { r#for: "category-name", "Name" }
                    input {
                        id: "category-name",
                        class: "form-input",
                        r#type: "text",
                        placeholder: "Fitness",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "category-kind", "Type" }
                    select {
                        id: "category-kind",
                        class: "form-input",
                        value: kind(),
                        onchange: move |evt| kind.set(evt.value()),
                        for k in CATEGORY_KINDS {
                            option { key: "{k}", value: "{k}", "{k}" }
                        }
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "category-color", "Color" }
                    input {
                        id: "category-color",
                        class: "form-input",
                        r#type: "color",
                        value: color(),
                        oninput: move |evt: FormEvent| color.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "category-icon", "Icon" }
                    input {
                        id: "category-icon",
                        class: "form-input",
                        r#type: "text",
                        placeholder: "An emoji, e.g. 🏃",
                        value: icon(),
                        oninput: move |evt: FormEvent| icon.set(evt.value()),
                    }
                }

                div {
                    class: "form-actions",
                    button { class: "primary", onclick: handle_submit, "Add Category" }
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
