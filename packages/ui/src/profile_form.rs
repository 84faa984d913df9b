//! Onboarding form. Saving a first name is what completes the profile.

use api::ProfileInfo;
use dioxus::prelude::*;

const GENDERS: [&str; 4] = ["female", "male", "non-binary", "prefer not to say"];

#[component]
pub fn ProfileForm(on_saved: EventHandler<ProfileInfo>) -> Element {
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut age = use_signal(String::new);
    let mut gender = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut motivation = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            if saving() {
                return;
            }
            error.set(None);

            let first = first_name().trim().to_string();
            if first.is_empty() {
                error.set(Some("First name is required".to_string()));
                return;
            }

            let age_value = match age().trim() {
                "" => None,
                raw => match raw.parse::<i32>() {
                    Ok(n) => Some(n),
                    Err(_) => {
                        error.set(Some("Age must be a number".to_string()));
                        return;
                    }
                },
            };

            let optional = |value: String| {
                let value = value.trim().to_string();
                (!value.is_empty()).then_some(value)
            };

            saving.set(true);
            let result = api::update_profile(
                first,
                optional(last_name()),
                age_value,
                optional(gender()),
                optional(city()),
                optional(motivation()),
            )
            .await;
            saving.set(false);

            match result {
                Ok(profile) => on_saved.call(profile),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        form {
            class: "profile-form",
            onsubmit: handle_submit,

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            div {
                class: "form-row",
                div {
                    class: "form-field",
                    label { r#for: "profile-first-name", "First name" }
                    input {
                        id: "profile-first-name",
                        class: "form-input",
                        r#type: "text",
                        value: first_name(),
                        oninput: move |evt: FormEvent| first_name.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "profile-last-name", "Last name" }
                    input {
                        id: "profile-last-name",
                        class: "form-input",
                        r#type: "text",
                        value: last_name(),
                        oninput: move |evt: FormEvent| last_name.set(evt.value()),
                    }
                }
            }

            div {
                class: "form-row",
                div {
                    class: "form-field",
                    label { r#for: "profile-age", "Age" }
                    input {
                        id: "profile-age",
                        class: "form-input",
                        r#type: "number",
                        min: "1",
                        value: age(),
                        oninput: move |evt: FormEvent| age.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "profile-gender", "Gender" }
                    select {
                        id: "profile-gender",
                        class: "form-input",
                        value: gender(),
                        onchange: move |evt| gender.set(evt.value()),
                        option { value: "", "Select" }
                        for g in GENDERS {
                            option { key: "{g}", value: "{g}", "{g}" }
                        }
                    }
                }
            }

            div {
                class: "form-field",
                label { r#for: "profile-city", "City" }
                input {
                    id: "profile-city",
                    class: "form-input",
                    r#type: "text",
                    value: city(),
                    oninput: move |evt: FormEvent| city.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { r#for: "profile-motivation", "What drives you?" }
                textarea {
                    id: "profile-motivation",
                    class: "form-input",
                    value: motivation(),
                    oninput: move |evt: FormEvent| motivation.set(evt.value()),
                }
            }

            button {
                class: "primary",
                r#type: "submit",
                disabled: saving(),
                if saving() { "Saving..." } else { "Save profile" }
            }
        }
    }
}
