//! Sign-in / sign-up dialog with email and phone tabs.

use dioxus::prelude::*;
use flow::AuthMethod;

use crate::modal_overlay::ModalOverlay;
use crate::session::{sign_in_action, sign_up_action, use_session};
use crate::toast::{push_toast, use_toasts, ToastLevel};

#[component]
pub fn AuthDialog(
    #[props(default = false)] default_to_sign_up: bool,
    on_close: EventHandler<()>,
) -> Element {
    let session = use_session();
    let mut toasts = use_toasts();
    let mut is_sign_up = use_signal(move || default_to_sign_up);
    let mut method = use_signal(|| AuthMethod::Email);
    let mut identifier = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            if loading() {
                return;
            }
            error.set(None);

            let id = identifier().trim().to_string();
            let pw = password();

            // Rejected here, before any network call.
            if let Err(e) = flow::validate_credentials(&id, &pw) {
                error.set(Some(e));
                return;
            }

            loading.set(true);
            let result = if is_sign_up() {
                sign_up_action(session, id, pw, method()).await
            } else {
                sign_in_action(session, id, pw, method()).await
            };
            loading.set(false);

            match result {
                Ok(()) => {
                    if is_sign_up() {
                        push_toast(
                            &mut toasts,
                            ToastLevel::Success,
                            "Account created!",
                            "Welcome to Stride.",
                        );
                    } else {
                        push_toast(
                            &mut toasts,
                            ToastLevel::Success,
                            "Welcome back!",
                            "You've successfully signed in.",
                        );
                    }
                    on_close.call(());
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let identifier_placeholder = match method() {
        AuthMethod::Email => "Email address",
        AuthMethod::Phone => "Phone number",
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),

            div {
                class: "auth-dialog",
                h2 {
                    class: "auth-dialog-title",
                    if is_sign_up() { "Create your account" } else { "Welcome back" }
                }

                div {
                    class: "auth-tabs",
                    for m in [AuthMethod::Email, AuthMethod::Phone] {
                        button {
                            r#type: "button",
                            class: if method() == m { "auth-tab active" } else { "auth-tab" },
                            onclick: move |_| method.set(m),
                            "{m.label()}"
                        }
                    }
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_submit,

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    input {
                        class: "form-input",
                        r#type: if method() == AuthMethod::Email { "email" } else { "tel" },
                        placeholder: identifier_placeholder,
                        value: identifier(),
                        oninput: move |evt: FormEvent| identifier.set(evt.value()),
                    }

                    input {
                        class: "form-input",
                        r#type: "password",
                        placeholder: "Password (min 6 characters)",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() {
                            "Please wait..."
                        } else if is_sign_up() {
                            "Sign up"
                        } else {
                            "Sign in"
                        }
                    }
                }

                button {
                    r#type: "button",
                    class: "auth-toggle",
                    disabled: loading(),
                    onclick: move |_| {
                        error.set(None);
                        is_sign_up.toggle();
                    },
                    if is_sign_up() {
                        "Already have an account? Sign in"
                    } else {
                        "Don't have an account? Sign up"
                    }
                }
            }
        }
    }
}
