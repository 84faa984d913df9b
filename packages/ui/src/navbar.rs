//! Top navigation bar with the sign-in/sign-out controls.

use dioxus::prelude::*;
use flow::{Route, SessionState};

use crate::auth_dialog::AuthDialog;
use crate::session::{redirect, sign_out_action, use_session};
use crate::toast::{push_toast, use_toasts, ToastLevel};

#[component]
pub fn Navbar() -> Element {
    let session = use_session();
    let mut toasts = use_toasts();
    let mut show_auth = use_signal(|| false);

    let handle_sign_out = move |_| async move {
        match sign_out_action(session).await {
            Ok(()) => {
                push_toast(
                    &mut toasts,
                    ToastLevel::Success,
                    "Signed out successfully",
                    "You have been logged out.",
                );
                redirect(Route::Home);
            }
            Err(e) => {
                tracing::error!("sign-out failed: {e}");
                push_toast(&mut toasts, ToastLevel::Error, "Error", &e);
            }
        }
    };

    if session().loading {
        return rsx! {};
    }

    let signing_out = session().state == SessionState::SigningOut;

    rsx! {
        nav {
            class: "navbar",
            a { class: "navbar-brand", href: Route::Home.path(), "Stride" }

            div {
                class: "navbar-actions",
                if let Some(user) = session().user {
                    span { class: "navbar-user", "{user.display_identifier()}" }
                    a { class: "navbar-link", href: Route::Profile.path(), "Profile" }
                    button {
                        class: "navbar-button",
                        disabled: signing_out,
                        onclick: handle_sign_out,
                        if signing_out { "Signing out..." } else { "Sign out" }
                    }
                } else {
                    button {
                        class: "navbar-button",
                        onclick: move |_| show_auth.set(true),
                        "Sign in"
                    }
                }
            }
        }

        if show_auth() {
            AuthDialog {
                on_close: move |_| show_auth.set(false),
            }
        }
    }
}
