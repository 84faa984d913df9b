//! Landing page with the sign-in entry points.

use dioxus::prelude::*;
use ui::{use_session, AuthDialog, Navbar};

#[component]
pub fn Home() -> Element {
    let session = use_session();
    let mut show_auth = use_signal(|| false);
    let mut default_to_sign_up = use_signal(|| false);

    rsx! {
        Navbar {}

        div {
            class: "hero",
            h1 { "Set goals. Keep them." }
            p {
                "Track personal goals by category, with priorities and target dates, "
                "and a profile that keeps your motivation in sight."
            }

            if session().user.is_none() {
                div {
                    class: "hero-actions",
                    button {
                        class: "primary",
                        onclick: move |_| {
                            default_to_sign_up.set(true);
                            show_auth.set(true);
                        },
                        "Get started"
                    }
                    button {
                        class: "secondary",
                        onclick: move |_| {
                            default_to_sign_up.set(false);
                            show_auth.set(true);
                        },
                        "Sign in"
                    }
                }
            } else {
                a { class: "primary hero-link", href: "/profile", "Go to your goals" }
            }
        }

        if show_auth() {
            AuthDialog {
                default_to_sign_up: default_to_sign_up(),
                on_close: move |_| show_auth.set(false),
            }
        }
    }
}
