//! Onboarding page, shown until the profile has a first name.

use dioxus::prelude::*;
use ui::{push_toast, use_toasts, ProfileForm, ToastLevel};

use crate::Route;

#[component]
pub fn CompleteProfile() -> Element {
    let nav = use_navigator();
    let mut toasts = use_toasts();

    // An anonymous visitor has nothing to complete.
    let _guard = use_resource(move || async move {
        match api::get_current_user().await {
            Ok(Some(_)) => {}
            _ => {
                nav.replace(Route::Home {});
            }
        }
    });

    rsx! {
        div {
            class: "onboarding",

            div {
                class: "onboarding-intro",
                h1 { "Complete your profile" }
                p { "Help us personalize your experience by sharing a bit about yourself." }
            }

            ProfileForm {
                on_saved: move |_| {
                    push_toast(
                        &mut toasts,
                        ToastLevel::Success,
                        "Profile saved",
                        "You're all set.",
                    );
                    nav.replace(Route::Profile {});
                },
            }
        }
    }
}
