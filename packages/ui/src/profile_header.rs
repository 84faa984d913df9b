use api::ProfileInfo;
use dioxus::prelude::*;

/// Profile summary shown at the top of the profile page.
#[component]
pub fn ProfileHeader(profile: ProfileInfo) -> Element {
    let name = profile
        .display_name()
        .unwrap_or_else(|| "Unnamed".to_string());
    let initial = name.chars().next().unwrap_or('?').to_uppercase().to_string();

    let details: Vec<String> = [
        profile.age.map(|a| format!("{a} years old")),
        profile.city.clone(),
        profile.gender.clone(),
    ]
    .into_iter()
    .flatten()
    .collect();

    rsx! {
        div {
            class: "profile-header",

            if let Some(url) = &profile.avatar_url {
                img { class: "profile-avatar", src: "{url}", alt: "{name}" }
            } else {
                div { class: "profile-avatar profile-avatar-fallback", "{initial}" }
            }

            div {
                class: "profile-identity",
                h2 { "{name}" }
                if !details.is_empty() {
                    p { class: "profile-details", {details.join(" · ")} }
                }
                if let Some(motivation) = &profile.motivation {
                    p { class: "profile-motivation", "\u{201c}{motivation}\u{201d}" }
                }
            }
        }
    }
}
