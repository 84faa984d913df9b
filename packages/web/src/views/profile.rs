//! Profile page: profile summary, category grid, goal and category creation.

use api::{CategoryInfo, GoalInfo, ProfileInfo};
use dioxus::prelude::*;
use flow::NewGoal;
use ui::{
    push_toast, use_toasts, CategoryCard, Navbar, NewCategoryDialog, NewGoalDialog, ProfileHeader,
    ToastLevel,
};

use crate::Route;

#[component]
pub fn Profile() -> Element {
    let nav = use_navigator();
    let mut toasts = use_toasts();
    let mut profile = use_signal(|| Option::<ProfileInfo>::None);
    let mut categories = use_signal(Vec::<CategoryInfo>::new);
    let mut goals = use_signal(Vec::<GoalInfo>::new);
    let mut loading = use_signal(|| true);
    let mut show_add_goal = use_signal(|| false);
    let mut show_add_category = use_signal(|| false);

    // Load everything on mount; an anonymous visitor goes home.
    let _loader = use_resource(move || async move {
        match api::get_current_user().await {
            Ok(Some(_)) => {}
            _ => {
                loading.set(false);
                nav.replace(Route::Home {});
                return;
            }
        }

        match api::get_profile().await {
            Ok(p) => profile.set(Some(p)),
            Err(e) => push_toast(&mut toasts, ToastLevel::Error, "Error", &e.to_string()),
        }
        match api::list_categories().await {
            Ok(list) => categories.set(list),
            Err(e) => push_toast(&mut toasts, ToastLevel::Error, "Error", &e.to_string()),
        }
        match api::list_goals().await {
            Ok(list) => goals.set(list),
            Err(e) => push_toast(&mut toasts, ToastLevel::Error, "Error", &e.to_string()),
        }
        loading.set(false);
    });

    let handle_add_goal = move |goal: NewGoal| {
        spawn(async move {
            match api::add_goal(goal).await {
                Ok(created) => {
                    goals.write().push(created);
                    show_add_goal.set(false);
                    push_toast(
                        &mut toasts,
                        ToastLevel::Success,
                        "Success",
                        "Goal added successfully",
                    );
                }
                Err(e) => push_toast(&mut toasts, ToastLevel::Error, "Error", &e.to_string()),
            }
        });
    };

    let handle_add_category =
        move |(name, kind, color, icon): (String, String, Option<String>, Option<String>)| {
            spawn(async move {
                match api::create_category(name, kind, color, icon).await {
                    Ok(created) => {
                        categories.write().push(created);
                        show_add_category.set(false);
                        push_toast(
                            &mut toasts,
                            ToastLevel::Success,
                            "Success",
                            "Category added",
                        );
                    }
                    Err(e) => push_toast(&mut toasts, ToastLevel::Error, "Error", &e.to_string()),
                }
            });
        };

    if loading() {
        return rsx! {
            Navbar {}
            div { class: "page-loading", "Loading..." }
        };
    }

    rsx! {
        Navbar {}

        div {
            class: "profile-page",

            if let Some(p) = profile() {
                ProfileHeader { profile: p }
            }

            div {
                class: "profile-toolbar",
                button {
                    class: "secondary",
                    onclick: move |_| show_add_category.set(true),
                    "New category"
                }
                button {
                    class: "primary",
                    disabled: categories().is_empty(),
                    onclick: move |_| show_add_goal.set(true),
                    "New goal"
                }
            }

            if categories().is_empty() {
                p { class: "profile-empty", "Create a category to start adding goals." }
            }

            div {
                class: "category-grid",
                for category in categories() {
                    CategoryCard {
                        key: "{category.id}",
                        goals: goals()
                            .iter()
                            .filter(|g| g.category_id == category.id)
                            .cloned()
                            .collect::<Vec<_>>(),
                        category,
                    }
                }
            }
        }

        if show_add_goal() {
            NewGoalDialog {
                categories: categories(),
                on_create: handle_add_goal,
                on_cancel: move |_| show_add_goal.set(false),
            }
        }

        if show_add_category() {
            NewCategoryDialog {
                on_create: handle_add_category,
                on_cancel: move |_| show_add_category.set(false),
            }
        }
    }
}
