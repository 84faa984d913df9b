//! Session context, auth actions, and the auth-change listener.
//!
//! [`SessionProvider`] owns the session signal. It fetches the current
//! session exactly once at mount; afterwards the state moves only when the
//! sign-in / sign-up / sign-out actions report an [`AuthChange`], which is
//! fed through the pure gate functions in [`flow`] to decide whether to
//! fetch profile completeness and where (if anywhere) to navigate.

use api::UserInfo;
use dioxus::prelude::*;
use flow::{AuthChange, AuthMethod, Route, SessionState};

/// Session context stored in a signal.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub state: SessionState,
    pub user: Option<UserInfo>,
    /// True until the initial session fetch resolves.
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            state: SessionState::Anonymous,
            user: None,
            loading: true,
        }
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Hard-navigate the browser to a gate destination.
pub fn redirect(route: Route) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(route.path());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("redirect to {} skipped outside the browser", route.path());
    }
}

/// The route the browser is currently on.
pub fn current_route() -> Route {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(path) = window.location().pathname() {
                return Route::from_path(&path);
            }
        }
        Route::Home
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Route::Home
    }
}

/// Run the gate for an auth change: fetch completeness when required, update
/// the session signal, and perform at most one navigation.
async fn dispatch_change(mut session: Signal<Session>, change: AuthChange, user: Option<UserInfo>) {
    let at = current_route();
    let state = session().state;

    let profile_complete = if flow::completeness_check_required(&state, &change, at) {
        let fetched = api::profile_complete().await;
        if let Err(ref e) = fetched {
            tracing::warn!("profile completeness check failed: {e}");
        }
        flow::completeness_or_incomplete(fetched)
    } else {
        // No check required means no onboarding redirect either.
        true
    };

    let next = state.apply(change.clone(), profile_complete);
    let user = match next {
        SessionState::Authenticated { .. } => user,
        _ => None,
    };
    session.set(Session {
        state: next,
        user,
        loading: false,
    });

    if let Some(dest) = flow::destination(&change, at, profile_complete) {
        redirect(dest);
    }
}

/// Sign in and run the gate on success. Returns the backend's error message
/// on failure.
pub async fn sign_in_action(
    mut session: Signal<Session>,
    identifier: String,
    password: String,
    method: AuthMethod,
) -> Result<(), String> {
    session.write().state = SessionState::Authenticating;
    match api::sign_in(identifier, password, method).await {
        Ok(user) => {
            let change = AuthChange::SignedIn {
                user_id: user.id.clone(),
            };
            dispatch_change(session, change, Some(user)).await;
            Ok(())
        }
        Err(e) => {
            session.write().state = SessionState::Anonymous;
            Err(e.to_string())
        }
    }
}

/// Create an account and run the gate on success, mirroring the sign-in
/// transition: a fresh account has no first name yet, so this normally lands
/// on the onboarding route.
pub async fn sign_up_action(
    mut session: Signal<Session>,
    identifier: String,
    password: String,
    method: AuthMethod,
) -> Result<(), String> {
    flow::validate_credentials(&identifier, &password)?;

    session.write().state = SessionState::Authenticating;
    match api::sign_up(identifier, password, method).await {
        Ok(user) => {
            let change = AuthChange::SignedIn {
                user_id: user.id.clone(),
            };
            dispatch_change(session, change, Some(user)).await;
            Ok(())
        }
        Err(e) => {
            session.write().state = SessionState::Anonymous;
            Err(e.to_string())
        }
    }
}

/// Explicit, user-initiated sign-out. Entering [`SessionState::SigningOut`]
/// first keeps the gate from reacting to any stale sign-in event that lands
/// before the backend confirms.
pub async fn sign_out_action(mut session: Signal<Session>) -> Result<(), String> {
    let previous = session().state;
    if previous == SessionState::SigningOut {
        return Ok(());
    }

    session.write().state = SessionState::SigningOut;
    match api::sign_out().await {
        Ok(()) => {
            dispatch_change(session, AuthChange::SignedOut, None).await;
            Ok(())
        }
        Err(e) => {
            // The backend still holds the session; fall back to where we were.
            session.write().state = previous;
            Err(e.to_string())
        }
    }
}

/// Provider component that manages the session state.
/// Wrap the app with this component to enable authentication.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut session = use_signal(Session::default);

    // The initial session fetch happens exactly once; afterwards the state
    // only moves on explicit auth changes. No polling.
    let _ = use_resource(move || async move {
        match api::get_current_user().await {
            Ok(Some(user)) => {
                session.set(Session {
                    state: SessionState::Authenticated {
                        user_id: user.id.clone(),
                        profile_complete: true,
                    },
                    user: Some(user),
                    loading: false,
                });
            }
            Ok(None) => {
                session.set(Session {
                    state: SessionState::Anonymous,
                    user: None,
                    loading: false,
                });
            }
            Err(e) => {
                tracing::warn!("initial session fetch failed: {e}");
                session.set(Session {
                    state: SessionState::Anonymous,
                    user: None,
                    loading: false,
                });
            }
        }
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}
