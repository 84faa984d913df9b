//! Route gating decisions taken on each authentication change.
//!
//! The session listener in the UI feeds every auth change through these
//! functions: first [`completeness_check_required`] to learn whether it needs
//! to fetch the profile-completeness flag at all, then [`destination`] to
//! turn the change into at most one navigation side effect.

use crate::session::{AuthChange, SessionState};

/// Client-side routes the gate can point at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Profile,
    CompleteProfile,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Profile => "/profile",
            Route::CompleteProfile => "/complete-profile",
        }
    }

    /// Map a browser pathname onto a gate route. Anything unknown behaves
    /// like [`Route::Home`]: only the onboarding route gets special gating.
    pub fn from_path(path: &str) -> Route {
        match path.trim_end_matches('/') {
            "/profile" => Route::Profile,
            "/complete-profile" => Route::CompleteProfile,
            _ => Route::Home,
        }
    }
}

/// Whether this change needs a profile-completeness fetch before routing.
/// Only a sign-in seen outside the onboarding route needs one, and never
/// while a manual sign-out is in flight.
pub fn completeness_check_required(state: &SessionState, change: &AuthChange, at: Route) -> bool {
    matches!(change, AuthChange::SignedIn { .. })
        && at != Route::CompleteProfile
        && !matches!(state, SessionState::SigningOut)
}

/// Where to navigate after an auth change, if anywhere.
pub fn destination(change: &AuthChange, at: Route, profile_complete: bool) -> Option<Route> {
    match change {
        AuthChange::SignedIn { .. } => {
            if at != Route::CompleteProfile && !profile_complete {
                Some(Route::CompleteProfile)
            } else {
                None
            }
        }
        AuthChange::SignedOut => {
            if at == Route::CompleteProfile {
                Some(Route::Home)
            } else {
                None
            }
        }
    }
}

/// Collapse a completeness fetch result to a bool. A failed fetch counts as
/// incomplete, so the caller routes back through onboarding rather than
/// letting an unverified profile through.
pub fn completeness_or_incomplete<E>(fetched: Result<bool, E>) -> bool {
    fetched.unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in() -> AuthChange {
        AuthChange::SignedIn {
            user_id: "u1".to_string(),
        }
    }

    #[test]
    fn sign_in_with_incomplete_profile_routes_to_onboarding() {
        assert_eq!(
            destination(&signed_in(), Route::Home, false),
            Some(Route::CompleteProfile)
        );
        assert_eq!(
            destination(&signed_in(), Route::Profile, false),
            Some(Route::CompleteProfile)
        );
    }

    #[test]
    fn sign_in_with_complete_profile_stays_put() {
        assert_eq!(destination(&signed_in(), Route::Home, true), None);
        assert_eq!(destination(&signed_in(), Route::Profile, true), None);
    }

    #[test]
    fn sign_in_on_onboarding_route_never_redirects() {
        assert_eq!(destination(&signed_in(), Route::CompleteProfile, false), None);
        assert_eq!(destination(&signed_in(), Route::CompleteProfile, true), None);
    }

    #[test]
    fn sign_out_on_onboarding_route_goes_home() {
        assert_eq!(
            destination(&AuthChange::SignedOut, Route::CompleteProfile, false),
            Some(Route::Home)
        );
        assert_eq!(
            destination(&AuthChange::SignedOut, Route::CompleteProfile, true),
            Some(Route::Home)
        );
    }

    #[test]
    fn sign_out_elsewhere_does_nothing() {
        assert_eq!(destination(&AuthChange::SignedOut, Route::Home, false), None);
        assert_eq!(destination(&AuthChange::SignedOut, Route::Profile, false), None);
    }

    #[test]
    fn check_required_only_for_sign_in_outside_onboarding() {
        let anon = SessionState::Anonymous;
        assert!(completeness_check_required(&anon, &signed_in(), Route::Home));
        assert!(completeness_check_required(&anon, &signed_in(), Route::Profile));
        assert!(!completeness_check_required(
            &anon,
            &signed_in(),
            Route::CompleteProfile
        ));
        assert!(!completeness_check_required(
            &anon,
            &AuthChange::SignedOut,
            Route::Home
        ));
    }

    #[test]
    fn check_suppressed_during_manual_sign_out() {
        assert!(!completeness_check_required(
            &SessionState::SigningOut,
            &signed_in(),
            Route::Home
        ));
    }

    #[test]
    fn failed_completeness_fetch_counts_as_incomplete() {
        assert!(!completeness_or_incomplete::<String>(Err("boom".to_string())));
        assert!(completeness_or_incomplete::<String>(Ok(true)));
        assert!(!completeness_or_incomplete::<String>(Ok(false)));
    }

    #[test]
    fn routes_round_trip_through_paths() {
        for route in [Route::Home, Route::Profile, Route::CompleteProfile] {
            assert_eq!(Route::from_path(route.path()), route);
        }
        assert_eq!(Route::from_path("/complete-profile/"), Route::CompleteProfile);
        assert_eq!(Route::from_path("/settings"), Route::Home);
    }
}
