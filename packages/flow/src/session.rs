//! Explicit session lifecycle state.
//!
//! The session moves through a small set of tagged states instead of a pile
//! of boolean flags. Every transition goes through [`SessionState::apply`],
//! which handles each (state, change) pair exhaustively — including the stale
//! sign-in event that can arrive while a manual sign-out is still in flight.

use serde::{Deserialize, Serialize};

/// The application's view of the current session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// No session, nothing in flight.
    Anonymous,
    /// A sign-in or sign-up call is in flight.
    Authenticating,
    /// A session exists for `user_id`.
    Authenticated {
        user_id: String,
        profile_complete: bool,
    },
    /// A user-initiated sign-out is in flight.
    SigningOut,
}

/// An authentication state change reported by the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthChange {
    SignedIn { user_id: String },
    SignedOut,
}

impl SessionState {
    /// Apply an auth change, producing the next state. `profile_complete` is
    /// the result of the completeness check that accompanied the change (or
    /// `true` when no check was required).
    pub fn apply(self, change: AuthChange, profile_complete: bool) -> SessionState {
        match (self, change) {
            // A sign-in that lands while a manual sign-out is in flight is
            // stale: the sign-out wins.
            (SessionState::SigningOut, AuthChange::SignedIn { .. }) => SessionState::SigningOut,
            (_, AuthChange::SignedIn { user_id }) => SessionState::Authenticated {
                user_id,
                profile_complete,
            },
            (_, AuthChange::SignedOut) => SessionState::Anonymous,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        match self {
            SessionState::Authenticated { user_id, .. } => Some(user_id),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in(id: &str) -> AuthChange {
        AuthChange::SignedIn {
            user_id: id.to_string(),
        }
    }

    #[test]
    fn sign_in_from_anonymous() {
        let next = SessionState::Anonymous.apply(signed_in("u1"), false);
        assert_eq!(
            next,
            SessionState::Authenticated {
                user_id: "u1".to_string(),
                profile_complete: false,
            }
        );
        assert_eq!(next.user_id(), Some("u1"));
    }

    #[test]
    fn sign_in_from_authenticating_records_completeness() {
        let next = SessionState::Authenticating.apply(signed_in("u1"), true);
        assert!(next.is_authenticated());
        assert_eq!(
            next,
            SessionState::Authenticated {
                user_id: "u1".to_string(),
                profile_complete: true,
            }
        );
    }

    #[test]
    fn stale_sign_in_during_sign_out_is_ignored() {
        let next = SessionState::SigningOut.apply(signed_in("u1"), true);
        assert_eq!(next, SessionState::SigningOut);
        assert!(!next.is_authenticated());
    }

    #[test]
    fn sign_out_always_lands_on_anonymous() {
        for state in [
            SessionState::Anonymous,
            SessionState::Authenticating,
            SessionState::Authenticated {
                user_id: "u1".to_string(),
                profile_complete: true,
            },
            SessionState::SigningOut,
        ] {
            assert_eq!(
                state.apply(AuthChange::SignedOut, false),
                SessionState::Anonymous
            );
        }
    }
}
