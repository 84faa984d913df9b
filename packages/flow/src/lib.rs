//! # Flow crate — client-side session and form logic for Stride
//!
//! Everything in this crate is pure: no I/O, no framework types, no async.
//! The UI and the server functions both depend on it, so the behavior that
//! matters most — route gating on auth changes, credential validation, the
//! placeholder-email workaround, goal-draft parsing — lives here where it can
//! be unit-tested exhaustively.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`session`] | The tagged session lifecycle state and its transition function |
//! | [`gate`] | Route gating decisions taken on each authentication change |
//! | [`credentials`] | Sign-in/sign-up validation and identifier normalization |
//! | [`goal`] | Goal drafts as typed in the add-goal form, and their validation |

pub mod credentials;
pub mod gate;
pub mod goal;
pub mod session;

pub use credentials::{signup_identity, validate_credentials, AuthMethod, SignUpIdentity};
pub use gate::{completeness_check_required, completeness_or_incomplete, destination, Route};
pub use goal::{GoalDraft, NewGoal};
pub use session::{AuthChange, SessionState};
