//! Data models for the application.
//!
//! Each entity has two representations: the full database row (server only,
//! derives `sqlx::FromRow`) and a client-safe `*Info` projection that crosses
//! the server/client boundary via Dioxus server functions.

mod category;
mod goal;
mod profile;
mod user;

#[cfg(feature = "server")]
pub use category::Category;
pub use category::CategoryInfo;
#[cfg(feature = "server")]
pub use goal::Goal;
pub use goal::GoalInfo;
#[cfg(feature = "server")]
pub use profile::Profile;
pub use profile::ProfileInfo;
#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;
