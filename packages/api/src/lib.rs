//! # API crate — shared fullstack server functions for Stride
//!
//! This crate is the backbone of the Stride fullstack architecture. It defines
//! every Dioxus server function the web front end calls, along with the
//! supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | `server` | Password hashing (Argon2id) and the session key |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | — | Database rows (`User`, `Profile`, `Category`, `Goal`) and their client-safe projections |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated
//! with `#[get(...)]` or `#[post(...)]` and compiled twice: once with full
//! server logic (behind `#[cfg(feature = "server")]`) and once as a thin
//! client stub that simply forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `sign_up`, `sign_in`, `sign_out`
//! - **Profile**: `get_profile`, `update_profile`, `profile_complete`
//! - **Goals**: `list_categories`, `create_category`, `list_goals`, `add_goal`

use dioxus::prelude::*;

#[cfg(feature = "server")]
pub mod auth;
#[cfg(feature = "server")]
pub mod db;
#[cfg(feature = "server")]
mod error;
pub mod models;

#[cfg(feature = "server")]
pub use error::ApiError;
pub use flow::{AuthMethod, NewGoal};
pub use models::{CategoryInfo, GoalInfo, ProfileInfo, UserInfo};

/// Read the session's user id, if a session is established.
#[cfg(feature = "server")]
async fn session_user_id(
    session: &tower_sessions::Session,
) -> Result<Option<uuid::Uuid>, ApiError> {
    let user_id: Option<String> = session.get(auth::SESSION_USER_ID_KEY).await?;
    match user_id {
        Some(id) => {
            let id = uuid::Uuid::parse_str(&id).map_err(|e| ApiError::Invalid(e.to_string()))?;
            Ok(Some(id))
        }
        None => Ok(None),
    }
}

#[cfg(feature = "server")]
async fn require_user_id(session: &tower_sessions::Session) -> Result<uuid::Uuid, ApiError> {
    session_user_id(session)
        .await?
        .ok_or(ApiError::NotAuthenticated)
}

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::models::User;

    let Some(user_id) = session_user_id(&session).await? else {
        return Ok(None);
    };

    let pool = db::get_pool().await.map_err(ApiError::from)?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(ApiError::from)?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Create an account from an identifier + password pair and start a session.
/// Phone identifiers get a placeholder email synthesized by
/// [`flow::signup_identity`]; the raw identifier is kept as username metadata.
#[cfg(feature = "server")]
#[post("/api/auth/sign-up", session: tower_sessions::Session)]
pub async fn sign_up(
    identifier: String,
    password: String,
    method: AuthMethod,
) -> Result<UserInfo, ServerFnError> {
    use crate::models::User;

    flow::validate_credentials(&identifier, &password).map_err(ServerFnError::new)?;
    let identity = flow::signup_identity(&identifier, method);

    let pool = db::get_pool().await.map_err(ApiError::from)?;

    let existing: Option<(i64,)> = sqlx::query_as("SELECT 1 AS n FROM users WHERE email = $1")
        .bind(&identity.email)
        .fetch_optional(pool)
        .await
        .map_err(ApiError::from)?;

    if existing.is_some() {
        return Err(ServerFnError::new(
            "An account with this identifier already exists",
        ));
    }

    let password_hash = auth::hash_password(&password).map_err(ServerFnError::new)?;

    let user: User = sqlx::query_as(
        "INSERT INTO users (email, username, password_hash) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(&identity.email)
    .bind(&identity.username)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(ApiError::from)?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(ApiError::from)?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/sign-up")]
pub async fn sign_up(
    identifier: String,
    password: String,
    method: AuthMethod,
) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Sign in with an identifier and password. The method picks which column
/// the identifier matches: email for email sign-ins, the stored username
/// metadata for phone sign-ins.
#[cfg(feature = "server")]
#[post("/api/auth/sign-in", session: tower_sessions::Session)]
pub async fn sign_in(
    identifier: String,
    password: String,
    method: AuthMethod,
) -> Result<UserInfo, ServerFnError> {
    use crate::models::User;

    let identifier = identifier.trim().to_string();
    let pool = db::get_pool().await.map_err(ApiError::from)?;

    let user: Option<User> = match method {
        AuthMethod::Email => {
            sqlx::query_as("SELECT * FROM users WHERE email = $1")
                .bind(identifier.to_lowercase())
                .fetch_optional(pool)
                .await
        }
        AuthMethod::Phone => {
            sqlx::query_as("SELECT * FROM users WHERE username = $1")
                .bind(&identifier)
                .fetch_optional(pool)
                .await
        }
    }
    .map_err(ApiError::from)?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Invalid identifier or password"));
    };

    let valid = auth::verify_password(&password, &user.password_hash).map_err(ServerFnError::new)?;
    if !valid {
        return Err(ServerFnError::new("Invalid identifier or password"));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(ApiError::from)?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/sign-in")]
pub async fn sign_in(
    identifier: String,
    password: String,
    method: AuthMethod,
) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Sign out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/sign-out", session: tower_sessions::Session)]
pub async fn sign_out() -> Result<(), ServerFnError> {
    session.flush().await.map_err(ApiError::from)?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/sign-out")]
pub async fn sign_out() -> Result<(), ServerFnError> {
    Ok(())
}

/// Whether the session user's profile has a non-empty first name. A missing
/// profile row counts as incomplete.
#[cfg(feature = "server")]
#[get("/api/profile/complete", session: tower_sessions::Session)]
pub async fn profile_complete() -> Result<bool, ServerFnError> {
    let user_id = require_user_id(&session).await?;
    let pool = db::get_pool().await.map_err(ApiError::from)?;

    let row: Option<(Option<String>,)> =
        sqlx::query_as("SELECT first_name FROM profiles WHERE id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await
            .map_err(ApiError::from)?;

    Ok(matches!(row, Some((Some(ref name),)) if !name.trim().is_empty()))
}

#[cfg(not(feature = "server"))]
#[get("/api/profile/complete")]
pub async fn profile_complete() -> Result<bool, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Fetch the session user's profile, creating an empty row on first fetch.
#[cfg(feature = "server")]
#[get("/api/profile", session: tower_sessions::Session)]
pub async fn get_profile() -> Result<ProfileInfo, ServerFnError> {
    use crate::models::Profile;

    let user_id = require_user_id(&session).await?;
    let pool = db::get_pool().await.map_err(ApiError::from)?;

    let profile: Option<Profile> = sqlx::query_as("SELECT * FROM profiles WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(ApiError::from)?;

    let profile = match profile {
        Some(profile) => profile,
        None => sqlx::query_as("INSERT INTO profiles (id) VALUES ($1) RETURNING *")
            .bind(user_id)
            .fetch_one(pool)
            .await
            .map_err(ApiError::from)?,
    };

    Ok(profile.to_info())
}

#[cfg(not(feature = "server"))]
#[get("/api/profile")]
pub async fn get_profile() -> Result<ProfileInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Save the profile fields collected by the onboarding form. Saving a first
/// name is what marks the profile complete.
#[cfg(feature = "server")]
#[post("/api/profile", session: tower_sessions::Session)]
pub async fn update_profile(
    first_name: String,
    last_name: Option<String>,
    age: Option<i32>,
    gender: Option<String>,
    city: Option<String>,
    motivation: Option<String>,
) -> Result<ProfileInfo, ServerFnError> {
    use crate::models::Profile;

    let first_name = first_name.trim().to_string();
    if first_name.is_empty() {
        return Err(ServerFnError::new("First name is required"));
    }

    let user_id = require_user_id(&session).await?;
    let pool = db::get_pool().await.map_err(ApiError::from)?;

    let profile: Profile = sqlx::query_as(
        "INSERT INTO profiles (id, first_name, last_name, age, gender, city, motivation)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         ON CONFLICT (id) DO UPDATE SET
            first_name = $2,
            last_name = $3,
            age = $4,
            gender = $5,
            city = $6,
            motivation = $7,
            updated_at = NOW()
         RETURNING *",
    )
    .bind(user_id)
    .bind(&first_name)
    .bind(&last_name)
    .bind(age)
    .bind(&gender)
    .bind(&city)
    .bind(&motivation)
    .fetch_one(pool)
    .await
    .map_err(ApiError::from)?;

    Ok(profile.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/profile")]
pub async fn update_profile(
    first_name: String,
    last_name: Option<String>,
    age: Option<i32>,
    gender: Option<String>,
    city: Option<String>,
    motivation: Option<String>,
) -> Result<ProfileInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List the session user's categories.
#[cfg(feature = "server")]
#[get("/api/categories", session: tower_sessions::Session)]
pub async fn list_categories() -> Result<Vec<CategoryInfo>, ServerFnError> {
    use crate::models::Category;

    let user_id = require_user_id(&session).await?;
    let pool = db::get_pool().await.map_err(ApiError::from)?;

    let rows: Vec<Category> =
        sqlx::query_as("SELECT * FROM categories WHERE user_id = $1 ORDER BY created_at")
            .bind(user_id)
            .fetch_all(pool)
            .await
            .map_err(ApiError::from)?;

    Ok(rows.iter().map(Category::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/categories")]
pub async fn list_categories() -> Result<Vec<CategoryInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create a category for the session user.
#[cfg(feature = "server")]
#[post("/api/categories", session: tower_sessions::Session)]
pub async fn create_category(
    name: String,
    kind: String,
    color: Option<String>,
    icon: Option<String>,
) -> Result<CategoryInfo, ServerFnError> {
    use crate::models::Category;

    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(ServerFnError::new("Category name is required"));
    }

    let user_id = require_user_id(&session).await?;
    let pool = db::get_pool().await.map_err(ApiError::from)?;

    let row: Category = sqlx::query_as(
        "INSERT INTO categories (user_id, name, kind, color, icon)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(user_id)
    .bind(&name)
    .bind(&kind)
    .bind(&color)
    .bind(&icon)
    .fetch_one(pool)
    .await
    .map_err(ApiError::from)?;

    Ok(row.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/categories")]
pub async fn create_category(
    name: String,
    kind: String,
    color: Option<String>,
    icon: Option<String>,
) -> Result<CategoryInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List the session user's goals.
#[cfg(feature = "server")]
#[get("/api/goals", session: tower_sessions::Session)]
pub async fn list_goals() -> Result<Vec<GoalInfo>, ServerFnError> {
    use crate::models::Goal;

    let user_id = require_user_id(&session).await?;
    let pool = db::get_pool().await.map_err(ApiError::from)?;

    let rows: Vec<Goal> =
        sqlx::query_as("SELECT * FROM goals WHERE user_id = $1 ORDER BY created_at")
            .bind(user_id)
            .fetch_all(pool)
            .await
            .map_err(ApiError::from)?;

    Ok(rows.iter().map(Goal::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/goals")]
pub async fn list_goals() -> Result<Vec<GoalInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Insert a goal tagged with the session user id and return the stored row.
#[cfg(feature = "server")]
#[post("/api/goals", session: tower_sessions::Session)]
pub async fn add_goal(goal: NewGoal) -> Result<GoalInfo, ServerFnError> {
    use crate::models::Goal;

    let user_id = require_user_id(&session).await?;
    let pool = db::get_pool().await.map_err(ApiError::from)?;

    let category_id = uuid::Uuid::parse_str(&goal.category_id)
        .map_err(|e| ApiError::Invalid(format!("bad category id: {e}")))?;
    let target_date = goal
        .target_date
        .as_deref()
        .map(|d| chrono::NaiveDate::parse_from_str(d, "%Y-%m-%d"))
        .transpose()
        .map_err(|e| ApiError::Invalid(format!("bad target date: {e}")))?;

    let row: Goal = sqlx::query_as(
        "INSERT INTO goals (user_id, category_id, title, description, target_date, priority)
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
    )
    .bind(user_id)
    .bind(category_id)
    .bind(goal.title.trim())
    .bind(&goal.description)
    .bind(target_date)
    .bind(goal.priority)
    .fetch_one(pool)
    .await
    .map_err(ApiError::from)?;

    Ok(row.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/goals")]
pub async fn add_goal(goal: NewGoal) -> Result<GoalInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
