//! Sign-in/sign-up credential validation and identifier normalization.
//!
//! Users authenticate with an identifier that is either an email address or
//! a phone number, chosen explicitly via [`AuthMethod`]. The backend's user
//! table requires an email column, so phone sign-ups synthesize a placeholder
//! address and carry the raw identifier along as username metadata.
//! [`signup_identity`] is the single place that workaround lives; swap it out
//! if the backend's requirements ever change.

use serde::{Deserialize, Serialize};

/// Minimum accepted password length.
pub const PASSWORD_MIN_LEN: usize = 6;

const PLACEHOLDER_EMAIL_DOMAIN: &str = "temporary.com";

/// Which field of the auth call the identifier populates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthMethod {
    Email,
    Phone,
}

impl AuthMethod {
    pub fn label(self) -> &'static str {
        match self {
            AuthMethod::Email => "Email",
            AuthMethod::Phone => "Phone",
        }
    }
}

/// Identity fields a sign-up call sends to the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpIdentity {
    pub email: String,
    /// Raw identifier, kept as metadata for non-email sign-ups.
    pub username: Option<String>,
}

/// Check an identifier/password pair before any network call is made.
pub fn validate_credentials(identifier: &str, password: &str) -> Result<(), String> {
    if identifier.trim().is_empty() {
        return Err("Identifier is required".to_string());
    }
    if password.len() < PASSWORD_MIN_LEN {
        return Err(format!(
            "Password must be at least {PASSWORD_MIN_LEN} characters"
        ));
    }
    Ok(())
}

/// Normalize a sign-up identifier into the shape the backend expects.
pub fn signup_identity(identifier: &str, method: AuthMethod) -> SignUpIdentity {
    let identifier = identifier.trim();
    match method {
        AuthMethod::Email => SignUpIdentity {
            email: identifier.to_lowercase(),
            username: None,
        },
        AuthMethod::Phone => SignUpIdentity {
            email: format!("{identifier}@{PLACEHOLDER_EMAIL_DOMAIN}"),
            username: Some(identifier.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_sign_up_synthesizes_placeholder_email() {
        let identity = signup_identity("alice", AuthMethod::Phone);
        assert_eq!(identity.email, "alice@temporary.com");
        assert_eq!(identity.username.as_deref(), Some("alice"));
    }

    #[test]
    fn email_sign_up_passes_through_lowercased() {
        let identity = signup_identity("Alice@Example.COM", AuthMethod::Email);
        assert_eq!(identity.email, "alice@example.com");
        assert_eq!(identity.username, None);
    }

    #[test]
    fn identifiers_are_trimmed_before_normalization() {
        let identity = signup_identity("  0712345678 ", AuthMethod::Phone);
        assert_eq!(identity.email, "0712345678@temporary.com");
        assert_eq!(identity.username.as_deref(), Some("0712345678"));
    }

    #[test]
    fn short_passwords_are_rejected_for_any_identifier() {
        for identifier in ["alice", "alice@example.com", "0712345678"] {
            let err = validate_credentials(identifier, "12345").unwrap_err();
            assert!(err.contains("at least 6"));
        }
        assert!(validate_credentials("alice", "secret1").is_ok());
    }

    #[test]
    fn empty_identifier_is_rejected() {
        assert!(validate_credentials("", "secret1").is_err());
        assert!(validate_credentials("   ", "secret1").is_err());
    }
}
