//! Stubbed authentication calls and the submission lifecycle.
//!
//! The real backend does not exist yet; `login` and `signup` stand in for it
//! by awaiting a short delay and succeeding. The request payload types and
//! the failure variants are already shaped for the real integration.

use serde::Serialize;

/// Simulated round-trip for a login call, in milliseconds
pub const LOGIN_DELAY_MS: u32 = 700;

/// Simulated round-trip for a signup call, in milliseconds
pub const SIGNUP_DELAY_MS: u32 = 900;

/// Payload the login endpoint will accept.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload the signup endpoint will accept. The confirmation field is a
/// client-side check and is not part of the payload.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Errors surfaced as the form-level message.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AuthError {
    /// The login endpoint rejected the request
    #[display("Login failed. Please try again.")]
    LoginFailed,
    /// The signup endpoint rejected the request
    #[display("Something went wrong. Try again.")]
    SignupFailed,
    /// Auth calls only run in the browser
    #[display("Authentication is not available on the server.")]
    ServerSide,
}

/// Submission lifecycle of a single form instance.
///
/// Validation runs synchronously before `Submitting` is entered, so an
/// invalid submit never leaves `Idle`. At most one submission is in flight
/// per form; submit handlers bail out while `in_flight` is true.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed(AuthError),
}

impl SubmitState {
    pub fn in_flight(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }

    pub fn succeeded(&self) -> bool {
        matches!(self, SubmitState::Success)
    }

    /// Form-level error message, if the last submission failed.
    pub fn error(&self) -> Option<&AuthError> {
        match self {
            SubmitState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Simulated login call. Always succeeds after the delay.
// TODO: replace with a fetch to /api/auth/login once the backend lands.
#[cfg(not(feature = "ssr"))]
pub async fn login(request: &LoginRequest) -> Result<(), AuthError> {
    use gloo_timers::future::TimeoutFuture;

    let _ = request;
    TimeoutFuture::new(LOGIN_DELAY_MS).await;
    Ok(())
}

#[cfg(feature = "ssr")]
pub async fn login(_request: &LoginRequest) -> Result<(), AuthError> {
    Err(AuthError::ServerSide)
}

/// Simulated signup call. Always succeeds after the delay.
// TODO: replace with a fetch to /api/auth/signup once the backend lands.
#[cfg(not(feature = "ssr"))]
pub async fn signup(request: &SignupRequest) -> Result<(), AuthError> {
    use gloo_timers::future::TimeoutFuture;

    let _ = request;
    TimeoutFuture::new(SIGNUP_DELAY_MS).await;
    Ok(())
}

#[cfg(feature = "ssr")]
pub async fn signup(_request: &SignupRequest) -> Result<(), AuthError> {
    Err(AuthError::ServerSide)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_state_starts_idle() {
        let state = SubmitState::default();
        assert_eq!(state, SubmitState::Idle);
        assert!(!state.in_flight());
        assert!(!state.succeeded());
        assert!(state.error().is_none());
    }

    #[test]
    fn only_submitting_counts_as_in_flight() {
        assert!(SubmitState::Submitting.in_flight());
        assert!(!SubmitState::Idle.in_flight());
        assert!(!SubmitState::Success.in_flight());
        assert!(!SubmitState::Failed(AuthError::LoginFailed).in_flight());
    }

    #[test]
    fn failed_state_exposes_its_error() {
        let state = SubmitState::Failed(AuthError::SignupFailed);
        assert_eq!(state.error(), Some(&AuthError::SignupFailed));
        assert!(!state.succeeded());
    }

    #[test]
    fn form_level_messages_match_the_form_copy() {
        assert_eq!(
            AuthError::LoginFailed.to_string(),
            "Login failed. Please try again."
        );
        assert_eq!(
            AuthError::SignupFailed.to_string(),
            "Something went wrong. Try again."
        );
    }

    #[test]
    fn login_request_serializes_the_expected_payload() {
        let request = LoginRequest {
            username: "bob".into(),
            password: "longenough1".into(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"username": "bob", "password": "longenough1"})
        );
    }

    #[test]
    fn signup_request_does_not_carry_the_confirmation() {
        let request = SignupRequest {
            username: "bob".into(),
            email: "bob@x.com".into(),
            password: "longenough1".into(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "username": "bob",
                "email": "bob@x.com",
                "password": "longenough1"
            })
        );
    }
}
