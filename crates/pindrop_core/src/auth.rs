//! Identity-SDK seam: authentication state and sign-in outcomes.
//!
//! # Responsibility
//! - Derive the app-level authentication state from whatever identity
//!   provider the host platform wires in.
//! - Model the sign-in result callback shape. No SDK code lives here.

use std::fmt::{Display, Formatter};

/// Minimal identity of the signed-in user as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Provider-issued stable user id.
    pub uid: String,
    pub display_name: Option<String>,
}

/// App-level authentication state driving the login screen routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthenticationState {
    Authenticated,
    Unauthenticated,
}

/// Result of one sign-in attempt, delivered by the host SDK callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutcome {
    Success(User),
    Cancelled,
    Failed(String),
}

impl Display for SignInOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success(user) => write!(f, "signed in as {}", user.uid),
            Self::Cancelled => write!(f, "sign-in cancelled"),
            Self::Failed(message) => write!(f, "sign-in failed: {message}"),
        }
    }
}

/// Capability boundary for the external identity SDK.
pub trait IdentityProvider {
    /// Returns the currently signed-in user, if any.
    fn current_user(&self) -> Option<User>;
}

/// View-model mapping provider state to `AuthenticationState`.
pub struct AuthenticationViewModel<P: IdentityProvider> {
    provider: P,
}

impl<P: IdentityProvider> AuthenticationViewModel<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn authentication_state(&self) -> AuthenticationState {
        match self.provider.current_user() {
            Some(_) => AuthenticationState::Authenticated,
            None => AuthenticationState::Unauthenticated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthenticationState, AuthenticationViewModel, IdentityProvider, User};

    struct FakeProvider(Option<User>);

    impl IdentityProvider for FakeProvider {
        fn current_user(&self) -> Option<User> {
            self.0.clone()
        }
    }

    #[test]
    fn signed_in_user_maps_to_authenticated() {
        let view_model = AuthenticationViewModel::new(FakeProvider(Some(User {
            uid: "user-1".to_string(),
            display_name: None,
        })));
        assert_eq!(
            view_model.authentication_state(),
            AuthenticationState::Authenticated
        );
    }

    #[test]
    fn absent_user_maps_to_unauthenticated() {
        let view_model = AuthenticationViewModel::new(FakeProvider(None));
        assert_eq!(
            view_model.authentication_state(),
            AuthenticationState::Unauthenticated
        );
    }
}
