//! Source of the currently authenticated principal.
//!
//! Session verification belongs to the hosted identity provider. The
//! booking service only needs the verified user id, or nothing when the
//! caller is anonymous.

/// Answers "who is calling?".
pub trait Identity: Send + Sync {
    /// The identity-provider user id of the caller, if authenticated.
    fn current_principal(&self) -> Option<String>;
}

/// An identity fixed at construction time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticIdentity {
    principal: Option<String>,
}

impl StaticIdentity {
    /// An authenticated caller.
    pub fn new(principal: impl Into<String>) -> Self {
        Self {
            principal: Some(principal.into()),
        }
    }

    /// A caller with no session.
    pub fn anonymous() -> Self {
        Self::default()
    }
}

impl Identity for StaticIdentity {
    fn current_principal(&self) -> Option<String> {
        self.principal.clone()
    }
}

impl<T: Identity + ?Sized> Identity for &T {
    fn current_principal(&self) -> Option<String> {
        (**self).current_principal()
    }
}
