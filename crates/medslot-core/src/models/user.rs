//! User model definition.

use serde::{Deserialize, Serialize};

use super::{Role, VerificationStatus};

/// A patient, doctor or administrator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier for the user
    pub id: u64,

    /// User id issued by the identity provider
    pub principal: String,

    pub email: String,

    pub name: Option<String>,

    #[serde(default)]
    pub role: Role,

    /// Remaining credits (patients) or earned credits (doctors)
    pub credits: i64,

    pub image_url: Option<String>,

    /// Doctor-only profile fields
    pub specialty: Option<String>,
    pub experience: Option<u32>,
    pub credential_url: Option<String>,
    pub description: Option<String>,
    pub verification_status: Option<VerificationStatus>,
}

/// Fields needed to insert a user.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub principal: String,
    pub email: String,
    pub name: Option<String>,
    pub role: Role,
    pub credits: i64,
    pub image_url: Option<String>,
    pub specialty: Option<String>,
    pub experience: Option<u32>,
    pub credential_url: Option<String>,
    pub description: Option<String>,
    pub verification_status: Option<VerificationStatus>,
}

impl NewUser {
    /// A patient with a starting credit balance.
    pub fn patient(principal: &str, email: &str, name: &str, credits: i64) -> Self {
        Self {
            principal: principal.to_string(),
            email: email.to_string(),
            name: Some(name.to_string()),
            role: Role::Patient,
            credits,
            ..Self::default()
        }
    }
}
