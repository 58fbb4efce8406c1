use crate::models::role_profile::RoleProfile;

/// Caller-supplied fields for the signup operation.
///
/// Fields are trusted as-is; no uniqueness or format validation is
/// performed on them.
#[derive(Debug, Clone)]
pub struct SignupProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar: Option<String>,
    pub role: RoleProfile,
}
