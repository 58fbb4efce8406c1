/// Landing page that unauthenticated visitors are sent back to.
pub const LANDING_PATH: &str = "/";

/// Outcome of a page access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Redirect { to: &'static str },
}

/// Point-in-time access check for pages that require a session.
///
/// Evaluated once on page entry. A later change to the session does not
/// re-run the check; the next navigation does.
pub fn require_authenticated(authenticated: bool) -> AccessDecision {
    if authenticated {
        AccessDecision::Allow
    } else {
        AccessDecision::Redirect { to: LANDING_PATH }
    }
}
