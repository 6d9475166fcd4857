//! Session state for the Wabot API.
//!
//! A session holds the access token, the refresh token, and the expiry
//! derived from the access token's claims. It is owned by the client and
//! mutated only by authenticate/refresh/logout. Sharing one session across
//! tasks requires external synchronization - validity check and dependent
//! call are not atomic.

use chrono::{DateTime, Utc};

/// Tokens for an authenticated session.
///
/// The refresh token may be empty when the server did not issue one.
/// `expires_at` is `None` when the access token carries no readable expiry
/// claim; such a token is assumed valid until the server rejects it.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Whether the access token is past its known expiry at `now`.
    fn expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expiry) => now >= expiry,
            None => false,
        }
    }
}

/// How `ensure_valid` should renew (or not renew) the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenewalPlan {
    /// Current access token is usable as-is.
    UseCurrent,
    /// Token missing or expired, refresh token present: try refresh,
    /// fall back to full authentication if it fails.
    RefreshThenAuthenticate,
    /// No session or no refresh token: full authentication.
    Authenticate,
}

/// Decide the renewal path for the given session state at `now`.
pub fn renewal_plan(session: Option<&Session>, now: DateTime<Utc>) -> RenewalPlan {
    match session {
        Some(s) if !s.expired_at(now) => RenewalPlan::UseCurrent,
        Some(s) if !s.refresh_token.is_empty() => RenewalPlan::RefreshThenAuthenticate,
        _ => RenewalPlan::Authenticate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session(expires_at: Option<DateTime<Utc>>, refresh_token: &str) -> Session {
        Session {
            access_token: "access".to_string(),
            refresh_token: refresh_token.to_string(),
            expires_at,
        }
    }

    #[test]
    fn test_expired_at() {
        let now = Utc::now();
        assert!(session(Some(now - Duration::seconds(1)), "r").expired_at(now));
        assert!(!session(Some(now + Duration::hours(1)), "r").expired_at(now));
        // Unknown expiry is never treated as expired
        assert!(!session(None, "r").expired_at(now));
    }

    #[test]
    fn test_expiry_boundary() {
        let now = Utc::now();
        let s = session(Some(now), "r");
        // now >= expiry counts as expired
        assert!(s.expired_at(now));
        assert!(!s.expired_at(now - Duration::seconds(1)));
    }

    #[test]
    fn test_plan_no_session_authenticates() {
        assert_eq!(renewal_plan(None, Utc::now()), RenewalPlan::Authenticate);
    }

    #[test]
    fn test_plan_valid_session_uses_current() {
        let now = Utc::now();
        let s = session(Some(now + Duration::hours(1)), "refresh");
        assert_eq!(renewal_plan(Some(&s), now), RenewalPlan::UseCurrent);
    }

    #[test]
    fn test_plan_unknown_expiry_uses_current() {
        let s = session(None, "refresh");
        assert_eq!(renewal_plan(Some(&s), Utc::now()), RenewalPlan::UseCurrent);
    }

    #[test]
    fn test_plan_expired_with_refresh_token_refreshes() {
        let now = Utc::now();
        let s = session(Some(now - Duration::seconds(10)), "refresh");
        assert_eq!(
            renewal_plan(Some(&s), now),
            RenewalPlan::RefreshThenAuthenticate
        );
    }

    #[test]
    fn test_plan_expired_without_refresh_token_authenticates() {
        let now = Utc::now();
        let s = session(Some(now - Duration::seconds(10)), "");
        assert_eq!(renewal_plan(Some(&s), now), RenewalPlan::Authenticate);
    }
}
