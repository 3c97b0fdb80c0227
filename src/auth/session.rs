//! Client-side login state.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::{AuthError, Claims, build_login_link};
use crate::config::AuthConfig;

const ACCESS_TOKEN_KEY: &str = "access_token";

/// Token and claims of the signed-in user, if any.
#[derive(Debug, Clone)]
pub struct AuthSession {
    auth: AuthConfig,
    token: Option<String>,
    claims: Option<Claims>,
}

impl AuthSession {
    pub fn new(auth: AuthConfig) -> Self {
        Self {
            auth,
            token: None,
            claims: None,
        }
    }

    pub fn login_link(&self, callback_path: &str) -> String {
        build_login_link(&self.auth, callback_path)
    }

    /// Take the access token from the URL the provider redirected back to.
    ///
    /// Accepts either the full callback URL or just its fragment. Only the
    /// first `key=value` pair of the fragment is looked at. Returns `Ok(false)`
    /// when it does not carry an access token.
    pub fn check_token_fragment(&mut self, location: &str) -> Result<bool, AuthError> {
        let fragment = location.split_once('#').map_or(location, |(_, f)| f);
        let first = fragment.split('&').next().unwrap_or_default();

        match first.split_once('=') {
            Some((ACCESS_TOKEN_KEY, value)) if !value.is_empty() => {
                let token = urlencoding::decode(value)
                    .map_err(|_| AuthError::MalformedToken("token is not valid utf-8"))?;
                self.set_token(token.into_owned())?;
                Ok(true)
            }
            _ => {
                debug!("no access token in callback fragment");
                Ok(false)
            }
        }
    }

    /// Decode and keep `token` if it was issued for the configured audience.
    pub fn set_token(&mut self, token: String) -> Result<(), AuthError> {
        let claims = Claims::decode(&token)?;
        if !claims.has_audience(&self.auth.audience) {
            warn!(audience = %self.auth.audience, "access token rejected");
            return Err(AuthError::AudienceMismatch {
                expected: self.auth.audience.clone(),
            });
        }

        info!(
            sub = claims.sub.as_deref().unwrap_or("unknown"),
            permissions = claims.permissions.len(),
            "access token accepted"
        );
        self.token = Some(token);
        self.claims = Some(claims);
        Ok(())
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn claims(&self) -> Option<&Claims> {
        self.claims.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// True when the signed-in user's token grants `permission`.
    pub fn can(&self, permission: &str) -> bool {
        self.claims
            .as_ref()
            .is_some_and(|claims| claims.permissions.iter().any(|p| p == permission))
    }

    /// No token counts as expired; a token without `exp` never expires.
    /// An `exp` outside the representable range counts as expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match &self.claims {
            None => true,
            Some(claims) => match (claims.exp, claims.expires_at()) {
                (None, _) => false,
                (Some(_), None) => true,
                (Some(_), Some(at)) => at <= now,
            },
        }
    }

    pub fn logout(&mut self) {
        self.token = None;
        self.claims = None;
    }
}
