//! Login link construction.

use crate::config::AuthConfig;

/// Build the provider's implicit-flow authorization URL.
///
/// Settings values are embedded verbatim; `callback_path` is appended to the
/// callback URL so the provider returns to a specific page.
pub fn build_login_link(auth: &AuthConfig, callback_path: &str) -> String {
    format!(
        "https://{}/authorize?audience={}&response_type=token&client_id={}&redirect_uri={}{}",
        auth.domain(),
        auth.audience,
        auth.client_id,
        auth.callback_url,
        callback_path
    )
}
