//! Identity provider integration.
//!
//! Builds the login link from [`AuthConfig`](crate::config::AuthConfig),
//! picks up the access token returned on the callback URL and answers
//! permission checks from its claims.

mod claims;
mod error;
mod link;
mod session;

pub use claims::{Audience, Claims};
pub use error::AuthError;
pub use link::build_login_link;
pub use session::AuthSession;

#[cfg(test)]
mod tests;
