//! Tests for auth module.

use super::*;
use crate::config::{AuthConfig, DeploymentSettings};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{TimeZone, Utc};
use serde_json::json;

fn auth_config() -> AuthConfig {
    DeploymentSettings::development_defaults().auth0
}

fn token_with(claims: serde_json::Value) -> String {
    format!(
        "{}.{}.signature",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"RS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(claims.to_string())
    )
}

fn barista_token() -> String {
    token_with(json!({
        "iss": "https://udacity-fsnd-iam.us.auth0.com/",
        "sub": "auth0|barista",
        "aud": ["coffeeShop", "https://udacity-fsnd-iam.us.auth0.com/userinfo"],
        "exp": 1_700_000_000,
        "permissions": ["get:drinks", "get:drinks-detail"]
    }))
}

// ==================== Login link tests ====================

#[test]
fn test_login_link_embeds_settings_verbatim() {
    let link = build_login_link(&auth_config(), "");

    assert_eq!(
        link,
        "https://udacity-fsnd-iam.us.auth0.com/authorize?audience=coffeeShop&response_type=token\
         &client_id=zBuUfx2gVIVENKViGb1OIAmcHQp9TGGp&redirect_uri=http://127.0.0.1:8100"
    );
}

#[test]
fn test_login_link_appends_callback_path() {
    let session = AuthSession::new(auth_config());
    let link = session.login_link("/tabs/user-page");

    assert!(link.ends_with("&redirect_uri=http://127.0.0.1:8100/tabs/user-page"));
}

#[test]
fn test_login_link_uses_substituted_settings() {
    let auth = AuthConfig {
        domain_prefix: "tenant.eu".to_string(),
        audience: "drinksApi".to_string(),
        client_id: "client-1".to_string(),
        callback_url: "https://app.example.com".to_string(),
    };
    let link = build_login_link(&auth, "");

    assert!(link.starts_with("https://tenant.eu.auth0.com/authorize?"));
    assert!(link.contains("audience=drinksApi&"));
    assert!(link.contains("client_id=client-1&"));
    assert!(link.ends_with("redirect_uri=https://app.example.com"));
}

// ==================== Claims tests ====================

#[test]
fn test_decode_claims() {
    let claims = Claims::decode(&barista_token()).unwrap();

    assert_eq!(claims.sub.as_deref(), Some("auth0|barista"));
    assert!(claims.has_audience("coffeeShop"));
    assert!(!claims.has_audience("otherApi"));
    assert_eq!(claims.permissions, vec!["get:drinks", "get:drinks-detail"]);
    assert_eq!(
        claims.expires_at(),
        Some(Utc.timestamp_opt(1_700_000_000, 0).unwrap())
    );
}

#[test]
fn test_decode_single_audience() {
    let claims = Claims::decode(&token_with(json!({ "aud": "coffeeShop" }))).unwrap();

    assert_eq!(claims.aud, Some(Audience::One("coffeeShop".to_string())));
    assert!(claims.permissions.is_empty());
    assert!(claims.exp.is_none());
}

#[test]
fn test_decode_wrong_segment_count() {
    let result = Claims::decode("only.two");
    assert!(matches!(result, Err(AuthError::MalformedToken(_))));

    let result = Claims::decode("a.b.c.d");
    assert!(matches!(result, Err(AuthError::MalformedToken(_))));
}

#[test]
fn test_decode_bad_base64() {
    let result = Claims::decode("header.!!!.sig");
    assert!(matches!(result, Err(AuthError::Decode(_))));
}

#[test]
fn test_decode_bad_json() {
    let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode("not json"));
    assert!(matches!(Claims::decode(&token), Err(AuthError::Claims(_))));
}

// ==================== Session tests ====================

#[test]
fn test_check_token_fragment_from_callback_url() {
    let mut session = AuthSession::new(auth_config());
    let token = barista_token();
    let location = format!(
        "http://127.0.0.1:8100/tabs/user-page#access_token={}&expires_in=7200&token_type=Bearer",
        token
    );

    assert!(session.check_token_fragment(&location).unwrap());
    assert_eq!(session.token(), Some(token.as_str()));
    assert!(session.is_authenticated());
}

#[test]
fn test_check_token_fragment_bare_fragment() {
    let mut session = AuthSession::new(auth_config());
    let fragment = format!("access_token={}", barista_token());

    assert!(session.check_token_fragment(&fragment).unwrap());
}

#[test]
fn test_check_token_fragment_ignores_other_fragments() {
    let mut session = AuthSession::new(auth_config());

    assert!(!session.check_token_fragment("http://127.0.0.1:8100/tabs/drink-menu").unwrap());
    assert!(!session.check_token_fragment("http://127.0.0.1:8100/#error=access_denied").unwrap());
    // only the first pair is considered
    let late = format!("#state=xyz&access_token={}", barista_token());
    assert!(!session.check_token_fragment(&late).unwrap());
    assert!(!session.is_authenticated());
}

#[test]
fn test_set_token_rejects_other_audience() {
    let mut session = AuthSession::new(auth_config());
    let token = token_with(json!({ "aud": "someoneElse", "permissions": ["post:drinks"] }));

    let result = session.set_token(token);
    assert!(matches!(
        result,
        Err(AuthError::AudienceMismatch { ref expected }) if expected == "coffeeShop"
    ));
    assert!(session.token().is_none());
    assert!(!session.can("post:drinks"));
}

#[test]
fn test_set_token_rejects_missing_audience() {
    let mut session = AuthSession::new(auth_config());
    let result = session.set_token(token_with(json!({ "sub": "x" })));

    assert!(matches!(result, Err(AuthError::AudienceMismatch { .. })));
}

#[test]
fn test_can() {
    let mut session = AuthSession::new(auth_config());
    assert!(!session.can("get:drinks-detail"));

    session.set_token(barista_token()).unwrap();

    assert!(session.can("get:drinks-detail"));
    assert!(session.can("get:drinks"));
    assert!(!session.can("post:drinks"));
    assert!(!session.can(""));
}

#[test]
fn test_can_without_permissions_claim() {
    let mut session = AuthSession::new(auth_config());
    session
        .set_token(token_with(json!({ "aud": "coffeeShop" })))
        .unwrap();

    assert!(session.is_authenticated());
    assert!(!session.can("get:drinks"));
}

#[test]
fn test_is_expired() {
    let mut session = AuthSession::new(auth_config());
    let before = Utc.timestamp_opt(1_699_999_999, 0).unwrap();
    let after = Utc.timestamp_opt(1_700_000_001, 0).unwrap();

    assert!(session.is_expired(before));

    session.set_token(barista_token()).unwrap();
    assert!(!session.is_expired(before));
    assert!(session.is_expired(after));
}

#[test]
fn test_out_of_range_exp_is_expired() {
    let mut session = AuthSession::new(auth_config());
    session
        .set_token(token_with(json!({ "aud": "coffeeShop", "exp": i64::MAX })))
        .unwrap();

    assert!(session.claims().unwrap().expires_at().is_none());
    assert!(session.is_expired(Utc.timestamp_opt(0, 0).unwrap()));
}

#[test]
fn test_token_without_exp_never_expires() {
    let mut session = AuthSession::new(auth_config());
    session
        .set_token(token_with(json!({ "aud": "coffeeShop" })))
        .unwrap();

    assert!(!session.is_expired(Utc.timestamp_opt(4_000_000_000, 0).unwrap()));
}

#[test]
fn test_logout_clears_token() {
    let mut session = AuthSession::new(auth_config());
    session.set_token(barista_token()).unwrap();

    session.logout();

    assert!(session.token().is_none());
    assert!(session.claims().is_none());
    assert!(!session.can("get:drinks"));
}
