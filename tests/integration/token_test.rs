use jsonwebtoken::{EncodingKey, Header, encode};

use otp_auth::domain::types::SESSION_TTL_SECS;
use otp_auth::usecase::token::{
    SessionClaims, TokenError, issue_session_token, validate_session_token,
};

use crate::helpers::TEST_JWT_SECRET;

fn now_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

#[test]
fn should_issue_token_that_validates_successfully() {
    let token = issue_session_token("a@b.com", TEST_JWT_SECRET).unwrap();
    assert!(!token.is_empty());

    let claims = validate_session_token(&token, TEST_JWT_SECRET).unwrap();
    assert_eq!(claims.email, "a@b.com");
    assert_eq!(claims.exp, claims.iat + SESSION_TTL_SECS);
    assert!(claims.exp > now_secs());
}

#[test]
fn should_reject_token_signed_with_wrong_secret() {
    let token = issue_session_token("a@b.com", TEST_JWT_SECRET).unwrap();

    let result = validate_session_token(&token, "wrong-secret");
    assert!(
        matches!(result, Err(TokenError::InvalidSignature)),
        "expected InvalidSignature, got {result:?}"
    );
}

#[test]
fn should_reject_malformed_token() {
    let result = validate_session_token("not-a-jwt", TEST_JWT_SECRET);
    assert!(
        matches!(result, Err(TokenError::Malformed)),
        "expected Malformed, got {result:?}"
    );
}

#[test]
fn should_reject_token_expired_moments_ago() {
    // Just past expiry; zero leeway means even a few seconds is enough.
    let iat = now_secs() - SESSION_TTL_SECS - 5;
    let claims = SessionClaims {
        email: "a@b.com".to_owned(),
        iat,
        exp: iat + SESSION_TTL_SECS,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap();

    let result = validate_session_token(&token, TEST_JWT_SECRET);
    assert!(
        matches!(result, Err(TokenError::Expired)),
        "expected Expired, got {result:?}"
    );
}

#[test]
fn should_reject_expired_token() {
    // Two hours in the past, well beyond the session lifetime.
    let iat = now_secs() - 2 * SESSION_TTL_SECS;
    let claims = SessionClaims {
        email: "a@b.com".to_owned(),
        iat,
        exp: iat + SESSION_TTL_SECS,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap();

    let result = validate_session_token(&token, TEST_JWT_SECRET);
    assert!(
        matches!(result, Err(TokenError::Expired)),
        "expected Expired, got {result:?}"
    );
}
