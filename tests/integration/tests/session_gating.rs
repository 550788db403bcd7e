//! Session gating through the HTTP router.
//!
//! Verifies that the token, not merely the unlocked store, is what grants
//! access: expiry, revocation on bare landing visits, and token rotation
//! across unlock attempts.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use otpvault_core::SecretString;
use otpvault_gateway::{Gateway, GatewayConfig};
use otpvault_integration_tests::vault_fixture;
use otpvault_session::{unlock, SecretStore, SESSION_TTL};
use tower::ServiceExt;

const PASSWORD: &str = "correct-horse";
const GITHUB_SEED: &str = "JBSWY3DPEHPK3PXP";

fn test_gateway() -> Gateway {
    Gateway::new(
        GatewayConfig::default(),
        vault_fixture(PASSWORD, &[("github", GITHUB_SEED)]),
    )
}

async fn post_unlock(gateway: &Gateway, password: &str) -> (StatusCode, String) {
    let response = gateway
        .router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/unlock")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from(format!("password={password}")))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn token_from_page(page: &str) -> String {
    let start = page.find("const token = \"").expect("token in codes page") + 15;
    page[start..start + 32].to_string()
}

async fn get_codes(gateway: &Gateway, token: &str) -> StatusCode {
    gateway
        .router()
        .oneshot(
            Request::get("/api/codes")
                .header("X-Session-Token", token)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
        .status()
}

#[tokio::test]
async fn code_fetch_succeeds_only_with_live_token() {
    let gateway = test_gateway();

    let (status, page) = post_unlock(&gateway, PASSWORD).await;
    assert_eq!(status, StatusCode::OK);
    let token = token_from_page(&page);

    assert_eq!(get_codes(&gateway, &token).await, StatusCode::OK);
    assert_eq!(
        get_codes(&gateway, "ffffffffffffffffffffffffffffffff").await,
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(get_codes(&gateway, "").await, StatusCode::UNAUTHORIZED);
}

#[tokio::test(start_paused = true)]
async fn token_is_rejected_after_ttl_elapses() {
    // Drive the session layer directly under the paused clock; the fixed
    // TTL is what the gateway uses for real requests.
    let store = SecretStore::new();
    let blob = vault_fixture(PASSWORD, &[("github", GITHUB_SEED)]);
    let token = unlock(&blob, &SecretString::new(PASSWORD), &store)
        .await
        .unwrap();

    assert!(store.validate_token(&token).await);

    tokio::time::advance(SESSION_TTL + Duration::from_secs(1)).await;

    assert!(!store.is_unlocked().await);
    assert!(!store.validate_token(&token).await);
}

#[tokio::test]
async fn bare_landing_visit_revokes_session() {
    let gateway = test_gateway();
    let (_, page) = post_unlock(&gateway, PASSWORD).await;
    let token = token_from_page(&page);
    assert_eq!(get_codes(&gateway, &token).await, StatusCode::OK);

    // Visit the index without the token: implicit re-lock.
    let response = gateway
        .router()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The previously issued token is dead.
    assert_eq!(get_codes(&gateway, &token).await, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn landing_with_mismatched_token_also_revokes() {
    let gateway = test_gateway();
    let (_, page) = post_unlock(&gateway, PASSWORD).await;
    let token = token_from_page(&page);

    let response = gateway
        .router()
        .oneshot(
            Request::get("/?token=00000000000000000000000000000000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(get_codes(&gateway, &token).await, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn each_unlock_rotates_the_token() {
    let gateway = test_gateway();

    let (_, first_page) = post_unlock(&gateway, PASSWORD).await;
    let first = token_from_page(&first_page);

    let (_, second_page) = post_unlock(&gateway, PASSWORD).await;
    let second = token_from_page(&second_page);

    assert_ne!(first, second);
    assert_eq!(get_codes(&gateway, &first).await, StatusCode::UNAUTHORIZED);
    assert_eq!(get_codes(&gateway, &second).await, StatusCode::OK);
}

#[tokio::test]
async fn failed_unlock_keeps_store_locked() {
    let gateway = test_gateway();

    let (status, page) = post_unlock(&gateway, "wrong-horse").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("Invalid password or corrupted data."));

    assert_eq!(
        get_codes(&gateway, "ffffffffffffffffffffffffffffffff").await,
        StatusCode::UNAUTHORIZED
    );
}
