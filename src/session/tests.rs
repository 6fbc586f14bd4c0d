//! Tests for session module
//!
//! These tests verify core session functionality including:
//! - Session model structure and the user-implies-token invariant
//! - File and memory store round-trips
//! - Login/logout state transitions

use std::path::PathBuf;
use std::sync::Arc;

use super::manager::SessionManager;
use super::models::{Session, TokenResponse, User};
use super::store::{FileSessionStore, MemorySessionStore, SessionStore};
use crate::common::Config;

fn test_user(email: &str) -> User {
    User {
        id: 7,
        email: email.to_string(),
        full_name: "Ana Socia".to_string(),
        email_verified: true,
        active: true,
        superadmin: false,
        google_id: None,
        photo_url: None,
        created_at: Some("2024-03-01T10:00:00".to_string()),
        last_login: None,
        notifications_enabled: true,
        email_digest: "weekly".to_string(),
        dark_mode: false,
        language: "es".to_string(),
    }
}

fn test_session() -> Session {
    Session {
        user: test_user("ana@example.com"),
        access_token: "access-token-1".to_string(),
        refresh_token: "refresh-token-1".to_string(),
    }
}

fn test_config(session_file: PathBuf) -> Config {
    Config {
        api_url: "http://localhost:9".to_string(),
        google_client_id: None,
        google_redirect_uri: None,
        session_file,
    }
}

#[test]
fn test_user_deserializes_from_backend_payload() {
    let raw = r#"{
        "id": 3,
        "email": "socio@club.org",
        "nombre_completo": "Luis Piloto",
        "email_verificado": true,
        "activo": true,
        "es_superadmin": false,
        "fecha_creacion": "2024-01-15T09:30:00",
        "ultimo_login": null
    }"#;

    let user: User = serde_json::from_str(raw).expect("user payload should parse");
    assert_eq!(user.id, 3);
    assert_eq!(user.full_name, "Luis Piloto");
    // Preference fields fall back to the backend defaults when absent
    assert!(user.notifications_enabled);
    assert_eq!(user.email_digest, "weekly");
    assert_eq!(user.language, "es");
}

#[test]
fn test_token_response_defaults_token_type() {
    let raw = r#"{"access_token": "a", "refresh_token": "r", "expires_in": 1800}"#;
    let tokens: TokenResponse = serde_json::from_str(raw).expect("token payload should parse");
    assert_eq!(tokens.token_type, "bearer");
    assert_eq!(tokens.expires_in, 1800);
}

#[test]
fn test_session_round_trips_through_json() {
    let session = test_session();
    let raw = serde_json::to_string(&session).expect("session should serialize");
    let back: Session = serde_json::from_str(&raw).expect("session should deserialize");

    assert_eq!(back.user.email, "ana@example.com");
    assert_eq!(back.access_token, "access-token-1");
    assert_eq!(back.refresh_token, "refresh-token-1");
}

#[tokio::test]
async fn test_file_store_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileSessionStore::new(dir.path().join("nested").join("session.json"));

    // Empty store loads as None
    assert!(store.load().await.expect("load").is_none());

    store.save(&test_session()).await.expect("save");
    let loaded = store.load().await.expect("load").expect("session present");
    assert_eq!(loaded.user.id, 7);

    store.clear().await.expect("clear");
    assert!(store.load().await.expect("load").is_none());
    // Clearing twice is fine
    store.clear().await.expect("second clear");
}

#[tokio::test]
async fn test_file_store_discards_corrupt_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("session.json");
    tokio::fs::write(&path, b"{not json").await.expect("write");

    let store = FileSessionStore::new(path.clone());
    assert!(store.load().await.expect("load").is_none());
    // The broken file is removed so the next run starts clean
    assert!(!path.exists());
}

#[tokio::test]
async fn test_login_and_logout_transitions() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("session.json");
    let store = Arc::new(FileSessionStore::new(path.clone()));
    let manager = SessionManager::new(&test_config(path.clone()), store.clone());

    assert!(!manager.is_authenticated().await);

    let session = test_session();
    manager
        .login(
            session.user.clone(),
            session.access_token.clone(),
            session.refresh_token.clone(),
        )
        .await
        .expect("login");

    assert!(manager.is_authenticated().await);
    assert_eq!(
        manager.access_token().await.as_deref(),
        Some("access-token-1")
    );
    assert!(path.exists(), "login persists the session file");

    manager.logout().await.expect("logout");
    assert!(!manager.is_authenticated().await);
    assert!(manager.access_token().await.is_none());
    assert!(manager.refresh_token().await.is_none());
    assert!(manager.current_user().await.is_none());
    assert!(!path.exists(), "logout removes the session file");
}

#[tokio::test]
async fn test_initialize_restores_persisted_session() {
    let store = Arc::new(MemorySessionStore::new());
    store.save(&test_session()).await.expect("seed store");

    let manager = SessionManager::new(&test_config(PathBuf::from("unused")), store);
    let restored = manager.initialize().await.expect("initialize");

    assert!(restored);
    assert!(manager.is_authenticated().await);
    let user = manager.current_user().await.expect("user restored");
    assert_eq!(user.email, "ana@example.com");
}

#[tokio::test]
async fn test_update_user_persists_new_record() {
    let store = Arc::new(MemorySessionStore::new());
    let manager = SessionManager::new(&test_config(PathBuf::from("unused")), store.clone());

    let session = test_session();
    manager
        .login(
            session.user,
            session.access_token,
            session.refresh_token,
        )
        .await
        .expect("login");

    let mut updated = test_user("ana@example.com");
    updated.full_name = "Ana Presidenta".to_string();
    manager.update_user(updated).await.expect("update user");

    let stored = store.load().await.expect("load").expect("present");
    assert_eq!(stored.user.full_name, "Ana Presidenta");
    // Tokens are untouched by a profile update
    assert_eq!(stored.access_token, "access-token-1");
}
