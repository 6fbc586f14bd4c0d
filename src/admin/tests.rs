//! Tests for admin module

use super::models::*;

#[test]
fn test_email_config_parses_masked_password() {
    let raw = r#"{
        "smtp_server": "smtp.gmail.com",
        "smtp_port": 587,
        "smtp_username": "noreply@piarapp.com",
        "smtp_password": "********",
        "smtp_from_email": "noreply@piarapp.com",
        "smtp_use_tls": true,
        "smtp_use_ssl": false,
        "frontend_url": "https://app.piarapp.com"
    }"#;

    let config: EmailConfig = serde_json::from_str(raw).expect("config parses");
    assert_eq!(config.smtp_password, MASKED_PASSWORD);
    assert_eq!(config.smtp_port, 587);
    assert!(config.smtp_use_tls);
}

#[test]
fn test_email_config_update_skips_absent_password() {
    let update = EmailConfigUpdate {
        smtp_server: "smtp.example.com".to_string(),
        smtp_port: 465,
        smtp_username: "mailer".to_string(),
        smtp_password: None,
        smtp_from_email: "noreply@example.com".to_string(),
        smtp_use_tls: false,
        smtp_use_ssl: true,
        frontend_url: None,
    };
    let raw = serde_json::to_value(&update).expect("serialize");
    assert!(raw.get("smtp_password").is_none());
    assert!(raw.get("frontend_url").is_none());
    assert_eq!(raw["smtp_use_ssl"], true);
}
