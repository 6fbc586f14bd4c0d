// Helper functions for safe logging

/// Masks an email address before it reaches the logs, keeping just enough to
/// correlate entries during debugging.
pub fn safe_email_log(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let cut = local
                .char_indices()
                .nth(1)
                .map(|(i, _)| i)
                .unwrap_or(local.len());
            format!("{}***@{}", &local[..cut], domain)
        }
        _ => "***@***.***".to_string(),
    }
}

/// Masks a bearer or refresh token, showing only the first and last four
/// characters.
pub fn safe_token_log(token: &str) -> String {
    if token.len() > 8 {
        format!("{}...{}", &token[..4], &token[token.len() - 4..])
    } else {
        "***".to_string()
    }
}
