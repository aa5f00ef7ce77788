//! Input validation helpers shared between DTO derives and handlers.

use validator::ValidateEmail;

/// Maximum length accepted for credential fields (email, password).
pub const CREDENTIAL_MAX_LEN: usize = 50;

/// Validate an email address the same way the DTO derives do.
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > CREDENTIAL_MAX_LEN {
        return Err("Email too long".to_string());
    }
    if !email.validate_email() {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate a credential field length.
pub fn validate_credential_len(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Value cannot be empty".to_string());
    }
    if value.len() > CREDENTIAL_MAX_LEN {
        return Err("Value too long".to_string());
    }
    Ok(())
}
