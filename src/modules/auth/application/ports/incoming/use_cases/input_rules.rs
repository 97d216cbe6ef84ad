use std::sync::LazyLock;

use regex::Regex;

use super::ValidationError;

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{4,15}$").expect("phone pattern compiles"));

pub const OTP_CODE_LENGTH: usize = 6;

pub(crate) fn phone_number(raw: &str) -> Result<String, ValidationError> {
    let phone = raw.trim();
    if !PHONE_PATTERN.is_match(phone) {
        return Err(ValidationError::InvalidPhoneNumber);
    }
    Ok(phone.to_string())
}

/// Empty or whitespace-only phone input means "not supplied".
pub(crate) fn optional_phone_number(
    raw: Option<String>,
) -> Result<Option<String>, ValidationError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(phone) => phone_number(phone).map(Some),
    }
}

pub(crate) fn otp_code(raw: &str) -> Result<String, ValidationError> {
    let code = raw.trim();
    if code.len() != OTP_CODE_LENGTH || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidOtpCode);
    }
    Ok(code.to_string())
}

pub(crate) fn optional_text(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

pub(crate) fn text_list(raw: Vec<String>) -> Vec<String> {
    raw.into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
