use std::env;

use chrono::Duration;

pub const DEFAULT_OTP_TTL_SECONDS: i64 = 300;
pub const DEFAULT_MASTER_CODE: &str = "123456";

#[derive(Debug, Clone, thiserror::Error)]
pub enum OtpPolicyError {
    #[error("Invalid {0} value")]
    InvalidValue(&'static str),

    #[error("OTP master code cannot be enabled in production")]
    MasterCodeInProduction,
}

/// Rules for issuing and checking phone verification codes.
///
/// The master code verifies any phone that resolves to a user without
/// consulting stored codes. It is off unless explicitly enabled.
#[derive(Debug, Clone, PartialEq)]
pub struct OtpPolicy {
    pub ttl: Duration,
    master_code: Option<String>,
}

impl Default for OtpPolicy {
    fn default() -> Self {
        Self {
            ttl: Duration::seconds(DEFAULT_OTP_TTL_SECONDS),
            master_code: None,
        }
    }
}

impl OtpPolicy {
    pub fn with_master_code(mut self, code: impl Into<String>) -> Self {
        self.master_code = Some(code.into());
        self
    }

    pub fn is_master_code(&self, code: &str) -> bool {
        self.master_code.as_deref() == Some(code)
    }

    pub fn master_code_enabled(&self) -> bool {
        self.master_code.is_some()
    }

    /// Load the policy from `OTP_TTL_SECONDS`, `OTP_MASTER_CODE_ENABLED`
    /// and `OTP_MASTER_CODE`.
    pub fn from_env() -> Result<Self, OtpPolicyError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`OtpPolicy::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, OtpPolicyError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ttl_seconds = match lookup("OTP_TTL_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|v| *v > 0)
                .ok_or(OtpPolicyError::InvalidValue("OTP_TTL_SECONDS"))?,
            None => DEFAULT_OTP_TTL_SECONDS,
        };

        let enabled = lookup("OTP_MASTER_CODE_ENABLED")
            .map(|v| {
                let v = v.trim();
                v.eq_ignore_ascii_case("true") || v == "1"
            })
            .unwrap_or(false);

        let policy = Self {
            ttl: Duration::seconds(ttl_seconds),
            master_code: None,
        };

        if !enabled {
            return Ok(policy);
        }

        let is_production = lookup("RUST_ENV")
            .map(|v| {
                let v = v.trim();
                v.eq_ignore_ascii_case("production") || v.eq_ignore_ascii_case("prod")
            })
            .unwrap_or(false);
        if is_production {
            return Err(OtpPolicyError::MasterCodeInProduction);
        }

        let code = lookup("OTP_MASTER_CODE").unwrap_or_else(|| DEFAULT_MASTER_CODE.to_string());
        if code.len() != 6 || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(OtpPolicyError::InvalidValue("OTP_MASTER_CODE"));
        }

        Ok(policy.with_master_code(code))
    }
}
