pub mod entities;
pub mod otp_policy;
