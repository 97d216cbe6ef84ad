pub mod job_seeker_profiles;
pub mod otp_verifications;
pub mod users;
