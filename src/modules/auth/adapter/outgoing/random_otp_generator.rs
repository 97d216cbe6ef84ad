use rand::Rng;

use crate::auth::application::ports::outgoing::otp_code_generator::OtpCodeGenerator;

const OTP_SPACE: u32 = 1_000_000;

/// Six-digit codes drawn from the thread-local CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomOtpGenerator;

impl OtpCodeGenerator for RandomOtpGenerator {
    fn generate(&self) -> String {
        let value = rand::thread_rng().gen_range(0..OTP_SPACE);
        format!("{:06}", value)
    }
}
