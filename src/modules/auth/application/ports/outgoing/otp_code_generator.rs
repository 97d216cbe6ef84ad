/// Source of fresh one-time codes. Every call must draw new randomness.
pub trait OtpCodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}
