//! Phone verification - mocked OTP exchange
//!
//! Real OTP delivery is out of scope for this build; the mock generates
//! a code, hands it back to the caller for display, and verifies against
//! it. The trait seam keeps a real SMS gateway substitutable.

use rand::Rng;

/// One-time-code exchange against a verification backend
pub trait OtpService {
    /// Send a verification code to a phone number, returning the code
    /// that was dispatched
    fn send(&mut self, phone: &str) -> String;

    /// Check a user-entered code against the last dispatched one
    fn verify(&self, code: &str) -> bool;
}

/// Development stand-in that generates and accepts its own codes
#[derive(Debug, Default)]
pub struct MockOtpService {
    last_code: Option<String>,
}

impl MockOtpService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OtpService for MockOtpService {
    fn send(&mut self, _phone: &str) -> String {
        let code = format!("{:06}", rand::rng().random_range(0..1_000_000u32));
        self.last_code = Some(code.clone());
        code
    }

    fn verify(&self, code: &str) -> bool {
        self.last_code.as_deref() == Some(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_six_digits() {
        let mut otp = MockOtpService::new();
        let code = otp.send("01012345678");
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_verify_accepts_sent_code_only() {
        let mut otp = MockOtpService::new();
        let code = otp.send("01012345678");
        assert!(otp.verify(&code));
        assert!(!otp.verify("999999x"));
    }

    #[test]
    fn test_verify_without_send_rejects() {
        let otp = MockOtpService::new();
        assert!(!otp.verify("123456"));
    }
}
