pub mod otp;
pub mod profile;
