//! sea-orm entities for the otp-auth database.

pub mod otps;
