pub mod bank;
pub mod qr;
pub mod upi;
