//! Shared building blocks for the payment panel: Pico.css wrappers, the QR
//! renderer, the copy button and the toast host.
pub mod copy_button;
pub mod pico;
pub mod qr_code;
pub mod toast;
