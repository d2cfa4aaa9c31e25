//! Platform-independent core of the payment panel: configuration, the copy
//! acknowledgment state machine, and the collaborator traits the UI
//! implements per platform.

pub mod acknowledgement;
pub mod bank_details;
pub mod config;
pub mod copy;
pub mod field;
pub mod tab;
pub mod toast;
