//! Bank transfer details shown on the "Bank Details" tab.

use crate::field::CopyField;
use serde::Deserialize;
use serde::Serialize;

/// Fixed-shape bank account record. All four fields are expected to be
/// non-empty; see [`crate::config::PaymentConfig::validate`].
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BankDetails {
    pub account_name: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub bank_name: String,
}

impl BankDetails {
    /// Returns the value displayed for `field`, or `None` for fields that are
    /// not part of the bank details.
    pub fn value(&self, field: CopyField) -> Option<&str> {
        match field {
            CopyField::AccountName => Some(&self.account_name),
            CopyField::AccountNumber => Some(&self.account_number),
            CopyField::IfscCode => Some(&self.ifsc_code),
            CopyField::BankName => Some(&self.bank_name),
            CopyField::UpiId => None,
        }
    }

    /// Yields `(field, value)` pairs in display order.
    pub fn rows(&self) -> impl Iterator<Item = (CopyField, &str)> {
        CopyField::BANK
            .into_iter()
            .filter_map(move |field| self.value(field).map(|v| (field, v)))
    }
}
