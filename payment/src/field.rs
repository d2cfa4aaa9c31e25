//! Defines the fields a user can copy from the payment panel.

/// A copyable field. Each variant carries a stable, human-readable label that
/// scopes the copy acknowledgment to one UI element.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum CopyField {
    UpiId,
    AccountName,
    AccountNumber,
    IfscCode,
    BankName,
}

impl CopyField {
    /// The four bank-detail fields, in display order.
    pub const BANK: [CopyField; 4] = [
        CopyField::AccountName,
        CopyField::AccountNumber,
        CopyField::IfscCode,
        CopyField::BankName,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::UpiId => "UPI ID",
            Self::AccountName => "Account Name",
            Self::AccountNumber => "Account Number",
            Self::IfscCode => "IFSC Code",
            Self::BankName => "Bank Name",
        }
    }
}

impl std::fmt::Display for CopyField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn labels_are_unique() {
        let fields: Vec<_> = CopyField::BANK.into_iter().chain([CopyField::UpiId]).collect();
        let labels: HashSet<_> = fields.iter().map(CopyField::label).collect();
        assert_eq!(labels.len(), fields.len());
    }

    #[test]
    fn bank_fields_exclude_upi_id() {
        assert!(!CopyField::BANK.contains(&CopyField::UpiId));
        assert_eq!(CopyField::IfscCode.to_string(), "IFSC Code");
    }
}
