/// The three mutually exclusive views of the payment panel, in tab bar order.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::EnumIter)]
pub enum PaymentTab {
    #[default]
    Qr,
    Upi,
    Bank,
}

impl PaymentTab {
    /// Helper to get the display name for each tab.
    pub fn name(&self) -> &'static str {
        match self {
            PaymentTab::Qr => "QR Code",
            PaymentTab::Upi => "UPI ID",
            PaymentTab::Bank => "Bank Details",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn qr_is_the_default_and_first_tab() {
        assert_eq!(PaymentTab::default(), PaymentTab::Qr);
        assert_eq!(PaymentTab::iter().next(), Some(PaymentTab::Qr));
    }

    #[test]
    fn tab_bar_order() {
        let names: Vec<_> = PaymentTab::iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["QR Code", "UPI ID", "Bank Details"]);
    }
}
