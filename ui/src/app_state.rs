use payment::config::PaymentConfig;
use std::ops::Deref;
use std::sync::Arc;

/// The immutable configuration, shared with every screen through context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState(Arc<PaymentConfig>);

impl Deref for AppState {
    type Target = PaymentConfig;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(config: PaymentConfig) -> Self {
        Self(Arc::new(config))
    }
}
