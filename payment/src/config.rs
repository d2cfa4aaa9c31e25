//! Payment panel configuration: what the panel displays.

use std::env;
use std::path::PathBuf;

use dioxus_logger::tracing;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::bank_details::BankDetails;
use crate::field::CopyField;

pub const DEFAULT_QR_IMAGE_URL: &str = "https://placehold.co/300x300/EEF2FF/4F46E5?text=QR+Code";
pub const DEFAULT_UPI_ID: &str = "turtle.ml@axl";
pub const DEFAULT_ACCOUNT_NAME: &str = "Mukund Lahoty";
pub const DEFAULT_ACCOUNT_NUMBER: &str = "50100233410920";
pub const DEFAULT_IFSC_CODE: &str = "HDFC0001098";
pub const DEFAULT_BANK_NAME: &str = "HDFC Bank";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid payment config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything the payment panel shows.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PaymentConfig {
    /// Image shown on the QR tab. When absent, a QR code is generated from
    /// [`PaymentConfig::upi_uri`].
    #[serde(default)]
    pub qr_image_url: Option<String>,
    pub upi_id: String,
    pub bank_details: BankDetails,
}

impl PaymentConfig {
    /// Loads the configuration.
    ///
    /// # Environment Variables
    /// - `PAYMENT_CONFIG`: path to a JSON file holding the whole config. When
    ///   set, the variables below are ignored.
    /// - `PAYMENT_QR_IMAGE_URL`: image for the QR tab. An empty value selects
    ///   the generated QR code.
    /// - `PAYMENT_UPI_ID`
    /// - `PAYMENT_ACCOUNT_NAME`, `PAYMENT_ACCOUNT_NUMBER`,
    ///   `PAYMENT_IFSC_CODE`, `PAYMENT_BANK_NAME`
    ///
    /// Unset variables fall back to the built-in defaults. In the browser no
    /// environment exists, so the defaults always apply there.
    pub fn load() -> Result<Self, ConfigError> {
        let config = match env::var_os("PAYMENT_CONFIG") {
            Some(path) => Self::from_file(PathBuf::from(path))?,
            None => Self::from_env(),
        };
        config.validate()?;
        tracing::info!(
            "payment config: upi id {}, bank {}",
            config.upi_id,
            config.bank_details.bank_name
        );
        Ok(config)
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from `lookup`, which maps a `PAYMENT_*` variable name
    /// to its value. Missing keys take the built-in defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let qr_image_url = lookup("PAYMENT_QR_IMAGE_URL")
            .unwrap_or_else(|| DEFAULT_QR_IMAGE_URL.to_string());

        Self {
            qr_image_url: Some(qr_image_url),
            upi_id: var_or("PAYMENT_UPI_ID", DEFAULT_UPI_ID),
            bank_details: BankDetails {
                account_name: var_or("PAYMENT_ACCOUNT_NAME", DEFAULT_ACCOUNT_NAME),
                account_number: var_or("PAYMENT_ACCOUNT_NUMBER", DEFAULT_ACCOUNT_NUMBER),
                ifsc_code: var_or("PAYMENT_IFSC_CODE", DEFAULT_IFSC_CODE),
                bank_name: var_or("PAYMENT_BANK_NAME", DEFAULT_BANK_NAME),
            },
        }
        .normalized()
    }

    pub fn from_file(path: PathBuf) -> Result<Self, ConfigError> {
        let json =
            std::fs::read_to_string(&path).map_err(|source| ConfigError::Read { path, source })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.normalized())
    }

    /// A blank image URL means "no image": the QR tab generates one instead.
    fn normalized(mut self) -> Self {
        self.qr_image_url = self.qr_image_url.filter(|url| !url.trim().is_empty());
        self
    }

    /// Every displayed field must be non-empty. Content is not checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upi_id.trim().is_empty() {
            return Err(ConfigError::EmptyField(CopyField::UpiId.label()));
        }
        for (field, value) in self.bank_details.rows() {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField(field.label()));
            }
        }
        Ok(())
    }

    /// The value copied for `field`.
    pub fn value(&self, field: CopyField) -> &str {
        match field {
            CopyField::UpiId => &self.upi_id,
            other => self.bank_details.value(other).unwrap_or_default(),
        }
    }

    /// A `upi://pay` link that UPI apps accept when scanned as a QR code.
    pub fn upi_uri(&self) -> String {
        format!(
            "upi://pay?pa={}&pn={}&cu=INR",
            urlencoding::encode(&self.upi_id),
            urlencoding::encode(&self.bank_details.account_name),
        )
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            qr_image_url: Some(DEFAULT_QR_IMAGE_URL.to_string()),
            upi_id: DEFAULT_UPI_ID.to_string(),
            bank_details: BankDetails {
                account_name: DEFAULT_ACCOUNT_NAME.to_string(),
                account_number: DEFAULT_ACCOUNT_NUMBER.to_string(),
                ifsc_code: DEFAULT_IFSC_CODE.to_string(),
                bank_name: DEFAULT_BANK_NAME.to_string(),
            },
        }
    }
}
