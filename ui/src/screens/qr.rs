//=============================================================================
// File: src/screens/qr.rs
//=============================================================================
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::qr_code::{QrCode, QrImage};

const CAPTION: &str = "Scan this QR code with any UPI app to make your payment";

#[component]
pub fn QrScreen() -> Element {
    let config = use_context::<AppState>();

    rsx! {
        div {
            class: "tab-panel centered",
            match &config.qr_image_url {
                Some(url) => rsx! {
                    QrImage {
                        src: url.clone(),
                        caption: CAPTION.to_string(),
                    }
                },
                None => rsx! {
                    QrCode {
                        data: config.upi_uri(),
                        tooltip: config.upi_id.clone(),
                        caption: CAPTION.to_string(),
                    }
                },
            }
        }
    }
}
