use dioxus::prelude::*;
use payment::field::CopyField;

use crate::app_state::AppState;
use crate::components::copy_button::CopyButton;

#[component]
pub fn UpiScreen() -> Element {
    let config = use_context::<AppState>();
    let field = CopyField::UpiId;
    let upi_id = config.value(field).to_string();

    rsx! {
        div {
            class: "tab-panel centered",
            style: "padding-top: 2.5rem;",
            div {
                class: "detail-box",
                style: "max-width: 28rem; text-align: center;",
                p {
                    style: "font-size: 1.1rem; font-weight: 500; margin-bottom: 0.5rem;",
                    "{field}"
                }
                code {
                    style: "display: block; font-size: 1.25rem; font-weight: 600; padding: 0.75rem;",
                    "{upi_id}"
                }
            }
            CopyButton {
                value: upi_id.clone(),
                field,
            }
            p {
                class: "hint",
                "Open any UPI app and use the above ID to make your payment"
            }
        }
    }
}
