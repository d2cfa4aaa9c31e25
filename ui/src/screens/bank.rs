//=============================================================================
// File: src/screens/bank.rs
//=============================================================================
use dioxus::prelude::*;
use payment::field::CopyField;

use crate::app_state::AppState;
use crate::components::copy_button::{CopyButton, CopyButtonStyle};
use crate::components::pico::Separator;

/// One "label ... value [Copy]" line of the bank details list.
#[component]
fn DetailRow(field: CopyField, value: String) -> Element {
    rsx! {
        div {
            class: "detail-row",
            span { class: "detail-label", "{field}" }
            div {
                class: "detail-value",
                strong { "{value}" }
                CopyButton {
                    value: value.clone(),
                    field,
                    variant: CopyButtonStyle::Compact,
                }
            }
        }
    }
}

#[component]
pub fn BankScreen() -> Element {
    let config = use_context::<AppState>();
    let rows: Vec<(CopyField, String)> = CopyField::BANK
        .into_iter()
        .map(|field| (field, config.value(field).to_string()))
        .collect();
    let last = rows.len().saturating_sub(1);

    rsx! {
        div {
            class: "tab-panel",
            div {
                class: "detail-box",
                h4 {
                    style: "text-align: center; margin-bottom: 1rem;",
                    "Bank Transfer Details"
                }
                for (i, (field, value)) in rows.into_iter().enumerate() {
                    DetailRow { key: "{field:?}", field, value }
                    if i < last {
                        Separator {}
                    }
                }
            }
            p {
                class: "hint note",
                "After making the bank transfer, please click the \"Payment Completed\" button below and share the transaction reference number if available."
            }
        }
    }
}
