//=============================================================================
// File: src/components/copy_button.rs
//=============================================================================
use dioxus::prelude::*;
use payment::field::CopyField;

use crate::components::pico::{Button, ButtonType};
use crate::hooks::use_copy_to_clipboard::use_copy_to_clipboard;

/// How the button looks while its field is acknowledged.
#[derive(Clone, Copy, PartialEq, Default)]
pub enum CopyButtonStyle {
    /// Full-size outline button: "Copy <label>" / "✓ Copied".
    #[default]
    Labeled,
    /// Inline button for a detail row: "Copy" / "✓".
    Compact,
}

/// Copies `value` and shows an acknowledgment scoped to `field`.
#[component]
pub fn CopyButton(
    value: String,
    field: CopyField,
    #[props(default)] variant: CopyButtonStyle,
) -> Element {
    let copier = use_copy_to_clipboard();
    let copied = copier.is_copied(field);

    rsx! {
        match variant {
            CopyButtonStyle::Labeled => rsx! {
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| copier.copy(value.clone(), field),
                    if copied {
                        span { class: "copied-check", "✓" }
                        " Copied"
                    } else {
                        "Copy {field}"
                    }
                }
            },
            CopyButtonStyle::Compact => rsx! {
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    small: true,
                    on_click: move |_| copier.copy(value.clone(), field),
                    if copied {
                        span { class: "copied-check", title: "Copied", "✓" }
                    } else {
                        "Copy"
                    }
                }
            },
        }
    }
}
