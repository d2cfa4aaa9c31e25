//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

/// A horizontal rule between rows.
#[component]
pub fn Separator() -> Element {
    rsx! { hr { style: "margin: 0;" } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    /// Compact padding, for buttons that sit inline with text.
    #[props(default = false)]
    small: bool,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let mut class_str = match (&props.button_type, props.outline) {
        (ButtonType::Primary, false) => String::new(),
        _ => "secondary".to_string(),
    };
    if props.outline {
        class_str.push_str(" outline");
    }
    let style = if props.small {
        "padding: 0.25rem 0.6rem; font-size: 0.85rem; margin: 0;"
    } else {
        ""
    };
    rsx! {
        button {
            class: "{class_str}",
            style: "{style}",
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
