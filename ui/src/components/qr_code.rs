//=============================================================================
// File: src/components/qr_code.rs
//=============================================================================
use dioxus::prelude::*;
use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};

#[derive(Props, Clone, PartialEq)]
pub struct QrCodeProps {
    pub data: String,
    #[props(optional)]
    pub tooltip: Option<String>,
    #[props(optional)]
    pub caption: Option<String>,
}

/// Renders `data` as an SVG QR code.
#[allow(non_snake_case)]
pub fn QrCode(props: QrCodeProps) -> Element {
    // payment links are short; medium correction still fits a small version
    match QrCode::with_error_correction_level(props.data.as_bytes(), EcLevel::M) {
        Ok(code) => {
            let image = code.render::<svg::Color>().min_dimensions(256, 256).build();
            let tooltip_text = props.tooltip.as_deref().unwrap_or(&props.data);

            rsx! {
                figure {
                    style: "margin: 0;",
                    div {
                        class: "qr-frame",
                        title: "{tooltip_text}",
                        dangerous_inner_html: "{image}"
                    }
                    if let Some(caption_text) = &props.caption {
                        figcaption {
                            class: "qr-caption",
                            "{caption_text}"
                        }
                    }
                }
            }
        }
        Err(e) => rsx! {
            p {
                style: "color: red; font-size: 14px; border: 1px solid red; padding: 10px; border-radius: 5px;",
                "Error generating QR code: {e}"
            }
        },
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct QrImageProps {
    pub src: String,
    #[props(optional)]
    pub caption: Option<String>,
}

/// A pre-rendered QR code image, framed the same way as [`QrCode`].
#[allow(non_snake_case)]
pub fn QrImage(props: QrImageProps) -> Element {
    rsx! {
        figure {
            style: "margin: 0;",
            div {
                class: "qr-frame",
                img {
                    src: "{props.src}",
                    alt: "Payment QR Code",
                    width: "256",
                    height: "256",
                    style: "object-fit: cover;",
                }
            }
            if let Some(caption_text) = &props.caption {
                figcaption {
                    class: "qr-caption",
                    "{caption_text}"
                }
            }
        }
    }
}
