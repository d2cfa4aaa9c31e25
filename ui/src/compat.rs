// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

use payment::copy::Timer;
use std::time::Duration;

/// [`Timer`] backed by the platform `sleep` below.
#[derive(Clone, Copy, Default)]
pub struct CompatTimer;

impl Timer for CompatTimer {
    async fn sleep(&self, duration: Duration) {
        sleep(duration).await;
    }
}

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use payment::copy::{Clipboard, ClipboardError};
    use std::time::Duration;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{self, Window};

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    pub async fn clipboard_set(text: String) -> Result<(), ClipboardError> {
        let clipboard = web_sys::window()
            .map(|win: Window| win.navigator().clipboard())
            .ok_or(ClipboardError::Unavailable)?;
        let promise = clipboard.write_text(&text);
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError::Write(format!("{:?}", e)))
    }

    /// The browser's async clipboard (`navigator.clipboard`).
    #[derive(Clone, Copy)]
    pub struct PlatformClipboard;

    impl Clipboard for PlatformClipboard {
        async fn write_text(&self, text: String) -> Result<(), ClipboardError> {
            clipboard_set(text).await
        }
    }

    pub fn use_platform_clipboard() -> PlatformClipboard {
        PlatformClipboard
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use dioxus_clipboard::prelude::*;
    use payment::copy::{Clipboard, ClipboardError};
    use std::time::Duration;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// The native clipboard, via `dioxus-clipboard`.
    #[derive(Clone)]
    pub struct PlatformClipboard(UseClipboard);

    impl Clipboard for PlatformClipboard {
        async fn write_text(&self, text: String) -> Result<(), ClipboardError> {
            let mut clipboard = self.0.clone();
            clipboard
                .set(text)
                .map_err(|e| ClipboardError::Write(format!("{:?}", e)))
        }
    }

    /// Hook: must be called from a component body, like any `use_` function.
    pub fn use_platform_clipboard() -> PlatformClipboard {
        PlatformClipboard(use_clipboard())
    }
}
