//=============================================================================
// File: src/hooks/use_copy_to_clipboard.rs
//=============================================================================
use dioxus::prelude::*;
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use payment::acknowledgement::{AckStore, Acknowledgement};
use payment::copy::CopyController;
use payment::field::CopyField;

use crate::compat::{self, CompatTimer};
use crate::hooks::use_toasts::use_toasts;

/// Lets the core controller write into a component-owned signal.
#[derive(Clone, Copy)]
struct SignalStore(Signal<Acknowledgement>);

impl AckStore for SignalStore {
    fn update<R>(&mut self, f: impl FnOnce(&mut Acknowledgement) -> R) -> R {
        self.0.with_mut(f)
    }
}

struct CopyRequest {
    value: String,
    field: CopyField,
}

/// Handle to the copy-and-acknowledge machinery, shared through context.
#[derive(Clone, Copy)]
pub struct CopyHandle {
    pub(crate) ack: Signal<Acknowledgement>,
    requests: Coroutine<CopyRequest>,
}

impl CopyHandle {
    /// Starts copying `value`; returns immediately.
    pub fn copy(&self, value: impl Into<String>, field: CopyField) {
        self.requests.send(CopyRequest {
            value: value.into(),
            field,
        });
    }

    /// Reads (and subscribes to) whether `field` is currently acknowledged.
    pub fn is_copied(&self, field: CopyField) -> bool {
        self.ack.read().is_acknowledged(field)
    }
}

/// Owns the acknowledgment state for the calling component and provides a
/// [`CopyHandle`] to its children.
///
/// Copies run inside a coroutine owned by the caller, not by the button that
/// was clicked, so switching tabs does not cancel a pending clear. When the
/// caller unmounts, the coroutine is dropped and the state invalidated.
pub fn use_copy_provider() -> CopyHandle {
    let ack = use_signal(Acknowledgement::default);
    let clipboard = compat::use_platform_clipboard();
    let notifier = use_toasts();

    let requests = use_coroutine(move |mut rx: UnboundedReceiver<CopyRequest>| {
        let clipboard = clipboard.clone();
        async move {
            let controller = CopyController::new(clipboard, notifier, CompatTimer);
            let mut in_flight = FuturesUnordered::new();
            loop {
                futures::select! {
                    request = rx.next() => match request {
                        Some(CopyRequest { value, field }) => {
                            in_flight.push(controller.request_copy(SignalStore(ack), value, field));
                        }
                        None => break,
                    },
                    _outcome = in_flight.select_next_some() => {}
                }
            }
        }
    });

    use_drop(move || {
        let mut ack = ack;
        ack.with_mut(Acknowledgement::invalidate);
    });

    use_context_provider(|| CopyHandle { ack, requests })
}

pub fn use_copy_to_clipboard() -> CopyHandle {
    use_context::<CopyHandle>()
}
