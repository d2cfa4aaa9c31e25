use dioxus::prelude::*;
use payment::copy::Notifier;
use payment::toast::{Shown, Toast, ToastId, ToastQueue};

use crate::compat;

/// [`Notifier`] that queues toasts in a signal. Each toast's timer starts when
/// it becomes visible, not when it is queued.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    queue: Signal<ToastQueue>,
}

impl ToastNotifier {
    pub fn queue(&self) -> Signal<ToastQueue> {
        self.queue
    }

    /// Dismisses `id` early, starting the timer of whichever toast takes its slot.
    pub fn dismiss(&self, id: ToastId) {
        let mut queue = self.queue;
        let promoted = queue.write().dismiss(id);
        if let Some(shown) = promoted {
            schedule_dismiss(queue, shown);
        }
    }
}

fn schedule_dismiss(mut queue: Signal<ToastQueue>, shown: Shown) {
    spawn(async move {
        compat::sleep(shown.duration).await;
        let promoted = queue.write().dismiss(shown.id);
        if let Some(next) = promoted {
            schedule_dismiss(queue, next);
        }
    });
}

impl Notifier for ToastNotifier {
    fn notify(&self, toast: Toast) {
        let mut queue = self.queue;
        let shown = queue.write().push(toast);
        if let Some(shown) = shown {
            schedule_dismiss(queue, shown);
        }
    }
}

/// Creates the toast queue and provides it to child components.
pub fn use_toast_provider() -> ToastNotifier {
    let queue = use_signal(ToastQueue::default);
    use_context_provider(|| ToastNotifier { queue })
}

pub fn use_toasts() -> ToastNotifier {
    use_context::<ToastNotifier>()
}
