//! Copy-and-acknowledge: write a value to the clipboard, acknowledge the field
//! it came from, notify the user, and clear the acknowledgment after
//! [`ACK_DURATION`].
//!
//! The platform pieces (clipboard, notifications, timers) are traits so the
//! same controller drives the browser build, the desktop build and the tests.
//! Everything runs on the UI thread, so the trait futures carry no `Send` bound.

#![allow(async_fn_in_trait)]

use std::time::Duration;

use dioxus_logger::tracing;
use thiserror::Error;

use crate::acknowledgement::AckStore;
use crate::field::CopyField;
use crate::toast::Toast;

/// How long a field stays acknowledged, measured from write completion.
pub const ACK_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable")]
    Unavailable,
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// The system clipboard.
pub trait Clipboard {
    async fn write_text(&self, text: String) -> Result<(), ClipboardError>;
}

/// Fire-and-forget user notifications.
pub trait Notifier {
    fn notify(&self, toast: Toast);
}

pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

/// What became of a single copy request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The write succeeded. `cleared` tells whether this request's own timer
    /// cleared the acknowledgment, or found it superseded.
    Acknowledged { cleared: bool },
    /// The write failed; nothing was acknowledged and nobody was notified.
    Failed(ClipboardError),
}

#[derive(Clone)]
pub struct CopyController<C, N, T> {
    clipboard: C,
    notifier: N,
    timer: T,
}

impl<C: Clipboard, N: Notifier, T: Timer> CopyController<C, N, T> {
    pub fn new(clipboard: C, notifier: N, timer: T) -> Self {
        Self {
            clipboard,
            notifier,
            timer,
        }
    }

    /// Copies `value` and runs the acknowledgment for `field` to completion.
    ///
    /// The returned future lives for the write plus [`ACK_DURATION`]; callers
    /// spawn it rather than await it. Dropping it before the timer fires
    /// leaves the acknowledgment set, so owners must call
    /// [`Acknowledgement::invalidate`](crate::acknowledgement::Acknowledgement::invalidate)
    /// when they go away.
    pub async fn request_copy<S: AckStore>(
        &self,
        mut store: S,
        value: String,
        field: CopyField,
    ) -> CopyOutcome {
        if let Err(e) = self.clipboard.write_text(value).await {
            tracing::warn!("copying {} failed: {}", field, e);
            return CopyOutcome::Failed(e);
        }

        let ticket = store.update(|ack| ack.acknowledge(field));
        tracing::debug!("copied {} to clipboard", field);
        self.notifier.notify(Toast::copied(field, ACK_DURATION));

        self.timer.sleep(ACK_DURATION).await;
        let cleared = store.update(|ack| ack.expire(ticket));
        CopyOutcome::Acknowledged { cleared }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acknowledgement::Acknowledgement;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tokio::time::Instant;

    #[derive(Clone, Default)]
    struct FakeClipboard {
        written: Rc<RefCell<Vec<String>>>,
        fail: bool,
    }

    impl Clipboard for FakeClipboard {
        async fn write_text(&self, text: String) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Write("permission denied".to_string()));
            }
            self.written.borrow_mut().push(text);
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier(Rc<RefCell<Vec<Toast>>>);

    impl Notifier for RecordingNotifier {
        fn notify(&self, toast: Toast) {
            self.0.borrow_mut().push(toast);
        }
    }

    struct TokioTimer;

    impl Timer for TokioTimer {
        async fn sleep(&self, duration: Duration) {
            tokio::time::sleep(duration).await;
        }
    }

    type Store = Rc<RefCell<Acknowledgement>>;

    type TestController = CopyController<FakeClipboard, RecordingNotifier, TokioTimer>;

    fn controller(fail: bool) -> (TestController, FakeClipboard, RecordingNotifier) {
        let clipboard = FakeClipboard {
            fail,
            ..Default::default()
        };
        let notifier = RecordingNotifier::default();
        let c = CopyController::new(clipboard.clone(), notifier.clone(), TokioTimer);
        (c, clipboard, notifier)
    }

    fn current(store: &Store) -> Option<CopyField> {
        store.borrow().current()
    }

    #[tokio::test(start_paused = true)]
    async fn upi_id_is_acknowledged_then_cleared() {
        let (c, clipboard, notifier) = controller(false);
        let store = Store::default();
        let start = Instant::now();

        let copy = c.request_copy(store.clone(), "turtle.ml@axl".to_string(), CopyField::UpiId);
        let check = async {
            tokio::time::sleep(Duration::from_millis(1999)).await;
            assert_eq!(current(&store), Some(CopyField::UpiId));
        };
        let (outcome, ()) = tokio::join!(copy, check);

        assert_eq!(outcome, CopyOutcome::Acknowledged { cleared: true });
        assert!(start.elapsed() >= ACK_DURATION);
        assert_eq!(current(&store), None);
        assert_eq!(*clipboard.written.borrow(), vec!["turtle.ml@axl".to_string()]);

        let toasts = notifier.0.borrow();
        assert_eq!(toasts.len(), 1);
        assert!(toasts[0].description.contains("UPI ID"));
        assert_eq!(toasts[0].duration, ACK_DURATION);
    }

    #[tokio::test(start_paused = true)]
    async fn every_field_acknowledges_only_itself() {
        let (c, _, _) = controller(false);
        for field in CopyField::BANK.into_iter().chain([CopyField::UpiId]) {
            let store = Store::default();
            let copy = c.request_copy(store.clone(), "value".to_string(), field);
            let check = async {
                tokio::time::sleep(Duration::from_millis(10)).await;
                assert_eq!(current(&store), Some(field));
            };
            tokio::join!(copy, check);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn later_copy_survives_earlier_timer() {
        let (c, _, notifier) = controller(false);
        let store = Store::default();

        let account_number = "50100233410920".to_string();
        let first = c.request_copy(store.clone(), account_number, CopyField::AccountNumber);
        let second = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            assert_eq!(current(&store), Some(CopyField::AccountNumber));
            c.request_copy(store.clone(), "HDFC Bank".to_string(), CopyField::BankName)
                .await
        };
        let check = async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            assert_eq!(current(&store), Some(CopyField::BankName));
            // the account number timer has fired by now
            tokio::time::sleep(Duration::from_millis(1985)).await;
            assert_eq!(current(&store), Some(CopyField::BankName));
        };
        let (a, b, ()) = tokio::join!(first, second, check);

        assert_eq!(a, CopyOutcome::Acknowledged { cleared: false });
        assert_eq!(b, CopyOutcome::Acknowledged { cleared: true });
        assert_eq!(current(&store), None);
        assert_eq!(notifier.0.borrow().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_write_is_silent() {
        let (c, _, notifier) = controller(true);
        let store = Store::default();

        let outcome = c
            .request_copy(store.clone(), "turtle.ml@axl".to_string(), CopyField::UpiId)
            .await;

        assert!(matches!(outcome, CopyOutcome::Failed(ClipboardError::Write(_))));
        assert_eq!(current(&store), None);
        assert!(notifier.0.borrow().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn failed_write_keeps_previous_acknowledgment() {
        let store = Store::default();
        let ticket = store.borrow_mut().acknowledge(CopyField::IfscCode);
        let (c, _, _) = controller(true);

        c.request_copy(store.clone(), "x".to_string(), CopyField::BankName)
            .await;
        assert_eq!(current(&store), Some(CopyField::IfscCode));
        assert!(store.borrow_mut().expire(ticket));
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_discards_pending_clear() {
        let (c, _, _) = controller(false);
        let store = Store::default();

        let name = "Mukund Lahoty".to_string();
        let copy = c.request_copy(store.clone(), name, CopyField::AccountName);
        let teardown = async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            store.borrow_mut().invalidate();
            store.borrow_mut().acknowledge(CopyField::AccountName);
        };
        let (outcome, ()) = tokio::join!(copy, teardown);

        assert_eq!(outcome, CopyOutcome::Acknowledged { cleared: false });
        assert_eq!(current(&store), Some(CopyField::AccountName));
    }
}
