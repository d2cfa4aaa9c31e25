//! Toast notifications: the payload handed to a [`crate::copy::Notifier`] and
//! a small queue that limits how many are visible at once.

use std::collections::VecDeque;
use std::time::Duration;

use crate::field::CopyField;

/// Maximum number of toasts visible at once.
pub const MAX_VISIBLE: usize = 3;

/// A transient message shown to the user.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub duration: Duration,
}

impl Toast {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            duration,
        }
    }

    /// The confirmation raised after `field` lands on the clipboard.
    pub fn copied(field: CopyField, duration: Duration) -> Self {
        Self::new(
            "Copied to clipboard",
            format!("{} has been copied.", field.label()),
            duration,
        )
    }
}

/// Identifier of a queued toast, unique within one [`ToastQueue`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ToastId(u64);

/// A toast that just became visible. Its display time starts now.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Shown {
    pub id: ToastId,
    pub duration: Duration,
}

/// Visible toasts (newest first) plus an overflow queue.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ToastQueue {
    visible: VecDeque<(ToastId, Toast)>,
    queued: VecDeque<(ToastId, Toast)>,
    next_id: u64,
}

impl ToastQueue {
    /// Adds a toast. It is shown immediately if fewer than [`MAX_VISIBLE`]
    /// are showing, otherwise it waits for a slot and `None` is returned.
    pub fn push(&mut self, toast: Toast) -> Option<Shown> {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        if self.visible.len() < MAX_VISIBLE {
            let shown = Shown {
                id,
                duration: toast.duration,
            };
            self.visible.push_front((id, toast));
            Some(shown)
        } else {
            self.queued.push_back((id, toast));
            None
        }
    }

    /// Removes a toast by id. If that frees a visible slot, the oldest queued
    /// toast is promoted and returned.
    pub fn dismiss(&mut self, id: ToastId) -> Option<Shown> {
        if let Some(pos) = self.visible.iter().position(|(i, _)| *i == id) {
            self.visible.remove(pos);
            let (next, toast) = self.queued.pop_front()?;
            let shown = Shown {
                id: next,
                duration: toast.duration,
            };
            self.visible.push_front((next, toast));
            return Some(shown);
        }
        if let Some(pos) = self.queued.iter().position(|(i, _)| *i == id) {
            self.queued.remove(pos);
        }
        None
    }

    pub fn visible(&self) -> impl Iterator<Item = &(ToastId, Toast)> {
        self.visible.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(n: u64) -> Toast {
        Toast::new(format!("t{n}"), "", Duration::from_millis(1000 + n))
    }

    fn titles(q: &ToastQueue) -> Vec<&str> {
        q.visible().map(|(_, t)| t.title.as_str()).collect()
    }

    #[test]
    fn copied_toast_mentions_label() {
        let t = Toast::copied(CopyField::UpiId, Duration::from_millis(2000));
        assert_eq!(t.title, "Copied to clipboard");
        assert_eq!(t.description, "UPI ID has been copied.");
        assert_eq!(t.duration, Duration::from_millis(2000));
    }

    #[test]
    fn overflow_waits_without_being_shown() {
        let mut q = ToastQueue::default();
        let shown: Vec<_> = (0..5).map(|n| q.push(toast(n))).collect();

        assert!(shown[..MAX_VISIBLE].iter().all(Option::is_some));
        assert_eq!(shown[3], None);
        assert_eq!(shown[4], None);
        assert_eq!(titles(&q), vec!["t2", "t1", "t0"]);
    }

    #[test]
    fn promotion_reports_the_newly_shown_toast() {
        let mut q = ToastQueue::default();
        let first = q.push(toast(0)).unwrap();
        for n in 1..4 {
            q.push(toast(n));
        }

        let promoted = q.dismiss(first.id).unwrap();
        assert_eq!(promoted.duration, Duration::from_millis(1003));
        assert_eq!(titles(&q), vec!["t3", "t2", "t1"]);

        // nothing left to promote
        assert_eq!(q.dismiss(promoted.id), None);
        assert_eq!(titles(&q), vec!["t2", "t1"]);
    }

    #[test]
    fn dismissing_a_queued_toast_never_shows_it() {
        let mut q = ToastQueue::default();
        for n in 0..3 {
            q.push(toast(n));
        }
        q.push(toast(3));
        q.push(toast(4));
        // ids are handed out in push order
        assert_eq!(q.dismiss(ToastId(3)), None);
        assert_eq!(q.visible().count(), MAX_VISIBLE);

        let promoted = q.dismiss(ToastId(0)).unwrap();
        assert_eq!(promoted.id, ToastId(4));
        assert_eq!(titles(&q), vec!["t4", "t2", "t1"]);
    }
}
