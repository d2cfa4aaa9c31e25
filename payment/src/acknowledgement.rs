//! The "just copied" acknowledgment state.
//!
//! `Acknowledgement` remembers which field was copied most recently. Every
//! successful copy hands out an [`AckTicket`]; the timer that later clears the
//! acknowledgment must present that ticket, and the clear only happens if the
//! ticket is still the current one. A superseded copy's timer is therefore a
//! no-op, and so is any timer that outlives the component it was scheduled for.

use std::cell::RefCell;
use std::rc::Rc;

use crate::field::CopyField;

/// Token for one pending clear.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AckTicket {
    field: CopyField,
    seq: u64,
    generation: u64,
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Acknowledgement {
    current: Option<AckTicket>,
    next_seq: u64,
    generation: u64,
}

impl Acknowledgement {
    /// The field currently acknowledged, if any.
    pub fn current(&self) -> Option<CopyField> {
        self.current.map(|t| t.field)
    }

    pub fn is_acknowledged(&self, field: CopyField) -> bool {
        self.current() == Some(field)
    }

    /// Marks `field` as copied, superseding any earlier acknowledgment.
    pub fn acknowledge(&mut self, field: CopyField) -> AckTicket {
        let ticket = AckTicket {
            field,
            seq: self.next_seq,
            generation: self.generation,
        };
        self.next_seq += 1;
        self.current = Some(ticket);
        ticket
    }

    /// Clears the acknowledgment if `ticket` is still the current one.
    ///
    /// Returns `true` if the state changed.
    pub fn expire(&mut self, ticket: AckTicket) -> bool {
        if ticket.generation != self.generation || self.current != Some(ticket) {
            return false;
        }
        self.current = None;
        true
    }

    /// Drops the acknowledgment and makes every outstanding ticket stale.
    /// Called when the owning component unmounts.
    pub fn invalidate(&mut self) {
        self.current = None;
        self.generation += 1;
    }
}

/// Mutable access to an [`Acknowledgement`] that lives somewhere else, e.g. in
/// a reactive signal owned by a UI component.
pub trait AckStore {
    fn update<R>(&mut self, f: impl FnOnce(&mut Acknowledgement) -> R) -> R;
}

impl AckStore for Rc<RefCell<Acknowledgement>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut Acknowledgement) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}
