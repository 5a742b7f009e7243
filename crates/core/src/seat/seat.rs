//! Per-seat state machine.

use std::fmt;
use std::sync::{Arc, Weak};

use serde::{Deserialize, Serialize};

use super::observer::SeatObserver;

/// Identity of a seat within one screening: 1-based row and seat number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatId {
    pub row: u32,
    pub number: u32,
}

impl SeatId {
    pub fn new(row: u32, number: u32) -> Self {
        Self { row, number }
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}M{}", self.row, self.number)
    }
}

/// Lifecycle state of a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatState {
    Free,
    Reserved,
    Sold,
}

impl SeatState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Reserved => "reserved",
            Self::Sold => "sold",
        }
    }
}

impl fmt::Display for SeatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A seat in one screening's grid.
///
/// Owned exclusively by the screening that created it. State changes go
/// through `reserve`/`cancel`/`sell`, which report success as a plain bool
/// and notify attached observers on success only. Failed transitions are
/// routine contention, not errors.
pub struct Seat {
    id: SeatId,
    state: SeatState,
    observers: Vec<Weak<dyn SeatObserver>>,
}

impl Seat {
    pub fn new(row: u32, number: u32) -> Self {
        Self {
            id: SeatId::new(row, number),
            state: SeatState::Free,
            observers: Vec::new(),
        }
    }

    pub fn id(&self) -> SeatId {
        self.id
    }

    pub fn row(&self) -> u32 {
        self.id.row
    }

    pub fn number(&self) -> u32 {
        self.id.number
    }

    pub fn state(&self) -> SeatState {
        self.state
    }

    /// True iff the seat can still be booked.
    pub fn is_available(&self) -> bool {
        self.state == SeatState::Free
    }

    /// Free -> Reserved. Fails in every other state.
    pub fn reserve(&mut self) -> bool {
        match self.state {
            SeatState::Free => {
                self.set_state(SeatState::Reserved);
                true
            }
            SeatState::Reserved | SeatState::Sold => false,
        }
    }

    /// Reserved -> Free. Fails in every other state.
    pub fn cancel(&mut self) -> bool {
        match self.state {
            SeatState::Reserved => {
                self.set_state(SeatState::Free);
                true
            }
            SeatState::Free | SeatState::Sold => false,
        }
    }

    /// Free or Reserved -> Sold. Fails once sold.
    pub fn sell(&mut self) -> bool {
        match self.state {
            SeatState::Free | SeatState::Reserved => {
                self.set_state(SeatState::Sold);
                true
            }
            SeatState::Sold => false,
        }
    }

    /// Forces the seat into the given state regardless of the transition
    /// table. Only the ledger replay and the cold-start seat reset use
    /// this; observers are notified like any other state change.
    pub(crate) fn force_state(&mut self, state: SeatState) {
        self.set_state(state);
    }

    /// Registers an observer. Attaching the same observer twice is a no-op.
    pub fn attach(&mut self, observer: &Arc<dyn SeatObserver>) {
        let observer = Arc::downgrade(observer);
        if self.observers.iter().any(|existing| existing.ptr_eq(&observer)) {
            return;
        }
        self.observers.push(observer);
    }

    /// Removes an observer. Detaching one that was never attached is a no-op.
    pub fn detach(&mut self, observer: &Arc<dyn SeatObserver>) {
        let observer = Arc::downgrade(observer);
        self.observers.retain(|existing| !existing.ptr_eq(&observer));
    }

    fn set_state(&mut self, state: SeatState) {
        self.state = state;
        self.notify();
    }

    /// Calls `update` on every live observer, dropping dead references.
    fn notify(&mut self) {
        let observers = std::mem::take(&mut self.observers);
        let mut live = Vec::with_capacity(observers.len());
        for weak in observers {
            if let Some(observer) = weak.upgrade() {
                observer.update(&*self);
                live.push(weak);
            }
        }
        self.observers = live;
    }
}

impl fmt::Debug for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seat")
            .field("id", &self.id)
            .field("state", &self.state)
            .finish()
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
