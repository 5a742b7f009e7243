//! Observer hook for seat state changes.

use super::seat::Seat;

/// Receives a notification after every successful seat state transition.
///
/// Observers are attached to individual seats and held weakly, so the UI
/// layer can subscribe to a seat without the seat knowing anything about
/// rendering. The mutated seat is passed back so the observer can re-read
/// its new state.
pub trait SeatObserver {
    fn update(&self, seat: &Seat);
}
