//! Box-office facade: the single entry point the UI layer talks to.

use chrono::{Local, NaiveDate};
use thiserror::Error;
use uuid::Uuid;

use crate::pricing::options::ticket_options_for_hall;
use crate::pricing::ticket::{Ticket, TicketCategory};
use crate::reservation::ledger::ReservationLedger;
use crate::reservation::reservation::Reservation;
use crate::screening::screening::{Screening, ScreeningId};
use crate::seat::seat::SeatId;
use crate::store::CinemaStore;

/// Failures on the reservation path. An unavailable seat is routine
/// contention, not a crash: the offending seats come back to the caller.
#[derive(Debug, Error, PartialEq)]
pub enum ReservationError {
    #[error("customer name must not be empty")]
    EmptyCustomerName,
    #[error("no seats selected")]
    NoSeatsSelected,
    #[error("unknown screening {0}")]
    UnknownScreening(ScreeningId),
    #[error("seat {0} does not exist in this hall")]
    UnknownSeat(SeatId),
    #[error("seats no longer available: {}", format_seats(.0))]
    SeatsUnavailable(Vec<SeatId>),
    #[error("got {tickets} tickets for {seats} seats")]
    TicketCountMismatch { seats: usize, tickets: usize },
}

fn format_seats(seats: &[SeatId]) -> String {
    seats
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Outcome of a successful commit. `save_error` is set when the ledger
/// rewrite failed after the in-memory commit; memory and disk then disagree
/// until the next successful save, and the caller must warn or retry.
#[derive(Debug)]
pub struct ReservationReceipt {
    pub reservation: Reservation,
    pub save_error: Option<String>,
}

/// Facade over the store and the reservation ledger.
///
/// Owns both; the hosting process constructs one box office and routes
/// every query and booking through it.
pub struct BoxOffice {
    store: CinemaStore,
    ledger: ReservationLedger,
}

impl BoxOffice {
    pub fn new(store: CinemaStore, ledger: ReservationLedger) -> Self {
        Self { store, ledger }
    }

    pub fn store(&self) -> &CinemaStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CinemaStore {
        &mut self.store
    }

    /// Screenings scheduled on the given date.
    pub fn get_available_screenings(&self, date: NaiveDate) -> Vec<(ScreeningId, &Screening)> {
        self.store.get_screenings_for_date(date)
    }

    /// Seats still open for booking on the given screening.
    pub fn get_available_seats(
        &self,
        screening_id: ScreeningId,
    ) -> Result<Vec<SeatId>, ReservationError> {
        let screening = self
            .store
            .screening(screening_id)
            .ok_or(ReservationError::UnknownScreening(screening_id))?;
        Ok(screening.available_seats().iter().map(|s| s.id()).collect())
    }

    /// Ticket categories sold for this screening's hall.
    pub fn get_available_ticket_options(
        &self,
        screening_id: ScreeningId,
    ) -> Result<Vec<TicketCategory>, ReservationError> {
        let screening = self
            .store
            .screening(screening_id)
            .ok_or(ReservationError::UnknownScreening(screening_id))?;
        Ok(ticket_options_for_hall(&screening.hall.name))
    }

    /// Prices a seat selection without touching any seat state.
    pub fn calculate_price(
        &self,
        screening_id: ScreeningId,
        seats: &[SeatId],
        category: TicketCategory,
    ) -> Result<(f64, Vec<Ticket>), ReservationError> {
        let screening = self
            .store
            .screening(screening_id)
            .ok_or(ReservationError::UnknownScreening(screening_id))?;

        let mut tickets = Vec::with_capacity(seats.len());
        for &seat in seats {
            if screening.seat(seat).is_none() {
                return Err(ReservationError::UnknownSeat(seat));
            }
            tickets.push(category.create_ticket(screening, seat));
        }
        let total = tickets.iter().map(Ticket::price).sum();
        Ok((total, tickets))
    }

    /// Commits a reservation.
    ///
    /// All-or-nothing: every requested seat must currently be free, or the
    /// whole request is rejected before any seat changes state. On success
    /// the reservation is appended to the store and the ledger is rewritten;
    /// a failed write does not roll the commit back (see
    /// [`ReservationReceipt::save_error`]).
    pub fn make_reservation(
        &mut self,
        customer_name: &str,
        screening_id: ScreeningId,
        seats: &[SeatId],
        tickets: Vec<Ticket>,
    ) -> Result<ReservationReceipt, ReservationError> {
        if customer_name.trim().is_empty() {
            return Err(ReservationError::EmptyCustomerName);
        }
        if seats.is_empty() {
            return Err(ReservationError::NoSeatsSelected);
        }
        if tickets.len() != seats.len() {
            return Err(ReservationError::TicketCountMismatch {
                seats: seats.len(),
                tickets: tickets.len(),
            });
        }

        let screening = self
            .store
            .screening_mut(screening_id)
            .ok_or(ReservationError::UnknownScreening(screening_id))?;

        // Precondition pass: reject the whole request before mutating anything.
        let mut unavailable = Vec::new();
        for &seat_id in seats {
            let seat = screening
                .seat(seat_id)
                .ok_or(ReservationError::UnknownSeat(seat_id))?;
            if !seat.is_available() {
                unavailable.push(seat_id);
            }
        }
        if !unavailable.is_empty() {
            return Err(ReservationError::SeatsUnavailable(unavailable));
        }

        for &seat_id in seats {
            // Cannot fail: every seat was just checked free and nothing else
            // runs between the check and the transition.
            let reserved = screening
                .seat_mut(seat_id)
                .map(|seat| seat.reserve())
                .unwrap_or(false);
            debug_assert!(reserved, "seat {} changed state mid-commit", seat_id);
        }

        let total_price = tickets.iter().map(Ticket::price).sum();
        let reservation = Reservation {
            id: Uuid::new_v4(),
            customer_name: customer_name.to_string(),
            screening: screening_id,
            seats: seats.to_vec(),
            tickets,
            total_price,
            created_at: Local::now().naive_local(),
        };
        self.store.add_reservation(reservation.clone());

        let save_error = match self.ledger.save(&self.store) {
            Ok(()) => None,
            Err(err) => {
                log::error!("failed to persist reservations: {:#}", err);
                Some(format!("{:#}", err))
            }
        };

        Ok(ReservationReceipt {
            reservation,
            save_error,
        })
    }

    pub fn get_all_reservations(&self) -> &[Reservation] {
        self.store.reservations()
    }

    /// Replays the ledger file into the store (missing file = empty book).
    pub fn load_reservations(&mut self) -> anyhow::Result<usize> {
        self.ledger.load(&mut self.store)
    }

    /// Rewrites the ledger file from the store.
    pub fn save_reservations(&self) -> anyhow::Result<()> {
        self.ledger.save(&self.store)
    }
}
