//! Committed bookings and their persisted form.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pricing::ticket::{Ticket, TicketCategory};
use crate::screening::screening::ScreeningId;
use crate::seat::seat::{SeatId, SeatState};
use crate::store::CinemaStore;

/// A customer's committed booking of seats for one screening.
///
/// Holds non-owning handles to the screening and its seats; the screening
/// keeps exclusive ownership of the seat objects themselves.
#[derive(Clone, Debug)]
pub struct Reservation {
    pub id: Uuid,
    pub customer_name: String,
    pub screening: ScreeningId,
    pub seats: Vec<SeatId>,
    pub tickets: Vec<Ticket>,
    /// Sum of ticket prices at creation time. Persisted on its own, since
    /// tickets are not.
    pub total_price: f64,
    pub created_at: NaiveDateTime,
}

impl Reservation {
    /// Builds the persisted form. The screening is stored as
    /// (movie title, hall name, start time) so it can be re-resolved after
    /// a cold start; individual tickets are not persisted.
    pub fn to_record(&self, store: &CinemaStore) -> Option<ReservationRecord> {
        let screening = store.screening(self.screening)?;
        Some(ReservationRecord {
            id: self.id,
            customer_name: self.customer_name.clone(),
            movie_title: screening.movie.title.clone(),
            hall_name: screening.hall.name.clone(),
            date_time: screening.date_time,
            seats: self.seats.clone(),
            total_price: self.total_price,
            timestamp: self.created_at,
        })
    }

    /// One-line summary for listings.
    pub fn describe(&self, store: &CinemaStore) -> String {
        let seats = self
            .seats
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        match store.screening(self.screening) {
            Some(screening) => format!(
                "{} | {} | seats {} | {:.2}",
                self.customer_name, screening, seats, self.total_price
            ),
            None => format!(
                "{} | seats {} | {:.2}",
                self.customer_name, seats, self.total_price
            ),
        }
    }
}

/// Wire format for one persisted reservation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReservationRecord {
    pub id: Uuid,
    pub customer_name: String,
    pub movie_title: String,
    pub hall_name: String,
    pub date_time: NaiveDateTime,
    pub seats: Vec<SeatId>,
    pub total_price: f64,
    pub timestamp: NaiveDateTime,
}

impl ReservationRecord {
    /// Re-attaches a persisted record to a live store.
    ///
    /// The screening is matched exactly on (movie title, hall name, start
    /// time); a miss skips the whole record with a warning. Seats that no
    /// longer exist in the hall are skipped individually; if none resolve
    /// the record is dropped. Tickets are rebuilt with the total split
    /// evenly across the seats, so the original per-seat category pricing
    /// is not recovered. Every resolved seat is forced to `Reserved` so the
    /// grid matches the ledger after a cold start, where all seats begin
    /// `Free`.
    pub fn restore(&self, store: &mut CinemaStore) -> Option<Reservation> {
        let Some(screening_id) =
            store.find_screening(&self.movie_title, &self.hall_name, self.date_time)
        else {
            log::warn!(
                "no screening matches reservation {} ({} / {} / {}); skipping record",
                self.id,
                self.movie_title,
                self.hall_name,
                self.date_time
            );
            return None;
        };

        let screening = store.screening_mut(screening_id)?;
        let mut seats = Vec::with_capacity(self.seats.len());
        for &seat_id in &self.seats {
            match screening.seat_mut(seat_id) {
                Some(seat) => {
                    seat.force_state(SeatState::Reserved);
                    seats.push(seat_id);
                }
                None => log::warn!(
                    "seat {} not found for reservation {}; skipping seat",
                    seat_id,
                    self.id
                ),
            }
        }
        if seats.is_empty() {
            log::warn!("no valid seats for reservation {}; skipping record", self.id);
            return None;
        }

        // Per-ticket prices were not persisted; split the total evenly.
        let price_per_seat = self.total_price / seats.len() as f64;
        let tickets = seats
            .iter()
            .map(|&seat| Ticket::base(TicketCategory::Regular, seat, price_per_seat))
            .collect();

        Some(Reservation {
            id: self.id,
            customer_name: self.customer_name.clone(),
            screening: screening_id,
            seats,
            tickets,
            total_price: self.total_price,
            created_at: self.timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use marquee_catalog::{CinemaHall, Movie};

    use crate::screening::screening::Screening;

    use super::*;

    fn record(seats: Vec<SeatId>) -> ReservationRecord {
        ReservationRecord {
            id: Uuid::new_v4(),
            customer_name: "Jan Kowalski".to_string(),
            movie_title: "Oppenheimer".to_string(),
            hall_name: "Sala 1".to_string(),
            date_time: NaiveDate::from_ymd_opt(2026, 6, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            seats,
            total_price: 40.0,
            timestamp: NaiveDate::from_ymd_opt(2026, 5, 30)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        }
    }

    fn store_with_screening() -> CinemaStore {
        let mut store = CinemaStore::new();
        store.add_screening(Screening::new(
            Movie::new("Oppenheimer", 180, 16),
            CinemaHall::new("Sala 1", 8, 10),
            NaiveDate::from_ymd_opt(2026, 6, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            20.0,
        ));
        store
    }

    #[test]
    fn test_restore_forces_seats_reserved() {
        let mut store = store_with_screening();
        // The grid starts cold: even a sold seat is forced back to Reserved.
        store
            .screening_mut(ScreeningId(0))
            .unwrap()
            .seat_mut(SeatId::new(1, 2))
            .unwrap()
            .sell();

        let record = record(vec![SeatId::new(1, 1), SeatId::new(1, 2)]);
        let reservation = record.restore(&mut store).unwrap();

        assert_eq!(reservation.id, record.id);
        assert_eq!(reservation.total_price, 40.0);
        assert_eq!(reservation.created_at, record.timestamp);

        let screening = store.screening(ScreeningId(0)).unwrap();
        for seat_id in &reservation.seats {
            assert_eq!(screening.seat(*seat_id).unwrap().state(), SeatState::Reserved);
        }
    }

    #[test]
    fn test_restore_splits_total_evenly() {
        let mut store = store_with_screening();
        let record = record(vec![SeatId::new(2, 1), SeatId::new(2, 2)]);

        let reservation = record.restore(&mut store).unwrap();
        assert_eq!(reservation.tickets.len(), 2);
        for ticket in &reservation.tickets {
            assert_eq!(ticket.price(), 20.0);
        }
    }

    #[test]
    fn test_restore_skips_unknown_screening() {
        let mut store = store_with_screening();
        let mut record = record(vec![SeatId::new(1, 1)]);
        record.hall_name = "Sala 2".to_string();

        assert!(record.restore(&mut store).is_none());
        assert!(store.reservations().is_empty());
    }

    #[test]
    fn test_restore_skips_missing_seats_but_keeps_record() {
        let mut store = store_with_screening();
        let record = record(vec![SeatId::new(1, 1), SeatId::new(99, 1)]);

        let reservation = record.restore(&mut store).unwrap();
        assert_eq!(reservation.seats, vec![SeatId::new(1, 1)]);
        // The even split happens over the seats that resolved.
        assert_eq!(reservation.tickets[0].price(), 40.0);
    }

    #[test]
    fn test_restore_drops_record_with_no_valid_seats() {
        let mut store = store_with_screening();
        let record = record(vec![SeatId::new(99, 1)]);
        assert!(record.restore(&mut store).is_none());
    }

    #[test]
    fn test_record_round_trips_through_store() {
        let mut store = store_with_screening();
        let record = record(vec![SeatId::new(4, 4)]);
        let reservation = record.restore(&mut store).unwrap();

        let rebuilt = reservation.to_record(&store).unwrap();
        assert_eq!(rebuilt.id, record.id);
        assert_eq!(rebuilt.customer_name, record.customer_name);
        assert_eq!(rebuilt.movie_title, record.movie_title);
        assert_eq!(rebuilt.hall_name, record.hall_name);
        assert_eq!(rebuilt.date_time, record.date_time);
        assert_eq!(rebuilt.seats, vec![SeatId::new(4, 4)]);
        assert_eq!(rebuilt.total_price, record.total_price);
    }
}
