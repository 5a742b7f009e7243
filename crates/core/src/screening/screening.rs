//! A scheduled showing with its own seat grid.

use std::fmt;

use chrono::NaiveDateTime;
use marquee_catalog::{CinemaHall, Movie};
use serde::{Deserialize, Serialize};

use crate::seat::seat::{Seat, SeatId, SeatState};

/// Stable handle to a screening within one store. Screenings are never
/// removed, so the underlying index stays valid for the process lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreeningId(pub usize);

impl fmt::Display for ScreeningId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One showing of a movie in a hall at a fixed time.
///
/// The seat grid is materialized row-major at construction, one seat per
/// (row, number) pair in `[1..rows] x [1..seats_per_row]`, and never grows
/// or shrinks afterwards.
#[derive(Debug)]
pub struct Screening {
    pub movie: Movie,
    pub hall: CinemaHall,
    pub date_time: NaiveDateTime,
    pub base_price: f64,
    seats: Vec<Seat>,
}

impl Screening {
    pub fn new(movie: Movie, hall: CinemaHall, date_time: NaiveDateTime, base_price: f64) -> Self {
        let mut seats = Vec::with_capacity(hall.total_seats() as usize);
        for row in 1..=hall.rows {
            for number in 1..=hall.seats_per_row {
                seats.push(Seat::new(row, number));
            }
        }
        Self {
            movie,
            hall,
            date_time,
            base_price,
            seats,
        }
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn seat(&self, id: SeatId) -> Option<&Seat> {
        self.seat_index(id).map(|i| &self.seats[i])
    }

    pub fn seat_mut(&mut self, id: SeatId) -> Option<&mut Seat> {
        self.seat_index(id).map(move |i| &mut self.seats[i])
    }

    /// Seats currently open for booking.
    pub fn available_seats(&self) -> Vec<&Seat> {
        self.seats.iter().filter(|s| s.is_available()).collect()
    }

    /// Returns every seat to `Free`, bypassing the transition table.
    pub(crate) fn reset_seats(&mut self) {
        for seat in &mut self.seats {
            seat.force_state(SeatState::Free);
        }
    }

    // Row-major position of a 1-based (row, number) pair, if it is in range.
    fn seat_index(&self, id: SeatId) -> Option<usize> {
        if id.row < 1 || id.row > self.hall.rows || id.number < 1 || id.number > self.hall.seats_per_row
        {
            return None;
        }
        Some(((id.row - 1) * self.hall.seats_per_row + (id.number - 1)) as usize)
    }
}

impl fmt::Display for Screening {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in {} at {}",
            self.movie,
            self.hall.name,
            self.date_time.format("%d.%m.%Y %H:%M")
        )
    }
}
