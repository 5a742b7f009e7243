//! In-memory catalog of movies, halls, screenings and reservations.

use chrono::{NaiveDate, NaiveDateTime};
use marquee_catalog::{CinemaHall, Movie};

use crate::reservation::reservation::Reservation;
use crate::screening::screening::{Screening, ScreeningId};

/// The process-wide data store. Constructed explicitly by the host and
/// passed by reference to collaborators; there is exactly one logical store
/// per process, but nothing hidden or global about it.
#[derive(Default)]
pub struct CinemaStore {
    movies: Vec<Movie>,
    halls: Vec<CinemaHall>,
    screenings: Vec<Screening>,
    reservations: Vec<Reservation>,
}

impl CinemaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_movie(&mut self, movie: Movie) {
        self.movies.push(movie);
    }

    pub fn add_hall(&mut self, hall: CinemaHall) {
        self.halls.push(hall);
    }

    /// Adds a screening and returns its stable handle.
    pub fn add_screening(&mut self, screening: Screening) -> ScreeningId {
        self.screenings.push(screening);
        ScreeningId(self.screenings.len() - 1)
    }

    pub fn add_reservation(&mut self, reservation: Reservation) {
        self.reservations.push(reservation);
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn halls(&self) -> &[CinemaHall] {
        &self.halls
    }

    pub fn screenings(&self) -> &[Screening] {
        &self.screenings
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn hall(&self, name: &str) -> Option<&CinemaHall> {
        self.halls.iter().find(|h| h.name == name)
    }

    pub fn screening(&self, id: ScreeningId) -> Option<&Screening> {
        self.screenings.get(id.0)
    }

    pub fn screening_mut(&mut self, id: ScreeningId) -> Option<&mut Screening> {
        self.screenings.get_mut(id.0)
    }

    /// Screenings starting on the given date, with their handles.
    pub fn get_screenings_for_date(&self, date: NaiveDate) -> Vec<(ScreeningId, &Screening)> {
        self.screenings
            .iter()
            .enumerate()
            .filter(|(_, s)| s.date_time.date() == date)
            .map(|(i, s)| (ScreeningId(i), s))
            .collect()
    }

    /// Exact-match lookup used when re-attaching persisted reservations.
    pub fn find_screening(
        &self,
        movie_title: &str,
        hall_name: &str,
        date_time: NaiveDateTime,
    ) -> Option<ScreeningId> {
        self.screenings
            .iter()
            .position(|s| {
                s.movie.title == movie_title
                    && s.hall.name == hall_name
                    && s.date_time == date_time
            })
            .map(ScreeningId)
    }

    pub(crate) fn set_reservations(&mut self, reservations: Vec<Reservation>) {
        self.reservations = reservations;
    }

    /// Returns every seat of every screening to `Free`. Run before
    /// replaying the ledger onto a freshly bootstrapped catalog.
    pub fn reset_all_seats(&mut self) {
        for screening in &mut self.screenings {
            screening.reset_seats();
        }
    }
}
