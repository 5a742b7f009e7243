//! Step-by-step screening construction with fail-fast validation.

use chrono::NaiveDateTime;
use marquee_catalog::{CinemaHall, Movie};
use thiserror::Error;

use super::screening::Screening;

/// Validation failures when assembling a screening. Missing fields are
/// never silently defaulted.
#[derive(Debug, Error, PartialEq)]
pub enum ScreeningError {
    #[error("screening is missing required field `{0}`")]
    MissingField(&'static str),
    #[error("screening base price must be positive, got {0}")]
    InvalidBasePrice(f64),
}

/// Assembles a `Screening` field by field. `build` validates the collected
/// fields, materializes the seat grid, and resets the builder for reuse.
#[derive(Default)]
pub struct ScreeningBuilder {
    movie: Option<Movie>,
    hall: Option<CinemaHall>,
    date_time: Option<NaiveDateTime>,
    base_price: Option<f64>,
}

impl ScreeningBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn movie(&mut self, movie: Movie) -> &mut Self {
        self.movie = Some(movie);
        self
    }

    pub fn hall(&mut self, hall: CinemaHall) -> &mut Self {
        self.hall = Some(hall);
        self
    }

    pub fn date_time(&mut self, date_time: NaiveDateTime) -> &mut Self {
        self.date_time = Some(date_time);
        self
    }

    pub fn base_price(&mut self, base_price: f64) -> &mut Self {
        self.base_price = Some(base_price);
        self
    }

    pub fn build(&mut self) -> Result<Screening, ScreeningError> {
        let movie = self
            .movie
            .clone()
            .ok_or(ScreeningError::MissingField("movie"))?;
        let hall = self
            .hall
            .clone()
            .ok_or(ScreeningError::MissingField("hall"))?;
        let date_time = self
            .date_time
            .ok_or(ScreeningError::MissingField("date_time"))?;
        let base_price = self
            .base_price
            .ok_or(ScreeningError::MissingField("base_price"))?;
        if base_price.is_nan() || base_price <= 0.0 {
            return Err(ScreeningError::InvalidBasePrice(base_price));
        }

        let screening = Screening::new(movie, hall, date_time, base_price);
        self.reset();
        Ok(screening)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn monday_morning() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 6, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_build_with_all_fields() {
        let mut builder = ScreeningBuilder::new();
        let screening = builder
            .movie(Movie::new("CODA", 111, 12))
            .hall(CinemaHall::new("Sala VIP", 6, 8))
            .date_time(monday_morning())
            .base_price(30.0)
            .build()
            .unwrap();

        assert_eq!(screening.movie.title, "CODA");
        assert_eq!(screening.seats().len(), 48);
        assert_eq!(screening.base_price, 30.0);
    }

    #[test]
    fn test_missing_fields_fail_fast() {
        let mut builder = ScreeningBuilder::new();
        assert_eq!(
            builder.build().unwrap_err(),
            ScreeningError::MissingField("movie")
        );

        let err = builder
            .movie(Movie::new("CODA", 111, 12))
            .hall(CinemaHall::new("Sala 1", 8, 10))
            .build()
            .unwrap_err();
        assert_eq!(err, ScreeningError::MissingField("date_time"));
    }

    #[test]
    fn test_non_positive_base_price_is_rejected() {
        let mut builder = ScreeningBuilder::new();
        let err = builder
            .movie(Movie::new("CODA", 111, 12))
            .hall(CinemaHall::new("Sala 1", 8, 10))
            .date_time(monday_morning())
            .base_price(0.0)
            .build()
            .unwrap_err();
        assert_eq!(err, ScreeningError::InvalidBasePrice(0.0));
    }

    #[test]
    fn test_builder_resets_after_build() {
        let mut builder = ScreeningBuilder::new();
        builder
            .movie(Movie::new("CODA", 111, 12))
            .hall(CinemaHall::new("Sala 1", 8, 10))
            .date_time(monday_morning())
            .base_price(20.0)
            .build()
            .unwrap();

        // A fresh build must collect everything again.
        assert_eq!(
            builder.build().unwrap_err(),
            ScreeningError::MissingField("movie")
        );
    }
}
