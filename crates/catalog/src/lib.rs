use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A film in the cinema's programme. Immutable after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub duration_minutes: u32,
    /// Minimum age required to watch, in years.
    pub age_rating: u32,
}

impl Movie {
    pub fn new(title: impl Into<String>, duration_minutes: u32, age_rating: u32) -> Self {
        Self {
            title: title.into(),
            duration_minutes,
            age_rating,
        }
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} min, {}+)",
            self.title, self.duration_minutes, self.age_rating
        )
    }
}

/// A physical auditorium. The name is the unique lookup key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CinemaHall {
    pub name: String,
    pub rows: u32,
    pub seats_per_row: u32,
}

impl CinemaHall {
    pub fn new(name: impl Into<String>, rows: u32, seats_per_row: u32) -> Self {
        Self {
            name: name.into(),
            rows,
            seats_per_row,
        }
    }

    pub fn total_seats(&self) -> u32 {
        self.rows * self.seats_per_row
    }
}

impl fmt::Display for CinemaHall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}x{})", self.name, self.rows, self.seats_per_row)
    }
}

/// Built-in hall profiles, keyed by hall name.
pub struct HallLibrary {
    pub halls: HashMap<String, CinemaHall>,
}

impl HallLibrary {
    pub fn new() -> Self {
        let mut halls = HashMap::new();

        // Define the house's halls. Note in the future we'll load these from disk.
        halls.insert("Sala 1".to_string(), CinemaHall::new("Sala 1", 8, 10));
        halls.insert("Sala 2".to_string(), CinemaHall::new("Sala 2", 10, 12));
        halls.insert("Sala VIP".to_string(), CinemaHall::new("Sala VIP", 6, 8));

        Self { halls }
    }

    pub fn get_hall(&self, name: &str) -> Option<&CinemaHall> {
        self.halls.get(name)
    }
}

impl Default for HallLibrary {
    fn default() -> Self {
        Self::new()
    }
}
