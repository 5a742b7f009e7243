//! JSON file persistence for the reservation book.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{from_reader, to_writer_pretty};

use super::reservation::ReservationRecord;
use crate::store::CinemaStore;

/// Saves and restores the store's reservations as a single JSON file.
///
/// Every save rewrites the whole file, so write cost grows with the total
/// number of reservations. Fine at box-office scale; a real ceiling for
/// anything bigger.
pub struct ReservationLedger {
    path: PathBuf,
}

impl ReservationLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrites the ledger with every reservation currently in the store.
    pub fn save(&self, store: &CinemaStore) -> Result<()> {
        let records: Vec<ReservationRecord> = store
            .reservations()
            .iter()
            .filter_map(|r| r.to_record(store))
            .collect();

        let file = File::create(&self.path)
            .with_context(|| format!("failed to create {}", self.path.display()))?;
        to_writer_pretty(file, &records)
            .with_context(|| format!("failed to write {}", self.path.display()))?;

        log::info!(
            "saved {} reservations to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Replays the ledger into the store, replacing its reservation list.
    ///
    /// A missing file means zero reservations, not an error. A file that
    /// cannot be read or parsed loads nothing and reports the failure.
    /// Records that no longer match the catalog are skipped with a warning.
    /// Returns the number of reservations restored.
    pub fn load(&self, store: &mut CinemaStore) -> Result<usize> {
        if !self.path.exists() {
            log::info!(
                "{} does not exist; starting with no reservations",
                self.path.display()
            );
            return Ok(0);
        }

        let file = File::open(&self.path)
            .with_context(|| format!("failed to open {}", self.path.display()))?;
        let records: Vec<ReservationRecord> = from_reader(file)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;

        let mut restored = Vec::new();
        for record in &records {
            if let Some(reservation) = record.restore(store) {
                restored.push(reservation);
            }
        }

        let count = restored.len();
        store.set_reservations(restored);
        log::info!(
            "loaded {} of {} reservations from {}",
            count,
            records.len(),
            self.path.display()
        );
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use marquee_catalog::{CinemaHall, Movie};
    use tempfile::TempDir;
    use uuid::Uuid;

    use crate::reservation::reservation::Reservation;
    use crate::screening::screening::{Screening, ScreeningId};
    use crate::seat::seat::SeatId;

    use super::*;

    fn store_with_screening() -> CinemaStore {
        let mut store = CinemaStore::new();
        store.add_screening(Screening::new(
            Movie::new("Nomadland", 107, 15),
            CinemaHall::new("Sala 2", 10, 12),
            NaiveDate::from_ymd_opt(2026, 6, 5)
                .unwrap()
                .and_hms_opt(15, 30, 0)
                .unwrap(),
            25.0,
        ));
        store
    }

    #[test]
    fn test_missing_file_means_empty_book() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = ReservationLedger::new(temp_dir.path().join("reservations.json"));

        let mut store = store_with_screening();
        assert_eq!(ledger.load(&mut store).unwrap(), 0);
        assert!(store.reservations().is_empty());
    }

    #[test]
    fn test_malformed_file_loads_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("reservations.json");
        std::fs::write(&path, "{ not json").unwrap();

        let ledger = ReservationLedger::new(&path);
        let mut store = store_with_screening();
        assert!(ledger.load(&mut store).is_err());
        assert!(store.reservations().is_empty());
    }

    #[test]
    fn test_save_writes_record_fields() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("reservations.json");
        let ledger = ReservationLedger::new(&path);

        let mut store = store_with_screening();
        store.add_reservation(Reservation {
            id: Uuid::new_v4(),
            customer_name: "Jan Kowalski".to_string(),
            screening: ScreeningId(0),
            seats: vec![SeatId::new(1, 1)],
            tickets: Vec::new(),
            total_price: 25.0,
            created_at: NaiveDate::from_ymd_opt(2026, 6, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        });

        ledger.save(&store).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let record = &raw.as_array().unwrap()[0];
        assert_eq!(record["customer_name"], "Jan Kowalski");
        assert_eq!(record["movie_title"], "Nomadland");
        assert_eq!(record["hall_name"], "Sala 2");
        assert_eq!(record["date_time"], "2026-06-05T15:30:00");
        assert_eq!(record["seats"][0]["row"], 1);
        assert_eq!(record["seats"][0]["number"], 1);
        assert_eq!(record["total_price"], 25.0);
    }
}
