//! Seeds the store with the house catalog and a week of screenings.

use anyhow::{anyhow, Result};
use chrono::{Duration, Local, NaiveTime};
use marquee_catalog::{CinemaHall, HallLibrary, Movie};
use marquee_core::{CinemaStore, ScreeningBuilder};

/// Loads the sample programme: six movies, the three house halls, and three
/// screenings per day for the next seven days.
pub fn load_sample_data(store: &mut CinemaStore) -> Result<()> {
    let movies = [
        Movie::new("Oppenheimer", 180, 16),
        Movie::new("Everything Everywhere All at Once", 139, 16),
        Movie::new("CODA", 111, 12),
        Movie::new("Nomadland", 107, 15),
        Movie::new("Parasite", 132, 16),
        Movie::new("Anora", 115, 16),
    ];
    for movie in &movies {
        store.add_movie(movie.clone());
    }

    let library = HallLibrary::new();
    let find_hall = |name: &str| -> Result<CinemaHall> {
        library
            .get_hall(name)
            .cloned()
            .ok_or_else(|| anyhow!("built-in hall {} missing from library", name))
    };
    let sala1 = find_hall("Sala 1")?;
    let sala2 = find_hall("Sala 2")?;
    let sala_vip = find_hall("Sala VIP")?;
    for hall in [&sala1, &sala2, &sala_vip] {
        store.add_hall(hall.clone());
    }

    let morning = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
    let afternoon = NaiveTime::from_hms_opt(15, 30, 0).unwrap();
    let evening = NaiveTime::from_hms_opt(20, 0, 0).unwrap();

    let mut builder = ScreeningBuilder::new();
    let today = Local::now().date_naive();
    for day_offset in 0..7 {
        let date = today + Duration::days(day_offset);

        store.add_screening(
            builder
                .movie(movies[0].clone())
                .hall(sala1.clone())
                .date_time(date.and_time(morning))
                .base_price(20.0)
                .build()?,
        );
        store.add_screening(
            builder
                .movie(movies[1].clone())
                .hall(sala2.clone())
                .date_time(date.and_time(afternoon))
                .base_price(25.0)
                .build()?,
        );
        store.add_screening(
            builder
                .movie(movies[2].clone())
                .hall(sala_vip.clone())
                .date_time(date.and_time(evening))
                .base_price(30.0)
                .build()?,
        );
    }

    Ok(())
}
