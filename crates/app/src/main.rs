use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use marquee_core::{
    BoxOffice, CinemaStore, ReservationLedger, Screening, ScreeningId, Seat, SeatId, SeatObserver,
    SeatState, Ticket, TicketCategory, TicketExtra,
};

mod bootstrap;

/// Cinema box office: browse screenings, price tickets and book seats.
#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(about = "Marquee cinema box office")]
struct Args {
    /// Reservation ledger file
    #[arg(long, default_value = "reservations.json")]
    reservations_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List screenings for a date (defaults to today)
    Screenings {
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    /// Show the seat map for a screening
    Seats {
        #[arg(long)]
        screening: usize,
    },
    /// Show the ticket categories sold for a screening
    Options {
        #[arg(long)]
        screening: usize,
    },
    /// Price a seat selection without booking it
    Quote {
        #[arg(long)]
        screening: usize,
        /// Seats as ROW:NUMBER, comma separated (e.g. 1:1,1:2)
        #[arg(long, value_parser = parse_seat, value_delimiter = ',')]
        seats: Vec<SeatId>,
        #[arg(long, value_parser = parse_category)]
        category: TicketCategory,
        /// Add the 3D surcharge to every ticket
        #[arg(long)]
        three_d: bool,
        /// Add a snack combo to every ticket
        #[arg(long)]
        snack_combo: bool,
    },
    /// Book seats for a customer
    Book {
        #[arg(long)]
        screening: usize,
        #[arg(long)]
        customer: String,
        /// Seats as ROW:NUMBER, comma separated (e.g. 1:1,1:2)
        #[arg(long, value_parser = parse_seat, value_delimiter = ',')]
        seats: Vec<SeatId>,
        #[arg(long, value_parser = parse_category)]
        category: TicketCategory,
        /// Add the 3D surcharge to every ticket
        #[arg(long)]
        three_d: bool,
        /// Add a snack combo to every ticket
        #[arg(long)]
        snack_combo: bool,
    },
    /// List every reservation on file
    Reservations,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("invalid date: {}", e))
}

fn parse_seat(s: &str) -> Result<SeatId, String> {
    let (row, number) = s
        .split_once(':')
        .ok_or_else(|| format!("expected ROW:NUMBER, got '{}'", s))?;
    let row = row
        .parse()
        .map_err(|_| format!("invalid row in '{}'", s))?;
    let number = number
        .parse()
        .map_err(|_| format!("invalid seat number in '{}'", s))?;
    Ok(SeatId::new(row, number))
}

fn parse_category(s: &str) -> Result<TicketCategory, String> {
    match s.to_lowercase().as_str() {
        "regular" => Ok(TicketCategory::Regular),
        "discounted" => Ok(TicketCategory::Discounted),
        "vip" => Ok(TicketCategory::Vip),
        _ => Err(format!(
            "unknown category '{}' (expected regular, discounted or vip)",
            s
        )),
    }
}

/// Logs every seat state change it observes. Attached to the seats being
/// booked so the transition is visible in the console output.
struct SeatChangeLogger;

impl SeatObserver for SeatChangeLogger {
    fn update(&self, seat: &Seat) {
        log::info!("seat {} is now {}", seat, seat.state());
    }
}

fn apply_extras(tickets: Vec<Ticket>, three_d: bool, snack_combo: bool) -> Vec<Ticket> {
    tickets
        .into_iter()
        .map(|ticket| {
            let ticket = if three_d {
                ticket.with_extra(TicketExtra::ThreeD)
            } else {
                ticket
            };
            if snack_combo {
                ticket.with_extra(TicketExtra::SnackCombo)
            } else {
                ticket
            }
        })
        .collect()
}

fn screening_or_err(office: &BoxOffice, index: usize) -> Result<&Screening> {
    office
        .store()
        .screening(ScreeningId(index))
        .ok_or_else(|| anyhow!("no screening with id {}", index))
}

fn print_seat_map(screening: &Screening) {
    for row in 1..=screening.hall.rows {
        let mut line = format!("row {:>2}: ", row);
        for number in 1..=screening.hall.seats_per_row {
            let marker = match screening.seat(SeatId::new(row, number)).map(|s| s.state()) {
                Some(SeatState::Free) => '.',
                Some(SeatState::Reserved) => 'r',
                Some(SeatState::Sold) => 'x',
                None => '?',
            };
            line.push(marker);
        }
        println!("{}", line);
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Startup order matters: bootstrap the catalog, cold-start the seat
    // grids, then replay the ledger so persisted bookings re-reserve seats.
    let mut store = CinemaStore::new();
    bootstrap::load_sample_data(&mut store)?;
    store.reset_all_seats();

    let ledger = ReservationLedger::new(&args.reservations_file);
    let mut office = BoxOffice::new(store, ledger);
    office.load_reservations()?;

    match args.command {
        Command::Screenings { date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let screenings = office.get_available_screenings(date);
            if screenings.is_empty() {
                println!("No screenings on {}", date);
            }
            for (id, screening) in screenings {
                println!(
                    "[{}] {} ({} of {} seats free, base price {:.2})",
                    id,
                    screening,
                    screening.available_seats().len(),
                    screening.seats().len(),
                    screening.base_price
                );
            }
        }
        Command::Seats { screening } => {
            let screening = screening_or_err(&office, screening)?;
            println!("{}", screening);
            print_seat_map(screening);
            println!(
                "{} of {} seats free",
                screening.available_seats().len(),
                screening.seats().len()
            );
        }
        Command::Options { screening } => {
            let options = office.get_available_ticket_options(ScreeningId(screening))?;
            if options.is_empty() {
                println!("No ticket categories on sale for this hall");
            }
            let screening = screening_or_err(&office, screening)?;
            for category in options {
                println!(
                    "{}: {:.2}",
                    category,
                    category.price_for(screening.base_price)
                );
            }
        }
        Command::Quote {
            screening,
            seats,
            category,
            three_d,
            snack_combo,
        } => {
            let id = ScreeningId(screening);
            let (_, tickets) = office.calculate_price(id, &seats, category)?;
            let tickets = apply_extras(tickets, three_d, snack_combo);
            let screening = screening_or_err(&office, screening)?;
            for ticket in &tickets {
                println!("{}", ticket.describe(screening));
            }
            let total: f64 = tickets.iter().map(Ticket::price).sum();
            println!("Total: {:.2}", total);
        }
        Command::Book {
            screening,
            customer,
            seats,
            category,
            three_d,
            snack_combo,
        } => {
            let id = ScreeningId(screening);
            let (_, tickets) = office.calculate_price(id, &seats, category)?;
            let tickets = apply_extras(tickets, three_d, snack_combo);

            // Watch the booked seats change state.
            let logger: Arc<dyn SeatObserver> = Arc::new(SeatChangeLogger);
            if let Some(screening) = office.store_mut().screening_mut(id) {
                for &seat_id in &seats {
                    if let Some(seat) = screening.seat_mut(seat_id) {
                        seat.attach(&logger);
                    }
                }
            }

            let receipt = office.make_reservation(&customer, id, &seats, tickets)?;
            let screening = screening_or_err(&office, screening)?;
            println!("Reservation {} confirmed", receipt.reservation.id);
            for ticket in &receipt.reservation.tickets {
                println!("  {}", ticket.describe(screening));
            }
            println!("Total: {:.2}", receipt.reservation.total_price);
            if let Some(err) = receipt.save_error {
                eprintln!(
                    "Warning: booking is held in memory but could not be saved: {}",
                    err
                );
            }
        }
        Command::Reservations => {
            let reservations = office.get_all_reservations();
            if reservations.is_empty() {
                println!("No reservations on file");
            }
            for reservation in reservations {
                println!("{}", reservation.describe(office.store()));
            }
        }
    }

    Ok(())
}
