//! Marquee core: seat lifecycle, ticket pricing, and the reservation
//! transaction engine behind the box-office UI.

pub use box_office::{BoxOffice, ReservationError, ReservationReceipt};
pub use pricing::options::ticket_options_for_hall;
pub use pricing::strategy::PricingStrategy;
pub use pricing::ticket::{Ticket, TicketCategory, TicketExtra};
pub use reservation::ledger::ReservationLedger;
pub use reservation::reservation::{Reservation, ReservationRecord};
pub use screening::builder::{ScreeningBuilder, ScreeningError};
pub use screening::screening::{Screening, ScreeningId};
pub use seat::observer::SeatObserver;
pub use seat::seat::{Seat, SeatId, SeatState};
pub use store::CinemaStore;

mod box_office;
mod pricing;
mod reservation;
mod screening;
mod seat;
mod store;
