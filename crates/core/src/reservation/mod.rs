pub mod ledger;
pub mod reservation;
