pub mod observer;
pub mod seat;
