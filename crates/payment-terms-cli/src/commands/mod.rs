pub mod quote;
pub mod reservation;
