pub mod aggregate;

pub use aggregate::{date_part, Rental, RentalId, User};
