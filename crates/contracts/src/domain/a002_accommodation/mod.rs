pub mod aggregate;

pub use aggregate::{Accommodation, AccommodationId, AccommodationType, AvailabilityPatch};
