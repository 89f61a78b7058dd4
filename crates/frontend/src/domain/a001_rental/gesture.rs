use contracts::domain::a001_rental::RentalId;
use contracts::domain::a002_accommodation::AccommodationId;
use contracts::domain::common::AggregateId;

/// `<option>` value for an available accommodation
pub const AVAILABLE: &str = "available";
/// `<option>` value for an unavailable accommodation
pub const UNAVAILABLE: &str = "unavailable";

/// Operator asked to change an accommodation's availability from a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateGesture {
    pub rental_id: RentalId,
    pub accommodation_id: AccommodationId,
    pub availability: bool,
}

impl UpdateGesture {
    pub fn new(rental_id: RentalId, accommodation_id: AccommodationId, availability: bool) -> Self {
        Self {
            rental_id,
            accommodation_id,
            availability,
        }
    }

    /// Build a gesture from the raw values a row carries.
    ///
    /// Identifiers are coerced to integers; that is the only check.
    pub fn from_row(rental_id: &str, accommodation_id: &str, select_value: &str) -> Result<Self, String> {
        Ok(Self::new(
            RentalId::from_string(rental_id)?,
            AccommodationId::from_string(accommodation_id)?,
            parse_availability(select_value),
        ))
    }
}

/// `"available"` is true, any other value false
pub fn parse_availability(select_value: &str) -> bool {
    select_value == AVAILABLE
}

pub fn availability_value(available: bool) -> &'static str {
    if available {
        AVAILABLE
    } else {
        UNAVAILABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_row() {
        let gesture = UpdateGesture::from_row("1", "10", "available").unwrap();
        assert_eq!(gesture, UpdateGesture::new(RentalId(1), AccommodationId(10), true));
    }

    #[test]
    fn test_from_row_unavailable_and_unknown_values() {
        assert!(!UpdateGesture::from_row("1", "10", UNAVAILABLE).unwrap().availability);
        assert!(!UpdateGesture::from_row("1", "10", "Yes").unwrap().availability);
    }

    #[test]
    fn test_from_row_rejects_non_integer_ids() {
        assert!(UpdateGesture::from_row("x", "10", AVAILABLE).is_err());
        assert!(UpdateGesture::from_row("1", "", AVAILABLE).is_err());
    }

    #[test]
    fn test_availability_value() {
        assert!(parse_availability(availability_value(true)));
        assert!(!parse_availability(availability_value(false)));
    }
}
