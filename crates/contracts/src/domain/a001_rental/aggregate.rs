use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a002_accommodation::Accommodation;
use crate::domain::common::aggregate_id::integer_id;

// ============================================================================
// ID Type
// ============================================================================

integer_id!(
    /// Идентификатор бронирования
    RentalId
);

// ============================================================================
// Aggregate
// ============================================================================

/// Клиент, на которого оформлено бронирование
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub firstname: String,
    pub lastname: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

/// Бронирование: клиент + размещение на период
///
/// `date_start` / `date_end` хранятся как ISO-8601 строки в том виде, в каком
/// их прислал бэкенд. Сравнивается и показывается только часть с датой.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rental {
    pub id: RentalId,
    pub date_start: String,
    pub date_end: String,
    #[serde(default)]
    pub user: Option<User>,
    pub accommodation: Accommodation,
}

impl Rental {
    /// День заезда, `YYYY-MM-DD`
    pub fn start_day(&self) -> &str {
        date_part(&self.date_start)
    }

    /// День выезда, `YYYY-MM-DD`
    pub fn end_day(&self) -> &str {
        date_part(&self.date_end)
    }

    pub fn starts_on(&self, day: NaiveDate) -> bool {
        self.start_day() == iso_day(day)
    }

    pub fn ends_on(&self, day: NaiveDate) -> bool {
        self.end_day() == iso_day(day)
    }

    /// "Prénom Nom", пустая строка если клиента нет
    pub fn guest_name(&self) -> String {
        self.user.as_ref().map(User::full_name).unwrap_or_default()
    }
}

/// Часть ISO даты-времени до `T`.
/// Часовой пояс игнорируется, без конвертации.
pub fn date_part(value: &str) -> &str {
    value.split('T').next().unwrap_or(value)
}

fn iso_day(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_accommodation::AccommodationId;

    const RENTAL_JSON: &str = r#"{
        "@id": "/api/rentals/1",
        "@type": "Rental",
        "id": 1,
        "date_start": "2024-07-01T14:00:00+02:00",
        "date_end": "2024-07-05T10:00:00+02:00",
        "user": { "firstname": "Jeanne", "lastname": "Martin" },
        "accommodation": {
            "id": 10,
            "type": { "label": "Tente" },
            "location_number": 7,
            "availability": false
        }
    }"#;

    #[test]
    fn test_decode_rental() {
        let rental: Rental = serde_json::from_str(RENTAL_JSON).unwrap();
        assert_eq!(rental.id, RentalId(1));
        assert_eq!(rental.accommodation.id, AccommodationId(10));
        assert_eq!(rental.start_day(), "2024-07-01");
        assert_eq!(rental.end_day(), "2024-07-05");
        assert_eq!(rental.guest_name(), "Jeanne Martin");
    }

    #[test]
    fn test_day_matching_is_timezone_naive() {
        let rental: Rental = serde_json::from_str(RENTAL_JSON).unwrap();
        let first = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let fifth = NaiveDate::from_ymd_opt(2024, 7, 5).unwrap();
        assert!(rental.starts_on(first));
        assert!(!rental.starts_on(fifth));
        assert!(rental.ends_on(fifth));
    }

    #[test]
    fn test_missing_user_gives_empty_name() {
        let json = r#"{
            "id": 2,
            "date_start": "2024-07-02",
            "date_end": "2024-07-03",
            "accommodation": { "id": 11, "availability": true }
        }"#;
        let rental: Rental = serde_json::from_str(json).unwrap();
        assert_eq!(rental.guest_name(), "");
        assert_eq!(rental.start_day(), "2024-07-02");
    }

    #[test]
    fn test_null_dates_are_rejected() {
        let json = r#"{
            "id": 2,
            "date_start": null,
            "date_end": "2024-07-03",
            "accommodation": { "id": 11, "availability": true }
        }"#;
        assert!(serde_json::from_str::<Rental>(json).is_err());
    }

    #[test]
    fn test_date_part() {
        assert_eq!(date_part("2024-07-01T00:00:00Z"), "2024-07-01");
        assert_eq!(date_part("2024-07-01"), "2024-07-01");
        assert_eq!(date_part(""), "");
    }
}
