use serde::{Deserialize, Serialize};

use crate::domain::common::aggregate_id::integer_id;

// ============================================================================
// ID Type
// ============================================================================

integer_id!(
    /// Идентификатор размещения (участок, шале, мобил-хоум)
    AccommodationId
);

// ============================================================================
// Aggregate
// ============================================================================

/// Тип размещения, как его отдаёт бэкенд (`{"label": "Tente"}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccommodationType {
    pub label: String,
}

/// Бронируемая единица кемпинга
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accommodation {
    pub id: AccommodationId,

    #[serde(rename = "type", default)]
    pub accommodation_type: Option<AccommodationType>,

    #[serde(default)]
    pub location_number: Option<i64>,

    pub availability: bool,
}

impl Accommodation {
    /// Название типа размещения, пустая строка если бэкенд его не прислал
    pub fn type_label(&self) -> &str {
        self.accommodation_type
            .as_ref()
            .map(|t| t.label.as_str())
            .unwrap_or("")
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Тело merge-patch запроса на изменение доступности
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityPatch {
    pub availability: bool,
}

impl AvailabilityPatch {
    /// Media type частичного обновления размещения
    pub const CONTENT_TYPE: &'static str = "application/merge-patch+json";

    pub fn new(availability: bool) -> Self {
        Self { availability }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_with_type_and_location() {
        let json = r#"{
            "@id": "/api/accommodations/10",
            "id": 10,
            "type": { "label": "Mobil-home" },
            "location_number": 42,
            "availability": false
        }"#;
        let acc: Accommodation = serde_json::from_str(json).unwrap();
        assert_eq!(acc.id, AccommodationId(10));
        assert_eq!(acc.type_label(), "Mobil-home");
        assert_eq!(acc.location_number, Some(42));
        assert!(!acc.availability);
    }

    #[test]
    fn test_decode_without_optional_fields() {
        let acc: Accommodation = serde_json::from_str(r#"{"id": 3, "availability": true}"#).unwrap();
        assert_eq!(acc.type_label(), "");
        assert_eq!(acc.location_number, None);
    }

    #[test]
    fn test_availability_is_strictly_boolean() {
        let res: Result<Accommodation, _> =
            serde_json::from_str(r#"{"id": 3, "availability": null}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_patch_body() {
        let body = serde_json::to_string(&AvailabilityPatch::new(true)).unwrap();
        assert_eq!(body, r#"{"availability":true}"#);
    }
}
