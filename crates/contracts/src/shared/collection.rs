//! Обёртка коллекции, которую возвращают списочные эндпоинты бэкенда.

use serde::{Deserialize, Serialize};

use crate::domain::a001_rental::Rental;

/// `{ "member": [...], "totalItems": n }`
///
/// Порядок `member` сохраняется как есть. Остальные ключи обёртки
/// (`@context`, `@id`, `view`, ...) игнорируются.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection<T> {
    pub member: Vec<T>,

    #[serde(rename = "totalItems", default, skip_serializing_if = "Option::is_none")]
    pub total_items: Option<u64>,
}

impl<T> Collection<T> {
    pub fn new(member: Vec<T>) -> Self {
        Self {
            member,
            total_items: None,
        }
    }

    pub fn into_members(self) -> Vec<T> {
        self.member
    }
}

pub type RentalCollection = Collection<Rental>;
