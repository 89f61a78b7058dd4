use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов агрегатов
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Преобразовать ID в строку
    fn as_string(&self) -> String;

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Объявляет newtype-идентификатор поверх i64, сериализуется как число
macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                s.trim()
                    .parse::<i64>()
                    .map(Self)
                    .map_err(|e| format!("Invalid {}: {}", stringify!($name), e))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub(crate) use integer_id;

#[cfg(test)]
mod tests {
    use super::*;

    integer_id!(SampleId);

    #[test]
    fn test_from_string_trims_and_parses() {
        assert_eq!(SampleId::from_string(" 42 ").unwrap(), SampleId(42));
        assert_eq!(SampleId(7).as_string(), "7");
    }

    #[test]
    fn test_from_string_rejects_garbage() {
        let err = SampleId::from_string("abc").unwrap_err();
        assert!(err.starts_with("Invalid SampleId"));
    }

    #[test]
    fn test_serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&SampleId(10)).unwrap(), "10");
        let id: SampleId = serde_json::from_str("10").unwrap();
        assert_eq!(id.value(), 10);
    }
}
