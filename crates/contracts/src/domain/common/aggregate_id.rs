use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier type of a catalog aggregate
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    fn as_string(&self) -> String;

    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for u32 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<u32>()
            .map_err(|e| format!("Invalid id: {}", e))
    }
}

/// Newtype ids over `u32`, serialized as plain numbers
#[macro_export]
macro_rules! numeric_aggregate_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            pub fn value(&self) -> u32 {
                self.0
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                <u32 as $crate::domain::common::AggregateId>::from_string(s).map($name)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    numeric_aggregate_id!(SampleId);

    #[test]
    fn test_numeric_id_parsing() {
        assert_eq!(SampleId::from_string(" 42 "), Ok(SampleId(42)));
        assert!(SampleId::from_string("abc").is_err());
        assert_eq!(SampleId(7).as_string(), "7");
        assert_eq!(serde_json::to_string(&SampleId(7)).unwrap(), "7");
    }
}
