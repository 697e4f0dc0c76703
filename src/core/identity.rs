//! Entity identity system using type-prefixed ULIDs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use ulid::Ulid;

/// Entity type prefixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityPrefix {
    /// Registered account / producer profile
    Acct,
    /// Boat in a producer's fleet
    Boat,
    /// Box request placed against a boat
    Boxr,
    /// Recorded payment
    Pay,
    /// Dashboard activity entry
    Actv,
}

impl EntityPrefix {
    /// Get the string representation of the prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityPrefix::Acct => "ACCT",
            EntityPrefix::Boat => "BOAT",
            EntityPrefix::Boxr => "BOXR",
            EntityPrefix::Pay => "PAY",
            EntityPrefix::Actv => "ACTV",
        }
    }

    /// Get all valid prefixes
    pub fn all() -> &'static [EntityPrefix] {
        &[
            EntityPrefix::Acct,
            EntityPrefix::Boat,
            EntityPrefix::Boxr,
            EntityPrefix::Pay,
            EntityPrefix::Actv,
        ]
    }
}

impl fmt::Display for EntityPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntityPrefix {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ACCT" => Ok(EntityPrefix::Acct),
            "BOAT" => Ok(EntityPrefix::Boat),
            "BOXR" => Ok(EntityPrefix::Boxr),
            "PAY" => Ok(EntityPrefix::Pay),
            "ACTV" => Ok(EntityPrefix::Actv),
            _ => Err(IdParseError::InvalidPrefix(s.to_string())),
        }
    }
}

/// A unique entity identifier combining a type prefix and ULID
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityId {
    prefix: EntityPrefix,
    ulid: Ulid,
}

impl EntityId {
    /// Create a new EntityId with the given prefix
    pub fn new(prefix: EntityPrefix) -> Self {
        Self {
            prefix,
            ulid: Ulid::new(),
        }
    }

    /// Create an EntityId from a prefix and existing ULID
    pub fn from_parts(prefix: EntityPrefix, ulid: Ulid) -> Self {
        Self { prefix, ulid }
    }

    /// Get the entity prefix
    pub fn prefix(&self) -> EntityPrefix {
        self.prefix
    }

    /// Get the ULID component
    pub fn ulid(&self) -> Ulid {
        self.ulid
    }

    /// Parse an EntityId from a string
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        s.parse()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.prefix, self.ulid)
    }
}

impl FromStr for EntityId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix_str, ulid_str) = s
            .split_once('-')
            .ok_or_else(|| IdParseError::MissingDelimiter(s.to_string()))?;

        let prefix = prefix_str.parse()?;
        let ulid = Ulid::from_string(ulid_str)
            .map_err(|e| IdParseError::InvalidUlid(ulid_str.to_string(), e.to_string()))?;

        Ok(Self { prefix, ulid })
    }
}

impl Serialize for EntityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when parsing entity IDs
#[derive(Debug, Error)]
pub enum IdParseError {
    #[error("Unknown entity prefix: {0}")]
    InvalidPrefix(String),

    #[error("Missing '-' delimiter in entity id: {0}")]
    MissingDelimiter(String),

    #[error("Invalid ULID '{0}': {1}")]
    InvalidUlid(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        let id = EntityId::new(EntityPrefix::Boat);
        let s = id.to_string();
        assert!(s.starts_with("BOAT-"));
        let parsed: EntityId = s.parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_rejects_unknown_prefix() {
        let err = "FISH-01J0000000000000000000000".parse::<EntityId>();
        assert!(matches!(err, Err(IdParseError::InvalidPrefix(_))));
    }

    #[test]
    fn test_parse_rejects_missing_delimiter() {
        let err = "BOAT".parse::<EntityId>();
        assert!(matches!(err, Err(IdParseError::MissingDelimiter(_))));
    }

    #[test]
    fn test_prefix_from_str_is_case_insensitive() {
        assert_eq!("boat".parse::<EntityPrefix>().unwrap(), EntityPrefix::Boat);
        assert_eq!("Acct".parse::<EntityPrefix>().unwrap(), EntityPrefix::Acct);
    }
}
