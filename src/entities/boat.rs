//! Boat fleet types - registered boats and wizard fleet configuration

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::identity::EntityId;
use crate::entities::subscription::BillingCycle;

/// Primary box size a boat is rigged for
///
/// Both sizes bill at the same rate; the size only affects box handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum BoxSize {
    #[serde(rename = "20kg")]
    #[value(name = "20kg")]
    Kg20,
    #[serde(rename = "25kg")]
    #[value(name = "25kg")]
    Kg25,
}

impl Default for BoxSize {
    fn default() -> Self {
        BoxSize::Kg20
    }
}

impl std::fmt::Display for BoxSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoxSize::Kg20 => write!(f, "20kg"),
            BoxSize::Kg25 => write!(f, "25kg"),
        }
    }
}

impl std::str::FromStr for BoxSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "20kg" | "20" => Ok(BoxSize::Kg20),
            "25kg" | "25" => Ok(BoxSize::Kg25),
            _ => Err(format!("Unknown box size: {} (expected 20kg or 25kg)", s)),
        }
    }
}

/// Operational status of a registered boat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum BoatStatus {
    #[default]
    Active,
    Maintenance,
    Retired,
}

impl std::fmt::Display for BoatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoatStatus::Active => write!(f, "active"),
            BoatStatus::Maintenance => write!(f, "maintenance"),
            BoatStatus::Retired => write!(f, "retired"),
        }
    }
}

impl std::str::FromStr for BoatStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(BoatStatus::Active),
            "maintenance" => Ok(BoatStatus::Maintenance),
            "retired" => Ok(BoatStatus::Retired),
            _ => Err(format!("Unknown boat status: {}", s)),
        }
    }
}

/// A boat registered in the producer's fleet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boat {
    /// Unique identifier
    pub id: EntityId,

    /// Boat name
    pub name: String,

    /// Official registration number (e.g. EG-2024-001)
    pub registration_number: String,

    /// Captain's name
    pub captain_name: String,

    /// Capacity in boxes
    pub capacity: u32,

    /// Primary box size
    pub box_size: BoxSize,

    /// Operational status
    #[serde(default)]
    pub status: BoatStatus,

    /// Date of last maintenance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_maintenance_date: Option<NaiveDate>,

    /// Current utilization percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_utilization: Option<u8>,

    /// Boxes handled to date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_boxes_used: Option<u32>,

    /// Boxes currently free for new requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_capacity: Option<u32>,
}

impl Boat {
    /// Capacity still available for box requests
    ///
    /// Falls back to full capacity when no utilization is tracked.
    pub fn free_capacity(&self) -> u32 {
        self.available_capacity.unwrap_or(self.capacity)
    }
}

/// Per-boat configuration entered in the subscription-requirements step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoatConfig {
    pub name: String,
    pub registration_number: String,
    /// Capacity in boxes, 1..=1000 (forms suggest 50..=500)
    pub capacity: u32,
    pub box_size: BoxSize,
}

impl Default for BoatConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            registration_number: String::new(),
            capacity: 50,
            box_size: BoxSize::Kg20,
        }
    }
}

/// Fleet configuration collected by the subscription-requirements step
///
/// Invariant: `boats.len() == number_of_boats`, maintained by
/// [`FleetConfig::set_number_of_boats`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetConfig {
    /// Fleet size, 1..=10
    pub number_of_boats: usize,

    /// One entry per boat
    pub boats: Vec<BoatConfig>,

    /// Selected billing cycle
    pub plan: BillingCycle,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            number_of_boats: 1,
            boats: vec![BoatConfig::default()],
            plan: BillingCycle::Monthly,
        }
    }
}

impl FleetConfig {
    /// Resize the boat list to match a new fleet size
    ///
    /// Growing appends default entries; shrinking truncates. Existing
    /// entries are never touched.
    pub fn set_number_of_boats(&mut self, count: usize) {
        self.number_of_boats = count;
        if count > self.boats.len() {
            self.boats.resize_with(count, BoatConfig::default);
        } else {
            self.boats.truncate(count);
        }
    }

    /// Check the fleet-size invariant
    pub fn is_consistent(&self) -> bool {
        self.boats.len() == self.number_of_boats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shrinking_fleet_truncates_to_first_entries() {
        let mut fleet = FleetConfig::default();
        fleet.set_number_of_boats(3);
        fleet.boats[0].name = "Alpha".to_string();
        fleet.boats[1].name = "Beta".to_string();
        fleet.boats[2].name = "Gamma".to_string();

        fleet.set_number_of_boats(1);
        assert_eq!(fleet.boats.len(), 1);
        assert_eq!(fleet.boats[0].name, "Alpha");
        assert!(fleet.is_consistent());
    }

    #[test]
    fn test_growing_fleet_appends_entry_defaults() {
        let mut fleet = FleetConfig::default();
        fleet.boats[0].name = "Alpha".to_string();

        fleet.set_number_of_boats(3);
        assert_eq!(fleet.boats.len(), 3);
        assert_eq!(fleet.boats[0].name, "Alpha");
        assert_eq!(fleet.boats[1].capacity, 50);
        assert_eq!(fleet.boats[2].box_size, BoxSize::Kg20);
        assert!(fleet.is_consistent());
    }

    #[test]
    fn test_box_size_serde_names() {
        let json = serde_json::to_string(&BoxSize::Kg25).unwrap();
        assert_eq!(json, "\"25kg\"");
        let parsed: BoxSize = serde_json::from_str("\"20kg\"").unwrap();
        assert_eq!(parsed, BoxSize::Kg20);
    }

    #[test]
    fn test_free_capacity_falls_back_to_capacity() {
        let boat = Boat {
            id: crate::core::identity::EntityId::new(crate::core::identity::EntityPrefix::Boat),
            name: "Test".to_string(),
            registration_number: "EG-2024-001".to_string(),
            captain_name: "Captain".to_string(),
            capacity: 120,
            box_size: BoxSize::Kg20,
            status: BoatStatus::Active,
            last_maintenance_date: None,
            current_utilization: None,
            total_boxes_used: None,
            available_capacity: None,
        };
        assert_eq!(boat.free_capacity(), 120);
    }
}
