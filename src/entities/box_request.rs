//! Box request ordering types

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::identity::EntityId;

/// Delivery time slots offered by the logistics network
pub const TIME_SLOTS: [&str; 9] = [
    "06:00 - 08:00",
    "08:00 - 10:00",
    "10:00 - 12:00",
    "12:00 - 14:00",
    "14:00 - 16:00",
    "16:00 - 18:00",
    "18:00 - 20:00",
    "20:00 - 22:00",
    "22:00 - 24:00",
];

/// Orderable box type
///
/// Both types are priced identically; the tier only selects box size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum BoxType {
    #[default]
    Standard,
    Premium,
}

impl BoxType {
    /// Catalog name
    pub fn label(&self) -> &'static str {
        match self {
            BoxType::Standard => "Medium Box",
            BoxType::Premium => "Large Box",
        }
    }

    /// Box size for this tier
    pub fn capacity_label(&self) -> &'static str {
        match self {
            BoxType::Standard => "20kg",
            BoxType::Premium => "25kg",
        }
    }

    /// Price per box in the configured currency
    pub fn unit_price(&self) -> f64 {
        match self {
            BoxType::Standard => 50.0,
            BoxType::Premium => 50.0,
        }
    }

    pub fn all() -> &'static [BoxType] {
        &[BoxType::Standard, BoxType::Premium]
    }
}

impl std::fmt::Display for BoxType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoxType::Standard => write!(f, "standard"),
            BoxType::Premium => write!(f, "premium"),
        }
    }
}

impl std::str::FromStr for BoxType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(BoxType::Standard),
            "premium" => Ok(BoxType::Premium),
            _ => Err(format!("Unknown box type: {}", s)),
        }
    }
}

/// A box request placed against a boat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxRequest {
    /// Unique identifier
    pub id: EntityId,

    /// Target boat
    pub boat_id: EntityId,

    /// Ordered box type
    pub box_type: BoxType,

    /// Number of boxes, at least 1
    pub quantity: u32,

    /// Delivery address
    pub delivery_address: String,

    /// Requested delivery date
    pub delivery_date: NaiveDate,

    /// One of [`TIME_SLOTS`]
    pub delivery_time: String,

    /// Free-form handling notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

impl BoxRequest {
    /// Price before fees; currently the full total
    pub fn subtotal(&self) -> f64 {
        self.box_type.unit_price() * f64::from(self.quantity)
    }

    /// Order total
    pub fn total(&self) -> f64 {
        self.subtotal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity::EntityPrefix;

    fn request(box_type: BoxType, quantity: u32) -> BoxRequest {
        BoxRequest {
            id: EntityId::new(EntityPrefix::Boxr),
            boat_id: EntityId::new(EntityPrefix::Boat),
            box_type,
            quantity,
            delivery_address: "Alexandria harbor, gate 4".to_string(),
            delivery_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            delivery_time: TIME_SLOTS[0].to_string(),
            special_instructions: None,
        }
    }

    #[test]
    fn test_total_is_price_times_quantity() {
        let req = request(BoxType::Standard, 5);
        assert_eq!(req.subtotal(), 250.0);
        assert_eq!(req.total(), 250.0);
    }

    #[test]
    fn test_both_tiers_share_unit_price() {
        assert_eq!(
            request(BoxType::Standard, 3).total(),
            request(BoxType::Premium, 3).total()
        );
    }

    #[test]
    fn test_nine_delivery_slots() {
        assert_eq!(TIME_SLOTS.len(), 9);
        assert_eq!(TIME_SLOTS[8], "22:00 - 24:00");
    }
}
