//! Account types and producer profile

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::identity::EntityId;
use crate::entities::subscription::Subscription;

/// Role in the fish supply chain, chosen on the first wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Producer,
    Wholesaler,
    Logistics,
    Customer,
}

impl AccountType {
    /// Display label as shown on the account-type selection card
    pub fn label(&self) -> &'static str {
        match self {
            AccountType::Producer => "Fish Producer",
            AccountType::Wholesaler => "Wholesaler",
            AccountType::Logistics => "Logistics Partners",
            AccountType::Customer => "Customer",
        }
    }

    /// Short description of the role
    pub fn description(&self) -> &'static str {
        match self {
            AccountType::Producer => "Boat owners and fish producers",
            AccountType::Wholesaler => "Fish wholesale distributors",
            AccountType::Logistics => "Transportation and logistics providers",
            AccountType::Customer => "End customers and retailers",
        }
    }

    /// Producers must configure a fleet and subscription before payment
    pub fn requires_subscription(&self) -> bool {
        matches!(self, AccountType::Producer)
    }

    pub fn all() -> &'static [AccountType] {
        &[
            AccountType::Producer,
            AccountType::Wholesaler,
            AccountType::Logistics,
            AccountType::Customer,
        ]
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountType::Producer => write!(f, "producer"),
            AccountType::Wholesaler => write!(f, "wholesaler"),
            AccountType::Logistics => write!(f, "logistics"),
            AccountType::Customer => write!(f, "customer"),
        }
    }
}

impl std::str::FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "producer" => Ok(AccountType::Producer),
            "wholesaler" => Ok(AccountType::Wholesaler),
            "logistics" => Ok(AccountType::Logistics),
            "customer" => Ok(AccountType::Customer),
            _ => Err(format!("Unknown account type: {}", s)),
        }
    }
}

/// Personal information collected on the second wizard step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    /// Full legal name
    pub full_name: String,

    /// Egyptian mobile number (01XXXXXXXXX)
    pub phone: String,

    /// 14-digit national ID
    pub national_id: String,

    /// Company or boat owner name
    pub company_name: String,

    /// Terms and conditions acceptance
    pub agree_terms: bool,
}

impl PersonalInfo {
    /// Phone in international display form (+20 without the leading zero)
    pub fn phone_international(&self) -> String {
        match self.phone.strip_prefix('0') {
            Some(rest) => format!("+20{}", rest),
            None => self.phone.clone(),
        }
    }
}

/// A registered account held by the session provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identifier
    pub id: EntityId,

    /// Chosen role
    pub account_type: AccountType,

    /// Personal details
    pub personal: PersonalInfo,

    /// Active subscription, producers only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<Subscription>,

    /// Registration timestamp
    pub created: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_producer_requires_subscription() {
        assert!(AccountType::Producer.requires_subscription());
        assert!(!AccountType::Wholesaler.requires_subscription());
        assert!(!AccountType::Logistics.requires_subscription());
        assert!(!AccountType::Customer.requires_subscription());
    }

    #[test]
    fn test_phone_international_strips_leading_zero() {
        let info = PersonalInfo {
            phone: "01012345678".to_string(),
            ..Default::default()
        };
        assert_eq!(info.phone_international(), "+201012345678");
    }

    #[test]
    fn test_account_type_round_trip() {
        for t in AccountType::all() {
            let parsed: AccountType = t.to_string().parse().unwrap();
            assert_eq!(parsed, *t);
        }
    }
}
