//! Subscription plans and billing cycles

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Billing cycle for a producer subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Quarterly,
    Annual,
}

impl BillingCycle {
    /// Discount rate applied to the whole-cycle cost
    pub fn discount(&self) -> f64 {
        match self {
            BillingCycle::Monthly => 0.0,
            BillingCycle::Quarterly => 0.05,
            BillingCycle::Annual => 0.15,
        }
    }

    /// Cycle length in months
    pub fn duration_months(&self) -> u32 {
        match self {
            BillingCycle::Monthly => 1,
            BillingCycle::Quarterly => 3,
            BillingCycle::Annual => 12,
        }
    }

    /// Display label for plan cards
    pub fn label(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Quarterly => "Quarterly",
            BillingCycle::Annual => "Annual",
        }
    }

    /// Badge text for discounted plans ("5% OFF"), empty for monthly
    pub fn discount_badge(&self) -> Option<&'static str> {
        match self {
            BillingCycle::Monthly => None,
            BillingCycle::Quarterly => Some("5% OFF"),
            BillingCycle::Annual => Some("15% OFF"),
        }
    }

    /// Billing period description shown next to the price
    pub fn period_label(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "per month",
            BillingCycle::Quarterly => "3 months",
            BillingCycle::Annual => "per year",
        }
    }

    pub fn all() -> &'static [BillingCycle] {
        &[
            BillingCycle::Monthly,
            BillingCycle::Quarterly,
            BillingCycle::Annual,
        ]
    }
}

impl std::fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BillingCycle::Monthly => write!(f, "monthly"),
            BillingCycle::Quarterly => write!(f, "quarterly"),
            BillingCycle::Annual => write!(f, "annual"),
        }
    }
}

impl std::str::FromStr for BillingCycle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monthly" => Ok(BillingCycle::Monthly),
            "quarterly" => Ok(BillingCycle::Quarterly),
            "annual" => Ok(BillingCycle::Annual),
            _ => Err(format!("Unknown billing cycle: {}", s)),
        }
    }
}

/// Active subscription attached to a producer profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    /// Selected billing cycle
    pub plan: BillingCycle,

    /// First day of the current subscription
    pub active_since: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_rates() {
        assert_eq!(BillingCycle::Monthly.discount(), 0.0);
        assert_eq!(BillingCycle::Quarterly.discount(), 0.05);
        assert_eq!(BillingCycle::Annual.discount(), 0.15);
    }

    #[test]
    fn test_durations() {
        assert_eq!(BillingCycle::Monthly.duration_months(), 1);
        assert_eq!(BillingCycle::Quarterly.duration_months(), 3);
        assert_eq!(BillingCycle::Annual.duration_months(), 12);
    }

    #[test]
    fn test_monthly_has_no_badge() {
        assert!(BillingCycle::Monthly.discount_badge().is_none());
        assert_eq!(BillingCycle::Annual.discount_badge(), Some("15% OFF"));
    }
}
