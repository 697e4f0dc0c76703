//! Payment details collected on the payment wizard step

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Accepted payment channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum PaymentMethod {
    #[default]
    Bank,
    Cash,
    Instapay,
}

impl PaymentMethod {
    /// Display label for the payment method card
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Bank => "Bank Transfer",
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Instapay => "InstaPay",
        }
    }

    pub fn all() -> &'static [PaymentMethod] {
        &[
            PaymentMethod::Bank,
            PaymentMethod::Cash,
            PaymentMethod::Instapay,
        ]
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Bank => write!(f, "bank"),
            PaymentMethod::Cash => write!(f, "cash"),
            PaymentMethod::Instapay => write!(f, "instapay"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bank" => Ok(PaymentMethod::Bank),
            "cash" => Ok(PaymentMethod::Cash),
            "instapay" => Ok(PaymentMethod::Instapay),
            _ => Err(format!("Unknown payment method: {}", s)),
        }
    }
}

/// Validated output of the payment step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentInfo {
    /// Payment channel
    pub method: PaymentMethod,

    /// Transaction reference, if the channel provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Date the payment was made
    pub date: NaiveDate,

    /// Path to an uploaded receipt image, recorded as-is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_round_trip() {
        for m in PaymentMethod::all() {
            let parsed: PaymentMethod = m.to_string().parse().unwrap();
            assert_eq!(parsed, *m);
        }
    }

    #[test]
    fn test_optional_fields_skip_serialization() {
        let info = PaymentInfo {
            method: PaymentMethod::Cash,
            reference: None,
            date: NaiveDate::from_ymd_opt(2024, 1, 18).unwrap(),
            receipt: None,
        };
        let json = serde_json::to_string(&info).unwrap();
        assert!(!json.contains("reference"));
        assert!(!json.contains("receipt"));
    }
}
