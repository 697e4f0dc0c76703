//! Step payload validation with field-level error reporting
//!
//! Every wizard step's payload is checked against its embedded JSON
//! Schema before it may be merged into the draft. Failures are local to
//! the step: they block forward movement and never corrupt the draft.

use jsonschema::{validator_for, ValidationError as JsonSchemaError, Validator as JsonValidator};
use miette::Diagnostic;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

use crate::core::sequencer::StepId;
use crate::entities::boat::FleetConfig;
use crate::forms::registry::SchemaRegistry;

/// A step form that failed validation
#[derive(Debug, Error, Diagnostic)]
#[error("{step} form failed validation: {summary}")]
#[diagnostic(
    code(selal::forms::invalid),
    help("correct the listed fields and submit the step again")
)]
pub struct FormError {
    step: &'static str,
    summary: String,

    #[related]
    issues: Vec<FieldIssue>,
}

impl FormError {
    fn new(step: StepId, issues: Vec<FieldIssue>) -> Self {
        let paths: Vec<&str> = issues
            .iter()
            .map(|i| if i.path.is_empty() { "/" } else { i.path.as_str() })
            .collect();
        let summary = if issues.len() == 1 {
            format!("1 error at {}", paths[0])
        } else {
            format!("{} errors at {}", issues.len(), paths.join(", "))
        };
        Self {
            step: step.as_str(),
            summary,
            issues,
        }
    }

    /// Field issues behind this failure
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }
}

/// A single invalid field
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct FieldIssue {
    /// JSON pointer into the payload ("/boats/0/name"), empty at the root
    pub path: String,
    pub message: String,
}

/// Validator holding pre-compiled schemas for every form step
pub struct FormValidator {
    compiled: HashMap<StepId, JsonValidator>,
}

impl FormValidator {
    /// Compile the embedded schemas
    pub fn new() -> Self {
        let registry = SchemaRegistry::new();
        let mut compiled = HashMap::new();

        for step in [
            StepId::UserType,
            StepId::PersonalInfo,
            StepId::Otp,
            StepId::SubscriptionRequirements,
            StepId::Payment,
        ] {
            if let Some(schema_str) = registry.get(step) {
                if let Ok(schema_json) = serde_json::from_str::<Value>(&schema_str) {
                    if let Ok(schema) = validator_for(&schema_json) {
                        compiled.insert(step, schema);
                    }
                }
            }
        }

        Self { compiled }
    }

    /// Validate a step payload. Steps without a form always pass.
    pub fn validate(&self, step: StepId, payload: &Value) -> Result<(), FormError> {
        let schema = match self.compiled.get(&step) {
            Some(s) => s,
            None => return Ok(()),
        };

        let mut issues: Vec<FieldIssue> = schema
            .iter_errors(payload)
            .map(|e| error_to_issue(&e))
            .collect();

        // Invariants a JSON Schema cannot express
        if step == StepId::SubscriptionRequirements && issues.is_empty() {
            if let Ok(fleet) = serde_json::from_value::<FleetConfig>(payload.clone()) {
                if !fleet.is_consistent() {
                    issues.push(FieldIssue {
                        path: "/boats".to_string(),
                        message: format!(
                            "Fleet has {} boat(s) but number_of_boats is {}",
                            fleet.boats.len(),
                            fleet.number_of_boats
                        ),
                    });
                }
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(FormError::new(step, issues))
        }
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a JSON Schema validation error to a field issue
fn error_to_issue(error: &JsonSchemaError) -> FieldIssue {
    FieldIssue {
        path: error.instance_path.to_string(),
        message: format_schema_error(error),
    }
}

/// Format a JSON Schema error into a user-friendly message
fn format_schema_error(error: &JsonSchemaError) -> String {
    let path = if error.instance_path.as_str().is_empty() {
        "form root".to_string()
    } else {
        format!("'{}'", error.instance_path)
    };

    match &error.kind {
        jsonschema::error::ValidationErrorKind::Required { property } => {
            let prop_str = property
                .as_str()
                .map(|s| s.to_string())
                .unwrap_or_else(|| property.to_string());
            format!("Missing required field: {} at {}", prop_str, path)
        }
        jsonschema::error::ValidationErrorKind::Type { kind } => {
            format!("Wrong type at {}: expected {:?}", path, kind)
        }
        jsonschema::error::ValidationErrorKind::Enum { options } => {
            format!(
                "Invalid value at {}: must be one of: {}",
                path,
                format_enum_options(options)
            )
        }
        jsonschema::error::ValidationErrorKind::Pattern { pattern } => {
            format!("Value at {} doesn't match pattern: {}", path, pattern)
        }
        jsonschema::error::ValidationErrorKind::MinLength { limit } => {
            format!("Value at {} is too short: minimum {} characters", path, limit)
        }
        jsonschema::error::ValidationErrorKind::MaxLength { limit } => {
            format!("Value at {} is too long: maximum {} characters", path, limit)
        }
        jsonschema::error::ValidationErrorKind::Minimum { limit } => {
            format!("Value at {} is too small: minimum {}", path, limit)
        }
        jsonschema::error::ValidationErrorKind::Maximum { limit } => {
            format!("Value at {} is too large: maximum {}", path, limit)
        }
        _ => {
            format!("Validation error at {}: {}", path, error)
        }
    }
}

fn format_enum_options(options: &Value) -> String {
    options
        .as_array()
        .map(|arr| {
            arr.iter()
                .map(|v| v.as_str().map(String::from).unwrap_or_else(|| v.to_string()))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_else(|| options.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validator() -> FormValidator {
        FormValidator::new()
    }

    fn valid_personal_info() -> Value {
        json!({
            "full_name": "Ahmed Mansour",
            "phone": "01012345678",
            "national_id": "29805211234567",
            "company_name": "Mansour Fisheries",
            "agree_terms": true
        })
    }

    fn valid_fleet() -> Value {
        json!({
            "number_of_boats": 2,
            "boats": [
                {"name": "Sea Explorer", "registration_number": "EG-2024-001", "capacity": 50, "box_size": "20kg"},
                {"name": "Nile Star", "registration_number": "EG-2024-002", "capacity": 100, "box_size": "25kg"}
            ],
            "plan": "annual"
        })
    }

    #[test]
    fn test_valid_payloads_pass() {
        let v = validator();
        assert!(v
            .validate(StepId::UserType, &json!({"account_type": "producer"}))
            .is_ok());
        assert!(v.validate(StepId::PersonalInfo, &valid_personal_info()).is_ok());
        assert!(v.validate(StepId::Otp, &json!({"code": "123456"})).is_ok());
        assert!(v
            .validate(StepId::SubscriptionRequirements, &valid_fleet())
            .is_ok());
        assert!(v
            .validate(
                StepId::Payment,
                &json!({"method": "instapay", "date": "2024-01-18"})
            )
            .is_ok());
    }

    #[test]
    fn test_malformed_phone_reports_field_path() {
        let mut payload = valid_personal_info();
        payload["phone"] = json!("0123");
        let err = validator()
            .validate(StepId::PersonalInfo, &payload)
            .unwrap_err();
        assert!(err.issues().iter().any(|i| i.path == "/phone"));
    }

    #[test]
    fn test_terms_must_be_agreed() {
        let mut payload = valid_personal_info();
        payload["agree_terms"] = json!(false);
        assert!(validator().validate(StepId::PersonalInfo, &payload).is_err());
    }

    #[test]
    fn test_capacity_bounds_enforced() {
        let mut payload = valid_fleet();
        payload["boats"][0]["capacity"] = json!(0);
        assert!(validator()
            .validate(StepId::SubscriptionRequirements, &payload)
            .is_err());

        payload["boats"][0]["capacity"] = json!(1001);
        assert!(validator()
            .validate(StepId::SubscriptionRequirements, &payload)
            .is_err());

        payload["boats"][0]["capacity"] = json!(1000);
        assert!(validator()
            .validate(StepId::SubscriptionRequirements, &payload)
            .is_ok());
    }

    #[test]
    fn test_fleet_length_must_match_number_of_boats() {
        let mut payload = valid_fleet();
        payload["number_of_boats"] = json!(3);
        let err = validator()
            .validate(StepId::SubscriptionRequirements, &payload)
            .unwrap_err();
        assert!(err.issues().iter().any(|i| i.path == "/boats"));
    }

    #[test]
    fn test_unknown_account_type_rejected() {
        let err = validator()
            .validate(StepId::UserType, &json!({"account_type": "fisherman"}))
            .unwrap_err();
        assert!(err.issues()[0].message.contains("must be one of"));
    }

    #[test]
    fn test_success_step_always_passes() {
        assert!(validator().validate(StepId::Success, &json!({})).is_ok());
    }
}
