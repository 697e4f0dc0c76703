//! Embedded form schemas for wizard steps

use rust_embed::Embed;

use crate::core::sequencer::StepId;

#[derive(Embed)]
#[folder = "assets/schemas/"]
struct SchemaAssets;

/// Lookup of the JSON Schema describing each wizard step's form
#[derive(Debug, Default)]
pub struct SchemaRegistry;

impl SchemaRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Schema source for a step, None for steps without a form
    pub fn get(&self, step: StepId) -> Option<String> {
        let name = format!("{}.schema.json", step.as_str());
        SchemaAssets::get(&name)
            .and_then(|file| String::from_utf8(file.data.into_owned()).ok())
    }

    /// Whether a step has a form schema
    pub fn has_schema(&self, step: StepId) -> bool {
        self.get(step).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_form_step_has_a_schema() {
        let registry = SchemaRegistry::new();
        for step in [
            StepId::UserType,
            StepId::PersonalInfo,
            StepId::Otp,
            StepId::SubscriptionRequirements,
            StepId::Payment,
        ] {
            assert!(registry.has_schema(step), "missing schema for {}", step);
        }
    }

    #[test]
    fn test_success_step_has_no_form() {
        let registry = SchemaRegistry::new();
        assert!(!registry.has_schema(StepId::Success));
    }

    #[test]
    fn test_schemas_are_valid_json() {
        let registry = SchemaRegistry::new();
        let schema = registry.get(StepId::PersonalInfo).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&schema).unwrap();
        assert!(parsed["properties"]["phone"]["pattern"].is_string());
    }
}
