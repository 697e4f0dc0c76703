//! Registration draft - cumulative validated step outputs
//!
//! The draft is the single source of truth for everything the user has
//! entered across wizard steps. It lives for one wizard session and is
//! dropped on success or abandonment.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::core::sequencer::StepId;

/// Accumulates validated step payloads, keyed by step
///
/// Only validated payloads may be merged; validation failures never reach
/// the draft. There is exactly one active form at a time, so merges are
/// strictly sequential.
#[derive(Debug, Default, Clone)]
pub struct DraftAccumulator {
    slots: BTreeMap<StepId, Value>,
}

impl DraftAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a step's validated payload into the draft.
    ///
    /// Last write wins per step: re-submitting a step after navigating
    /// back fully replaces that step's namespace, never deep-merges.
    pub fn merge(&mut self, step: StepId, payload: Value) {
        self.slots.insert(step, payload);
    }

    /// Raw payload for a step, if one was merged
    pub fn get(&self, step: StepId) -> Option<&Value> {
        self.slots.get(&step)
    }

    /// Deserialize a step's payload into its typed form.
    ///
    /// Payloads are validated before merging, so a decode failure means
    /// the step was never submitted (or the caller asked for the wrong
    /// type) and reads as absent.
    pub fn decode<T: DeserializeOwned>(&self, step: StepId) -> Option<T> {
        self.slots
            .get(&step)
            .cloned()
            .and_then(|value| serde_json::from_value(value).ok())
    }

    /// Immutable copy-on-read view for pricing and summary rendering.
    ///
    /// Returns a detached JSON object keyed by step name; mutating it
    /// never touches the draft.
    pub fn snapshot(&self) -> serde_json::Map<String, Value> {
        self.slots
            .iter()
            .map(|(step, payload)| (step.as_str().to_string(), payload.clone()))
            .collect()
    }

    /// Number of steps with merged payloads
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drop all accumulated payloads
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_overwrites_whole_namespace() {
        let mut draft = DraftAccumulator::new();
        draft.merge(
            StepId::PersonalInfo,
            json!({"full_name": "Ahmed", "phone": "01012345678"}),
        );
        draft.merge(StepId::PersonalInfo, json!({"full_name": "Mona"}));

        let payload = draft.get(StepId::PersonalInfo).unwrap();
        assert_eq!(payload["full_name"], "Mona");
        // Shallow last-write-wins: the old phone field is gone
        assert!(payload.get("phone").is_none());
    }

    #[test]
    fn test_snapshot_is_detached_from_draft() {
        let mut draft = DraftAccumulator::new();
        draft.merge(StepId::UserType, json!({"account_type": "producer"}));

        let mut snap = draft.snapshot();
        snap.insert("user_type".to_string(), json!({"account_type": "customer"}));

        assert_eq!(
            draft.get(StepId::UserType).unwrap()["account_type"],
            "producer"
        );
    }

    #[test]
    fn test_snapshot_keys_are_step_names() {
        let mut draft = DraftAccumulator::new();
        draft.merge(StepId::UserType, json!({"account_type": "customer"}));
        draft.merge(StepId::Payment, json!({"method": "cash"}));

        let snap = draft.snapshot();
        assert!(snap.contains_key("user_type"));
        assert!(snap.contains_key("payment"));
    }

    #[test]
    fn test_decode_typed_payload() {
        use crate::entities::account::PersonalInfo;

        let mut draft = DraftAccumulator::new();
        draft.merge(
            StepId::PersonalInfo,
            json!({
                "full_name": "Ahmed Mansour",
                "phone": "01012345678",
                "national_id": "29805211234567",
                "company_name": "Mansour Fisheries",
                "agree_terms": true
            }),
        );

        let info: PersonalInfo = draft.decode(StepId::PersonalInfo).unwrap();
        assert_eq!(info.full_name, "Ahmed Mansour");
        assert!(info.agree_terms);
    }

    #[test]
    fn test_clear_empties_draft() {
        let mut draft = DraftAccumulator::new();
        draft.merge(StepId::UserType, json!({"account_type": "producer"}));
        assert!(!draft.is_empty());

        draft.clear();
        assert!(draft.is_empty());
        assert!(draft.get(StepId::UserType).is_none());
    }
}
