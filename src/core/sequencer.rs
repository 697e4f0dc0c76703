//! Wizard step sequencing with validation-gated forward movement
//!
//! The sequencer owns the ordered step list for the chosen account type
//! and the registration draft. Forward movement requires the active
//! step's payload to have validated already; backward movement is
//! unconditional and never discards draft data.

use serde_json::Value;

use crate::core::draft::DraftAccumulator;
use crate::entities::account::AccountType;

/// Identifier of a wizard step, also the draft namespace key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StepId {
    UserType,
    PersonalInfo,
    Otp,
    SubscriptionRequirements,
    Payment,
    Success,
}

impl StepId {
    /// Stable key used for draft namespaces and form-schema lookup
    pub fn as_str(&self) -> &'static str {
        match self {
            StepId::UserType => "user_type",
            StepId::PersonalInfo => "personal_info",
            StepId::Otp => "otp",
            StepId::SubscriptionRequirements => "subscription_requirements",
            StepId::Payment => "payment",
            StepId::Success => "success",
        }
    }

    /// Catalog key for the step's localized heading
    pub fn title_key(&self) -> String {
        format!("wizard.{}.title", self.as_str())
    }
}

impl std::fmt::Display for StepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered step list for an account type.
///
/// Non-producer types skip the subscription-requirements step entirely -
/// it is absent from the sequence, not merely hidden.
pub fn steps_for(account: AccountType) -> Vec<StepId> {
    let mut steps = vec![StepId::UserType, StepId::PersonalInfo, StepId::Otp];
    if account.requires_subscription() {
        steps.push(StepId::SubscriptionRequirements);
    }
    steps.push(StepId::Payment);
    steps.push(StepId::Success);
    steps
}

/// Tracks the active wizard step and folds validated payloads into the draft
#[derive(Debug, Clone)]
pub struct StepSequencer {
    steps: Vec<StepId>,
    current: usize,
    draft: DraftAccumulator,
}

impl Default for StepSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl StepSequencer {
    /// Start a fresh wizard session.
    ///
    /// The sequence before an account type is chosen is the baseline one;
    /// advancing past the user-type step re-derives it from the choice.
    pub fn new() -> Self {
        Self {
            steps: steps_for(AccountType::Customer),
            current: 0,
            draft: DraftAccumulator::new(),
        }
    }

    /// The step currently awaiting input
    pub fn current_step(&self) -> StepId {
        self.steps[self.current]
    }

    /// Zero-based position in the sequence
    pub fn position(&self) -> usize {
        self.current
    }

    /// The full step sequence for the chosen account type
    pub fn steps(&self) -> &[StepId] {
        &self.steps
    }

    /// Whether the wizard has reached its terminal step
    pub fn is_terminal(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    /// Read access to the accumulated draft
    pub fn draft(&self) -> &DraftAccumulator {
        &self.draft
    }

    /// Fold a validated payload into the draft and move forward one step.
    ///
    /// The caller must have validated the payload against the active
    /// step's form already. Advancing at the terminal step is a no-op.
    /// Advancing past the user-type step re-derives the remaining
    /// sequence from the chosen account type.
    pub fn advance(&mut self, payload: Value) {
        if self.is_terminal() {
            return;
        }

        let step = self.current_step();
        if step == StepId::UserType {
            if let Some(account) = payload
                .get("account_type")
                .and_then(|v| v.as_str())
                .and_then(|s| s.parse::<AccountType>().ok())
            {
                self.steps = steps_for(account);
            }
        }
        self.draft.merge(step, payload);
        self.current = (self.current + 1).min(self.steps.len() - 1);
    }

    /// Move back one step without touching the draft.
    ///
    /// Values entered for steps ahead of the new position stay in the
    /// draft, so advancing again restores them. Retreating at the first
    /// step is a no-op.
    pub fn retreat(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Clear the draft and return to the first step
    pub fn reset(&mut self) {
        self.steps = steps_for(AccountType::Customer);
        self.current = 0;
        self.draft.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user_type(account: &str) -> Value {
        json!({ "account_type": account })
    }

    #[test]
    fn test_producer_sequence_contains_subscription_step() {
        let steps = steps_for(AccountType::Producer);
        assert_eq!(
            steps,
            vec![
                StepId::UserType,
                StepId::PersonalInfo,
                StepId::Otp,
                StepId::SubscriptionRequirements,
                StepId::Payment,
                StepId::Success,
            ]
        );
    }

    #[test]
    fn test_non_producer_sequences_skip_subscription_step() {
        for account in [
            AccountType::Wholesaler,
            AccountType::Logistics,
            AccountType::Customer,
        ] {
            let steps = steps_for(account);
            assert!(!steps.contains(&StepId::SubscriptionRequirements));
            assert_eq!(steps.len(), 5);
        }
    }

    #[test]
    fn test_advance_retargets_sequence_from_account_type() {
        let mut seq = StepSequencer::new();
        seq.advance(user_type("producer"));
        assert!(seq.steps().contains(&StepId::SubscriptionRequirements));
        assert_eq!(seq.current_step(), StepId::PersonalInfo);
    }

    #[test]
    fn test_retreat_at_first_step_is_noop() {
        let mut seq = StepSequencer::new();
        seq.retreat();
        assert_eq!(seq.position(), 0);
        assert_eq!(seq.current_step(), StepId::UserType);
    }

    #[test]
    fn test_advance_at_terminal_step_is_noop() {
        let mut seq = StepSequencer::new();
        seq.advance(user_type("customer"));
        seq.advance(json!({"full_name": "Mona"}));
        seq.advance(json!({"code": "123456"}));
        seq.advance(json!({"method": "cash", "date": "2024-01-18"}));
        assert!(seq.is_terminal());
        assert_eq!(seq.current_step(), StepId::Success);

        let before = seq.draft().snapshot();
        seq.advance(json!({"stray": true}));
        assert_eq!(seq.current_step(), StepId::Success);
        assert_eq!(seq.draft().snapshot(), before);
    }

    #[test]
    fn test_back_then_forward_restores_draft() {
        let mut seq = StepSequencer::new();
        seq.advance(user_type("producer"));
        let personal = json!({"full_name": "Ahmed Mansour"});
        seq.advance(personal.clone());
        let before = seq.draft().snapshot();

        seq.retreat();
        // Draft data ahead of the new position is retained
        assert_eq!(seq.draft().snapshot(), before);

        seq.advance(personal);
        assert_eq!(seq.draft().snapshot(), before);
        assert_eq!(seq.current_step(), StepId::Otp);
    }

    #[test]
    fn test_changing_account_type_rederives_sequence() {
        let mut seq = StepSequencer::new();
        seq.advance(user_type("producer"));
        seq.retreat();
        seq.advance(user_type("customer"));
        assert!(!seq.steps().contains(&StepId::SubscriptionRequirements));
        // Last write wins on the user-type namespace
        assert_eq!(
            seq.draft().get(StepId::UserType).unwrap()["account_type"],
            "customer"
        );
    }

    #[test]
    fn test_reset_clears_draft_and_returns_to_start() {
        let mut seq = StepSequencer::new();
        seq.advance(user_type("producer"));
        seq.advance(json!({"full_name": "Ahmed"}));
        assert!(!seq.draft().is_empty());

        seq.reset();
        assert_eq!(seq.position(), 0);
        assert!(seq.draft().is_empty());
    }
}
