//! Subscription pricing - a pure function of fleet configuration and plan
//!
//! Pricing is recomputed on every read; there is no cache and no hidden
//! state, so identical inputs always produce identical quotes.

use serde::{Deserialize, Serialize};

use crate::entities::boat::BoatConfig;
use crate::entities::subscription::BillingCycle;

/// Currency units per box per month. Box size does not affect the rate:
/// 20kg and 25kg bill identically (fixed product decision).
pub const BASE_RATE: f64 = 2.5;

/// Whole-cycle cost for each available plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanCosts {
    pub monthly: f64,
    pub quarterly: f64,
    pub annual: f64,
}

impl PlanCosts {
    /// Cost for the given cycle
    pub fn get(&self, cycle: BillingCycle) -> f64 {
        match cycle {
            BillingCycle::Monthly => self.monthly,
            BillingCycle::Quarterly => self.quarterly,
            BillingCycle::Annual => self.annual,
        }
    }
}

/// Derived pricing for a fleet and selected plan - never stored
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingQuote {
    /// Sum of boat capacities in boxes
    pub total_capacity: u32,

    /// Undiscounted monthly cost for the whole fleet
    pub monthly_base_cost: f64,

    /// Monthly-equivalent cost under the selected plan's discount.
    /// The displayed total is always the whole-cycle cost, not this.
    pub final_monthly_cost: f64,

    /// Whole-cycle cost per plan
    pub plan_costs: PlanCosts,

    /// Discount rate of the selected plan
    pub discount: f64,
}

impl PricingQuote {
    /// Whole-cycle cost of the selected plan - the displayed total
    pub fn total(&self, plan: BillingCycle) -> f64 {
        self.plan_costs.get(plan)
    }
}

/// Compute the quote for a fleet under the selected billing cycle.
///
/// The discount applies to the whole-cycle cost before the duration
/// multiply. An empty fleet yields a zero quote.
pub fn quote(boats: &[BoatConfig], plan: BillingCycle) -> PricingQuote {
    let total_capacity: u32 = boats.iter().map(|boat| boat.capacity).sum();
    quote_for_capacity(total_capacity, plan)
}

/// Quote from a pre-summed capacity, used by the standalone `quote` command
pub fn quote_for_capacity(total_capacity: u32, plan: BillingCycle) -> PricingQuote {
    let monthly_base_cost = f64::from(total_capacity) * BASE_RATE;

    let cycle_cost = |cycle: BillingCycle| {
        monthly_base_cost * (1.0 - cycle.discount()) * f64::from(cycle.duration_months())
    };

    let plan_costs = PlanCosts {
        monthly: cycle_cost(BillingCycle::Monthly),
        quarterly: cycle_cost(BillingCycle::Quarterly),
        annual: cycle_cost(BillingCycle::Annual),
    };

    let discount = plan.discount();
    let final_monthly_cost = monthly_base_cost * (1.0 - discount);

    PricingQuote {
        total_capacity,
        monthly_base_cost,
        final_monthly_cost,
        plan_costs,
        discount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::boat::BoxSize;

    fn boat(capacity: u32, box_size: BoxSize) -> BoatConfig {
        BoatConfig {
            name: "Test".to_string(),
            registration_number: "EG-2024-001".to_string(),
            capacity,
            box_size,
        }
    }

    #[test]
    fn test_total_capacity_is_sum_of_boats() {
        let fleet = [boat(50, BoxSize::Kg20), boat(100, BoxSize::Kg25)];
        let q = quote(&fleet, BillingCycle::Monthly);
        assert_eq!(q.total_capacity, 150);
    }

    #[test]
    fn test_monthly_cost_is_capacity_times_base_rate() {
        let fleet = [boat(100, BoxSize::Kg20)];
        let q = quote(&fleet, BillingCycle::Monthly);
        assert_eq!(q.plan_costs.monthly, 100.0 * BASE_RATE);
        assert_eq!(q.final_monthly_cost, q.monthly_base_cost);
        assert_eq!(q.discount, 0.0);
    }

    #[test]
    fn test_quarterly_and_annual_formulas() {
        let fleet = [boat(100, BoxSize::Kg20)];
        let q = quote(&fleet, BillingCycle::Quarterly);
        assert_eq!(q.plan_costs.quarterly, 100.0 * 2.5 * 0.95 * 3.0);
        assert_eq!(q.plan_costs.annual, 100.0 * 2.5 * 0.85 * 12.0);
    }

    #[test]
    fn test_spec_scenario_annual_fleet() {
        let fleet = [boat(50, BoxSize::Kg20), boat(100, BoxSize::Kg25)];
        let q = quote(&fleet, BillingCycle::Annual);
        assert_eq!(q.total_capacity, 150);
        assert_eq!(q.monthly_base_cost, 375.0);
        assert_eq!(q.plan_costs.annual, 375.0 * 0.85 * 12.0);
        assert_eq!(q.plan_costs.annual, 3825.0);
        assert_eq!(q.total(BillingCycle::Annual), 3825.0);
    }

    #[test]
    fn test_empty_fleet_quotes_zero() {
        for plan in BillingCycle::all() {
            let q = quote(&[], *plan);
            assert_eq!(q.total_capacity, 0);
            assert_eq!(q.monthly_base_cost, 0.0);
            assert_eq!(q.plan_costs.monthly, 0.0);
            assert_eq!(q.plan_costs.quarterly, 0.0);
            assert_eq!(q.plan_costs.annual, 0.0);
        }
    }

    #[test]
    fn test_box_size_does_not_affect_price() {
        let q20 = quote(&[boat(200, BoxSize::Kg20)], BillingCycle::Annual);
        let q25 = quote(&[boat(200, BoxSize::Kg25)], BillingCycle::Annual);
        assert_eq!(q20, q25);
    }

    #[test]
    fn test_quote_is_idempotent() {
        let fleet = [boat(73, BoxSize::Kg20), boat(210, BoxSize::Kg25)];
        let first = quote(&fleet, BillingCycle::Quarterly);
        let second = quote(&fleet, BillingCycle::Quarterly);
        assert_eq!(first, second);
    }

    #[test]
    fn test_final_monthly_cost_uses_selected_discount() {
        let q = quote(&[boat(100, BoxSize::Kg20)], BillingCycle::Annual);
        assert_eq!(q.final_monthly_cost, 250.0 * 0.85);
        // Displayed total stays the whole-cycle charge
        assert_eq!(q.total(BillingCycle::Annual), 250.0 * 0.85 * 12.0);
    }
}
