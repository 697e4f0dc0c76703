//! Interactive step forms built on dialoguer
//!
//! Each method collects one wizard step's payload. Prompts only gather
//! input; validation stays with [`crate::forms::FormValidator`], and the
//! register command re-prompts a step whose payload fails it.

use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use miette::{IntoDiagnostic, Result};
use serde_json::{json, Value};

use crate::core::i18n::Catalog;
use crate::core::pricing;
use crate::core::sequencer::StepId;
use crate::entities::account::{AccountType, PersonalInfo};
use crate::entities::boat::{BoxSize, FleetConfig};
use crate::entities::payment::{PaymentInfo, PaymentMethod};
use crate::entities::subscription::BillingCycle;

/// Navigation choice offered after a completed step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Continue,
    Back,
}

/// Interactive prompt set for the registration wizard
pub struct StepPrompter {
    theme: ColorfulTheme,
    catalog: Catalog,
    currency: String,
}

impl StepPrompter {
    pub fn new(catalog: Catalog, currency: String) -> Self {
        Self {
            theme: ColorfulTheme::default(),
            catalog,
            currency,
        }
    }

    /// Print the step heading and subtitle
    pub fn heading(&self, step: StepId) {
        println!();
        println!(
            "{} {}",
            style("◆").cyan(),
            style(self.catalog.text(&step.title_key())).bold()
        );
        let subtitle = self.catalog.text(&format!("wizard.{}.subtitle", step.as_str()));
        if !subtitle.starts_with("wizard.") {
            println!("{}", style(subtitle).dim());
        }
        println!("{}", style("─".repeat(50)).dim());
    }

    /// Account-type selection card
    pub fn user_type(&self) -> Result<Value> {
        let items: Vec<String> = AccountType::all()
            .iter()
            .map(|t| format!("{} - {}", t.label(), t.description()))
            .collect();

        let selection = Select::with_theme(&self.theme)
            .with_prompt("Account type")
            .items(&items)
            .default(0)
            .interact()
            .into_diagnostic()?;

        let account = AccountType::all()[selection];
        Ok(json!({ "account_type": account.to_string() }))
    }

    /// Personal-information form
    pub fn personal_info(&self, defaults: Option<PersonalInfo>) -> Result<Value> {
        let defaults = defaults.unwrap_or_default();

        let full_name: String = self
            .text_input("Full name", &defaults.full_name, false)?;
        let phone: String =
            self.text_input("Phone (01XXXXXXXXX)", &defaults.phone, false)?;
        let national_id: String =
            self.text_input("National ID (14 digits)", &defaults.national_id, false)?;
        let company_name: String =
            self.text_input("Company / boat owner name", &defaults.company_name, false)?;

        let agree_terms = Confirm::with_theme(&self.theme)
            .with_prompt("I agree to the terms and conditions")
            .default(defaults.agree_terms)
            .interact()
            .into_diagnostic()?;

        Ok(json!({
            "full_name": full_name,
            "phone": phone,
            "national_id": national_id,
            "company_name": company_name,
            "agree_terms": agree_terms,
        }))
    }

    /// Verification-code entry. The mock service surfaces the code it
    /// "sent" so the development flow is self-contained.
    pub fn otp(&self, phone: &str, sent_code: &str) -> Result<Value> {
        println!(
            "{} Verification code sent to {} {}",
            style("✓").green(),
            style(phone).cyan(),
            style(format!("(dev mock: {})", sent_code)).dim()
        );

        let code: String = Input::with_theme(&self.theme)
            .with_prompt("Verification code")
            .interact_text()
            .into_diagnostic()?;

        Ok(json!({ "code": code.trim() }))
    }

    /// Fleet configuration and plan selection with live pricing
    pub fn subscription_requirements(&self, defaults: Option<FleetConfig>) -> Result<Value> {
        let mut fleet = defaults.unwrap_or_default();

        let counts: Vec<String> = (1..=10)
            .map(|n| format!("{} {}", n, if n == 1 { "Boat" } else { "Boats" }))
            .collect();
        let count = Select::with_theme(&self.theme)
            .with_prompt("Number of boats")
            .items(&counts)
            .default(fleet.number_of_boats.saturating_sub(1))
            .interact()
            .into_diagnostic()?
            + 1;
        fleet.set_number_of_boats(count);

        for index in 0..fleet.number_of_boats {
            println!();
            println!("{}", style(format!("Boat {} Details", index + 1)).bold());

            let entry = &mut fleet.boats[index];
            entry.name = prompt_text(&self.theme, "Boat name", &entry.name, false)?;
            entry.registration_number = prompt_text(
                &self.theme,
                "Registration number (e.g., EG-2024-001)",
                &entry.registration_number,
                false,
            )?;

            let capacity: String = Input::with_theme(&self.theme)
                .with_prompt("Boat capacity (boxes)")
                .default(entry.capacity.to_string())
                .interact_text()
                .into_diagnostic()?;
            entry.capacity = capacity.trim().parse().unwrap_or(entry.capacity);

            let sizes = [BoxSize::Kg20, BoxSize::Kg25];
            let size_idx = Select::with_theme(&self.theme)
                .with_prompt("Primary box size")
                .items(&["20kg", "25kg"])
                .default(if entry.box_size == BoxSize::Kg25 { 1 } else { 0 })
                .interact()
                .into_diagnostic()?;
            entry.box_size = sizes[size_idx];
        }

        // Recompute the quote after every fleet edit; plan cards show the
        // whole-cycle charge per cycle
        let quote = pricing::quote(&fleet.boats, fleet.plan);
        let plans: Vec<String> = BillingCycle::all()
            .iter()
            .map(|cycle| {
                let badge = cycle
                    .discount_badge()
                    .map(|b| format!(" [{}]", b))
                    .unwrap_or_default();
                format!(
                    "{}{} - {} {:.2} ({})",
                    cycle.label(),
                    badge,
                    self.currency,
                    quote.plan_costs.get(*cycle),
                    cycle.period_label()
                )
            })
            .collect();
        let plan_idx = Select::with_theme(&self.theme)
            .with_prompt("Subscription plan")
            .items(&plans)
            .default(
                BillingCycle::all()
                    .iter()
                    .position(|c| *c == fleet.plan)
                    .unwrap_or(0),
            )
            .interact()
            .into_diagnostic()?;
        fleet.plan = BillingCycle::all()[plan_idx];

        self.print_pricing_summary(&fleet);

        serde_json::to_value(&fleet).into_diagnostic()
    }

    /// Payment-details form
    pub fn payment(&self, defaults: Option<PaymentInfo>) -> Result<Value> {
        let methods: Vec<&str> = PaymentMethod::all().iter().map(|m| m.label()).collect();
        let default_method = defaults
            .as_ref()
            .map(|p| p.method)
            .unwrap_or_default();
        let method_idx = Select::with_theme(&self.theme)
            .with_prompt("Payment method")
            .items(&methods)
            .default(
                PaymentMethod::all()
                    .iter()
                    .position(|m| *m == default_method)
                    .unwrap_or(0),
            )
            .interact()
            .into_diagnostic()?;
        let method = PaymentMethod::all()[method_idx];

        let reference: String = prompt_text(
            &self.theme,
            "Payment reference (optional)",
            defaults
                .as_ref()
                .and_then(|p| p.reference.as_deref())
                .unwrap_or(""),
            true,
        )?;

        let default_date = defaults
            .as_ref()
            .map(|p| p.date.to_string())
            .unwrap_or_else(|| chrono::Local::now().date_naive().to_string());
        let date: String = Input::with_theme(&self.theme)
            .with_prompt("Payment date (YYYY-MM-DD)")
            .default(default_date)
            .interact_text()
            .into_diagnostic()?;

        let receipt: String = prompt_text(
            &self.theme,
            "Receipt image path (optional)",
            defaults
                .as_ref()
                .and_then(|p| p.receipt.as_deref())
                .unwrap_or(""),
            true,
        )?;

        let mut payload = json!({
            "method": method.to_string(),
            "date": date.trim(),
        });
        if !reference.trim().is_empty() {
            payload["reference"] = json!(reference.trim());
        }
        if !receipt.trim().is_empty() {
            payload["receipt"] = json!(receipt.trim());
        }
        Ok(payload)
    }

    /// Post-step navigation: continue forward or go back one step
    pub fn nav(&self, at_first_step: bool) -> Result<Nav> {
        if at_first_step {
            return Ok(Nav::Continue);
        }
        let items = [
            self.catalog.text("wizard.nav.continue"),
            self.catalog.text("wizard.nav.back"),
        ];
        let selection = Select::with_theme(&self.theme)
            .with_prompt("Next")
            .items(&items)
            .default(0)
            .interact()
            .into_diagnostic()?;
        Ok(if selection == 1 { Nav::Back } else { Nav::Continue })
    }

    fn print_pricing_summary(&self, fleet: &FleetConfig) {
        let quote = pricing::quote(&fleet.boats, fleet.plan);
        println!();
        println!("{}", style(self.catalog.text("pricing.summary")).bold());
        println!(
            "  {}: {} {}",
            self.catalog.text("pricing.total_capacity"),
            quote.total_capacity,
            self.catalog.text("pricing.boxes")
        );
        println!(
            "  {}: {} {:.2}",
            self.catalog.text("pricing.base_rate"),
            self.currency,
            quote.monthly_base_cost
        );
        println!(
            "  {}: {} {:.2}",
            style(self.catalog.text("pricing.total")).bold(),
            self.currency,
            quote.total(fleet.plan)
        );
    }

    fn text_input(&self, prompt: &str, default: &str, allow_empty: bool) -> Result<String> {
        prompt_text(&self.theme, prompt, default, allow_empty)
    }
}

fn prompt_text(
    theme: &ColorfulTheme,
    prompt: &str,
    default: &str,
    allow_empty: bool,
) -> Result<String> {
    let value: String = if !default.is_empty() {
        Input::with_theme(theme)
            .with_prompt(prompt)
            .default(default.to_string())
            .allow_empty(allow_empty)
            .interact_text()
            .into_diagnostic()?
    } else {
        Input::with_theme(theme)
            .with_prompt(prompt)
            .allow_empty(allow_empty)
            .interact_text()
            .into_diagnostic()?
    };
    Ok(value)
}
