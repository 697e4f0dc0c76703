//! `selal register` command - multi-step account registration wizard
//!
//! Drives the step sequencer through user-type selection, personal
//! information, phone verification, subscription requirements (producers
//! only), and payment. Interactive mode prompts each step; batch mode
//! builds the same payloads from flags so the flow works without a TTY.
//! No backend is connected in this build - the completed draft is logged
//! to the console and held by the session provider only.

use console::style;
use miette::{IntoDiagnostic, Result};
use serde_json::{json, Value};

use crate::cli::helpers::format_money;
use crate::cli::GlobalOpts;
use crate::core::config::Config;
use crate::core::i18n::Catalog;
use crate::core::otp::{MockOtpService, OtpService};
use crate::core::pricing;
use crate::core::provider::{DataProvider, SessionProvider};
use crate::core::sequencer::{StepId, StepSequencer};
use crate::core::identity::{EntityId, EntityPrefix};
use crate::entities::account::{AccountType, PersonalInfo, Profile};
use crate::entities::boat::{BoatConfig, BoxSize, FleetConfig};
use crate::entities::payment::{PaymentInfo, PaymentMethod};
use crate::entities::subscription::{BillingCycle, Subscription};
use crate::forms::{FormValidator, Nav, StepPrompter};

#[derive(clap::Args, Debug)]
pub struct RegisterArgs {
    /// Use the interactive wizard
    #[arg(long, short = 'i')]
    pub interactive: bool,

    /// Account type (producer/wholesaler/logistics/customer)
    #[arg(long, short = 't')]
    pub account_type: Option<AccountType>,

    /// Full legal name
    #[arg(long)]
    pub full_name: Option<String>,

    /// Egyptian mobile number (01XXXXXXXXX)
    #[arg(long)]
    pub phone: Option<String>,

    /// 14-digit national ID
    #[arg(long)]
    pub national_id: Option<String>,

    /// Company or boat owner name
    #[arg(long)]
    pub company: Option<String>,

    /// Accept the terms and conditions
    #[arg(long)]
    pub agree_terms: bool,

    /// Boat entry NAME:REGISTRATION:CAPACITY:BOXSIZE (repeatable, producers)
    #[arg(long = "boat", value_name = "SPEC")]
    pub boats: Vec<String>,

    /// Billing cycle (monthly/quarterly/annual)
    #[arg(long)]
    pub plan: Option<BillingCycle>,

    /// Payment method (bank/cash/instapay)
    #[arg(long)]
    pub payment_method: Option<PaymentMethod>,

    /// Payment date (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub payment_date: Option<String>,

    /// Transaction reference
    #[arg(long)]
    pub payment_reference: Option<String>,

    /// Path to a receipt image
    #[arg(long)]
    pub receipt: Option<String>,
}

pub fn run(args: RegisterArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let catalog = Catalog::for_locale(config.locale());
    let currency = config.currency();
    let mut provider = SessionProvider::new();

    let sequencer = if args.interactive {
        run_interactive(&catalog, &currency)?
    } else {
        run_batch(&args)?
    };

    finish(sequencer, &mut provider, &catalog, &currency, global)
}

/// Batch flow: build each step's payload from flags and advance through
/// the same validation gate the interactive wizard uses.
fn run_batch(args: &RegisterArgs) -> Result<StepSequencer> {
    let account = args.account_type.ok_or_else(|| {
        miette::miette!(
            help = "pass --account-type, or run `selal register --interactive`",
            "Account type is required"
        )
    })?;

    let validator = FormValidator::new();
    let mut sequencer = StepSequencer::new();
    let mut otp = MockOtpService::new();

    while !sequencer.is_terminal() {
        let step = sequencer.current_step();
        let payload = batch_payload(step, account, args, &mut otp)?;
        validator.validate(step, &payload)?;
        sequencer.advance(payload);
    }

    Ok(sequencer)
}

fn batch_payload(
    step: StepId,
    account: AccountType,
    args: &RegisterArgs,
    otp: &mut MockOtpService,
) -> Result<Value> {
    let payload = match step {
        StepId::UserType => json!({ "account_type": account.to_string() }),

        StepId::PersonalInfo => json!({
            "full_name": args.full_name.clone().unwrap_or_default(),
            "phone": args.phone.clone().unwrap_or_default(),
            "national_id": args.national_id.clone().unwrap_or_default(),
            "company_name": args.company.clone().unwrap_or_default(),
            "agree_terms": args.agree_terms,
        }),

        // The mocked exchange always succeeds without a TTY: the code the
        // service "sent" is fed straight back
        StepId::Otp => {
            let code = otp.send(args.phone.as_deref().unwrap_or_default());
            json!({ "code": code })
        }

        StepId::SubscriptionRequirements => {
            let boats = args
                .boats
                .iter()
                .map(|spec| parse_boat_spec(spec))
                .collect::<Result<Vec<_>>>()?;
            let fleet = FleetConfig {
                number_of_boats: boats.len(),
                boats,
                plan: args.plan.unwrap_or_default(),
            };
            serde_json::to_value(&fleet).into_diagnostic()?
        }

        StepId::Payment => {
            let date = args
                .payment_date
                .clone()
                .unwrap_or_else(|| chrono::Local::now().date_naive().to_string());
            let mut payload = json!({
                "method": args.payment_method.unwrap_or_default().to_string(),
                "date": date,
            });
            if let Some(reference) = &args.payment_reference {
                payload["reference"] = json!(reference);
            }
            if let Some(receipt) = &args.receipt {
                payload["receipt"] = json!(receipt);
            }
            payload
        }

        StepId::Success => json!({}),
    };
    Ok(payload)
}

/// Parse a NAME:REGISTRATION:CAPACITY:BOXSIZE boat spec
fn parse_boat_spec(spec: &str) -> Result<BoatConfig> {
    let parts: Vec<&str> = spec.split(':').collect();
    if parts.len() != 4 {
        return Err(miette::miette!(
            help = "example: --boat \"Sea Explorer:EG-2024-001:150:20kg\"",
            "Invalid boat spec '{}': expected NAME:REGISTRATION:CAPACITY:BOXSIZE",
            spec
        ));
    }
    let capacity: u32 = parts[2]
        .trim()
        .parse()
        .map_err(|_| miette::miette!("Invalid boat capacity '{}' in spec '{}'", parts[2], spec))?;
    let box_size: BoxSize = parts[3]
        .trim()
        .parse()
        .map_err(|e: String| miette::miette!("{}", e))?;
    Ok(BoatConfig {
        name: parts[0].trim().to_string(),
        registration_number: parts[1].trim().to_string(),
        capacity,
        box_size,
    })
}

/// Interactive flow: prompt each step, re-prompting on validation
/// failure, with Back navigation that re-enters earlier steps without
/// losing anything already typed.
fn run_interactive(catalog: &Catalog, currency: &str) -> Result<StepSequencer> {
    let prompter = StepPrompter::new(Catalog::for_locale(catalog.locale()), currency.to_string());
    let validator = FormValidator::new();
    let mut sequencer = StepSequencer::new();
    let mut otp = MockOtpService::new();

    while !sequencer.is_terminal() {
        if sequencer.position() > 0 && prompter.nav(false)? == Nav::Back {
            sequencer.retreat();
            continue;
        }

        let step = sequencer.current_step();
        prompter.heading(step);

        let payload = match step {
            StepId::UserType => prompter.user_type()?,
            StepId::PersonalInfo => {
                prompter.personal_info(sequencer.draft().decode(StepId::PersonalInfo))?
            }
            StepId::Otp => {
                let phone = sequencer
                    .draft()
                    .decode::<PersonalInfo>(StepId::PersonalInfo)
                    .map(|p| p.phone)
                    .unwrap_or_default();
                let code = otp.send(&phone);
                prompter.otp(&phone, &code)?
            }
            StepId::SubscriptionRequirements => prompter.subscription_requirements(
                sequencer.draft().decode(StepId::SubscriptionRequirements),
            )?,
            StepId::Payment => prompter.payment(sequencer.draft().decode(StepId::Payment))?,
            // is_terminal() guards the loop
            StepId::Success => break,
        };

        if step == StepId::Otp {
            let entered = payload.get("code").and_then(|c| c.as_str()).unwrap_or("");
            if !otp.verify(entered) {
                println!(
                    "{} Verification failed - a new code will be sent",
                    style("!").yellow()
                );
                continue;
            }
        }

        match validator.validate(step, &payload) {
            Ok(()) => sequencer.advance(payload),
            Err(err) => {
                println!("{} {}", style("!").yellow(), err);
                for issue in err.issues() {
                    println!("  {} {}", style("·").dim(), issue);
                }
            }
        }
    }

    Ok(sequencer)
}

/// Terminal step: show the success card, log the submission, and hand
/// the profile to the session provider.
fn finish(
    sequencer: StepSequencer,
    provider: &mut dyn DataProvider,
    catalog: &Catalog,
    currency: &str,
    global: &GlobalOpts,
) -> Result<()> {
    let draft = sequencer.draft();
    let account = draft
        .get(StepId::UserType)
        .and_then(|v| v.get("account_type"))
        .and_then(|v| v.as_str())
        .and_then(|s| s.parse::<AccountType>().ok())
        .unwrap_or(AccountType::Customer);
    let personal: PersonalInfo = draft.decode(StepId::PersonalInfo).unwrap_or_default();
    let fleet: Option<FleetConfig> = draft.decode(StepId::SubscriptionRequirements);
    let payment: Option<PaymentInfo> = draft.decode(StepId::Payment);

    println!();
    println!(
        "{} {}",
        style("✓").green(),
        style(catalog.text("wizard.success.title")).bold()
    );
    let blurb = if account.requires_subscription() {
        catalog.text("wizard.success.producer")
    } else {
        catalog.text("wizard.success.other")
    };
    println!("{}", style(blurb).dim());
    println!();
    println!(
        "  {}: {}",
        catalog.text("summary.account_type"),
        account.label()
    );
    println!(
        "  {}: {}",
        catalog.text("summary.phone"),
        personal.phone_international()
    );

    if let Some(fleet) = &fleet {
        println!(
            "  {}: {} plan",
            catalog.text("summary.subscription"),
            fleet.plan
        );

        let quote = pricing::quote(&fleet.boats, fleet.plan);
        println!();
        println!("{}", style(catalog.text("pricing.summary")).bold());
        println!(
            "  {}: {} {}",
            catalog.text("pricing.total_capacity"),
            quote.total_capacity,
            catalog.text("pricing.boxes")
        );
        println!(
            "  {}: {}",
            catalog.text("pricing.base_rate"),
            format_money(quote.monthly_base_cost, currency)
        );
        println!(
            "  {}: {}",
            style(catalog.text("pricing.total")).bold(),
            format_money(quote.total(fleet.plan), currency)
        );
    }

    let subscription = fleet.as_ref().map(|fleet| Subscription {
        plan: fleet.plan,
        active_since: payment
            .as_ref()
            .map(|p| p.date)
            .unwrap_or_else(|| chrono::Local::now().date_naive()),
    });
    provider.set_profile(Profile {
        id: EntityId::new(EntityPrefix::Acct),
        account_type: account,
        personal,
        subscription,
        created: chrono::Utc::now(),
    });

    if !global.quiet {
        println!();
        println!("{}", style("Submitted registration payload:").dim());
        let snapshot = draft.snapshot();
        println!(
            "{}",
            serde_json::to_string_pretty(&Value::Object(snapshot)).into_diagnostic()?
        );
        println!(
            "{}",
            style("No backend is connected in this build; the submission was logged only.").dim()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_boat_spec() {
        let boat = parse_boat_spec("Sea Explorer:EG-2024-001:150:20kg").unwrap();
        assert_eq!(boat.name, "Sea Explorer");
        assert_eq!(boat.registration_number, "EG-2024-001");
        assert_eq!(boat.capacity, 150);
        assert_eq!(boat.box_size, BoxSize::Kg20);
    }

    #[test]
    fn test_parse_boat_spec_rejects_bad_shape() {
        assert!(parse_boat_spec("just-a-name").is_err());
        assert!(parse_boat_spec("Name:EG-1:abc:20kg").is_err());
        assert!(parse_boat_spec("Name:EG-1:100:30kg").is_err());
    }
}
