//! `selal profile` command - profile and subscription management

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::format_money;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::config::Config;
use crate::core::pricing;
use crate::core::provider::{DataProvider, SessionProvider};
use crate::entities::boat::{BoatConfig, BoatStatus};
use crate::entities::subscription::BillingCycle;

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Show the signed-in profile and subscription
    Show,

    /// Edit profile fields
    Edit(EditArgs),

    /// Switch the subscription billing cycle
    Plan(PlanArgs),
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Full legal name
    #[arg(long)]
    pub full_name: Option<String>,

    /// Egyptian mobile number (01XXXXXXXXX)
    #[arg(long)]
    pub phone: Option<String>,

    /// Company or boat owner name
    #[arg(long)]
    pub company: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct PlanArgs {
    /// New billing cycle (monthly/quarterly/annual)
    pub plan: BillingCycle,
}

pub fn run(cmd: ProfileCommands, global: &GlobalOpts) -> Result<()> {
    let mut provider = SessionProvider::seeded();
    match cmd {
        ProfileCommands::Show => run_show(&provider, global),
        ProfileCommands::Edit(args) => run_edit(args, &mut provider, global),
        ProfileCommands::Plan(args) => run_plan(args, &mut provider, global),
    }
}

/// Active-fleet capacities expressed as wizard boat entries, so the
/// subscription quote runs through the same pricing function
fn fleet_configs(provider: &dyn DataProvider) -> Vec<BoatConfig> {
    provider
        .boats()
        .into_iter()
        .filter(|b| b.status == BoatStatus::Active)
        .map(|b| BoatConfig {
            name: b.name,
            registration_number: b.registration_number,
            capacity: b.capacity,
            box_size: b.box_size,
        })
        .collect()
}

fn run_show(provider: &dyn DataProvider, global: &GlobalOpts) -> Result<()> {
    let profile = provider.profile().ok_or_else(|| {
        miette::miette!(
            help = "create one with `selal register`",
            "No profile is registered"
        )
    })?;

    let config = Config::load();
    match global.resolve_format(&config) {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&profile).into_diagnostic()?
            );
            return Ok(());
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&profile).into_diagnostic()?);
            return Ok(());
        }
        _ => {}
    }

    let currency = config.currency();

    println!("{}", style(&profile.personal.full_name).bold());
    println!("  Account Type: {}", profile.account_type.label());
    println!("  Company: {}", profile.personal.company_name);
    println!("  Phone: {}", profile.personal.phone_international());
    println!("  National ID: {}", profile.personal.national_id);
    println!("  Member since: {}", profile.created.format("%Y-%m-%d"));

    if let Some(subscription) = &profile.subscription {
        let fleet = fleet_configs(provider);
        let quote = pricing::quote(&fleet, subscription.plan);
        println!();
        println!("{}", style("Subscription").bold());
        println!(
            "  Plan: {} (active since {})",
            subscription.plan.label(),
            subscription.active_since
        );
        println!("  Fleet capacity: {} boxes", quote.total_capacity);
        println!(
            "  Base monthly rate: {}",
            format_money(quote.monthly_base_cost, &currency)
        );
        println!(
            "  {}: {} ({})",
            style("Cycle total").bold(),
            format_money(quote.total(subscription.plan), &currency),
            subscription.plan.period_label()
        );
    }

    Ok(())
}

fn run_edit(args: EditArgs, provider: &mut SessionProvider, global: &GlobalOpts) -> Result<()> {
    let mut profile = provider.profile().ok_or_else(|| {
        miette::miette!(
            help = "create one with `selal register`",
            "No profile is registered"
        )
    })?;

    if let Some(full_name) = args.full_name {
        profile.personal.full_name = full_name;
    }
    if let Some(phone) = args.phone {
        if !(phone.len() == 11 && phone.starts_with("01") && phone.chars().all(|c| c.is_ascii_digit()))
        {
            return Err(miette::miette!(
                "Invalid Egyptian phone number '{}' (expected 01XXXXXXXXX)",
                phone
            ));
        }
        profile.personal.phone = phone;
    }
    if let Some(company) = args.company {
        profile.personal.company_name = company;
    }

    println!(
        "{} Updated profile for {}",
        style("✓").green(),
        style(&profile.personal.full_name).cyan()
    );
    provider.set_profile(profile);

    if !global.quiet {
        println!(
            "{}",
            style("No backend is connected in this build; the change was logged only.").dim()
        );
    }
    Ok(())
}

fn run_plan(args: PlanArgs, provider: &mut SessionProvider, global: &GlobalOpts) -> Result<()> {
    let mut profile = provider.profile().ok_or_else(|| {
        miette::miette!(
            help = "create one with `selal register`",
            "No profile is registered"
        )
    })?;
    let Some(subscription) = profile.subscription.as_mut() else {
        return Err(miette::miette!(
            help = "only producer accounts carry a subscription",
            "This account has no subscription"
        ));
    };

    subscription.plan = args.plan;
    let plan = subscription.plan;

    let config = Config::load();
    let currency = config.currency();
    let fleet = fleet_configs(provider);
    let quote = pricing::quote(&fleet, plan);

    println!(
        "{} Switched subscription to the {} plan",
        style("✓").green(),
        style(plan.label()).cyan()
    );
    println!(
        "  Fleet capacity: {} boxes, cycle total {} ({})",
        quote.total_capacity,
        format_money(quote.total(plan), &currency),
        plan.period_label()
    );

    provider.set_profile(profile);
    if !global.quiet {
        println!(
            "{}",
            style("No backend is connected in this build; the change was logged only.").dim()
        );
    }
    Ok(())
}
