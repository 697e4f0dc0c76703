//! `selal quote` command - subscription pricing for a fleet

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::format_money;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::config::Config;
use crate::core::i18n::Catalog;
use crate::core::pricing;
use crate::core::provider::{DataProvider, SessionProvider};
use crate::entities::boat::BoatStatus;
use crate::entities::subscription::BillingCycle;

#[derive(clap::Args, Debug)]
pub struct QuoteArgs {
    /// Boat capacity in boxes (repeatable, one per boat)
    #[arg(long = "capacity", short = 'c', value_name = "BOXES")]
    pub capacities: Vec<u32>,

    /// Quote the registered fleet's active boats instead
    #[arg(long, conflicts_with = "capacities")]
    pub fleet: bool,

    /// Billing cycle to total
    #[arg(long, short = 'p', default_value = "monthly")]
    pub plan: BillingCycle,
}

pub fn run(args: QuoteArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let catalog = Catalog::for_locale(config.locale());
    let currency = config.currency();

    let total_capacity: u32 = if args.fleet {
        let provider = SessionProvider::seeded();
        provider
            .boats()
            .iter()
            .filter(|b| b.status == BoatStatus::Active)
            .map(|b| b.capacity)
            .sum()
    } else {
        args.capacities.iter().sum()
    };

    let quote = pricing::quote_for_capacity(total_capacity, args.plan);

    match global.resolve_format(&config) {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&quote).into_diagnostic()?);
            return Ok(());
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&quote).into_diagnostic()?);
            return Ok(());
        }
        _ => {}
    }

    println!("{}", style(catalog.text("pricing.summary")).bold());
    println!(
        "  {}: {} {}",
        catalog.text("pricing.total_capacity"),
        style(quote.total_capacity).cyan(),
        catalog.text("pricing.boxes")
    );
    println!(
        "  {}: {}",
        catalog.text("pricing.base_rate"),
        format_money(quote.monthly_base_cost, &currency)
    );
    println!();

    for cycle in BillingCycle::all() {
        let marker = if *cycle == args.plan {
            style("●").cyan()
        } else {
            style("○").dim()
        };
        let badge = cycle
            .discount_badge()
            .map(|b| format!(" {}", style(b).green()))
            .unwrap_or_default();
        println!(
            "  {} {:<10} {} ({}){}",
            marker,
            cycle.label(),
            format_money(quote.plan_costs.get(*cycle), &currency),
            cycle.period_label(),
            badge
        );
    }

    println!();
    println!(
        "  {}: {}",
        style(catalog.text("pricing.total")).bold(),
        style(format_money(quote.total(args.plan), &currency)).bold()
    );

    Ok(())
}
