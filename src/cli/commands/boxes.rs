//! `selal box` command - box request ordering

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::helpers::{format_money, format_short_id};
use crate::cli::GlobalOpts;
use crate::core::config::Config;
use crate::core::identity::{EntityId, EntityPrefix};
use crate::core::provider::{DataProvider, SessionProvider};
use crate::entities::activity::{Activity, ActivityKind, ActivityStatus};
use crate::entities::box_request::{BoxRequest, BoxType, TIME_SLOTS};

#[derive(Subcommand, Debug)]
pub enum BoxCommands {
    /// Place a box request against a boat
    Request(RequestArgs),

    /// List the orderable box types
    Types,

    /// List the delivery time slots
    Slots,
}

#[derive(clap::Args, Debug)]
pub struct RequestArgs {
    /// Boat ID or name fragment
    #[arg(long)]
    pub boat: String,

    /// Box type (standard/premium)
    #[arg(long = "type", short = 't', default_value = "standard")]
    pub box_type: BoxType,

    /// Number of boxes
    #[arg(long, short = 'n', default_value_t = 1)]
    pub quantity: u32,

    /// Delivery address
    #[arg(long)]
    pub address: String,

    /// Delivery date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// Delivery time slot, 1-9 (see `selal box slots`)
    #[arg(long, default_value_t = 1)]
    pub slot: usize,

    /// Special handling instructions
    #[arg(long)]
    pub instructions: Option<String>,
}

pub fn run(cmd: BoxCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        BoxCommands::Request(args) => run_request(args, global),
        BoxCommands::Types => run_types(),
        BoxCommands::Slots => run_slots(),
    }
}

fn run_request(args: RequestArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let currency = config.currency();
    let mut provider = SessionProvider::seeded();

    if args.quantity < 1 {
        return Err(miette::miette!("Quantity must be at least 1"));
    }
    let slot = TIME_SLOTS
        .get(args.slot.wrapping_sub(1))
        .ok_or_else(|| {
            miette::miette!(
                help = "list slots with `selal box slots`",
                "Delivery slot must be between 1 and {}",
                TIME_SLOTS.len()
            )
        })?;

    let boat = provider.find_boat(&args.boat).ok_or_else(|| {
        miette::miette!(
            help = "list boats with `selal boat list`",
            "No boat matches '{}'",
            args.boat
        )
    })?;

    // Advisory capacity check: the request is refused, never treated as
    // a fatal error - the user corrects the quantity and resubmits
    let available = boat.free_capacity();
    if args.quantity > available {
        println!(
            "{} Quantity exceeds available capacity ({} boxes available on {})",
            style("!").yellow(),
            available,
            boat.name
        );
        return Err(miette::miette!(
            help = "reduce the quantity or pick another boat",
            "Cannot request {} boxes: {} has {} available",
            args.quantity,
            boat.name,
            available
        ));
    }

    let date = chrono::NaiveDate::parse_from_str(&args.date, "%Y-%m-%d")
        .map_err(|_| miette::miette!("Invalid delivery date '{}': expected YYYY-MM-DD", args.date))?;

    let request = BoxRequest {
        id: EntityId::new(EntityPrefix::Boxr),
        boat_id: boat.id.clone(),
        box_type: args.box_type,
        quantity: args.quantity,
        delivery_address: args.address,
        delivery_date: date,
        delivery_time: slot.to_string(),
        special_instructions: args.instructions,
    };

    println!(
        "{} Box request {} placed",
        style("✓").green(),
        format_short_id(&request.id)
    );
    println!();
    println!("{}", style("Order Summary").bold());
    println!(
        "  {} - {} ({} each)",
        request.box_type.label(),
        request.box_type.capacity_label(),
        format_money(request.box_type.unit_price(), &currency)
    );
    println!("  Boat: {} ({})", boat.name, boat.registration_number);
    println!("  Quantity: {}", request.quantity);
    println!("  Delivery: {} at {}", request.delivery_date, request.delivery_time);
    println!(
        "  {}: {}",
        style("Total").bold(),
        style(format_money(request.total(), &currency)).bold()
    );

    provider.record_activity(Activity {
        id: EntityId::new(EntityPrefix::Actv),
        kind: ActivityKind::BoxRequest,
        description: format!(
            "New box request - {} {} boxes for {}",
            request.quantity,
            request.box_type.label(),
            boat.name
        ),
        timestamp: chrono::Utc::now(),
        status: ActivityStatus::Pending,
    });
    provider.record_box_request(request);

    if !global.quiet {
        println!();
        println!(
            "{}",
            style("No backend is connected in this build; the request was logged only.").dim()
        );
    }
    Ok(())
}

fn run_types() -> Result<()> {
    let config = Config::load();
    let currency = config.currency();

    println!(
        "{:<10} {:<12} {:<8} {:<10}",
        style("TYPE").bold(),
        style("NAME").bold(),
        style("SIZE").bold(),
        style("PRICE").bold()
    );
    println!("{}", "-".repeat(42));
    for box_type in BoxType::all() {
        println!(
            "{:<10} {:<12} {:<8} {:<10}",
            box_type.to_string(),
            box_type.label(),
            box_type.capacity_label(),
            format_money(box_type.unit_price(), &currency)
        );
    }
    Ok(())
}

fn run_slots() -> Result<()> {
    for (index, slot) in TIME_SLOTS.iter().enumerate() {
        println!("{:>2}  {}", index + 1, slot);
    }
    Ok(())
}
