//! `selal boat` command - fleet management

use clap::{Subcommand, ValueEnum};
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{escape_csv, format_short_id, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::config::Config;
use crate::core::identity::{EntityId, EntityPrefix};
use crate::core::provider::{DataProvider, SessionProvider};
use crate::entities::activity::{Activity, ActivityKind, ActivityStatus};
use crate::entities::boat::{Boat, BoatStatus, BoxSize};

#[derive(Subcommand, Debug)]
pub enum BoatCommands {
    /// List boats with filtering
    List(ListArgs),

    /// Show a boat's details
    Show(ShowArgs),

    /// Add a boat to the fleet
    Add(AddArgs),

    /// Edit a boat
    Edit(EditArgs),

    /// Retire a boat
    Retire(RetireArgs),
}

/// Status filter
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusFilter {
    Active,
    Maintenance,
    Retired,
    /// All statuses
    All,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by status
    #[arg(long, short = 's', default_value = "all")]
    pub status: StatusFilter,

    /// Search in name and captain (case-insensitive substring)
    #[arg(long)]
    pub search: Option<String>,

    /// Limit output to N items
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show count only, not the items
    #[arg(long)]
    pub count: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Boat ID or name fragment
    pub boat: String,
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Boat name
    #[arg(long)]
    pub name: Option<String>,

    /// Official registration number
    #[arg(long)]
    pub registration: Option<String>,

    /// Captain's name
    #[arg(long)]
    pub captain: Option<String>,

    /// Capacity in boxes (1-1000)
    #[arg(long)]
    pub capacity: Option<u32>,

    /// Primary box size
    #[arg(long, default_value = "20kg")]
    pub box_size: BoxSize,

    /// Use interactive prompts to fill in fields
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Boat ID or name fragment
    pub boat: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub registration: Option<String>,

    #[arg(long)]
    pub captain: Option<String>,

    /// Capacity in boxes (1-1000)
    #[arg(long)]
    pub capacity: Option<u32>,

    #[arg(long)]
    pub box_size: Option<BoxSize>,

    /// Operational status
    #[arg(long)]
    pub status: Option<BoatStatus>,
}

#[derive(clap::Args, Debug)]
pub struct RetireArgs {
    /// Boat ID or name fragment
    pub boat: String,
}

pub fn run(cmd: BoatCommands, global: &GlobalOpts) -> Result<()> {
    let mut provider = SessionProvider::seeded();
    match cmd {
        BoatCommands::List(args) => run_list(args, &provider, global),
        BoatCommands::Show(args) => run_show(args, &provider, global),
        BoatCommands::Add(args) => run_add(args, &mut provider, global),
        BoatCommands::Edit(args) => run_edit(args, &mut provider, global),
        BoatCommands::Retire(args) => run_retire(args, &mut provider, global),
    }
}

fn run_list(args: ListArgs, provider: &dyn DataProvider, global: &GlobalOpts) -> Result<()> {
    let mut boats = provider.boats();

    boats.retain(|b| match args.status {
        StatusFilter::Active => b.status == BoatStatus::Active,
        StatusFilter::Maintenance => b.status == BoatStatus::Maintenance,
        StatusFilter::Retired => b.status == BoatStatus::Retired,
        StatusFilter::All => true,
    });
    if let Some(search) = &args.search {
        let needle = search.to_lowercase();
        boats.retain(|b| {
            b.name.to_lowercase().contains(&needle)
                || b.captain_name.to_lowercase().contains(&needle)
        });
    }
    if let Some(limit) = args.limit {
        boats.truncate(limit);
    }

    if args.count {
        println!("{}", boats.len());
        return Ok(());
    }

    let format = global.resolve_format(&Config::load());

    if boats.is_empty() {
        match format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Yaml => println!("[]"),
            _ => {
                println!("No boats found.");
                println!();
                println!("Add one with: {}", style("selal boat add").yellow());
            }
        }
        return Ok(());
    }

    let format = match format {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&boats).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&boats).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Csv => {
            println!("id,name,registration,captain,capacity,box_size,status,utilization");
            for boat in &boats {
                println!(
                    "{},{},{},{},{},{},{},{}",
                    boat.id,
                    escape_csv(&boat.name),
                    boat.registration_number,
                    escape_csv(&boat.captain_name),
                    boat.capacity,
                    boat.box_size,
                    boat.status,
                    boat.current_utilization
                        .map(|u| u.to_string())
                        .unwrap_or_default()
                );
            }
        }
        OutputFormat::Tsv => {
            println!(
                "{:<16} {:<22} {:<12} {:<10} {:<8} {:<12} {:<6}",
                style("ID").bold(),
                style("NAME").bold(),
                style("REG").bold(),
                style("CAPACITY").bold(),
                style("BOX").bold(),
                style("STATUS").bold(),
                style("UTIL").bold()
            );
            println!("{}", "-".repeat(92));

            for boat in &boats {
                println!(
                    "{:<16} {:<22} {:<12} {:<10} {:<8} {:<12} {:<6}",
                    format_short_id(&boat.id),
                    truncate_str(&boat.name, 20),
                    boat.registration_number,
                    boat.capacity,
                    boat.box_size,
                    boat.status,
                    boat.current_utilization
                        .map(|u| format!("{}%", u))
                        .unwrap_or_else(|| "-".to_string())
                );
            }

            let active = boats
                .iter()
                .filter(|b| b.status == BoatStatus::Active)
                .count();
            println!();
            println!(
                "{} boat(s) found, {} active",
                style(boats.len()).cyan(),
                style(active).green()
            );
        }
        OutputFormat::Id => {
            for boat in &boats {
                println!("{}", boat.id);
            }
        }
        OutputFormat::Md => {
            println!("| ID | Name | Registration | Capacity | Box | Status |");
            println!("|---|---|---|---|---|---|");
            for boat in &boats {
                println!(
                    "| {} | {} | {} | {} | {} | {} |",
                    format_short_id(&boat.id),
                    boat.name,
                    boat.registration_number,
                    boat.capacity,
                    boat.box_size,
                    boat.status
                );
            }
        }
        OutputFormat::Auto => unreachable!(),
    }

    Ok(())
}

fn run_show(args: ShowArgs, provider: &dyn DataProvider, global: &GlobalOpts) -> Result<()> {
    let boat = find_boat(provider, &args.boat)?;

    match global.resolve_format(&Config::load()) {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&boat).into_diagnostic()?);
        }
        _ => {
            let yaml = serde_yml::to_string(&boat).into_diagnostic()?;
            print!("{}", yaml);
        }
    }
    Ok(())
}

fn run_add(args: AddArgs, provider: &mut SessionProvider, global: &GlobalOpts) -> Result<()> {
    let (name, registration, captain, capacity, box_size) = if args.interactive {
        prompt_boat_fields(&args)?
    } else {
        let missing = || {
            miette::miette!(
                help = "pass --name, --registration, --captain and --capacity, or use --interactive",
                "Missing boat details"
            )
        };
        (
            args.name.clone().ok_or_else(missing)?,
            args.registration.clone().ok_or_else(missing)?,
            args.captain.clone().ok_or_else(missing)?,
            args.capacity.ok_or_else(missing)?,
            args.box_size,
        )
    };

    if capacity == 0 || capacity > 1000 {
        return Err(miette::miette!(
            help = "typical fleet boats hold 50-500 boxes",
            "Boat capacity must be between 1 and 1000 boxes"
        ));
    }

    let boat = Boat {
        id: EntityId::new(EntityPrefix::Boat),
        name,
        registration_number: registration,
        captain_name: captain,
        capacity,
        box_size,
        status: BoatStatus::Active,
        last_maintenance_date: None,
        current_utilization: Some(0),
        total_boxes_used: Some(0),
        available_capacity: Some(capacity),
    };

    provider.record_activity(Activity {
        id: EntityId::new(EntityPrefix::Actv),
        kind: ActivityKind::BoatAdded,
        description: format!("New boat added to fleet - {}", boat.name),
        timestamp: chrono::Utc::now(),
        status: ActivityStatus::Completed,
    });

    println!(
        "{} Added boat {} ({})",
        style("✓").green(),
        style(&boat.name).cyan(),
        format_short_id(&boat.id)
    );
    provider.add_boat(boat);

    session_note(global);
    Ok(())
}

fn run_edit(args: EditArgs, provider: &mut SessionProvider, global: &GlobalOpts) -> Result<()> {
    let mut boat = find_boat(provider, &args.boat)?;

    if let Some(name) = args.name {
        boat.name = name;
    }
    if let Some(registration) = args.registration {
        boat.registration_number = registration;
    }
    if let Some(captain) = args.captain {
        boat.captain_name = captain;
    }
    if let Some(capacity) = args.capacity {
        if capacity == 0 || capacity > 1000 {
            return Err(miette::miette!(
                "Boat capacity must be between 1 and 1000 boxes"
            ));
        }
        boat.capacity = capacity;
    }
    if let Some(box_size) = args.box_size {
        boat.box_size = box_size;
    }
    if let Some(status) = args.status {
        boat.status = status;
    }

    println!(
        "{} Updated boat {}",
        style("✓").green(),
        style(&boat.name).cyan()
    );
    let yaml = serde_yml::to_string(&boat).into_diagnostic()?;
    print!("{}", yaml);
    provider.update_boat(boat);

    session_note(global);
    Ok(())
}

fn run_retire(args: RetireArgs, provider: &mut SessionProvider, global: &GlobalOpts) -> Result<()> {
    let mut boat = find_boat(provider, &args.boat)?;
    boat.status = BoatStatus::Retired;
    println!(
        "{} Retired boat {}",
        style("✓").green(),
        style(&boat.name).cyan()
    );
    provider.update_boat(boat);

    session_note(global);
    Ok(())
}

/// Interactive prompt set for `boat add -i`
fn prompt_boat_fields(args: &AddArgs) -> Result<(String, String, String, u32, BoxSize)> {
    use dialoguer::{theme::ColorfulTheme, Input, Select};

    let theme = ColorfulTheme::default();
    let name: String = Input::with_theme(&theme)
        .with_prompt("Boat name")
        .default(args.name.clone().unwrap_or_default())
        .interact_text()
        .into_diagnostic()?;
    let registration: String = Input::with_theme(&theme)
        .with_prompt("Registration number (e.g., EG-2024-001)")
        .default(args.registration.clone().unwrap_or_default())
        .interact_text()
        .into_diagnostic()?;
    let captain: String = Input::with_theme(&theme)
        .with_prompt("Captain's name")
        .default(args.captain.clone().unwrap_or_default())
        .interact_text()
        .into_diagnostic()?;
    let capacity: String = Input::with_theme(&theme)
        .with_prompt("Capacity (boxes)")
        .default(args.capacity.unwrap_or(50).to_string())
        .interact_text()
        .into_diagnostic()?;
    let capacity: u32 = capacity.trim().parse().unwrap_or(50);

    let sizes = [BoxSize::Kg20, BoxSize::Kg25];
    let size_idx = Select::with_theme(&theme)
        .with_prompt("Primary box size")
        .items(&["20kg", "25kg"])
        .default(if args.box_size == BoxSize::Kg25 { 1 } else { 0 })
        .interact()
        .into_diagnostic()?;

    Ok((name, registration, captain, capacity, sizes[size_idx]))
}

fn find_boat(provider: &dyn DataProvider, query: &str) -> Result<Boat> {
    provider.find_boat(query).ok_or_else(|| {
        miette::miette!(
            help = "list boats with `selal boat list`",
            "No boat matches '{}'",
            query
        )
    })
}

fn session_note(global: &GlobalOpts) {
    if !global.quiet {
        println!(
            "{}",
            style("No backend is connected in this build; the change was logged only.").dim()
        );
    }
}
