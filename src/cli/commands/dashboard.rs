//! `selal dashboard` command - key metrics, activity feed, performance

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::helpers::truncate_str;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::config::Config;
use crate::core::provider::{DataProvider, SessionProvider};
use crate::entities::activity::{Activity, ActivityStatus, DashboardStats, PerformanceMetric};

#[derive(clap::Args, Debug)]
pub struct DashboardArgs {
    /// Limit the activity feed to N entries
    #[arg(long, short = 'n', default_value_t = 5)]
    pub activities: usize,
}

/// Combined dashboard document for structured output
#[derive(Serialize)]
struct DashboardView {
    stats: DashboardStats,
    recent_activities: Vec<Activity>,
    performance: Vec<PerformanceMetric>,
}

pub fn run(args: DashboardArgs, global: &GlobalOpts) -> Result<()> {
    let provider = SessionProvider::seeded();

    let mut activities = provider.activities();
    activities.truncate(args.activities);

    let view = DashboardView {
        stats: provider.stats(),
        recent_activities: activities,
        performance: provider.performance(),
    };

    match global.resolve_format(&Config::load()) {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&view).into_diagnostic()?);
            return Ok(());
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&view).into_diagnostic()?);
            return Ok(());
        }
        _ => {}
    }

    let stats = view.stats;
    println!("{}", style("Key Metrics").bold());
    println!(
        "  Active Boxes: {}    Pending Boxes: {}",
        style(stats.active_boxes).cyan(),
        style(stats.pending_boxes).cyan()
    );
    println!(
        "  Boats: {} total, {} active",
        style(stats.total_boats).cyan(),
        style(stats.active_boats).green()
    );
    println!(
        "  Requests: {} completed, {} pending",
        style(stats.completed_requests).cyan(),
        style(stats.pending_requests).cyan()
    );
    println!("  Revenue: EGP {}", style(stats.total_revenue).cyan());

    println!();
    println!("{}", style("Recent Activity").bold());
    for activity in &view.recent_activities {
        let marker = match activity.status {
            ActivityStatus::Completed => style("✓").green(),
            ActivityStatus::Pending => style("•").yellow(),
            ActivityStatus::InProgress => style("…").cyan(),
        };
        println!(
            "  {} {:<62} {}",
            marker,
            truncate_str(&activity.description, 60),
            style(activity.timestamp.format("%Y-%m-%d %H:%M")).dim()
        );
    }

    println!();
    println!("{}", style("Performance").bold());
    for metric in &view.performance {
        let change = if metric.change >= 0 {
            format!("+{}%", metric.change)
        } else {
            format!("{}%", metric.change)
        };
        println!(
            "  {:<24} {:>4}%  {} {}",
            metric.label,
            metric.value,
            metric.trend.glyph(),
            style(change).dim()
        );
    }

    Ok(())
}
