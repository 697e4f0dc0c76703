//! `selal lang` command - interface language management

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::core::config::Config;
use crate::core::i18n::{Catalog, Locale, TextDirection};

#[derive(Subcommand, Debug)]
pub enum LangCommands {
    /// Show the current interface language
    Show,

    /// List supported languages
    List,

    /// Set the interface language
    Set(SetArgs),
}

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Language to use (en/ar)
    pub locale: Locale,
}

pub fn run(cmd: LangCommands) -> Result<()> {
    match cmd {
        LangCommands::Show => run_show(),
        LangCommands::List => run_list(),
        LangCommands::Set(args) => run_set(args),
    }
}

fn run_show() -> Result<()> {
    let config = Config::load();
    let locale = config.locale();
    println!(
        "{} ({}, {})",
        style(locale.native_name()).bold(),
        locale,
        direction_label(locale.direction())
    );
    Ok(())
}

fn run_list() -> Result<()> {
    let current = Config::load().locale();
    for locale in Locale::all() {
        let marker = if *locale == current {
            style("●").cyan()
        } else {
            style("○").dim()
        };
        println!(
            "{} {:<4} {:<12} {}",
            marker,
            locale,
            locale.native_name(),
            direction_label(locale.direction())
        );
    }
    Ok(())
}

fn run_set(args: SetArgs) -> Result<()> {
    let path = Config::set_language(args.locale).into_diagnostic()?;
    println!(
        "{} Interface language set to {} ({})",
        style("✓").green(),
        style(args.locale.native_name()).cyan(),
        args.locale
    );
    println!("{}", style(format!("Saved to {}", path.display())).dim());

    // A sample line in the new language confirms the catalog is wired up
    let catalog = Catalog::for_locale(args.locale);
    println!("{}", style(catalog.text("wizard.user_type.title")).dim());
    Ok(())
}

fn direction_label(direction: TextDirection) -> &'static str {
    match direction {
        TextDirection::Ltr => "left-to-right",
        TextDirection::Rtl => "right-to-left",
    }
}
