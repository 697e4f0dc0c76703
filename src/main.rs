use clap::Parser;
use miette::Result;
use selal::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    // This is standard practice for CLI tools that output to stdout.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Register(args) => selal::cli::commands::register::run(args, &global),
        Commands::Boat(cmd) => selal::cli::commands::boat::run(cmd, &global),
        Commands::Boxes(cmd) => selal::cli::commands::boxes::run(cmd, &global),
        Commands::Dashboard(args) => selal::cli::commands::dashboard::run(args, &global),
        Commands::Profile(cmd) => selal::cli::commands::profile::run(cmd, &global),
        Commands::Quote(args) => selal::cli::commands::quote::run(args, &global),
        Commands::Lang(cmd) => selal::cli::commands::lang::run(cmd),
        Commands::Completions(args) => selal::cli::commands::completions::run(args),
    }
}
