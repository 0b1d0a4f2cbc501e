use anyhow::Result;
use clap::Parser;
use taskpoints::cli::{Cli, Commands};
use taskpoints::commands::report::{handle_report, ReportConfig};
use taskpoints::observability::{init_tracing, install_panic_hook};

fn main() -> Result<()> {
    install_panic_hook();
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    match cli.command {
        Commands::Report {
            input,
            format,
            output,
            sequential,
            jobs,
            plain,
            timings,
        } => handle_report(ReportConfig {
            input,
            config_path: cli.config,
            format,
            output,
            sequential,
            jobs,
            plain,
            timings,
        }),
        Commands::Sample => taskpoints::commands::sample::write_sample(std::io::stdout().lock()),
        Commands::Init { force } => {
            let dir = std::env::current_dir()?;
            taskpoints::commands::init::init_config(&dir, force)
        }
    }
}
