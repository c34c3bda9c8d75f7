//! budgetsheet - File tax-adjusted budget tables into weekly workbooks

use budgetsheet::{
    cli::{Cli, Command},
    config::{RunConfig, resolve_date},
    error::Result,
    output::get_formatter,
    pipeline::{build_report, run},
};
use budgetsheet_core::timezone::TimezoneConfig;
use budgetsheet_workbook::calendar::{sheet_label, week_labels};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise quiet unless --verbose
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            tracing_subscriber::EnvFilter::new("budgetsheet=info")
        } else {
            tracing_subscriber::EnvFilter::new("budgetsheet=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let tz_config = TimezoneConfig::from_cli(cli.timezone.as_deref(), cli.utc)?;
    info!("Using timezone: {}", tz_config.display_name());

    let color = !cli.json && is_terminal::is_terminal(std::io::stdout());
    let formatter = get_formatter(cli.json, color);

    match &cli.command {
        Command::Record(args) => {
            info!("Recording budget");
            let config = RunConfig::from_cli(&cli, args, &tz_config)?;
            let outcome = run(&config)?;
            println!(
                "{}",
                formatter.format_report(&outcome.report.table, &outcome.report.summary)
            );
            if !cli.json {
                println!(
                    "Saved to worksheet {} in {}",
                    outcome.sheet,
                    outcome.workbook.display()
                );
            }
        }
        Command::Show(args) => {
            let report = build_report(&args.input, cli.mode(), cli.policy())?;
            println!("{}", formatter.format_report(&report.table, &report.summary));
        }
        Command::Week(args) => {
            let date = resolve_date(args.date.as_deref(), &tz_config)?;
            println!(
                "{}",
                formatter.format_week(&week_labels(date), &sheet_label(date))
            );
        }
    }

    Ok(())
}
