use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tempseries::{Series, SeriesInput};

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    #[arg(long)]
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Summary,

    Sum,

    Closest {
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        target: f64,
    },

    LessThan {
        #[arg(long, allow_negative_numbers = true)]
        threshold: f64,
    },

    GreaterThan {
        #[arg(long, allow_negative_numbers = true)]
        threshold: f64,
    },

    Append {
        #[arg(required = true, allow_negative_numbers = true)]
        temps: Vec<f64>,
    },
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let mut series = SeriesInput::from_file(&args.file)
        .context("failed to load series input")?
        .into_series()
        .context("failed to construct series")?;

    let report = match args.command {
        Command::Summary => {
            let summary = series
                .summary_statistics()
                .context("failed to compute summary statistics")?;
            serde_json::to_value(summary)?
        }
        Command::Sum => serde_json::json!({ "sum": series.sum() }),
        Command::Closest { target } => {
            let closest = series
                .find_temp_closest_to_value(target)
                .context("failed to find closest temperature")?;
            serde_json::json!({ "target": target, "closest": closest })
        }
        Command::LessThan { threshold } => {
            let temps = series.find_temps_less_than(threshold);
            serde_json::json!({ "threshold": threshold, "temps": temps })
        }
        Command::GreaterThan { threshold } => {
            let temps = series.find_temps_greater_than(threshold);
            serde_json::json!({ "threshold": threshold, "temps": temps })
        }
        Command::Append { temps } => append_report(&mut series, &temps)?,
    };

    let output = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
    println!("{output}");

    Ok(())
}

fn append_report(series: &mut Series, temps: &[f64]) -> Result<serde_json::Value> {
    let capacity = series.add_temps(temps);
    log::info!("appended {} temperatures", temps.len());

    let summary = series
        .summary_statistics()
        .context("failed to compute summary statistics")?;

    Ok(serde_json::json!({
        "capacity": capacity,
        "len": series.len(),
        "empty_slots": series.empty_slots(),
        "summary": summary,
    }))
}
