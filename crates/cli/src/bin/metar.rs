use std::io::{self, BufRead};

use clap::Parser;
use skylane::weather::{self, Observation};

/// Print the flight category of METAR/TAF reports.
#[derive(Parser, Debug)]
#[command(author, version, about = "METAR/TAF flight category classifier")]
struct Cli {
    /// Raw report text; reads one report per line from stdin when omitted
    report: Option<String>,

    /// Also print the visibility and ceiling that drove the category
    #[arg(long, default_value_t = false)]
    details: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.report {
        Some(report) => print_category(report, cli.details),
        None => {
            for line in io::stdin().lock().lines() {
                print_category(&line?, cli.details);
            }
        }
    }
    Ok(())
}

fn print_category(report: &str, details: bool) {
    let Some(obs) = weather::observe(report) else {
        println!("UNKNOWN");
        return;
    };
    if details {
        println!("{} ({})", obs.category(), describe(&obs));
    } else {
        println!("{}", obs.category());
    }
}

fn describe(obs: &Observation) -> String {
    let vis = obs
        .visibility_sm
        .map(|v| format!("vis {v:.2} sm"))
        .unwrap_or_else(|| "vis unknown".to_string());
    let ceiling = obs
        .ceiling_ft
        .map(|c| format!("ceiling {c:.0} ft"))
        .unwrap_or_else(|| "no ceiling".to_string());
    format!("{vis}, {ceiling}")
}
