use std::path::PathBuf;

use anyhow::{Context, anyhow};
use chrono::Utc;
use clap::Parser;
use skylane::airframe as catalog;
use skylane::balance::{Airframe, Station, StationWeights, WeightAndBalanceReport, compute_report};
use skylane::config::load_airframes;
use skylane::core::units::{MassUnit, display_mass, user_fuel_gal_to_lb, user_weight_to_lb};
use skylane::export::{load_sheet, writer_for_path};
use skylane::profiles::ProfileBook;

/// Compute a weight & balance load sheet and check it against the envelope.
#[derive(Parser, Debug)]
#[command(author, version, about = "Weight & balance calculator")]
struct Cli {
    /// Pilot weight
    #[arg(long)]
    pilot: Option<f64>,

    /// Co-pilot weight
    #[arg(long)]
    co_pilot: Option<f64>,

    /// Combined rear passenger weight
    #[arg(long)]
    rear_seats: Option<f64>,

    /// Baggage area A weight
    #[arg(long)]
    baggage_a: Option<f64>,

    /// Baggage area B weight
    #[arg(long)]
    baggage_b: Option<f64>,

    /// Baggage area C weight
    #[arg(long)]
    baggage_c: Option<f64>,

    /// Unit for occupant/baggage weights and for the printed summary (lb or kg)
    #[arg(long, default_value = "lb")]
    unit: MassUnit,

    /// Fuel on board in US gallons
    #[arg(long)]
    fuel_gal: Option<f64>,

    /// Planned fuel burn in US gallons
    #[arg(long, default_value_t = 0.0)]
    burn_gal: f64,

    /// Start from a saved profile
    #[arg(long)]
    profile: Option<String>,

    /// Profile store (JSON)
    #[arg(long, default_value = "profiles.json")]
    profiles: PathBuf,

    /// Save the resulting load under this name
    #[arg(long)]
    save_profile: Option<String>,

    /// Airframe catalog (TOML/YAML file or directory); defaults to the built-in C182T
    #[arg(long)]
    airframes: Option<PathBuf>,

    /// Airframe name within the catalog (defaults to first entry)
    #[arg(long, requires = "airframes")]
    airframe: Option<String>,

    /// Write the JSON load sheet here (use '-' for stdout)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write the CSV station table here (use '-' for stdout)
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let airframe = match &cli.airframes {
        Some(path) => {
            let configs = load_airframes(path)
                .with_context(|| format!("loading airframes from {}", path.display()))?;
            catalog::select(&configs, cli.airframe.as_deref())?
        }
        None => Airframe::c182t(),
    };

    let mut book = if cli.profile.is_some() || cli.save_profile.is_some() {
        ProfileBook::load(&cli.profiles)?
    } else {
        ProfileBook::new()
    };
    let mut weights = match &cli.profile {
        Some(name) => {
            let profile = book.find(name).ok_or_else(|| {
                anyhow!("profile '{}' not found in {}", name, cli.profiles.display())
            })?;
            log::debug!("starting from profile '{}'", profile.name);
            profile.weights
        }
        None => StationWeights::default(),
    };

    let overrides = [
        (Station::Pilot, cli.pilot),
        (Station::CoPilot, cli.co_pilot),
        (Station::RearSeats, cli.rear_seats),
        (Station::BaggageA, cli.baggage_a),
        (Station::BaggageB, cli.baggage_b),
        (Station::BaggageC, cli.baggage_c),
    ];
    for (station, value) in overrides {
        if let Some(value) = value {
            weights.set(station, user_weight_to_lb(value, cli.unit));
        }
    }
    if let Some(gallons) = cli.fuel_gal {
        weights.fuel = user_fuel_gal_to_lb(gallons);
    }

    let report = compute_report(&airframe, &weights, cli.burn_gal);
    print_summary(&airframe, &report, cli.unit);

    if let Some(name) = &cli.save_profile {
        book.upsert(name, weights)?;
        book.save(&cli.profiles)?;
        log::debug!("{} profile(s) in {}", book.len(), cli.profiles.display());
        println!("Saved profile '{}' to {}", name.trim(), cli.profiles.display());
    }

    if let Some(path) = &cli.json {
        let meta = load_sheet::Metadata {
            airframe: &airframe,
            profile: cli.profile.as_deref(),
            generated: Utc::now(),
        };
        load_sheet::write_json(writer_for_path(path)?, &meta, &report)?;
    }
    if let Some(path) = &cli.csv {
        load_sheet::write_csv(writer_for_path(path)?, &airframe, &report)?;
    }

    Ok(())
}

fn print_summary(airframe: &Airframe, report: &WeightAndBalanceReport, unit: MassUnit) {
    let mass = |lb: f64| format!("{} {}", display_mass(lb, unit), unit.label());
    let envelope = airframe.envelope();

    println!("=== Weight & Balance: {} ===", airframe.name);
    for spec in airframe.stations() {
        let weight = report.weights.get(spec.station);
        if weight > 0.0 {
            println!("{:<16}: {:>8} @ {:.1} in", spec.label, mass(weight), spec.arm_in);
        }
    }
    println!(
        "Takeoff         : {} (max {}), CG {:.2} in",
        mass(report.total_weight),
        mass(airframe.max_weight_lb),
        report.total_cg
    );
    println!(
        "CG limits       : fwd {:.2} in, aft {:.2} in",
        envelope.forward_limit(report.total_weight),
        envelope.aft_limit()
    );
    println!(
        "Zero fuel       : {}, CG {:.2} in",
        mass(report.zero_fuel_weight),
        report.zero_fuel_cg
    );
    println!(
        "Landing         : {} (max {}), CG {:.2} in",
        mass(report.landing_weight),
        mass(airframe.max_landing_weight_lb),
        report.landing_cg
    );
    println!(
        "Baggage         : {} (max {})",
        mass(report.total_baggage_weight),
        mass(airframe.total_baggage_max_lb)
    );
    println!(
        "Envelope        : {}",
        if report.is_within_limits {
            "WITHIN LIMITS"
        } else {
            "OUT OF LIMITS"
        }
    );

    for warning in warnings(airframe, report) {
        println!("WARNING: {warning}");
    }
}

fn warnings(airframe: &Airframe, report: &WeightAndBalanceReport) -> Vec<String> {
    let mut out = Vec::new();
    if !report.is_total_weight_ok(airframe) {
        out.push(format!(
            "takeoff weight {:.0} lb exceeds maximum {:.0} lb",
            report.total_weight, airframe.max_weight_lb
        ));
    }
    if !report.is_within_limits {
        out.push(format!(
            "takeoff CG {:.2} in at {:.0} lb is outside the envelope",
            report.total_cg, report.total_weight
        ));
    }
    if !report.is_landing_weight_ok {
        out.push(format!(
            "landing weight {:.0} lb exceeds maximum {:.0} lb",
            report.landing_weight, airframe.max_landing_weight_lb
        ));
    }
    if !report.is_baggage_ok {
        out.push(format!(
            "baggage {:.0} lb exceeds a compartment or the {:.0} lb total limit",
            report.total_baggage_weight, airframe.total_baggage_max_lb
        ));
    }
    for station in &report.over_limit_stations {
        out.push(format!("{} is over its limit", airframe.station(*station).label));
    }
    out
}
