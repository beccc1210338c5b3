//! Export helpers for JSON and CSV load sheets.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write load sheet: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode JSON load sheet: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to encode CSV load sheet: {0}")]
    Csv(#[from] csv::Error),
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod load_sheet {
    use std::io::Write;

    use chrono::{DateTime, Utc};
    use serde::Serialize;
    use skylane_balance::{Airframe, WeightAndBalanceReport};

    use super::ExportError;

    /// Who and what the load sheet is for.
    #[derive(Debug, Clone)]
    pub struct Metadata<'a> {
        pub airframe: &'a Airframe,
        pub profile: Option<&'a str>,
        pub generated: DateTime<Utc>,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct JsonSheet<'a> {
        airframe: &'a str,
        profile: Option<&'a str>,
        generated_utc: DateTime<Utc>,
        max_weight_lb: f64,
        max_landing_weight_lb: f64,
        forward_limit_in: f64,
        aft_limit_in: f64,
        report: &'a WeightAndBalanceReport,
    }

    /// Write the report as a pretty-printed JSON document.
    pub fn write_json<W: Write>(
        writer: W,
        meta: &Metadata<'_>,
        report: &WeightAndBalanceReport,
    ) -> Result<(), ExportError> {
        let envelope = meta.airframe.envelope();
        let sheet = JsonSheet {
            airframe: &meta.airframe.name,
            profile: meta.profile,
            generated_utc: meta.generated,
            max_weight_lb: meta.airframe.max_weight_lb,
            max_landing_weight_lb: meta.airframe.max_landing_weight_lb,
            forward_limit_in: envelope.forward_limit(report.total_weight),
            aft_limit_in: envelope.aft_limit(),
            report,
        };
        serde_json::to_writer_pretty(writer, &sheet)?;
        Ok(())
    }

    #[derive(Serialize)]
    struct CsvRow<'a> {
        station: &'a str,
        label: &'a str,
        weight_lb: f64,
        arm_in: f64,
        moment_lb_in: f64,
    }

    /// Write the classic station table: one row per station, then EMPTY and TOTAL.
    pub fn write_csv<W: Write>(
        writer: W,
        airframe: &Airframe,
        report: &WeightAndBalanceReport,
    ) -> Result<(), ExportError> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.serialize(CsvRow {
            station: "empty",
            label: "Empty Weight",
            weight_lb: airframe.empty_weight_lb,
            arm_in: airframe.empty_cg(),
            moment_lb_in: report.moments.empty,
        })?;
        for spec in airframe.stations() {
            csv.serialize(CsvRow {
                station: spec.station.id(),
                label: &spec.label,
                weight_lb: report.weights.get(spec.station),
                arm_in: spec.arm_in,
                moment_lb_in: report.moments.get(spec.station),
            })?;
        }
        csv.serialize(CsvRow {
            station: "total",
            label: "Total",
            weight_lb: report.total_weight,
            arm_in: report.total_cg,
            moment_lb_in: report.total_moment,
        })?;
        csv.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use skylane_balance::{Airframe, Station, StationWeights, compute_report};

    use super::load_sheet::{Metadata, write_csv, write_json};

    fn sample() -> (Airframe, skylane_balance::WeightAndBalanceReport) {
        let airframe = Airframe::c182t();
        let weights = StationWeights::default()
            .with(Station::Pilot, 180.0)
            .with(Station::Fuel, 300.0)
            .with(Station::BaggageA, 30.0);
        let report = compute_report(&airframe, &weights, 10.0);
        (airframe, report)
    }

    #[test]
    fn json_sheet_carries_metadata_and_report() {
        let (airframe, report) = sample();
        let meta = Metadata {
            airframe: &airframe,
            profile: Some("solo"),
            generated: Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
        };
        let mut buf = Vec::new();
        write_json(&mut buf, &meta, &report).expect("json export");
        let value: serde_json::Value = serde_json::from_slice(&buf).expect("valid json");
        assert_eq!(value["airframe"], "C182T");
        assert_eq!(value["profile"], "solo");
        assert_eq!(value["generatedUtc"], "2026-03-01T12:00:00Z");
        assert_eq!(value["report"]["totalWeight"], 2480.0);
        assert_eq!(value["report"]["isWithinLimits"], true);
        assert_eq!(value["report"]["weights"]["baggageA"], 30.0);
    }

    #[test]
    fn csv_sheet_has_station_rows_between_empty_and_total() {
        let (airframe, report) = sample();
        let mut buf = Vec::new();
        write_csv(&mut buf, &airframe, &report).expect("csv export");
        let text = String::from_utf8(buf).expect("utf8");
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "station,label,weight_lb,arm_in,moment_lb_in");
        assert_eq!(lines.len(), 1 + 1 + Station::COUNT + 1);
        assert!(lines[1].starts_with("empty,Empty Weight,1970.0,"));
        assert_eq!(lines[2], "pilot,Pilot,180.0,41.0,7380.0");
        assert!(lines.last().expect("total row").starts_with("total,Total,2480.0,"));
    }
}
