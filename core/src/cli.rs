use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::analyze_workouts::analyze_workouts;
use crate::analyzer::parse_power_json;
use crate::config::load_config;
use crate::error::DashboardError;
use crate::fit::decode_power;
use crate::metrics::compute_power_metrics;
use crate::report::{render_power_metrics, render_workouts};
use crate::telemetry::METRICS;
use crate::wahoo_api::WahooClient;

#[derive(Debug, Parser)]
#[command(name = "metricsbike", version, about = "Power metrics for cycling workouts")]
pub struct Cli {
    /// Skriv Prometheus-tellere etter kommandoen
    #[arg(long, global = true)]
    pub print_metrics: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Beregn metrikker for én kraftserie (.fit, .csv eller .json)
    Analyze {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Hent siste økter fra API-et og vis kraftmetrikker
    Workouts {
        #[arg(long, default_value = "metricsbike.json")]
        config: PathBuf,
        #[arg(long, env = "METRICSBIKE_ACCESS_TOKEN", hide_env_values = true)]
        token: Option<String>,
        #[arg(long)]
        per_page: Option<u32>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Analyze { file, format } => {
            let samples = load_series(&file)
                .with_context(|| format!("reading power series from {}", file.display()))?;
            METRICS.power_samples_total().inc_by(samples.len() as u64);
            let metrics = compute_power_metrics(&samples);
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&metrics)?),
                OutputFormat::Text => print!("{}", render_power_metrics(&metrics)),
            }
        }
        Command::Workouts { config, token, per_page } => {
            let mut cfg = load_config(&config)?;
            if let Some(n) = per_page {
                cfg.per_page = n;
            }
            let token = token
                .or_else(|| cfg.access_token.clone())
                .ok_or(DashboardError::NotAuthenticated)?;

            let client = WahooClient::new(&cfg);
            let workouts = client.list_workouts(&token)?;
            let analyzed = analyze_workouts(&workouts, &client, &METRICS);
            print!("{}", render_workouts(&analyzed));
        }
    }

    if cli.print_metrics {
        print!("{}", METRICS.render());
    }
    Ok(())
}

/// Leser en kraftserie fra fil, valgt etter filendelse.
pub fn load_series(path: &Path) -> crate::error::Result<Vec<f64>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "fit" => decode_power(&std::fs::read(path)?),
        "json" => parse_power_json(&std::fs::read_to_string(path)?),
        "csv" => read_csv_series(path),
        _ => Err(DashboardError::UnsupportedInput(path.display().to_string())),
    }
}

/// CSV: kolonne `power`/`watts` hvis header finnes, ellers første kolonne.
/// Tomme linjer og tomme eller ugyldige celler blir 0.0 (dropout);
/// tomme linjer etter siste sample telles ikke.
///
/// Leses linje for linje: csv-leseren hopper stille over tomme linjer.
fn read_csv_series(path: &Path) -> crate::error::Result<Vec<f64>> {
    let text = std::fs::read_to_string(path)?;

    let mut out = Vec::new();
    let mut col = 0usize;
    let mut first = true;
    let mut blanks = 0usize;
    for line in text.lines() {
        if line.trim().is_empty() {
            blanks += 1;
            continue;
        }
        let rec = parse_csv_line(line)?;
        if std::mem::take(&mut first) && is_header(&rec) {
            col = rec.iter().position(is_power_column).unwrap_or(0);
            blanks = 0;
            continue;
        }
        out.extend(std::iter::repeat(0.0).take(blanks));
        blanks = 0;
        out.push(rec.get(col).and_then(|v| v.parse::<f64>().ok()).unwrap_or(0.0));
    }
    Ok(out)
}

fn parse_csv_line(line: &str) -> crate::error::Result<csv::StringRecord> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(line.as_bytes());
    let mut rec = csv::StringRecord::new();
    rdr.read_record(&mut rec)?;
    Ok(rec)
}

// Header: navngitt kraftkolonne, eller en rad uten ett eneste tall
fn is_header(rec: &csv::StringRecord) -> bool {
    rec.iter().any(is_power_column)
        || (rec.iter().any(|c| !c.is_empty()) && rec.iter().all(|c| c.parse::<f64>().is_err()))
}

fn is_power_column(h: &str) -> bool {
    h.eq_ignore_ascii_case("power") || h.eq_ignore_ascii_case("watts")
}
