//! Convert a batch of compensation packages from a CSV file
//!
//! Usage: run_scenarios <input.csv> [output.csv] [settings.csv]
//!
//! Input columns: label,source,base_salary,bonus,rsus
//! Output columns: label,source,target,source_total,target_total,source_currency,target_currency

use anyhow::{anyhow, bail, Context, Result};
use comp_converter::{CompensationInput, Direction, Locale, ScenarioCase, ScenarioRunner, Settings};
use log::info;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Instant;

/// Raw CSV row of the input file
#[derive(Debug, Deserialize)]
struct CsvRow {
    label: String,
    source: String,
    base_salary: f64,
    bonus: f64,
    rsus: f64,
}

impl CsvRow {
    fn into_case(self) -> Result<ScenarioCase> {
        let source = Locale::parse(&self.source)
            .ok_or_else(|| anyhow!("Unknown source locale for {}: {}", self.label, self.source))?;

        Ok(ScenarioCase {
            label: self.label,
            direction: Direction::from_source(source),
            input: CompensationInput::new(self.base_salary, self.bonus, self.rsus),
        })
    }
}

#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    label: &'a str,
    source: Locale,
    target: Locale,
    source_total: f64,
    target_total: f64,
    source_currency: &'static str,
    target_currency: &'static str,
}

fn load_cases(path: &Path) -> Result<Vec<ScenarioCase>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut cases = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        cases.push(row.into_case()?);
    }
    Ok(cases)
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        bail!("Usage: {} <input.csv> [output.csv] [settings.csv]", args[0]);
    }
    let input_path = Path::new(&args[1]);
    let output_path = args.get(2).map(String::as_str).unwrap_or("scenario_output.csv");

    let settings = match args.get(3) {
        Some(path) => Settings::from_csv_path(Path::new(path))
            .map_err(|e| anyhow!(e))
            .with_context(|| format!("Failed to load settings from {}", path))?,
        None => Settings::default(),
    };

    let start = Instant::now();
    let cases = load_cases(input_path)
        .with_context(|| format!("Failed to load scenarios from {}", input_path.display()))?;
    info!("loaded {} scenarios in {:?}", cases.len(), start.elapsed());

    let runner = ScenarioRunner::with_settings(settings);
    let results = runner.run_batch(&cases)?;

    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("Failed to create output file {}", output_path))?;
    for (case, result) in cases.iter().zip(&results) {
        writer.serialize(OutputRow {
            label: &case.label,
            source: result.source_locale,
            target: result.target_locale,
            source_total: result.source_total,
            target_total: result.target_total,
            source_currency: result.source_currency.code(),
            target_currency: result.target_currency.code(),
        })?;
    }
    writer.flush()?;

    println!("Converted {} scenarios in {:?}", results.len(), start.elapsed());
    println!("Output written to {}", output_path);
    Ok(())
}
