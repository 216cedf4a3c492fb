//! Compensation Converter CLI
//!
//! Command-line interface for one-year conversions and multi-year projections

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use comp_converter::{
    format_currency, CompensationInput, ConversionResult, Direction, Locale, ProjectionEngine,
    ProjectionResult, Settings,
};
use comp_converter::projection::{ProjectionSummary, Verdict};
use log::info;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "comp_converter", version, about = "Compare compensation between Seattle (USD) and Madrid (EUR)")]
struct Cli {
    /// Settings CSV (key,value); defaults are used for missing keys
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Pull rates, growth and years into the interactive ranges before running
    #[arg(long, global = true)]
    clamp: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert one year of compensation
    Convert {
        #[command(flatten)]
        package: PackageArgs,
        #[command(flatten)]
        rates: RateArgs,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Project compensation over several years
    Project {
        #[command(flatten)]
        package: PackageArgs,
        #[command(flatten)]
        rates: RateArgs,
        #[command(flatten)]
        growth: GrowthArgs,
        /// Write both series to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct PackageArgs {
    /// Current/offer location (seattle or madrid)
    #[arg(long, default_value = "seattle", value_parser = parse_locale)]
    from: Locale,
    /// Annual base salary in the source currency
    #[arg(long, default_value_t = 100_000.0)]
    base: f64,
    /// Annual bonus in the source currency
    #[arg(long, default_value_t = 20_000.0)]
    bonus: f64,
    /// Annual RSU value in the source currency
    #[arg(long, default_value_t = 30_000.0)]
    rsus: f64,
}

#[derive(Args)]
struct RateArgs {
    /// Seattle effective tax rate (fraction)
    #[arg(long)]
    seattle_tax: Option<f64>,
    /// Madrid effective tax rate (fraction)
    #[arg(long)]
    madrid_tax: Option<f64>,
    /// 1 EUR = x USD
    #[arg(long)]
    exchange_rate: Option<f64>,
    /// Madrid cost of living as a fraction of Seattle's
    #[arg(long)]
    col_factor: Option<f64>,
}

#[derive(Args)]
struct GrowthArgs {
    /// Number of years to project
    #[arg(long)]
    years: Option<u32>,
    #[arg(long)]
    base_growth: Option<f64>,
    #[arg(long)]
    bonus_growth: Option<f64>,
    #[arg(long)]
    rsu_growth: Option<f64>,
    /// Annual exchange rate change (fraction)
    #[arg(long)]
    fx_drift: Option<f64>,
    /// Annual cost-of-living factor change (fraction)
    #[arg(long)]
    col_drift: Option<f64>,
}

fn parse_locale(s: &str) -> Result<Locale, String> {
    Locale::parse(s).ok_or_else(|| format!("unknown locale '{}' (expected seattle or madrid)", s))
}

impl RateArgs {
    fn apply(&self, settings: &mut Settings) {
        if let Some(v) = self.seattle_tax {
            settings.taxes.seattle = v;
        }
        if let Some(v) = self.madrid_tax {
            settings.taxes.madrid = v;
        }
        if let Some(v) = self.exchange_rate {
            settings.exchange_rate = v;
        }
        if let Some(v) = self.col_factor {
            settings.cost_of_living_factor = v;
        }
    }
}

impl GrowthArgs {
    fn apply(&self, settings: &mut Settings) {
        let growth = &mut settings.growth;
        if let Some(v) = self.base_growth {
            growth.base_growth = v;
        }
        if let Some(v) = self.bonus_growth {
            growth.bonus_growth = v;
        }
        if let Some(v) = self.rsu_growth {
            growth.rsu_growth = v;
        }
        if let Some(v) = self.fx_drift {
            growth.exchange_rate_drift = v;
        }
        if let Some(v) = self.col_drift {
            growth.cost_of_living_drift = v;
        }
        if let Some(v) = self.years {
            settings.projection_years = v;
        }
    }
}

impl PackageArgs {
    fn input(&self) -> CompensationInput {
        CompensationInput::new(self.base, self.bonus, self.rsus)
    }
}

/// One row of the series CSV
#[derive(Serialize)]
struct SeriesRow {
    side: &'static str,
    locale: Locale,
    currency: &'static str,
    year: u32,
    base: f64,
    bonus: f64,
    rsus: f64,
    total: f64,
    cumulative: f64,
    exchange_rate: Option<f64>,
    cost_of_living_factor: Option<f64>,
}

/// `--json` output of a projection
#[derive(Serialize)]
struct ProjectionReport<'a> {
    summary: ProjectionSummary,
    projection: &'a ProjectionResult,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut settings = match &cli.settings {
        Some(path) => Settings::from_csv_path(path)
            .map_err(|e| anyhow::anyhow!(e))
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };

    match cli.command {
        Command::Convert { package, rates, json } => {
            rates.apply(&mut settings);
            if cli.clamp {
                settings = settings.clamped();
            }
            let direction = Direction::from_source(package.from);
            let result = comp_converter::convert(direction, &package.input(), &settings.rates(direction))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_conversion(&result);
            }
        }
        Command::Project { package, rates, growth, csv, json } => {
            rates.apply(&mut settings);
            growth.apply(&mut settings);
            if cli.clamp {
                settings = settings.clamped();
            }
            let direction = Direction::from_source(package.from);

            let engine = ProjectionEngine::new(settings.rates(direction), settings.growth);
            let result = engine.project(direction, &package.input(), settings.projection_years)?;

            if json {
                let report = ProjectionReport { summary: result.summary(), projection: &result };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_projection(&result);
            }

            if let Some(path) = csv {
                write_series_csv(&path, &result)
                    .with_context(|| format!("Unable to write CSV file {}", path.display()))?;
                info!("projection series written to {}", path.display());
                println!("\nFull results written to: {}", path.display());
            }
        }
    }

    Ok(())
}

fn print_conversion(r: &ConversionResult) {
    let (sc, tc) = (r.source_currency, r.target_currency);

    println!("{} ({}) -> {} ({})", r.source_locale, sc, r.target_locale, tc);
    println!("{}", "=".repeat(50));
    println!();
    println!("1. Starting compensation in {}:", r.source_locale);
    println!("   Base + Bonus (gross): {}", format_currency(r.source_base_plus_bonus, sc));
    println!("   RSUs:                 {}", format_currency(r.source_rsus, sc));
    println!("   Total:                {}", format_currency(r.source_total, sc));
    println!("2. Net income from base + bonus at {:.1}%: {}", r.source_tax_rate * 100.0, format_currency(r.source_net, sc));
    println!("3. Converted at 1 EUR = {} USD: {}", r.exchange_rate, format_currency(r.target_net_before_col, tc));
    println!(
        "4. Cost of living (Madrid at {:.0}% of Seattle): {}",
        r.cost_of_living_factor * 100.0,
        format_currency(r.target_net, tc)
    );
    println!("5. Gross-up at {:.1}%: {}", r.target_tax_rate * 100.0, format_currency(r.target_gross, tc));
    println!("6. RSUs in {}: {}", tc, format_currency(r.target_rsus, tc));
    println!("7. Total in {}: {}", r.target_locale, format_currency(r.target_total, tc));

    println!();
    println!("Monthly breakdown:");
    println!("{:>10} {:>16} {:>16} {:>16} {:>16}", "", "Source gross", "Source net", "Target gross", "Target net");
    let rows = [
        ("Base", r.source_monthly.gross.base, r.source_monthly.net.base, r.target_monthly.gross.base, r.target_monthly.net.base),
        ("Bonus", r.source_monthly.gross.bonus, r.source_monthly.net.bonus, r.target_monthly.gross.bonus, r.target_monthly.net.bonus),
        ("RSUs", r.source_monthly.gross.rsus, r.source_monthly.net.rsus, r.target_monthly.gross.rsus, r.target_monthly.net.rsus),
        ("Total", r.source_monthly.gross.total, r.source_monthly.net.total, r.target_monthly.gross.total, r.target_monthly.net.total),
    ];
    for (label, sg, sn, tg, tn) in rows {
        println!(
            "{:>10} {:>16} {:>16} {:>16} {:>16}",
            label,
            format_currency(sg, sc),
            format_currency(sn, sc),
            format_currency(tg, tc),
            format_currency(tn, tc),
        );
    }
}

fn print_projection(result: &ProjectionResult) {
    let (src, tgt) = (&result.source, &result.target);

    println!("Projection over {} years: {} ({}) vs {} ({})", result.num_years, src.locale, src.currency, tgt.locale, tgt.currency);
    println!("{:>4} {:>16} {:>18} {:>16} {:>18} {:>8} {:>6} {:>10} {:>10}",
        "Year", "Source total", "Source cumulative", "Target total", "Target cumulative", "FX", "COL", "Annual %", "Cumul. %");
    println!("{}", "-".repeat(118));

    let fmt_pct = |v: Option<f64>| v.map(|p| format!("{:.1}%", p)).unwrap_or_else(|| "N/A".to_string());

    for ((s, t), cmp) in src.points.iter().zip(&tgt.points).zip(result.comparison()) {
        println!("{:>4} {:>16} {:>18} {:>16} {:>18} {:>8.4} {:>6.2} {:>10} {:>10}",
            s.year,
            format_currency(s.total, src.currency),
            format_currency(s.cumulative, src.currency),
            format_currency(t.total, tgt.currency),
            format_currency(t.cumulative, tgt.currency),
            t.exchange_rate.unwrap_or_default(),
            t.cost_of_living_factor.unwrap_or_default(),
            fmt_pct(cmp.annual_diff_pct),
            fmt_pct(cmp.cumulative_diff_pct),
        );
    }

    let summary = result.summary();
    println!();
    println!("Cumulative in {}: {}", summary.source_locale, format_currency(summary.source_cumulative, src.currency));
    println!("Cumulative in {}: {}", summary.target_locale, format_currency(summary.target_cumulative, tgt.currency));
    println!();
    match summary.verdict {
        Verdict::TargetAhead(pct) => println!(
            "Over {} years, working in {} provides approximately {:.1}% more in cumulative compensation compared to {}.",
            summary.num_years, summary.target_locale, pct, summary.source_locale
        ),
        Verdict::SourceAhead(pct) => println!(
            "Over {} years, working in {} provides approximately {:.1}% less in cumulative compensation compared to {}.",
            summary.num_years, summary.target_locale, pct, summary.source_locale
        ),
        Verdict::RoughlyEquivalent => println!(
            "Over {} years, the cumulative compensation is roughly equivalent between {} and {} (within 5% difference).",
            summary.num_years, summary.source_locale, summary.target_locale
        ),
    }
}

fn write_series_csv(path: &std::path::Path, result: &ProjectionResult) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    for (side, series) in [("source", &result.source), ("target", &result.target)] {
        for p in &series.points {
            writer.serialize(SeriesRow {
                side,
                locale: series.locale,
                currency: series.currency.code(),
                year: p.year,
                base: p.base,
                bonus: p.bonus,
                rsus: p.rsus,
                total: p.total,
                cumulative: p.cumulative,
                exchange_rate: p.exchange_rate,
                cost_of_living_factor: p.cost_of_living_factor,
            })?;
        }
    }

    writer.flush()?;
    Ok(())
}
