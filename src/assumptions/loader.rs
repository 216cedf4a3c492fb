//! CSV-based settings loader
//!
//! Settings are a two-column `key,value` file, e.g.
//!
//! ```text
//! key,value
//! seattle_tax_rate,0.32
//! exchange_rate,1.12
//! projection_years,8
//! ```
//!
//! Keys that are absent keep their defaults.

use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default path to the settings file
pub const DEFAULT_SETTINGS_PATH: &str = "data/settings.csv";

/// Every key the loader understands
pub const KNOWN_KEYS: [&str; 10] = [
    "seattle_tax_rate",
    "madrid_tax_rate",
    "exchange_rate",
    "cost_of_living_factor",
    "base_growth",
    "bonus_growth",
    "rsu_growth",
    "exchange_rate_drift",
    "cost_of_living_drift",
    "projection_years",
];

pub type LoadResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// Raw values read from a settings file, keyed by name
#[derive(Debug, Clone, Default)]
pub struct LoadedSettings {
    values: HashMap<String, f64>,
}

impl LoadedSettings {
    /// Load settings from a CSV file
    pub fn load_from(path: &Path) -> LoadResult<Self> {
        let file = File::open(path)
            .map_err(|e| format!("Unable to open settings file {}: {}", path.display(), e))?;
        Self::from_reader(file)
    }

    /// Load settings from any reader (e.g., string buffer)
    pub fn from_reader<R: Read>(reader: R) -> LoadResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut values = HashMap::new();

        for result in csv_reader.records() {
            let record = result?;
            let key = record.get(0).unwrap_or_default().to_string();
            let raw = record.get(1).unwrap_or_default();

            if !KNOWN_KEYS.contains(&key.as_str()) {
                return Err(format!("Unknown settings key: {}", key).into());
            }

            let value: f64 = raw
                .parse()
                .map_err(|e| format!("Invalid value for {}: {:?} ({})", key, raw, e))?;
            values.insert(key, value);
        }

        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Whole-number setting; fractional or negative values are rejected
    pub fn get_count(&self, key: &str) -> LoadResult<Option<u32>> {
        match self.get(key) {
            None => Ok(None),
            Some(v) if v >= 0.0 && v.fract() == 0.0 && v <= u32::MAX as f64 => Ok(Some(v as u32)),
            Some(v) => Err(format!("{} must be a whole number, got {}", key, v).into()),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
