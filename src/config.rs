// =============================================================================
// Snapshot configuration
// =============================================================================
//
// All tunables for one snapshot run. Values come from an optional JSON file,
// then environment-variable overrides, then `validate()` before anything is
// fetched. Every field carries `#[serde(default)]` so older config files
// keep loading when fields are added.
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// The longest indicator warm-up in the pipeline (the MACD slow EMA). The
/// fetch batch must at least cover it, or the displayed tail would carry
/// indicator values computed from effectively no history.
pub const MIN_FETCH_LIMIT: u32 = 26;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_symbol() -> String {
    "BTCUSDT".to_string()
}

fn default_interval() -> String {
    "1h".to_string()
}

fn default_fetch_limit() -> u32 {
    48
}

fn default_display_rows() -> u32 {
    24
}

fn default_utc_offset_hours() -> i32 {
    8
}

// =============================================================================
// SnapshotConfig
// =============================================================================

/// Configuration for one indicator snapshot run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// Trading pair, e.g. "BTCUSDT".
    #[serde(default = "default_symbol")]
    pub symbol: String,

    /// Candle interval as the exchange spells it, e.g. "1h".
    #[serde(default = "default_interval")]
    pub interval: String,

    /// How many candles to fetch. Kept larger than `display_rows` so the
    /// displayed tail sits past the indicator warm-up.
    #[serde(default = "default_fetch_limit")]
    pub fetch_limit: u32,

    /// How many of the most recent rows to print.
    #[serde(default = "default_display_rows")]
    pub display_rows: u32,

    /// Display-only offset applied to open times before formatting.
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            interval: default_interval(),
            fetch_limit: default_fetch_limit(),
            display_rows: default_display_rows(),
            utc_offset_hours: default_utc_offset_hours(),
        }
    }
}

impl SnapshotConfig {
    /// Load from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Apply `GLANCE_*` environment-variable overrides on top of the loaded
    /// values. Unparseable numeric values are left as-is.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(symbol) = std::env::var("GLANCE_SYMBOL") {
            let symbol = symbol.trim().to_uppercase();
            if !symbol.is_empty() {
                self.symbol = symbol;
            }
        }
        if let Ok(interval) = std::env::var("GLANCE_INTERVAL") {
            let interval = interval.trim().to_string();
            if !interval.is_empty() {
                self.interval = interval;
            }
        }
        if let Ok(Ok(limit)) = std::env::var("GLANCE_LIMIT").map(|v| v.trim().parse()) {
            self.fetch_limit = limit;
        }
        if let Ok(Ok(rows)) = std::env::var("GLANCE_ROWS").map(|v| v.trim().parse()) {
            self.display_rows = rows;
        }
        if let Ok(Ok(offset)) = std::env::var("GLANCE_UTC_OFFSET").map(|v| v.trim().parse()) {
            self.utc_offset_hours = offset;
        }
    }

    /// Check the configuration before any network call is made.
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            anyhow::bail!("symbol must not be empty");
        }
        if self.interval.trim().is_empty() {
            anyhow::bail!("interval must not be empty");
        }
        if self.fetch_limit < MIN_FETCH_LIMIT {
            anyhow::bail!(
                "fetch_limit {} is below the longest indicator warm-up ({})",
                self.fetch_limit,
                MIN_FETCH_LIMIT
            );
        }
        if self.display_rows == 0 {
            anyhow::bail!("display_rows must be at least 1");
        }
        if self.display_rows > self.fetch_limit {
            anyhow::bail!(
                "display_rows {} exceeds fetch_limit {}",
                self.display_rows,
                self.fetch_limit
            );
        }
        if !(-23..=23).contains(&self.utc_offset_hours) {
            anyhow::bail!("utc_offset_hours {} is not a valid offset", self.utc_offset_hours);
        }
        Ok(())
    }
}
