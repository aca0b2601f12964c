// =============================================================================
// Snapshot table rendering
// =============================================================================
//
// Fixed-width plain-text table: header, dash rule, then the most recent N
// rows of the indicator table. Undefined cells render as the literal "N/A"
// (never 0 or blank, which would read as a real value); defined cells render
// with 2-decimal precision. Open times are shifted by a display-only UTC
// offset before formatting.
// =============================================================================

use chrono::{FixedOffset, TimeZone, Utc};

use crate::pipeline::IndicatorTable;

const TIME_WIDTH: usize = 20;
const VOLUME_WIDTH: usize = 12;
const CELL_WIDTH: usize = 10;

/// Render the last `rows` rows of `table` as an aligned text table.
pub fn render(table: &IndicatorTable, rows: usize, offset: &FixedOffset) -> String {
    let header = format!(
        "{:<TIME_WIDTH$} {:<CELL_WIDTH$} {:<VOLUME_WIDTH$} {:<CELL_WIDTH$} {:<CELL_WIDTH$} \
         {:<CELL_WIDTH$} {:<CELL_WIDTH$} {:<CELL_WIDTH$} {:<CELL_WIDTH$} {:<CELL_WIDTH$} \
         {:<CELL_WIDTH$} {:<CELL_WIDTH$} {:<CELL_WIDTH$} {:<CELL_WIDTH$}",
        "Open Time",
        "Open",
        "Volume",
        "SMA20",
        "EMA20",
        "UpperBand",
        "LowerBand",
        "%K",
        "%D",
        "VWAP",
        "ATR",
        "RSI",
        "MACD",
        "MACD_Sig",
    );

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(header.len()));
    out.push('\n');

    let start = table.len().saturating_sub(rows);
    for i in start..table.len() {
        let c = &table.candles[i];
        out.push_str(&format!(
            "{:<TIME_WIDTH$} {:<CELL_WIDTH$.2} {:<VOLUME_WIDTH$.2} {:<CELL_WIDTH$} \
             {:<CELL_WIDTH$} {:<CELL_WIDTH$} {:<CELL_WIDTH$} {:<CELL_WIDTH$} \
             {:<CELL_WIDTH$} {:<CELL_WIDTH$} {:<CELL_WIDTH$} {:<CELL_WIDTH$} \
             {:<CELL_WIDTH$} {:<CELL_WIDTH$}",
            format_open_time(c.open_time, offset),
            c.open,
            c.volume,
            format_cell(table.sma20[i]),
            format_cell(table.ema20[i]),
            format_cell(table.upper_band[i]),
            format_cell(table.lower_band[i]),
            format_cell(table.percent_k[i]),
            format_cell(table.percent_d[i]),
            format_cell(table.vwap[i]),
            format_cell(table.atr[i]),
            format_cell(table.rsi[i]),
            format_cell(table.macd[i]),
            format_cell(table.macd_signal[i]),
        ));
        out.push('\n');
    }

    out
}

/// A defined cell with 2-decimal precision, or the "N/A" sentinel.
fn format_cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "N/A".to_string(),
    }
}

/// Epoch milliseconds → `YYYY-MM-DD HH:MM` in the display offset.
fn format_open_time(ms: i64, offset: &FixedOffset) -> String {
    match Utc.timestamp_millis_opt(ms).single() {
        Some(dt) => dt
            .with_timezone(offset)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        None => "invalid time".to_string(),
    }
}
