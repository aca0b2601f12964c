// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free indicator calculators over ordered OHLCV series.
// Every calculator returns a column aligned position-for-position with its
// input; cells that lack enough history (or hit degenerate arithmetic) are
// `None` rather than an error or a fake zero.

pub mod atr;
pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;
pub mod stochastic;
pub mod vwap;
