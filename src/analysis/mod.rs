// =============================================================================
// Analysis Module
// =============================================================================
//
// Report builders layered on top of the primitive indicators. Each operation
// takes an immutable `Series`, runs a pure O(n) computation, and returns a
// serializable report with explicit `Option` fields for anything the series
// was too short to define.

pub mod crossover;
pub mod macd;
pub mod moving_averages;
pub mod rsi;
