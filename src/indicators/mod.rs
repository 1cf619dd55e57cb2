// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the primitive indicators used by
// the analysis layer. Every function returns a vector aligned index-for-index
// with its input; positions without enough trailing data hold `None`, so
// callers are forced to handle the insufficient-data case explicitly and no
// NaN sentinels ever leak out.

pub mod ema;
pub mod rsi;
pub mod sma;
