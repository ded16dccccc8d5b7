//! Financial calculators published alongside comparison pages

pub mod fvifa;

pub use fvifa::{FvifaOutcome, evaluate as evaluate_fvifa, fvifa};
