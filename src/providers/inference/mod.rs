pub mod implementations;
pub mod trait_inference;

pub use trait_inference::{DetectedLabel, LabelDetector};
