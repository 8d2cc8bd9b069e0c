//! Sovereignty classification of decomposed LP components

mod categories;
mod component_classifier;

pub use categories::{auto_classify, SovereigntyCategory};
pub use component_classifier::{ComponentClassifier, ComponentRecord};
