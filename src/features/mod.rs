pub mod types;
pub mod extractor;

pub use extractor::extract;
pub use types::FeatureSet;
