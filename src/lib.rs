pub mod error;
pub mod input;
pub mod lexicon;
pub mod features;
pub mod segmenter;
pub mod events;
pub mod scorecard;
pub mod pipeline;

// Re-export the entry point and the output model for convenient access
pub use input::{TranscriptSource, TimedWord, Utterance};
pub use pipeline::{analyze, AnalysisOutcome};
pub use segmenter::types::{SpeakerRole, TranscriptSegment};
pub use scorecard::types::{Score3, Section, Metric, SubMetric};
