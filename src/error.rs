use thiserror::Error;

/// Failure taxonomy for the analysis pipeline.
///
/// Only the outermost boundary in `pipeline::analyze` ever handles these;
/// inner rule functions are total and never produce them. The caller of the
/// public API never sees one: every variant maps to the fallback output.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Zero non-empty sentences after splitting.
    #[error("transcript contains no analyzable sentences")]
    EmptyTranscript,

    /// Feature extraction could not produce a usable FeatureSet.
    #[error("feature extraction failed: {0}")]
    FeatureExtraction(String),

    /// Segmentation produced an inconsistent turn sequence.
    #[error("segmentation failed: {0}")]
    Segmentation(String),
}
