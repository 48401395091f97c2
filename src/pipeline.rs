use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::events;
use crate::features;
use crate::input::{TimedWord, TranscriptSource, Utterance};
use crate::scorecard::{self, types::Section};
use crate::segmenter::{self, types::TranscriptSegment};

/// The two artifacts the rest of the system consumes. Handed over as-is to
/// rendering, and embeddable verbatim in an outbound webhook payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub segments: Vec<TranscriptSegment>,
    pub scorecard: Vec<Section>,
}

impl AnalysisOutcome {
    fn fallback() -> Self {
        AnalysisOutcome {
            segments: Vec::new(),
            scorecard: scorecard::fallback_scorecard(),
        }
    }
}

/// Run the full pipeline over one transcript. Total: never panics and never
/// surfaces an error; any failure maps to the fallback output here, at the
/// single outermost boundary. Deterministic: same input, same output, no
/// clock or randomness involved.
pub fn analyze(
    source: &TranscriptSource,
    timed_words: &[TimedWord],
    utterances: &[Utterance],
) -> AnalysisOutcome {
    match analyze_inner(source, timed_words, utterances) {
        Ok(outcome) => outcome,
        Err(AnalysisError::EmptyTranscript) => {
            tracing::debug!("empty transcript; returning fallback output");
            AnalysisOutcome::fallback()
        }
        Err(err) => {
            tracing::error!(%err, "analysis failed; returning fallback output");
            AnalysisOutcome::fallback()
        }
    }
}

fn analyze_inner(
    source: &TranscriptSource,
    timed_words: &[TimedWord],
    utterances: &[Utterance],
) -> Result<AnalysisOutcome, AnalysisError> {
    let text = source.resolve();

    let segments = segmenter::segment(&text);
    if segments.is_empty() {
        return Err(AnalysisError::EmptyTranscript);
    }
    let segments = events::tag(segments);

    let feature_set = features::extract(&text, timed_words, utterances);
    let scorecard = scorecard::build_scorecard(&feature_set);

    Ok(AnalysisOutcome { segments, scorecard })
}
