use serde::{Deserialize, Serialize};
use crate::events::types::EventTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeakerRole {
    Agent,
    Customer,
}

/// One sentence-level conversational turn. Produced once by the pipeline and
/// consumed read-only downstream; nothing mutates a segment after the event
/// tagger has run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptSegment {
    /// 0-based position in the transcript; stable ordering key.
    pub id: usize,
    pub speaker_role: SpeakerRole,
    pub text: String,
    /// Synthesized seconds from call start. Contiguous with the neighbors.
    pub start_time: f64,
    pub end_time: f64,
    /// Heuristic attribution confidence, 0..=98.
    pub confidence_score: u8,
    pub events: Vec<EventTag>,
}
