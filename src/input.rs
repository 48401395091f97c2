use serde::{Deserialize, Serialize};

/// One word with timing attached, as delivered by an upstream transcriber.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimedWord {
    pub word: String,
    pub start: f64,
    pub end: f64,
    pub confidence: f64,
}

/// A diarized utterance from an upstream transcriber. Only the speaker label
/// is consumed here (turn-ratio attribution); text and timing pass through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Utterance {
    pub speaker: String,
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// Object-shaped transcript payload. Upstream systems disagree on the field
/// name; first present field wins, in declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranscriptDocument {
    pub text: Option<String>,
    pub transcript: Option<String>,
    pub content: Option<String>,
}

/// The transcript value handed to the pipeline. Anything that is not already
/// plain text is a degraded input and gets coerced at the boundary.
#[derive(Debug, Clone)]
pub enum TranscriptSource {
    Text(String),
    Structured(TranscriptDocument),
    Opaque(serde_json::Value),
}

impl TranscriptSource {
    pub fn text(s: &str) -> Self {
        TranscriptSource::Text(s.to_string())
    }

    /// Resolve to the transcript string. Non-Text branches log a warning:
    /// they are tolerated, not endorsed.
    pub fn resolve(&self) -> String {
        match self {
            TranscriptSource::Text(s) => s.clone(),
            TranscriptSource::Structured(doc) => {
                tracing::warn!("structured transcript input; coercing to text field");
                doc.text
                    .as_ref()
                    .or(doc.transcript.as_ref())
                    .or(doc.content.as_ref())
                    .cloned()
                    .unwrap_or_default()
            }
            TranscriptSource::Opaque(value) => {
                tracing::warn!("opaque transcript input; using string representation");
                match value {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                }
            }
        }
    }
}

impl From<&str> for TranscriptSource {
    fn from(s: &str) -> Self {
        TranscriptSource::Text(s.to_string())
    }
}

impl From<String> for TranscriptSource {
    fn from(s: String) -> Self {
        TranscriptSource::Text(s)
    }
}
