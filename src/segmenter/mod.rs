pub mod types;
pub mod classifier;

use classifier::{classify, TurnContext};
use types::TranscriptSegment;

/// Shortest and longest synthesized segment durations, in seconds.
const MIN_TURN_SECONDS: f64 = 2.0;
const MAX_TURN_SECONDS: f64 = 15.0;

/// One sentence-level piece of the transcript. The stored text drops the
/// terminating punctuation, but classification still needs to know whether
/// the sentence ended in a question mark.
#[derive(Debug, Clone)]
pub struct SentencePiece {
    pub text: String,
    pub is_question: bool,
}

/// Split the transcript on sentence terminators, keeping track of which
/// pieces were questions. Empty pieces are dropped.
pub fn split_sentences(text: &str) -> Vec<SentencePiece> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut terminator_seen = false;
    let mut is_question = false;

    for c in text.chars() {
        if matches!(c, '.' | '!' | '?') {
            terminator_seen = true;
            if c == '?' {
                is_question = true;
            }
        } else {
            if terminator_seen {
                push_piece(&mut pieces, &mut current, &mut is_question);
                terminator_seen = false;
            }
            current.push(c);
        }
    }
    push_piece(&mut pieces, &mut current, &mut is_question);
    pieces
}

fn push_piece(pieces: &mut Vec<SentencePiece>, current: &mut String, is_question: &mut bool) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        pieces.push(SentencePiece {
            text: trimmed.to_string(),
            is_question: *is_question,
        });
    }
    current.clear();
    *is_question = false;
}

/// Segment the transcript into ordered speaker-attributed turns with
/// synthesized timestamps. Events are left empty; the tagger fills them.
/// Empty input yields an empty sequence, not an error.
pub fn segment(text: &str) -> Vec<TranscriptSegment> {
    let pieces = split_sentences(text);
    let mut segments = Vec::with_capacity(pieces.len());
    let mut cursor = 0.0_f64;

    for (index, piece) in pieces.iter().enumerate() {
        let ctx = TurnContext::new(&piece.text, piece.is_question, index);
        let classified = classify(&ctx);

        // Longer turns take longer to say. The cursor only moves forward,
        // so segments are contiguous and never overlap.
        let duration = (piece.text.len() as f64 / 10.0).clamp(MIN_TURN_SECONDS, MAX_TURN_SECONDS);
        let start_time = cursor;
        cursor += duration;

        segments.push(TranscriptSegment {
            id: index,
            speaker_role: classified.role,
            text: piece.text.clone(),
            start_time,
            end_time: cursor,
            confidence_score: classified.confidence,
            events: Vec::new(),
        });
    }

    segments
}
