use crate::lexicon;
use crate::segmenter::types::{SpeakerRole, TranscriptSegment};
use super::types::{ConversationState, EventTag};

/// Walk the ordered segments left to right, threading ConversationState
/// through an explicit fold, and attach event tags. After the fold the last
/// segment receives CALL END exactly once.
pub fn tag(mut segments: Vec<TranscriptSegment>) -> Vec<TranscriptSegment> {
    let mut state = ConversationState::default();

    for segment in segments.iter_mut() {
        let (next_state, events) = step(state, segment);
        segment.events = events;
        state = next_state;
    }
    // State dies here; nothing carries over to the next invocation.

    if let Some(last) = segments.last_mut() {
        if !last.events.contains(&EventTag::CallEnd) {
            last.events.push(EventTag::CallEnd);
        }
    }

    segments
}

/// One fold step: evaluate every rule against this segment, in order.
/// Multiple rules may fire on the same segment.
fn step(state: ConversationState, segment: &TranscriptSegment) -> (ConversationState, Vec<EventTag>) {
    let mut next = state;
    let mut events = Vec::new();
    let lower = segment.text.to_lowercase();
    let is_agent = segment.speaker_role == SpeakerRole::Agent;

    // The opening agent turn starts the dialog.
    if segment.id == 0 && is_agent {
        events.push(EventTag::DialogStart);
        next.dialog_started = true;
    }

    if next.in_introduction_phase && is_agent
        && lexicon::contains_any(&lower, lexicon::SELF_INTRODUCTION_PHRASES)
    {
        events.push(EventTag::IntroductionStart);
        if lexicon::contains_any(&lower, lexicon::PRIMARY_AGENT_MARKERS) {
            events.push(EventTag::PrimaryAgentStart);
        }
    }

    // A customer acknowledgment closes the introduction phase.
    if next.in_introduction_phase && !is_agent
        && lexicon::contains_any(&lower, lexicon::ACKNOWLEDGMENT_TOKENS)
    {
        events.push(EventTag::IntroductionEnd);
        next.in_introduction_phase = false;
    }

    if lexicon::contains_any(&lower, lexicon::HOLD_KEYWORDS) {
        events.push(EventTag::HoldStart);
    }
    if lexicon::contains_any(&lower, lexicon::TRANSFER_KEYWORDS) {
        events.push(EventTag::TransferStart);
    }
    if lexicon::contains_any(&lower, lexicon::AUTO_ATTENDANT_KEYWORDS) {
        events.push(EventTag::AutoAttendantStart);
    }

    if next.dialog_started && is_agent
        && lexicon::contains_any(&lower, lexicon::CLOSING_QUESTION_PHRASES)
    {
        events.push(EventTag::DialogEnd);
    }

    next.cursor_time_seconds = segment.end_time;
    (next, events)
}
