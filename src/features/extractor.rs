use crate::input::{TimedWord, Utterance};
use crate::lexicon;
use super::types::FeatureSet;

/// Words-per-minute assumed when no timing data accompanies the transcript.
/// The estimate feeds back into the reported rate, so without timings the
/// rate reads as ~150 by construction; `rate_is_estimated` marks this.
const DEFAULT_WPM: f64 = 150.0;

/// Single-pass lexical feature extraction. Total: never fails, empty or
/// whitespace-only input yields zeroed counts (confidence/uncertainty floor
/// at 1 so downstream ratios never divide by zero).
pub fn extract(text: &str, timed_words: &[TimedWord], utterances: &[Utterance]) -> FeatureSet {
    if text.trim().is_empty() {
        return FeatureSet {
            confidence_word_count: 1,
            uncertainty_word_count: 1,
            agent_turn_ratio: 50.0,
            rate_is_estimated: true,
            ..FeatureSet::default()
        };
    }

    let lower = text.to_lowercase();
    let word_count = text.split_whitespace().count() as u32;
    let sentence_count = text
        .split(|c| matches!(c, '.' | '!' | '?'))
        .filter(|s| !s.trim().is_empty())
        .count() as u32;

    // Duration: measured from the last timed word when available, otherwise
    // estimated from the word count at the default rate.
    let measured_end = timed_words.last().map(|w| w.end).filter(|e| *e > 0.0);
    let duration_seconds = match measured_end {
        Some(end) => end,
        None => word_count as f64 / DEFAULT_WPM * 60.0,
    };
    let rate_is_estimated = measured_end.is_none();
    if rate_is_estimated {
        tracing::debug!(word_count, "no word timings; speaking rate defaults to {} wpm", DEFAULT_WPM);
    }
    let speaking_rate_wpm = if duration_seconds > 0.0 {
        word_count as f64 / duration_seconds * 60.0
    } else {
        0.0
    };

    let pause_count = lexicon::PAUSE_MARKER.find_iter(text).count() as u32;
    let pause_frequency_per_minute = if duration_seconds > 0.0 {
        pause_count as f64 / (duration_seconds / 60.0)
    } else {
        0.0
    };

    FeatureSet {
        word_count,
        sentence_count,
        filler_word_count: lexicon::count_matches(&lower, lexicon::FILLER_WORDS),
        confidence_word_count: lexicon::count_matches(&lower, lexicon::CONFIDENCE_WORDS).max(1),
        uncertainty_word_count: lexicon::count_matches(&lower, lexicon::UNCERTAINTY_WORDS).max(1),
        professional_word_count: lexicon::count_matches(&lower, lexicon::PROFESSIONAL_WORDS),
        casual_word_count: lexicon::count_matches(&lower, lexicon::CASUAL_WORDS),
        empathy_word_count: lexicon::count_matches(&lower, lexicon::EMPATHY_WORDS),
        emotional_word_count: lexicon::count_matches(&lower, lexicon::EMOTIONAL_WORDS),
        listening_cue_count: lexicon::count_matches(&lower, lexicon::LISTENING_CUES),
        adaptability_phrase_count: lexicon::count_matches(&lower, lexicon::ADAPTABILITY_PHRASES),
        agent_turn_ratio: turn_ratio(text, utterances),
        speaking_rate_wpm,
        rate_is_estimated,
        pause_frequency_per_minute,
    }
}

/// Agent share of attributed turns, 0..=100. Diarized utterances win over
/// the line-prefix heuristic; with neither, the split is assumed even.
fn turn_ratio(text: &str, utterances: &[Utterance]) -> f64 {
    let (agent, customer) = if !utterances.is_empty() {
        let agent = utterances
            .iter()
            .filter(|u| u.speaker.to_lowercase().contains("agent"))
            .count();
        (agent, utterances.len() - agent)
    } else {
        let agent = lexicon::AGENT_LINE_PREFIX.find_iter(text).count();
        let customer = lexicon::CUSTOMER_LINE_PREFIX.find_iter(text).count();
        (agent, customer)
    };

    if agent + customer == 0 {
        50.0
    } else {
        agent as f64 / (agent + customer) as f64 * 100.0
    }
}
