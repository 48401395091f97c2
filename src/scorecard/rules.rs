use crate::features::FeatureSet;
use super::types::Leaning;

// Metric rules. Each is an independent small function FeatureSet -> Leaning;
// the caller turns the branch into a one-hot score, a rating label, and
// narrative text. Cut points are fixed constants, not tunable config.

/// Filler density against the total word count. >5% reads as poor
/// articulation, >2% as middling.
pub fn articulation(f: &FeatureSet) -> Leaning {
    let ratio = f.ratio(f.filler_word_count);
    if ratio > 0.05 {
        Leaning::Negative
    } else if ratio > 0.02 {
        Leaning::Neutral
    } else {
        Leaning::Positive
    }
}

/// Confidence markers against hedging. Both counts floor at 1 upstream.
pub fn vocal_confidence(f: &FeatureSet) -> Leaning {
    if f.confidence_word_count > 2 * f.uncertainty_word_count {
        Leaning::Positive
    } else if f.confidence_word_count > f.uncertainty_word_count {
        Leaning::Neutral
    } else {
        Leaning::Negative
    }
}

pub fn voice_quality(f: &FeatureSet) -> Leaning {
    let rate = f.speaking_rate_wpm;
    if (120.0..=180.0).contains(&rate) {
        Leaning::Positive
    } else if (100.0..=200.0).contains(&rate) {
        Leaning::Neutral
    } else {
        Leaning::Negative
    }
}

/// More than two listening cues over a call is active listening; one or two
/// is minimal; none is a gap.
pub fn active_listening(f: &FeatureSet) -> Leaning {
    if f.listening_cue_count > 2 {
        Leaning::Positive
    } else if f.listening_cue_count > 0 {
        Leaning::Neutral
    } else {
        Leaning::Negative
    }
}

pub fn listening_cues_rating(f: &FeatureSet) -> Leaning {
    active_listening(f)
}

/// Agent share of attributed turns. A sales call is agent-heavy by nature,
/// so "balanced" is wider than an even split.
pub fn pacing_turn_taking(f: &FeatureSet) -> Leaning {
    let r = f.agent_turn_ratio;
    if (40.0..=65.0).contains(&r) {
        Leaning::Positive
    } else if (25.0..=80.0).contains(&r) {
        Leaning::Neutral
    } else {
        Leaning::Negative
    }
}

/// Negative = TOO FAST, neutral = TOO SLOW, positive = APPROPRIATE.
pub fn speech_rate_rating(f: &FeatureSet) -> Leaning {
    if f.speaking_rate_wpm > 180.0 {
        Leaning::Negative
    } else if f.speaking_rate_wpm < 110.0 {
        Leaning::Neutral
    } else {
        Leaning::Positive
    }
}

/// Negative = INTERRUPTING, neutral = BALANCED, positive = SMOOTH.
pub fn turn_management_rating(f: &FeatureSet) -> Leaning {
    if f.agent_turn_ratio >= 80.0 {
        Leaning::Negative
    } else if f.agent_turn_ratio >= 60.0 {
        Leaning::Neutral
    } else {
        Leaning::Positive
    }
}

pub fn pauses_silence(f: &FeatureSet) -> Leaning {
    if f.pause_frequency_per_minute > 6.0 {
        Leaning::Negative
    } else if f.pause_frequency_per_minute > 2.0 {
        Leaning::Neutral
    } else {
        Leaning::Positive
    }
}

pub fn pause_usage_rating(f: &FeatureSet) -> Leaning {
    pauses_silence(f)
}

/// Silence tolerates a bit more than pausing before it reads as awkward.
pub fn silence_handling_rating(f: &FeatureSet) -> Leaning {
    if f.pause_frequency_per_minute > 8.0 {
        Leaning::Negative
    } else if f.pause_frequency_per_minute > 4.0 {
        Leaning::Neutral
    } else {
        Leaning::Positive
    }
}

pub fn adaptability(f: &FeatureSet) -> Leaning {
    if f.adaptability_phrase_count > 2 {
        Leaning::Positive
    } else if f.adaptability_phrase_count > 0 {
        Leaning::Neutral
    } else {
        Leaning::Negative
    }
}

pub fn emotional_expressiveness(f: &FeatureSet) -> Leaning {
    let ratio = f.ratio(f.emotional_word_count);
    if ratio > 0.02 {
        Leaning::Positive
    } else if ratio > 0.005 {
        Leaning::Neutral
    } else {
        Leaning::Negative
    }
}

pub fn empathy_rapport(f: &FeatureSet) -> Leaning {
    if f.empathy_word_count > 2 {
        Leaning::Positive
    } else if f.empathy_word_count > 0 {
        Leaning::Neutral
    } else {
        Leaning::Negative
    }
}

/// Heavy emotional language with hedging outweighing confidence reads as a
/// call that got away from the agent.
pub fn conflict_management(f: &FeatureSet) -> Leaning {
    if f.emotional_word_count > 5 && f.uncertainty_word_count > f.confidence_word_count {
        Leaning::Negative
    } else if f.emotional_word_count > 2 {
        Leaning::Neutral
    } else {
        Leaning::Positive
    }
}

pub fn customer_centric(f: &FeatureSet) -> Leaning {
    let signals = f.empathy_word_count + f.listening_cue_count;
    if signals > 4 {
        Leaning::Positive
    } else if signals > 1 {
        Leaning::Neutral
    } else {
        Leaning::Negative
    }
}

pub fn language_appropriateness(f: &FeatureSet) -> Leaning {
    if f.casual_word_count > f.professional_word_count {
        Leaning::Negative
    } else if f.casual_word_count > 0 {
        Leaning::Neutral
    } else {
        Leaning::Positive
    }
}

pub fn personal_boundaries(f: &FeatureSet) -> Leaning {
    let ratio = f.ratio(f.casual_word_count);
    if ratio > 0.03 {
        Leaning::Negative
    } else if ratio > 0.01 {
        Leaning::Neutral
    } else {
        Leaning::Positive
    }
}

pub fn professional_demeanor(f: &FeatureSet) -> Leaning {
    if f.professional_word_count > 3 {
        Leaning::Positive
    } else if f.professional_word_count > 0 {
        Leaning::Neutral
    } else {
        Leaning::Negative
    }
}

/// Share of assured statements among all certainty-bearing language.
pub fn professional_knowledge(f: &FeatureSet) -> Leaning {
    let total = f.confidence_word_count + f.uncertainty_word_count;
    let share = f.confidence_word_count as f64 / total as f64;
    if share > 0.7 {
        Leaning::Positive
    } else if share > 0.5 {
        Leaning::Neutral
    } else {
        Leaning::Negative
    }
}
