use serde::{Deserialize, Serialize};

/// Flat bag of lexical counts and ratios derived from one transcript pass.
/// All downstream metric rules read from this and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    pub word_count: u32,
    pub sentence_count: u32,

    // Category counts
    pub filler_word_count: u32,
    pub confidence_word_count: u32,
    pub uncertainty_word_count: u32,
    pub professional_word_count: u32,
    pub casual_word_count: u32,
    pub empathy_word_count: u32,
    pub emotional_word_count: u32,
    pub listening_cue_count: u32,
    pub adaptability_phrase_count: u32,

    /// Agent share of attributed turns, 0..=100. 50 when no attribution exists.
    pub agent_turn_ratio: f64,
    pub speaking_rate_wpm: f64,
    /// True when the rate came from the 150 WPM default, not from timing data.
    pub rate_is_estimated: bool,
    pub pause_frequency_per_minute: f64,
}

impl FeatureSet {
    /// Ratio of a category count against the total word count. 0 when the
    /// transcript is empty.
    pub fn ratio(&self, count: u32) -> f64 {
        if self.word_count == 0 {
            0.0
        } else {
            count as f64 / self.word_count as f64
        }
    }
}
