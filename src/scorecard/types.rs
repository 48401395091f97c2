use serde::{Deserialize, Serialize};

/// Three-way branch every metric rule resolves to. Score, rating label, and
/// narrative text are all derived from this one value, so they cannot
/// disagree with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Leaning {
    Negative,
    Neutral,
    Positive,
}

/// Display weights, not probabilities. Per-metric scores are one-hot;
/// section scores are element-wise sums over child metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score3 {
    pub negative: u32,
    pub neutral: u32,
    pub positive: u32,
}

impl Score3 {
    pub fn one_hot(leaning: Leaning) -> Self {
        match leaning {
            Leaning::Negative => Score3 { negative: 1, neutral: 0, positive: 0 },
            Leaning::Neutral => Score3 { negative: 0, neutral: 1, positive: 0 },
            Leaning::Positive => Score3 { negative: 0, neutral: 0, positive: 1 },
        }
    }

    pub fn accumulate(&mut self, other: &Score3) {
        self.negative += other.negative;
        self.neutral += other.neutral;
        self.positive += other.positive;
    }
}

/// Fixed 3-way rating vocabulary for one sub-metric (e.g. TOO FAST /
/// TOO SLOW / APPROPRIATE). The strings are metric-specific and fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingLabels {
    pub negative: String,
    pub neutral: String,
    pub positive: String,
}

impl RatingLabels {
    pub fn new(negative: &str, neutral: &str, positive: &str) -> Self {
        Self {
            negative: negative.to_string(),
            neutral: neutral.to_string(),
            positive: positive.to_string(),
        }
    }

    pub fn select(&self, leaning: Leaning) -> String {
        match leaning {
            Leaning::Negative => self.negative.clone(),
            Leaning::Neutral => self.neutral.clone(),
            Leaning::Positive => self.positive.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubMetric {
    pub name: String,
    pub score: Score3,
    pub ratings: RatingLabels,
    pub active_rating: String,
    pub justification: String,
    pub analysis: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub name: String,
    pub score: Score3,
    pub justification: String,
    pub analysis: String,
    pub sub_metrics: Vec<SubMetric>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub name: String,
    pub score: Score3,
    pub metrics: Vec<Metric>,
}

impl Section {
    /// Section scores are a fixed aggregation over children, never an
    /// independent re-derivation from features.
    pub fn from_metrics(name: &str, metrics: Vec<Metric>) -> Self {
        let mut score = Score3::default();
        for m in &metrics {
            score.accumulate(&m.score);
        }
        Section { name: name.to_string(), score, metrics }
    }
}
