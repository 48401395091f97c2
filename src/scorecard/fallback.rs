use super::types::{Leaning, Metric, RatingLabels, Score3, Section, SubMetric};

const UNAVAILABLE: &str = "Analysis unavailable for this call.";
const UNAVAILABLE_DETAIL: &str =
    "The transcript could not be analyzed; neutral placeholder values are shown.";

fn placeholder_metric(name: &str, sub_metrics: Vec<SubMetric>) -> Metric {
    Metric {
        name: name.to_string(),
        score: Score3::one_hot(Leaning::Neutral),
        justification: UNAVAILABLE.to_string(),
        analysis: UNAVAILABLE_DETAIL.to_string(),
        sub_metrics,
    }
}

fn placeholder_sub(name: &str, ratings: RatingLabels) -> SubMetric {
    let active_rating = ratings.select(Leaning::Neutral);
    SubMetric {
        name: name.to_string(),
        score: Score3::one_hot(Leaning::Neutral),
        ratings,
        active_rating,
        justification: UNAVAILABLE.to_string(),
        analysis: UNAVAILABLE_DETAIL.to_string(),
    }
}

/// Constant scorecard returned whenever input cannot be analyzed. Carries
/// the full 4-section taxonomy so the output contract is always satisfiable;
/// every score is neutral and every narrative says so.
pub fn fallback_scorecard() -> Vec<Section> {
    vec![
        Section::from_metrics("Vocal Characteristics", vec![
            placeholder_metric("Articulation and Clarity", Vec::new()),
            placeholder_metric("Vocal Confidence", Vec::new()),
            placeholder_metric("Voice Quality", Vec::new()),
        ]),
        Section::from_metrics("Conversation Flow", vec![
            placeholder_metric("Active Listening", vec![placeholder_sub(
                "Listening Cues",
                RatingLabels::new("INFREQUENT", "ADEQUATE", "FREQUENT"),
            )]),
            placeholder_metric("Pacing and Turn Taking", vec![
                placeholder_sub("Speech Rate", RatingLabels::new("TOO FAST", "TOO SLOW", "APPROPRIATE")),
                placeholder_sub("Turn Management", RatingLabels::new("INTERRUPTING", "BALANCED", "SMOOTH")),
            ]),
            placeholder_metric("Pauses and Silence", vec![
                placeholder_sub("Pause Usage", RatingLabels::new("INEFFECTIVE", "ADEQUATE", "EFFECTIVE")),
                placeholder_sub("Silence Handling", RatingLabels::new("AWKWARD", "ACCEPTABLE", "COMFORTABLE")),
            ]),
        ]),
        Section::from_metrics("Emotional Intelligence and Adaptability", vec![
            placeholder_metric("Adaptability", Vec::new()),
            placeholder_metric("Emotional Expressiveness", Vec::new()),
            placeholder_metric("Empathy and Rapport", Vec::new()),
        ]),
        Section::from_metrics("Professionalism and Etiquette", vec![
            placeholder_metric("Conflict Management", Vec::new()),
            placeholder_metric("Customer Centric Approach", Vec::new()),
            placeholder_metric("Language Appropriateness", Vec::new()),
            placeholder_metric("Personal Boundaries", Vec::new()),
            placeholder_metric("Professional Demeanor", Vec::new()),
            placeholder_metric("Professional Knowledge", Vec::new()),
        ]),
    ]
}
