pub mod types;
pub mod rules;
pub mod narrative;
pub mod fallback;

use crate::features::FeatureSet;
use narrative::Narrative;
use types::{Leaning, Metric, RatingLabels, Score3, Section, SubMetric};

pub use fallback::fallback_scorecard;

fn metric(name: &str, leaning: Leaning, text: Narrative, sub_metrics: Vec<SubMetric>) -> Metric {
    Metric {
        name: name.to_string(),
        score: Score3::one_hot(leaning),
        justification: text.justification,
        analysis: text.analysis,
        sub_metrics,
    }
}

fn sub_metric(name: &str, leaning: Leaning, ratings: RatingLabels) -> SubMetric {
    let active_rating = ratings.select(leaning);
    let text = narrative::sub_metric(name, &active_rating);
    SubMetric {
        name: name.to_string(),
        score: Score3::one_hot(leaning),
        ratings,
        active_rating,
        justification: text.justification,
        analysis: text.analysis,
    }
}

/// Map the feature bag onto the fixed section/metric taxonomy. Pure and
/// total: every rule is a closed three-way branch and nothing here can fail.
/// Each metric's score, rating label, and narrative share one branch
/// decision, so they always agree.
pub fn build_scorecard(f: &FeatureSet) -> Vec<Section> {
    let articulation = rules::articulation(f);
    let vocal_confidence = rules::vocal_confidence(f);
    let voice_quality = rules::voice_quality(f);
    let vocal = Section::from_metrics("Vocal Characteristics", vec![
        metric("Articulation and Clarity", articulation, narrative::articulation(articulation, f), Vec::new()),
        metric("Vocal Confidence", vocal_confidence, narrative::vocal_confidence(vocal_confidence, f), Vec::new()),
        metric("Voice Quality", voice_quality, narrative::voice_quality(voice_quality, f), Vec::new()),
    ]);

    let active_listening = rules::active_listening(f);
    let pacing = rules::pacing_turn_taking(f);
    let pauses = rules::pauses_silence(f);
    let flow = Section::from_metrics("Conversation Flow", vec![
        metric(
            "Active Listening",
            active_listening,
            narrative::active_listening(active_listening, f),
            vec![sub_metric(
                "Listening Cues",
                rules::listening_cues_rating(f),
                RatingLabels::new("INFREQUENT", "ADEQUATE", "FREQUENT"),
            )],
        ),
        metric(
            "Pacing and Turn Taking",
            pacing,
            narrative::pacing_turn_taking(pacing, f),
            vec![
                sub_metric(
                    "Speech Rate",
                    rules::speech_rate_rating(f),
                    RatingLabels::new("TOO FAST", "TOO SLOW", "APPROPRIATE"),
                ),
                sub_metric(
                    "Turn Management",
                    rules::turn_management_rating(f),
                    RatingLabels::new("INTERRUPTING", "BALANCED", "SMOOTH"),
                ),
            ],
        ),
        metric(
            "Pauses and Silence",
            pauses,
            narrative::pauses_silence(pauses, f),
            vec![
                sub_metric(
                    "Pause Usage",
                    rules::pause_usage_rating(f),
                    RatingLabels::new("INEFFECTIVE", "ADEQUATE", "EFFECTIVE"),
                ),
                sub_metric(
                    "Silence Handling",
                    rules::silence_handling_rating(f),
                    RatingLabels::new("AWKWARD", "ACCEPTABLE", "COMFORTABLE"),
                ),
            ],
        ),
    ]);

    let adaptability = rules::adaptability(f);
    let expressiveness = rules::emotional_expressiveness(f);
    let empathy = rules::empathy_rapport(f);
    let emotional = Section::from_metrics("Emotional Intelligence and Adaptability", vec![
        metric("Adaptability", adaptability, narrative::adaptability(adaptability, f), Vec::new()),
        metric("Emotional Expressiveness", expressiveness, narrative::emotional_expressiveness(expressiveness, f), Vec::new()),
        metric("Empathy and Rapport", empathy, narrative::empathy_rapport(empathy, f), Vec::new()),
    ]);

    let conflict = rules::conflict_management(f);
    let centric = rules::customer_centric(f);
    let language = rules::language_appropriateness(f);
    let boundaries = rules::personal_boundaries(f);
    let demeanor = rules::professional_demeanor(f);
    let knowledge = rules::professional_knowledge(f);
    let professionalism = Section::from_metrics("Professionalism and Etiquette", vec![
        metric("Conflict Management", conflict, narrative::conflict_management(conflict, f), Vec::new()),
        metric("Customer Centric Approach", centric, narrative::customer_centric(centric, f), Vec::new()),
        metric("Language Appropriateness", language, narrative::language_appropriateness(language, f), Vec::new()),
        metric("Personal Boundaries", boundaries, narrative::personal_boundaries(boundaries, f), Vec::new()),
        metric("Professional Demeanor", demeanor, narrative::professional_demeanor(demeanor, f), Vec::new()),
        metric("Professional Knowledge", knowledge, narrative::professional_knowledge(knowledge, f), Vec::new()),
    ]);

    vec![vocal, flow, emotional, professionalism]
}
