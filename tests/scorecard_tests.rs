use vocalytics::features::{extract, FeatureSet};
use vocalytics::scorecard::{build_scorecard, fallback_scorecard};
use vocalytics::{Score3, Section};

fn scorecard_for(text: &str) -> Vec<Section> {
    build_scorecard(&extract(text, &[], &[]))
}

fn find_metric<'a>(sections: &'a [Section], name: &str) -> &'a vocalytics::Metric {
    sections
        .iter()
        .flat_map(|s| s.metrics.iter())
        .find(|m| m.name == name)
        .unwrap_or_else(|| panic!("metric {} missing from scorecard", name))
}

#[test]
fn taxonomy_is_fixed() {
    let sections = scorecard_for("Hello there.");

    let names: Vec<&str> = sections.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Vocal Characteristics",
            "Conversation Flow",
            "Emotional Intelligence and Adaptability",
            "Professionalism and Etiquette",
        ]
    );
    let metric_counts: Vec<usize> = sections.iter().map(|s| s.metrics.len()).collect();
    assert_eq!(metric_counts, vec![3, 3, 3, 6]);

    let pacing = find_metric(&sections, "Pacing and Turn Taking");
    let sub_names: Vec<&str> = pacing.sub_metrics.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(sub_names, vec!["Speech Rate", "Turn Management"]);
}

#[test]
fn ten_percent_filler_ratio_scores_articulation_negative() {
    // 10 words with one filler: ratio 0.10 sits above the 0.05 cut point.
    let sections = scorecard_for("Um the policy starts next month for you and family.");

    let articulation = find_metric(&sections, "Articulation and Clarity");
    assert_eq!(
        articulation.score,
        Score3 { negative: 1, neutral: 0, positive: 0 },
        "filler ratio above 5% must score articulation mostly-negative"
    );
    assert!(
        articulation.justification.contains("above the 5% threshold"),
        "justification must come from the same branch as the score"
    );
}

#[test]
fn three_listening_cues_score_active_listening_positive() {
    // Three listening cues clear the >2 threshold.
    let sections = scorecard_for("I understand. I see. Tell me more about the billing issue.");

    let listening = find_metric(&sections, "Active Listening");
    assert_eq!(listening.score, Score3 { negative: 0, neutral: 0, positive: 1 });

    let cues = &listening.sub_metrics[0];
    assert_eq!(cues.name, "Listening Cues");
    assert_eq!(cues.active_rating, "FREQUENT", "more than 2 cues must rate FREQUENT");
}

#[test]
fn metric_scores_are_one_hot() {
    let sections = scorecard_for("Hello, how are you doing today? I am fine thanks.");

    for section in &sections {
        for metric in &section.metrics {
            let total = metric.score.negative + metric.score.neutral + metric.score.positive;
            assert_eq!(total, 1, "metric {} must carry a one-hot score", metric.name);
            assert!(!metric.justification.is_empty());
            assert!(!metric.analysis.is_empty());
        }
    }
}

#[test]
fn section_scores_sum_their_children() {
    let sections = scorecard_for("Thank you for your time today. Certainly. I understand.");

    for section in &sections {
        let mut expected = Score3::default();
        for metric in &section.metrics {
            expected.accumulate(&metric.score);
        }
        assert_eq!(
            section.score, expected,
            "section {} score must be the fixed sum of its metrics",
            section.name
        );
    }
}

#[test]
fn fast_speech_rates_too_fast() {
    let mut f = FeatureSet::default();
    f.word_count = 100;
    f.confidence_word_count = 1;
    f.uncertainty_word_count = 1;
    f.speaking_rate_wpm = 210.0;

    let sections = build_scorecard(&f);
    let pacing = find_metric(&sections, "Pacing and Turn Taking");
    let rate = pacing.sub_metrics.iter().find(|s| s.name == "Speech Rate").unwrap();

    assert_eq!(rate.active_rating, "TOO FAST");
    assert_eq!(rate.score, Score3 { negative: 1, neutral: 0, positive: 0 });
}

#[test]
fn rating_and_score_come_from_one_branch() {
    let sections = scorecard_for("I understand. I see. Tell me more. Go on. Got it.");

    for section in &sections {
        for metric in &section.metrics {
            for sub in &metric.sub_metrics {
                let expected = if sub.score.positive == 1 {
                    &sub.ratings.positive
                } else if sub.score.neutral == 1 {
                    &sub.ratings.neutral
                } else {
                    &sub.ratings.negative
                };
                assert_eq!(
                    &sub.active_rating, expected,
                    "sub-metric {} rating must match its score branch",
                    sub.name
                );
            }
        }
    }
}

#[test]
fn fallback_scorecard_is_complete_and_neutral() {
    let sections = fallback_scorecard();

    assert_eq!(sections.len(), 4);
    let metric_counts: Vec<usize> = sections.iter().map(|s| s.metrics.len()).collect();
    assert_eq!(metric_counts, vec![3, 3, 3, 6]);
    for section in &sections {
        for metric in &section.metrics {
            assert_eq!(
                metric.score,
                Score3 { negative: 0, neutral: 1, positive: 0 },
                "fallback metrics must all be neutral"
            );
            for sub in &metric.sub_metrics {
                assert_eq!(sub.active_rating, sub.ratings.neutral);
            }
        }
    }
}

#[test]
fn fallback_is_deterministic() {
    assert_eq!(fallback_scorecard(), fallback_scorecard());
}
