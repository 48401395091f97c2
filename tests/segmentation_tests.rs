use vocalytics::segmenter::classifier::{classify, TurnContext};
use vocalytics::segmenter::segment;
use vocalytics::SpeakerRole;

const SALES_OPENING: &str =
    "This is a licensed agent calling from Assurant Sales. Are you interested in benefits? Yes.";

#[test]
fn empty_input_yields_empty_sequence() {
    assert!(segment("").is_empty());
    assert!(segment("   ...   ").is_empty(), "punctuation-only input has no sentences");
}

#[test]
fn splits_into_ordered_turns() {
    let segments = segment(SALES_OPENING);

    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].text, "This is a licensed agent calling from Assurant Sales");
    assert_eq!(segments[1].text, "Are you interested in benefits");
    assert_eq!(segments[2].text, "Yes");
    for (i, s) in segments.iter().enumerate() {
        assert_eq!(s.id, i, "ids must be 0-based and follow transcript order");
        assert!(s.events.is_empty(), "segmenter must leave events for the tagger");
    }
}

#[test]
fn sales_opening_speaker_attribution() {
    let segments = segment(SALES_OPENING);

    assert_eq!(segments[0].speaker_role, SpeakerRole::Agent);
    assert_eq!(segments[0].confidence_score, 95, "licensed-agent phrasing is high certainty");
    assert_eq!(segments[1].speaker_role, SpeakerRole::Agent, "long question leans agent");
    assert_eq!(segments[2].speaker_role, SpeakerRole::Customer);
    assert_eq!(segments[2].confidence_score, 95, "a bare Yes is a near-certain customer reply");
}

#[test]
fn timestamps_are_contiguous_and_monotone() {
    let segments = segment(
        "Hello, thank you for taking my call today. Sure. We have several coverage options \
         available for your zip code right now. Okay. What is your date of birth? 03/15/1960.",
    );

    assert!(segments.len() >= 4);
    assert_eq!(segments[0].start_time, 0.0);
    for pair in segments.windows(2) {
        assert_eq!(
            pair[0].end_time, pair[1].start_time,
            "segments must be strictly contiguous with no overlap"
        );
    }
    for s in &segments {
        let duration = s.end_time - s.start_time;
        assert!((2.0..=15.0).contains(&duration), "duration must clamp to 2..15 seconds");
        assert!(s.confidence_score <= 98, "confidence must cap at 98");
    }
}

// Decision-list rules, exercised individually through the classifier.

#[test]
fn strong_agent_phrase_wins_at_any_position() {
    let ctx = TurnContext::new("Just to confirm we are on a recorded line", false, 7);
    let c = classify(&ctx);

    assert_eq!(c.role, SpeakerRole::Agent);
    assert_eq!(c.confidence, 95);
}

#[test]
fn opening_turn_defaults_to_agent() {
    let ctx = TurnContext::new("Hello", false, 0);
    let c = classify(&ctx);

    assert_eq!(c.role, SpeakerRole::Agent, "segment 0 is always attributed to the agent");
    assert_eq!(c.confidence, 85);
}

#[test]
fn substantive_question_leans_agent() {
    let ctx = TurnContext::new("Are you interested in benefits", true, 4);
    let c = classify(&ctx);

    assert_eq!(c.role, SpeakerRole::Agent);
    assert_eq!(c.confidence, 85);
}

#[test]
fn long_offer_turn_leans_agent() {
    let ctx = TurnContext::new(
        "We would be glad to assist with several coverage options for your whole household",
        false,
        3,
    );
    let c = classify(&ctx);

    assert_eq!(c.role, SpeakerRole::Agent);
    assert_eq!(c.confidence, 85);
}

#[test]
fn short_confirmation_is_customer() {
    let ctx = TurnContext::new("Okay", false, 3);
    let c = classify(&ctx);

    assert_eq!(c.role, SpeakerRole::Customer);
    assert_eq!(c.confidence, 95, "very short pure confirmation is near-certain");
}

#[test]
fn bare_date_is_customer() {
    let ctx = TurnContext::new("03/15/1960", false, 5);
    let c = classify(&ctx);

    assert_eq!(c.role, SpeakerRole::Customer);
    assert_eq!(c.confidence, 90);
}

#[test]
fn fallback_alternates_short_unmatched_turns() {
    let even = classify(&TurnContext::new("Hm", false, 2));
    let odd = classify(&TurnContext::new("Hm", false, 3));

    assert_eq!(even.role, SpeakerRole::Agent);
    assert_eq!(odd.role, SpeakerRole::Customer);
    assert_eq!(even.confidence, 70, "fallback attribution is low confidence");
    assert_eq!(odd.confidence, 70);
}

#[test]
fn fallback_long_turn_leans_agent() {
    let ctx = TurnContext::new("The weather has been quite strange around here lately", false, 3);
    let c = classify(&ctx);

    assert_eq!(c.role, SpeakerRole::Agent, "turns over 30 chars fall back to agent");
    assert_eq!(c.confidence, 70);
}
