use vocalytics::events::{tag, EventTag};
use vocalytics::segmenter::segment;

const SALES_OPENING: &str =
    "This is a licensed agent calling from Assurant Sales. Are you interested in benefits? Yes.";

fn analyze_events(text: &str) -> Vec<vocalytics::TranscriptSegment> {
    tag(segment(text))
}

#[test]
fn sales_opening_event_sequence() {
    let segments = analyze_events(SALES_OPENING);

    assert_eq!(segments.len(), 3);
    assert!(
        segments[0].events.contains(&EventTag::DialogStart),
        "opening agent turn must start the dialog"
    );
    assert!(
        segments[0].events.contains(&EventTag::IntroductionStart),
        "self-introduction phrasing must open the introduction"
    );
    assert!(
        segments[0].events.contains(&EventTag::PrimaryAgentStart),
        "licensed-agent marker must flag the primary agent"
    );
    assert!(
        segments[2].events.contains(&EventTag::IntroductionEnd),
        "customer acknowledgment must close the introduction"
    );
    assert!(segments[2].events.contains(&EventTag::CallEnd));
}

#[test]
fn call_end_is_unique_and_on_the_last_segment() {
    let segments = analyze_events(SALES_OPENING);

    let total: usize = segments
        .iter()
        .map(|s| s.events.iter().filter(|e| **e == EventTag::CallEnd).count())
        .sum();
    assert_eq!(total, 1, "exactly one segment must carry CALL END");
    assert!(
        segments.last().unwrap().events.contains(&EventTag::CallEnd),
        "CALL END must sit on the last segment"
    );
}

#[test]
fn tagging_twice_does_not_duplicate_call_end() {
    let once = analyze_events(SALES_OPENING);
    let twice = tag(once);

    let last = twice.last().unwrap();
    let count = last.events.iter().filter(|e| **e == EventTag::CallEnd).count();
    assert_eq!(count, 1, "CALL END must be idempotent");
}

#[test]
fn hold_transfer_and_auto_attendant_keywords() {
    let segments = analyze_events(
        "Thank you for calling from our main line today everyone. \
         Please hold while I pull up the account. \
         Let me transfer you to a billing specialist. \
         Press one to reach the automated system.",
    );

    assert!(segments[1].events.contains(&EventTag::HoldStart));
    assert!(segments[2].events.contains(&EventTag::TransferStart));
    assert!(segments[3].events.contains(&EventTag::AutoAttendantStart));
}

#[test]
fn closing_questions_end_the_dialog() {
    let segments = analyze_events(
        "This is Sarah calling from Acme Benefits. Yes. \
         Those are all the questions I have for you today.",
    );

    assert!(segments[0].events.contains(&EventTag::DialogStart));
    let last = segments.last().unwrap();
    assert!(
        last.events.contains(&EventTag::DialogEnd),
        "closing-questions phrasing from the agent must end the dialog"
    );
}

#[test]
fn introduction_ends_only_once() {
    let segments = analyze_events("This is Sarah calling from Acme. Yes. Okay.");

    assert!(segments[1].events.contains(&EventTag::IntroductionEnd));
    assert!(
        !segments[2].events.contains(&EventTag::IntroductionEnd),
        "a second acknowledgment after the introduction phase must not re-fire"
    );
}

#[test]
fn no_events_fire_without_their_keywords() {
    let segments = analyze_events("The invoice total was higher than expected. It was reviewed.");

    for s in &segments[..segments.len() - 1] {
        assert!(
            !s.events.iter().any(|e| matches!(
                e,
                EventTag::HoldStart | EventTag::TransferStart | EventTag::AutoAttendantStart
            )),
            "no hold/transfer/attendant events expected in segment {}",
            s.id
        );
    }
}
