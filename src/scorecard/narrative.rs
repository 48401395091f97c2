use crate::features::FeatureSet;
use super::types::Leaning;

/// Generated justification/analysis pair for one metric. Always produced
/// from the same Leaning branch that produced the score, so the text can
/// never contradict the numbers.
#[derive(Debug, Clone)]
pub struct Narrative {
    pub justification: String,
    pub analysis: String,
}

fn narrative(justification: String, analysis: String) -> Narrative {
    Narrative { justification, analysis }
}

pub fn articulation(leaning: Leaning, f: &FeatureSet) -> Narrative {
    let pct = f.ratio(f.filler_word_count) * 100.0;
    match leaning {
        Leaning::Negative => narrative(
            format!("Filler words make up {:.1}% of the call, above the 5% threshold.", pct),
            format!(
                "{} filler words were detected across {} words. Frequent fillers blur the message; slowing down between thoughts would tighten delivery.",
                f.filler_word_count, f.word_count
            ),
        ),
        Leaning::Neutral => narrative(
            format!("Filler words make up {:.1}% of the call, a moderate level.", pct),
            "Some verbal fillers are present but they do not dominate. Occasional pauses in place of fillers would sharpen clarity.".to_string(),
        ),
        Leaning::Positive => narrative(
            format!("Filler words make up only {:.1}% of the call.", pct),
            "Speech is clean with minimal disfluency, which keeps the message easy to follow.".to_string(),
        ),
    }
}

pub fn vocal_confidence(leaning: Leaning, f: &FeatureSet) -> Narrative {
    match leaning {
        Leaning::Positive => narrative(
            format!(
                "Confident language ({} markers) clearly outweighs hedging ({}).",
                f.confidence_word_count, f.uncertainty_word_count
            ),
            "Statements are delivered with assurance, which builds credibility with the customer.".to_string(),
        ),
        Leaning::Neutral => narrative(
            format!(
                "Confident language ({} markers) slightly outweighs hedging ({}).",
                f.confidence_word_count, f.uncertainty_word_count
            ),
            "Delivery is steady but hedged in places. Replacing qualifiers with direct statements would strengthen the impression.".to_string(),
        ),
        Leaning::Negative => narrative(
            format!(
                "Hedging language ({} markers) matches or exceeds confident language ({}).",
                f.uncertainty_word_count, f.confidence_word_count
            ),
            "Frequent qualifiers undercut the message. Committing to definite phrasing where the facts allow it would help.".to_string(),
        ),
    }
}

pub fn voice_quality(leaning: Leaning, f: &FeatureSet) -> Narrative {
    let rate = f.speaking_rate_wpm;
    match leaning {
        Leaning::Positive => narrative(
            format!("Speaking rate of {:.0} wpm sits in the comfortable 120-180 range.", rate),
            "Pace supports an even, intelligible delivery throughout the call.".to_string(),
        ),
        Leaning::Neutral => narrative(
            format!("Speaking rate of {:.0} wpm is slightly outside the ideal range.", rate),
            "Delivery is understandable but drifts from the comfortable band; minor pace adjustment would help.".to_string(),
        ),
        Leaning::Negative => narrative(
            format!("Speaking rate of {:.0} wpm is well outside the comfortable range.", rate),
            "Pace at this level strains comprehension. Aim for roughly 150 words per minute.".to_string(),
        ),
    }
}

pub fn active_listening(leaning: Leaning, f: &FeatureSet) -> Narrative {
    match leaning {
        Leaning::Positive => narrative(
            format!("{} listening cues were detected across the call.", f.listening_cue_count),
            "Regular acknowledgments show the customer they are being heard, which keeps the conversation cooperative.".to_string(),
        ),
        Leaning::Neutral => narrative(
            format!("Only {} listening cue(s) were detected.", f.listening_cue_count),
            "Acknowledgment is present but sparse. More frequent short confirmations would signal engagement.".to_string(),
        ),
        Leaning::Negative => narrative(
            "No listening cues were detected.".to_string(),
            "The transcript shows no acknowledgment phrases. Reflecting the customer's words back is the fastest way to demonstrate listening.".to_string(),
        ),
    }
}

pub fn pacing_turn_taking(leaning: Leaning, f: &FeatureSet) -> Narrative {
    let r = f.agent_turn_ratio;
    match leaning {
        Leaning::Positive => narrative(
            format!("Agent holds {:.0}% of attributed turns, a balanced share.", r),
            "Turn distribution leaves the customer room to respond, which keeps the exchange two-sided.".to_string(),
        ),
        Leaning::Neutral => narrative(
            format!("Agent holds {:.0}% of attributed turns.", r),
            "The conversation leans one-sided at times. Inviting responses more often would even out the exchange.".to_string(),
        ),
        Leaning::Negative => narrative(
            format!("Agent holds {:.0}% of attributed turns, a heavily skewed share.", r),
            "One party dominates the call. Deliberate check-in questions would restore balance.".to_string(),
        ),
    }
}

pub fn pauses_silence(leaning: Leaning, f: &FeatureSet) -> Narrative {
    let freq = f.pause_frequency_per_minute;
    match leaning {
        Leaning::Positive => narrative(
            format!("{:.1} pause markers per minute, a natural level.", freq),
            "Pausing is controlled and does not interrupt the flow of the call.".to_string(),
        ),
        Leaning::Neutral => narrative(
            format!("{:.1} pause markers per minute, slightly elevated.", freq),
            "Noticeable hesitation appears in places. Preparing key phrasing in advance would smooth delivery.".to_string(),
        ),
        Leaning::Negative => narrative(
            format!("{:.1} pause markers per minute, a high level.", freq),
            "Frequent breaks fragment the conversation and can read as uncertainty to the customer.".to_string(),
        ),
    }
}

pub fn adaptability(leaning: Leaning, f: &FeatureSet) -> Narrative {
    match leaning {
        Leaning::Positive => narrative(
            format!("{} rephrasing/adaptation phrases were detected.", f.adaptability_phrase_count),
            "The agent adjusts explanations when the first framing does not land, a strong adaptability signal.".to_string(),
        ),
        Leaning::Neutral => narrative(
            format!("{} adaptation phrase(s) were detected.", f.adaptability_phrase_count),
            "Some willingness to reframe is visible. Offering alternative explanations proactively would improve it.".to_string(),
        ),
        Leaning::Negative => narrative(
            "No adaptation phrases were detected.".to_string(),
            "The transcript shows no rephrasing or alternative framing; explanations were delivered a single way.".to_string(),
        ),
    }
}

pub fn emotional_expressiveness(leaning: Leaning, f: &FeatureSet) -> Narrative {
    let pct = f.ratio(f.emotional_word_count) * 100.0;
    match leaning {
        Leaning::Positive => narrative(
            format!("Emotional vocabulary makes up {:.1}% of the call.", pct),
            "Feeling words are named and engaged with rather than avoided, which humanizes the exchange.".to_string(),
        ),
        Leaning::Neutral => narrative(
            format!("Emotional vocabulary makes up {:.1}% of the call.", pct),
            "Emotion is acknowledged occasionally. Naming the customer's state more directly can deepen rapport.".to_string(),
        ),
        Leaning::Negative => narrative(
            format!("Emotional vocabulary makes up only {:.1}% of the call.", pct),
            "The conversation stays flat in tone; emotional cues from the customer may be going unaddressed.".to_string(),
        ),
    }
}

pub fn empathy_rapport(leaning: Leaning, f: &FeatureSet) -> Narrative {
    match leaning {
        Leaning::Positive => narrative(
            format!("{} empathy markers were detected.", f.empathy_word_count),
            "Empathetic phrasing appears consistently, which builds trust across the call.".to_string(),
        ),
        Leaning::Neutral => narrative(
            format!("{} empathy marker(s) were detected.", f.empathy_word_count),
            "Empathy is present but limited. Explicit acknowledgment of the customer's situation would strengthen rapport.".to_string(),
        ),
        Leaning::Negative => narrative(
            "No empathy markers were detected.".to_string(),
            "The transcript contains no empathetic phrasing; the call reads as transactional.".to_string(),
        ),
    }
}

pub fn conflict_management(leaning: Leaning, f: &FeatureSet) -> Narrative {
    match leaning {
        Leaning::Positive => narrative(
            "No signs of escalation were detected.".to_string(),
            "Emotional language stays low and the agent's footing stays sure; the call remained controlled.".to_string(),
        ),
        Leaning::Neutral => narrative(
            format!("{} emotional terms suggest mild friction.", f.emotional_word_count),
            "Some tension is visible but contained. Acknowledging the frustration explicitly usually defuses it faster.".to_string(),
        ),
        Leaning::Negative => narrative(
            format!(
                "{} emotional terms combined with hedged responses suggest escalation.",
                f.emotional_word_count
            ),
            "The call shows friction that the agent met with uncertainty. De-escalation language and firmer answers are needed.".to_string(),
        ),
    }
}

pub fn customer_centric(leaning: Leaning, f: &FeatureSet) -> Narrative {
    let signals = f.empathy_word_count + f.listening_cue_count;
    match leaning {
        Leaning::Positive => narrative(
            format!("{} customer-focused signals (empathy + listening cues) were detected.", signals),
            "Attention stays on the customer's needs rather than the script.".to_string(),
        ),
        Leaning::Neutral => narrative(
            format!("{} customer-focused signal(s) were detected.", signals),
            "The customer's perspective surfaces occasionally; more explicit acknowledgment would center the call on them.".to_string(),
        ),
        Leaning::Negative => narrative(
            format!("Only {} customer-focused signal(s) were detected.", signals),
            "The call reads as agent-driven. Listening cues and empathy statements are the quickest fix.".to_string(),
        ),
    }
}

pub fn language_appropriateness(leaning: Leaning, f: &FeatureSet) -> Narrative {
    match leaning {
        Leaning::Positive => narrative(
            "No casual register was detected.".to_string(),
            "Language stays professional throughout the call.".to_string(),
        ),
        Leaning::Neutral => narrative(
            format!(
                "{} casual term(s) appear against {} professional markers.",
                f.casual_word_count, f.professional_word_count
            ),
            "Occasional informality is present but professionalism dominates.".to_string(),
        ),
        Leaning::Negative => narrative(
            format!(
                "Casual terms ({}) outnumber professional markers ({}).",
                f.casual_word_count, f.professional_word_count
            ),
            "The register tips informal for a compliance-sensitive call; tightening word choice is advised.".to_string(),
        ),
    }
}

pub fn personal_boundaries(leaning: Leaning, f: &FeatureSet) -> Narrative {
    let pct = f.ratio(f.casual_word_count) * 100.0;
    match leaning {
        Leaning::Positive => narrative(
            "Conversation stays within professional boundaries.".to_string(),
            "No over-familiar language was detected.".to_string(),
        ),
        Leaning::Neutral => narrative(
            format!("Casual language at {:.1}% of the call edges toward familiarity.", pct),
            "Mostly appropriate, with occasional slips into informality.".to_string(),
        ),
        Leaning::Negative => narrative(
            format!("Casual language at {:.1}% of the call crosses into over-familiarity.", pct),
            "The tone is too informal for this context and should be reined in.".to_string(),
        ),
    }
}

pub fn professional_demeanor(leaning: Leaning, f: &FeatureSet) -> Narrative {
    match leaning {
        Leaning::Positive => narrative(
            format!("{} professionalism markers were detected.", f.professional_word_count),
            "Courtesy phrasing appears throughout, which sets a respectful tone.".to_string(),
        ),
        Leaning::Neutral => narrative(
            format!("{} professionalism marker(s) were detected.", f.professional_word_count),
            "Courtesy is present but thin; consistent please/thank-you phrasing would lift the impression.".to_string(),
        ),
        Leaning::Negative => narrative(
            "No professionalism markers were detected.".to_string(),
            "The transcript lacks courtesy phrasing entirely, which reads as brusque.".to_string(),
        ),
    }
}

pub fn professional_knowledge(leaning: Leaning, f: &FeatureSet) -> Narrative {
    let total = f.confidence_word_count + f.uncertainty_word_count;
    let pct = f.confidence_word_count as f64 / total as f64 * 100.0;
    match leaning {
        Leaning::Positive => narrative(
            format!("{:.0}% of certainty-bearing language is assured rather than hedged.", pct),
            "Product questions are answered with conviction, signaling command of the material.".to_string(),
        ),
        Leaning::Neutral => narrative(
            format!("{:.0}% of certainty-bearing language is assured.", pct),
            "Knowledge comes through but with hedging; verifying weak areas before calls would firm it up.".to_string(),
        ),
        Leaning::Negative => narrative(
            format!("Only {:.0}% of certainty-bearing language is assured.", pct),
            "Hedged answers dominate, suggesting gaps in product knowledge.".to_string(),
        ),
    }
}

// Sub-metric narratives are briefer; the rating label carries most of the
// display weight.

pub fn sub_metric(label: &str, active: &str) -> Narrative {
    narrative(
        format!("{} rated {} from transcript evidence.", label, active),
        format!("The {} rating follows directly from the thresholds applied to this call.", active),
    )
}
