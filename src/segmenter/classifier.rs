use crate::lexicon;
use super::types::SpeakerRole;

/// All attribution confidence tops out below certainty; this is a heuristic.
const MAX_CONFIDENCE: u8 = 98;

/// Everything a classification rule is allowed to look at.
pub struct TurnContext {
    pub lower: String,
    pub is_question: bool,
    pub index: usize,
    pub len: usize,
}

impl TurnContext {
    pub fn new(text: &str, is_question: bool, index: usize) -> Self {
        Self {
            lower: text.to_lowercase(),
            is_question,
            index,
            len: text.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified {
    pub role: SpeakerRole,
    pub confidence: u8,
}

/// One entry of the ordered decision list. Rules are evaluated top to
/// bottom; the first one that returns Some wins.
pub struct Rule {
    pub name: &'static str,
    pub apply: fn(&TurnContext) -> Option<Classified>,
}

/// The decision list. Order is the precedence contract: strong curated
/// patterns before positional heuristics before fallbacks. The last rule is
/// total, so classification always succeeds.
pub const RULES: &[Rule] = &[
    Rule { name: "strong-agent-phrase", apply: strong_agent_phrase },
    Rule { name: "opening-turn", apply: opening_turn },
    Rule { name: "question-turn", apply: question_turn },
    Rule { name: "offer-turn", apply: offer_turn },
    Rule { name: "customer-confirmation", apply: customer_confirmation },
    Rule { name: "length-fallback", apply: length_fallback },
];

pub fn classify(ctx: &TurnContext) -> Classified {
    for rule in RULES {
        if let Some(c) = (rule.apply)(ctx) {
            return Classified {
                role: c.role,
                confidence: c.confidence.min(MAX_CONFIDENCE),
            };
        }
    }
    // The fallback rule is total; this is unreachable on any input.
    Classified { role: SpeakerRole::Agent, confidence: 70 }
}

/// Compliance/qualification script phrasing only an agent produces.
fn strong_agent_phrase(ctx: &TurnContext) -> Option<Classified> {
    if lexicon::contains_any(&ctx.lower, lexicon::STRONG_AGENT_PHRASES) {
        Some(Classified { role: SpeakerRole::Agent, confidence: 95 })
    } else {
        None
    }
}

/// The opening line of an outbound call belongs to the agent.
fn opening_turn(ctx: &TurnContext) -> Option<Classified> {
    if ctx.index == 0 {
        Some(Classified { role: SpeakerRole::Agent, confidence: 85 })
    } else {
        None
    }
}

/// Substantive questions are presumed agent-initiated.
fn question_turn(ctx: &TurnContext) -> Option<Classified> {
    if ctx.is_question && ctx.len > 15 {
        Some(Classified { role: SpeakerRole::Agent, confidence: 85 })
    } else {
        None
    }
}

/// Long turns carrying offer/help vocabulary lean agent.
fn offer_turn(ctx: &TurnContext) -> Option<Classified> {
    if ctx.len > 50 && lexicon::contains_any(&ctx.lower, lexicon::AGENT_OFFER_KEYWORDS) {
        Some(Classified { role: SpeakerRole::Agent, confidence: 85 })
    } else {
        None
    }
}

/// Short confirmations, bare dates, and known name tokens read as customer
/// replies. A very short pure confirmation is near-certain.
fn customer_confirmation(ctx: &TurnContext) -> Option<Classified> {
    if lexicon::CUSTOMER_CONFIRMATION.is_match(&ctx.lower) {
        let confidence = if ctx.len <= 6 { 95 } else { 90 };
        return Some(Classified { role: SpeakerRole::Customer, confidence });
    }
    if lexicon::DATE_PATTERN.is_match(&ctx.lower)
        || lexicon::contains_any(&ctx.lower, lexicon::CUSTOMER_NAME_TOKENS)
    {
        return Some(Classified { role: SpeakerRole::Customer, confidence: 90 });
    }
    None
}

/// Total fallback: long turns go to the agent, short ones alternate.
fn length_fallback(ctx: &TurnContext) -> Option<Classified> {
    let role = if ctx.len > 30 {
        SpeakerRole::Agent
    } else if ctx.index % 2 == 0 {
        SpeakerRole::Agent
    } else {
        SpeakerRole::Customer
    };
    Some(Classified { role, confidence: 70 })
}
