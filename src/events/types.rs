use serde::{Deserialize, Serialize};

/// Conversational milestones attached to segments. Closed vocabulary: the
/// serialized strings are a wire contract with downstream badge rendering
/// and must not change. HoldEnd and TransferEnd are part of the vocabulary
/// but no tagger rule currently emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventTag {
    #[serde(rename = "AGENT PROSPECT DIALOG START")]
    DialogStart,
    #[serde(rename = "AGENT PROSPECT DIALOG END")]
    DialogEnd,
    #[serde(rename = "INTRODUCTION START")]
    IntroductionStart,
    #[serde(rename = "INTRODUCTION END")]
    IntroductionEnd,
    #[serde(rename = "PRIMARY AGENT START")]
    PrimaryAgentStart,
    #[serde(rename = "HOLD START")]
    HoldStart,
    #[serde(rename = "HOLD END")]
    HoldEnd,
    #[serde(rename = "TRANSFER START")]
    TransferStart,
    #[serde(rename = "TRANSFER END")]
    TransferEnd,
    #[serde(rename = "AUTO ATTDNT START")]
    AutoAttendantStart,
    #[serde(rename = "CALL END")]
    CallEnd,
}

impl EventTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventTag::DialogStart => "AGENT PROSPECT DIALOG START",
            EventTag::DialogEnd => "AGENT PROSPECT DIALOG END",
            EventTag::IntroductionStart => "INTRODUCTION START",
            EventTag::IntroductionEnd => "INTRODUCTION END",
            EventTag::PrimaryAgentStart => "PRIMARY AGENT START",
            EventTag::HoldStart => "HOLD START",
            EventTag::HoldEnd => "HOLD END",
            EventTag::TransferStart => "TRANSFER START",
            EventTag::TransferEnd => "TRANSFER END",
            EventTag::AutoAttendantStart => "AUTO ATTDNT START",
            EventTag::CallEnd => "CALL END",
        }
    }
}

impl std::fmt::Display for EventTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fold accumulator for the event tagger. Lives for exactly one pipeline
/// invocation and is never exposed outside it.
#[derive(Debug, Clone, Copy)]
pub struct ConversationState {
    pub dialog_started: bool,
    pub in_introduction_phase: bool,
    pub cursor_time_seconds: f64,
}

impl Default for ConversationState {
    fn default() -> Self {
        Self {
            dialog_started: false,
            in_introduction_phase: true,
            cursor_time_seconds: 0.0,
        }
    }
}
