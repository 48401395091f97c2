use once_cell::sync::Lazy;
use regex::Regex;

// Category word/phrase lists. Matching is case-insensitive and boundary-aware:
// single words match whole tokens, multi-word entries match as whole phrases.
// Entries may overlap across categories ("certainly" is both a confidence and
// a professionalism marker); each category counts independently.

pub const FILLER_WORDS: &[&str] = &[
    "um", "uh", "er", "like", "you know", "kind of", "sort of", "basically", "actually",
];

pub const CONFIDENCE_WORDS: &[&str] = &[
    "definitely", "certainly", "absolutely", "confident", "exactly", "of course",
];

pub const UNCERTAINTY_WORDS: &[&str] = &[
    "maybe", "perhaps", "possibly", "probably", "i think", "i guess", "not sure", "might be",
];

pub const PROFESSIONAL_WORDS: &[&str] = &[
    "thank you", "please", "appreciate", "assist", "certainly", "welcome", "sir", "madam", "ma'am",
];

pub const CASUAL_WORDS: &[&str] = &[
    "yeah", "yep", "nope", "gonna", "wanna", "gotta", "cool", "dude", "stuff", "kinda",
];

pub const EMPATHY_WORDS: &[&str] = &[
    "i understand", "i'm sorry", "i apologize", "i hear you", "that must be",
    "completely understand", "sorry to hear",
];

pub const EMOTIONAL_WORDS: &[&str] = &[
    "frustrated", "angry", "upset", "happy", "excited", "worried", "concerned", "annoyed", "glad",
];

pub const LISTENING_CUES: &[&str] = &[
    "i understand", "i see", "tell me more", "go on", "got it", "that makes sense",
];

pub const ADAPTABILITY_PHRASES: &[&str] = &[
    "let me rephrase", "in other words", "another way", "to put it differently",
    "what if we", "alternatively", "let me explain",
];

// Speaker classification patterns. Strong patterns are agent-only phrasing
// (compliance scripts, qualification questions); moderate keywords are
// offer/help vocabulary that leans agent on long turns.

pub const STRONG_AGENT_PHRASES: &[&str] = &[
    "licensed agent", "calling from", "recorded line", "this call is recorded",
    "zip code", "qualify for", "my name is", "on behalf of", "assurant",
];

pub const AGENT_OFFER_KEYWORDS: &[&str] = &[
    "help", "assist", "offer", "benefit", "coverage", "plan", "provide", "options",
];

pub const CUSTOMER_NAME_TOKENS: &[&str] = &["john", "mary", "robert", "smith", "johnson"];

// Event-tagging phrase lists.

pub const SELF_INTRODUCTION_PHRASES: &[&str] = &[
    "my name is", "this is", "i'm calling", "calling from", "speaking",
];

pub const PRIMARY_AGENT_MARKERS: &[&str] = &["licensed agent", "senior agent", "primary agent"];

pub const ACKNOWLEDGMENT_TOKENS: &[&str] = &["yes", "okay"];

pub const HOLD_KEYWORDS: &[&str] = &["hold", "wait", "one moment", "just a moment", "bear with me"];

pub const TRANSFER_KEYWORDS: &[&str] = &[
    "transfer", "connect you", "connecting you", "specialist", "pass you",
];

pub const AUTO_ATTENDANT_KEYWORDS: &[&str] = &["press", "dial", "automated", "main menu"];

pub const CLOSING_QUESTION_PHRASES: &[&str] = &[
    "that's all the questions", "those are all the questions", "no further questions",
    "all the questions i have", "that completes",
];

/// Short standalone customer confirmation ("Yes.", "okay").
pub static CUSTOMER_CONFIRMATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(yes|no|okay|ok|sure|alright)$").unwrap());

/// Bare date replies ("03/15/1960", "15-03-60") read as customer answers.
pub static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b").unwrap());

/// Line-oriented speaker prefixes ("Agent: ...", "Customer - ...").
pub static AGENT_LINE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^\s*(agent|rep|representative|advisor)\s*[:\-]").unwrap());

pub static CUSTOMER_LINE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^\s*(customer|caller|client|prospect|member)\s*[:\-]").unwrap());

/// Pause markers: ellipsis, double dash, or a run of 2+ spaces.
pub static PAUSE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{3}|--| {2,}").unwrap());

fn is_boundary(c: Option<char>) -> bool {
    match c {
        None => true,
        Some(c) => !c.is_alphanumeric() && c != '\'',
    }
}

/// Count boundary-aware, non-overlapping occurrences of `entry` in `text`.
/// Both arguments must already be lowercased.
fn count_entry(text: &str, entry: &str) -> u32 {
    let mut count = 0;
    for (idx, _) in text.match_indices(entry) {
        let before = text[..idx].chars().next_back();
        let after = text[idx + entry.len()..].chars().next();
        if is_boundary(before) && is_boundary(after) {
            count += 1;
        }
    }
    count
}

/// Total occurrences of any list entry in `text` (lowercased by the caller).
pub fn count_matches(text: &str, entries: &[&str]) -> u32 {
    entries.iter().map(|e| count_entry(text, e)).sum()
}

/// True if any list entry occurs in `text` (lowercased by the caller).
pub fn contains_any(text: &str, entries: &[&str]) -> bool {
    entries.iter().any(|e| count_entry(text, e) > 0)
}
