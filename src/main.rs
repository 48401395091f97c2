use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use vocalytics::{analyze, TimedWord, TranscriptSource, Utterance};

/// Heuristic call-transcript analysis: segments + communication scorecard.
#[derive(Parser, Debug)]
#[command(name = "vocalytics", version)]
struct Cli {
    /// Transcript file to analyze; reads stdin when omitted.
    path: Option<PathBuf>,

    /// JSON array of timed words ({word, start, end, confidence}).
    #[arg(long)]
    timings: Option<PathBuf>,

    /// JSON array of diarized utterances ({speaker, start, end, text}).
    #[arg(long)]
    utterances: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let transcript = match &cli.path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading transcript {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading transcript from stdin")?;
            buf
        }
    };

    let timed_words: Vec<TimedWord> = match &cli.timings {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading timings {}", path.display()))?;
            serde_json::from_str(&raw).context("parsing timings JSON")?
        }
        None => Vec::new(),
    };

    let utterances: Vec<Utterance> = match &cli.utterances {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading utterances {}", path.display()))?;
            serde_json::from_str(&raw).context("parsing utterances JSON")?
        }
        None => Vec::new(),
    };

    tracing::info!(
        chars = transcript.len(),
        timed_words = timed_words.len(),
        utterances = utterances.len(),
        "analyzing transcript"
    );

    let outcome = analyze(&TranscriptSource::from(transcript), &timed_words, &utterances);

    let rendered = if cli.compact {
        serde_json::to_string(&outcome)?
    } else {
        serde_json::to_string_pretty(&outcome)?
    };
    println!("{}", rendered);

    Ok(())
}
