use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::label::Label;
use crate::lexicon::Lexicon;

/// Match count at which confidence reaches 1.0.
pub const DEFAULT_SATURATION: u32 = 3;

/// Result of scoring one piece of text against a lexicon.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Classification {
    pub label: Label,
    /// Normalised into `[0, 1]`; 0 when nothing matched.
    pub confidence: f64,
    /// Distinct trigger words of `label` found in the text.
    pub matches: u32,
}

/// Keyword-frequency classifier bound to one lexicon and one fallback label.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    lexicon: Lexicon,
    fallback: Label,
    saturation: u32,
}

impl Classifier {
    pub fn new(lexicon: Lexicon, fallback: Label) -> Self {
        Self {
            lexicon,
            fallback,
            saturation: DEFAULT_SATURATION,
        }
    }

    /// Override the saturation point. Values below 1 are raised to 1.
    pub fn with_saturation(mut self, saturation: u32) -> Self {
        self.saturation = saturation.max(1);
        self
    }

    /// Score `text`. Never fails: no match yields the fallback with confidence 0.
    pub fn classify(&self, text: &str) -> Classification {
        let normalized = text.to_lowercase();

        let mut best: Option<(Label, u32)> = None;
        for label in self.lexicon.labels() {
            let count = count_distinct(&normalized, self.lexicon.words(label));
            // Strictly greater: the earlier label keeps a tie.
            if count > best.map_or(0, |(_, c)| c) {
                best = Some((label, count));
            }
        }

        match best {
            Some((label, matches)) => Classification {
                label,
                confidence: confidence(matches, self.saturation),
                matches,
            },
            None => Classification {
                label: self.fallback,
                confidence: 0.0,
                matches: 0,
            },
        }
    }
}

/// One-shot form of [`Classifier::classify`] with the default saturation.
pub fn classify(text: &str, lexicon: Lexicon, fallback: Label) -> Classification {
    Classifier::new(lexicon, fallback).classify(text)
}

/// Reject empty or whitespace-only text before it reaches a classifier.
pub fn validate_input(text: &str) -> Result<&str, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(trimmed)
}

fn count_distinct(haystack: &str, words: &[&str]) -> u32 {
    let mut seen: Vec<&str> = Vec::with_capacity(words.len());
    for w in words {
        if !seen.contains(w) && haystack.contains(w) {
            seen.push(w);
        }
    }
    seen.len() as u32
}

fn confidence(matches: u32, saturation: u32) -> f64 {
    let saturation = saturation.max(1);
    f64::from(matches.min(saturation)) / f64::from(saturation)
}
