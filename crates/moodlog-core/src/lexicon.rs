use crate::label::Label;

/// Static label -> trigger-word table.
///
/// Entry order carries no meaning; the classifier always walks labels in
/// [`Label::ALL`] order and asks the lexicon for each one.
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    pub name: &'static str,
    entries: &'static [(Label, &'static [&'static str])],
}

impl Lexicon {
    pub const fn new(name: &'static str, entries: &'static [(Label, &'static [&'static str])]) -> Self {
        Self { name, entries }
    }

    /// Trigger words for `label`, or an empty slice if the lexicon has none.
    pub fn words(&self, label: Label) -> &'static [&'static str] {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, words)| *words)
            .unwrap_or(&[])
    }

    /// Labels this lexicon can produce, in [`Label::ALL`] order.
    pub fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        Label::ALL
            .into_iter()
            .filter(move |l| !self.words(*l).is_empty())
    }
}

/// Lexicon used by free-text emotion detection.
pub const DETECTION: Lexicon = Lexicon::new(
    "detection",
    &[
        (
            Label::Happy,
            &["happy", "joy", "excited", "great", "wonderful", "amazing", "love"],
        ),
        (
            Label::Sad,
            &["sad", "depressed", "unhappy", "miserable", "down", "blue", "lonely"],
        ),
        (
            Label::Anxious,
            &["anxious", "worried", "nervous", "stressed", "tense", "afraid", "scared"],
        ),
        (
            Label::Calm,
            &["calm", "peaceful", "relaxed", "serene", "tranquil", "content"],
        ),
        (
            Label::Angry,
            &["angry", "furious", "mad", "irritated", "frustrated", "annoyed"],
        ),
    ],
);

/// Lexicon used when a journal entry is saved. It has no `calm` words;
/// journal text without triggers falls back to the journal fallback label.
pub const JOURNAL: Lexicon = Lexicon::new(
    "journal",
    &[
        (
            Label::Happy,
            &["happy", "joy", "excited", "great", "wonderful", "amazing", "love", "blessed"],
        ),
        (
            Label::Sad,
            &["sad", "depressed", "unhappy", "miserable", "down", "blue", "lonely", "hurt"],
        ),
        (
            Label::Anxious,
            &["anxious", "worried", "nervous", "stressed", "tense", "afraid", "scared", "panic"],
        ),
        (
            Label::Angry,
            &["angry", "furious", "mad", "irritated", "frustrated", "annoyed", "rage"],
        ),
    ],
);
