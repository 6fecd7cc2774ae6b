use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InputError;

/// Closed set of emotion / mood labels.
///
/// Declaration order is significant: classifier ties and `topEmotion` ties
/// are both resolved in favour of the label that comes first in [`Label::ALL`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Happy,
    Sad,
    Anxious,
    Calm,
    Angry,
    Neutral,
}

impl Label {
    pub const ALL: [Label; 6] = [
        Label::Happy,
        Label::Sad,
        Label::Anxious,
        Label::Calm,
        Label::Angry,
        Label::Neutral,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Happy => "happy",
            Label::Sad => "sad",
            Label::Anxious => "anxious",
            Label::Calm => "calm",
            Label::Angry => "angry",
            Label::Neutral => "neutral",
        }
    }

    /// Position in [`Label::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Badge colour used by the detection result card.
    pub fn color(self) -> &'static str {
        match self {
            Label::Happy => "#fbbf24",
            Label::Sad => "#60a5fa",
            Label::Anxious => "#f87171",
            Label::Calm => "#34d399",
            Label::Angry => "#ef4444",
            Label::Neutral => "#9ca3af",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Label {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Label::ALL
            .into_iter()
            .find(|l| l.as_str() == wanted)
            .ok_or_else(|| InputError::UnknownLabel(s.to_string()))
    }
}
