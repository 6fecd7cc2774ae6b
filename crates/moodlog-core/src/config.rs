use serde::{Deserialize, Serialize};

use crate::classify::DEFAULT_SATURATION;
use crate::error::InputError;
use crate::label::Label;

/// User-tunable settings persisted as `config.json` in the store root.
///
/// Each call site that classifies text has its own fallback label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MoodlogConfig {
    /// Label for emotion detection text with no trigger words.
    pub detect_fallback: Label,
    /// Label for journal text with no trigger words.
    pub journal_fallback: Label,
    /// Distinct matches at which confidence reaches 100%.
    pub confidence_saturation: u32,
}

impl Default for MoodlogConfig {
    fn default() -> Self {
        Self {
            detect_fallback: Label::Neutral,
            journal_fallback: Label::Calm,
            confidence_saturation: DEFAULT_SATURATION,
        }
    }
}

impl MoodlogConfig {
    pub const KEYS: [&'static str; 3] =
        ["detect_fallback", "journal_fallback", "confidence_saturation"];

    pub fn get(&self, key: &str) -> Result<String, InputError> {
        match key {
            "detect_fallback" => Ok(self.detect_fallback.to_string()),
            "journal_fallback" => Ok(self.journal_fallback.to_string()),
            "confidence_saturation" => Ok(self.confidence_saturation.to_string()),
            _ => Err(InputError::UnknownConfigKey(key.to_string())),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), InputError> {
        let invalid = || InputError::InvalidConfigValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "detect_fallback" => self.detect_fallback = value.parse().map_err(|_| invalid())?,
            "journal_fallback" => self.journal_fallback = value.parse().map_err(|_| invalid())?,
            "confidence_saturation" => {
                let n: u32 = value.trim().parse().map_err(|_| invalid())?;
                if n == 0 {
                    return Err(invalid());
                }
                self.confidence_saturation = n;
            }
            _ => return Err(InputError::UnknownConfigKey(key.to_string())),
        }
        Ok(())
    }
}
