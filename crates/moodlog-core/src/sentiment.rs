//! Output contract of the remote sentiment analysis collaborator.
//!
//! The request itself lives outside this crate; only the JSON result it
//! returns is accepted and validated here.

use serde::{Deserialize, Serialize};

use crate::error::InputError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SentimentAnalysis {
    /// Free-form emotion names; not restricted to the local label set.
    pub emotions: Vec<String>,
    pub sentiment: Sentiment,
    /// In `[-1, 1]` after [`parse_analysis`].
    pub sentiment_score: f64,
    pub insights: String,
}

impl SentimentAnalysis {
    pub fn band(&self) -> &'static str {
        score_band(self.sentiment_score)
    }

    /// Position of the score on a 0..=100 gauge.
    pub fn gauge_percent(&self) -> f64 {
        (self.sentiment_score + 1.0) / 2.0 * 100.0
    }
}

/// Display band for a sentiment score.
pub fn score_band(score: f64) -> &'static str {
    if score > 0.5 {
        "Very Positive"
    } else if score > 0.2 {
        "Positive"
    } else if score > -0.2 {
        "Neutral"
    } else if score > -0.5 {
        "Negative"
    } else {
        "Very Negative"
    }
}

/// Parse and normalise a raw analysis payload. Scores outside `[-1, 1]`
/// are clamped; non-finite scores are rejected.
pub fn parse_analysis(raw: &str) -> Result<SentimentAnalysis, InputError> {
    let mut analysis: SentimentAnalysis =
        serde_json::from_str(raw.trim()).map_err(|e| InputError::MalformedAnalysis(e.to_string()))?;
    if !analysis.sentiment_score.is_finite() {
        return Err(InputError::MalformedAnalysis(
            "sentimentScore is not a finite number".to_string(),
        ));
    }
    analysis.sentiment_score = analysis.sentiment_score.clamp(-1.0, 1.0);
    analysis.emotions.retain(|e| !e.trim().is_empty());
    Ok(analysis)
}
