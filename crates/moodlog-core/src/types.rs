use serde::{Deserialize, Serialize};

use crate::classify::Classification;
use crate::label::Label;
use crate::tables::{StickerTemplate, YogaPose};

/// Journal entry ID format: `jrn_<ulid>`
pub type EntryId = String;

/// Sticker ID format: `stk_<ulid>`
pub type StickerId = String;

/// One classified piece of text (one element of `emotionHistory`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmotionRecord {
    pub emotion: Label,
    pub confidence: f64,
    pub source_text: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: EntryId,
    pub text: String,
    pub emotion: Label,
    pub created_at: String,
    pub display_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct YogaSession {
    pub pose_name: String,
    pub duration: String,
    pub completed_at: String,
}

/// Owned copy of a [`StickerTemplate`] frozen into a sticker record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VisualTemplate {
    pub emoji: String,
    pub color: String,
    pub caption: String,
    pub affirmation: String,
}

impl From<&StickerTemplate> for VisualTemplate {
    fn from(t: &StickerTemplate) -> Self {
        Self {
            emoji: t.emoji.to_string(),
            color: t.color.to_string(),
            caption: t.caption.to_string(),
            affirmation: t.affirmation.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Sticker {
    pub id: StickerId,
    pub pose_name: String,
    pub visual_template: VisualTemplate,
    pub created_at: String,
}

/// Dashboard numbers, derived on every read and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_emotions: usize,
    pub total_yoga_sessions: usize,
    pub total_stickers: usize,
    pub streak: u64,
    pub top_emotion: Label,
}

// ── Constructors ──

fn new_ulid_id(prefix: &str) -> String {
    format!("{prefix}_{}", ulid::Ulid::new().to_string().to_lowercase())
}

pub fn now_rfc3339() -> String {
    let now = time::OffsetDateTime::now_utc();
    now.format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| now.unix_timestamp().to_string())
}

/// `YYYY-MM-DD` of an RFC 3339 timestamp, or the raw prefix when it does not parse.
pub fn display_date(rfc3339: &str) -> String {
    match time::OffsetDateTime::parse(rfc3339, &time::format_description::well_known::Rfc3339) {
        Ok(ts) => format!(
            "{:04}-{:02}-{:02}",
            ts.year(),
            u8::from(ts.month()),
            ts.day()
        ),
        Err(_) => rfc3339.chars().take(10).collect(),
    }
}

pub fn new_emotion_record(text: &str, c: &Classification) -> EmotionRecord {
    EmotionRecord {
        emotion: c.label,
        confidence: c.confidence,
        source_text: text.to_string(),
        created_at: now_rfc3339(),
    }
}

pub fn new_journal_entry(text: &str, emotion: Label) -> JournalEntry {
    let created_at = now_rfc3339();
    JournalEntry {
        id: new_ulid_id("jrn"),
        text: text.to_string(),
        emotion,
        display_date: display_date(&created_at),
        created_at,
    }
}

pub fn new_yoga_session(pose: &YogaPose) -> YogaSession {
    YogaSession {
        pose_name: pose.name.to_string(),
        duration: pose.duration.to_string(),
        completed_at: now_rfc3339(),
    }
}

/// Build a sticker, copying `template` into the record.
pub fn new_sticker(pose_name: &str, template: &StickerTemplate) -> Sticker {
    Sticker {
        id: new_ulid_id("stk"),
        pose_name: pose_name.to_string(),
        visual_template: VisualTemplate::from(template),
        created_at: now_rfc3339(),
    }
}
