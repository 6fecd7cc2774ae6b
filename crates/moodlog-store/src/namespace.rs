use std::fmt;

/// Persisted collections owned by the history store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    EmotionHistory,
    JournalEntries,
    YogaHistory,
    StickerHistory,
    Streak,
}

impl Namespace {
    pub const COUNT: usize = 5;

    pub const ALL: [Namespace; Namespace::COUNT] = [
        Namespace::EmotionHistory,
        Namespace::JournalEntries,
        Namespace::YogaHistory,
        Namespace::StickerHistory,
        Namespace::Streak,
    ];

    /// Storage key, shared with the mobile app's key-value layout.
    pub fn key(self) -> &'static str {
        match self {
            Namespace::EmotionHistory => "emotionHistory",
            Namespace::JournalEntries => "journalEntries",
            Namespace::YogaHistory => "yogaHistory",
            Namespace::StickerHistory => "stickerHistory",
            Namespace::Streak => "streak",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Opaque login fields owned by the authentication layer. The store only
/// ever removes them (logout).
pub const SESSION_KEYS: [&str; 3] = ["userToken", "userName", "userEmail"];
