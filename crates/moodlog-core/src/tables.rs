//! Static recommendation tables: coping strategies and yoga poses keyed by
//! label, sticker templates keyed by pose name.
//!
//! Every lookup resolves; labels a table lacks map to its fallback entry.

use serde::Serialize;

use crate::label::Label;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CopingStrategy {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct YogaPose {
    pub name: &'static str,
    pub duration: &'static str,
    pub benefits: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct StickerTemplate {
    pub pose: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
    pub caption: &'static str,
    pub affirmation: &'static str,
}

/// Label used when a coping-strategy or yoga lookup misses.
pub const TABLE_FALLBACK: Label = Label::Calm;

/// Pose used when a sticker template lookup misses.
pub const STICKER_FALLBACK_POSE: &str = "Sun Salutation";

const fn cs(title: &'static str, description: &'static str) -> CopingStrategy {
    CopingStrategy { title, description }
}

const fn pose(name: &'static str, duration: &'static str, benefits: &'static str) -> YogaPose {
    YogaPose {
        name,
        duration,
        benefits,
    }
}

const fn tpl(
    pose: &'static str,
    emoji: &'static str,
    color: &'static str,
    caption: &'static str,
    affirmation: &'static str,
) -> StickerTemplate {
    StickerTemplate {
        pose,
        emoji,
        color,
        caption,
        affirmation,
    }
}

const COPING: &[(Label, &[CopingStrategy])] = &[
    (
        Label::Happy,
        &[
            cs("Share Your Joy", "Tell someone about what made you happy today"),
            cs("Gratitude Practice", "Write down 3 things you're grateful for"),
            cs("Celebrate", "Do something fun to amplify your positive mood"),
        ],
    ),
    (
        Label::Sad,
        &[
            cs("Reach Out", "Connect with a friend or family member"),
            cs("Self-Care", "Take a warm bath or do something comforting"),
            cs("Movement", "Go for a walk or do gentle stretching"),
            cs("Creative Expression", "Draw, paint, or listen to music"),
        ],
    ),
    (
        Label::Anxious,
        &[
            cs("Breathing Exercise", "Try 4-7-8 breathing: inhale 4, hold 7, exhale 8"),
            cs("Grounding Technique", "Name 5 things you see, 4 you hear, 3 you feel"),
            cs("Progressive Relaxation", "Tense and release each muscle group"),
            cs("Limit Caffeine", "Reduce caffeine intake to calm your nervous system"),
        ],
    ),
    (
        Label::Angry,
        &[
            cs("Physical Activity", "Exercise or go for a run to release tension"),
            cs("Cool Down", "Take a cold shower or splash cold water on your face"),
            cs("Write It Out", "Journal your feelings without filtering"),
            cs("Meditation", "Practice mindfulness to regain control"),
        ],
    ),
    (
        Label::Calm,
        &[
            cs("Maintain Balance", "Continue your current wellness routine"),
            cs("Meditation", "Deepen your practice with guided meditation"),
            cs("Journaling", "Reflect on what's keeping you calm"),
        ],
    ),
];

const POSES: &[(Label, &[YogaPose])] = &[
    (
        Label::Happy,
        &[
            pose("Sun Salutation", "10 min", "Energize and uplift"),
            pose("Warrior Pose", "5 min", "Build confidence"),
            pose("Tree Pose", "3 min", "Balance and focus"),
        ],
    ),
    (
        Label::Sad,
        &[
            pose("Child Pose", "5 min", "Calming and grounding"),
            pose("Legs Up Wall", "10 min", "Restore energy"),
            pose("Corpse Pose", "5 min", "Deep relaxation"),
        ],
    ),
    (
        Label::Anxious,
        &[
            pose("Breathing Exercise", "5 min", "Calm the mind"),
            pose("Cat-Cow Pose", "5 min", "Release tension"),
            pose("Downward Dog", "3 min", "Ground yourself"),
        ],
    ),
    (
        Label::Calm,
        &[
            pose("Lotus Pose", "10 min", "Deep meditation"),
            pose("Pigeon Pose", "5 min", "Hip opening"),
            pose("Savasana", "10 min", "Complete relaxation"),
        ],
    ),
    (
        Label::Angry,
        &[
            pose("Forward Fold", "5 min", "Release anger"),
            pose("Shoulder Stand", "3 min", "Perspective shift"),
            pose("Meditation", "10 min", "Inner peace"),
        ],
    ),
];

const STICKERS: &[StickerTemplate] = &[
    tpl("Sun Salutation", "☀️", "#fbbf24", "Sun Salutation Master", "I radiate positive energy"),
    tpl("Warrior Pose", "⚔️", "#ef4444", "Warrior Strong", "I am powerful and confident"),
    tpl("Tree Pose", "🌳", "#34d399", "Grounded & Balanced", "I am rooted and stable"),
    tpl("Child Pose", "🙏", "#60a5fa", "Inner Peace", "I find calm within"),
    tpl("Legs Up Wall", "🧘", "#a78bfa", "Restored Energy", "I am renewed and refreshed"),
    tpl("Corpse Pose", "😴", "#9ca3af", "Deep Relaxation", "I release all tension"),
    tpl("Breathing Exercise", "💨", "#06b6d4", "Breath Master", "My breath brings me peace"),
    tpl("Cat-Cow Pose", "🐱", "#f97316", "Flexible & Free", "I flow with ease"),
    tpl("Downward Dog", "🐕", "#8b5cf6", "Grounded Strength", "I am strong and grounded"),
    tpl("Lotus Pose", "🪷", "#ec4899", "Meditation Master", "I am one with my breath"),
    tpl("Pigeon Pose", "🕊️", "#14b8a6", "Hip Opening", "I release what no longer serves me"),
    tpl("Savasana", "✨", "#f59e0b", "Complete Relaxation", "I am at peace"),
    tpl("Forward Fold", "🌊", "#3b82f6", "Letting Go", "I release my worries"),
    tpl("Shoulder Stand", "🤸", "#10b981", "New Perspective", "I see things clearly"),
    tpl("Meditation", "🧠", "#6366f1", "Mindful Moment", "I am present and aware"),
];

fn lookup<T>(table: &'static [(Label, &'static [T])], label: Label) -> &'static [T] {
    let hit = table.iter().find(|(l, _)| *l == label);
    let hit = hit.or_else(|| table.iter().find(|(l, _)| *l == TABLE_FALLBACK));
    hit.map(|(_, items)| *items).unwrap_or(&[])
}

/// Coping strategies for `label`; labels without an entry get the `calm` list.
pub fn coping_strategies(label: Label) -> &'static [CopingStrategy] {
    lookup(COPING, label)
}

/// Yoga poses for `mood`; moods without an entry get the `calm` list.
pub fn yoga_poses(mood: Label) -> &'static [YogaPose] {
    lookup(POSES, mood)
}

/// Moods the yoga table has explicit entries for, in [`Label::ALL`] order.
pub fn yoga_moods() -> Vec<Label> {
    Label::ALL
        .into_iter()
        .filter(|l| POSES.iter().any(|(p, _)| p == l))
        .collect()
}

/// Find a pose by exact name across every mood list.
pub fn find_pose(name: &str) -> Option<&'static YogaPose> {
    POSES
        .iter()
        .flat_map(|(_, poses)| poses.iter())
        .find(|p| p.name == name)
}

/// Sticker template for `pose`; unknown poses get the Sun Salutation template.
pub fn sticker_template(pose: &str) -> &'static StickerTemplate {
    STICKERS
        .iter()
        .find(|t| t.pose == pose)
        .unwrap_or(&STICKERS[0])
}

/// Whether `pose` has its own sticker template.
pub fn has_sticker_template(pose: &str) -> bool {
    STICKERS.iter().any(|t| t.pose == pose)
}

/// All sticker templates in display order.
pub fn sticker_templates() -> &'static [StickerTemplate] {
    STICKERS
}
