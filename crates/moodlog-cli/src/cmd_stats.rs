use moodlog_aggregate::{emotion_breakdown, Wellness};
use std::path::Path;

/// `moodlog stats [--json]`
pub fn stats(root: &Path, json: bool) -> anyhow::Result<()> {
    let (store, config) = crate::open(root)?;
    let wellness = Wellness::new(&store, config);
    let stats = wellness.dashboard()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Emotions tracked: {}", stats.total_emotions);
    println!("Yoga sessions:    {}", stats.total_yoga_sessions);
    println!("Stickers earned:  {}", stats.total_stickers);
    println!("Streak:           {}", stats.streak);
    println!("Top emotion:      {}", stats.top_emotion.as_str().to_uppercase());

    if stats.total_emotions > 0 {
        println!();
        for row in emotion_breakdown(&wellness.emotion_history()?) {
            if row.count > 0 {
                println!("  {:<8} {}", row.label, row.count);
            }
        }
    }
    Ok(())
}

/// `moodlog streak`
pub fn streak(root: &Path) -> anyhow::Result<()> {
    let (store, _) = crate::open(root)?;
    println!("{}", moodlog_aggregate::current_streak(&store)?);
    Ok(())
}

/// `moodlog logout`
pub fn logout(root: &Path) -> anyhow::Result<()> {
    let (store, config) = crate::open(root)?;
    Wellness::new(&store, config).logout()?;
    println!("Signed out.");
    Ok(())
}
