use clap::Subcommand;
use moodlog_aggregate::Wellness;
use moodlog_core::tables;
use moodlog_core::Label;
use std::path::Path;

#[derive(Subcommand)]
pub enum YogaCmd {
    /// Recommend poses for a mood (default: calm)
    Recommend {
        /// happy, sad, anxious, calm or angry
        mood: Option<String>,
    },
    /// Record a completed pose
    Complete {
        #[arg(required = true, num_args = 1..)]
        pose: Vec<String>,
    },
    /// Show practice history
    History {
        #[arg(long)]
        json: bool,
    },
}

pub fn run(cmd: YogaCmd, root: &Path) -> anyhow::Result<()> {
    match cmd {
        YogaCmd::Recommend { mood } => recommend(mood.as_deref()),
        YogaCmd::Complete { pose } => complete(root, &pose.join(" ")),
        YogaCmd::History { json } => history(root, json),
    }
}

fn recommend(mood: Option<&str>) -> anyhow::Result<()> {
    let mood: Label = match mood {
        Some(m) => m.parse()?,
        None => tables::TABLE_FALLBACK,
    };
    println!("Poses for {mood}:");
    for p in tables::yoga_poses(mood) {
        println!("  {:<20} {:>7}  {}", p.name, p.duration, p.benefits);
    }
    let moods: Vec<&str> = tables::yoga_moods().iter().map(|m| m.as_str()).collect();
    println!("\nMoods: {}", moods.join(", "));
    Ok(())
}

fn complete(root: &Path, pose: &str) -> anyhow::Result<()> {
    let (store, config) = crate::open(root)?;
    let session = Wellness::new(&store, config).complete_yoga_session(pose)?;
    println!("You completed {} ({})!", session.pose_name, session.duration);
    println!("Earn a sticker: `moodlog sticker generate {}`", session.pose_name);
    Ok(())
}

fn history(root: &Path, json: bool) -> anyhow::Result<()> {
    let (store, config) = crate::open(root)?;
    let sessions = Wellness::new(&store, config).yoga_history()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&sessions)?);
        return Ok(());
    }
    if sessions.is_empty() {
        println!("No yoga sessions yet.");
        return Ok(());
    }
    for s in sessions.iter().rev() {
        println!("{}  {:<20} {}", s.completed_at, s.pose_name, s.duration);
    }
    println!("\n({} sessions)", sessions.len());
    Ok(())
}
