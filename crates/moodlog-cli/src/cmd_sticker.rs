use clap::Subcommand;
use moodlog_aggregate::Wellness;
use moodlog_core::tables;
use std::path::Path;

#[derive(Subcommand)]
pub enum StickerCmd {
    /// Generate a sticker for a pose (default: Sun Salutation)
    Generate {
        #[arg(num_args = 0..)]
        pose: Vec<String>,
    },
    /// List earned stickers
    List {
        #[arg(long)]
        json: bool,
    },
    /// List poses that have a sticker design
    Poses,
}

pub fn run(cmd: StickerCmd, root: &Path) -> anyhow::Result<()> {
    match cmd {
        StickerCmd::Generate { pose } => generate(root, &pose.join(" ")),
        StickerCmd::List { json } => list(root, json),
        StickerCmd::Poses => {
            for t in tables::sticker_templates() {
                println!("{} {:<20} {}", t.emoji, t.pose, t.caption);
            }
            Ok(())
        }
    }
}

fn generate(root: &Path, pose: &str) -> anyhow::Result<()> {
    let (store, config) = crate::open(root)?;
    let sticker = Wellness::new(&store, config).generate_sticker(Some(pose))?;
    let v = &sticker.visual_template;
    println!("{} {}", v.emoji, v.caption);
    println!("   \"{}\"", v.affirmation);
    println!("Pose: {}  Colour: {}  Id: {}", sticker.pose_name, v.color, sticker.id);
    Ok(())
}

fn list(root: &Path, json: bool) -> anyhow::Result<()> {
    let (store, config) = crate::open(root)?;
    let stickers = Wellness::new(&store, config).stickers()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&stickers)?);
        return Ok(());
    }
    if stickers.is_empty() {
        println!("No stickers yet. Complete a yoga pose to earn one.");
        return Ok(());
    }
    for s in &stickers {
        println!(
            "{} {:<22} {:<20} {}",
            s.visual_template.emoji, s.visual_template.caption, s.pose_name, s.created_at
        );
    }
    println!("\n({} stickers)", stickers.len());
    Ok(())
}
