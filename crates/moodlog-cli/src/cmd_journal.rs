use clap::Subcommand;
use moodlog_aggregate::Wellness;
use std::path::Path;

// ── CLI Schema ──

#[derive(Subcommand)]
pub enum JournalCmd {
    /// Save an entry and get coping strategies for its mood
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// List entries, newest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete an entry by id
    Delete { id: String },
}

// ── Dispatch ──

pub fn run(cmd: JournalCmd, root: &Path) -> anyhow::Result<()> {
    match cmd {
        JournalCmd::Add { text } => add(root, &text.join(" ")),
        JournalCmd::List { json } => list(root, json),
        JournalCmd::Delete { id } => delete(root, &id),
    }
}

// ── Command Implementations ──

fn add(root: &Path, text: &str) -> anyhow::Result<()> {
    let (store, config) = crate::open(root)?;
    let wellness = Wellness::new(&store, config);
    let outcome = wellness.save_journal_entry(text)?;

    println!(
        "Saved {} (detected emotion: {})",
        outcome.entry.id, outcome.entry.emotion
    );
    println!("\nCoping strategies for you:");
    for s in outcome.strategies {
        println!("  - {}: {}", s.title, s.description);
    }
    Ok(())
}

fn list(root: &Path, json: bool) -> anyhow::Result<()> {
    let (store, config) = crate::open(root)?;
    let entries = Wellness::new(&store, config).journal_entries()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }
    if entries.is_empty() {
        println!("No entries yet. Start journaling!");
        return Ok(());
    }
    for e in &entries {
        println!("{}  {}  [{}]", e.display_date, e.id, e.emotion.as_str().to_uppercase());
        println!("    {}", e.text);
    }
    Ok(())
}

fn delete(root: &Path, id: &str) -> anyhow::Result<()> {
    let (store, config) = crate::open(root)?;
    if Wellness::new(&store, config).delete_journal_entry(id)? {
        println!("Deleted {id}");
    } else {
        anyhow::bail!("no journal entry with id {id}");
    }
    Ok(())
}
