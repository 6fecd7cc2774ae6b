use moodlog_aggregate::Wellness;
use std::path::Path;

/// `moodlog detect <text...>`
pub fn detect(root: &Path, text: &str, json: bool) -> anyhow::Result<()> {
    let (store, config) = crate::open(root)?;
    let wellness = Wellness::new(&store, config);
    let d = wellness.detect_emotion(text)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&d.record)?);
        return Ok(());
    }

    let label = d.classification.label;
    println!("Detected emotion: {} ({})", label.as_str().to_uppercase(), label.color());
    println!("Confidence: {:.0}%", d.classification.confidence * 100.0);
    println!("Streak: {}", d.streak);
    println!("Next: `moodlog yoga recommend {label}`");
    Ok(())
}

/// `moodlog history [--clear] [--json]`
pub fn history(root: &Path, clear: bool, json: bool) -> anyhow::Result<()> {
    let (store, config) = crate::open(root)?;
    let wellness = Wellness::new(&store, config);

    if clear {
        wellness.clear_emotion_history()?;
        println!("Emotion history cleared.");
        return Ok(());
    }

    let records = wellness.emotion_history()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }
    if records.is_empty() {
        println!("No emotions recorded yet.");
        return Ok(());
    }
    for r in records.iter().rev() {
        println!(
            "{}  {:<8} {:>4.0}%  {}",
            r.created_at,
            r.emotion,
            r.confidence * 100.0,
            r.source_text
        );
    }
    println!("\n({} records)", records.len());
    Ok(())
}
