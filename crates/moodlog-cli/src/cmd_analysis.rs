use moodlog_core::sentiment::{parse_analysis, SentimentAnalysis};
use std::io::Read;

/// `moodlog analysis <file|->`
pub fn show(source: &str) -> anyhow::Result<()> {
    let raw = if source == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(source)
            .map_err(|e| anyhow::anyhow!("cannot read {source}: {e}"))?
    };
    let analysis = parse_analysis(&raw)?;
    print!("{}", render(&analysis));
    Ok(())
}

fn render(a: &SentimentAnalysis) -> String {
    let mut out = String::new();
    let emotions = if a.emotions.is_empty() {
        "(none)".to_string()
    } else {
        a.emotions.join(", ")
    };
    out.push_str(&format!("Detected emotions: {emotions}\n"));
    out.push_str(&format!(
        "Sentiment: {} (score {:.2}, {:.0}% on the scale)\n",
        a.band(),
        a.sentiment_score,
        a.gauge_percent()
    ));
    if !a.insights.trim().is_empty() {
        out.push_str(&format!("\n{}\n", a.insights.trim()));
    }
    out
}
