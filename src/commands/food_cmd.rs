use crate::food::analysis::nutrition::DailyTotals;
use crate::food::analysis::ring::{Macro, MacroRing};
use crate::food::models::{FoodLogEntry, Mood, UserProfile};
use chrono::{Local, TimeZone};
use colored::{ColoredString, Colorize};

const RING_WIDTH: usize = 30;
const PROGRESS_WIDTH: usize = 20;

pub const EMPTY_JOURNAL: &str = "Your aura is clear. Log a meal to begin the reflection.";

fn paint(kind: Macro, text: &str) -> ColoredString {
    match kind {
        Macro::Protein => text.green(),
        Macro::Carbs => text.yellow(),
        Macro::Fat => text.blue(),
    }
}

fn format_time(timestamp: i64) -> String {
    Local
        .timestamp_millis_opt(timestamp)
        .single()
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * PROGRESS_WIDTH as f64).round() as usize;
    let filled = filled.min(PROGRESS_WIDTH);
    format!(
        "{}{}",
        "█".repeat(filled).green(),
        "░".repeat(PROGRESS_WIDTH - filled).bright_black()
    )
}

pub fn render_profile(profile: &UserProfile) -> String {
    format!(
        "\n🍃 {} {}  |  {} {}  |  Goal: {} kcal\n   Nurturing your body, mindfully.",
        "AuraNutri".bold().green(),
        "AI".italic().green(),
        profile.name.bright_yellow(),
        format!("📈 {}%", profile.aura_score).bold().green(),
        profile.daily_calorie_goal.round()
    )
}

pub fn render_ring(ring: &MacroRing) -> String {
    let mut out = String::new();

    if ring.is_empty() {
        out.push_str(&format!("  {}\n", "░".repeat(RING_WIDTH).bright_black()));
    } else {
        let cells = ring.cells(RING_WIDTH);
        out.push_str("  ");
        for (segment, count) in ring.segments.iter().zip(cells) {
            out.push_str(&paint(segment.kind, &"█".repeat(count)).to_string());
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "  {} {}\n",
        format!("{}", ring.total_kcal.round()).bold(),
        "TOTAL KCAL".bright_black()
    ));

    for segment in &ring.segments {
        out.push_str(&format!(
            "  {} {:<8} {:>5} kcal ({:.0}%)\n",
            paint(segment.kind, "●"),
            segment.kind.label(),
            segment.kcal.round(),
            segment.fraction * 100.0
        ));
    }
    out
}

pub fn render_summary(totals: &DailyTotals, ring: &MacroRing, profile: &UserProfile) -> String {
    let progress = totals.calorie_progress(profile.daily_calorie_goal);
    format!(
        "\n🌿 {}\n  Calories: {} / {}\n  {}\n  Protein:  {}\n\n{}",
        "Daily Aura".bold(),
        format!("{}", totals.calories.round()).bold(),
        profile.daily_calorie_goal.round(),
        progress_bar(progress),
        format!("{}g", totals.protein.round()).bold(),
        render_ring(ring)
    )
}

pub fn render_entry(entry: &FoodLogEntry) -> String {
    let mut out = format!(
        "\n{} {}  {}\n",
        if entry.image.is_some() { "📷" } else { "🍽️" },
        entry.name.bold(),
        format!("[{}] {} • Logged with mindfulness", entry.id, format_time(entry.timestamp)).bright_black()
    );
    out.push_str(&format!("  ✨ \"{}\"\n", entry.insight.italic()));
    out.push_str(&format!(
        "  {} | {} | {} | {}\n",
        format!("{} kcal", entry.nutrition.calories).green(),
        format!("{}g Protein", entry.nutrition.protein).yellow(),
        format!("{}g Fat", entry.nutrition.fat).blue(),
        format!("Mood: {} {}", entry.mood.emoji(), entry.mood).magenta()
    ));

    let mut extras = Vec::new();
    if let Some(fiber) = entry.nutrition.fiber {
        extras.push(format!("{}g Fiber", fiber));
    }
    if let Some(sugar) = entry.nutrition.sugar {
        extras.push(format!("{}g Sugar", sugar));
    }
    if let Some(vitamins) = entry.nutrition.vitamins.as_ref().filter(|v| !v.is_empty()) {
        extras.push(format!("Vitamins: {}", vitamins.join(", ")));
    }
    if !extras.is_empty() {
        out.push_str(&format!("  {}\n", extras.join(" | ").bright_black()));
    }
    if !entry.description.is_empty() {
        out.push_str(&format!("  {}\n", entry.description.bright_black()));
    }
    out
}

pub fn render_journal(entries: &[FoodLogEntry]) -> String {
    if entries.is_empty() {
        return format!("\n🌬️  {}\n", EMPTY_JOURNAL.bright_black());
    }
    let mut out = format!("\n📖 {}\n", "Recent Reflections".bold());
    for entry in entries {
        out.push_str(&render_entry(entry));
    }
    out
}

pub fn render_moods(current: Mood) -> String {
    let mut out = String::from("\nHow do you feel?\n");
    for mood in Mood::ALL {
        let line = format!("  {} {}", mood.emoji(), mood);
        if mood == current {
            out.push_str(&format!("{} {}\n", line.bold().green(), "(selected)".bright_black()));
        } else {
            out.push_str(&format!("{}\n", line));
        }
    }
    out
}
