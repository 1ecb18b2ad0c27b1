use crate::domain::{ScoredEntity, SortCriterion};
use crate::render::format_score;
use crate::services::grading::{bar_fraction, Grade};
use crate::services::ranking::RankedEntry;
use crate::services::session::{Notice, NoticeKind};
use crate::services::statistics::AggregateStats;
use chrono::{DateTime, Local};

const BAR_WIDTH: usize = 20;

pub fn score_bar(score: f64) -> String {
    let filled = (bar_fraction(score) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// Terminal columns taken by `c`: Hangul, CJK and fullwidth forms take two.
fn char_width(c: char) -> usize {
    match c as u32 {
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA960..=0xA97F
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6
        | 0x20000..=0x3FFFD => 2,
        _ => 1,
    }
}

pub(crate) fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(text));
    format!("{}{}", text, " ".repeat(padding))
}

pub fn render_header(now: DateTime<Local>, total: usize, needs_refresh: bool) -> String {
    let mut out = String::new();
    out.push_str("MSP Partner Leaderboard\n");
    out.push_str("=======================\n");
    out.push_str(&format!("{}  |  {} partners\n", now.format("%Y-%m-%d %H:%M:%S"), total));
    if needs_refresh {
        out.push_str("New evaluation data detected: run `refresh` to update the board\n");
    }
    out
}

pub fn render_notice(notice: &Notice) -> String {
    let marker = match notice.kind {
        NoticeKind::Success => "[ok]",
        NoticeKind::Error => "[error]",
    };
    format!("{} {}\n", marker, notice.message)
}

pub fn render_stats(stats: &AggregateStats) -> String {
    let max = stats
        .max_total
        .map(format_score)
        .unwrap_or_else(|| "-".to_string());
    let leader = stats.leader_name.as_deref().unwrap_or("-");
    format!(
        "Partners: {}  Average: {}  Top score: {}  Leader: {}\n",
        stats.count,
        format_score(stats.average_total),
        max,
        leader
    )
}

pub fn render_board(view: &[RankedEntry<'_>], criterion: &SortCriterion) -> String {
    let mut out = String::new();
    out.push_str(&format!("Sorted by: {}\n\n", criterion));

    if view.is_empty() {
        out.push_str("No partners on the leaderboard yet.\n");
        return out;
    }

    let name_width = view
        .iter()
        .map(|entry| display_width(&entry.entity.name))
        .max()
        .unwrap_or(0)
        .max(4);

    out.push_str(&format!(
        "{:>4}  {}  {:>6}  {}\n",
        "Rank",
        pad_to_width("Name", name_width),
        "Score",
        "",
    ));
    for entry in view {
        out.push_str(&format!(
            "{:>4}  {}  {:>6}  {}\n",
            entry.rank,
            pad_to_width(&entry.entity.name, name_width),
            format_score(entry.value),
            score_bar(entry.value),
        ));
    }
    out
}

/// One partner with every category it was scored on. Categories the
/// backend left out are not shown.
pub fn render_detail(entity: &ScoredEntity, total_rank: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} (rank #{})\n", entity.name, total_rank));
    out.push_str(&format!(
        "Total: {} {} {}\n",
        format_score(entity.total_score),
        score_bar(entity.total_score),
        Grade::for_score(entity.total_score)
    ));

    if entity.category_scores.is_empty() {
        out.push_str("No category scores reported.\n");
        return out;
    }

    out.push_str("\nCategory breakdown\n");
    for (label, score) in &entity.category_scores {
        out.push_str(&format!(
            "  {}: {} {} {}\n",
            label,
            format_score(*score),
            score_bar(*score),
            Grade::for_score(*score)
        ));
    }
    out
}
