use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::io::IsTerminal;

use super::stars::StarRating;
use crate::render::escape_text;
use crate::scoring::{Criterion, ScoreReport, ScoringMode};
use crate::tips::TipCatalog;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score as "{score}/{threshold} ({percentage}%)"
pub fn format_score(report: &ScoreReport) -> String {
    format!("{}/{} ({}%)", report.score, report.threshold, report.percentage)
}

/// Human readable report: header, one line per criterion, then tips.
pub fn format_report(report: &ScoreReport, use_colors: bool) -> String {
    let stars = StarRating::from_percentage(report.percentage).to_text();
    let mut lines = Vec::new();

    if use_colors {
        lines.push(format!(
            "{} {}  {}",
            "SEO score".bold(),
            format_score(report),
            stars.yellow()
        ));
        lines.push(format!("  Mode: {}", report.mode.cyan()));
    } else {
        lines.push(format!("SEO score {}  {}", format_score(report), stars));
        lines.push(format!("  Mode: {}", report.mode));
    }

    lines.push(String::new());
    for result in &report.criteria {
        lines.push(format_criterion_line(result.criterion, result.passed, use_colors));
    }

    if !report.tips.is_empty() {
        lines.push(String::new());
        lines.push(if use_colors {
            format!("{}", "Tips:".bold())
        } else {
            "Tips:".to_string()
        });
        for tip in &report.tips {
            lines.push(format!("  - {}", tip));
        }
    }

    lines.join("\n")
}

fn format_criterion_line(criterion: Criterion, passed: bool, use_colors: bool) -> String {
    match (passed, use_colors) {
        (true, true) => format!("  {} {}", "✓".green(), criterion),
        (false, true) => format!("  {} {}", "✗".red(), criterion.dimmed()),
        (true, false) => format!("  [x] {}", criterion),
        (false, false) => format!("  [ ] {}", criterion),
    }
}

/// Pretty JSON of the whole report.
pub fn format_json(report: &ScoreReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize score report")
}

/// Tips as `<ul id="seo_score_tips">`; no tips, no markup.
pub fn format_tips_html(tips: &[String]) -> String {
    if tips.is_empty() {
        return String::new();
    }

    let items: String = tips
        .iter()
        .map(|tip| format!("<li>{}</li>", escape_text(tip)))
        .collect();
    format!("<ul id=\"seo_score_tips\">{}</ul>", items)
}

/// Star widget followed by the tip list, as embedded next to an editor.
pub fn format_report_html(report: &ScoreReport) -> String {
    let stars = StarRating::from_percentage(report.percentage).to_html();
    let tips = format_tips_html(&report.tips);
    if tips.is_empty() {
        stars
    } else {
        format!("{}\n{}", stars, tips)
    }
}

/// The scored criteria of `mode` with their tip messages.
pub fn format_criteria(mode: ScoringMode, catalog: &TipCatalog, use_colors: bool) -> String {
    let criteria = mode.criteria();
    let mut lines = vec![format!("{} mode: {} criteria", mode, criteria.len())];

    for criterion in criteria {
        let tip = catalog.message(*criterion).unwrap_or("(no tip)");
        if use_colors {
            lines.push(format!("  {}\n      {}", criterion.cyan(), tip.dimmed()));
        } else {
            lines.push(format!("  {}\n      {}", criterion, tip));
        }
    }

    lines.join("\n")
}
