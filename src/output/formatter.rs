use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::calendar::HebrewFeast;
use crate::correlation::{CorrelationSignificance, CorrelationStats, FeastCorrelation};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a string to fit available width, accounting for Unicode
fn truncate(s: &str, max_width: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

fn tier_badge(significance: CorrelationSignificance, use_colors: bool) -> String {
    let label = significance.label().to_uppercase();
    let padded = format!("{:<8}", label);
    if !use_colors {
        return padded;
    }
    match significance {
        CorrelationSignificance::Critical => padded.red().bold().to_string(),
        CorrelationSignificance::High => padded.yellow().to_string(),
        CorrelationSignificance::Medium => padded.cyan().to_string(),
        CorrelationSignificance::Low => padded.dimmed().to_string(),
    }
}

/// Short proximity phrase: "exactly on Passover", "2 days before Passover"
fn proximity_phrase(correlation: &FeastCorrelation<'_>) -> String {
    let feast = &correlation.feast.name;
    match correlation.proximity_days {
        0 => format!("exactly on {}", feast),
        d => {
            let days = d.abs();
            let unit = if days == 1 { "day" } else { "days" };
            let direction = if d > 0 { "before" } else { "after" };
            format!("{} {} {} {}", days, unit, direction, feast)
        }
    }
}

/// Format correlations as a ranked table:
/// Index, Score, Tier, Event, Date, Proximity.
/// Index column: 3 chars (fits "99."), right-aligned; score 3 chars.
pub fn format_correlation_table(correlations: &[FeastCorrelation<'_>], use_colors: bool) -> String {
    if correlations.is_empty() {
        return "No correlations found.".to_string();
    }

    let term_width = get_terminal_width();
    let separator = "  ";

    correlations
        .iter()
        .enumerate()
        .map(|(idx, c)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_str = format!("{:>3}", c.score);
            let event_str = format!("{:<18}", truncate(c.event.label(), 18));
            let date_str = c.event.date().date_naive().to_string();
            let phrase = proximity_phrase(c);

            // Fixed columns: index 3+1, score 3, tier 8, event 18, date 10,
            // plus the four separators ahead of the proximity phrase.
            let fixed_width = 4 + 3 + 8 + 18 + 10 + separator.len() * 4;
            let phrase = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate(&phrase, width - fixed_width)
                } else {
                    truncate(&phrase, 20)
                }
            } else {
                phrase
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    score_str.bold(),
                    separator,
                    tier_badge(c.significance, true),
                    separator,
                    event_str,
                    separator,
                    date_str.dimmed(),
                    format!("{}{}", separator, phrase)
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}{}{}",
                    index_str,
                    score_str,
                    separator,
                    tier_badge(c.significance, false),
                    separator,
                    event_str,
                    separator,
                    date_str,
                    separator,
                    phrase
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single correlation with its full reasoning (for --detail mode)
pub fn format_correlation_detail(correlation: &FeastCorrelation<'_>, use_colors: bool) -> String {
    let header = format!(
        "{} ({}) on {}",
        correlation.event.label(),
        correlation.event.id(),
        correlation.event.date().date_naive()
    );
    let score_line = format!(
        "Score: {} ({})",
        correlation.score,
        correlation.significance.label()
    );

    let mut lines = if use_colors {
        vec![header.bold().to_string(), format!("  {}", score_line)]
    } else {
        vec![header, format!("  {}", score_line)]
    };

    lines.push(format!(
        "  Feast: {} ({}), {}",
        correlation.feast.name, correlation.feast.hebrew_name, correlation.feast.date
    ));
    for reason in &correlation.reasoning {
        lines.push(format!("  - {}", reason));
    }

    lines.join("\n")
}

/// Format correlations as tab-separated values for scripting
/// Columns: score, tier, event id, type, date, feast, days (no headers, no colors)
pub fn format_tsv(correlations: &[FeastCorrelation<'_>]) -> String {
    if correlations.is_empty() {
        return String::new();
    }

    correlations
        .iter()
        .map(|c| {
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                c.score,
                c.significance.label(),
                c.event.id(),
                c.event.type_tag(),
                c.event.date().date_naive(),
                c.feast.name,
                c.proximity_days
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the feast calendar as one line per occurrence
pub fn format_feast_list(feasts: &[HebrewFeast], use_colors: bool) -> String {
    if feasts.is_empty() {
        return "No feasts in range.".to_string();
    }

    feasts
        .iter()
        .map(|f| {
            let span = match f.end_date {
                Some(end) => format!("{} to {}", f.date, end),
                None => f.date.to_string(),
            };
            if use_colors {
                format!(
                    "{}  {} ({})  {}  {}",
                    span.dimmed(),
                    f.name.bold(),
                    f.hebrew_name,
                    f.significance.label().cyan(),
                    f.biblical_reference
                )
            } else {
                format!(
                    "{}  {} ({})  {}  {}",
                    span,
                    f.name,
                    f.hebrew_name,
                    f.significance.label(),
                    f.biblical_reference
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format summary statistics as a small card
pub fn format_stats(stats: &CorrelationStats, use_colors: bool) -> String {
    let mut lines = Vec::new();

    let header = format!("Correlations: {}", stats.total);
    lines.push(if use_colors {
        header.bold().to_string()
    } else {
        header
    });
    lines.push(format!(
        "  critical: {}  high: {}  medium: {}  low: {}",
        stats.critical, stats.high, stats.medium, stats.low
    ));
    lines.push(format!("  average score: {:.1}", stats.average_score));

    if !stats.feast_breakdown.is_empty() {
        lines.push("By feast:".to_string());
        // HashMap order is arbitrary; sort for stable display.
        let mut breakdown: Vec<_> = stats.feast_breakdown.iter().collect();
        breakdown.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        for (feast, count) in breakdown {
            lines.push(format!("  {:<24} {}", feast, count));
        }
    }

    lines.join("\n")
}
