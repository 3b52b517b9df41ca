//! Terminal rendering of the retrospective dashboard.

use crate::core::logic::DashboardView;
use crate::models::feedback::FeedbackTable;
use crate::models::summary::Summary;
use crate::utils::colors::{BLUE, GREEN, GREY, RED, RESET, colorize_optional, paint};
use crate::utils::formatting::{bold, describe_category, pad_left, pad_right, percent};
use crate::utils::table::{Column, Table};
use unicode_width::UnicodeWidthStr;

pub const TITLE: &str = "Innovation Retrospective";

const CARD_WIDTH: usize = 22;

/// Title block: dashboard name, data source and where to send feedback.
pub fn format_header(source: &str, form_url: &str) -> String {
    let mut out = format!("{BLUE}📊 {}{RESET}\n", bold(TITLE));
    out.push_str(&format!("{GREY}Source: {source}{RESET}\n"));
    if !form_url.trim().is_empty() {
        out.push_str(&format!("📝 Share your feedback: {}\n", form_url.trim()));
    }
    out
}

fn card(label: &str, value: usize, color: &str) -> Vec<String> {
    let inner = CARD_WIDTH - 2;
    vec![
        format!("┌{}┐", "─".repeat(inner)),
        format!("│{}│", pad_right(&format!(" {label}"), inner)),
        format!(
            "│{}│",
            pad_right(&format!(" {}", paint(&bold(&value.to_string()), color)), inner)
        ),
        format!("└{}┘", "─".repeat(inner)),
    ]
}

/// Three metric cards side by side: total, KEEP, Change/Stop.
pub fn format_metrics(summary: &Summary) -> String {
    let cards = [
        card("Total tickets", summary.total, RESET),
        card("🟢 Keep", summary.keep_count, GREEN),
        card("🔴 Change/Stop", summary.other_count, RED),
    ];

    let mut out = String::new();
    for line in 0..cards[0].len() {
        let parts: Vec<&str> = cards.iter().map(|c| c[line].as_str()).collect();
        out.push_str(&parts.join("  "));
        out.push('\n');
    }
    out
}

/// Per-label counts with their share of the filtered total.
pub fn format_breakdown(breakdown: &[(String, usize)], total: usize) -> String {
    let mut out = String::new();
    let label_w = breakdown
        .iter()
        .map(|(l, _)| UnicodeWidthStr::width(describe_category(l).0.as_str()))
        .max()
        .unwrap_or(0);

    for (label, count) in breakdown {
        let (text, color) = describe_category(label);
        out.push_str(&format!(
            "  {} {} ({:.1}%)\n",
            paint(&pad_right(&text, label_w), color),
            pad_left(&count.to_string(), 4),
            percent(*count, total)
        ));
    }
    out
}

/// Recent entries: received / type / comment, comments wrapped.
pub fn format_recent(recent: &FeedbackTable, wrap_width: usize) -> String {
    let mut table = Table::new(vec![
        Column::new("Received", 8),
        Column::new("Type", 4),
        Column::wrapped("Comment", wrap_width.max(10)),
    ]);

    for row in recent {
        let (text, color) = describe_category(row.category_label());
        table.add_row(vec![
            colorize_optional(&row.timestamp),
            paint(&text, color),
            row.comment_text().to_string(),
        ]);
    }

    table.fit_widths();
    table.render()
}

pub fn print_dashboard(view: &DashboardView, source: &str, form_url: &str, wrap_width: usize) {
    print!("{}", format_header(source, form_url));
    println!();
    print!("{}", format_metrics(&view.summary));

    if !view.breakdown.is_empty() {
        println!("\n{}", bold("By category"));
        print!("{}", format_breakdown(&view.breakdown, view.summary.total));
    }

    println!(
        "\n{}",
        bold(&format!("📥 Latest {} entries", view.recent.len()))
    );
    print!("{}", format_recent(&view.recent, wrap_width));
}
