//! Console report for one-shot CLI runs

use crate::processing::ScreeningReport;
use colored::Colorize;

/// Keyword lists printed on the console are truncated to this length.
const LIST_CAP: usize = 20;

pub fn print_report(report: &ScreeningReport) {
    println!(
        "Similarity score: {}",
        format!("{:.2}%", report.score * 100.0).bold().green()
    );
    println!("Top JD keywords: {}", format_list(&report.jd_keywords));
    println!(
        "Present: {}",
        format_list(&report.present_keywords).green()
    );
    println!(
        "Missing: {}",
        format_list(&report.missing_keywords).red()
    );
}

fn format_list(keywords: &[String]) -> String {
    let mut shown = keywords
        .iter()
        .take(LIST_CAP)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if keywords.len() > LIST_CAP {
        shown.push_str(", ...");
    }
    if shown.is_empty() {
        shown.push_str("(none)");
    }
    shown
}
