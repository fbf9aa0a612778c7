//! Session listing, history, summary and report handlers
use anchor_core::{category_shares, dominant_category, summarize, SessionStore};
use anyhow::Result;
use tabled::{Table, Tabled};

use super::helpers::{open_store, truncate_message};

const MESSAGE_WIDTH: usize = 60;

#[derive(Tabled)]
struct SessionRow {
    #[tabled(rename = "Session")]
    session: String,
    #[tabled(rename = "Entries")]
    entries: usize,
    #[tabled(rename = "Last Seen")]
    last_seen: String,
    #[tabled(rename = "Dominant Mood")]
    dominant: String,
}

#[derive(Tabled)]
struct CategoryStats {
    #[tabled(rename = "Mood")]
    category: String,
    #[tabled(rename = "Entries")]
    count: usize,
    #[tabled(rename = "Percentage")]
    percentage: String,
}

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Time")]
    timestamp: String,
    #[tabled(rename = "Mood")]
    category: String,
    #[tabled(rename = "Message")]
    message: String,
}

pub fn handle_sessions_command() -> Result<()> {
    let (_, store) = open_store()?;
    match render_sessions(&store) {
        Some(table) => println!("{table}"),
        None => println!("No conversations recorded yet"),
    }
    Ok(())
}

pub fn handle_summary_command(session: &str) -> Result<()> {
    let (_, store) = open_store()?;
    println!("{}", summarize(&store.get_session(session)));
    Ok(())
}

pub fn handle_report_command(session: &str) -> Result<()> {
    let (_, store) = open_store()?;
    match render_report(&store, session) {
        Some(report) => println!("{report}"),
        None => println!("No conversations recorded for session: {session}"),
    }
    Ok(())
}

pub fn handle_history_command(session: &str, limit: usize) -> Result<()> {
    let (_, store) = open_store()?;
    match render_history(&store, session, limit) {
        Some(table) => println!("{table}"),
        None => println!("No conversations recorded for session: {session}"),
    }
    Ok(())
}

fn render_sessions(store: &SessionStore) -> Option<String> {
    let rows: Vec<SessionRow> = store
        .get_all_sessions()
        .into_iter()
        .map(|(session, entries)| SessionRow {
            entries: entries.len(),
            last_seen: entries
                .last()
                .map(|e| e.timestamp.clone())
                .unwrap_or_default(),
            dominant: dominant_category(&entries)
                .map(|c| c.to_string())
                .unwrap_or_default(),
            session,
        })
        .collect();

    if rows.is_empty() {
        return None;
    }
    Some(Table::new(rows).to_string())
}

fn render_report(store: &SessionStore, session: &str) -> Option<String> {
    let entries = store.get_session(session);
    if entries.is_empty() {
        return None;
    }

    let mut stats: Vec<CategoryStats> = category_shares(&entries)
        .into_iter()
        .map(|share| CategoryStats {
            category: share.category.to_string(),
            count: share.count,
            percentage: format!("{:.1}%", share.percentage),
        })
        .collect();
    stats.sort_by(|a, b| b.count.cmp(&a.count));

    Some(format!(
        "Emotional Report: {session}\n{}\n\n{}\n\n{}",
        "\u{2550}".repeat(28),
        Table::new(stats),
        summarize(&entries)
    ))
}

fn render_history(store: &SessionStore, session: &str, limit: usize) -> Option<String> {
    let rows: Vec<HistoryRow> = store
        .get_recent(session, limit)
        .into_iter()
        .map(|e| HistoryRow {
            timestamp: e.timestamp,
            category: e.emotional_state.to_string(),
            message: truncate_message(&e.user_message, MESSAGE_WIDTH),
        })
        .collect();

    if rows.is_empty() {
        return None;
    }
    Some(Table::new(rows).to_string())
}
