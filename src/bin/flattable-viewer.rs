/// FlatTable Terminal Viewer
///
/// Fetches one batch of people records, prints the flattened table, and
/// then reads interaction events from stdin: a plain line sets the filter
/// query, a line starting with ':' sorts by that header, and an empty line
/// clears the filter.

use std::io::{self, BufRead, Write};

use flattable::{RandomUserSource, SortDirection, TableSession};

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let url = std::env::var("FLATTABLE_URL")
        .unwrap_or_else(|_| "https://randomuser.me/api/".to_string());
    let results: usize = std::env::var("FLATTABLE_RESULTS")
        .unwrap_or_else(|_| "20".to_string())
        .parse()
        .expect("FLATTABLE_RESULTS must be a number");

    let source = RandomUserSource::with_endpoint(url, results)
        .expect("failed to build HTTP client");

    let mut session = TableSession::new();
    session.load_from(&source);

    println!("📋 FlatTable Viewer");
    println!("====================================");
    println!("type text to filter, :header to sort, empty line to clear");
    println!("====================================");
    render(&session);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        if let Some(header) = line.strip_prefix(':') {
            session.on_header_click(header.trim());
        } else {
            session.on_query_change(line.trim());
        }
        render(&session);
    }
}

fn render(session: &TableSession) {
    let snapshot = session.snapshot();

    let mut out = io::stdout().lock();
    for header in snapshot.headers {
        let marker = match snapshot.sort_state.get(header) {
            Some(SortDirection::Ascending) => "▲",
            Some(SortDirection::Descending) => "▼",
            _ => " ",
        };
        let _ = write!(out, "{}{}\t", header, marker);
    }
    let _ = writeln!(out);

    for row in &snapshot.rows {
        for header in snapshot.headers {
            match row.get(header) {
                Some(value) => {
                    let _ = write!(out, "{}\t", value);
                }
                None => {
                    let _ = write!(out, "\t");
                }
            }
        }
        let _ = writeln!(out);
    }
    let _ = writeln!(out, "({} rows)", snapshot.rows.len());
}
