use chrono::Local;
use comfy_table::Color;
use serde::Serialize;

use crate::core::HistoryCap;
use crate::session::Session;

use super::format::{create_styled_table, format_fill, header_cell, right_cell, styled_cell};

#[derive(Debug, Clone, Copy)]
pub(crate) struct HistoryTableOptions {
    pub(crate) cap: HistoryCap,
    pub(crate) use_color: bool,
}

/// Render the session history as a numbered table, newest first
pub(crate) fn render_history_table(session: &Session, opts: HistoryTableOptions) -> String {
    if session.history.is_empty() {
        return format!("No history for session '{}'.", session.name);
    }

    let c = opts.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![header_cell("#", c), header_cell("Creature Type", c)]);

    for (i, entry) in session.history.entries().iter().enumerate() {
        let newest = i == 0;
        let color = (c && newest).then_some(Color::Green);
        table.add_row(vec![
            right_cell(&(i + 1).to_string(), None),
            styled_cell(entry, color, newest),
        ]);
    }

    let mut out = format!(
        "Session: {} ({})\n",
        session.name,
        format_fill(session.history.len(), opts.cap)
    );
    if let Some(updated_at) = session.updated_at {
        out.push_str(&format!(
            "Last generated: {}\n",
            updated_at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        ));
    }
    out.push_str(&table.to_string());
    out
}

pub(crate) fn print_history_table(session: &Session, opts: HistoryTableOptions) {
    println!("{}", render_history_table(session, opts));
}

#[derive(Serialize)]
struct HistoryOutput<'a> {
    session: &'a str,
    cap: Option<usize>,
    updated_at: Option<String>,
    history: &'a [String],
}

pub(crate) fn output_history_json(
    session: &Session,
    cap: HistoryCap,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&HistoryOutput {
        session: session.name.as_str(),
        cap: cap.limit(),
        updated_at: session.updated_at.map(|t| t.to_rfc3339()),
        history: session.history.entries(),
    })
}
