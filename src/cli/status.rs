//! `--status`: one-shot credential status report.

use color_eyre::Result;
use unicode_width::UnicodeWidthStr;

use crate::api::BackendClient;
use crate::config::ClientConfig;
use crate::domain::FieldKind;
use crate::workflows::{reconciler, StatusMap};

/// Render the masked status as a plain-text table.
///
/// Configured exchanges come first in their configured order; exchanges the
/// backend knows but the configuration does not are appended.
pub fn format_status_table(exchanges: &[String], statuses: &StatusMap) -> String {
    let mut rows: Vec<Vec<String>> = vec![std::iter::once("EXCHANGE")
        .chain(FieldKind::ALL.iter().map(|k| k.label()))
        .map(str::to_string)
        .collect()];

    let extra = statuses.keys().filter(|e| !exchanges.contains(e));
    for exchange in exchanges.iter().chain(extra) {
        let status = statuses.get(exchange);
        let mut row = vec![exchange.clone()];
        row.extend(FieldKind::ALL.iter().map(|kind| match status {
            Some(s) if s.has(*kind) => s.masked(*kind).unwrap_or("stored").to_string(),
            _ => "-".to_string(),
        }));
        rows.push(row);
    }

    let columns = rows[0].len();
    let widths: Vec<usize> = (0..columns)
        .map(|c| rows.iter().map(|r| r[c].width()).max().unwrap_or(0))
        .collect();

    rows.iter()
        .map(|row| {
            row.iter()
                .zip(&widths)
                .map(|(cell, w)| format!("{}{}", cell, " ".repeat(w - cell.width())))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fetch `/check-credentials` once and print the table.
pub async fn handle_status_command(config: &ClientConfig) -> Result<()> {
    let backend = BackendClient::from_config(config);
    let statuses = reconciler::refresh(&backend).await?;
    println!("{}", format_status_table(&config.exchanges, &statuses));
    Ok(())
}
