//! Plain-text rendering of lookup results and transcript lines.

use std::fmt::Write;

use finbot_sdk::{ChatMessage, MessageStatus, Sender, StockInfo};

/// Multi-line company panel, mirroring the GUI's stock card.
pub fn stock_panel(info: &StockInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", info.name);
    let _ = writeln!(out, "{}", "=".repeat(info.name.chars().count().max(8)));
    let rows = [
        ("Symbol", info.symbol.clone()),
        ("Current Price", info.price_display()),
        ("Market Cap", info.market_cap_display()),
        ("Sector", info.sector.clone()),
        ("Industry", info.industry.clone()),
        ("Website", info.website.clone()),
        ("Country", info.country.clone()),
        ("Phone", info.phone.clone()),
        ("Address", info.address_line()),
        ("Full Time Employees", info.employees_display()),
    ];
    for (label, value) in rows {
        let value = if value.trim().is_empty() { "-".to_string() } else { value };
        let _ = writeln!(out, "{label:<20} {value}");
    }
    if let Some(chart) = info.chart() {
        let _ = writeln!(out, "{:<20} {chart}", "Chart");
    }
    if !info.description.trim().is_empty() {
        let _ = writeln!(out, "\n{}", info.description.trim());
    }
    out
}

/// Line to print for a settled transcript message.
///
/// User turns are echoed by the terminal already, so only failed ones are
/// reported.
pub fn message_line(message: &ChatMessage) -> Option<String> {
    match (message.sender, message.status) {
        (_, MessageStatus::Sending) => None,
        (Sender::Bot, MessageStatus::Error) => Some(format!("finbot! {}", message.content)),
        (Sender::Bot, MessageStatus::Sent) => Some(format!("finbot> {}", message.content)),
        (Sender::User, MessageStatus::Error) => {
            Some(format!("  (not delivered) {}", message.content))
        }
        (Sender::User, MessageStatus::Sent) => None,
    }
}
