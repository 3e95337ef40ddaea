use crate::net::history::Sample;

/// Status title shown while no live rate is available (paused, or
/// on-demand with the drop-down closed).
pub const PLACEHOLDER_TITLE: &str = "⇅";

/// Rendered in place of history rows that have no sample yet.
pub const EMPTY_ROW: &str = "-";

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;
const GIB: u64 = 1024 * MIB;
const TIB: u64 = 1024 * GIB;

/// Format a byte rate with base-1024 units: whole bytes below 1 KB,
/// one decimal place above, capped at TB.
pub fn format_rate(bytes_per_sec: u64) -> String {
    if bytes_per_sec >= TIB {
        format!("{:.1} TB/s", bytes_per_sec as f64 / TIB as f64)
    } else if bytes_per_sec >= GIB {
        format!("{:.1} GB/s", bytes_per_sec as f64 / GIB as f64)
    } else if bytes_per_sec >= MIB {
        format!("{:.1} MB/s", bytes_per_sec as f64 / MIB as f64)
    } else if bytes_per_sec >= KIB {
        format!("{:.1} KB/s", bytes_per_sec as f64 / KIB as f64)
    } else {
        format!("{} B/s", bytes_per_sec)
    }
}

/// Left-pad a KB figure to 3 digits with no-break spaces so the status
/// title keeps a constant width as digit counts change.
fn pad_kb(value: u64) -> String {
    let digits = value.to_string();
    let fill = 3usize.saturating_sub(digits.len());
    format!("{}{}", "\u{a0}".repeat(fill), digits)
}

/// Fixed-width status title, e.g. `↓100KB ↑ 50KB`.
pub fn format_title(rx_per_sec: u64, tx_per_sec: u64) -> String {
    format!(
        "↓{}KB ↑{}KB",
        pad_kb(rx_per_sec / KIB),
        pad_kb(tx_per_sec / KIB)
    )
}

/// One drop-down history row: `HH:mm:ss  ↓ rate  ↑ rate`.
pub fn format_row(sample: &Sample) -> String {
    format!(
        "{}  ↓ {}  ↑ {}",
        sample.at.format("%H:%M:%S"),
        format_rate(sample.rx_per_sec),
        format_rate(sample.tx_per_sec)
    )
}
