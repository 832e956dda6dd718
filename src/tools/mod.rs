//! Helpers shared by the `qrtool` binary and the benches

use crate::debug::debug_enabled;
use tracing::Level;

/// Install a stderr `tracing` subscriber.
///
/// Logs at `DEBUG` when `QR_DEBUG` is set, `WARN` otherwise. Calling this
/// twice is harmless; the second install is ignored.
pub fn init_tracing() {
    let level = if debug_enabled() {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Parse a hex string into bytes.
///
/// Whitespace, `:` and `-` separators are ignored, so `"de ad:be-ef"` works.
pub fn parse_hex_block(input: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':' && *c != '-')
        .collect();
    hex::decode(cleaned)
}

/// Parse a comma separated list of block indices such as `"0,4,17"`.
pub fn parse_positions(input: &str) -> Result<Vec<usize>, String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .map_err(|e| format!("invalid position {s:?}: {e}"))
        })
        .collect()
}

/// Hex dump with the given indices wrapped in brackets
pub fn format_block(block: &[u8], highlight: &[usize]) -> String {
    block
        .iter()
        .enumerate()
        .map(|(i, b)| {
            if highlight.contains(&i) {
                format!("[{b:02x}]")
            } else {
                format!("{b:02x}")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
