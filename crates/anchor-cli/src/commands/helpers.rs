//! Shared helpers for CLI commands

use anchor_core::{AnchorConfig, SessionStore};
use anyhow::{Context, Result};

/// Load the config and open the snapshot store it points at
pub fn open_store() -> Result<(AnchorConfig, SessionStore)> {
    let config = AnchorConfig::load_or_default().context("Failed to load config")?;
    let snapshot = config.snapshot_path()?;
    let store = SessionStore::open(&snapshot, config.history_cap);
    Ok((config, store))
}

/// Truncate a message for table display, counting characters rather than
/// bytes and flattening line breaks.
pub fn truncate_message(s: &str, max_chars: usize) -> String {
    let flat = s.replace(['\r', '\n'], " ");
    if flat.chars().count() > max_chars {
        let truncated: String = flat.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_message_short() {
        assert_eq!(truncate_message("hello", 10), "hello");
        assert_eq!(truncate_message("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_message_long() {
        assert_eq!(truncate_message("hello world", 5), "hello...");
    }

    #[test]
    fn test_truncate_message_multibyte() {
        assert_eq!(truncate_message("caf\u{e9} au lait", 4), "caf\u{e9}...");
    }

    #[test]
    fn test_truncate_message_flattens_lines() {
        assert_eq!(truncate_message("one\ntwo", 20), "one two");
    }
}
