//! Clipboard integration for project links
//!
//! A terminal cannot open a link in a new tab, so links are copied instead.
//! Uses arboard for cross-platform clipboard access.

use anyhow::Result;
use arboard::Clipboard;

/// Copy text to system clipboard
pub fn copy(text: &str) -> Result<()> {
    if text.is_empty() {
        return Ok(()); // Nothing to copy
    }

    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    tracing::debug!("Copied {} bytes to clipboard", text.len());
    Ok(())
}
