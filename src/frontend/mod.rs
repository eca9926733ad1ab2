//! Frontend abstraction layer
//!
//! This module defines the `Frontend` trait: the mount point the core renders
//! into and the source of user input. It provides a unified interface for
//! event polling, committing view trees, host scrolling and cleanup.

pub mod events;
pub mod tui;

use crate::core::scroll::ScrollSignal;
use crate::view::ViewNode;
use anyhow::Result;
pub use events::FrontendEvent;
pub use tui::TuiFrontend;

/// Frontend trait - the rendering and event boundary
///
/// The core emits a `ViewNode` tree; a frontend commits it to the display,
/// owns the viewport scroll position, and reports user input back as
/// `FrontendEvent`s.
pub trait Frontend {
    /// Poll for user input events
    ///
    /// Returns all pending events converted to `FrontendEvent`. Host-level
    /// scrolling is handled here and reported on `scroll_signal()` instead.
    ///
    /// # Returns
    /// - `Ok(Vec<FrontendEvent>)` - List of events (empty if no events)
    /// - `Err(...)` - If event polling failed
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>>;

    /// Commit a composed view tree to the display
    ///
    /// Called once per frame. The frontend keeps whatever it needs from the
    /// tree (hit regions, content height) to interpret the next events.
    fn commit(&mut self, tree: &ViewNode) -> Result<()>;

    /// Signal carrying the viewport scroll offset
    fn scroll_signal(&self) -> &ScrollSignal;

    /// Cleanup and shutdown the frontend
    ///
    /// Restores the terminal before the application exits.
    fn cleanup(&mut self) -> Result<()>;

    /// Get current display size as `(width, height)`
    fn size(&self) -> (u16, u16);
}
