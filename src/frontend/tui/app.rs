use super::page::{HitMap, Page};
use crate::config::UiConfig;
use crate::core::scroll::{ScrollSignal, ROW_HEIGHT};
use crate::frontend::{Frontend, FrontendEvent};
use crate::theme::AppTheme;
use crate::view::ViewNode;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste,
        EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::io;
use std::time::Duration;

/// Body viewport, in rows
#[derive(Debug, Clone, Copy, Default)]
struct Viewport {
    offset: u32,
    content_height: u32,
    visible_height: u32,
}

impl Viewport {
    fn max_offset(&self) -> u32 {
        self.content_height.saturating_sub(self.visible_height)
    }
}

/// TUI Frontend using ratatui
///
/// Lays out committed view trees on the terminal and handles events via
/// crossterm. The frontend is the scrolling host: it owns the body viewport
/// and publishes the offset on its `ScrollSignal`.
pub struct TuiFrontend<B: Backend = CrosstermBackend<io::Stdout>> {
    terminal: Terminal<B>,
    poll_timeout: Duration,
    theme: AppTheme,
    scroll: ScrollSignal,
    viewport: Viewport,
    scroll_step: u16,

    /// Click targets from the last committed layout
    hits: HitMap,
    focused_field: bool,
    alert_open: bool,

    /// Whether raw mode and the alternate screen were set up by us
    owns_terminal: bool,
    mouse: bool,
    restored: bool,
}

impl TuiFrontend {
    /// Create a new TUI frontend
    ///
    /// Initializes terminal in raw mode, enters alternate screen, and enables
    /// mouse capture when configured.
    pub fn new(config: &UiConfig, theme: AppTheme) -> Result<Self> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
            .context("Failed to setup terminal")?;
        if config.mouse {
            execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
        }

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor()?;

        let mut frontend = Self::from_terminal(terminal, config, theme);
        frontend.owns_terminal = true;
        Ok(frontend)
    }
}

impl<B: Backend> TuiFrontend<B> {
    /// Wrap an existing backend without touching the real terminal
    #[cfg(test)]
    pub fn with_backend(backend: B, config: &UiConfig, theme: AppTheme) -> Result<Self> {
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;
        Ok(Self::from_terminal(terminal, config, theme))
    }

    fn from_terminal(terminal: Terminal<B>, config: &UiConfig, theme: AppTheme) -> Self {
        Self {
            terminal,
            poll_timeout: Duration::from_millis(config.poll_timeout_ms),
            theme,
            scroll: ScrollSignal::new(),
            viewport: Viewport::default(),
            scroll_step: config.scroll_step,
            hits: HitMap::default(),
            focused_field: false,
            alert_open: false,
            owns_terminal: false,
            mouse: config.mouse,
            restored: false,
        }
    }

    /// Move the viewport, clamped to the content; emits only on change
    fn scroll_to(&mut self, target: i64) {
        let max = self.viewport.max_offset() as i64;
        let offset = target.clamp(0, max) as u32;
        if offset != self.viewport.offset {
            self.viewport.offset = offset;
            tracing::trace!("Viewport scrolled to {}", offset);
            self.emit_offset();
        }
    }

    /// Publish the viewport position in pixel-equivalent units
    fn emit_offset(&self) {
        self.scroll.emit(self.viewport.offset * ROW_HEIGHT);
    }

    fn scroll_by(&mut self, delta: i64) {
        self.scroll_to(self.viewport.offset as i64 + delta);
    }

    /// Keys the host consumes as page scrolling
    ///
    /// Text fields keep their arrow keys, and the acknowledgement popup takes
    /// every key, so scrolling only applies to the plain page.
    fn host_scroll(&mut self, code: KeyCode) -> bool {
        if self.focused_field || self.alert_open {
            return false;
        }

        let page = self.viewport.visible_height.saturating_sub(1).max(1) as i64;
        let step = self.scroll_step as i64;
        match code {
            KeyCode::Up => self.scroll_by(-step),
            KeyCode::Down => self.scroll_by(step),
            KeyCode::PageUp => self.scroll_by(-page),
            KeyCode::PageDown => self.scroll_by(page),
            KeyCode::Home => self.scroll_to(0),
            KeyCode::End => self.scroll_to(self.viewport.max_offset() as i64),
            _ => return false,
        }
        true
    }

    /// Convert crossterm event to FrontendEvent, applying host scrolling
    fn handle_native(&mut self, event: Event) -> Option<FrontendEvent> {
        match event {
            Event::Key(key_event) => {
                // Only process key press events (ignore repeats and releases)
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                if key_event.modifiers.is_empty() && self.host_scroll(key_event.code) {
                    return None;
                }
                Some(FrontendEvent::key(key_event.code, key_event.modifiers))
            }
            Event::Mouse(mouse_event) => {
                let (x, y) = (mouse_event.column, mouse_event.row);
                match mouse_event.kind {
                    MouseEventKind::ScrollDown if !self.alert_open => {
                        self.scroll_by(self.scroll_step as i64);
                        None
                    }
                    MouseEventKind::ScrollUp if !self.alert_open => {
                        self.scroll_by(-(self.scroll_step as i64));
                        None
                    }
                    MouseEventKind::Down(MouseButton::Left) => {
                        // Resolved at the current offset, so wheel ticks earlier
                        // in the same batch are accounted for
                        match self.hits.action_at(x, y, self.viewport.offset) {
                            Some(action) => Some(FrontendEvent::Activate(action)),
                            None => Some(FrontendEvent::mouse(mouse_event.kind, x, y)),
                        }
                    }
                    MouseEventKind::Down(_) => Some(FrontendEvent::mouse(mouse_event.kind, x, y)),
                    _ => None,
                }
            }
            Event::Resize(w, h) => Some(FrontendEvent::resize(w, h)),
            Event::Paste(text) => Some(FrontendEvent::paste(text)),
            _ => None,
        }
    }
}

impl<B: Backend> Frontend for TuiFrontend<B> {
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>> {
        let mut events = Vec::new();

        // Poll events with timeout
        while event::poll(self.poll_timeout)? {
            if let Ok(ev) = event::read() {
                if let Some(frontend_event) = self.handle_native(ev) {
                    events.push(frontend_event);
                }
            }
        }

        Ok(events)
    }

    fn commit(&mut self, tree: &ViewNode) -> Result<()> {
        let size = self.terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        let page = Page::build(tree, area, &self.theme);

        self.viewport.content_height = page.content_height();
        self.viewport.visible_height = page.visible_height();
        self.focused_field = page.focused_field();
        self.alert_open = page.has_alert();

        // Content can shrink under the viewport (section change, resize)
        let max = self.viewport.max_offset();
        if self.viewport.offset > max {
            self.viewport.offset = max;
            self.emit_offset();
        }

        let offset = self.viewport.offset;
        self.hits = page.hit_map();
        self.terminal.draw(|f| page.render(f.buffer_mut(), offset))?;
        Ok(())
    }

    fn scroll_signal(&self) -> &ScrollSignal {
        &self.scroll
    }

    fn cleanup(&mut self) -> Result<()> {
        if !self.owns_terminal || self.restored {
            return Ok(());
        }
        self.restored = true;

        // Restore terminal
        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen, DisableBracketedPaste)?;
        if self.mouse {
            execute!(stdout, DisableMouseCapture)?;
        }
        self.terminal.show_cursor()?;
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        self.terminal
            .size()
            .map(|size| (size.width, size.height))
            .unwrap_or_default()
    }
}

impl<B: Backend> Drop for TuiFrontend<B> {
    fn drop(&mut self) {
        // Ensure terminal is restored even if cleanup() wasn't called
        let _ = self.cleanup();
    }
}
