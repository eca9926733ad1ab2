//! Viewport scroll signal
//!
//! The host (frontend) emits the body scroll offset whenever it changes.
//! Subscribers get a guard; dropping the guard removes the listener, so a
//! subscription never outlives the component that acquired it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Pixel-equivalent height of one terminal row; offsets on the signal are
/// rows × `ROW_HEIGHT`
pub const ROW_HEIGHT: u32 = 16;

type Listener = Box<dyn FnMut(u32)>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Single-threaded broadcaster of scroll offsets (pixel-equivalent units from the top)
#[derive(Clone, Default)]
pub struct ScrollSignal {
    inner: Rc<RefCell<Listeners>>,
}

impl ScrollSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler; it runs on every emitted offset until the guard drops
    pub fn subscribe(&self, handler: impl FnMut(u32) + 'static) -> ScrollSubscription {
        let mut listeners = self.inner.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Box::new(handler)));
        tracing::debug!("Scroll listener {} attached", id);

        ScrollSubscription {
            id,
            signal: Rc::downgrade(&self.inner),
        }
    }

    pub fn emit(&self, offset: u32) {
        // Handlers only touch their own state, never the signal
        let mut listeners = self.inner.borrow_mut();
        for (_, handler) in listeners.entries.iter_mut() {
            handler(offset);
        }
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }
}

/// Guard for one registered scroll handler
pub struct ScrollSubscription {
    id: u64,
    signal: Weak<RefCell<Listeners>>,
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.signal.upgrade() {
            inner.borrow_mut().entries.retain(|(id, _)| *id != self.id);
            tracing::debug!("Scroll listener {} detached", self.id);
        }
    }
}

/// The nav "scrolled" rule
pub fn is_scrolled(offset: u32, threshold: u32) -> bool {
    offset > threshold
}
