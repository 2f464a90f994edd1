//! Outside-interaction listener scoped to the open overlay.
//!
//! Hosts detect pointer interaction outside the overlay with some global
//! hook (document listener, terminal mouse capture, ...). The hook must be
//! live exactly while the overlay is open, so the controller acquires it on
//! entering Open and releases it on every exit path, including drop.

use tracing::trace;

/// A host hook that reports pointer interaction outside the overlay.
pub trait OutsideInteractionListener {
    /// Start listening.
    fn attach(&mut self);

    /// Stop listening.
    fn detach(&mut self);
}

/// Listener for hosts that detect outside interaction on their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl OutsideInteractionListener for NoopListener {
    fn attach(&mut self) {}

    fn detach(&mut self) {}
}

/// Owns a listener and tracks whether it is attached.
///
/// Dropping the scope detaches an attached listener.
pub struct ListenerScope {
    listener: Box<dyn OutsideInteractionListener>,
    attached: bool,
}

impl ListenerScope {
    pub fn new(listener: Box<dyn OutsideInteractionListener>) -> Self {
        Self {
            listener,
            attached: false,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Attach unless already attached.
    pub fn enter(&mut self) {
        if !self.attached {
            self.listener.attach();
            self.attached = true;
            trace!("outside-interaction listener attached");
        }
    }

    /// Detach if attached.
    pub fn exit(&mut self) {
        if self.attached {
            self.listener.detach();
            self.attached = false;
            trace!("outside-interaction listener detached");
        }
    }

    /// Attach or detach to match the overlay.
    pub fn sync(&mut self, open: bool) {
        if open {
            self.enter();
        } else {
            self.exit();
        }
    }
}

impl Default for ListenerScope {
    fn default() -> Self {
        Self::new(Box::new(NoopListener))
    }
}

impl std::fmt::Debug for ListenerScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerScope")
            .field("attached", &self.attached)
            .finish_non_exhaustive()
    }
}

impl Drop for ListenerScope {
    fn drop(&mut self) {
        self.exit();
    }
}
