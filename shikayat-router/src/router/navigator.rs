//! Navigation requests issued from inside pages.
//!
//! A page is rendered while the router is busy dispatching it, so it cannot
//! call back into the router directly. It holds a [`Navigator`] instead: a
//! cheap handle whose requests are queued and drained by the router, in the
//! order they were issued, as soon as the current page returns.

use tokio::sync::mpsc;

/// A queued navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavRequest {
    Push(String),
    Replace(String),
    Back,
    Forward,
}

/// Cloneable handle for requesting navigation.
#[derive(Debug, Clone)]
pub struct Navigator {
    tx: mpsc::UnboundedSender<NavRequest>,
}

impl Navigator {
    /// Create a handle together with the queue it feeds.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<NavRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Request navigation to `path`, pushing a history entry.
    pub fn navigate(&self, path: impl Into<String>) {
        self.send(NavRequest::Push(path.into()));
    }

    /// Request navigation to `path`, overwriting the current history entry.
    ///
    /// Use this for redirects after a submission or from a guard, so that
    /// going back never lands on the page that redirected.
    pub fn replace(&self, path: impl Into<String>) {
        self.send(NavRequest::Replace(path.into()));
    }

    /// Request a step back through history.
    pub fn back(&self) {
        self.send(NavRequest::Back);
    }

    /// Request a step forward through history.
    pub fn forward(&self) {
        self.send(NavRequest::Forward);
    }

    fn send(&self, request: NavRequest) {
        if self.tx.send(request).is_err() {
            tracing::warn!("navigation requested after the router was dropped");
        }
    }
}
