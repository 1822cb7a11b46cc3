//! Session Context
//!
//! Holds the bearer token for the signed-in user. Every outgoing request
//! reads it; a single subscriber is told when it is cleared so the view can
//! fall back to the login entry point.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
pub struct SessionContext {
    token: RefCell<Option<String>>,
    on_clear: RefCell<Option<Rc<dyn Fn()>>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::new();
        session.set(token);
        session
    }

    pub fn set(&self, token: impl Into<String>) {
        *self.token.borrow_mut() = Some(token.into());
    }

    pub fn read(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.borrow().is_some()
    }

    /// Drop the token and notify the subscriber.
    pub fn clear(&self) {
        self.token.borrow_mut().take();
        // Clone out first: the subscriber may read the session again.
        let subscriber = self.on_clear.borrow().clone();
        if let Some(notify) = subscriber {
            notify();
        }
    }

    /// Register the clear subscriber, replacing any previous one.
    pub fn subscribe(&self, on_clear: impl Fn() + 'static) {
        *self.on_clear.borrow_mut() = Some(Rc::new(on_clear));
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_set_read_clear() {
        let session = SessionContext::new();
        assert!(session.read().is_none());

        session.set("abc");
        assert_eq!(session.read().as_deref(), Some("abc"));

        session.clear();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_subscriber_sees_cleared_state() {
        let session = Rc::new(SessionContext::with_token("abc"));
        let calls = Rc::new(Cell::new(0));

        let observed = session.clone();
        let counter = calls.clone();
        session.subscribe(move || {
            assert!(observed.read().is_none());
            counter.set(counter.get() + 1);
        });

        session.clear();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_subscribe_replaces_previous() {
        let session = SessionContext::with_token("abc");
        let first = Rc::new(Cell::new(false));
        let second = Rc::new(Cell::new(false));

        let f = first.clone();
        session.subscribe(move || f.set(true));
        let s = second.clone();
        session.subscribe(move || s.set(true));

        session.clear();
        assert!(!first.get());
        assert!(second.get());
    }
}
