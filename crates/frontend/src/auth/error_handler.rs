//! Global auth error handler
//!
//! Lets the API layer report a rejected token without knowing about the
//! component tree. The [`AuthProvider`](super::AuthProvider) registers the
//! callback on mount.

use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    static AUTH_ERROR_CALLBACK: RefCell<Option<Rc<dyn Fn()>>> = RefCell::new(None);
}

/// Set the global auth error callback
pub fn set_auth_error_callback(callback: Rc<dyn Fn()>) {
    AUTH_ERROR_CALLBACK.with(|cb| {
        *cb.borrow_mut() = Some(callback);
    });
}

/// Clear the auth error callback
pub fn clear_auth_error_callback() {
    AUTH_ERROR_CALLBACK.with(|cb| {
        *cb.borrow_mut() = None;
    });
}

/// Trigger the auth error callback. Returns whether a handler was registered.
pub fn trigger_auth_error() -> bool {
    // Clone out of the cell so the callback may re-register itself.
    let callback = AUTH_ERROR_CALLBACK.with(|cb| cb.borrow().clone());
    match callback {
        Some(callback) => {
            callback();
            true
        }
        None => {
            tracing::debug!("Auth error raised with no handler registered");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn triggers_registered_callback() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        set_auth_error_callback(Rc::new(move || counter.set(counter.get() + 1)));

        assert!(trigger_auth_error());
        assert!(trigger_auth_error());
        assert_eq!(hits.get(), 2);

        clear_auth_error_callback();
        assert!(!trigger_auth_error());
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn callback_may_replace_itself() {
        set_auth_error_callback(Rc::new(|| {
            set_auth_error_callback(Rc::new(|| {}));
        }));
        assert!(trigger_auth_error());
        assert!(trigger_auth_error());
        clear_auth_error_callback();
    }
}
