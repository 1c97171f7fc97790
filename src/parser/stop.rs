use std::{cell::RefCell, fmt::Debug, rc::Rc};

#[derive(Debug)]
struct StopState<V> {
    triggered: bool,
    value: Option<V>,
}

/// Cooperative early stop for a parse loop.
///
/// A fresh handle is created for every top-level parse unless one is passed
/// in through the parse options. Clones share the same state, so every loop
/// holding a clone unwinds once any holder calls [`StopHandle::stop`].
pub struct StopHandle<V> {
    state: Rc<RefCell<StopState<V>>>,
}

impl<V> StopHandle<V> {
    pub fn new() -> Self {
        StopHandle {
            state: Rc::new(RefCell::new(StopState {
                triggered: false,
                value: None,
            })),
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.state.borrow().triggered
    }

    /// Whether `other` is a clone of this handle.
    pub fn shares_scope_with(&self, other: &StopHandle<V>) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl<V: Clone> StopHandle<V> {
    /// Triggers the stop and hands `value` back, so a handler can end with
    /// `Ok(info.stop.stop(left))`.
    ///
    /// Only the first call records its value; later calls leave the handle
    /// as it is.
    pub fn stop(&self, value: V) -> V {
        let mut state = self.state.borrow_mut();
        if !state.triggered {
            state.triggered = true;
            state.value = Some(value.clone());
        }
        value
    }

    /// The value recorded by the first `stop` call.
    pub fn value(&self) -> Option<V> {
        self.state.borrow().value.clone()
    }
}

impl<V> Clone for StopHandle<V> {
    fn clone(&self) -> Self {
        StopHandle {
            state: Rc::clone(&self.state),
        }
    }
}

impl<V> Default for StopHandle<V> {
    fn default() -> Self {
        StopHandle::new()
    }
}

impl<V: Debug> Debug for StopHandle<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("StopHandle")
            .field("triggered", &state.triggered)
            .field("value", &state.value)
            .finish()
    }
}
