//! Click-outside dismissal
//!
//! `PointerEvents` is the process-wide source of pointer presses (the
//! terminal equivalent of document-level listeners). Widgets subscribe for
//! as long as they are mounted; the returned `PointerSubscription` removes
//! the listener when dropped.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use ratatui::layout::{Position, Rect};

type Listener = Box<dyn FnMut(Position)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Single-threaded pointer-press event source
#[derive(Clone, Default)]
pub struct PointerEvents {
    registry: Rc<RefCell<Registry>>,
}

impl PointerEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for every pointer press
    pub fn subscribe(&self, listener: impl FnMut(Position) + 'static) -> PointerSubscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Box::new(listener)));

        PointerSubscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver a pointer press to every listener
    ///
    /// Listeners must not subscribe or unsubscribe from inside the callback.
    pub fn dispatch(&self, position: Position) {
        let mut registry = self.registry.borrow_mut();
        for (_, listener) in registry.listeners.iter_mut() {
            listener(position);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Guard that keeps a listener registered
pub struct PointerSubscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade()
            && let Ok(mut inner) = registry.try_borrow_mut()
        {
            inner.listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

/// Hides the suggestion list when a press lands outside the widget
pub struct DismissalController {
    _subscription: PointerSubscription,
}

impl DismissalController {
    /// Attach to `events` for the lifetime of the returned controller
    ///
    /// `root_area` is the widget's bounding region (input plus dropdown) as
    /// last rendered; `visible` is the widget's visibility flag.
    pub fn attach(events: &PointerEvents, root_area: Rc<Cell<Rect>>, visible: Rc<Cell<bool>>) -> Self {
        let subscription = events.subscribe(move |position| {
            if visible.get() && !root_area.get().contains(position) {
                log::debug!("Pointer press outside suggestions at {:?}, closing", position);
                visible.set(false);
            }
        });

        Self {
            _subscription: subscription,
        }
    }
}

#[cfg(test)]
#[path = "dismissal_tests.rs"]
mod dismissal_tests;
