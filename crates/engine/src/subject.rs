use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};

use common::{Error, MarketObserver, Result};

/// Shared handle to an attached observer.
///
/// The simulation is single-threaded, so `Rc<RefCell<_>>` is the sharing
/// model: the subject and the engine may alias the same observer instance
/// (the strategy, whose signal the engine reads between notifications).
pub type SharedObserver = Rc<RefCell<dyn MarketObserver>>;

/// Wrap an observer for attachment.
pub fn shared<O: MarketObserver + 'static>(observer: O) -> Rc<RefCell<O>> {
    Rc::new(RefCell::new(observer))
}

/// Broadcaster owning the ordered list of attached observers.
///
/// Observers are notified strictly in attachment order on every call.
pub struct MarketDataSubject {
    observers: Vec<SharedObserver>,
}

impl Default for MarketDataSubject {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketDataSubject {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Attach an observer. Attaching the same instance twice is a no-op;
    /// identity is the shared allocation, not the observer's contents.
    pub fn attach(&mut self, observer: SharedObserver) {
        if self.is_attached(&observer) {
            debug!(
                observer = observer.borrow().name(),
                "observer already attached, ignoring"
            );
            return;
        }
        self.observers.push(observer);
    }

    /// Detach an observer. Detaching one that was never attached is a no-op.
    pub fn detach(&mut self, observer: &SharedObserver) {
        if let Some(idx) = self
            .observers
            .iter()
            .position(|o| data_ptr(o) == data_ptr(observer))
        {
            self.observers.remove(idx);
        }
    }

    pub fn is_attached(&self, observer: &SharedObserver) -> bool {
        self.observers
            .iter()
            .any(|o| data_ptr(o) == data_ptr(observer))
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Broadcast a price to every attached observer, in attachment order.
    ///
    /// Every observer is attempted even if earlier ones fail. After the full
    /// fan-out, the first failure (if any) is returned; later failures are
    /// logged and swallowed.
    pub fn notify(&mut self, price: f64) -> Result<()> {
        let mut first_error: Option<Error> = None;
        for observer in &self.observers {
            // Bind the result first so the mutable borrow is released before
            // the failure path borrows the observer again for its name.
            let result = observer.borrow_mut().update(price);
            if let Err(e) = result {
                warn!(
                    observer = observer.borrow().name(),
                    error = %e,
                    "observer update failed"
                );
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

// Compare by data pointer so a concrete `Rc<RefCell<T>>` and its unsized
// coercion to `SharedObserver` identify the same allocation.
fn data_ptr(observer: &SharedObserver) -> *const () {
    Rc::as_ptr(observer) as *const ()
}
