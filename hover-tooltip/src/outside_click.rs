//! Keeps at most one outside-pointer listener registered per tooltip.

use leptos::prelude::*;
use tracing::debug;

type Release = Box<dyn FnOnce() + Send + Sync>;

/// A registered listener. Released exactly once, explicitly or when dropped.
pub struct ListenerGuard {
    release: Option<Release>,
}

impl ListenerGuard {

    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn release(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.release_once();
    }
}

#[derive(Default)]
pub struct OutsideClickScope {
    guard: Option<ListenerGuard>,
}

impl OutsideClickScope {

    pub fn is_active(&self) -> bool {
        self.guard.is_some()
    }

    /// Registers a listener via `acquire` when `enabled` and none is held yet.
    /// Releases the held listener when not `enabled`.
    pub fn sync<A>(&mut self, enabled: bool, acquire: A)
    where A: FnOnce() -> ListenerGuard {
        match (enabled, self.guard.is_some()) {
            (true, false) => {
                debug!("Acquiring outside-click listener.");
                self.guard = Some(acquire());
            }
            (false, true) => self.release(),
            _ => {}
        }
    }

    pub fn release(&mut self) {
        if let Some(guard) = self.guard.take() {
            debug!("Releasing outside-click listener.");
            guard.release();
        }
    }
}

/// Keeps a listener registered through `acquire` for as long as `enabled` holds.
/// It is released when `enabled` turns false and when the current owner is cleaned up.
pub fn bind_outside_click<A>(enabled: Signal<bool>, acquire: A) -> StoredValue<OutsideClickScope>
where A: Fn() -> ListenerGuard + 'static {

    let scope = StoredValue::new(OutsideClickScope::default());

    Effect::new(move |_| {
        let enabled = enabled.get();
        scope.update_value(|scope| scope.sync(enabled, &acquire));
    });

    on_cleanup(move || {
        scope.try_update_value(OutsideClickScope::release);
    });

    scope
}
