//! Seams to the platform: outside-interaction listener and reload.
//!
//! The engine never talks to a real event system. Presentation implements
//! [`Shell`] with whatever outside-click detection and reload primitive it
//! has, and the controller drives it through a [`ListenerScope`] so the
//! listener can never outlive the panel it watches.

/// Platform collaborator for the engine.
pub trait Shell {
    /// Install the outside-interaction listener for the visible panel.
    fn attach_outside_listener(&mut self) {}

    /// Remove the outside-interaction listener.
    fn detach_outside_listener(&mut self) {}

    /// Platform reload primitive backing the refresh action.
    fn reload(&mut self) {}
}

/// Shell that ignores every callback. Default for headless use and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullShell;

impl Shell for NullShell {}

/// Scoped ownership of the outside-interaction listener.
///
/// The listener is attached while the panel is visible and detached on
/// every path that hides it; dropping the scope detaches unconditionally,
/// so teardown can never leak a stale callback.
pub struct ListenerScope {
    shell: Box<dyn Shell>,
    attached: bool,
}

impl ListenerScope {
    /// Wrap a shell with the listener detached.
    pub fn new(shell: Box<dyn Shell>) -> Self {
        Self {
            shell,
            attached: false,
        }
    }

    /// Bring the listener in line with the panel's visibility.
    pub fn sync(&mut self, panel_visible: bool) {
        if panel_visible && !self.attached {
            self.shell.attach_outside_listener();
            self.attached = true;
        } else if !panel_visible && self.attached {
            self.shell.detach_outside_listener();
            self.attached = false;
        }
    }

    /// Whether the listener is currently installed.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Forward the refresh action to the platform.
    pub fn reload(&mut self) {
        self.shell.reload();
    }
}

impl Drop for ListenerScope {
    fn drop(&mut self) {
        if self.attached {
            self.shell.detach_outside_listener();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Counters {
        attaches: Cell<u32>,
        detaches: Cell<u32>,
    }

    struct CountingShell(Rc<Counters>);

    impl Shell for CountingShell {
        fn attach_outside_listener(&mut self) {
            self.0.attaches.set(self.0.attaches.get() + 1);
        }

        fn detach_outside_listener(&mut self) {
            self.0.detaches.set(self.0.detaches.get() + 1);
        }
    }

    #[test]
    fn test_sync_attaches_once_per_visibility_change() {
        let counters = Rc::new(Counters::default());
        let mut scope = ListenerScope::new(Box::new(CountingShell(Rc::clone(&counters))));

        scope.sync(true);
        scope.sync(true);
        assert_eq!(counters.attaches.get(), 1);
        assert!(scope.is_attached());

        scope.sync(false);
        scope.sync(false);
        assert_eq!(counters.detaches.get(), 1);
        assert!(!scope.is_attached());
    }

    #[test]
    fn test_drop_detaches_attached_listener() {
        let counters = Rc::new(Counters::default());
        {
            let mut scope = ListenerScope::new(Box::new(CountingShell(Rc::clone(&counters))));
            scope.sync(true);
        }
        assert_eq!(counters.detaches.get(), 1);
    }

    #[test]
    fn test_drop_without_attach_is_quiet() {
        let counters = Rc::new(Counters::default());
        drop(ListenerScope::new(Box::new(CountingShell(Rc::clone(
            &counters,
        )))));
        assert_eq!(counters.detaches.get(), 0);
    }
}
