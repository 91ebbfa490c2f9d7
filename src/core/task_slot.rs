//! Single-slot ownership of a cancellable background task.

use dioxus::core::Task;

/// A handle to a running task that can be cancelled.
pub trait Cancellable {
    fn cancel(self);
}

impl Cancellable for Task {
    fn cancel(self) {
        Task::cancel(self);
    }
}

/// Holds at most one task. Storing a new task cancels the previous one.
#[derive(Debug)]
pub struct TaskSlot<H: Cancellable> {
    current: Option<H>,
}

impl<H: Cancellable> Default for TaskSlot<H> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<H: Cancellable> TaskSlot<H> {
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Cancel the held task, if any, and keep `handle` instead.
    pub fn replace(&mut self, handle: H) {
        self.cancel();
        self.current = Some(handle);
    }

    /// Cancel the held task, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.current.take() {
            handle.cancel();
        }
    }

    /// Forget the held task without cancelling it. Used by a task that has
    /// already finished on its own.
    pub fn release(&mut self) -> Option<H> {
        self.current.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FakeHandle {
        id: u32,
        cancelled: Rc<RefCell<Vec<u32>>>,
    }

    impl Cancellable for FakeHandle {
        fn cancel(self) {
            self.cancelled.borrow_mut().push(self.id);
        }
    }

    fn handle(id: u32, log: &Rc<RefCell<Vec<u32>>>) -> FakeHandle {
        FakeHandle { id, cancelled: log.clone() }
    }

    #[test]
    fn test_replace_cancels_previous() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = TaskSlot::default();
        slot.replace(handle(1, &log));
        assert!(log.borrow().is_empty());
        slot.replace(handle(2, &log));
        assert_eq!(*log.borrow(), vec![1]);
        assert!(slot.is_active());
    }

    #[test]
    fn test_cancel_empties_slot() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = TaskSlot::default();
        slot.replace(handle(1, &log));
        slot.cancel();
        slot.cancel();
        assert_eq!(*log.borrow(), vec![1]);
        assert!(!slot.is_active());
    }

    #[test]
    fn test_release_does_not_cancel() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = TaskSlot::default();
        slot.replace(handle(7, &log));
        let released = slot.release();
        assert!(released.is_some());
        assert!(log.borrow().is_empty());
        assert!(!slot.is_active());
    }
}
