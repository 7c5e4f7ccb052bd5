//! Shared-state access used by the workflows.
//!
//! Components hand the workflows `Signal`s; tests hand them `Rc<RefCell<_>>`.
//! Borrows never outlive the closure, so nothing is held across an await.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

pub trait StateCell<T> {
    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R;

    fn write_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R;
}

impl<T: 'static> StateCell<T> for Signal<T> {
    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.with(f)
    }

    fn write_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut signal = *self;
        signal.with_mut(f)
    }
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.borrow())
    }

    fn write_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}
