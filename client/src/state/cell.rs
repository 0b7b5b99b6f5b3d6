//! Mutable state holders shared by stores and pages.
//!
//! DESIGN
//! ======
//! Stores mutate state through `StateCell` instead of a concrete Leptos
//! signal. In the app the cell is an `RwSignal`; in tests it is a plain
//! `RefCell`, so async store logic runs without a reactive runtime.

#[cfg(test)]
#[path = "cell_test.rs"]
mod cell_test;

use std::cell::RefCell;

use leptos::prelude::{RwSignal, Update, WithUntracked};

/// A shared slot holding a `T`.
///
/// Both accessors return `None` once the backing storage has been disposed
/// (e.g. the owning component unmounted while a request was in flight).
pub trait StateCell<T> {
    /// Mutate the value in place and return whatever `f` returns.
    fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;

    /// Read the value without subscribing to changes.
    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

impl<T> StateCell<T> for RefCell<T> {
    fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}

impl<T, C: StateCell<T> + ?Sized> StateCell<T> for &C {
    fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        (**self).mutate(f)
    }

    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        (**self).peek(f)
    }
}
