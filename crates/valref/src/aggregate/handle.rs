//! Shared-by-handle storage for reference aggregates

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::{Aggregate, Semantics};

/// A binding to a reference aggregate.
///
/// Every `Handle` created with [`Handle::new`] owns a fresh allocation.
/// Cloning or [aliasing](Handle::alias) a handle never copies the value;
/// it adds another binding to the same allocation, so a mutation made
/// through one binding is visible through all of them.
///
/// Equality is identity: two handles are equal only when they reach the
/// same allocation, whatever their contents.
///
/// `Handle` is neither `Send` nor `Sync`. Sharing a mutable reference
/// aggregate between threads needs explicit synchronization, and the
/// compiler refuses to do it implicitly.
///
/// # Example
///
/// ```
/// use valref::{Handle, Person};
///
/// let p1 = Handle::new(Person::new("Han", 22));
/// let p2 = p1.alias();
/// p2.update(|p| p.age += 1);
///
/// assert_eq!(p1.get(|p| p.age), 23);
/// assert_eq!(p1, p2);
/// ```
///
/// Handles cannot cross threads:
///
/// ```compile_fail
/// use valref::{Handle, Person};
///
/// let p = Handle::new(Person::new("Han", 22));
/// std::thread::spawn(move || p.update(|p| p.age += 1));
/// ```
pub struct Handle<T> {
    cell: Rc<RefCell<T>>,
}

impl<T> Handle<T> {
    /// Allocate a new aggregate and return the first binding to it.
    pub fn new(value: T) -> Self {
        Self {
            cell: Rc::new(RefCell::new(value)),
        }
    }

    /// Bind another name to the same allocation.
    pub fn alias(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }

    /// Whether two handles reach the same allocation.
    pub fn same(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.cell, &b.cell)
    }

    /// Read the aggregate through this binding.
    ///
    /// # Panics
    ///
    /// Panics if called from inside [`Handle::update`] on an alias.
    pub fn get<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.cell.borrow())
    }

    /// Read the aggregate unless an alias is mutating it right now.
    ///
    /// Returns `None` instead of panicking when called from inside
    /// [`Handle::update`] on an alias.
    pub fn try_get<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.cell.try_borrow().ok().map(|value| f(&value))
    }

    /// Mutate the aggregate through this binding.
    ///
    /// # Panics
    ///
    /// Panics if called from inside [`Handle::get`] or [`Handle::update`]
    /// on an alias.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.cell.borrow_mut())
    }

    /// Number of live bindings to this allocation.
    pub fn alias_count(&self) -> usize {
        Rc::strong_count(&self.cell)
    }
}

impl<T: Clone> Handle<T> {
    /// Detached copy of the current state.
    ///
    /// Nested handles inside `T` are aliased, not copied.
    pub fn snapshot(&self) -> T {
        self.cell.borrow().clone()
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        self.alias()
    }
}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        Handle::same(self, other)
    }
}

impl<T> Eq for Handle<T> {}

impl<T: fmt::Debug> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_get(|value| write!(f, "&{:?}", value)) {
            Some(result) => result,
            None => write!(f, "&<borrowed>"),
        }
    }
}

impl<T: Aggregate> Aggregate for Handle<T> {
    const TYPE_NAME: &'static str = T::TYPE_NAME;
    const SEMANTICS: Semantics = Semantics::SharedByHandle;
}
