//! Aggregate data shapes and the semantics they carry

mod display;
mod handle;
mod location;
mod person;
mod point;
mod weather;

pub use handle::Handle;
pub use location::Location;
pub use person::Person;
pub use point::{Point2D, Point2DRecord};
pub use weather::{WeatherObject, WeatherReading, WeatherRecord, WeatherValue};

use serde::{Deserialize, Serialize};

/// How an aggregate behaves under assignment and comparison.
///
/// The tour is built around these categories:
/// - owned-by-copy: assignment duplicates the directly held fields
/// - shared-by-handle: assignment shares one allocation, `==` is identity
/// - immutable: fields fixed at construction, `==` compares them
/// - shallow-immutable: immutable, but holds handles to mutable aggregates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Semantics {
    /// Value aggregate: copies on assignment, mutable in place
    OwnedByCopy,

    /// Reference aggregate: many bindings, one allocation
    SharedByHandle,

    /// Immutable value aggregate with structural equality, all fields scalar
    Immutable,

    /// Immutable value aggregate whose fields include handles.
    ///
    /// The record's own fields never change, but what its handles reach
    /// can, and handles compare by identity.
    ShallowImmutable,
}

impl Semantics {
    /// Whether assigning the aggregate duplicates its own fields.
    pub fn copies_on_assign(self) -> bool {
        !matches!(self, Semantics::SharedByHandle)
    }

    /// Whether `==` compares field values rather than identity.
    ///
    /// Owned-by-copy aggregates have no `==` at all, so only records qualify.
    pub fn compares_structurally(self) -> bool {
        matches!(self, Semantics::Immutable | Semantics::ShallowImmutable)
    }

    /// Whether readers on other threads may share the aggregate without
    /// synchronization.
    ///
    /// Only all-scalar records qualify: a [`ShallowImmutable`] record holds
    /// handles, which stay on one thread.
    ///
    /// [`ShallowImmutable`]: Semantics::ShallowImmutable
    pub fn is_thread_shareable(self) -> bool {
        matches!(self, Semantics::Immutable)
    }

    /// Short human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Semantics::OwnedByCopy => "owned-by-copy",
            Semantics::SharedByHandle => "shared-by-handle",
            Semantics::Immutable => "immutable",
            Semantics::ShallowImmutable => "shallow-immutable",
        }
    }
}

/// Implemented by every data shape in the tour.
pub trait Aggregate {
    /// Type name as shown in reports
    const TYPE_NAME: &'static str;

    /// Assignment and equality semantics of the type
    const SEMANTICS: Semantics;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owned_by_copy_copies_but_has_no_structural_eq() {
        assert!(Semantics::OwnedByCopy.copies_on_assign());
        assert!(!Semantics::OwnedByCopy.compares_structurally());
        assert!(!Semantics::OwnedByCopy.is_thread_shareable());
    }

    #[test]
    fn test_shared_by_handle_neither_copies_nor_compares_fields() {
        assert!(!Semantics::SharedByHandle.copies_on_assign());
        assert!(!Semantics::SharedByHandle.compares_structurally());
        assert!(!Semantics::SharedByHandle.is_thread_shareable());
    }

    #[test]
    fn test_immutable_is_structural_and_shareable() {
        assert!(Semantics::Immutable.copies_on_assign());
        assert!(Semantics::Immutable.compares_structurally());
        assert!(Semantics::Immutable.is_thread_shareable());
    }

    #[test]
    fn test_shallow_immutable_is_structural_but_not_shareable() {
        assert!(Semantics::ShallowImmutable.copies_on_assign());
        assert!(Semantics::ShallowImmutable.compares_structurally());
        assert!(!Semantics::ShallowImmutable.is_thread_shareable());
    }

    #[test]
    fn test_type_tags() {
        assert_eq!(Point2D::SEMANTICS, Semantics::OwnedByCopy);
        assert_eq!(Point2DRecord::SEMANTICS, Semantics::Immutable);
        assert_eq!(WeatherValue::SEMANTICS, Semantics::OwnedByCopy);
        assert_eq!(WeatherRecord::SEMANTICS, Semantics::ShallowImmutable);
        assert_eq!(Location::SEMANTICS, Semantics::OwnedByCopy);
        assert_eq!(WeatherReading::SEMANTICS, Semantics::OwnedByCopy);
        assert_eq!(<Handle<Location>>::SEMANTICS, Semantics::SharedByHandle);
        assert_eq!(<Handle<Person>>::SEMANTICS, Semantics::SharedByHandle);
        assert_eq!(<Handle<Person>>::TYPE_NAME, "Person");
        assert_eq!(WeatherObject::TYPE_NAME, "WeatherReading");
    }

    #[test]
    fn test_label() {
        assert_eq!(Semantics::SharedByHandle.label(), "shared-by-handle");
        assert_eq!(Semantics::ShallowImmutable.label(), "shallow-immutable");
    }
}
