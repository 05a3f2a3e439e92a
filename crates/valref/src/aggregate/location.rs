//! Locations referenced by weather readings

use super::{Aggregate, Semantics};

/// A named place.
///
/// Locations are always shared by handle. A weather aggregate refers to
/// its location, it never owns a copy of it.
///
/// The struct itself is a plain `Clone` value; weather aggregates hold a
/// `Handle<Location>`, which is what carries the shared-by-handle tag.
#[derive(Debug, Clone)]
pub struct Location {
    /// Place name
    pub name: String,
}

impl Location {
    /// Create a location
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Aggregate for Location {
    const TYPE_NAME: &'static str = "Location";
    const SEMANTICS: Semantics = Semantics::OwnedByCopy;
}
