//! # Valref
//!
//! A guided tour of value, reference and immutable-record semantics.
//!
//! The same few data shapes (a weather reading, a person, a 2D point) are
//! modelled three ways, and the tour shows how each one behaves under
//! comparison, assignment and mutation.
//!
//! ## Architecture
//!
//! - **Aggregates**: the data shapes, tagged with their [`Semantics`]
//!   - owned-by-copy aggregates derive `Clone`/`Copy`
//!   - shared-by-handle aggregates live behind a [`Handle`]
//!   - immutable records keep private fields and compare field by field
//! - **Demo**: the straight-line construct → compare → report routine
//! - **Context**: run configuration (output format, verification)
//!
//! ## Example
//!
//! ```
//! use valref::{Handle, Person, Point2D, Point2DRecord};
//!
//! // Two people with the same fields are still two different objects.
//! let jenny1 = Handle::new(Person::new("Jenny", 35));
//! let jenny2 = Handle::new(Person::new("Jenny", 35));
//! assert!(jenny1 != jenny2);
//!
//! // Copying a point duplicates its coordinates.
//! let point1 = Point2D::new(3, 5);
//! let mut point3 = point1;
//! point3.x += 1;
//! assert_eq!(point1.x, 3);
//!
//! // Records compare by their contents.
//! assert_eq!(Point2DRecord::new(3, 5), Point2DRecord::new(3, 5));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod aggregate;
pub mod context;
pub mod demo;
pub mod error;

// Re-export main types
pub use aggregate::{
    Aggregate, Handle, Location, Person, Point2D, Point2DRecord, Semantics, WeatherObject,
    WeatherReading, WeatherRecord, WeatherValue,
};
pub use context::{DemoContext, OutputFormat};
pub use demo::{run, Finding, Outcome, Report, Step};
pub use error::{DemoError, Result};

/// Valref version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
