//! *An immutable, navigable collection of points of interest*.
//!
//! Places
//! ======
//!
//! A location browsing application shows its user one place at a time,
//! and lets them step forward and backward through an ordered list of
//! nearby points of interest. This crate is the data source behind that
//! interaction: a [`PlaceCollection`] is built once from a finished,
//! ordered sequence of [`Place`] records, and answers three questions:
//!
//! - How many places are there? ([`PlaceCollection::count`])
//! - Which place is at position `i`? ([`PlaceCollection::get`])
//! - Which place comes after/before this one?
//!   ([`PlaceCollection::next`], [`PlaceCollection::previous`])
//!
//! Fetching places, computing distances, and rendering them are the
//! business of collaborators. Each place carries an opaque
//! [`ProviderHandle`] to the [`Provider`] that supplied its enrichment
//! data, but the collection never looks inside it.
//!
//! ```
//! use places::prelude::*;
//!
//! let provider = ProviderHandle::new(Minimal::new());
//! let places: Vec<Place> = ["0", "1", "2"]
//!     .iter()
//!     .map(|id| Place::new(id, "Somewhere", Coordinate::origin(), Categories::default(), &provider))
//!     .collect();
//!
//! let source = PlaceCollection::new(places);
//! assert_eq!(source.count(), 3);
//! let first = source.get(0)?;
//! assert_eq!(source.next(first).map(Place::id), Some("1"));
//! assert!(source.previous(first).is_none());
//! assert!(source.get(-1).is_err());
//! # Ok::<(), places::Error>(())
//! ```

mod collection;
mod coordinate;
mod place;
mod provider;
mod source;
pub mod text;

/// The bread-and-butter, shrink-wrapped and ready to use
pub mod prelude {
    pub use crate::collection::PlaceCollection;
    pub use crate::coordinate::Coordinate;
    pub use crate::place::Categories;
    pub use crate::place::Place;
    pub use crate::provider::Dictionary;
    pub use crate::provider::Minimal;
    pub use crate::provider::Provider;
    pub use crate::provider::ProviderHandle;
    pub use crate::source::PlaceDataSource;
    pub use crate::Error;
}

/// Preamble for crate-internal modules, and for user-provided
/// place providers and data sources
pub mod authoring {
    pub use crate::prelude::*;

    pub use log::debug;
    pub use log::trace;
    pub use log::warn;

    pub use std::collections::BTreeMap;
    pub use std::sync::Arc;
    pub use uuid::Uuid;
}

pub use crate::prelude::*;

/// The *Places* error messaging enumeration. Badly needs reconsideration
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("index {index} out of range for {count} places")]
    IndexOutOfRange { index: isize, count: usize },

    #[error("syntax error in line {0}: {1}")]
    Syntax(usize, String),

    #[error("i/o error")]
    Io(#[from] std::io::Error),

    #[error("{0} not found{1}")]
    NotFound(String, String),
}
