//! Domain layer for Weathercast
//!
//! Contains the observation series, feature pipeline, forecast entities,
//! value objects, and domain errors. This layer has no I/O and defines the
//! ubiquitous language shared by every other crate.

pub mod entities;
pub mod errors;
pub mod features;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use features::{FeatureVector, clean, featurize};
pub use value_objects::*;
