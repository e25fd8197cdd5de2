#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Encoding and validation glue for the pedestrian infrastructure model.
//!
//! The model crates are pure shapes with total constructors; everything
//! error-bearing lives here instead: JSON round-trips, coordinate and
//! region range checks, and the reference checker that keeps an
//! infrastructure snapshot coherent before it is handed to a graph or
//! routing consumer.

pub mod codec;
pub mod graph;
pub mod validate;

use thiserror::Error;

/// Errors raised by the encoding and validation entry points.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// A record could not be decoded: a required field was missing or a
    /// value had the wrong shape.
    #[error("Malformed record: {0}")]
    MalformedRecord(#[from] serde_json::Error),

    /// A coordinate fell outside the WGS84 range.
    #[error("Invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate {
        /// Latitude that failed the range check.
        latitude: f64,
        /// Longitude that failed the range check.
        longitude: f64,
    },

    /// A region carried a non-positive or non-finite radius.
    #[error("Invalid region: radius {radius}")]
    InvalidRegion {
        /// Radius that failed the check.
        radius: f64,
    },

    /// An adjacency reference did not resolve to any active entity.
    #[error("Dangling reference: {id}")]
    DanglingReference {
        /// The unresolved identifier string.
        id: String,
    },
}
