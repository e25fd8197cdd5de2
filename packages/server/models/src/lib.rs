#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! External request and query types for the access map server.
//!
//! The shapes clients send to create infrastructure and to scope spatial
//! queries. They are separate from the core model crate so the external
//! contract can evolve independently of the stored entities.

use access_map_infrastructure_models::{Coordinate, PathGeometry};
use serde::{Deserialize, Serialize};

/// Request to create a sidewalk attached to existing intersections.
///
/// Represents a not-yet-persisted sidewalk. The referenced intersection
/// nodes are resolved by the persistence collaborator at creation time;
/// nothing is validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSidewalk {
    /// Centerline of the new sidewalk, in path order.
    pub path_coordinates: Vec<Coordinate>,
    /// Identifiers of the intersection nodes the sidewalk links to.
    #[serde(default)]
    pub intersection_nodes: Vec<String>,
}

impl CreateSidewalk {
    /// Creates a request from a path and the intersections it links to.
    #[must_use]
    pub const fn new(path_coordinates: Vec<Coordinate>, intersection_nodes: Vec<String>) -> Self {
        Self {
            path_coordinates,
            intersection_nodes,
        }
    }
}

impl PathGeometry for CreateSidewalk {
    fn path_coordinates(&self) -> &[Coordinate] {
        &self.path_coordinates
    }
}

/// A circular spatial filter over the network.
///
/// Transient: never persisted and never given an identity. The radius
/// must be positive for the filter to be meaningful; the validation entry
/// points in `access_map_infrastructure` enforce that for callers that
/// need it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Latitude of the center in decimal degrees.
    pub latitude: f64,
    /// Longitude of the center in decimal degrees.
    pub longitude: f64,
    /// Radius of the filter circle.
    pub radius: f64,
}

impl Region {
    /// Creates a region from raw scalars.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64, radius: f64) -> Self {
        Self {
            latitude,
            longitude,
            radius,
        }
    }

    /// Creates a region centered on a coordinate.
    ///
    /// Field-identical to [`Region::new`] called with the coordinate's
    /// components.
    #[must_use]
    pub const fn from_center(center: Coordinate, radius: f64) -> Self {
        Self::new(center.latitude, center.longitude, radius)
    }

    /// The center of the region as a coordinate.
    #[must_use]
    pub const fn center(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}
