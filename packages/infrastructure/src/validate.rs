//! Range checks for the advisory model invariants.
//!
//! Construction is total across the model crates; callers that need the
//! documented invariants enforced run values through these checks before
//! handing them to storage or query collaborators.

use access_map_infrastructure_models::{Coordinate, Infrastructure, PathGeometry};
use access_map_server_models::Region;

use crate::InfrastructureError;

/// Checks that a coordinate lies in the WGS84 range.
///
/// Latitude must be within [-90, 90] and longitude within [-180, 180],
/// both inclusive. Non-finite components fail the check.
///
/// # Errors
///
/// Returns [`InfrastructureError::InvalidCoordinate`] if either component
/// is out of range.
pub fn coordinate(c: &Coordinate) -> Result<(), InfrastructureError> {
    if (-90.0..=90.0).contains(&c.latitude) && (-180.0..=180.0).contains(&c.longitude) {
        Ok(())
    } else {
        Err(InfrastructureError::InvalidCoordinate {
            latitude: c.latitude,
            longitude: c.longitude,
        })
    }
}

/// Checks every coordinate of a path-bearing value.
///
/// An empty path is valid; a non-empty path is rejected at its first
/// out-of-range coordinate.
///
/// # Errors
///
/// Returns [`InfrastructureError::InvalidCoordinate`] for the first
/// coordinate that fails the range check.
pub fn path<T: PathGeometry>(value: &T) -> Result<(), InfrastructureError> {
    value.path_coordinates().iter().try_for_each(coordinate)
}

/// Checks a region's center and radius.
///
/// The center must pass the coordinate range check and the radius must be
/// positive and finite.
///
/// # Errors
///
/// Returns [`InfrastructureError::InvalidCoordinate`] for an out-of-range
/// center and [`InfrastructureError::InvalidRegion`] for a non-positive
/// or non-finite radius.
pub fn region(r: &Region) -> Result<(), InfrastructureError> {
    coordinate(&r.center())?;
    if r.radius.is_finite() && r.radius > 0.0 {
        Ok(())
    } else {
        Err(InfrastructureError::InvalidRegion { radius: r.radius })
    }
}

/// Checks every coordinate carried by a snapshot.
///
/// Walks all six sequences, soft-deleted entities included.
///
/// # Errors
///
/// Returns [`InfrastructureError::InvalidCoordinate`] for the first
/// out-of-range coordinate in any entity.
pub fn snapshot(infrastructure: &Infrastructure) -> Result<(), InfrastructureError> {
    paths(&infrastructure.sidewalks)?;
    paths(&infrastructure.traffic_lights)?;
    paths(&infrastructure.traffic_island)?;
    paths(&infrastructure.zebra_crossing)?;
    paths(&infrastructure.pedestrian_crossing)?;
    infrastructure
        .intersection_nodes
        .iter()
        .try_for_each(|node| coordinate(&node.coordinate))
}

fn paths<T: PathGeometry>(entities: &[T]) -> Result<(), InfrastructureError> {
    entities.iter().try_for_each(path)
}
