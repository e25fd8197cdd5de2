//! Reference resolution over an infrastructure snapshot.
//!
//! Adjacency is relation-by-identifier: an intersection node's
//! `adjacent_infrastructures` entries are opaque strings that may or may
//! not name an entity in the same snapshot. The checks here build an
//! active-id index and report what resolves and what dangles.
//! Soft-deleted and unsaved entities never satisfy a reference.

use std::collections::BTreeMap;

use access_map_infrastructure_models::{
    AdjacentInfrastructures, Identified, Infrastructure, InfrastructureKind, Timestamped,
};

use crate::InfrastructureError;

fn collect_active<T: Identified + Timestamped>(
    entities: &[T],
    kind: InfrastructureKind,
    index: &mut BTreeMap<String, InfrastructureKind>,
) {
    for entity in entities {
        if entity.is_deleted() {
            continue;
        }
        if let Some(id) = entity.id() {
            index.insert(id.to_string(), kind);
        }
    }
}

fn collect_dangling<T: AdjacentInfrastructures + Timestamped>(
    entities: &[T],
    index: &BTreeMap<String, InfrastructureKind>,
    dangling: &mut Vec<String>,
) {
    for entity in entities {
        if entity.is_deleted() {
            continue;
        }
        for reference in entity.adjacent_infrastructures() {
            if !index.contains_key(reference) {
                log::debug!("Reference {reference} does not name any active infrastructure");
                dangling.push(reference.clone());
            }
        }
    }
}

/// Builds the id index of all active entities in a snapshot.
///
/// Active means persisted (an id is present) and not soft-deleted. Keys
/// are the canonical hyphenated string form of the entity id, the same
/// form adjacency references carry.
#[must_use]
pub fn active_ids(infrastructure: &Infrastructure) -> BTreeMap<String, InfrastructureKind> {
    let mut index = BTreeMap::new();
    collect_active(
        &infrastructure.sidewalks,
        InfrastructureKind::Sidewalk,
        &mut index,
    );
    collect_active(
        &infrastructure.traffic_lights,
        InfrastructureKind::TrafficLight,
        &mut index,
    );
    collect_active(
        &infrastructure.traffic_island,
        InfrastructureKind::TrafficIsland,
        &mut index,
    );
    collect_active(
        &infrastructure.zebra_crossing,
        InfrastructureKind::ZebraCrossing,
        &mut index,
    );
    collect_active(
        &infrastructure.pedestrian_crossing,
        InfrastructureKind::PedestrianCrossing,
        &mut index,
    );
    collect_active(
        &infrastructure.intersection_nodes,
        InfrastructureKind::IntersectionNode,
        &mut index,
    );
    index
}

/// Resolves an adjacency reference against a snapshot.
///
/// Returns the kind of the active entity the id names, or `None` if the
/// reference dangles. Callers resolving many references should build the
/// index once with [`active_ids`] and look up against that.
#[must_use]
pub fn resolve(infrastructure: &Infrastructure, id: &str) -> Option<InfrastructureKind> {
    active_ids(infrastructure).get(id).copied()
}

/// Returns every adjacency reference that does not resolve, in order.
///
/// Duplicate references are reported once per occurrence. References held
/// by soft-deleted nodes are skipped: a deleted node no longer
/// participates in adjacency.
#[must_use]
pub fn dangling_references(infrastructure: &Infrastructure) -> Vec<String> {
    let index = active_ids(infrastructure);
    let mut dangling = Vec::new();
    collect_dangling(&infrastructure.intersection_nodes, &index, &mut dangling);
    if !dangling.is_empty() {
        log::warn!(
            "Snapshot holds {} unresolved adjacency reference(s)",
            dangling.len()
        );
    }
    dangling
}

/// Verifies that every adjacency reference in a snapshot resolves.
///
/// # Errors
///
/// Returns [`InfrastructureError::DanglingReference`] carrying the first
/// reference that does not name an active entity.
pub fn verify_references(infrastructure: &Infrastructure) -> Result<(), InfrastructureError> {
    dangling_references(infrastructure)
        .into_iter()
        .next()
        .map_or(Ok(()), |id| {
            Err(InfrastructureError::DanglingReference { id })
        })
}
