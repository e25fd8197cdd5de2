#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Canonical entity types for the pedestrian infrastructure model.
//!
//! These types describe every physical feature of a walkable street
//! network: sidewalks, traffic lights, traffic islands, zebra and
//! pedestrian crossings, and the intersection nodes that connect them.
//! They are plain immutable records shared by every collaborator —
//! persistence, transport, and routing all build on the same shapes but
//! live in their own packages.
//!
//! Shared capabilities (identity, timestamps, path geometry, adjacency)
//! are expressed as traits rather than a base type, so generic code can
//! operate over heterogeneous entity kinds without matching on each one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use uuid::Uuid;

/// Access to an entity's optional persisted identifier.
pub trait Identified {
    /// The persisted identifier. `None` until the entity is saved.
    fn id(&self) -> Option<Uuid>;
}

/// Access to an entity's persistence timestamps.
///
/// The three timestamps are independent optional fields on the wire.
/// [`Timestamped::lifecycle`] derives the usual three-stage reading from
/// them for consumers that want a single state tag.
pub trait Timestamped {
    /// When the entity was first persisted.
    fn created_at(&self) -> Option<DateTime<Utc>>;

    /// When the entity was last modified.
    fn updated_at(&self) -> Option<DateTime<Utc>>;

    /// When the entity was soft-deleted, if ever.
    fn deleted_at(&self) -> Option<DateTime<Utc>>;

    /// Whether the entity has been soft-deleted.
    ///
    /// Soft-deleted entities are retained for history but excluded from
    /// active spatial queries and adjacency resolution.
    fn is_deleted(&self) -> bool {
        self.deleted_at().is_some()
    }

    /// The lifecycle stage derived from the timestamps.
    fn lifecycle(&self) -> LifecycleState {
        if self.deleted_at().is_some() {
            LifecycleState::Deleted
        } else if self.created_at().is_some() {
            LifecycleState::Active
        } else {
            LifecycleState::New
        }
    }
}

/// Access to the ordered coordinate path tracing a linear feature.
pub trait PathGeometry {
    /// The coordinates in path order.
    ///
    /// Order traces the physical feature (e.g. a sidewalk's centerline)
    /// and must survive every transformation unchanged.
    fn path_coordinates(&self) -> &[Coordinate];
}

/// Access to the ordered adjacency references of an entity.
pub trait AdjacentInfrastructures {
    /// Identifier strings of the infrastructures touching this entity.
    ///
    /// References are weak: entries may duplicate or dangle, and nothing
    /// here deduplicates or resolves them. Resolution is a separate
    /// lookup step performed by the graph consumer.
    fn adjacent_infrastructures(&self) -> &[String];
}

/// Lifecycle stage of an entity, derived from its timestamps.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleState {
    /// Constructed locally, never persisted.
    New,
    /// Persisted and not soft-deleted.
    Active,
    /// Soft-deleted: retained for history, excluded from active queries.
    Deleted,
}

/// Tag naming each concrete infrastructure kind.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum InfrastructureKind {
    /// Sidewalk segment
    Sidewalk,
    /// Signalized crossing point
    TrafficLight,
    /// Raised refuge between carriageways
    TrafficIsland,
    /// Marked zebra crossing
    ZebraCrossing,
    /// Unmarked or signal-controlled pedestrian crossing
    PedestrianCrossing,
    /// Point where infrastructures meet
    IntersectionNode,
}

impl InfrastructureKind {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Sidewalk,
            Self::TrafficLight,
            Self::TrafficIsland,
            Self::ZebraCrossing,
            Self::PedestrianCrossing,
            Self::IntersectionNode,
        ]
    }

    /// Whether entities of this kind carry a coordinate path.
    ///
    /// Intersection nodes are the only point-located kind.
    #[must_use]
    pub const fn has_path(self) -> bool {
        !matches!(self, Self::IntersectionNode)
    }
}

/// A geographic point in WGS84 coordinates.
///
/// Construction performs no range checking. The validation entry points
/// in `access_map_infrastructure` reject latitudes outside [-90, 90] and
/// longitudes outside [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from decimal degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A sidewalk segment traced by its centerline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sidewalk {
    /// Persisted identifier. `None` until saved.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Centerline coordinates in path order.
    pub path_coordinates: Vec<Coordinate>,
    /// When the record was first persisted.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the record was last modified.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// When the record was soft-deleted.
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Sidewalk {
    /// Creates an unsaved sidewalk from its centerline path.
    #[must_use]
    pub const fn new(path_coordinates: Vec<Coordinate>) -> Self {
        Self {
            id: None,
            path_coordinates,
            created_at: None,
            updated_at: None,
            deleted_at: None,
        }
    }
}

impl Identified for Sidewalk {
    fn id(&self) -> Option<Uuid> {
        self.id
    }
}

impl PathGeometry for Sidewalk {
    fn path_coordinates(&self) -> &[Coordinate] {
        &self.path_coordinates
    }
}

impl Timestamped for Sidewalk {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

/// A traffic light spanning the crossing it controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficLight {
    /// Persisted identifier. `None` until saved.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Span of the controlled crossing, in path order.
    pub path_coordinates: Vec<Coordinate>,
    /// When the record was first persisted.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the record was last modified.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// When the record was soft-deleted.
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl TrafficLight {
    /// Creates an unsaved traffic light from its path.
    #[must_use]
    pub const fn new(path_coordinates: Vec<Coordinate>) -> Self {
        Self {
            id: None,
            path_coordinates,
            created_at: None,
            updated_at: None,
            deleted_at: None,
        }
    }
}

impl Identified for TrafficLight {
    fn id(&self) -> Option<Uuid> {
        self.id
    }
}

impl PathGeometry for TrafficLight {
    fn path_coordinates(&self) -> &[Coordinate] {
        &self.path_coordinates
    }
}

impl Timestamped for TrafficLight {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

/// A raised refuge island between carriageways.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficIsland {
    /// Persisted identifier. `None` until saved.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Outline of the island, in path order.
    pub path_coordinates: Vec<Coordinate>,
    /// When the record was first persisted.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the record was last modified.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// When the record was soft-deleted.
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl TrafficIsland {
    /// Creates an unsaved traffic island from its path.
    #[must_use]
    pub const fn new(path_coordinates: Vec<Coordinate>) -> Self {
        Self {
            id: None,
            path_coordinates,
            created_at: None,
            updated_at: None,
            deleted_at: None,
        }
    }
}

impl Identified for TrafficIsland {
    fn id(&self) -> Option<Uuid> {
        self.id
    }
}

impl PathGeometry for TrafficIsland {
    fn path_coordinates(&self) -> &[Coordinate] {
        &self.path_coordinates
    }
}

impl Timestamped for TrafficIsland {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

/// A marked zebra crossing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZebraCrossing {
    /// Persisted identifier. `None` until saved.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Crossing line over the carriageway, in path order.
    pub path_coordinates: Vec<Coordinate>,
    /// When the record was first persisted.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the record was last modified.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// When the record was soft-deleted.
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl ZebraCrossing {
    /// Creates an unsaved zebra crossing from its path.
    #[must_use]
    pub const fn new(path_coordinates: Vec<Coordinate>) -> Self {
        Self {
            id: None,
            path_coordinates,
            created_at: None,
            updated_at: None,
            deleted_at: None,
        }
    }
}

impl Identified for ZebraCrossing {
    fn id(&self) -> Option<Uuid> {
        self.id
    }
}

impl PathGeometry for ZebraCrossing {
    fn path_coordinates(&self) -> &[Coordinate] {
        &self.path_coordinates
    }
}

impl Timestamped for ZebraCrossing {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

/// A pedestrian crossing without zebra markings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PedestrianCrossing {
    /// Persisted identifier. `None` until saved.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Crossing line over the carriageway, in path order.
    pub path_coordinates: Vec<Coordinate>,
    /// When the record was first persisted.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the record was last modified.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// When the record was soft-deleted.
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl PedestrianCrossing {
    /// Creates an unsaved pedestrian crossing from its path.
    #[must_use]
    pub const fn new(path_coordinates: Vec<Coordinate>) -> Self {
        Self {
            id: None,
            path_coordinates,
            created_at: None,
            updated_at: None,
            deleted_at: None,
        }
    }
}

impl Identified for PedestrianCrossing {
    fn id(&self) -> Option<Uuid> {
        self.id
    }
}

impl PathGeometry for PedestrianCrossing {
    fn path_coordinates(&self) -> &[Coordinate] {
        &self.path_coordinates
    }
}

impl Timestamped for PedestrianCrossing {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

/// A point where infrastructures meet.
///
/// Unlike the path-bearing kinds, a node is located by a single
/// coordinate and carries the identifiers of the infrastructures touching
/// it. The list holds opaque strings, never owning references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntersectionNode {
    /// Persisted identifier. `None` until saved.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Where the infrastructures touch.
    pub coordinate: Coordinate,
    /// When the record was first persisted.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the record was last modified.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// When the record was soft-deleted.
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
    /// Identifiers of the infrastructures touching this node, in
    /// insertion order. May contain duplicates or ids that no longer
    /// resolve.
    #[serde(default)]
    pub adjacent_infrastructures: Vec<String>,
}

impl IntersectionNode {
    /// Creates an unsaved node at a point, with no adjacency recorded.
    #[must_use]
    pub const fn new(coordinate: Coordinate) -> Self {
        Self {
            id: None,
            coordinate,
            created_at: None,
            updated_at: None,
            deleted_at: None,
            adjacent_infrastructures: Vec::new(),
        }
    }
}

impl Identified for IntersectionNode {
    fn id(&self) -> Option<Uuid> {
        self.id
    }
}

impl Timestamped for IntersectionNode {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

impl AdjacentInfrastructures for IntersectionNode {
    fn adjacent_infrastructures(&self) -> &[String] {
        &self.adjacent_infrastructures
    }
}

/// A heterogeneous snapshot of the network, bundled for transport or
/// storage as one unit.
///
/// The aggregate owns nothing beyond the grouping: every entity is
/// independently identified and may outlive it. No cross-entity checks
/// happen on construction; `access_map_infrastructure::graph` verifies
/// adjacency against a snapshot when a consumer needs a coherent graph.
// Wire keys for the island and crossing sequences are singular.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Infrastructure {
    /// Sidewalk segments.
    #[serde(default)]
    pub sidewalks: Vec<Sidewalk>,
    /// Traffic lights.
    #[serde(default)]
    pub traffic_lights: Vec<TrafficLight>,
    /// Traffic islands.
    #[serde(default)]
    pub traffic_island: Vec<TrafficIsland>,
    /// Zebra crossings.
    #[serde(default)]
    pub zebra_crossing: Vec<ZebraCrossing>,
    /// Pedestrian crossings.
    #[serde(default)]
    pub pedestrian_crossing: Vec<PedestrianCrossing>,
    /// Intersection nodes.
    #[serde(default)]
    pub intersection_nodes: Vec<IntersectionNode>,
}

impl Infrastructure {
    /// Total number of entities across all six sequences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sidewalks.len()
            + self.traffic_lights.len()
            + self.traffic_island.len()
            + self.zebra_crossing.len()
            + self.pedestrian_crossing.len()
            + self.intersection_nodes.len()
    }

    /// Whether the snapshot holds no entities at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
