//! JSON encoding and decoding for model and request types.
//!
//! The wire form of every type is a keyed record: camelCase keys, RFC 3339
//! timestamps with timezone, explicit nulls for unset optional fields.
//! Decoding treats null and absent identically for optional fields,
//! defaults missing list-valued adjacency fields to empty, and never
//! defaults a missing required field.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::InfrastructureError;

/// Encodes a model or request value to its JSON record form.
///
/// Soft-deleted entities encode exactly like active ones; lifecycle is
/// data, not wire shape.
///
/// # Errors
///
/// Returns [`InfrastructureError::MalformedRecord`] if the value cannot
/// be represented as JSON.
pub fn encode<T: Serialize>(value: &T) -> Result<String, InfrastructureError> {
    Ok(serde_json::to_string(value)?)
}

/// Decodes a model or request value from its JSON record form.
///
/// # Errors
///
/// Returns [`InfrastructureError::MalformedRecord`] if a required field
/// is missing or a value has the wrong shape.
pub fn decode<T: DeserializeOwned>(json: &str) -> Result<T, InfrastructureError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use access_map_infrastructure_models::{
        Coordinate, Infrastructure, IntersectionNode, Sidewalk, TrafficLight, ZebraCrossing,
    };
    use access_map_server_models::{CreateSidewalk, Region};
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    use super::*;

    fn timestamp(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn sidewalk_roundtrip_keeps_every_field() {
        let sidewalk = Sidewalk {
            id: Some(Uuid::new_v4()),
            path_coordinates: vec![
                Coordinate::new(52.52, 13.40),
                Coordinate::new(52.53, 13.41),
            ],
            created_at: Some(timestamp("2024-01-01T00:00:00Z")),
            updated_at: None,
            deleted_at: None,
        };

        let decoded: Sidewalk = decode(&encode(&sidewalk).unwrap()).unwrap();
        assert_eq!(decoded, sidewalk);
        assert_eq!(decoded.path_coordinates, sidewalk.path_coordinates);
        assert!(decoded.updated_at.is_none());
        assert!(decoded.deleted_at.is_none());
    }

    #[test]
    fn sidewalk_wire_keys_are_camel_case() {
        let sidewalk = Sidewalk::new(vec![Coordinate::new(52.52, 13.40)]);
        let json = encode(&sidewalk).unwrap();
        assert!(json.contains("\"pathCoordinates\""));
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"latitude\""));
        assert!(json.contains("\"longitude\""));
    }

    #[test]
    fn missing_path_coordinates_is_malformed() {
        let result: Result<Sidewalk, _> = decode("{\"id\":null}");
        assert!(matches!(
            result,
            Err(InfrastructureError::MalformedRecord(_))
        ));
    }

    #[test]
    fn type_mismatch_is_malformed_not_a_panic() {
        let json = "{\"pathCoordinates\":[{\"latitude\":\"north\",\"longitude\":13.4}]}";
        let result: Result<Sidewalk, _> = decode(json);
        assert!(matches!(
            result,
            Err(InfrastructureError::MalformedRecord(_))
        ));
    }

    #[test]
    fn null_and_absent_optionals_both_decode_to_unset() {
        let with_nulls: TrafficLight = decode(
            "{\"id\":null,\"pathCoordinates\":[],\"createdAt\":null,\"updatedAt\":null,\"deletedAt\":null}",
        )
        .unwrap();
        let with_absent: TrafficLight = decode("{\"pathCoordinates\":[]}").unwrap();
        assert_eq!(with_nulls, with_absent);
        assert!(with_absent.id.is_none());
        assert!(with_absent.created_at.is_none());
    }

    #[test]
    fn missing_adjacency_list_defaults_to_empty() {
        let node: IntersectionNode =
            decode("{\"coordinate\":{\"latitude\":52.52,\"longitude\":13.4}}").unwrap();
        assert!(node.adjacent_infrastructures.is_empty());
    }

    #[test]
    fn node_roundtrip_keeps_duplicate_references() {
        let node = IntersectionNode {
            id: Some(Uuid::new_v4()),
            adjacent_infrastructures: vec!["a".to_string(), "a".to_string(), "b".to_string()],
            ..IntersectionNode::new(Coordinate::new(52.52, 13.40))
        };
        let decoded: IntersectionNode = decode(&encode(&node).unwrap()).unwrap();
        assert_eq!(decoded, node);
        assert_eq!(decoded.adjacent_infrastructures, ["a", "a", "b"]);
    }

    #[test]
    fn soft_deleted_entity_roundtrips_like_an_active_one() {
        let crossing = ZebraCrossing {
            id: Some(Uuid::new_v4()),
            created_at: Some(timestamp("2024-01-01T00:00:00Z")),
            deleted_at: Some(timestamp("2024-06-01T12:00:00Z")),
            ..ZebraCrossing::new(vec![Coordinate::new(52.52, 13.40)])
        };
        let decoded: ZebraCrossing = decode(&encode(&crossing).unwrap()).unwrap();
        assert_eq!(decoded, crossing);
    }

    #[test]
    fn empty_record_decodes_to_default_aggregate() {
        let decoded: Infrastructure = decode("{}").unwrap();
        assert_eq!(decoded, Infrastructure::default());
    }

    #[test]
    fn aggregate_roundtrip_keeps_singular_wire_keys() {
        let infrastructure = Infrastructure {
            sidewalks: vec![Sidewalk::new(vec![Coordinate::new(52.52, 13.40)])],
            zebra_crossing: vec![ZebraCrossing::new(Vec::new())],
            ..Infrastructure::default()
        };
        let json = encode(&infrastructure).unwrap();
        assert!(json.contains("\"sidewalks\""));
        assert!(json.contains("\"trafficLights\""));
        assert!(json.contains("\"trafficIsland\""));
        assert!(json.contains("\"zebraCrossing\""));
        assert!(json.contains("\"pedestrianCrossing\""));
        assert!(json.contains("\"intersectionNodes\""));

        let decoded: Infrastructure = decode(&json).unwrap();
        assert_eq!(decoded, infrastructure);
    }

    #[test]
    fn create_sidewalk_roundtrip() {
        let request = CreateSidewalk::new(
            vec![Coordinate::new(52.52, 13.40), Coordinate::new(52.53, 13.41)],
            vec!["node-1".to_string(), "node-2".to_string()],
        );
        let decoded: CreateSidewalk = decode(&encode(&request).unwrap()).unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn create_sidewalk_without_nodes_defaults_to_empty() {
        let request: CreateSidewalk =
            decode("{\"pathCoordinates\":[{\"latitude\":52.52,\"longitude\":13.4}]}").unwrap();
        assert!(request.intersection_nodes.is_empty());
    }

    #[test]
    fn region_roundtrip() {
        let region = Region::new(52.52, 13.40, 500.0);
        let decoded: Region = decode(&encode(&region).unwrap()).unwrap();
        assert_eq!(decoded, region);
    }

    #[test]
    fn timestamp_format_is_stable_across_roundtrips() {
        let light = TrafficLight {
            created_at: Some(timestamp("2024-01-01T00:00:00Z")),
            ..TrafficLight::new(Vec::new())
        };
        let once = encode(&light).unwrap();
        let decoded: TrafficLight = decode(&once).unwrap();
        let twice = encode(&decoded).unwrap();
        assert_eq!(once, twice);
    }
}
