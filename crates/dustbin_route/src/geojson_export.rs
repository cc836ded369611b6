use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};

use crate::{
    assembled_route::AssembledRoute,
    waypoint::{Waypoint, waypoint_bounds},
};

const KIND_ROUTE: &str = "route";
const KIND_DUSTBIN: &str = "dustbin";
const KIND_ANCHOR: &str = "anchor";

fn feature(geometry: Value, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(geometry)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn waypoint_feature(waypoint: &Waypoint, kind: &str) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("kind".to_string(), kind.into());
    properties.insert("id".to_string(), waypoint.id.into());
    properties.insert("full".to_string(), waypoint.is_full.into());

    feature(Value::Point(vec![waypoint.lng, waypoint.lat]), properties)
}

/// Everything a map client needs to draw the dustbins and the collection route:
/// the route line, one point per dustbin, one point per anchor and the bounds of
/// all dustbins.
pub fn route_feature_collection(
    route: &AssembledRoute,
    waypoints: &[Waypoint],
) -> FeatureCollection {
    let mut features = Vec::with_capacity(1 + waypoints.len() + route.anchors.len());

    if !route.coordinates.is_empty() {
        let mut properties = JsonObject::new();
        properties.insert("kind".to_string(), KIND_ROUTE.into());
        properties.insert(
            "unavailable_segments".to_string(),
            route.unavailable_segments.clone().into(),
        );
        properties.insert("length_meters".to_string(), route.length_meters().into());

        let mut positions: Vec<Vec<f64>> = route
            .coordinates
            .iter()
            .map(|point| <[f64; 2]>::from(*point).to_vec())
            .collect();

        // A LineString needs at least two positions
        let geometry = if positions.len() == 1 {
            Value::Point(positions.remove(0))
        } else {
            Value::LineString(positions)
        };

        features.push(feature(geometry, properties));
    }

    features.extend(
        waypoints
            .iter()
            .map(|waypoint| waypoint_feature(waypoint, KIND_DUSTBIN)),
    );
    features.extend(
        route
            .anchors
            .iter()
            .map(|anchor| waypoint_feature(anchor, KIND_ANCHOR)),
    );

    let bbox = waypoint_bounds(waypoints)
        .map(|rect| vec![rect.min().x, rect.min().y, rect.max().x, rect.max().y]);

    FeatureCollection {
        bbox,
        features,
        foreign_members: None,
    }
}
