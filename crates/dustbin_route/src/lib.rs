pub mod assembled_route;
pub mod config;
pub mod geo_point;
pub mod geojson_export;
pub mod osrm;
pub mod route_assembler;
pub mod route_provider;
pub mod segment;
pub mod waypoint;

#[cfg(test)]
pub(crate) mod test_utils;
