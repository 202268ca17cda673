pub mod fetch;
pub mod geojson;
pub mod records;
