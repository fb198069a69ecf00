pub mod calculation;
pub mod catalog;
pub mod catalog_json;
pub mod scenario_json;
