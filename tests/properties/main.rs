//! Property test suite entry point.

mod model_properties;
mod schema_properties;
