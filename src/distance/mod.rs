//! Great-circle distance model.
//!
//! Provides the haversine distance used for all leg lengths in the engine.

mod haversine;

pub use haversine::haversine_km;
