//! Schedule derivation: a visiting order becomes a timed itinerary.

mod deriver;

pub use deriver::derive_schedule;
