//! Planning error taxonomy.

use std::error::Error;
use std::fmt;

/// Why a planning request was rejected.
///
/// Validation failures are detected before any distance computation runs,
/// so a rejected request never produces a partial itinerary. Nothing is
/// retried internally: the pipeline is deterministic, so an identical
/// retry would fail identically.
#[derive(Debug)]
pub enum PlanError {
    /// The request carried no stops.
    EmptyStops,
    /// A stop or anchor coordinate had a non-finite component.
    /// `context` names the offender (`"stop 3"`, `"start anchor"`, ...).
    NonFiniteCoordinate {
        /// Which coordinate failed validation.
        context: String,
    },
    /// The stop source collaborator failed while resolving stops.
    Source(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyStops => write!(f, "route request has no stops"),
            Self::NonFiniteCoordinate { context } => {
                write!(f, "non-finite coordinate on {context}")
            }
            Self::Source(err) => write!(f, "stop source failed: {err}"),
        }
    }
}

impl Error for PlanError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Source(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
