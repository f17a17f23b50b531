//! Maps-SDK seam: selected points and reverse geocoding.
//!
//! # Responsibility
//! - Model the point-of-interest shape handed over by the map UI.
//! - Define the reverse-geocoding capability the location-selection flow
//!   consumes; the actual SDK lives outside this workspace.
//!
//! # Invariants
//! - Core never talks to a maps SDK directly; it only consumes these types.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// A point selected on the map, either a named POI or a raw coordinate the
/// geocoder described.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub latitude: f64,
    pub longitude: f64,
    /// Display label: POI name, or the reverse-geocoded address line.
    pub name: String,
}

/// Reverse-geocoding failure reported by the host SDK.
#[derive(Debug)]
pub enum GeocodeError {
    /// The geocoder backend was unreachable or rejected the lookup.
    Unavailable(String),
}

impl Display for GeocodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(message) => write!(f, "geocoder unavailable: {message}"),
        }
    }
}

impl Error for GeocodeError {}

/// Capability boundary for address lookups on map clicks.
pub trait ReverseGeocoder {
    /// Returns a human-readable address line for the coordinate, or `None`
    /// when the geocoder has nothing for it.
    fn describe(&self, latitude: f64, longitude: f64) -> Result<Option<String>, GeocodeError>;
}

/// Builds the POI for a raw map click by reverse-geocoding the coordinate.
///
/// Falls back to a `lat, lng` label when the geocoder has no address, so a
/// click in the middle of nowhere still produces a selectable point.
pub fn poi_from_map_click<G: ReverseGeocoder>(
    geocoder: &G,
    latitude: f64,
    longitude: f64,
) -> Result<PointOfInterest, GeocodeError> {
    let name = geocoder
        .describe(latitude, longitude)?
        .unwrap_or_else(|| format!("{latitude:.5}, {longitude:.5}"));
    Ok(PointOfInterest {
        latitude,
        longitude,
        name,
    })
}
