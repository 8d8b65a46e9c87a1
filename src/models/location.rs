//! Location type.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres used for great-circle estimates.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geocoded stop.
///
/// The optimizer addresses locations purely by their index in the input
/// slice; the coordinates are only read to label route direction and to
/// build an offline estimate matrix.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::Location;
///
/// let a = Location::new("a", "Office", 51.5007, -0.1246);
/// let b = Location::new("b", "Depot", 51.5055, -0.0754);
/// let km = a.haversine_km(&b);
/// assert!(km > 3.0 && km < 4.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    id: String,
    label: String,
    lat: f64,
    lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,
}

impl Location {
    /// Creates a location from its identity, display label, and coordinates.
    pub fn new(id: impl Into<String>, label: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            lat,
            lng,
            address: None,
        }
    }

    /// Attaches the free-text address this location was resolved from.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Great-circle distance to `other` in kilometres (haversine formula).
    pub fn haversine_km(&self, other: &Location) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();
        let a = (d_lat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos()
                * other.lat.to_radians().cos()
                * (d_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}
