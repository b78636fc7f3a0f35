use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::position::Position;

/// Vehicle as returned by the car sharing API. Only the fields used here are
/// required, the rest of the payload is ignored.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    /// Not used for filtering, any JSON type is accepted
    #[serde(default)]
    pub car_id: Option<Value>,
    pub lat: f64,
    pub lon: f64,
    pub fuel_level: f64,
}

impl Car {
    pub fn position(&self) -> Position {
        Position::new(self.lat, self.lon)
    }
}

/// Cluster of chargers as returned by the charging API (GeoJSON feature)
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Charger {
    pub properties: ChargerProperties,
    pub geometry: Geometry,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChargerProperties {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(alias = "numOfAvailableConnectors")]
    pub available_connectors: i64,
}

/// GeoJSON point, coordinates are `[lon, lat]`
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Geometry {
    pub coordinates: [f64; 2],
}

impl Charger {
    pub fn position(&self) -> Position {
        let [lon, lat] = self.geometry.coordinates;
        Position::new(lat, lon)
    }
}

/// Body of every non image response
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MessageBody {
    pub message: String,
}
