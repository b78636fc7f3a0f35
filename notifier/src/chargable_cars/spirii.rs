use common::utils::{
    json_parser::Charger,
    position::{BoundingBox, Position},
};

use super::{
    consts::{SPIRII_APP_VERSION, SPIRII_ENDPOINT, SPIRII_ZOOM},
    position_query::{endpoint_url, PositionQuery},
};

/// Public charging network. Reports the chargers with a free connector.
pub struct Spirii {
    base_url: String,
}

impl Spirii {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl PositionQuery for Spirii {
    type Entity = Charger;

    fn name(&self) -> &'static str {
        "Spirii"
    }

    fn url(&self) -> String {
        endpoint_url(&self.base_url, SPIRII_ENDPOINT)
    }

    fn headers(&self) -> Vec<(&'static str, &'static str)> {
        vec![("appversion", SPIRII_APP_VERSION)]
    }

    /// `corner1` is taken as the north-west corner and `corner2` as the south-east one
    fn params(&self, bbox: &BoundingBox) -> Vec<(&'static str, String)> {
        vec![
            ("includeOccupied", "false".to_string()),
            ("includeOutOfService", "false".to_string()),
            ("includeRoaming", "false".to_string()),
            (
                "neCoordinates",
                format!("{},{}", bbox.corner1.lat, bbox.corner2.lon),
            ),
            (
                "swCoordinates",
                format!("{},{}", bbox.corner2.lat, bbox.corner1.lon),
            ),
            ("zoom", SPIRII_ZOOM.to_string()),
        ]
    }

    fn filter(&self, charger: &Charger) -> bool {
        charger.properties.available_connectors > 0
    }

    fn map(&self, charger: Charger) -> Position {
        charger.position()
    }
}
