use common::utils::{
    json_parser::Car,
    position::{BoundingBox, Position},
};

use super::{
    consts::GREENMO_ENDPOINT,
    position_query::{endpoint_url, PositionQuery},
};

/// Car sharing fleet. Reports the cars that need charging.
pub struct GreenMo {
    base_url: String,
    /// Cars at or below this fuel level are kept
    desired_fuel_level: i64,
}

impl GreenMo {
    pub fn new(base_url: impl Into<String>, desired_fuel_level: i64) -> Self {
        Self {
            base_url: base_url.into(),
            desired_fuel_level,
        }
    }
}

impl PositionQuery for GreenMo {
    type Entity = Car;

    fn name(&self) -> &'static str {
        "GreenMo"
    }

    fn url(&self) -> String {
        endpoint_url(&self.base_url, GREENMO_ENDPOINT)
    }

    fn params(&self, bbox: &BoundingBox) -> Vec<(&'static str, String)> {
        vec![
            ("lon1", bbox.corner1.lon.to_string()),
            ("lat1", bbox.corner1.lat.to_string()),
            ("lon2", bbox.corner2.lon.to_string()),
            ("lat2", bbox.corner2.lat.to_string()),
        ]
    }

    fn filter(&self, car: &Car) -> bool {
        car.fuel_level <= self.desired_fuel_level as f64
    }

    fn map(&self, car: Car) -> Position {
        car.position()
    }
}
