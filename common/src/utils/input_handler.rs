use std::collections::HashMap;

use thiserror::Error;

use super::position::{BoundingBox, Position};

/// Raw query string parameters of a request
pub type QueryParams = HashMap<String, String>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("The query string parameters are missing.")]
    MissingParameters,

    #[error("The positions are not in a valid format.")]
    InvalidFormat,

    #[error("Parameter \"location\" should be from dict of positions.")]
    UnknownArea,
}

/// What a single request asks for. Built once per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryFlags {
    pub include_cars: bool,
    pub include_chargers: bool,
    pub desired_fuel_level: i64,
}

/// Reads the bounding box out of the request parameters.
/// - `None` parameters fail with `MissingParameters`
/// - Any of `lat1`, `lon1`, `lat2`, `lon2` missing or not a finite number fails with
///   `InvalidFormat`
pub fn parse_bounding_box(params: Option<&QueryParams>) -> Result<BoundingBox, ParseError> {
    let params = params.ok_or(ParseError::MissingParameters)?;

    let corner1 = Position::new(
        parse_coordinate(params, "lat1")?,
        parse_coordinate(params, "lon1")?,
    );
    let corner2 = Position::new(
        parse_coordinate(params, "lat2")?,
        parse_coordinate(params, "lon2")?,
    );

    Ok(BoundingBox::new(corner1, corner2))
}

fn parse_coordinate(params: &QueryParams, key: &str) -> Result<f64, ParseError> {
    let value = params
        .get(key)
        .and_then(|val| val.trim().parse::<f64>().ok())
        .ok_or(ParseError::InvalidFormat)?;

    if !value.is_finite() {
        return Err(ParseError::InvalidFormat);
    }

    Ok(value)
}

impl QueryFlags {
    /// Reads the optional flags. Malformed values fall back to the defaults.
    /// - `cars` and `chargers` are enabled only by the literal `"true"`
    /// - `cars` falls back to `include_cars_by_default` when absent
    /// - `desiredFuelLevel` falls back to `default_fuel_level` when absent or not an integer
    pub fn from_params(
        params: &QueryParams,
        include_cars_by_default: bool,
        default_fuel_level: i64,
    ) -> Self {
        let include_cars = params
            .get("cars")
            .map_or(include_cars_by_default, |v| v == "true");

        let include_chargers = params.get("chargers").is_some_and(|v| v == "true");

        let desired_fuel_level = params
            .get("desiredFuelLevel")
            .and_then(|v| v.trim().parse::<i64>().ok())
            .unwrap_or(default_fuel_level);

        Self {
            include_cars,
            include_chargers,
            desired_fuel_level,
        }
    }
}
