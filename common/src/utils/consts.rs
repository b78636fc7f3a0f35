use log::LevelFilter;

pub const HOST: &str = "0.0.0.0";
pub const PORT: u16 = 8080;
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Only status code an upstream may answer with
pub const EXPECTED_STATUS_CODE: u16 = 200;

/// Cars at or below this charge percentage are considered chargeable
pub const DEFAULT_FUEL_LEVEL: i64 = 40;
