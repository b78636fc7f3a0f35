pub use common::utils::consts::{DEFAULT_FUEL_LEVEL, EXPECTED_STATUS_CODE, HOST, LOG_LEVEL, PORT};

pub const GREENMO_URL: &str = "https://greenmobility.frontend.fleetbird.eu";
pub const GREENMO_ENDPOINT: &str = "api/prod/v1.06/map/cars";

pub const SPIRII_URL: &str = "https://app.spirii.dk";
pub const SPIRII_ENDPOINT: &str = "api/v2/clusters";
pub const SPIRII_APP_VERSION: &str = "3.6.1";
/// Zoom at which the API returns single chargers instead of clusters
pub const SPIRII_ZOOM: &str = "22";

pub const MAPS_URL: &str = "https://maps.geoapify.com";
pub const MAPS_ENDPOINT: &str = "v1/staticmap";
pub const MAP_STYLE: &str = "maptiler-3d";
pub const MAP_WIDTH: u32 = 600;
pub const MAP_HEIGHT: u32 = 600;
pub const MAP_ZOOM: u32 = 14;
pub const CAR_MARKER_COLOR: &str = "3ea635";
pub const CHARGER_MARKER_COLOR: &str = "f30e0e";
pub const MARKER_SIZE: &str = "medium";

pub const PUSHOVER_URL: &str = "https://api.pushover.net";
pub const PUSHOVER_ENDPOINT: &str = "1/messages.json";

pub const MAPS_API_TOKEN_PARAMETER: &str = "/greenmo/mapsApiToken";
pub const PUSHOVER_API_TOKEN_PARAMETER: &str = "/greenmo/pushoverApiToken";
pub const PUSHOVER_API_USER_PARAMETER: &str = "/greenmo/pushoverApiUser";

pub const IMAGE_CONTENT_TYPE: &str = "image/png";
pub const UNKNOWN_ERROR_MESSAGE: &str = "unknown exception";
pub const NO_CARS_MESSAGE: &str = "No cars for charging were found.";
pub const NO_CHARGERS_MESSAGE: &str = "No available chargers were found.";
pub const NOTHING_REQUESTED_MESSAGE: &str = "No positions were requested.";
pub const CARS_FOUND_MESSAGE: &str = "Found some cars for charging.";
