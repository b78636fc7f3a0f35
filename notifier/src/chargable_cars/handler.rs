use std::{collections::BTreeMap, future::Future, sync::Arc};

use common::utils::{
    input_handler::{parse_bounding_box, ParseError, QueryFlags, QueryParams},
    json_parser::MessageBody,
    position::{BoundingBox, Position},
};
use reqwest::Client;
use serde::Serialize;

use super::{
    config::Config,
    consts::{
        CARS_FOUND_MESSAGE, IMAGE_CONTENT_TYPE, NOTHING_REQUESTED_MESSAGE, NO_CARS_MESSAGE,
        NO_CHARGERS_MESSAGE, UNKNOWN_ERROR_MESSAGE,
    },
    error::{ChargableError, ChargableResult},
    green_mo::GreenMo,
    maps::{transform_image, Maps},
    position_query::{query, PositionQuery},
    presets::preset_area,
    pushover::Pushover,
    spirii::Spirii,
};

/// Response handed back to the HTTP host, shaped like an API gateway proxy result
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl ProxyResponse {
    /// JSON `{ "message": ... }` body
    pub fn message(status_code: u16, message: &str) -> Self {
        Self {
            status_code,
            headers: content_type("application/json"),
            body: serde_json::to_string(&MessageBody {
                message: message.to_string(),
            })
            .unwrap_or_default(),
            is_base64_encoded: false,
        }
    }

    /// Base64 encoded PNG body
    pub fn image(encoded: String) -> Self {
        Self {
            status_code: 200,
            headers: content_type(IMAGE_CONTENT_TYPE),
            body: encoded,
            is_base64_encoded: true,
        }
    }
}

fn content_type(value: &str) -> BTreeMap<String, String> {
    BTreeMap::from([("Content-Type".to_string(), value.to_string())])
}

fn error_response(e: ChargableError) -> ProxyResponse {
    log::error!("The chargable cars execution failed: {}", e);
    ProxyResponse::message(e.status_code(), &e.response_message())
}

/// Runs [`handle`] on its own task so a panic ends up as a 500 instead of a dropped connection
pub async fn invoke(
    params: Option<QueryParams>,
    config: Arc<Config>,
    client: Client,
) -> ProxyResponse {
    isolated(async move { handle(params.as_ref(), &config, &client).await }).await
}

async fn isolated<F>(execution: F) -> ProxyResponse
where
    F: Future<Output = ProxyResponse> + Send + 'static,
{
    tokio::spawn(execution).await.unwrap_or_else(|e| {
        log::error!("{}:{}, {}", std::file!(), std::line!(), e.to_string());
        ProxyResponse::message(500, UNKNOWN_ERROR_MESSAGE)
    })
}

/// Handles one request.
/// - Bad or missing coordinates: 400
/// - An upstream answering with an unexpected status: 403
/// - Nothing found: 200 with a message
/// - Something found: 200 with the rendered map, base64 encoded
/// - Anything else: 500
pub async fn handle(
    params: Option<&QueryParams>,
    config: &Config,
    client: &Client,
) -> ProxyResponse {
    log::info!("The chargable cars execution start.");

    let Some(params) = params else {
        return error_response(ParseError::MissingParameters.into());
    };

    let bbox = match parse_bounding_box(Some(params)) {
        Ok(bbox) => bbox,
        Err(e) => return error_response(e.into()),
    };
    let flags = QueryFlags::from_params(
        params,
        config.include_cars_by_default,
        config.default_fuel_level,
    );

    log::info!("Positions successfully parsed: {:?}, {:?}", bbox, flags);

    let (car_positions, charger_positions) =
        match find_positions(&bbox, &flags, config, client).await {
            Ok(positions) => positions,
            Err(e) => return error_response(e),
        };

    if let Some(msg) = nothing_found_message(&flags, &car_positions, &charger_positions) {
        log::info!("{}", msg);
        return ProxyResponse::message(200, msg);
    }

    log::info!(
        "Found {} cars and {} chargers, generating map.",
        car_positions.len(),
        charger_positions.len()
    );

    let maps = Maps::new(&config.maps_url, &config.maps_api_key);
    let img = match maps
        .compose(client, bbox.center(), &car_positions, &charger_positions)
        .await
    {
        Ok(img) => img,
        Err(e) => return error_response(e),
    };

    log::info!("The chargable cars execution finished successfully.");

    ProxyResponse::image(transform_image(&img))
}

/// Queries the requested providers. When both are requested they run at the same time and the
/// first failure aborts the whole lookup.
async fn find_positions(
    bbox: &BoundingBox,
    flags: &QueryFlags,
    config: &Config,
    client: &Client,
) -> ChargableResult<(Vec<Position>, Vec<Position>)> {
    let green_mo = GreenMo::new(&config.greenmo_url, flags.desired_fuel_level);
    let spirii = Spirii::new(&config.spirii_url);

    let cars = async {
        if !flags.include_cars {
            return Ok(Vec::new());
        }
        log::info!("Fetch cars in desired location.");
        query(&green_mo, client, &green_mo.params(bbox)).await
    };

    let chargers = async {
        if !flags.include_chargers {
            return Ok(Vec::new());
        }
        log::info!("Fetch chargers in desired location.");
        query(&spirii, client, &spirii.params(bbox)).await
    };

    tokio::try_join!(cars, chargers)
}

/// A requested provider that found nothing ends the request, cars are checked first
fn nothing_found_message(
    flags: &QueryFlags,
    car_positions: &[Position],
    charger_positions: &[Position],
) -> Option<&'static str> {
    if !flags.include_cars && !flags.include_chargers {
        return Some(NOTHING_REQUESTED_MESSAGE);
    }

    if flags.include_cars && car_positions.is_empty() {
        Some(NO_CARS_MESSAGE)
    } else if flags.include_chargers && charger_positions.is_empty() {
        Some(NO_CHARGERS_MESSAGE)
    } else {
        None
    }
}

/// Scheduled mode: looks for chargeable cars in a preset area and pushes the map to the user.
/// - Returns `Ok(false)` when no car needs charging
/// - Upstream failures are also pushed as a plain alert before being returned
pub async fn notify_area(area: &str, config: &Config, client: &Client) -> ChargableResult<bool> {
    let bbox = preset_area(area).ok_or(ParseError::UnknownArea)?;

    let credentials = config.pushover.clone().ok_or_else(|| {
        ChargableError::Unknown("Pushover credentials are not configured".to_string())
    })?;
    let pushover = Pushover::new(&config.pushover_url, credentials);

    let green_mo = GreenMo::new(&config.greenmo_url, config.default_fuel_level);
    let car_positions = match query(&green_mo, client, &green_mo.params(&bbox)).await {
        Ok(positions) => positions,
        Err(e) => {
            pushover.alert(client, "GreenMo query failed").await;
            return Err(e);
        }
    };

    if car_positions.is_empty() {
        log::info!("[{}] {}", area, NO_CARS_MESSAGE);
        return Ok(false);
    }

    let maps = Maps::new(&config.maps_url, &config.maps_api_key);
    let img = match maps
        .compose(client, bbox.center(), &car_positions, &[])
        .await
    {
        Ok(img) => img,
        Err(e) => {
            pushover.alert(client, "Maps query failed").await;
            return Err(e);
        }
    };

    if let Err(e) = pushover.notify(client, CARS_FOUND_MESSAGE, Some(img)).await {
        pushover.alert(client, "Pushover notification failed").await;
        return Err(e);
    }

    log::info!("[{}] Notified about {} cars.", area, car_positions.len());
    Ok(true)
}
