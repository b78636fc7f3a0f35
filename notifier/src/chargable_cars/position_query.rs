use common::utils::position::{BoundingBox, Position};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{
    consts::EXPECTED_STATUS_CODE,
    error::{ChargableError, ChargableResult},
};

/// Upstream that can be asked for positions inside a bounding box.
///
/// Implementors only hold fixed configuration; the request itself is done by [`query`].
pub trait PositionQuery {
    /// Entity as returned by the upstream
    type Entity: DeserializeOwned;

    /// Name used in logs and error messages
    fn name(&self) -> &'static str;

    /// Full URL of the endpoint, without query string
    fn url(&self) -> String;

    fn headers(&self) -> Vec<(&'static str, &'static str)> {
        Vec::new()
    }

    /// Query string parameters selecting the given area
    fn params(&self, bbox: &BoundingBox) -> Vec<(&'static str, String)>;

    /// Whether an entity is worth reporting
    fn filter(&self, entity: &Self::Entity) -> bool;

    fn map(&self, entity: Self::Entity) -> Position;
}

/// Fetches the entities of an upstream, keeps the interesting ones and maps them to positions.
/// - Exactly one GET request is sent
/// - Any status other than 200 fails with a `Networking` error naming the upstream
/// - Malformed entities are logged and skipped
pub async fn query<Q: PositionQuery>(
    provider: &Q,
    client: &Client,
    params: &[(&'static str, String)],
) -> ChargableResult<Vec<Position>> {
    let entities = fetch(provider, client, params).await?;

    Ok(entities
        .into_iter()
        .filter(|entity| provider.filter(entity))
        .map(|entity| provider.map(entity))
        .collect())
}

async fn fetch<Q: PositionQuery>(
    provider: &Q,
    client: &Client,
    params: &[(&'static str, String)],
) -> ChargableResult<Vec<Q::Entity>> {
    let url = provider.url();

    log::info!("Execute HTTP request against: {}.", url);

    let mut request = client.get(&url).query(params);
    for (name, value) in provider.headers() {
        request = request.header(name, value);
    }

    let response = request.send().await.inspect_err(|e| {
        log::error!("{}:{}, {}", std::file!(), std::line!(), e.to_string());
    })?;

    check_status(provider.name(), response.status())?;

    let raw: Vec<Value> = response.json().await.map_err(|e| {
        log::error!("{}:{}, {}", std::file!(), std::line!(), e.to_string());
        ChargableError::Unknown(format!("{} returned an unexpected body: {}", provider.name(), e))
    })?;

    Ok(decode_entities(provider.name(), raw))
}

/// Fails unless the upstream answered with the single expected status code
pub fn check_status(provider: &'static str, status: StatusCode) -> ChargableResult<()> {
    if status.as_u16() != EXPECTED_STATUS_CODE {
        let e = ChargableError::Networking {
            provider,
            got: status.as_u16(),
            expected: EXPECTED_STATUS_CODE,
        };
        log::error!("{}", e);
        return Err(e);
    }

    Ok(())
}

/// Decodes every element on its own so one bad entry does not discard the whole answer
pub fn decode_entities<T: DeserializeOwned>(provider: &str, raw: Vec<Value>) -> Vec<T> {
    raw.into_iter()
        .filter_map(|value| match serde_json::from_value::<T>(value) {
            Ok(entity) => Some(entity),
            Err(e) => {
                log::warn!("[{}] Skipping malformed entity: {}", provider, e);
                None
            }
        })
        .collect()
}

/// `<base>/<endpoint>` without doubled slashes
pub fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}
