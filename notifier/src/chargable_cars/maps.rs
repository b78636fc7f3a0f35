use base64::{engine::general_purpose::STANDARD, Engine};
use common::utils::position::Position;
use reqwest::Client;

use super::{
    consts::{
        CAR_MARKER_COLOR, CHARGER_MARKER_COLOR, MAPS_ENDPOINT, MAP_HEIGHT, MAP_STYLE, MAP_WIDTH,
        MAP_ZOOM, MARKER_SIZE,
    },
    error::ChargableResult,
    position_query::{check_status, endpoint_url},
};

/// Positions drawn with the same marker color
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerGroup {
    /// Hex color without the leading `#`
    pub color: &'static str,
    pub positions: Vec<Position>,
}

/// Everything needed to render one static map
#[derive(Debug, Clone, PartialEq)]
pub struct MapRequestSpec {
    pub center: Position,
    pub marker_groups: Vec<MarkerGroup>,
}

impl MapRequestSpec {
    /// One marker group per non empty list, cars first
    pub fn new(
        center: Position,
        car_positions: &[Position],
        charger_positions: &[Position],
    ) -> Self {
        let marker_groups = [
            (CAR_MARKER_COLOR, car_positions),
            (CHARGER_MARKER_COLOR, charger_positions),
        ]
        .into_iter()
        .filter(|(_, positions)| !positions.is_empty())
        .map(|(color, positions)| MarkerGroup {
            color,
            positions: positions.to_vec(),
        })
        .collect();

        Self {
            center,
            marker_groups,
        }
    }

    /// Query string understood by the static map API
    pub fn query_string(&self, api_key: &str) -> String {
        let mut params = vec![
            format!("style={}", MAP_STYLE),
            format!("width={}", MAP_WIDTH),
            format!("height={}", MAP_HEIGHT),
            format!("center=lonlat:{},{}", self.center.lon, self.center.lat),
            format!("zoom={}", MAP_ZOOM),
        ];

        let markers: Vec<String> = self
            .marker_groups
            .iter()
            .flat_map(|group| {
                group.positions.iter().map(move |pos| {
                    // %23 is the escaped '#' of the hex color
                    format!(
                        "lonlat:{},{};color:%23{};size:{}",
                        pos.lon, pos.lat, group.color, MARKER_SIZE
                    )
                })
            })
            .collect();

        if !markers.is_empty() {
            params.push(format!("marker={}", markers.join("|")));
        }

        params.push(format!("apiKey={}", api_key));
        params.join("&")
    }
}

/// Static map renderer
pub struct Maps {
    base_url: String,
    api_key: String,
}

impl Maps {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        "Maps"
    }

    /// Renders the map and returns the raw image.
    /// Any status other than 200 fails with a `Networking` error.
    pub async fn compose(
        &self,
        client: &Client,
        center: Position,
        car_positions: &[Position],
        charger_positions: &[Position],
    ) -> ChargableResult<Vec<u8>> {
        let spec = MapRequestSpec::new(center, car_positions, charger_positions);
        let base = endpoint_url(&self.base_url, MAPS_ENDPOINT);

        log::info!(
            "Execute HTTP request against: {}?{}.",
            base,
            spec.query_string("<redacted>")
        );

        let url = format!("{}?{}", base, spec.query_string(&self.api_key));
        let response = client.get(url).send().await.inspect_err(|e| {
            log::error!("{}:{}, {}", std::file!(), std::line!(), e.to_string());
        })?;

        check_status(self.name(), response.status())?;

        Ok(response.bytes().await?.to_vec())
    }
}

/// Base64 encodes an image so it can travel in a text response body
pub fn transform_image(img: &[u8]) -> String {
    STANDARD.encode(img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chargable_cars::{error::ChargableError, test_support::MockUpstream};

    #[test]
    fn test_image_is_transformed() {
        let input = [
            0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10, 0x4a, 0x46, 0x49, 0x46, 0x00, 0x01, 0x01, 0x00,
            0x00,
        ];

        assert_eq!(transform_image(&input), "/9j/4AAQSkZJRgABAQAA");
    }

    #[test]
    fn test_transformed_image_decodes_back() {
        let inputs: [&[u8]; 4] = [&[], &[0], &[0xff, 0xfe], &[1, 2, 3, 4, 5, 6, 7]];

        for input in inputs {
            let decoded = STANDARD.decode(transform_image(input)).unwrap();
            assert_eq!(decoded, input);
        }
    }

    #[test]
    fn test_query_string() {
        let spec = MapRequestSpec::new(
            Position::new(1.5, 2.5),
            &[Position::new(1.0, 2.0), Position::new(3.0, 4.0)],
            &[Position::new(5.0, 6.0)],
        );

        assert_eq!(
            spec.query_string("xxx"),
            "style=maptiler-3d&width=600&height=600&center=lonlat:2.5,1.5&zoom=14\
             &marker=lonlat:2,1;color:%233ea635;size:medium\
             |lonlat:4,3;color:%233ea635;size:medium\
             |lonlat:6,5;color:%23f30e0e;size:medium\
             &apiKey=xxx"
        );
    }

    #[test]
    fn test_empty_groups_are_dropped() {
        let spec = MapRequestSpec::new(Position::new(0.0, 0.0), &[], &[Position::new(5.0, 6.0)]);

        assert_eq!(spec.marker_groups.len(), 1);
        assert_eq!(spec.marker_groups[0].color, CHARGER_MARKER_COLOR);

        let spec = MapRequestSpec::new(Position::new(0.0, 0.0), &[], &[]);
        assert!(spec.marker_groups.is_empty());
        assert!(!spec.query_string("k").contains("marker="));
    }

    #[tokio::test]
    async fn test_image_containing_a_map_is_generated() {
        let upstream = MockUpstream::bytes(200, &[0xff, 0xff, 0xff]).await;
        let maps = Maps::new(upstream.url.clone(), "xxx");

        let img = maps
            .compose(
                &Client::new(),
                Position::new(1.123456, 1.123456),
                &[Position::new(1.123456, 2.123456), Position::new(3.123456, 4.123456)],
                &[Position::new(1.123456, 2.123456)],
            )
            .await
            .unwrap();

        assert_eq!(img, vec![0xff, 0xff, 0xff]);

        let requests = upstream.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].target.starts_with("/v1/staticmap?"));
        assert_eq!(requests[0].query_param("apiKey").as_deref(), Some("xxx"));
        assert_eq!(
            requests[0].query_param("center").as_deref(),
            Some("lonlat:1.123456,1.123456")
        );
    }

    #[tokio::test]
    async fn test_unexpected_status_is_networking_error() {
        let upstream = MockUpstream::bytes(401, b"").await;
        let maps = Maps::new(upstream.url.clone(), "bad-key");

        let err = maps
            .compose(&Client::new(), Position::new(0.0, 0.0), &[Position::new(1.0, 1.0)], &[])
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ChargableError::Networking {
                provider: "Maps",
                got: 401,
                expected: 200
            }
        ));
    }
}
