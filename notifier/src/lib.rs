use std::error::Error;

use actix_web::rt::System;
use chargable_cars::{
    config::{Config, EnvParameterStore},
    handler::notify_area,
    presets::PRESET_AREAS,
    server::serve,
};
use reqwest::Client;

pub mod chargable_cars;

/// Reads the command line and runs the matching mode
/// - `<program>` or `<program> serve`: HTTP server
/// - `<program> notify <area>`: one scheduled check of a preset area
pub fn run() -> Result<(), Box<dyn Error>> {
    let argv: Vec<String> = std::env::args().collect();

    let config = Config::load(&EnvParameterStore)?;
    let client = Client::builder().build()?;

    match argv.get(1).map(String::as_str) {
        None | Some("serve") => {
            System::new().block_on(serve(config, client))?;
        }
        Some("notify") => {
            let area = argv.get(2).ok_or_else(|| {
                format!(
                    "Wrong args, expected: <program> notify <area>, areas: {}",
                    PRESET_AREAS.join(", ")
                )
            })?;

            let notified = System::new().block_on(notify_area(area, &config, &client))?;
            if !notified {
                log::info!("Nothing to notify about in {}", area);
            }
        }
        Some(other) => {
            return Err(format!(
                "Unknown command {}, expected: <program> [serve | notify <area>]",
                other
            )
            .into());
        }
    }

    Ok(())
}
