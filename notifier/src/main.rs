use std::error::Error;

use notifier::chargable_cars::consts::LOG_LEVEL;

fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    env_logger::builder()
        .filter_level(LOG_LEVEL)
        .parse_default_env()
        .init();

    notifier::run()
}
