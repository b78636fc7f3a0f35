use std::{collections::HashMap, env, str::FromStr};

use super::{
    consts::{
        DEFAULT_FUEL_LEVEL, GREENMO_URL, HOST, MAPS_API_TOKEN_PARAMETER, MAPS_URL, PORT,
        PUSHOVER_API_TOKEN_PARAMETER, PUSHOVER_API_USER_PARAMETER, PUSHOVER_URL, SPIRII_URL,
    },
    error::ConfigError,
};

/// Source of secrets such as API keys
pub trait ParameterStore {
    fn get_parameter(&self, name: &str) -> Result<String, ConfigError>;
}

/// Reads parameters from the process environment.
/// `/greenmo/mapsApiToken` is looked up as `GREENMO_MAPS_API_TOKEN`.
pub struct EnvParameterStore;

impl ParameterStore for EnvParameterStore {
    fn get_parameter(&self, name: &str) -> Result<String, ConfigError> {
        env::var(parameter_env_key(name))
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::MissingParameter(name.to_string()))
    }
}

/// In memory parameters
#[derive(Default)]
pub struct StaticParameterStore {
    parameters: HashMap<String, String>,
}

impl StaticParameterStore {
    pub fn new<I, K, V>(parameters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            parameters: parameters
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ParameterStore for StaticParameterStore {
    fn get_parameter(&self, name: &str) -> Result<String, ConfigError> {
        self.parameters
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::MissingParameter(name.to_string()))
    }
}

/// Environment variable holding a parameter path, `/a/fooBar` -> `A_FOO_BAR`
pub fn parameter_env_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;

    for c in name.trim_start_matches('/').chars() {
        match c {
            '/' | '-' | '.' => {
                key.push('_');
                prev_lower = false;
            }
            c if c.is_ascii_uppercase() => {
                if prev_lower {
                    key.push('_');
                }
                key.push(c);
                prev_lower = false;
            }
            c => {
                key.push(c.to_ascii_uppercase());
                prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
            }
        }
    }

    key
}

#[derive(Clone)]
pub struct PushoverCredentials {
    pub token: String,
    pub user: String,
}

/// Read only configuration shared by every invocation
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub greenmo_url: String,
    pub spirii_url: String,
    pub maps_url: String,
    pub pushover_url: String,
    pub default_fuel_level: i64,
    pub include_cars_by_default: bool,
    pub maps_api_key: String,
    /// Notifications are only sent when both credentials are configured
    pub pushover: Option<PushoverCredentials>,
}

impl Config {
    /// Production defaults with the given maps key
    pub fn new(maps_api_key: impl Into<String>) -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            greenmo_url: GREENMO_URL.to_string(),
            spirii_url: SPIRII_URL.to_string(),
            maps_url: MAPS_URL.to_string(),
            pushover_url: PUSHOVER_URL.to_string(),
            default_fuel_level: DEFAULT_FUEL_LEVEL,
            include_cars_by_default: true,
            maps_api_key: maps_api_key.into(),
            pushover: None,
        }
    }

    /// Loads the configuration from the process environment and the given secret store
    pub fn load(store: &impl ParameterStore) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok(), store)
    }

    /// Builds the configuration from any key/value lookup.
    /// - Missing values fall back to the production defaults
    /// - Values present but unparseable fail with `InvalidValue`
    /// - The maps API key is required, the Pushover credentials are not
    pub fn from_lookup<F>(lookup: F, store: &impl ParameterStore) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let maps_api_key = store.get_parameter(MAPS_API_TOKEN_PARAMETER)?;

        let pushover = match (
            store.get_parameter(PUSHOVER_API_TOKEN_PARAMETER),
            store.get_parameter(PUSHOVER_API_USER_PARAMETER),
        ) {
            (Ok(token), Ok(user)) => Some(PushoverCredentials { token, user }),
            _ => {
                log::info!("Pushover credentials not configured, notifications disabled");
                None
            }
        };

        let defaults = Self::new(maps_api_key);

        Ok(Self {
            host: lookup("CHARGABLE_HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "CHARGABLE_PORT", defaults.port)?,
            greenmo_url: lookup("GREENMO_URL").unwrap_or(defaults.greenmo_url),
            spirii_url: lookup("SPIRII_URL").unwrap_or(defaults.spirii_url),
            maps_url: lookup("MAPS_URL").unwrap_or(defaults.maps_url),
            pushover_url: lookup("PUSHOVER_URL").unwrap_or(defaults.pushover_url),
            default_fuel_level: parse_or(
                &lookup,
                "DEFAULT_FUEL_LEVEL",
                defaults.default_fuel_level,
            )?,
            include_cars_by_default: parse_or(
                &lookup,
                "INCLUDE_CARS_BY_DEFAULT",
                defaults.include_cars_by_default,
            )?,
            maps_api_key: defaults.maps_api_key,
            pushover,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value,
        }),
    }
}
