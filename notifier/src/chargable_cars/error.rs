use common::utils::input_handler::ParseError;
use thiserror::Error;

use super::consts::UNKNOWN_ERROR_MESSAGE;

pub type ChargableResult<T> = Result<T, ChargableError>;

#[derive(Debug, Error)]
pub enum ChargableError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Invalid response code - {provider}. Got {got}, expected {expected}")]
    Networking {
        provider: &'static str,
        got: u16,
        expected: u16,
    },

    #[error("{0}")]
    Unknown(String),
}

impl From<reqwest::Error> for ChargableError {
    fn from(e: reqwest::Error) -> Self {
        Self::Unknown(e.to_string())
    }
}

impl ChargableError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Parse(_) => 400,
            Self::Networking { .. } => 403,
            Self::Unknown(_) => 500,
        }
    }

    /// Message shown to the caller. Unclassified failures never leak their details.
    pub fn response_message(&self) -> String {
        match self {
            Self::Unknown(_) => UNKNOWN_ERROR_MESSAGE.to_string(),
            e => e.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parameter {0} is not set")]
    MissingParameter(String),

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}
