//! Errors of the shop, from bad console input to an unusable configuration
use std::{error::Error, fmt, io};

use crate::cone_type::ConeType;

#[derive(Debug)]
pub enum ShopError {
    /// Non-numeric or out of range input. Carries the message shown before re-prompting
    InvalidInput(String),
    InvalidPreset(String),
    /// The price table has no entry for the cone. There is no recovery from this one
    UnknownConeType(ConeType),
    InvalidConfig(String),
    ConfigFileError(String),
    Io(io::Error),
}

impl fmt::Display for ShopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShopError::InvalidInput(message) => write!(f, "{}", message),
            ShopError::InvalidPreset(name) => write!(f, "Invalid sundae type: {}", name),
            ShopError::UnknownConeType(cone) => {
                write!(f, "No price configured for the {} cone", cone.name())
            }
            ShopError::InvalidConfig(reason) => write!(f, "Invalid configuration: {}", reason),
            ShopError::ConfigFileError(reason) => {
                write!(f, "Could not read configuration file: {}", reason)
            }
            ShopError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl Error for ShopError {}

impl From<io::Error> for ShopError {
    fn from(err: io::Error) -> Self {
        ShopError::Io(err)
    }
}

impl From<serde_json::Error> for ShopError {
    fn from(err: serde_json::Error) -> Self {
        ShopError::ConfigFileError(err.to_string())
    }
}
