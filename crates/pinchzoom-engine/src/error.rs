use std::fmt;
use std::io;

use crate::config::ConfigError;

#[derive(Debug)]
pub enum ZoomError {
    InvalidConfig(ConfigError),
    DriverSpawn(io::Error),
    /// The gesture thread is no longer accepting commands.
    DriverStopped,
    DriverPanicked,
}

impl fmt::Display for ZoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoomError::InvalidConfig(err) => write!(f, "invalid zoom configuration: {err}"),
            ZoomError::DriverSpawn(err) => write!(f, "failed to spawn gesture thread: {err}"),
            ZoomError::DriverStopped => write!(f, "gesture thread has stopped"),
            ZoomError::DriverPanicked => write!(f, "gesture thread panicked"),
        }
    }
}

impl std::error::Error for ZoomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ZoomError::InvalidConfig(err) => Some(err),
            ZoomError::DriverSpawn(err) => Some(err),
            ZoomError::DriverStopped | ZoomError::DriverPanicked => None,
        }
    }
}

impl From<ConfigError> for ZoomError {
    fn from(err: ConfigError) -> Self {
        ZoomError::InvalidConfig(err)
    }
}
