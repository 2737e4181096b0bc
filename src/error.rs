use std::path::PathBuf;
use thiserror::Error;

/// Why a dimension was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Negative,
    NonFinite,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::Negative => write!(f, "must not be negative"),
            Rejection::NonFinite => write!(f, "must be a finite number"),
        }
    }
}

/// Errors raised while building a shape.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("invalid {parameter} for {shape}: {value} {reason}")]
    InvalidGeometryParameter {
        shape: &'static str,
        parameter: &'static str,
        value: f64,
        reason: Rejection,
    },
}

impl ShapeError {
    pub fn invalid(
        shape: &'static str,
        parameter: &'static str,
        value: f64,
        reason: Rejection,
    ) -> Self {
        Self::InvalidGeometryParameter {
            shape,
            parameter,
            value,
            reason,
        }
    }

    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidGeometryParameter { parameter, .. } => parameter,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
