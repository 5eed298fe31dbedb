use std::path::PathBuf;

use thiserror::Error;

/// Reasons [`crate::generate`] refuses a parameter set.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenerateError {
    /// A parameter lies outside its allowed range.
    #[error("{parameter} {message}")]
    ParameterRange {
        parameter: &'static str,
        message: String,
    },
    /// More distinct targets were requested than the graph can offer.
    #[error(
        "max_connections ({max_connections}) exceeds the {available} distinct targets available to each node"
    )]
    ImpossibleConstraint {
        max_connections: usize,
        available: usize,
    },
}

impl GenerateError {
    pub(crate) fn range(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::ParameterRange {
            parameter,
            message: message.into(),
        }
    }

    /// Name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::ParameterRange { parameter, .. } => parameter,
            Self::ImpossibleConstraint { .. } => "max_connections",
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{parameter} {message}")]
    InvalidParameter {
        parameter: &'static str,
        message: String,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("display failed: {0}")]
    Display(String),
}

impl RenderError {
    pub(crate) fn invalid(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            message: message.into(),
        }
    }
}
