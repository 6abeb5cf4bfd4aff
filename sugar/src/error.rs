//! Error type shared by the fallible sugar helpers

use std::path::PathBuf;

/// Errors produced by JSON, file, entity and scripting helpers
#[derive(Debug, thiserror::Error)]
pub enum SugarError {
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid asset name: {0}")]
    InvalidName(String),

    #[error("Entity {0:?} does not exist")]
    NoSuchEntity(hecs::Entity),

    #[error("Entity {entity:?} has no {component} component")]
    MissingComponent {
        entity: hecs::Entity,
        component: &'static str,
    },

    #[error("Script error: {0}")]
    Script(String),
}

impl SugarError {
    /// Wrap an IO error together with the path that caused it
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<Box<rhai::EvalAltResult>> for SugarError {
    fn from(error: Box<rhai::EvalAltResult>) -> Self {
        Self::Script(error.to_string())
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, SugarError>;
