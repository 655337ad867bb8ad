use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading assets or running the host loop.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {what}: {source}")]
    Parse {
        what: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("mesh '{0}' not found in mesh buffer")]
    UnknownMesh(String),

    #[error("transform '{transform}' names unknown parent '{parent}'")]
    UnknownParent { transform: String, parent: String },

    #[error("camera refers to unknown transform '{0}'")]
    UnknownCameraTransform(String),

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("window creation failed: {0}")]
    Os(#[from] winit::error::OsError),
}

impl EngineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(what: impl Into<String>, source: toml::de::Error) -> Self {
        Self::Parse {
            what: what.into(),
            source,
        }
    }
}
