use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn an input file into a point sequence.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to open point file `{}`", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read point file `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure of the platform window that presents the rendered frame.
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("could not create a {width}x{height} window: {message}")]
    Create {
        width: usize,
        height: usize,
        message: String,
    },

    #[error("could not present frame: {0}")]
    Present(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Viewer(#[from] ViewerError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl LoadError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Open { path, .. } | LoadError::Read { path, .. } => path,
        }
    }
}
