use std::path::PathBuf;

use crate::{exitcode, operations::BatchSummary};

pub type Result<T> = std::result::Result<T, RastertoolError>;

#[derive(thiserror::Error, Debug)]
pub enum RastertoolError {
    #[error(transparent)]
    GdalError(#[from] gdal::errors::GdalError),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    #[error("Path {0:?} does not exist")]
    PathNotFound(PathBuf),
    #[error("Source file is not a raster")]
    NotARaster(PathBuf),
    #[error("Dataset {0:?} has no spatial reference")]
    MissingSpatialRef(PathBuf),
    #[error("Geometry has no coordinates")]
    EmptyGeometry,
    #[error("{} of {} files failed", .0.failed(), .0.total())]
    Batch(BatchSummary),
}

impl RastertoolError {
    pub fn exit_code(&self) -> i32 {
        match self {
            RastertoolError::NotARaster(_) => exitcode::NOT_RASTER,
            RastertoolError::Batch(_) => exitcode::PARTIAL,
            RastertoolError::PathNotFound(_) => exitcode::NOINPUT,
            RastertoolError::JsonError(_) | RastertoolError::EmptyGeometry => exitcode::DATAERR,
            RastertoolError::IoError(_) => exitcode::IOERR,
            RastertoolError::GdalError(_) | RastertoolError::MissingSpatialRef(_) => {
                exitcode::SOFTWARE
            }
        }
    }
}
