//! List, inspect, bound and reproject GeoTIFF rasters.
//!
//! Raster access, coordinate transformation and reprojection go through
//! GDAL; envelopes are computed with `geo`.

pub mod components;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod operations;

pub use components::{Envelope, GdalFile, RasterFile};
pub use config::{Args, Config};
pub use errors::{RastertoolError, Result};
pub use operations::{run, Operation};
