use std::{fmt::Debug, path::Path};

use geo::Coord;

use crate::{components::transforms::GeoTransform, errors::Result};

/// Open raster dataset.
///
/// The underlying handle is released when the value is dropped.
pub trait RasterFile: Debug + Sized {
    fn open<P: AsRef<Path>>(path: P) -> Result<Self>;
    fn path(&self) -> &Path;
    /// Description of the driver that opened the file.
    fn driver_description(&self) -> Result<String>;
    /// Whether the driver advertises raster capability.
    fn is_raster(&self) -> bool;
    /// (width, height) in pixels.
    fn size(&self) -> (usize, usize);
    fn num_bands(&self) -> usize;
    /// Pretty WKT of the spatial reference, if the dataset has one.
    fn crs_wkt(&self) -> Option<String>;
    fn transform(&self) -> Result<GeoTransform>;
    /// Transforms coordinates in the dataset crs to EPSG:4326 (lon, lat).
    fn to_wgs84(&self, coords: &[Coord]) -> Result<Vec<Coord>>;
    /// Writes this raster reprojected to EPSG:4326 at `destination`.
    fn reproject_to_wgs84(&self, destination: &Path) -> Result<()>;
}
