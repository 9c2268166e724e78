pub mod backends;
pub mod bounds;
pub mod corners;
pub mod dms;
pub mod file;
pub mod transforms;

pub use backends::gdal_backend::GdalFile;
pub use bounds::Envelope;
pub use corners::Corner;
pub use file::RasterFile;
pub use transforms::GeoTransform;
