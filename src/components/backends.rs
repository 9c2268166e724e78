use std::path::{Path, PathBuf};

use geo::Coord;

use crate::{
    components::{file::RasterFile, transforms::GeoTransform},
    errors::{Result, RastertoolError},
};

/// Implementations for gdal
pub mod gdal_backend {
    use super::*;
    use gdal::{
        raster::{reproject, GdalDataType},
        spatial_ref::{AxisMappingStrategy, CoordTransform, SpatialRef},
        Dataset as GdalDataset, DriverManager, Metadata as GdalMetadata,
    };
    use log::{debug, info};

    pub const WGS84_EPSG: u32 = 4326;
    pub const OUTPUT_DRIVER: &str = "GTiff";

    fn wgs84() -> Result<SpatialRef> {
        let mut srs = SpatialRef::from_epsg(WGS84_EPSG)?;
        srs.set_axis_mapping_strategy(AxisMappingStrategy::TraditionalGisOrder);
        Ok(srs)
    }

    #[derive(Debug)]
    pub struct GdalFile {
        path: PathBuf,
        dataset: GdalDataset,
    }

    impl GdalFile {
        fn spatial_ref(&self) -> Result<SpatialRef> {
            let mut srs = self
                .dataset
                .spatial_ref()
                .map_err(|_| RastertoolError::MissingSpatialRef(self.path.clone()))?;
            srs.set_axis_mapping_strategy(AxisMappingStrategy::TraditionalGisOrder);
            Ok(srs)
        }

        fn wgs84_transform(&self) -> Result<CoordTransform> {
            Ok(CoordTransform::new(&self.spatial_ref()?, &wgs84()?)?)
        }

        /// Geotransform covering this raster's extent in EPSG:4326
        /// over a grid of `size` pixels.
        fn wgs84_geo_transform(&self, size: (usize, usize)) -> Result<GeoTransform> {
            let transform = self.transform()?;
            let (width, height) = self.size();
            let (width, height) = (width as f64, height as f64);
            let corners: Vec<Coord> = [(0., 0.), (width, 0.), (width, height), (0., height)]
                .into_iter()
                .map(|(col, row)| transform.apply(col, row))
                .collect();
            let corners = self.to_wgs84(&corners)?;

            let (min_x, max_x) = corners
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), c| {
                    (min.min(c.x), max.max(c.x))
                });
            let (min_y, max_y) = corners
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), c| {
                    (min.min(c.y), max.max(c.y))
                });
            Ok(GeoTransform::from([
                min_x,
                (max_x - min_x) / size.0 as f64,
                0.,
                max_y,
                0.,
                -(max_y - min_y) / size.1 as f64,
            ]))
        }

        fn band_type(&self) -> Result<GdalDataType> {
            if self.num_bands() == 0 {
                return Ok(GdalDataType::UInt8);
            }
            Ok(self.dataset.rasterband(1)?.band_type())
        }

        fn create_output(&self, destination: &Path, size: (usize, usize)) -> Result<GdalDataset> {
            let driver = DriverManager::get_driver_by_name(OUTPUT_DRIVER)?;
            let (width, height) = size;
            let bands = self.num_bands().max(1);
            let dataset = match self.band_type()? {
                GdalDataType::UInt8 => {
                    driver.create_with_band_type::<u8, _>(destination, width, height, bands)
                }
                GdalDataType::UInt16 => {
                    driver.create_with_band_type::<u16, _>(destination, width, height, bands)
                }
                GdalDataType::Int16 => {
                    driver.create_with_band_type::<i16, _>(destination, width, height, bands)
                }
                GdalDataType::UInt32 => {
                    driver.create_with_band_type::<u32, _>(destination, width, height, bands)
                }
                GdalDataType::Int32 => {
                    driver.create_with_band_type::<i32, _>(destination, width, height, bands)
                }
                GdalDataType::Float32 => {
                    driver.create_with_band_type::<f32, _>(destination, width, height, bands)
                }
                _ => driver.create_with_band_type::<f64, _>(destination, width, height, bands),
            }?;
            Ok(dataset)
        }
    }

    impl RasterFile for GdalFile {
        fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
            let dataset = GdalDataset::open(&path)?;
            debug!("opened {:?}", path.as_ref());
            Ok(GdalFile {
                path: path.as_ref().to_path_buf(),
                dataset,
            })
        }

        fn path(&self) -> &Path {
            &self.path
        }

        fn driver_description(&self) -> Result<String> {
            Ok(self.dataset.driver().description()?)
        }

        fn is_raster(&self) -> bool {
            self.dataset
                .driver()
                .metadata_item("DCAP_RASTER", "")
                .is_some_and(|capability| capability.eq_ignore_ascii_case("YES"))
        }

        fn size(&self) -> (usize, usize) {
            self.dataset.raster_size()
        }

        fn num_bands(&self) -> usize {
            self.dataset.raster_count()
        }

        fn crs_wkt(&self) -> Option<String> {
            self.spatial_ref().ok()?.to_pretty_wkt().ok()
        }

        fn transform(&self) -> Result<GeoTransform> {
            Ok(GeoTransform::from(self.dataset.geo_transform()?))
        }

        fn to_wgs84(&self, coords: &[Coord]) -> Result<Vec<Coord>> {
            let transform = self.wgs84_transform()?;
            let (mut xs, mut ys): (Vec<f64>, Vec<f64>) =
                coords.iter().map(|coord| coord.x_y()).unzip();
            transform.transform_coords(&mut xs, &mut ys, &mut [])?;
            Ok(xs.into_iter().zip(ys).map(Coord::from).collect())
        }

        fn reproject_to_wgs84(&self, destination: &Path) -> Result<()> {
            let size = self.transform()?.pixel_size_dimensions();
            let geo_transform = self.wgs84_geo_transform(size)?;
            info!(
                "reprojecting {:?} to EPSG:{WGS84_EPSG} as {:?} ({}x{})",
                self.path, destination, size.0, size.1
            );

            let mut output = self.create_output(destination, size)?;
            output.set_spatial_ref(&wgs84()?)?;
            output.set_geo_transform(&geo_transform.to_gdal())?;
            reproject(&self.dataset, &output)?;
            Ok(())
        }
    }
}
