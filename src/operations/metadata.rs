use std::{fs, io::Write, path::Path};

use geo::Coord;
use log::debug;

use crate::{
    components::{
        dms::{dec_to_dms, Axis},
        Corner, GeoTransform, RasterFile,
    },
    errors::{Result, RastertoolError},
    operations::for_each_raster,
};

/// Seconds precision of the printed DMS coordinates.
const DMS_PRECISION: usize = 2;

/// A corner position in the raster crs and, when available, in WGS84.
#[derive(Debug, Clone, PartialEq)]
pub struct CornerCoordinates {
    pub corner: Corner,
    pub position: Coord,
    pub lon_lat: Option<Coord>,
}

/// Everything the metadata report prints about one raster.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterInfo {
    pub driver: String,
    pub size: (usize, usize),
    pub num_bands: usize,
    pub crs_wkt: Option<String>,
    pub transform: GeoTransform,
    pub corners: Vec<CornerCoordinates>,
}

impl RasterInfo {
    pub fn read<F: RasterFile>(file: &F) -> Result<Self> {
        let size = file.size();
        let transform = file.transform()?;
        let crs_wkt = file.crs_wkt();

        let positions: Vec<Coord> = Corner::ALL
            .iter()
            .map(|corner| corner.position(size, &transform))
            .collect();
        let lon_lats: Vec<Option<Coord>> = match crs_wkt {
            Some(_) => file.to_wgs84(&positions)?.into_iter().map(Some).collect(),
            None => {
                debug!("{:?} has no crs, skipping WGS84 corners", file.path());
                vec![None; positions.len()]
            }
        };
        let corners = Corner::ALL
            .into_iter()
            .zip(positions)
            .zip(lon_lats)
            .map(|((corner, position), lon_lat)| CornerCoordinates {
                corner,
                position,
                lon_lat,
            })
            .collect();

        Ok(Self {
            driver: file.driver_description()?,
            size,
            num_bands: file.num_bands(),
            crs_wkt,
            transform,
            corners,
        })
    }

    pub fn write_report<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Driver: {}", self.driver)?;
        writeln!(out, "Size is {}, {}", self.size.0, self.size.1)?;
        writeln!(out, "Band count: {}", self.num_bands)?;
        writeln!(out, "Coordinate System is:")?;
        writeln!(out, "{}", self.crs_wkt.as_deref().unwrap_or_default())?;

        let (origin_x, origin_y) = self.transform.origin();
        writeln!(out, "Origin = ({origin_x}, {origin_y})")?;
        let (pixel_x, pixel_y) = self.transform.pixel_size();
        writeln!(out, "Pixel Size = ({pixel_x}, {pixel_y})")?;
        writeln!(out, "GeoTransform =")?;
        writeln!(out, "{}", self.transform)?;

        writeln!(out, "Corner Coordinates:")?;
        for CornerCoordinates {
            corner,
            position,
            lon_lat,
        } in &self.corners
        {
            write!(out, "{} ({}, {})", corner.label(), position.x, position.y)?;
            if let Some(lon_lat) = lon_lat {
                write!(
                    out,
                    " ({}, {})",
                    dec_to_dms(lon_lat.x, Axis::Long, DMS_PRECISION),
                    dec_to_dms(lon_lat.y, Axis::Lat, DMS_PRECISION)
                )?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

/// Opens `path` and checks its driver can read rasters.
///
/// A file the process cannot read fails with its I/O error.
pub fn open_raster<F: RasterFile>(path: &Path) -> Result<F> {
    let file = match F::open(path) {
        Ok(file) => file,
        Err(error) => {
            fs::File::open(path)?;
            debug!("could not open {path:?}: {error}");
            return Err(RastertoolError::NotARaster(path.to_path_buf()));
        }
    };
    if !file.is_raster() {
        return Err(RastertoolError::NotARaster(path.to_path_buf()));
    }
    Ok(file)
}

/// Prints the report for `path`, or for every raster in it if it is a directory.
pub fn display_metadata<F: RasterFile, W: Write>(path: &Path, out: &mut W) -> Result<()> {
    for_each_raster(path, |raster| {
        let file = open_raster::<F>(raster)?;
        RasterInfo::read(&file)?.write_report(out)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{backends::testing::*, GdalFile};
    use rstest::rstest;

    fn report(path: &Path) -> String {
        let mut out = Vec::new();
        display_metadata::<GdalFile, _>(path, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[rstest]
    fn writes_report_in_order() {
        let transform = GeoTransform::from([0., 1., 0., 0., 0., -1.]);
        let corners = Corner::ALL
            .into_iter()
            .map(|corner| CornerCoordinates {
                corner,
                position: corner.position((4, 2), &transform),
                lon_lat: Some(Coord { x: -12.5, y: 33.9025 }),
            })
            .collect();
        let info = RasterInfo {
            driver: "GTiff".into(),
            size: (4, 2),
            num_bands: 3,
            crs_wkt: Some("GEOGCS[\"WGS 84\"]".into()),
            transform,
            corners,
        };

        let mut out = Vec::new();
        info.write_report(&mut out).unwrap();
        let expected = "\
Driver: GTiff
Size is 4, 2
Band count: 3
Coordinate System is:
GEOGCS[\"WGS 84\"]
Origin = (0, 0)
Pixel Size = (1, -1)
GeoTransform =
[ 0, 1, 0, 0, 0, -1 ]
Corner Coordinates:
Upper Left   (0, 0) ( 12d30' 0.00\"W,  33d54' 9.00\"N)
Upper Right  (4, 0) ( 12d30' 0.00\"W,  33d54' 9.00\"N)
Bottom Right (4, -2) ( 12d30' 0.00\"W,  33d54' 9.00\"N)
Bottom Left  (0, -2) ( 12d30' 0.00\"W,  33d54' 9.00\"N)
Center       (2, -1) ( 12d30' 0.00\"W,  33d54' 9.00\"N)
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[rstest]
    fn report_of_utm_raster() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("utm.tif");
        write_geotiff(&path, (20, 10), UTM_TRANSFORM, Some(32611));

        let report = report(&path);
        assert!(report.starts_with("Driver: GTiff\nSize is 20, 10\n"));
        assert!(report.contains("Origin = (440720, 3751320)"));
        assert!(report.contains("Pixel Size = (60, -60)"));
        assert!(report.contains("Upper Left   (440720, 3751320) (117d38'"));
        assert!(report.contains("Bottom Right (441920, 3750720) (117d37'"));
        assert!(report.contains("W,  33d54'"));
    }

    #[rstest]
    fn report_without_crs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.tif");
        write_geotiff(&path, (8, 6), [0., 1., 0., 0., 0., -1.], None);

        let report = report(&path);
        assert!(report.contains("Coordinate System is:\n\nOrigin = (0, 0)\n"));
        assert!(report.contains("Center       (4, -3)\n"));
    }

    #[rstest]
    fn reports_every_raster_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_geotiff(&dir.path().join("a.tif"), (3, 3), UTM_TRANSFORM, Some(32611));
        write_geotiff(&dir.path().join("b.tif"), (5, 7), UTM_TRANSFORM, Some(32611));
        fs::write(dir.path().join("readme.txt"), "not a raster").unwrap();

        let report = report(dir.path());
        assert_eq!(report.matches("Driver: GTiff").count(), 2);
        assert!(report.contains("Size is 3, 3"));
        assert!(report.contains("Size is 5, 7"));
    }

    #[rstest]
    fn text_file_is_not_a_raster() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "just some words\n").unwrap();

        let mut out = Vec::new();
        let result = display_metadata::<GdalFile, _>(&path, &mut out);
        assert!(matches!(result, Err(RastertoolError::NotARaster(_))));
        assert!(out.is_empty());
    }

    #[rstest]
    fn vector_dataset_is_not_a_raster() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("features.json");
        fs::write(&path, FEATURE_COLLECTION).unwrap();

        assert!(!GdalFile::open(&path).unwrap().is_raster());

        let mut out = Vec::new();
        let result = display_metadata::<GdalFile, _>(&path, &mut out);
        assert!(matches!(result, Err(RastertoolError::NotARaster(_))));
        assert!(out.is_empty());
    }

    #[cfg(unix)]
    #[rstest]
    fn unreadable_file_keeps_its_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dangling.tif");
        std::os::unix::fs::symlink(dir.path().join("gone.tif"), &path).unwrap();

        let result = open_raster::<GdalFile>(&path);
        assert!(matches!(result, Err(RastertoolError::IoError(_))));
    }
}
