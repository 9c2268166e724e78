use geo::{AffineTransform, Coord};
use itertools::Itertools;
use shrinkwraprs::Shrinkwrap;

/// Pixel/line to georeferenced coordinates.
///
/// Built from the six GDAL coefficients
/// `[origin_x, pixel_width, row_rotation, origin_y, column_rotation, pixel_height]`.
#[derive(Shrinkwrap, Debug, Clone, Copy, PartialEq)]
pub struct GeoTransform(AffineTransform);

impl From<[f64; 6]> for GeoTransform {
    fn from(gdal_transform: [f64; 6]) -> Self {
        Self(AffineTransform::new(
            gdal_transform[1],
            gdal_transform[2],
            gdal_transform[0],
            gdal_transform[4],
            gdal_transform[5],
            gdal_transform[3],
        ))
    }
}

impl GeoTransform {
    pub fn to_gdal(&self) -> [f64; 6] {
        [
            self.xoff(),
            self.a(),
            self.b(),
            self.yoff(),
            self.d(),
            self.e(),
        ]
    }

    pub fn origin(&self) -> (f64, f64) {
        (self.xoff(), self.yoff())
    }

    pub fn pixel_size(&self) -> (f64, f64) {
        (self.a(), self.e())
    }

    /// Georeferenced position of pixel corner `(col, row)`.
    pub fn apply(&self, col: f64, row: f64) -> Coord {
        self.0.apply(Coord { x: col, y: row })
    }

    /// Target raster size derived from the pixel size.
    ///
    /// Rounds the absolute pixel width/height up, never below one pixel.
    /// This does not account for the source extent.
    pub fn pixel_size_dimensions(&self) -> (usize, usize) {
        let (width, height) = self.pixel_size();
        let dimension = |size: f64| (size.abs().ceil() as usize).max(1);
        (dimension(width), dimension(height))
    }
}

impl std::fmt::Display for GeoTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[ {} ]", self.to_gdal().iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn gdal_coefficients_survive_conversion() {
        let coefficients = [440720.0, 60.0, 0.5, 3751320.0, -0.25, -60.0];
        assert_eq!(GeoTransform::from(coefficients).to_gdal(), coefficients);
    }

    #[rstest]
    fn origin_and_pixel_size() {
        let transform = GeoTransform::from([10.0, 2.0, 0.0, 20.0, 0.0, -3.0]);
        assert_eq!(transform.origin(), (10.0, 20.0));
        assert_eq!(transform.pixel_size(), (2.0, -3.0));
    }

    #[rstest]
    #[case((0.0, 0.0), (100.0, 50.0))]
    #[case((4.0, 0.0), (108.0, 51.0))]
    #[case((0.0, 2.0), (100.5, 44.0))]
    #[case((4.0, 2.0), (108.5, 45.0))]
    fn applies_rotation_terms(#[case] pixel: (f64, f64), #[case] expected: (f64, f64)) {
        let transform = GeoTransform::from([100.0, 2.0, 0.25, 50.0, 0.25, -3.0]);
        assert_eq!(transform.apply(pixel.0, pixel.1).x_y(), expected);
    }

    #[rstest]
    #[case([0.0, 30.0, 0.0, 0.0, 0.0, -30.0], (30, 30))]
    #[case([0.0, 0.5, 0.0, 0.0, 0.0, -2.2], (1, 3))]
    #[case([0.0, 0.0001, 0.0, 0.0, 0.0, -0.0001], (1, 1))]
    fn pixel_size_dimensions(#[case] coefficients: [f64; 6], #[case] expected: (usize, usize)) {
        assert_eq!(
            GeoTransform::from(coefficients).pixel_size_dimensions(),
            expected
        );
    }

    #[rstest]
    fn displays_like_a_sequence() {
        let transform = GeoTransform::from([0.0, 1.0, 0.0, 0.0, 0.0, -1.0]);
        assert_eq!(transform.to_string(), "[ 0, 1, 0, 0, 0, -1 ]");
    }
}
