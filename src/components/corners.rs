use geo::Coord;

use crate::components::transforms::GeoTransform;

/// Named pixel-space reference points of a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    UpperLeft,
    UpperRight,
    BottomRight,
    BottomLeft,
    Center,
}

impl Corner {
    /// Report order.
    pub const ALL: [Corner; 5] = [
        Corner::UpperLeft,
        Corner::UpperRight,
        Corner::BottomRight,
        Corner::BottomLeft,
        Corner::Center,
    ];

    /// Label padded to a common width.
    pub fn label(&self) -> &'static str {
        match self {
            Corner::UpperLeft => "Upper Left  ",
            Corner::UpperRight => "Upper Right ",
            Corner::BottomRight => "Bottom Right",
            Corner::BottomLeft => "Bottom Left ",
            Corner::Center => "Center      ",
        }
    }

    /// (col, row) of this corner for a raster of `size` (width, height).
    pub fn pixel(&self, size: (usize, usize)) -> (f64, f64) {
        let (width, height) = (size.0 as f64, size.1 as f64);
        match self {
            Corner::UpperLeft => (0., 0.),
            Corner::UpperRight => (width, 0.),
            Corner::BottomRight => (width, height),
            Corner::BottomLeft => (0., height),
            Corner::Center => (width / 2., height / 2.),
        }
    }

    /// Georeferenced position, floored to two decimals.
    pub fn position(&self, size: (usize, usize), transform: &GeoTransform) -> Coord {
        let (col, row) = self.pixel(size);
        let coord = transform.apply(col, row);
        Coord {
            x: floor_hundredths(coord.x),
            y: floor_hundredths(coord.y),
        }
    }
}

fn floor_hundredths(value: f64) -> f64 {
    (value * 100.).floor() / 100.
}
