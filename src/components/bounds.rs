use geo::{BoundingRect, Coord, LineString, Rect};

use crate::errors::{Result, RastertoolError};

/// A line string as it arrives on the wire: `{"coordinates": [[x, y], ...]}`.
#[derive(serde::Deserialize, Debug)]
pub struct LineStringInput {
    coordinates: Vec<[f64; 2]>,
}

impl From<LineStringInput> for LineString {
    fn from(value: LineStringInput) -> Self {
        value
            .coordinates
            .into_iter()
            .map(|[x, y]| Coord { x, y })
            .collect()
    }
}

/// Axis aligned bounding box of a geometry.
#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl From<Rect> for Envelope {
    fn from(rect: Rect) -> Self {
        let (min_x, min_y) = rect.min().x_y();
        let (max_x, max_y) = rect.max().x_y();
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

impl Envelope {
    pub fn of(line_string: &LineString) -> Result<Self> {
        line_string
            .bounding_rect()
            .map(Envelope::from)
            .ok_or(RastertoolError::EmptyGeometry)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_slice(json.as_bytes())
    }

    /// Parses raw bytes, so invalid UTF-8 is a JSON error like any other malformed input.
    pub fn from_slice(json: &[u8]) -> Result<Self> {
        let input: LineStringInput = serde_json::from_slice(json)?;
        Self::of(&LineString::from(input))
    }
}
