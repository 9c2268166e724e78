/// Which hemisphere letters apply to an angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Long,
    Lat,
}

impl Axis {
    fn hemisphere(&self, angle: f64) -> char {
        match (self, angle < 0.) {
            (Axis::Long, true) => 'W',
            (Axis::Long, false) => 'E',
            (Axis::Lat, true) => 'S',
            (Axis::Lat, false) => 'N',
        }
    }
}

/// Decimal degrees as `DDDdMM'SS.ss"H`, the layout of GDAL's `GDALDecToDMS`.
pub fn dec_to_dms(angle: f64, axis: Axis, precision: usize) -> String {
    if angle.is_nan() {
        return String::from("Invalid angle");
    }
    let epsilon = (0.5 / 3600.) * 0.1f64.powi(precision as i32);
    let abs_angle = angle.abs() + epsilon;
    if abs_angle > 361. {
        return String::from("Invalid angle");
    }

    let degrees = abs_angle.trunc();
    let minutes = ((abs_angle - degrees) * 60.).trunc();
    let mut seconds = abs_angle * 3600. - degrees * 3600. - minutes * 60.;
    if seconds > epsilon * 3600. {
        seconds -= epsilon * 3600.;
    }

    format!(
        "{:>3}d{:>2}'{:>width$.precision$}\"{}",
        degrees as i64,
        minutes as i64,
        seconds,
        axis.hemisphere(angle),
        width = precision + 3,
    )
}
