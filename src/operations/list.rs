use std::{ffi::OsStr, fs, path::Path};

use log::debug;

use crate::{errors::Result, operations::stat};

pub const RASTER_EXTENSION: &str = "tif";

/// Names of the `.tif` entries of `directory`, in listing order.
///
/// The extension match is exact and case-sensitive.
pub fn list_rasters(directory: &Path) -> Result<Vec<String>> {
    stat(directory)?;
    let mut rasters = Vec::new();
    for entry in fs::read_dir(directory)? {
        let name = entry?.file_name();
        if Path::new(&name).extension() != Some(OsStr::new(RASTER_EXTENSION)) {
            continue;
        }
        match name.into_string() {
            Ok(name) => rasters.push(name),
            Err(name) => debug!("skipping non UTF-8 name {name:?}"),
        }
    }
    Ok(rasters)
}
